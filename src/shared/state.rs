//! Overlay state store shared by editors and the preview canvas
//!
//! The [`OverlayProvider`] owns the store for one editing session. Consumers
//! hold [`OverlayContext`] handles, which stop working once the provider is
//! dropped.

use crossbeam_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use std::sync::{Arc, Weak};
use thiserror::Error;
use tracing::{debug, trace};

use crate::overlay::{OverlaySet, OverlayValue};
use crate::shared::messages::StoreNotification;

/// Errors raised by store handles
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The handle outlived the provider that owned the store
    #[error("overlay state accessed outside of its provider")]
    OutsideProvider,
}

/// Current overlay values plus change bookkeeping
#[derive(Debug, Default)]
pub struct OverlayStore {
    overlays: OverlaySet,
    /// Bumped on every replace
    revision: u64,
    subscribers: Vec<Sender<StoreNotification>>,
}

impl OverlayStore {
    pub fn new(overlays: OverlaySet) -> Self {
        Self {
            overlays,
            revision: 0,
            subscribers: Vec::new(),
        }
    }

    pub fn get<T: OverlayValue>(&self) -> &T {
        T::slot(&self.overlays)
    }

    /// Swap in a new value for `T`'s overlay and notify subscribers
    pub fn replace<T: OverlayValue>(&mut self, value: T) -> u64 {
        *T::slot_mut(&mut self.overlays) = value;
        self.revision += 1;
        debug!("Replaced {} overlay (revision {})", T::KIND, self.revision);

        let notification = StoreNotification {
            kind: T::KIND,
            revision: self.revision,
        };
        // Drop subscribers whose receiver is gone
        self.subscribers.retain(|tx| tx.send(notification).is_ok());
        self.revision
    }

    pub fn overlays(&self) -> &OverlaySet {
        &self.overlays
    }

    #[cfg(test)]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn subscribe(&mut self) -> Receiver<StoreNotification> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        trace!("Store subscriber added ({} total)", self.subscribers.len());
        rx
    }

    #[cfg(test)]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

/// Owner of the overlay store for one editing session
pub struct OverlayProvider {
    store: Arc<RwLock<OverlayStore>>,
}

impl OverlayProvider {
    pub fn new(overlays: OverlaySet) -> Self {
        Self {
            store: Arc::new(RwLock::new(OverlayStore::new(overlays))),
        }
    }

    /// Hand out a handle for an editor, the canvas or the shell
    pub fn context(&self) -> OverlayContext {
        OverlayContext {
            store: Arc::downgrade(&self.store),
        }
    }
}

impl Default for OverlayProvider {
    fn default() -> Self {
        Self::new(OverlaySet::default())
    }
}

/// Handle to the store held by every consumer
#[derive(Clone)]
pub struct OverlayContext {
    store: Weak<RwLock<OverlayStore>>,
}

impl OverlayContext {
    fn store(&self) -> Result<Arc<RwLock<OverlayStore>>, StoreError> {
        self.store.upgrade().ok_or(StoreError::OutsideProvider)
    }

    /// Current value of `T`'s overlay
    pub fn get<T: OverlayValue>(&self) -> Result<T, StoreError> {
        let store = self.store()?;
        let value = store.read().get::<T>().clone();
        Ok(value)
    }

    /// Replace `T`'s overlay; returns the new revision
    pub fn replace<T: OverlayValue>(&self, value: T) -> Result<u64, StoreError> {
        let store = self.store()?;
        let revision = store.write().replace(value);
        Ok(revision)
    }

    /// Clone the current value, apply `f` to the clone and replace.
    ///
    /// Returns the value that was stored.
    pub fn update<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        T: OverlayValue,
        F: FnOnce(&mut T),
    {
        let mut draft = self.get::<T>()?;
        f(&mut draft);
        self.replace(draft.clone())?;
        Ok(draft)
    }

    /// Run `f` against all overlay values under one read lock
    pub fn read<R>(&self, f: impl FnOnce(&OverlaySet) -> R) -> Result<R, StoreError> {
        let store = self.store()?;
        let guard = store.read();
        Ok(f(guard.overlays()))
    }

    pub fn snapshot(&self) -> Result<OverlaySet, StoreError> {
        self.read(OverlaySet::clone)
    }

    #[cfg(test)]
    pub fn revision(&self) -> Result<u64, StoreError> {
        let store = self.store()?;
        let revision = store.read().revision();
        Ok(revision)
    }

    /// Receive a [`StoreNotification`] for every replace from now on
    pub fn subscribe(&self) -> Result<Receiver<StoreNotification>, StoreError> {
        let store = self.store()?;
        let rx = store.write().subscribe();
        Ok(rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::{
        BibleOverlay, BibleVersion, ImageOverlay, LyricsOverlay, OverlayKind, TickerOverlay,
    };

    #[test]
    fn test_replace_then_get_returns_equal_value() {
        let provider = OverlayProvider::default();
        let ctx = provider.context();

        let mut bible = ctx.get::<BibleOverlay>().unwrap();
        bible.verse_reference = "Psalm 23:1".to_string();
        bible.version = BibleVersion::ESV;
        ctx.replace(bible.clone()).unwrap();

        assert_eq!(ctx.get::<BibleOverlay>().unwrap(), bible);
    }

    #[test]
    fn test_replace_only_touches_its_own_kind() {
        let provider = OverlayProvider::default();
        let ctx = provider.context();
        let before = ctx.snapshot().unwrap();

        ctx.update::<TickerOverlay, _>(|ticker| ticker.set_scroll_speed(9))
            .unwrap();

        let after = ctx.snapshot().unwrap();
        assert_eq!(after.ticker.scroll_speed(), 9);
        assert_eq!(after.bible, before.bible);
        assert_eq!(after.lyrics, before.lyrics);
        assert_eq!(after.presenter, before.presenter);
        assert_eq!(after.image, before.image);
    }

    #[test]
    fn test_subscribers_are_notified_with_kind_and_revision() {
        let provider = OverlayProvider::default();
        let ctx = provider.context();
        let rx = ctx.subscribe().unwrap();

        ctx.update::<LyricsOverlay, _>(|lyrics| {
            lyrics.next_verse();
        })
        .unwrap();
        ctx.update::<ImageOverlay, _>(|image| image.enabled = false)
            .unwrap();

        let first = rx.try_recv().unwrap();
        let second = rx.try_recv().unwrap();
        assert_eq!(first.kind, OverlayKind::Lyrics);
        assert_eq!(first.revision, 1);
        assert_eq!(second.kind, OverlayKind::Image);
        assert_eq!(second.revision, 2);
        assert!(rx.try_recv().is_err());
        assert_eq!(ctx.revision().unwrap(), 2);
    }

    #[test]
    fn test_dropped_subscribers_are_pruned() {
        let mut store = OverlayStore::default();
        let rx = store.subscribe();
        let _kept = store.subscribe();
        drop(rx);

        store.replace(TickerOverlay::default());
        assert_eq!(store.subscriber_count(), 1);
    }

    #[test]
    fn test_context_outside_provider_fails() {
        let provider = OverlayProvider::default();
        let ctx = provider.context();
        drop(provider);

        assert_eq!(
            ctx.get::<BibleOverlay>().unwrap_err(),
            StoreError::OutsideProvider
        );
        assert_eq!(
            ctx.replace(TickerOverlay::default()).unwrap_err(),
            StoreError::OutsideProvider
        );
        assert!(ctx.subscribe().is_err());
    }
}
