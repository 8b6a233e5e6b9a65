//! Overlay editors
//!
//! Every editor view follows the same cycle each frame: load the overlay
//! from the store into a [`Draft`], let the widgets edit it, then commit it.
//! Committing an unchanged draft is a no-op, so idle frames never touch the
//! store.

pub mod verse;

use std::marker::PhantomData;
use tracing::debug;

use crate::overlay::OverlayValue;
use crate::shared::{OverlayContext, StoreError};

pub use verse::{PlaceholderVerseFetcher, VerseFetcher};

/// Staging copy of one overlay value
#[derive(Debug, Clone)]
pub struct Draft<T> {
    original: T,
    /// Value the widgets edit
    pub value: T,
}

impl<T: OverlayValue> Draft<T> {
    pub fn new(value: T) -> Self {
        Self {
            original: value.clone(),
            value,
        }
    }

    pub fn is_changed(&self) -> bool {
        self.original != self.value
    }
}

/// Store access for one overlay kind
pub struct OverlayEditor<T> {
    ctx: OverlayContext,
    _kind: PhantomData<fn() -> T>,
}

impl<T: OverlayValue> OverlayEditor<T> {
    pub fn new(ctx: OverlayContext) -> Self {
        Self {
            ctx,
            _kind: PhantomData,
        }
    }

    /// Current store value as a fresh draft
    pub fn load(&self) -> Result<Draft<T>, StoreError> {
        Ok(Draft::new(self.ctx.get::<T>()?))
    }

    /// Write the draft back if it changed; returns whether it did
    pub fn commit(&self, draft: Draft<T>) -> Result<bool, StoreError> {
        if !draft.is_changed() {
            return Ok(false);
        }
        self.ctx.replace(draft.value)?;
        Ok(true)
    }

    /// Restore the overlay's reset values
    pub fn reset(&self) -> Result<T, StoreError> {
        debug!("Resetting {} overlay", T::KIND);
        self.ctx.update::<T, _>(|value| value.reset())
    }

    pub fn context(&self) -> &OverlayContext {
        &self.ctx
    }
}

impl<T> Clone for OverlayEditor<T> {
    fn clone(&self) -> Self {
        Self {
            ctx: self.ctx.clone(),
            _kind: PhantomData,
        }
    }
}
