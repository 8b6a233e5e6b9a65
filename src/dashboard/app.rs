//! Dashboard application entry point

use crossbeam_channel::Receiver;
use eframe::egui;
use egui::RichText;
use tracing::{debug, error, info};

use crate::config::AppConfig;
use crate::dashboard::components::{render_navbar, Toasts};
use crate::dashboard::state::DashboardState;
use crate::dashboard::theme::{self, ThemeColors};
use crate::dashboard::views::image::accept_dropped_file;
use crate::dashboard::views::{
    render_bible_view, render_image_view, render_lyrics_view, render_presenter_view,
    render_ticker_view,
};
use crate::editor::{OverlayEditor, PlaceholderVerseFetcher, VerseFetcher};
use crate::media::ImageLibrary;
use crate::overlay::{
    BibleOverlay, ImageOverlay, LyricsOverlay, OverlaySet, PresenterOverlay, TickerOverlay,
};
use crate::preview::canvas::render_unavailable;
use crate::preview::{InputSurface, PreviewCanvas};
use crate::shared::{OverlayContext, OverlayProvider, StoreError, StoreNotification};

/// Share of the window width given to the preview panel
const PREVIEW_FRACTION: f32 = 0.35;

/// The main dashboard application
pub struct DashboardApp {
    /// Owns the overlay store for the lifetime of the window
    _provider: OverlayProvider,
    overlays: OverlayContext,
    bible: OverlayEditor<BibleOverlay>,
    lyrics: OverlayEditor<LyricsOverlay>,
    presenter: OverlayEditor<PresenterOverlay>,
    ticker: OverlayEditor<TickerOverlay>,
    image: OverlayEditor<ImageOverlay>,
    preview: PreviewCanvas,
    library: ImageLibrary,
    fetcher: Box<dyn VerseFetcher>,
    store_events: Receiver<StoreNotification>,
    /// Dashboard-specific state
    dashboard_state: DashboardState,
    toasts: Toasts,
    config: AppConfig,
    /// Whether theme has been applied
    theme_applied: bool,
    /// Set once the store became unreachable
    failed: bool,
}

impl DashboardApp {
    /// Create a new dashboard application
    pub fn new(egui_ctx: egui::Context, config: AppConfig) -> Result<Self, StoreError> {
        let provider = OverlayProvider::new(OverlaySet::default());
        let overlays = provider.context();
        let store_events = overlays.subscribe()?;
        let preview = PreviewCanvas::new(egui_ctx, config.preview.logical_size(), InputSurface::new());

        Ok(Self {
            bible: OverlayEditor::new(overlays.clone()),
            lyrics: OverlayEditor::new(overlays.clone()),
            presenter: OverlayEditor::new(overlays.clone()),
            ticker: OverlayEditor::new(overlays.clone()),
            image: OverlayEditor::new(overlays.clone()),
            _provider: provider,
            overlays,
            preview,
            library: ImageLibrary::new(),
            fetcher: Box::new(PlaceholderVerseFetcher),
            store_events,
            dashboard_state: DashboardState::new(config.images.default_size()),
            toasts: Toasts::default(),
            config,
            theme_applied: false,
            failed: false,
        })
    }

    /// Get native options for the dashboard window
    pub fn options(config: &AppConfig) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([config.general.window_width, config.general.window_height])
                .with_min_inner_size([960.0, 600.0])
                .with_title("Overlay Studio")
                .with_drag_and_drop(true),
            ..Default::default()
        }
    }

    /// Wake up for store changes made outside this frame's input
    fn drain_store_events(&self, ctx: &egui::Context) {
        let mut changed = false;
        while let Ok(note) = self.store_events.try_recv() {
            debug!("{} overlay changed (revision {})", note.kind, note.revision);
            changed = true;
        }
        if changed {
            ctx.request_repaint();
        }
    }

    /// Route files dragged onto the window to the image editor
    fn handle_file_drops(&mut self, ctx: &egui::Context) {
        let (hovering, dropped) = ctx.input(|i| (!i.raw.hovered_files.is_empty(), i.raw.dropped_files.clone()));
        self.dashboard_state.image.drop_hover = hovering;

        let Some(file) = dropped.first() else {
            return;
        };
        if dropped.len() > 1 {
            info!("{} files dropped, using the first", dropped.len());
        }
        accept_dropped_file(&mut self.dashboard_state.image, &mut self.library, file);
    }

    fn show(&mut self, ctx: &egui::Context) -> Result<(), StoreError> {
        self.drain_store_events(ctx);
        self.handle_file_drops(ctx);

        egui::TopBottomPanel::top("navbar")
            .exact_height(52.0)
            .frame(egui::Frame::none().fill(ThemeColors::BG_DARK).inner_margin(8.0))
            .show(ctx, |ui| {
                render_navbar(ui, &self.config.general.overlay_url, &mut self.toasts);
            });

        let preview_width = ctx.screen_rect().width() * PREVIEW_FRACTION;
        egui::SidePanel::right("preview")
            .resizable(false)
            .exact_width(preview_width)
            .show(ctx, |ui| {
                ui.add_space(16.0);
                ui.heading(RichText::new("Live Preview").size(18.0).strong());
                ui.add_space(8.0);
                self.preview.show(ui, &self.overlays, &mut self.library)
            })
            .inner?;

        egui::CentralPanel::default()
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        egui::Frame::none()
                            .inner_margin(16.0)
                            .show(ui, |ui| self.render_editors(ui))
                            .inner
                    })
                    .inner
            })
            .inner?;

        self.toasts.show(ctx);
        Ok(())
    }

    fn render_editors(&mut self, ui: &mut egui::Ui) -> Result<(), StoreError> {
        render_bible_view(ui, &self.bible, self.fetcher.as_ref())?;
        ui.add_space(16.0);
        render_lyrics_view(ui, &mut self.dashboard_state.lyrics, &self.lyrics)?;
        ui.add_space(16.0);
        render_presenter_view(ui, &self.presenter)?;
        ui.add_space(16.0);
        render_ticker_view(ui, &self.ticker)?;
        ui.add_space(16.0);
        render_image_view(
            ui,
            &mut self.dashboard_state.image,
            &self.image,
            &mut self.library,
            &self.config.images,
        )
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply theme once
        if !self.theme_applied {
            theme::apply_theme(ctx);
            self.theme_applied = true;
        }

        if self.failed {
            egui::CentralPanel::default().show(ctx, render_unavailable);
            return;
        }

        if let Err(e) = self.show(ctx) {
            error!("Overlay store unavailable: {}", e);
            self.failed = true;
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

/// Run the dashboard application
pub fn run_dashboard(config: AppConfig) -> Result<(), eframe::Error> {
    let options = DashboardApp::options(&config);
    eframe::run_native(
        "Overlay Studio",
        options,
        Box::new(|cc| {
            let app = DashboardApp::new(cc.egui_ctx.clone(), config)?;
            Ok(Box::new(app))
        }),
    )
}
