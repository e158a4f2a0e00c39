//! App module - contains the main application state and logic

mod modals;
mod sync;
mod views;

use crate::api::{HttpTaskApi, TaskApi};
use crate::board::{ApiEvent, Board};
use crate::settings::Settings;
use crate::theme;
use eframe::egui;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) board: Board,
    pub(crate) api: Arc<dyn TaskApi>,
    pub(crate) runtime: tokio::runtime::Runtime,
    // Completed requests, drained once per frame
    pub(crate) events_tx: mpsc::UnboundedSender<ApiEvent>,
    pub(crate) events_rx: mpsc::UnboundedReceiver<ApiEvent>,
    pub(crate) load_started: bool,
    pub(crate) logo_texture: Option<egui::TextureHandle>,
    // Settings
    pub(crate) settings: Settings,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        data_dir: PathBuf,
    ) -> std::io::Result<Self> {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let api_url = settings.api_url_or_default().to_string();
        info!(api_url = %api_url, "Using task endpoint");
        let api: Arc<dyn TaskApi> = Arc::new(HttpTaskApi::new(api_url));

        let runtime = tokio::runtime::Runtime::new()?;
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        Ok(Self {
            board: Board::new(),
            api,
            runtime,
            events_tx,
            events_rx,
            load_started: false,
            logo_texture: None,
            settings,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        })
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            ..self.settings.clone()
        };
        settings.save(&self.data_dir);
    }
}
