//! Running board requests on the runtime and feeding results back

use super::App;
use crate::board::{DragEnd, Request};
use eframe::egui;
use std::sync::Arc;
use tracing::debug;

impl App {
    /// Spawn a request; its `ApiEvent` arrives through the channel and a
    /// repaint is requested so the next frame picks it up.
    fn dispatch(&self, request: Request, ctx: &egui::Context) {
        let api = Arc::clone(&self.api);
        let tx = self.events_tx.clone();
        let ctx = ctx.clone();

        self.runtime.spawn(async move {
            let event = request.execute(api.as_ref()).await;
            if tx.send(event).is_err() {
                debug!("Board dropped before response arrived");
            }
            ctx.request_repaint();
        });
    }

    pub(crate) fn poll_api_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.board.apply(event);
        }
    }

    pub(crate) fn start_initial_load(&mut self, ctx: &egui::Context) {
        if self.load_started {
            return;
        }
        self.load_started = true;
        let request = self.board.load();
        self.dispatch(request, ctx);
    }

    pub(crate) fn submit_new_task(&mut self, ctx: &egui::Context) {
        if let Some(request) = self.board.submit_form() {
            self.dispatch(request, ctx);
        }
    }

    pub(crate) fn finish_drag(&mut self, drag: DragEnd, ctx: &egui::Context) {
        if let Some(request) = self.board.drag_ended(drag) {
            self.dispatch(request, ctx);
        }
    }
}
