//! View rendering (header, status columns, cards)

use super::App;
use crate::board::DragEnd;
use crate::theme;
use crate::types::{Task, TaskId, TaskStatus};
use crate::ui::components;
use crate::utils;
use eframe::egui;
use egui_extras::{Size, StripBuilder};

/// What a card carries while it is being dragged
#[derive(Clone)]
struct CardPayload {
    task_id: TaskId,
    source: TaskStatus,
}

impl App {
    pub(crate) fn render_header(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.horizontal_centered(|ui| {
            let texture = self.logo_texture.get_or_insert_with(|| {
                let size = (theme::LOGO_SIZE * ctx.pixels_per_point() * 2.0) as u32;
                let image = match utils::rasterize_icon(size) {
                    Some((pixels, w, h)) => {
                        egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &pixels)
                    }
                    None => egui::ColorImage::new([1, 1], egui::Color32::TRANSPARENT),
                };
                ctx.load_texture("logo", image, egui::TextureOptions::LINEAR)
            });
            ui.image(egui::load::SizedTexture::new(
                texture.id(),
                egui::vec2(theme::LOGO_SIZE, theme::LOGO_SIZE),
            ));

            ui.add(
                egui::Label::new(
                    egui::RichText::new("Task Management")
                        .size(theme::FONT_TITLE)
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                )
                .selectable(false),
            );

            if self.board.is_loading() {
                ui.spinner();
                ui.label(egui::RichText::new("Loading tasks...").color(theme::TEXT_DIM));
            } else {
                let count = self.board.tasks().len();
                let noun = if count == 1 { "task" } else { "tasks" };
                ui.label(
                    egui::RichText::new(format!("{} {}", count, noun))
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_DIM),
                );
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let add = ui
                    .add(theme::button_accent(format!("{}  Add New Task", egui_phosphor::regular::PLUS)))
                    .on_hover_text("Create a task");
                if add.clicked() {
                    self.board.form.show();
                }
            });
        });
    }

    /// Three equal columns; a card dropped on one of them becomes a status update.
    pub(crate) fn render_board(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let mut drag_end: Option<DragEnd> = None;

        StripBuilder::new(ui)
            .sizes(Size::remainder(), TaskStatus::ALL.len())
            .horizontal(|mut strip| {
                for status in TaskStatus::ALL {
                    strip.cell(|ui| {
                        if let Some(drag) = self.render_column(ui, status) {
                            drag_end = Some(drag);
                        }
                    });
                }
            });

        if let Some(drag) = drag_end {
            self.finish_drag(drag, ctx);
        }
    }

    fn render_column(&self, ui: &mut egui::Ui, status: TaskStatus) -> Option<DragEnd> {
        let (_, dropped) = ui.dnd_drop_zone::<CardPayload, ()>(theme::column_frame(), |ui| {
            ui.set_min_width(ui.available_width());
            ui.set_min_height(ui.available_height().max(theme::COLUMN_MIN_HEIGHT));

            components::column_header(ui, status, self.board.column_len(status));
            ui.add_space(theme::SPACING_MD);

            egui::ScrollArea::vertical()
                .id_salt(("column", status.as_str()))
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.spacing_mut().item_spacing.y = theme::SPACING_MD;
                    for task in self.board.column(status) {
                        self.render_card(ui, task);
                    }
                });
        });

        dropped.map(|payload| DragEnd {
            task_id: payload.task_id.clone(),
            source: payload.source,
            destination: Some(status),
        })
    }

    fn render_card(&self, ui: &mut egui::Ui, task: &Task) {
        if self.board.is_moving(&task.id) {
            components::task_card(ui, task, true);
            return;
        }

        let id = egui::Id::new(("task_card", &task.id));
        let payload = CardPayload {
            task_id: task.id.clone(),
            source: task.status,
        };
        let response = ui
            .dnd_drag_source(id, payload, |ui| components::task_card(ui, task, false))
            .response;
        if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
        }
    }
}
