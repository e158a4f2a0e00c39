//! Reusable UI components
//!
//! Standalone widgets used by the board views and the task form.

use crate::theme;
use crate::types::{Task, TaskStatus};
use eframe::egui;

/// Column title with a colored task count badge
pub fn column_header(ui: &mut egui::Ui, status: TaskStatus, count: usize) {
    let (badge_bg, badge_fg) = theme::status_colors(status);
    ui.horizontal(|ui| {
        ui.add(
            egui::Label::new(
                egui::RichText::new(status.label())
                    .size(theme::FONT_HEADING)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            )
            .selectable(false),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            egui::Frame::new()
                .fill(badge_bg)
                .corner_radius(theme::RADIUS_DEFAULT)
                .inner_margin(egui::Margin::symmetric(8, 2))
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(count.to_string())
                            .size(theme::FONT_SMALL)
                            .color(badge_fg),
                    );
                });
        });
    });
}

/// Card body for one task. `moving` marks a card whose status update is in flight.
pub fn task_card(ui: &mut egui::Ui, task: &Task, moving: bool) -> egui::Response {
    theme::card_frame(moving)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let title_color = if moving { theme::TEXT_MUTED } else { theme::TEXT_PRIMARY };
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(&task.title)
                            .size(theme::FONT_BODY)
                            .strong()
                            .color(title_color),
                    )
                    .wrap()
                    .selectable(false),
                );
                if moving {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.spinner();
                    });
                }
            });
            if !task.description.is_empty() {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(&task.description)
                            .size(theme::FONT_SMALL)
                            .color(theme::TEXT_MUTED),
                    )
                    .wrap()
                    .selectable(false),
                );
            }
        })
        .response
}

/// Single-line text field styled like the rest of the inputs
pub fn text_field(ui: &mut egui::Ui, value: &mut String, hint: &str, id: egui::Id) -> egui::Response {
    theme::input_frame()
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::singleline(value)
                    .id(id)
                    .hint_text(hint)
                    .frame(false)
                    .desired_width(ui.available_width()),
            )
        })
        .inner
}

/// Multi-line text area styled like [`text_field`]
pub fn text_area(ui: &mut egui::Ui, value: &mut String, hint: &str) -> egui::Response {
    theme::input_frame()
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(value)
                    .hint_text(hint)
                    .frame(false)
                    .desired_rows(4)
                    .desired_width(ui.available_width()),
            )
        })
        .inner
}

/// Small X button in a modal title bar. Returns true if clicked.
pub fn close_button(ui: &mut egui::Ui) -> bool {
    let size = 24.0;
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::click());
    let color = if response.hovered() {
        ui.painter().rect_filled(rect, theme::RADIUS_DEFAULT, theme::BG_SURFACE);
        theme::STATUS_ERROR
    } else {
        theme::TEXT_DIM
    };
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        egui_phosphor::regular::X,
        egui::FontId::proportional(16.0),
        color,
    );
    response.clicked()
}
