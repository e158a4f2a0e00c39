//! Modal dialogs (add task form)

use super::App;
use crate::theme;
use crate::types::TaskStatus;
use crate::ui::components;
use eframe::egui;

impl App {
    pub(crate) fn render_task_form(&mut self, ctx: &egui::Context) {
        if !self.board.form.open {
            return;
        }

        let mut submit = false;
        let mut cancel = false;

        let modal_area = egui::Modal::default_area(egui::Id::new("add_task_modal"))
            .default_width(theme::MODAL_WIDTH + theme::SPACING_XL * 2.0);
        let modal = egui::Modal::new(egui::Id::new("add_task_modal"))
            .area(modal_area)
            .backdrop_color(egui::Color32::from_black_alpha(120))
            .frame(theme::modal_frame());

        let modal_response = modal.show(ctx, |ui| {
            ui.set_min_width(theme::MODAL_WIDTH);
            ui.set_max_width(theme::MODAL_WIDTH);
            let form = &mut self.board.form;

            // Title bar with close button
            ui.horizontal(|ui| {
                ui.add(
                    egui::Label::new(egui::RichText::new("Add Task").size(theme::FONT_HEADING).strong())
                        .selectable(false),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if components::close_button(ui) {
                        cancel = true;
                    }
                });
            });
            ui.add_space(theme::SPACING_SM);
            ui.separator();
            ui.add_space(theme::SPACING_MD);

            let title_id = egui::Id::new("add_task_title");
            let title = components::text_field(ui, &mut form.title, "Title", title_id);
            if ui.memory(|m| m.focused().is_none()) {
                title.request_focus();
            }
            if title.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submit = true;
            }
            ui.add_space(theme::SPACING_SM);

            components::text_area(ui, &mut form.description, "Description (optional)");
            ui.add_space(theme::SPACING_SM);

            egui::ComboBox::from_id_salt("add_task_status")
                .selected_text(form.status.label())
                .width(ui.available_width())
                .show_ui(ui, |ui| {
                    for status in TaskStatus::ALL {
                        ui.selectable_value(&mut form.status, status, status.label());
                    }
                });

            ui.add_space(theme::SPACING_XL);
            ui.horizontal(|ui| {
                let save = ui.add_enabled(
                    form.can_submit(),
                    theme::button_save(format!("{}  Save", egui_phosphor::regular::CHECK)),
                );
                if save.clicked() {
                    submit = true;
                }
                if form.submitting {
                    ui.spinner();
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.add(theme::button("Cancel")).clicked() {
                        cancel = true;
                    }
                });
            });
        });

        // Escape or click on the backdrop
        if modal_response.should_close() {
            cancel = true;
        }

        if submit {
            self.submit_new_task(ctx);
        } else if cancel {
            self.board.form.cancel();
        }
    }
}
