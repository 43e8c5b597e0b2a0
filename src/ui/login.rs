//! Login screen.

use eframe::egui::{self, Key, Margin, RichText, Ui};
use egui_phosphor::regular::SIGN_IN;

use super::app::App;
use super::components::{colors, primary_button_with_icon};

/// Show the login screen.
pub fn show(app: &mut App, ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.25);

        ui.label(RichText::new("CrewDesk").size(32.0).strong());
        ui.add_space(5.0);
        ui.label(RichText::new("Employee Directory Admin").size(14.0).weak());

        ui.add_space(30.0);

        egui::Frame::group(ui.style()).inner_margin(Margin::same(20)).show(ui, |ui| {
            ui.set_width(300.0);

            egui::Grid::new("login_grid")
                .num_columns(2)
                .spacing([15.0, 10.0])
                .show(ui, |ui| {
                    ui.label("Email:");
                    ui.add(
                        egui::TextEdit::singleline(&mut app.login_form.email)
                            .desired_width(180.0)
                            .hint_text("you@example.com"),
                    );
                    ui.end_row();

                    ui.label("Password:");
                    ui.add(
                        egui::TextEdit::singleline(&mut app.login_form.password)
                            .desired_width(180.0)
                            .password(true),
                    );
                    ui.end_row();
                });

            ui.add_space(15.0);

            let submit_clicked = primary_button_with_icon(ui, SIGN_IN, "Login").clicked();
            let enter_pressed = ui.input(|i| i.key_pressed(Key::Enter));

            if submit_clicked || enter_pressed {
                app.submit_login();
            }

            if let Some(ref error) = app.login_form.error {
                ui.add_space(10.0);
                ui.colored_label(colors::ERROR, error);
            }
        });
    });
}
