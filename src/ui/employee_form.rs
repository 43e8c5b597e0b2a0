//! Modal create/edit employee form.

use eframe::egui::{self, ScrollArea};
use egui_phosphor::regular::IMAGE;

use crate::form::{Field, parse_flexible_date};
use crate::models::{Gender, STATES};

use super::app::App;
use super::components::{colors, field_error, primary_button_with_icon, styled_button, styled_button_with_icon};

/// Show the employee form dialog.
pub fn show(app: &mut App, ctx: &egui::Context) {
    let title = if app.form.is_editing() {
        "Edit Employee"
    } else {
        "Add New Employee"
    };

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .default_width(450.0)
        .max_height(550.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(10.0);

            ScrollArea::vertical().max_height(450.0).show(ui, |ui| {
                egui::Grid::new("emp_form_grid")
                    .num_columns(2)
                    .spacing([20.0, 10.0])
                    .show(ui, |ui| {
                        ui.label("Full Name:");
                        ui.vertical(|ui| {
                            let response = ui.add(
                                egui::TextEdit::singleline(&mut app.form.draft.name)
                                    .desired_width(250.0)
                                    .hint_text("Enter full name"),
                            );
                            if response.changed() {
                                app.form.draft.clear_error(Field::Name);
                            }
                            field_error(ui, &app.form.draft, Field::Name);
                        });
                        ui.end_row();

                        ui.label("Gender:");
                        ui.vertical(|ui| {
                            egui::ComboBox::from_id_salt("emp_form_gender")
                                .width(150.0)
                                .selected_text(app.form.draft.gender.map(|g| g.label()).unwrap_or("Select Gender"))
                                .show_ui(ui, |ui| {
                                    for gender in Gender::ALL {
                                        if ui
                                            .selectable_label(app.form.draft.gender == Some(gender), gender.label())
                                            .clicked()
                                        {
                                            app.form.draft.gender = Some(gender);
                                            app.form.draft.clear_error(Field::Gender);
                                        }
                                    }
                                });
                            field_error(ui, &app.form.draft, Field::Gender);
                        });
                        ui.end_row();

                        ui.label("State:");
                        ui.vertical(|ui| {
                            egui::ComboBox::from_id_salt("emp_form_state")
                                .width(200.0)
                                .selected_text(app.form.draft.state.as_deref().unwrap_or("Select State"))
                                .show_ui(ui, |ui| {
                                    for state in STATES {
                                        if ui
                                            .selectable_label(app.form.draft.state.as_deref() == Some(state), state)
                                            .clicked()
                                        {
                                            app.form.draft.state = Some(state.to_string());
                                            app.form.draft.clear_error(Field::State);
                                        }
                                    }
                                });
                            field_error(ui, &app.form.draft, Field::State);
                        });
                        ui.end_row();

                        ui.label("Date of Birth:");
                        ui.vertical(|ui| {
                            // Red text while the input does not parse
                            let is_valid =
                                app.form.draft.dob_input.is_empty() || app.form.draft.dob.is_some();
                            let text_color = if is_valid {
                                ui.visuals().text_color()
                            } else {
                                colors::ERROR
                            };

                            let response = ui.add(
                                egui::TextEdit::singleline(&mut app.form.draft.dob_input)
                                    .desired_width(120.0)
                                    .hint_text("YYYY-MM-DD")
                                    .text_color(text_color),
                            );

                            if response.changed() {
                                app.form.draft.dob = parse_flexible_date(&app.form.draft.dob_input);
                                app.form.draft.clear_error(Field::Dob);
                            }

                            if !is_valid {
                                ui.colored_label(colors::ERROR, "Invalid date format");
                            } else {
                                ui.weak("Format: YYYY-MM-DD");
                            }
                            field_error(ui, &app.form.draft, Field::Dob);
                        });
                        ui.end_row();

                        ui.label("Status:");
                        ui.horizontal(|ui| {
                            ui.radio_value(&mut app.form.draft.active, true, "Active");
                            ui.radio_value(&mut app.form.draft.active, false, "Inactive");
                        });
                        ui.end_row();

                        ui.label("Profile Image:");
                        ui.vertical(|ui| {
                            ui.horizontal(|ui| {
                                if styled_button_with_icon(ui, IMAGE, "Choose Image...").clicked() {
                                    app.pick_photo();
                                }
                                if app.photo_loading {
                                    ui.spinner();
                                }
                            });

                            if let Some(ref photo) = app.form.draft.photo {
                                ui.add_space(5.0);
                                ui.add(
                                    egui::Image::from_bytes(photo.uri().to_string(), photo.bytes())
                                        .fit_to_exact_size(egui::vec2(96.0, 96.0)),
                                );
                            }
                            field_error(ui, &app.form.draft, Field::Photo);
                        });
                        ui.end_row();
                    });
            });

            ui.add_space(15.0);
            ui.separator();
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if styled_button(ui, "Cancel").clicked() {
                    app.form.cancel();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let label = if app.form.is_editing() {
                        "Update Employee"
                    } else {
                        "Add Employee"
                    };
                    if primary_button_with_icon(ui, "", label).clicked() {
                        app.submit_form();
                    }
                });
            });
        });
}
