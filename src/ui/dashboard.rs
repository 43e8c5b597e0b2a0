//! Dashboard screen: header stats, search/filter toolbar, employee table.

use eframe::egui::{self, Align, Layout, Margin, RichText, ScrollArea, Ui};
use egui_phosphor::regular::{PENCIL, PLUS, SIGN_OUT, TRASH};

use crate::models::Gender;

use super::app::App;
use super::components::{
    action_button, danger_action_button, primary_button_with_icon, status_badge, styled_button,
    styled_button_with_icon,
};

/// Show the dashboard screen.
pub fn show(app: &mut App, ui: &mut Ui) {
    // Header with counts and logout
    egui::Frame::group(ui.style()).inner_margin(Margin::same(15)).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new("Dashboard").size(26.0).strong());
                ui.label(format!("Total Employees: {}", app.store.total()));
            });

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if styled_button_with_icon(ui, SIGN_OUT, "Logout").clicked() {
                    app.logout();
                }
                ui.add_space(15.0);
                ui.label(format!("Active Employees: {}", app.store.active_count()));
            });
        });
    });

    ui.add_space(10.0);

    // Toolbar: search and filters
    ui.horizontal(|ui| {
        ui.label("Search:");
        ui.add(
            egui::TextEdit::singleline(&mut app.criteria.search)
                .desired_width(220.0)
                .hint_text("Search employees..."),
        );

        ui.add_space(20.0);

        ui.label("Gender:");
        egui::ComboBox::from_id_salt("gender_filter")
            .width(120.0)
            .selected_text(app.criteria.gender.map(|g| g.label()).unwrap_or("All"))
            .show_ui(ui, |ui| {
                if ui.selectable_label(app.criteria.gender.is_none(), "All").clicked() {
                    app.criteria.gender = None;
                }
                for gender in Gender::ALL {
                    if ui
                        .selectable_label(app.criteria.gender == Some(gender), gender.label())
                        .clicked()
                    {
                        app.criteria.gender = Some(gender);
                    }
                }
            });

        ui.add_space(20.0);

        ui.label("Status:");
        if ui.selectable_label(app.criteria.status.is_none(), "All").clicked() {
            app.criteria.status = None;
        }
        if ui
            .selectable_label(app.criteria.status == Some(true), "Active")
            .clicked()
        {
            app.criteria.status = Some(true);
        }
        if ui
            .selectable_label(app.criteria.status == Some(false), "Inactive")
            .clicked()
        {
            app.criteria.status = Some(false);
        }

        // Clear filters button
        if !app.criteria.is_empty() {
            ui.add_space(10.0);
            if styled_button(ui, "Clear").clicked() {
                app.criteria.clear();
            }
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if primary_button_with_icon(ui, PLUS, "Add Employee").clicked() {
                app.form.open_create();
            }
        });
    });

    ui.add_space(15.0);

    show_table(app, ui);
}

fn show_table(app: &mut App, ui: &mut Ui) {
    let visible = app.criteria.apply(app.store.list());

    ui.label(format!("Showing {} of {} employees", visible.len(), app.store.total()));

    ui.add_space(10.0);

    ScrollArea::vertical().id_salt("employee_scroll").show(ui, |ui| {
        ui.add_space(4.0);
        egui::Grid::new("employees_grid")
            .num_columns(7)
            .striped(true)
            .min_col_width(60.0)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                // Header
                ui.strong("Employee ID");
                ui.strong("Name");
                ui.strong("Gender");
                ui.strong("Date of Birth");
                ui.strong("State");
                ui.strong("Status");
                ui.strong("Actions");
                ui.end_row();

                // Data rows
                for emp in visible {
                    ui.label(emp.id.as_str());

                    ui.horizontal(|ui| {
                        ui.add(
                            egui::Image::from_bytes(emp.photo.uri().to_string(), emp.photo.bytes())
                                .fit_to_exact_size(egui::vec2(36.0, 36.0)),
                        );
                        ui.strong(&emp.name);
                    });

                    ui.label(emp.gender.label());
                    ui.label(emp.dob.format("%Y-%m-%d").to_string());
                    ui.label(&emp.state);
                    status_badge(ui, emp);

                    ui.horizontal(|ui| {
                        ui.add_space(8.0);
                        if action_button(ui, PENCIL, "Edit").clicked() {
                            app.form.open_edit(emp);
                        }
                        ui.add_space(4.0);
                        if danger_action_button(ui, TRASH, "Delete").clicked() {
                            app.delete_target = Some((emp.id.clone(), emp.name.clone()));
                            app.show_delete_confirm = true;
                        }
                    });

                    ui.end_row();
                }
            });
    });
}
