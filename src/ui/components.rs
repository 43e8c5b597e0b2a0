//! Shared UI components.

use eframe::egui::{self, Color32, Response, RichText, Ui};

use crate::form::{Field, FormDraft};
use crate::models::EmployeeRecord;

/// Status indicator colors.
pub mod colors {
    use super::Color32;

    pub const SUCCESS: Color32 = Color32::from_rgb(100, 200, 100);
    pub const ERROR: Color32 = Color32::from_rgb(255, 100, 100);
    pub const PRIMARY: Color32 = Color32::from_rgb(70, 120, 210);
}

/// Plain secondary button.
pub fn styled_button(ui: &mut Ui, label: &str) -> Response {
    ui.add(egui::Button::new(RichText::new(label).size(14.0)))
}

/// Secondary button with a leading phosphor icon.
pub fn styled_button_with_icon(ui: &mut Ui, icon: &str, label: &str) -> Response {
    ui.add(egui::Button::new(RichText::new(format!("{icon} {label}")).size(14.0)))
}

/// Filled primary button with a leading phosphor icon.
pub fn primary_button_with_icon(ui: &mut Ui, icon: &str, label: &str) -> Response {
    let text = if icon.is_empty() {
        label.to_string()
    } else {
        format!("{icon} {label}")
    };
    ui.add(egui::Button::new(RichText::new(text).size(14.0).color(Color32::WHITE)).fill(colors::PRIMARY))
}

/// Small icon-only button for table row actions.
pub fn action_button(ui: &mut Ui, icon: &str, tooltip: &str) -> Response {
    ui.add(egui::Button::new(RichText::new(icon).size(14.0)))
        .on_hover_text(tooltip)
}

/// Small icon-only button for destructive table row actions.
pub fn danger_action_button(ui: &mut Ui, icon: &str, tooltip: &str) -> Response {
    ui.add(egui::Button::new(RichText::new(icon).size(14.0).color(colors::ERROR)))
        .on_hover_text(tooltip)
}

/// Inline validation message under a form field.
pub fn field_error(ui: &mut Ui, draft: &FormDraft, field: Field) {
    if let Some(msg) = draft.error(field) {
        ui.colored_label(colors::ERROR, RichText::new(msg).small());
    }
}

/// Active/Inactive badge for the table.
pub fn status_badge(ui: &mut Ui, record: &EmployeeRecord) {
    let color = if record.active { colors::SUCCESS } else { colors::ERROR };
    ui.colored_label(color, record.status_label());
}
