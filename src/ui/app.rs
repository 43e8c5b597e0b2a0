//! Main application state.

use chrono::Local;
use eframe::egui;
use tokio::sync::mpsc;

use crate::auth::{LOGIN_FAILED_MSG, SessionGate};
use crate::config::AppConfig;
use crate::filter::FilterCriteria;
use crate::form::{FormController, SubmitOutcome};
use crate::models::{EmployeeId, ProfileImage};
use crate::seed::seed_employees;
use crate::store::EmployeeStore;

use super::components::colors;
use super::{dashboard, employee_form, login};

/// Current screen being displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Login,
    Dashboard,
}

/// Login form input state.
#[derive(Default, Clone)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub error: Option<String>,
}

impl LoginForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Messages from async tasks to UI.
pub enum UiMessage {
    /// Background photo read finished. `generation` identifies the draft
    /// it was started for.
    PhotoLoaded {
        generation: u64,
        result: Result<ProfileImage, String>,
    },
}

/// Main application state.
pub struct App {
    // Runtime for background file reads
    rt: tokio::runtime::Runtime,

    // Message channel for async communication
    tx: mpsc::UnboundedSender<UiMessage>,
    rx: mpsc::UnboundedReceiver<UiMessage>,

    // Navigation
    pub screen: Screen,
    pub login_form: LoginForm,
    gate: SessionGate,

    // Directory state
    pub store: EmployeeStore,
    pub criteria: FilterCriteria,
    pub form: FormController,
    pub photo_loading: bool,

    // Dialogs
    pub show_delete_confirm: bool,
    pub delete_target: Option<(EmployeeId, String)>,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig, rt: tokio::runtime::Runtime) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        Self {
            rt,
            tx,
            rx,
            screen: Screen::default(),
            login_form: LoginForm::default(),
            gate: SessionGate::new(config.auth.accounts),
            store: EmployeeStore::with_seed(seed_employees()),
            criteria: FilterCriteria::default(),
            form: FormController::new(),
            photo_loading: false,
            show_delete_confirm: false,
            delete_target: None,
            error_message: None,
            success_message: None,
        }
    }

    /// Check the login form against the allow-list.
    pub fn submit_login(&mut self) {
        if self.gate.authorize(&self.login_form.email, &self.login_form.password) {
            self.login_form.reset();
            self.screen = Screen::Dashboard;
        } else {
            self.login_form.error = Some(LOGIN_FAILED_MSG.to_string());
        }
    }

    /// Return to the login screen. The store keeps its contents.
    pub fn logout(&mut self) {
        tracing::info!("Logged out");
        self.form.cancel();
        self.login_form.reset();
        self.screen = Screen::Login;
    }

    /// Open a native file dialog and read the chosen image in the
    /// background. The result is tagged with the draft's generation so a
    /// late arrival for a closed form gets dropped.
    pub fn pick_photo(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp"])
            .pick_file()
        else {
            return;
        };

        let generation = self.form.generation();
        let tx = self.tx.clone();
        self.photo_loading = true;

        self.rt.spawn(async move {
            let result = ProfileImage::load(&path).await.map_err(|e| e.to_string());
            let _ = tx.send(UiMessage::PhotoLoaded { generation, result });
        });
    }

    /// Submit the open form draft.
    pub fn submit_form(&mut self) {
        let today = Local::now().date_naive();
        match self.form.submit(&mut self.store, today) {
            SubmitOutcome::Created(id) => {
                self.success_message = Some(format!("Employee {id} added"));
            }
            SubmitOutcome::Updated(id) => {
                self.success_message = Some(format!("Employee {id} updated"));
            }
            SubmitOutcome::Invalid => {
                // Errors are shown inline on the draft; the form stays open.
            }
        }
    }

    /// Execute the confirmed delete operation.
    fn confirm_delete(&mut self) {
        if let Some((id, name)) = self.delete_target.take() {
            self.store.remove(&id);
            self.success_message = Some(format!("Employee '{name}' deleted"));
        }
    }

    /// Poll async operation results.
    fn poll_async_results(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                UiMessage::PhotoLoaded { generation, result } => {
                    self.photo_loading = false;
                    match result {
                        Ok(photo) => {
                            self.form.apply_photo(generation, photo);
                        }
                        Err(e) => {
                            // Only report failures for the draft that asked.
                            if generation == self.form.generation() && self.form.is_open() {
                                self.error_message = Some(e);
                            }
                        }
                    }
                }
            }
        }
    }

    /// Render modal dialogs (error, success, delete confirmation).
    fn show_dialogs(&mut self, ctx: &egui::Context) {
        // Error dialog
        if let Some(ref error) = self.error_message.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::ERROR, error);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.error_message = None;
                    }
                });
        }

        // Success dialog
        if let Some(ref msg) = self.success_message.clone() {
            egui::Window::new("Success")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::SUCCESS, msg);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.success_message = None;
                    }
                });
        }

        // Delete confirmation dialog
        if self.show_delete_confirm
            && let Some((_, ref name)) = self.delete_target.clone()
        {
            egui::Window::new("Delete Employee")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(format!("Delete employee '{}'?", name));
                    ui.add_space(10.0);
                    ui.horizontal(|ui| {
                        if ui.button("Cancel").clicked() {
                            self.show_delete_confirm = false;
                            self.delete_target = None;
                        }
                        if ui.button("Delete").clicked() {
                            self.confirm_delete();
                            self.show_delete_confirm = false;
                        }
                    });
                });
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll async results
        self.poll_async_results();

        // Request repaint while a photo read is in flight
        if self.photo_loading {
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| match self.screen {
            Screen::Login => login::show(self, ui),
            Screen::Dashboard => dashboard::show(self, ui),
        });

        // Create/edit form dialog
        if self.form.is_open() {
            employee_form::show(self, ctx);
        }

        // Modal dialogs (error, success, delete confirmation)
        self.show_dialogs(ctx);
    }
}
