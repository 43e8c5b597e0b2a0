//! GUI screens and application state.

pub mod app;
pub mod components;
pub mod dashboard;
pub mod employee_form;
pub mod login;

pub use app::App;
