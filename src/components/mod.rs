//! Presentational components. Each reads presenter signals only; actions
//! that reach the controller are wired in `app.rs`.

pub mod login_error_modal;
pub mod response_panel;
pub mod token_panel;
