//! View mode and the text the page renders.
//!
//! DESIGN
//! ======
//! Formatting lives here rather than in components so the exact strings the
//! page shows can be asserted without a DOM.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

/// Which of the two view groups is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Anonymous,
    Authenticated,
}

impl ViewMode {
    pub fn is_authenticated(self) -> bool {
        self == Self::Authenticated
    }
}

const RULE: &str = "-------------------------";

/// Response display text for a completed probe.
pub fn response_text(status: u16, message: &str) -> String {
    format!("status code: {status}\n{RULE}\n{message}")
}

/// Modal body for a rejected login.
///
/// `exception` is inserted verbatim and rendered as HTML.
// TODO: escape `exception` once the auth service guarantees plain-text messages.
pub fn login_error_markup(exception: &str) -> String {
    format!("<p>Spring exception:<br>{exception}</p>")
}
