//! Client-side state: the stored token and the visible view.

pub mod token;
pub mod view;
