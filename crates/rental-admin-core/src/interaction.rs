//! User interaction capability
//!
//! Confirmation prompts, notifications and navigation, injected so the
//! list and form logic runs without a browser.

pub trait Interaction {
    /// Ask a yes/no question
    fn confirm(&self, message: &str) -> bool;

    /// Tell the user something happened
    fn notify(&self, message: &str);

    /// Go to an application route
    fn navigate(&self, route: &str);
}
