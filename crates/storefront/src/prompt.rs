//! Blocking user prompts.
//!
//! The core never talks to a terminal or window directly. Anything that needs
//! the user's attention goes through a [`Prompt`].

use tracing::info;

/// A yes/no confirmation and an informational acknowledgment.
pub trait Prompt {
    /// Ask the user to confirm; `true` means go ahead.
    fn confirm(&mut self, message: &str) -> bool;

    /// Show a message the user only has to dismiss.
    fn acknowledge(&mut self, message: &str);
}

/// Confirms everything and logs acknowledgments. For scripted use.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Prompt for AssumeYes {
    fn confirm(&mut self, message: &str) -> bool {
        info!(%message, "Confirmed without asking");
        true
    }

    fn acknowledge(&mut self, message: &str) {
        info!(%message, "Acknowledged");
    }
}

impl<P: Prompt + ?Sized> Prompt for &mut P {
    fn confirm(&mut self, message: &str) -> bool {
        (**self).confirm(message)
    }

    fn acknowledge(&mut self, message: &str) {
        (**self).acknowledge(message);
    }
}
