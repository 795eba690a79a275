//! User-facing warning presentation for form validation advisories.

use log::warn;

/// Shows a non-blocking warning to the user.
pub trait AdvisoryPresenter {
    fn show_warning(&self, message: &str);
}

/// Presents warnings as native dialogs with a single OK button.
pub struct DialogAdvisory {
    title: String,
}

impl DialogAdvisory {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl AdvisoryPresenter for DialogAdvisory {
    fn show_warning(&self, message: &str) {
        warn!("Advisory: {}", message);
        let dialog = rfd::AsyncMessageDialog::new()
            .set_level(rfd::MessageLevel::Warning)
            .set_title(self.title.as_str())
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok);
        // Shown from the event loop so the caller is not blocked.
        if let Err(err) = slint::spawn_local(async move {
            let _ = dialog.show().await;
        }) {
            warn!("Failed to show advisory dialog: {}", err);
        }
    }
}
