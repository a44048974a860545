//! Open/closed state owned by the navbar.

use super::logout::LogoutOutcome;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavbarState {
    pub dropdown_open: bool,
    pub change_photo_open: bool,
}

impl NavbarState {
    pub fn toggle_dropdown(&mut self) {
        self.dropdown_open = !self.dropdown_open;
    }

    /// Close the dropdown. Returns whether anything changed.
    pub fn close_dropdown(&mut self) -> bool {
        std::mem::replace(&mut self.dropdown_open, false)
    }

    /// Close the dropdown and open the change-photo flow. Returns `false` when the
    /// flow was already open, so the request is not raised twice.
    pub fn request_change_photo(&mut self) -> bool {
        self.dropdown_open = false;
        !std::mem::replace(&mut self.change_photo_open, true)
    }

    /// Called by the change-photo flow once it is done.
    pub fn close_change_photo(&mut self) {
        self.change_photo_open = false;
    }

    /// A completed logout closes the dropdown; a failed one leaves it for a retry.
    pub fn finish_logout(&mut self, outcome: &LogoutOutcome) {
        if *outcome == LogoutOutcome::LoggedOut {
            self.dropdown_open = false;
        }
    }
}
