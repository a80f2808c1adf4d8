//! Form controller: owns the displayed password and the copy indicator.

use std::time::{Duration, Instant};

use log::{error, info};
use rand::Rng;
use zeroize::Zeroizing;

use super::clipboard::ClipboardWriter;
use super::fields::Form;
use super::read::read_request;
use super::timer::ResetTimer;
use crate::pass;

pub const COPY_FAILED_ALERT: &str = "Failed to copy password. Please copy it manually.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyState {
    Idle,
    Copied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    /// Nothing is displayed, the copy button is disabled.
    NothingToCopy,
    /// Clipboard rejected the write. Carries the alert text for the user.
    Failed(&'static str),
}

pub struct FormController<C, R> {
    form: Form,
    clipboard: C,
    rng: R,
    password: Zeroizing<String>,
    copy_state: CopyState,
    reset_timer: ResetTimer,
    reset_delay: Duration,
}

impl<C: ClipboardWriter, R: Rng> FormController<C, R> {
    /// Create the controller and generate the initial password from the
    /// form's starting values.
    pub fn new(form: Form, clipboard: C, rng: R, reset_delay: Duration) -> Self {
        let mut controller = Self {
            form,
            clipboard,
            rng,
            password: Zeroizing::new(String::new()),
            copy_state: CopyState::Idle,
            reset_timer: ResetTimer::new(),
            reset_delay,
        };
        controller.submit();
        controller
    }

    /// Read the form, build a password and display the result. Build errors
    /// are displayed in place of the password.
    pub fn submit(&mut self) {
        let request = read_request(&self.form);
        let outcome = pass::build(&request, &mut self.rng);
        if let Err(e) = &outcome {
            info!("Password not generated: {e:?}");
        }
        self.password = pass::display_text(&outcome);
    }

    /// Copy the displayed password to the clipboard.
    pub fn copy(&mut self, now: Instant) -> CopyOutcome {
        if !self.can_copy() {
            return CopyOutcome::NothingToCopy;
        }

        match self.clipboard.write_text(&self.password) {
            Ok(()) => {
                self.copy_state = CopyState::Copied;
                self.reset_timer.schedule(now, self.reset_delay);
                CopyOutcome::Copied
            }
            Err(e) => {
                error!("Failed to copy: {e}");
                CopyOutcome::Failed(COPY_FAILED_ALERT)
            }
        }
    }

    /// Advance the reset timer. Returns true when the indicator reverted.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.reset_timer.fire_if_due(now) {
            self.copy_state = CopyState::Idle;
            return true;
        }
        false
    }

    /// Time until the indicator reverts, if a reset is pending.
    pub fn next_reset_in(&self, now: Instant) -> Option<Duration> {
        self.reset_timer.remaining(now)
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn can_copy(&self) -> bool {
        !self.password.is_empty()
    }

    pub fn copy_state(&self) -> CopyState {
        self.copy_state
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }
}
