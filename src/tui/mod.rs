//! Interactive password form.

mod input;
mod text;
mod view;

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, info};

use crate::form::{CopyOutcome, Form, FormController, SystemClipboard};
use crate::settings::Settings;
use crate::terminal::{RawModeGuard, draw_screen};

pub use text::*;
pub use view::{Action, Focus, FormView, Screen, alert_box};

/// Longest wait for input before re-checking the copy indicator timer.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Run the form until the user quits.
pub fn run(settings: &Settings) -> io::Result<()> {
    let form = Form::password_generator(settings);
    let mut controller = FormController::new(
        form,
        SystemClipboard::new(),
        settings.rng(),
        settings.copy_reset,
    );
    let mut view = FormView::new(controller.form());
    let mut alert: Option<&'static str> = None;
    let mut redraw = true;

    let _guard = RawModeGuard::new()?;
    info!("Form opened");

    loop {
        let now = Instant::now();
        if controller.tick(now) {
            debug!("Copy indicator reset");
            redraw = true;
        }

        if redraw {
            let screen = Screen {
                password: controller.password(),
                copy_state: controller.copy_state(),
                can_copy: controller.can_copy(),
                alert,
            };
            draw_screen(&view.render(controller.form(), &screen));
            redraw = false;
        }

        let timeout = controller
            .next_reset_in(now)
            .map_or(IDLE_POLL, |left| left.min(IDLE_POLL));
        if !event::poll(timeout)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if alert.take().is_some() {
                    redraw = true;
                    continue;
                }
                match view.handle_key(&key, controller.form_mut()) {
                    Action::Quit => break,
                    Action::Submit => {
                        controller.submit();
                        redraw = true;
                    }
                    Action::Copy => {
                        if let CopyOutcome::Failed(message) = controller.copy(Instant::now()) {
                            alert = Some(message);
                        }
                        redraw = true;
                    }
                    Action::Redraw => redraw = true,
                    Action::None => {}
                }
            }
            Event::Resize(..) => redraw = true,
            _ => {}
        }
    }

    info!("Form closed");
    Ok(())
}
