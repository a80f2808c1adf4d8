//! CLI context: settings plus parsed flags, and the one-shot path.

use std::process::ExitCode;

use log::{error, info};

use super::{CliFlags, parse, prompts};
use crate::error::ParseError;
use crate::form::{ClipboardWriter, SystemClipboard};
use crate::logger;
use crate::pass;
use crate::settings::Settings;
use crate::tui;

pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    pub fn new(args: &[String]) -> Result<Self, ParseError> {
        let flags = parse(args)?;
        let mut settings = Settings::default();
        flags.apply(&mut settings);
        Ok(Self { settings, flags })
    }

    pub fn run(&mut self) -> ExitCode {
        if self.flags.help {
            tui::print_help();
            return ExitCode::SUCCESS;
        }
        if self.flags.version {
            println!("passform {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }

        prompts::set_quiet(self.settings.quiet);
        let one_shot = self.flags.one_shot() || !prompts::is_interactive();
        self.init_logging(one_shot);

        if one_shot {
            return self.generate_output();
        }

        match tui::run(&self.settings) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("Terminal error: {e}");
                prompts::error(&format!("Terminal error: {e}"));
                ExitCode::FAILURE
            }
        }
    }

    fn init_logging(&self, echo_stderr: bool) {
        let echo = echo_stderr && !self.settings.quiet;
        if let Err(e) = logger::initialize(&self.settings.log_dir, self.settings.log_level, echo) {
            prompts::warn(&format!("Logging disabled: {e}"));
        }
    }

    /// Build one password and print or copy it.
    fn generate_output(&mut self) -> ExitCode {
        let request = self.settings.request();
        let password = match pass::build(&request, &mut self.settings.rng()) {
            Ok(p) => p,
            Err(e) => {
                info!("Password not generated: {e:?}");
                prompts::error(&e.to_string());
                return ExitCode::FAILURE;
            }
        };

        if !self.flags.clipboard {
            println!("{}", password.as_str());
            return ExitCode::SUCCESS;
        }

        match SystemClipboard::new().write_text(&password) {
            Ok(()) => {
                prompts::clipboard_copied();
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("Failed to copy: {e}");
                prompts::clipboard_error(&e.to_string());
                if prompts::clipboard_fallback_prompt() {
                    println!("{}", password.as_str());
                    ExitCode::SUCCESS
                } else {
                    ExitCode::FAILURE
                }
            }
        }
    }
}
