mod context;
mod flags;
mod parse;
pub mod prompts;

use std::process::ExitCode;

pub use context::Context;
pub use flags::CliFlags;
pub use parse::parse;

/// Run with the process arguments (program name first).
pub fn run(args: Vec<String>) -> ExitCode {
    match Context::new(&args) {
        Ok(mut ctx) => ctx.run(),
        Err(e) => {
            prompts::error(&e.to_string());
            prompts::error("Run with --help for usage.");
            ExitCode::from(2)
        }
    }
}
