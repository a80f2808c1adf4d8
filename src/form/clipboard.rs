//! Clipboard access.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use crate::error::ClipboardError;

/// Write-only clipboard seam used by the form controller.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The platform clipboard. The context is opened on first use so a missing
/// display server only matters once the user actually copies.
#[derive(Default)]
pub struct SystemClipboard {
    ctx: Option<ClipboardContext>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.ctx.is_none() {
            let ctx =
                ClipboardContext::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.ctx = Some(ctx);
        }

        let Some(ctx) = self.ctx.as_mut() else {
            return Err(ClipboardError::Unavailable("no clipboard context".into()));
        };

        ctx.set_contents(text.to_owned())
            .map_err(|e| ClipboardError::Write(e.to_string()))?;

        // Round-trip forces some providers to take ownership before we return.
        if let Ok(mut retrieved) = ctx.get_contents() {
            retrieved.zeroize();
        }
        Ok(())
    }
}
