//! Clipboard output.

use copypasta::{ClipboardContext, ClipboardProvider};
use passforge::Error;
use zeroize::Zeroize;

/// Copy `text` to the system clipboard.
pub fn copy(text: &str) -> Result<(), Error> {
    let mut ctx = ClipboardContext::new().map_err(|e| Error::Clipboard(e.to_string()))?;
    ctx.set_contents(text.to_owned())
        .map_err(|e| Error::Clipboard(e.to_string()))?;

    // Read back so the provider's copy is the only one left in this process.
    if let Ok(mut retrieved) = ctx.get_contents() {
        retrieved.zeroize();
    }
    Ok(())
}
