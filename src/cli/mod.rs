//! Command-line front end.

mod clipboard;
mod context;
mod flags;
pub mod logging;
mod prompts;
mod render;

pub use context::{Context, Stop};
pub use flags::CliFlags;

use passforge::Error;

/// Run the CLI with parsed flags.
pub fn run(flags: CliFlags) -> Result<(), Error> {
    match Context::new(flags).run() {
        Ok(()) | Err(Stop::Done) => Ok(()),
        Err(Stop::Failed(e)) => Err(e),
    }
}

pub fn report(err: &Error) {
    prompts::error(&err.to_string());
}
