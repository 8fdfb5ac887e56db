//! CLI context - bundles saved defaults and parsed flags.

use passforge::pass::entropy;
use passforge::settings::Settings;
use passforge::{Error, Generation, GenerationRequest};
use rand::TryRngCore;
use rand::rngs::OsRng;
use tracing::{info, warn};

use super::{CliFlags, clipboard, prompts, render};

/// Why a run stopped before completing.
#[derive(Debug)]
pub enum Stop {
    /// Early exit - not an error, just done.
    Done,
    Failed(Error),
}

impl From<Error> for Stop {
    fn from(e: Error) -> Self {
        Stop::Failed(e)
    }
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    /// Load saved defaults. An unreadable settings file is reported and ignored.
    pub fn new(flags: CliFlags) -> Self {
        let settings = Settings::load_from_file().unwrap_or_else(|e| {
            warn!("Failed to load settings: {e}");
            Settings::default()
        });
        Self { settings, flags }
    }

    /// Run CLI. Returns `Err(Stop::Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Stop> {
        self.handle_command_mode()?;
        self.apply_flags();
        if self.flags.save_defaults {
            self.settings.save_to_file()?;
        }
        self.generate_output()?;
        Ok(())
    }

    fn handle_command_mode(&self) -> Result<(), Stop> {
        if self.flags.clear_defaults {
            Settings::clear_file()?;
            prompts::defaults_cleared(self.flags.quiet);
            return Err(Stop::Done);
        }
        Ok(())
    }

    /// Apply CLI flags over the saved defaults.
    fn apply_flags(&mut self) {
        let flags = &self.flags;
        let settings = &mut self.settings;

        if let Some(len) = flags.length {
            settings.pass_length = len;
        }
        if let Some(num) = flags.number {
            settings.number_of_passwords = num;
        }
        if flags.special.is_some() {
            settings.special_chars = flags.special.clone();
        }
        let toggles = [
            (flags.exportable, &mut settings.exportable),
            (flags.no_uppercase, &mut settings.no_uppercase),
            (flags.no_lowercase, &mut settings.no_lowercase),
            (flags.no_numbers, &mut settings.no_numbers),
            (flags.no_special, &mut settings.no_special),
        ];
        for (flag, setting) in toggles {
            if let Some(value) = flag {
                *setting = value;
            }
        }
    }

    pub fn request(&self) -> GenerationRequest {
        self.settings.request()
    }

    fn generate(&self) -> Result<Generation, Error> {
        let request = self.request();
        let exportable = self.settings.exportable;

        let generation = if self.flags.os_rng {
            passforge::generate(&request, exportable, &mut OsRng.unwrap_err())?
        } else {
            passforge::generate(&request, exportable, &mut rand::rng())?
        };

        for warning in &generation.warnings {
            warn!("{warning}");
        }
        let bits = entropy::bits(generation.pool_size, request.length);
        info!(
            charset = generation.pool_size,
            bits = %format!("{bits:.1}"),
            strength = entropy::strength(bits),
            "entropy per password"
        );

        Ok(generation)
    }

    /// Generate passwords and handle output.
    pub fn generate_output(&self) -> Result<(), Error> {
        let generation = self.generate()?;
        let count = generation.output.len();
        let text = render::render(&generation.output, self.flags.format)?;

        if self.flags.clipboard {
            clipboard::copy(&text)?;
            prompts::clipboard_copied(self.flags.quiet);
        } else if let Some(path) = &self.flags.output {
            std::fs::write(path, text.as_bytes())?;
            let full_path = std::fs::canonicalize(path)
                .unwrap_or_else(|_| path.clone())
                .display()
                .to_string();
            prompts::passwords_written(count, &full_path, self.flags.quiet);
        } else {
            use std::io::Write;
            let mut out = std::io::stdout().lock();
            out.write_all(text.as_bytes())?;
            out.flush()?;
        }
        Ok(())
    }
}
