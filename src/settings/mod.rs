//! Persisted generation defaults.

mod file;

use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::pass::request::{DEFAULT_COUNT, DEFAULT_LENGTH, GenerationRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub number_of_passwords: usize,
    pub exportable: bool,
    pub no_uppercase: bool,
    pub no_lowercase: bool,
    pub no_numbers: bool,
    pub no_special: bool,
    pub special_chars: Option<String>,
}

impl Settings {
    /// Load from the default location, falling back to defaults when absent.
    pub fn load_from_file() -> Result<Self, Error> {
        Self::load_from(&default_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, Error> {
        file::load(path).map_err(|source| Error::Settings {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save_to_file(&self) -> Result<(), Error> {
        self.save_to(&default_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), Error> {
        file::save(self, path).map_err(|source| Error::Settings {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Remove the saved defaults. Missing file is not an error.
    pub fn clear_file() -> Result<(), Error> {
        let path = default_path();
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(Error::Settings { path, source }),
        }
    }

    pub fn request(&self) -> GenerationRequest {
        GenerationRequest {
            count: self.number_of_passwords,
            length: self.pass_length,
            include_uppercase: !self.no_uppercase,
            include_lowercase: !self.no_lowercase,
            include_digits: !self.no_numbers,
            include_specials: !self.no_special,
            custom_specials: self.special_chars.clone(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: DEFAULT_LENGTH,
            number_of_passwords: DEFAULT_COUNT,
            exportable: false,
            no_uppercase: false,
            no_lowercase: false,
            no_numbers: false,
            no_special: false,
            special_chars: None,
        }
    }
}

/// `$HOME/.config/passforge/settings`
pub fn default_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/passforge/settings")
}
