//! Random password generation from selectable character classes.
//!
//! The library is pure: it resolves a character pool, samples passwords from a
//! caller-supplied cryptographic RNG, and packages them into an [`OutputShape`].
//! Printing, files and the clipboard live in the `passforge` binary.

pub mod error;
pub mod pass;
pub mod settings;

pub use error::{Error, ValidationError};
pub use pass::charset::{CharacterClass, Charset, Warning};
pub use pass::generate::{Password, PasswordRecord};
pub use pass::output::OutputShape;
pub use pass::request::GenerationRequest;
pub use pass::{Generation, generate};
