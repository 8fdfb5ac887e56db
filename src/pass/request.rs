//! Generation request.

use crate::error::ValidationError;

pub const MIN_LENGTH: usize = 6;
pub const MIN_COUNT: usize = 1;
pub const DEFAULT_LENGTH: usize = 16;
pub const DEFAULT_COUNT: usize = 1;

/// One invocation's worth of generation options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub count: usize,
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_digits: bool,
    pub include_specials: bool,
    /// Narrows the special class to these characters. Ignored when specials are excluded.
    pub custom_specials: Option<String>,
}

impl GenerationRequest {
    /// Check the count and length bounds.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.count < MIN_COUNT {
            return Err(ValidationError::CountTooSmall(self.count));
        }
        if self.length < MIN_LENGTH {
            return Err(ValidationError::LengthTooShort(self.length));
        }
        Ok(())
    }

    /// True when at least one class is enabled.
    pub fn any_class_enabled(&self) -> bool {
        self.include_uppercase || self.include_lowercase || self.include_digits || self.include_specials
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            length: DEFAULT_LENGTH,
            include_uppercase: true,
            include_lowercase: true,
            include_digits: true,
            include_specials: true,
            custom_specials: None,
        }
    }
}
