//! Character set building for password generation.

use std::fmt;
use std::ops::RangeInclusive;

use indexmap::IndexSet;
use tracing::debug;

use super::request::GenerationRequest;
use crate::error::ValidationError;

const UPPERCASE: RangeInclusive<char> = 'A'..='Z';
const LOWERCASE: RangeInclusive<char> = 'a'..='z';
const DIGITS: RangeInclusive<char> = '0'..='9';
const SPECIALS: [RangeInclusive<char>; 4] = ['!'..='/', ':'..='@', '['..='`', '{'..='~'];

/// One of the four selectable character categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl CharacterClass {
    /// Pool concatenation order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
        CharacterClass::Special,
    ];

    /// Canonical members, in code point order.
    pub fn chars(self) -> Vec<char> {
        match self {
            CharacterClass::Uppercase => UPPERCASE.collect(),
            CharacterClass::Lowercase => LOWERCASE.collect(),
            CharacterClass::Digit => DIGITS.collect(),
            CharacterClass::Special => SPECIALS.iter().cloned().flatten().collect(),
        }
    }

    pub fn contains(self, c: char) -> bool {
        match self {
            CharacterClass::Uppercase => UPPERCASE.contains(&c),
            CharacterClass::Lowercase => LOWERCASE.contains(&c),
            CharacterClass::Digit => DIGITS.contains(&c),
            CharacterClass::Special => SPECIALS.iter().any(|r| r.contains(&c)),
        }
    }

    fn enabled(self, request: &GenerationRequest) -> bool {
        match self {
            CharacterClass::Uppercase => request.include_uppercase,
            CharacterClass::Lowercase => request.include_lowercase,
            CharacterClass::Digit => request.include_digits,
            CharacterClass::Special => request.include_specials,
        }
    }
}

/// Non-fatal advisory produced while resolving the pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    UnsupportedSpecial(char),
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::UnsupportedSpecial(c) => write!(
                f,
                "Unsupported special character included: '{c}' (This will not be included)"
            ),
        }
    }
}

/// The resolved selection pool plus any warnings raised while building it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    pool: Vec<char>,
    warnings: Vec<Warning>,
}

impl Charset {
    pub fn pool(&self) -> &[char] {
        &self.pool
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }
}

/// Build the selection pool for `request`.
pub fn build(request: &GenerationRequest) -> Result<Charset, ValidationError> {
    if !request.any_class_enabled() {
        return Err(ValidationError::NoCharacterTypes);
    }

    let mut pool = Vec::new();
    let mut warnings = Vec::new();

    for class in CharacterClass::ALL {
        if !class.enabled(request) {
            continue;
        }
        match (class, request.custom_specials.as_deref()) {
            (CharacterClass::Special, Some(custom)) => {
                let (accepted, rejected) = filter_specials(custom);
                pool.extend(accepted);
                warnings.extend(rejected.into_iter().map(Warning::UnsupportedSpecial));
            }
            _ => pool.extend(class.chars()),
        }
    }

    debug!(pool = pool.len(), warnings = warnings.len(), "charset resolved");

    if pool.is_empty() {
        let rejected: String = warnings
            .iter()
            .map(|Warning::UnsupportedSpecial(c)| *c)
            .collect();
        return Err(if rejected.is_empty() {
            ValidationError::EmptyPool
        } else {
            ValidationError::NoUsableSpecials { rejected }
        });
    }

    Ok(Charset { pool, warnings })
}

/// Split `custom` into canonical specials and rejects, both in first-seen order.
/// Repeats collapse onto their first occurrence.
fn filter_specials(custom: &str) -> (IndexSet<char>, IndexSet<char>) {
    let mut accepted = IndexSet::new();
    let mut rejected = IndexSet::new();
    for c in custom.chars() {
        if CharacterClass::Special.contains(c) {
            accepted.insert(c);
        } else {
            rejected.insert(c);
        }
    }
    (accepted, rejected)
}
