//! Password generation.

use std::fmt;
use std::ops::Deref;

use rand::seq::index;
use rand::{CryptoRng, Rng};
use serde::{Serialize, Serializer};
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::request::{MIN_COUNT, MIN_LENGTH};
use crate::error::ValidationError;

/// A generated password. Wiped from memory on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Password {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Keep secrets out of logs and panic messages.
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars>)", self.0.chars().count())
    }
}

impl Serialize for Password {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// One numbered password, ready for tabular export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordRecord {
    /// 1-based position in generation order.
    #[serde(rename = "PasswordNumber")]
    pub number: usize,
    #[serde(rename = "PasswordValue")]
    pub value: Password,
}

/// Draw `count` passwords of `length` characters from `pool`.
///
/// Each password takes `length` distinct pool positions. Passwords are drawn
/// independently of one another.
pub fn sample<R>(
    pool: &[char],
    length: usize,
    count: usize,
    rng: &mut R,
) -> Result<Vec<PasswordRecord>, ValidationError>
where
    R: Rng + CryptoRng + ?Sized,
{
    if pool.is_empty() {
        return Err(ValidationError::EmptyPool);
    }
    if count < MIN_COUNT {
        return Err(ValidationError::CountTooSmall(count));
    }
    if length < MIN_LENGTH {
        return Err(ValidationError::LengthTooShort(length));
    }
    if length > pool.len() {
        return Err(ValidationError::LengthExceedsPool {
            length,
            pool: pool.len(),
        });
    }

    debug!(pool = pool.len(), length, count, "sampling passwords");

    Ok((1..=count)
        .map(|number| PasswordRecord {
            number,
            value: draw(pool, length, &mut *rng),
        })
        .collect())
}

#[inline]
fn draw<R: Rng + ?Sized>(pool: &[char], length: usize, rng: &mut R) -> Password {
    Password(
        index::sample(rng, pool.len(), length)
            .into_iter()
            .map(|i| pool[i])
            .collect(),
    )
}
