//! Entropy estimate for a resolved pool.

/// Bits of entropy in one password of `length` distinct draws from `pool_size` entries.
pub fn bits(pool_size: usize, length: usize) -> f64 {
    if pool_size == 0 || length > pool_size {
        return 0.0;
    }
    (0..length).map(|i| ((pool_size - i) as f64).log2()).sum()
}

/// Get entropy strength description.
pub fn strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}
