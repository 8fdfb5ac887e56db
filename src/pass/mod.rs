//! Password generation and output.

pub mod charset;
pub mod entropy;
pub mod generate;
pub mod output;
pub mod request;

use rand::{CryptoRng, Rng};

use crate::error::ValidationError;
use charset::Warning;
use output::OutputShape;
use request::GenerationRequest;

/// Result of one generation call.
#[derive(Debug)]
pub struct Generation {
    pub output: OutputShape,
    pub warnings: Vec<Warning>,
    pub pool_size: usize,
}

/// Validate `request`, resolve its pool, sample and assemble the output.
///
/// Nothing is sampled unless every check passes.
pub fn generate<R>(
    request: &GenerationRequest,
    exportable: bool,
    rng: &mut R,
) -> Result<Generation, ValidationError>
where
    R: Rng + CryptoRng + ?Sized,
{
    request.validate()?;
    let charset = charset::build(request)?;
    let records = generate::sample(charset.pool(), request.length, request.count, rng)?;
    let pool_size = charset.len();

    Ok(Generation {
        output: output::assemble(records, exportable),
        warnings: charset.into_warnings(),
        pool_size,
    })
}
