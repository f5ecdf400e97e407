//! Password generation.
//!
//! Each position is drawn independently and uniformly from the alphabet using
//! a cryptographically secure source. Indices come from rejection sampling
//! over 32-bit draws, so alphabets that do not divide `2^32` carry no modulo
//! bias.

use rand::TryCryptoRng;
use rand::rngs::OsRng;
use zeroize::Zeroizing;

use crate::config::GeneratorConfig;
use crate::domain::{Alphabet, GenerateForm, GenerationRequest};
use crate::error::{AppError, GeneratorError, GeneratorResult, Result};

/// Generate a password of `length` characters from `alphabet` using the OS
/// entropy source.
///
/// # Errors
///
/// Returns [`GeneratorError::EmptyAlphabet`] for an empty alphabet and
/// [`GeneratorError::RandomSourceUnavailable`] if the OS source fails.
pub fn generate(length: usize, alphabet: &Alphabet) -> GeneratorResult<Zeroizing<String>> {
    generate_with(&mut OsRng, length, alphabet)
}

/// Generate a password drawing from the given secure source.
///
/// No partial output escapes on failure: the buffer is wiped when dropped.
///
/// # Errors
///
/// See [`generate`].
pub fn generate_with<R>(
    rng: &mut R,
    length: usize,
    alphabet: &Alphabet,
) -> GeneratorResult<Zeroizing<String>>
where
    R: TryCryptoRng + ?Sized,
{
    let chars = alphabet.as_slice();
    if chars.is_empty() {
        return Err(GeneratorError::EmptyAlphabet);
    }
    // Only the first `u32::MAX` characters of a larger alphabet are reachable.
    let bound = u32::try_from(chars.len()).unwrap_or(u32::MAX);

    let widest = chars.iter().map(|c| c.len_utf8()).max().unwrap_or(1);
    let mut password = Zeroizing::new(String::with_capacity(length.saturating_mul(widest)));

    for _ in 0..length {
        let index = uniform_index(rng, bound)
            .map_err(|e| GeneratorError::RandomSourceUnavailable(e.to_string()))?;
        password.push(chars[index as usize]);
    }

    Ok(password)
}

/// Draw a value uniformly from `[0, bound)`. `bound` must be non-zero.
///
/// Draws below `2^32 mod bound` are rejected; the remaining range is an exact
/// multiple of `bound`.
///
/// `random_range` cannot report a failing source, and `OsRng.unwrap_err()`
/// would panic instead of returning `RandomSourceUnavailable`.
fn uniform_index<R>(rng: &mut R, bound: u32) -> std::result::Result<u32, R::Error>
where
    R: TryCryptoRng + ?Sized,
{
    let threshold = bound.wrapping_neg() % bound;
    loop {
        let draw = rng.try_next_u32()?;
        if draw >= threshold {
            return Ok(draw % bound);
        }
    }
}

/// Password generation service.
///
/// Turns submitted forms into generation requests and fulfils them. Holds no
/// mutable state and is shared across requests.
#[derive(Debug, Clone)]
pub struct PasswordGenerator {
    default_length: usize,
    max_length: usize,
}

impl PasswordGenerator {
    /// Create a new generator from configuration.
    #[must_use]
    pub const fn new(config: &GeneratorConfig) -> Self {
        Self {
            default_length: config.default_length,
            max_length: config.max_length,
        }
    }

    /// Length used when the form does not supply a usable one.
    #[must_use]
    pub const fn default_length(&self) -> usize {
        self.default_length
    }

    /// Message shown when `requested` exceeds the configured maximum.
    #[must_use]
    pub fn length_notice(&self, requested: usize) -> Option<String> {
        (requested > self.max_length)
            .then(|| format!("Length limited to {} characters", self.max_length))
    }

    /// Normalize a submitted form into a generation request.
    ///
    /// Lengths above the configured maximum are cut to it; the caller reports
    /// that through [`Self::length_notice`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NoCharacterClassSelected`] when no class is
    /// checked, whatever the requested length.
    pub fn request_from(&self, form: &GenerateForm) -> Result<GenerationRequest> {
        let selection = form.selection();
        if selection.is_empty() {
            return Err(AppError::NoCharacterClassSelected);
        }

        let length = form.length(self.default_length).min(self.max_length);
        Ok(GenerationRequest::new(length, selection.alphabet()))
    }

    /// Fulfil a generation request from the OS entropy source.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::RandomSourceUnavailable`] if the source fails.
    pub fn generate(&self, request: &GenerationRequest) -> Result<Zeroizing<String>> {
        tracing::debug!(
            length = request.length,
            alphabet_size = request.alphabet.len(),
            "Generating password"
        );
        generate(request.length, &request.alphabet).map_err(AppError::from)
    }
}
