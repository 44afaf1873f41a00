use rand::Rng;

use crate::charset::ClassSet;

/// How a position picks its index into the combined alphabet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Sampling {
    /// `0..len`, every position yields a character.
    #[default]
    Uniform,
    /// `0..=len`, the out-of-range endpoint appends nothing.
    Legacy,
}

pub fn generate(length: usize, classes: &ClassSet) -> String {
    let mut rng = rand::rng();

    generate_with(&mut rng, length, classes, Sampling::Uniform)
}

/// Draws `length` characters from the union of `classes`.
///
/// An empty `classes` gives an empty string. With `Sampling::Legacy` the
/// result can be shorter than `length`.
pub fn generate_with<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    classes: &ClassSet,
    sampling: Sampling,
) -> String {
    let alphabet = classes.alphabet();
    let alphabet = alphabet.as_bytes();

    tracing::debug!(length, alphabet = alphabet.len(), ?sampling, "generating");

    if alphabet.is_empty() {
        return String::new();
    }

    let mut password = String::with_capacity(length);
    for _ in 0..length {
        let index = match sampling {
            Sampling::Uniform => rng.random_range(0..alphabet.len()),
            Sampling::Legacy => rng.random_range(0..=alphabet.len()),
        };

        if let Some(&byte) = alphabet.get(index) {
            password.push(byte as char);
        }
    }

    if password.len() < length {
        tracing::warn!(
            requested = length,
            produced = password.len(),
            "legacy sampling dropped characters"
        );
    }

    password
}
