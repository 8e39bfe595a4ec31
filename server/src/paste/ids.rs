//! Random paste identifiers.
//!
//! Identifiers are drawn from a thread-local generator seeded from OS
//! entropy, so concurrent handlers never share generator state and separate
//! process runs never replay the same sequence.
//!
//! No uniqueness check is made against identifiers already on disk. With the
//! default length of 8 there are 62^8 possible identifiers; a collision simply
//! lands the caller on an existing paste.

use rand::Rng;

/// The 62-character alphanumeric alphabet identifiers are drawn from.
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate a `length`-character alphanumeric identifier.
pub fn generate(length: usize) -> String {
    generate_with(&mut rand::rng(), length)
}

/// Generate an identifier from an explicit random source.
pub fn generate_with<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..ALPHABET.len());
            ALPHABET[idx] as char
        })
        .collect()
}

/// Mints identifiers of a fixed, configured length.
#[derive(Debug, Clone, Copy)]
pub struct IdGenerator {
    length: usize,
}

impl IdGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Mint a fresh identifier.
    pub fn next(&self) -> String {
        generate(self.length)
    }
}
