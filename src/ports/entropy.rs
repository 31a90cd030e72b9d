//! Entropy port supplying random bytes and integers to generators.

/// Number of random bytes backing a single UUID.
pub const UUID_BYTES: usize = 16;

/// Source of randomness consumed by the generators.
///
/// Secure and general-purpose draws are separate methods because the
/// `crypto.randomUUID` strategy must never fall back to a non-cryptographic
/// generator, while the other strategies are free to.
pub trait Entropy: Send + Sync {
    /// Returns 16 bytes from a cryptographically secure generator.
    fn secure_bytes(&self) -> [u8; UUID_BYTES];

    /// Returns 16 bytes from a general-purpose generator.
    fn random_bytes(&self) -> [u8; UUID_BYTES];

    /// Returns an integer drawn uniformly from `[0, bound)`.
    ///
    /// `bound` must be non-zero.
    fn below(&self, bound: u32) -> u32;
}
