use std::{fmt, str::FromStr};

use sha2::{Digest as _, Sha256};

/// A 256-bit seed that makes board generation reproducible.
///
/// Seeds are written as 64 lowercase hex digits, and parsing accepts either
/// case.
///
/// # Examples
///
/// ```
/// use tileslide_generator::BoardSeed;
///
/// let text = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef";
/// let seed: BoardSeed = text.parse()?;
/// assert_eq!(seed.to_string(), text);
/// # Ok::<(), tileslide_generator::SeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSeed([u8; 32]);

impl BoardSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local random source.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Derives the generator state for boards of side `size`.
    ///
    /// Hashing the size in keeps boards of different sizes from sharing a
    /// shuffle stream.
    pub(crate) fn rng_seed(&self, size: usize) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(self.0);
        hasher.update(size.to_le_bytes());
        hasher.finalize().into()
    }
}

impl From<[u8; 32]> for BoardSeed {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for BoardSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Errors from parsing a [`BoardSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedError {
    /// The text is not exactly 64 characters long.
    #[display("seed must be 64 hex digits, got {len} characters")]
    InvalidLength {
        /// Length of the rejected text.
        len: usize,
    },
    /// The text contains a character that is not a hex digit.
    #[display("invalid hex digit at position {position}")]
    InvalidHex {
        /// Byte offset of the offending character.
        position: usize,
    },
}

impl FromStr for BoardSeed {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.as_bytes();
        if digits.len() != 64 {
            return Err(SeedError::InvalidLength { len: s.len() });
        }

        let nibble = |position: usize| {
            char::from(digits[position])
                .to_digit(16)
                .and_then(|d| u8::try_from(d).ok())
                .ok_or(SeedError::InvalidHex { position })
        };

        let mut bytes = [0; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = (nibble(2 * i)? << 4) | nibble(2 * i + 1)?;
        }
        Ok(Self(bytes))
    }
}
