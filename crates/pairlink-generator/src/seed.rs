use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed that determines a generated board.
///
/// Seeds are written as 64 lowercase hexadecimal characters.
///
/// # Examples
///
/// ```
/// use pairlink_generator::BoardSeed;
///
/// let text = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";
/// let seed: BoardSeed = text.parse()?;
/// assert_eq!(seed.to_string(), text);
///
/// // Derived seeds are deterministic and distinct per label and index.
/// assert_eq!(seed.derive("level", 1), seed.derive("level", 1));
/// assert_ne!(seed.derive("level", 1), seed.derive("level", 2));
/// assert_ne!(seed.derive("level", 1), seed.derive("reshuffle", 1));
/// # Ok::<(), pairlink_generator::SeedParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSeed([u8; 32]);

impl BoardSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Draws a fresh seed from the thread-local random generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Derives an independent sub-seed from this seed.
    ///
    /// The result is the SHA-256 digest of this seed, the label, and the index,
    /// so a session can hand out per-level or per-shuffle seeds that are all
    /// reproducible from a single root seed.
    #[must_use]
    pub fn derive(&self, label: &str, index: u64) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(self.0);
        hasher.update((label.len() as u64).to_le_bytes());
        hasher.update(label.as_bytes());
        hasher.update(index.to_le_bytes());
        Self(hasher.finalize().into())
    }

    pub(crate) fn rng(self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl Display for BoardSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Errors from parsing a [`BoardSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The text is not 64 characters long.
    #[display("seed must be 64 hexadecimal characters, got {len}")]
    InvalidLength {
        /// Length of the parsed text, in characters.
        len: usize,
    },
    /// The text contains a non-hexadecimal character.
    #[display("invalid hexadecimal character {ch:?} at index {index}")]
    InvalidHexDigit {
        /// The offending character.
        ch: char,
        /// Character index in the text.
        index: usize,
    },
}

impl FromStr for BoardSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(SeedParseError::InvalidLength { len });
        }

        let mut bytes = [0; 32];
        for (index, ch) in s.chars().enumerate() {
            let nibble = ch
                .to_digit(16)
                .ok_or(SeedParseError::InvalidHexDigit { ch, index })?;
            #[expect(clippy::cast_possible_truncation)]
            let nibble = nibble as u8;
            bytes[index / 2] |= if index % 2 == 0 { nibble << 4 } else { nibble };
        }
        Ok(Self(bytes))
    }
}
