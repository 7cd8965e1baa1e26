//! Tile symbols and palettes.

use std::fmt::{self, Display};

/// An opaque tile identity.
///
/// Only equality matters to the puzzle rules; what a symbol looks like is up to
/// the presentation layer.
///
/// Symbols `0..26` are written as `A`-`Z` and `26..52` as `a`-`z` in the
/// textual grid format.
///
/// # Examples
///
/// ```
/// use pairlink_core::Symbol;
///
/// let symbol = Symbol::new(2);
/// assert_eq!(symbol.to_char(), Some('C'));
/// assert_eq!(Symbol::from_char('C'), Some(symbol));
/// assert_eq!(Symbol::new(100).to_char(), None);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Symbol(u16);

impl Symbol {
    /// Creates a symbol from its identifier.
    #[must_use]
    #[inline]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Returns the symbol identifier.
    #[must_use]
    #[inline]
    pub const fn id(self) -> u16 {
        self.0
    }

    /// Returns the letter used for this symbol in the textual grid format.
    #[must_use]
    pub fn to_char(self) -> Option<char> {
        let id = u8::try_from(self.0).ok()?;
        match id {
            0..26 => Some(char::from(b'A' + id)),
            26..52 => Some(char::from(b'a' + (id - 26))),
            _ => None,
        }
    }

    /// Parses a symbol letter of the textual grid format.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        let byte = u8::try_from(ch).ok()?;
        match byte {
            b'A'..=b'Z' => Some(Self(u16::from(byte - b'A'))),
            b'a'..=b'z' => Some(Self(u16::from(byte - b'a') + 26)),
            _ => None,
        }
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_char() {
            Some(ch) => write!(f, "{ch}"),
            None => write!(f, "#{}", self.0),
        }
    }
}

/// A fixed palette of distinct symbols, `Symbol(0)..Symbol(len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Palette {
    len: u16,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LEN)
    }
}

impl Palette {
    /// Palette size used when none is configured.
    pub const DEFAULT_LEN: u16 = 20;

    /// Creates a palette with `len` symbols.
    #[must_use]
    pub const fn new(len: u16) -> Self {
        Self { len }
    }

    /// Returns the number of symbols in the palette.
    #[must_use]
    pub fn len(self) -> usize {
        usize::from(self.len)
    }

    /// Returns `true` if the palette has no symbols.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the symbol belongs to this palette.
    #[must_use]
    pub const fn contains(self, symbol: Symbol) -> bool {
        symbol.0 < self.len
    }

    /// Iterates over the palette symbols in identifier order.
    pub fn symbols(self) -> impl DoubleEndedIterator<Item = Symbol> + ExactSizeIterator + Clone {
        (0..self.len).map(Symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_round_trip_for_all_lettered_symbols() {
        for id in 0..52 {
            let symbol = Symbol::new(id);
            let ch = symbol.to_char().unwrap();
            assert_eq!(Symbol::from_char(ch), Some(symbol));
        }
        assert_eq!(Symbol::new(25).to_char(), Some('Z'));
        assert_eq!(Symbol::new(26).to_char(), Some('a'));
        assert_eq!(Symbol::new(52).to_char(), None);
        assert_eq!(Symbol::from_char('.'), None);
    }

    #[test]
    fn test_display_falls_back_to_identifier() {
        assert_eq!(Symbol::new(0).to_string(), "A");
        assert_eq!(Symbol::new(300).to_string(), "#300");
    }

    #[test]
    fn test_palette() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 20);
        assert!(palette.contains(Symbol::new(19)));
        assert!(!palette.contains(Symbol::new(20)));
        assert_eq!(palette.symbols().next(), Some(Symbol::new(0)));
        assert_eq!(palette.symbols().last(), Some(Symbol::new(19)));
        assert!(Palette::new(0).is_empty());
    }
}
