//! Cyclic beat patterns.

use crate::error::{SetupError, SetupResult};

/// One symbol in a beat pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeatSymbol {
    /// `+` - input may be accepted on this beat.
    Accept,
    /// `-` - input is rejected on this beat.
    Reject,
    /// `=` - boundary beat. In the pulse sequence it advances the
    /// routine; in the routine sequence it submits the current move.
    Submit,
}

impl BeatSymbol {
    /// Parse a single pattern character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(BeatSymbol::Accept),
            '-' => Some(BeatSymbol::Reject),
            '=' => Some(BeatSymbol::Submit),
            _ => None,
        }
    }

    /// The pattern character for this symbol.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            BeatSymbol::Accept => '+',
            BeatSymbol::Reject => '-',
            BeatSymbol::Submit => '=',
        }
    }
}

/// A finite cyclic sequence of beat symbols with a current position.
///
/// The position only moves forward, one step per [`advance`], wrapping
/// modulo the sequence length.
///
/// [`advance`]: BeatPattern::advance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeatPattern {
    symbols: Vec<BeatSymbol>,
    /// Index read by the next `advance`.
    next: usize,
    /// Symbol read by the most recent `advance`; `Reject` before the
    /// first one.
    current: BeatSymbol,
}

impl BeatPattern {
    /// Parse a pattern from its compact string form, e.g. `"+++=--"`.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::EmptyPattern`] for an empty string and
    /// [`SetupError::InvalidBeatChar`] for characters outside `+-=`.
    pub fn parse(s: &str) -> SetupResult<Self> {
        if s.is_empty() {
            return Err(SetupError::EmptyPattern);
        }
        let mut symbols = Vec::with_capacity(s.len());
        for c in s.chars() {
            symbols.push(BeatSymbol::from_char(c).ok_or(SetupError::InvalidBeatChar(c))?);
        }
        Ok(Self {
            symbols,
            next: 0,
            current: BeatSymbol::Reject,
        })
    }

    /// Advance one step and return the symbol at the new position.
    pub fn advance(&mut self) -> BeatSymbol {
        self.current = self.symbols[self.next];
        self.next = (self.next + 1) % self.symbols.len();
        self.current
    }

    /// The symbol at the current position.
    #[must_use]
    pub const fn current(&self) -> BeatSymbol {
        self.current
    }

    /// Skip positions without reading them.
    pub(crate) fn skip(&mut self, n: usize) {
        self.next = (self.next + n) % self.symbols.len();
    }

    /// Length of one full cycle.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the pattern is empty (never true for a parsed pattern).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        let p = BeatPattern::parse("+++=--").unwrap();
        assert_eq!(p.len(), 6);
        assert_eq!(p.current(), BeatSymbol::Reject);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(BeatPattern::parse(""), Err(SetupError::EmptyPattern));
        assert_eq!(
            BeatPattern::parse("+x-"),
            Err(SetupError::InvalidBeatChar('x'))
        );
    }

    #[test]
    fn test_advance_wraps() {
        let mut p = BeatPattern::parse("+-=").unwrap();
        let seen: Vec<char> = (0..7).map(|_| p.advance().as_char()).collect();
        assert_eq!(seen, vec!['+', '-', '=', '+', '-', '=', '+']);
    }

    #[test]
    fn test_skip() {
        let mut p = BeatPattern::parse("=++-").unwrap();
        p.skip(1);
        assert_eq!(p.advance(), BeatSymbol::Accept);
        assert_eq!(p.advance(), BeatSymbol::Accept);
        assert_eq!(p.advance(), BeatSymbol::Reject);
        // Wrap back to the skipped slot.
        assert_eq!(p.advance(), BeatSymbol::Submit);
    }
}
