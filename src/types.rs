//! Core data types for the processing-element chain.
//!
//! This module contains the fundamental vocabulary used throughout the
//! crate: the machine word stored in chain channels, the two-state [`Wire`]
//! wrapper that models an undriven signal line, and the compile-time sizing
//! constants of a processing element.
//!
//! # Words and wires
//!
//! A [`Word`] is a fixed-width non-negative integer, the only element type
//! the chain stores. A [`Wire`] wraps a value that may not have been driven
//! yet: storage slots start undefined and become defined on first
//! assignment. Reading an undefined wire for computation is a programmer
//! error and panics; undefined wires only ever appear in debug output,
//! rendered as `?`.
//!
//! # Sizing
//!
//! [`CHANNELS`], [`SCRATCH_SLOTS`] and [`WORD_BITS`] are compile-time
//! constants. They are not runtime-configurable: every node of every chain
//! has the same shape, exactly like the identical circuit elements the
//! model simulates.

use std::fmt;

/// Machine word stored in a channel slot. Non-negative by construction.
pub type Word = u8;

/// Width of a [`Word`] in bits, excluding the continuation flag.
pub const WORD_BITS: usize = 8;

/// Number of independent storage channels per processing element.
pub const CHANNELS: usize = 3;

/// Number of scratch word/flag slot pairs per processing element.
pub const SCRATCH_SLOTS: usize = 2;

/// Index of a storage channel; valid values are `0..CHANNELS`.
pub type ChannelId = usize;

/// A signal line that is either undriven or carries a value.
///
/// Models the pre-initialization state of circuit storage: a freshly
/// created node has every slot undriven. An undriven wire can be displayed
/// (as `?`) but never read for computation; [`Wire::get`] panics.
///
/// `Wire` deliberately does not implement `PartialEq`: an undriven value
/// compares with nothing.
#[derive(Debug, Clone, Copy)]
pub enum Wire<T> {
    /// No value has been driven onto this wire yet.
    Undef,
    /// The wire carries a value.
    Def(T),
}

impl<T: Copy> Wire<T> {
    /// Read the driven value.
    ///
    /// # Panics
    ///
    /// Panics if the wire is undriven. This is a protocol design error,
    /// never an expected runtime condition.
    pub fn get(self) -> T {
        match self {
            Wire::Def(v) => v,
            Wire::Undef => panic!("read of an undriven wire"),
        }
    }

    /// Whether a value has been driven onto this wire.
    pub fn is_def(self) -> bool {
        matches!(self, Wire::Def(_))
    }
}

impl<T> Default for Wire<T> {
    fn default() -> Self {
        Wire::Undef
    }
}

impl<T: fmt::Display> fmt::Display for Wire<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Wire::Def(v) => write!(f, "{v}"),
            Wire::Undef => write!(f, "?"),
        }
    }
}

/// A word slot: undriven, or holding a word.
pub type WordWire = Wire<Word>;

/// A flag slot: undriven, or holding a boolean.
pub type FlagWire = Wire<bool>;

/// Numeric base used by chain state reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayBase {
    Binary,
    Quaternary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl DisplayBase {
    /// Validate a requested base, falling back to decimal with a warning.
    ///
    /// Only 2, 4, 8, 16 and 10 are meaningful; for the power-of-two bases
    /// the digit width must also evenly cover [`WORD_BITS`], otherwise a
    /// report could not show whole words.
    pub fn checked(base: u32) -> DisplayBase {
        let candidate = match base {
            2 => Some(DisplayBase::Binary),
            4 => Some(DisplayBase::Quaternary),
            8 => Some(DisplayBase::Octal),
            16 => Some(DisplayBase::Hexadecimal),
            10 => Some(DisplayBase::Decimal),
            _ => None,
        };
        let Some(b) = candidate else {
            tracing::warn!("base {base} is not supported for reports; using 10");
            return DisplayBase::Decimal;
        };
        if let Some(bits) = b.bits_per_digit() {
            if WORD_BITS % bits != 0 {
                tracing::warn!("base {base} cannot show whole {WORD_BITS}-bit words; using 10");
                return DisplayBase::Decimal;
            }
        }
        b
    }

    fn bits_per_digit(self) -> Option<usize> {
        match self {
            DisplayBase::Binary => Some(1),
            DisplayBase::Quaternary => Some(2),
            DisplayBase::Octal => Some(3),
            DisplayBase::Hexadecimal => Some(4),
            DisplayBase::Decimal => None,
        }
    }

    /// Render a word in this base, zero-padded to a full word width.
    pub fn render(self, word: Word) -> String {
        match self {
            DisplayBase::Binary => format!("{word:0width$b}", width = WORD_BITS),
            DisplayBase::Quaternary => {
                let mut digits = [0u8; WORD_BITS / 2];
                let mut w = word;
                for d in digits.iter_mut().rev() {
                    *d = b'0' + (w & 0b11);
                    w >>= 2;
                }
                String::from_utf8_lossy(&digits).into_owned()
            }
            DisplayBase::Octal => format!("{word:0width$o}", width = WORD_BITS.div_ceil(3)),
            DisplayBase::Decimal => format!("{word}"),
            DisplayBase::Hexadecimal => format!("{word:0width$X}", width = WORD_BITS / 4),
        }
    }

    /// Render a word slot, showing `?` for an undriven wire.
    pub fn render_wire(self, wire: WordWire) -> String {
        match wire {
            Wire::Def(w) => self.render(w),
            Wire::Undef => "?".to_string(),
        }
    }
}
