//! Argument and Result Vectors
//!
//! The syscall ABI moves exactly [`WORDS`] machine words in each direction.
//! Both shapes are plain register images: the trampoline never looks inside
//! them, and neither do these types beyond positional access.
//!
//! # Layout
//! ```text
//! ┌────────┬──────────────────────────────────────────────┐
//! │ slot 0 │ slot 1 .. slot 7                             │
//! ├────────┼──────────────────────────────────────────────┤
//! │ tag    │ operands (request) / reply words (result)    │
//! └────────┴──────────────────────────────────────────────┘
//! ```
//! Slot `n` travels in argument register `n` (`a0`..`a7` on RISC-V,
//! `x0`..`x7` on AArch64).

use core::fmt;
use core::ops::Index;

/// Number of machine words in each direction of a syscall.
pub const WORDS: usize = 8;

/// Request words loaded into the argument registers before the trap.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct ArgVector([usize; WORDS]);

impl ArgVector {
    /// Wrap a raw register image.
    #[inline]
    pub const fn new(words: [usize; WORDS]) -> Self {
        Self(words)
    }

    /// Build a request from a tag and its seven operands.
    #[inline]
    pub const fn from_parts(tag: usize, operands: [usize; WORDS - 1]) -> Self {
        let mut words = [0; WORDS];
        words[0] = tag;
        let mut i = 0;
        while i < WORDS - 1 {
            words[i + 1] = operands[i];
            i += 1;
        }
        Self(words)
    }

    /// Slot 0: the syscall number or operation tag.
    #[inline]
    pub const fn tag(&self) -> usize {
        self.0[0]
    }

    /// Operand `n` (slot `n + 1`), if it exists.
    #[inline]
    pub const fn operand(&self, n: usize) -> Option<usize> {
        if n < WORDS - 1 {
            Some(self.0[n + 1])
        } else {
            None
        }
    }

    /// Borrow the register image.
    #[inline]
    pub const fn words(&self) -> &[usize; WORDS] {
        &self.0
    }

    /// Unwrap into the register image.
    #[inline]
    pub const fn into_words(self) -> [usize; WORDS] {
        self.0
    }
}

/// Reply words the kernel left in the argument registers.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct ResultVector([usize; WORDS]);

impl ResultVector {
    /// Wrap a raw register image.
    #[inline]
    pub const fn new(words: [usize; WORDS]) -> Self {
        Self(words)
    }

    /// An all-zero buffer, ready to be overwritten by a call.
    #[inline]
    pub const fn zeroed() -> Self {
        Self([0; WORDS])
    }

    /// Slot 0 of the reply.
    #[inline]
    pub const fn tag(&self) -> usize {
        self.0[0]
    }

    /// Reply word `n`, if it exists.
    #[inline]
    pub const fn word(&self, n: usize) -> Option<usize> {
        if n < WORDS {
            Some(self.0[n])
        } else {
            None
        }
    }

    /// Borrow the register image.
    #[inline]
    pub const fn words(&self) -> &[usize; WORDS] {
        &self.0
    }

    /// Unwrap into the register image.
    #[inline]
    pub const fn into_words(self) -> [usize; WORDS] {
        self.0
    }
}

impl From<[usize; WORDS]> for ArgVector {
    fn from(words: [usize; WORDS]) -> Self {
        Self(words)
    }
}

impl From<ArgVector> for [usize; WORDS] {
    fn from(args: ArgVector) -> Self {
        args.0
    }
}

impl From<[usize; WORDS]> for ResultVector {
    fn from(words: [usize; WORDS]) -> Self {
        Self(words)
    }
}

impl From<ResultVector> for [usize; WORDS] {
    fn from(reply: ResultVector) -> Self {
        reply.0
    }
}

impl Index<usize> for ArgVector {
    type Output = usize;

    fn index(&self, slot: usize) -> &usize {
        &self.0[slot]
    }
}

impl Index<usize> for ResultVector {
    type Output = usize;

    fn index(&self, slot: usize) -> &usize {
        &self.0[slot]
    }
}

/// Shared hex formatting for both register images.
struct Words<'a>(&'a [usize; WORDS]);

impl fmt::Debug for Words<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, word) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:#x}", word)?;
        }
        f.write_str("]")
    }
}

impl fmt::Debug for ArgVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ArgVector").field(&Words(&self.0)).finish()
    }
}

impl fmt::Debug for ResultVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ResultVector").field(&Words(&self.0)).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_places_tag_in_slot_zero() {
        let args = ArgVector::from_parts(7, [100, 200, 0, 0, 0, 0, 0]);
        assert_eq!(args.into_words(), [7, 100, 200, 0, 0, 0, 0, 0]);
        assert_eq!(args.tag(), 7);
        assert_eq!(args.operand(0), Some(100));
        assert_eq!(args.operand(1), Some(200));
        assert_eq!(args.operand(6), Some(0));
        assert_eq!(args.operand(7), None);
    }

    #[test]
    fn test_result_word_bounds() {
        let reply = ResultVector::new([1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(reply.word(0), Some(1));
        assert_eq!(reply.word(7), Some(8));
        assert_eq!(reply.word(8), None);
        assert_eq!(reply[3], 4);
    }

    #[test]
    fn test_layout_is_eight_words() {
        assert_eq!(core::mem::size_of::<ArgVector>(), WORDS * core::mem::size_of::<usize>());
        assert_eq!(core::mem::size_of::<ResultVector>(), WORDS * core::mem::size_of::<usize>());
        assert_eq!(core::mem::align_of::<ResultVector>(), core::mem::align_of::<usize>());
    }

    #[test]
    fn test_debug_is_hex() {
        let args = ArgVector::from_parts(0x10, [0xff, 0, 0, 0, 0, 0, 0]);
        assert_eq!(
            format!("{:?}", args),
            "ArgVector([0x10, 0xff, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0])"
        );
    }
}
