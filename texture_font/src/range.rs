// Copyright 2025 the Texture Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Character ranges and the iteration order shared by the metrics and atlas passes.

use core::iter::FusedIterator;

/// Number of codes in the single-byte code space.
pub(crate) const CODE_SPACE: u16 = 256;

/// A contiguous range of single-byte character codes, `[first, first + count)`.
///
/// Both construction passes walk the range through [`CharRange::codes`], so
/// they visit the same codes in the same ascending order and the index of a
/// code in the walk is its index in the glyph table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CharRange {
    first: u8,
    count: u16,
}

impl CharRange {
    /// Creates a range, or `None` if it would extend past code 255.
    pub fn new(first: u8, count: u16) -> Option<Self> {
        let end = u16::from(first).checked_add(count)?;
        (end <= CODE_SPACE).then_some(Self { first, count })
    }

    /// The first code of the range.
    pub fn first(&self) -> u8 {
        self.first
    }

    /// The number of codes in the range.
    pub fn len(&self) -> usize {
        usize::from(self.count)
    }

    /// Whether the range contains no codes.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Index of `code` in the range, or `None` if it lies outside.
    pub fn index_of(&self, code: u32) -> Option<usize> {
        let offset = u16::try_from(code.checked_sub(u32::from(self.first))?).ok()?;
        (offset < self.count).then_some(usize::from(offset))
    }

    /// Whether `code` lies inside the range.
    pub fn contains(&self, code: u32) -> bool {
        self.index_of(code).is_some()
    }

    /// Walks the range in ascending code order.
    pub fn codes(&self) -> Codes {
        let start = u16::from(self.first);
        Codes {
            next: start,
            end: start + self.count,
        }
    }
}

/// Iterator over the codes of a [`CharRange`], in ascending order.
#[derive(Clone, Debug)]
pub struct Codes {
    next: u16,
    end: u16,
}

impl Iterator for Codes {
    type Item = u8;

    #[expect(
        clippy::cast_possible_truncation,
        reason = "CharRange::new guarantees every code is below 256"
    )]
    fn next(&mut self) -> Option<u8> {
        if self.next >= self.end {
            return None;
        }
        let code = self.next as u8;
        self.next += 1;
        Some(code)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.end - self.next);
        (len, Some(len))
    }
}

impl ExactSizeIterator for Codes {}

impl FusedIterator for Codes {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn walks_in_ascending_order() {
        let range = CharRange::new(65, 3).unwrap();
        let codes: Vec<u8> = range.codes().collect();
        assert_eq!(codes, [b'A', b'B', b'C']);
        assert_eq!(range.codes().len(), 3);
    }

    #[test]
    fn full_code_space_ends_at_255() {
        let range = CharRange::new(0, 256).unwrap();
        assert_eq!(range.codes().count(), 256);
        assert_eq!(range.codes().last(), Some(255));
        assert!(CharRange::new(1, 256).is_none());
    }

    #[test]
    fn index_translation() {
        let range = CharRange::new(32, 95).unwrap();
        assert_eq!(range.index_of(32), Some(0));
        assert_eq!(range.index_of(u32::from(b'~')), Some(94));
        assert_eq!(range.index_of(31), None);
        assert_eq!(range.index_of(127), None);
        assert!(!range.contains(0x263A));
    }

    #[test]
    fn empty_range() {
        let range = CharRange::new(10, 0).unwrap();
        assert!(range.is_empty());
        assert_eq!(range.codes().next(), None);
        assert_eq!(range.index_of(10), None);
    }
}
