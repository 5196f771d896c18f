//! UTF-16 codepoint segmentation.
//!
//! Splits a sequence of 16-bit text units into codepoint groups: a lone
//! unit, or a leading surrogate followed by a trailing surrogate. Malformed
//! surrogates are dropped rather than repaired, so no group ever holds half
//! of a pair.

/// Number of high bits that tag a surrogate unit.
const TAG_BITS: u32 = 6;
/// Shift that isolates the tag bits of a 16-bit unit.
const TAG_SHIFT: u32 = u16::BITS - TAG_BITS;
/// `110110`: leading (high) surrogate.
const LEADING_TAG: u16 = 0b11_0110;
/// `110111`: trailing (low) surrogate.
const TRAILING_TAG: u16 = 0b11_0111;

/// Check if a unit is a leading surrogate.
#[inline]
#[must_use]
pub const fn is_leading_surrogate(unit: u16) -> bool {
    unit >> TAG_SHIFT == LEADING_TAG
}

/// Check if a unit is a trailing surrogate.
#[inline]
#[must_use]
pub const fn is_trailing_surrogate(unit: u16) -> bool {
    unit >> TAG_SHIFT == TRAILING_TAG
}

/// One decoded character position: one unit, or a surrogate pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CodepointGroup {
    units: [u16; 2],
    len: u8,
}

impl CodepointGroup {
    /// A group holding a single non-surrogate unit.
    #[must_use]
    pub const fn single(unit: u16) -> Self {
        Self {
            units: [unit, 0],
            len: 1,
        }
    }

    /// A group holding a surrogate pair.
    #[must_use]
    pub const fn pair(leading: u16, trailing: u16) -> Self {
        Self {
            units: [leading, trailing],
            len: 2,
        }
    }

    /// The units of this group, in order.
    #[must_use]
    pub fn units(&self) -> &[u16] {
        &self.units[..usize::from(self.len)]
    }

    /// Number of units (1 or 2).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Groups are never empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Whether this group is a surrogate pair.
    #[must_use]
    pub const fn is_pair(&self) -> bool {
        self.len == 2
    }

    /// Decode the group into a `char`.
    #[must_use]
    pub fn to_char(&self) -> Option<char> {
        char::decode_utf16(self.units().iter().copied())
            .next()
            .and_then(Result::ok)
    }
}

/// Streaming segmenter over a borrowed unit slice.
///
/// Holds at most one pending leading surrogate. Each call to
/// [`segment`] or [`codepoints`] starts with fresh state.
#[derive(Clone, Debug)]
pub struct Codepoints<'a> {
    units: std::slice::Iter<'a, u16>,
    pending: Option<u16>,
}

impl Iterator for Codepoints<'_> {
    type Item = CodepointGroup;

    fn next(&mut self) -> Option<Self::Item> {
        for &unit in self.units.by_ref() {
            if is_leading_surrogate(unit) {
                // A second leading surrogate replaces an unterminated one.
                self.pending = Some(unit);
            } else if is_trailing_surrogate(unit) {
                if let Some(leading) = self.pending.take() {
                    return Some(CodepointGroup::pair(leading, unit));
                }
                // Orphaned trailing surrogate.
            } else {
                self.pending = None;
                return Some(CodepointGroup::single(unit));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.units.len()))
    }
}

/// Iterate over codepoint groups in a unit sequence.
#[must_use]
pub fn codepoints(units: &[u16]) -> Codepoints<'_> {
    Codepoints {
        units: units.iter(),
        pending: None,
    }
}

/// Segment a unit sequence into codepoint groups.
#[must_use]
pub fn segment(units: &[u16]) -> Vec<CodepointGroup> {
    codepoints(units).collect()
}

/// Unit indices at which a kept codepoint group starts, followed by `units.len()`.
///
/// Dropped surrogates never start a group, so they never appear as a boundary.
#[must_use]
pub fn codepoint_boundaries(units: &[u16]) -> Vec<usize> {
    let mut bounds = Vec::with_capacity(units.len() + 1);
    let mut pending: Option<usize> = None;
    for (idx, &unit) in units.iter().enumerate() {
        if is_leading_surrogate(unit) {
            pending = Some(idx);
        } else if is_trailing_surrogate(unit) {
            if let Some(start) = pending.take() {
                bounds.push(start);
            }
        } else {
            pending = None;
            bounds.push(idx);
        }
    }
    bounds.push(units.len());
    bounds
}

/// Move `index` off the trailing half of a surrogate pair.
///
/// An index that lands between a leading and its trailing surrogate is moved
/// back to the leading unit. Indices past the end clamp to `units.len()`.
#[must_use]
pub fn align_to_codepoint(units: &[u16], index: usize) -> usize {
    let index = index.min(units.len());
    if index == 0 || index == units.len() {
        return index;
    }
    if is_trailing_surrogate(units[index]) && is_leading_surrogate(units[index - 1]) {
        index - 1
    } else {
        index
    }
}
