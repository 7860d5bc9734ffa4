//! Ordered, disjoint rune-range sets backing character classes.
//!
//! Ranges are inclusive `(lo, hi)` pairs kept sorted, non-overlapping, and
//! non-adjacent; inserting runes or unioning sets re-coalesces so that a
//! run like `a`, `b`, `c` is stored as the single range `a-c`. Adjacency
//! is computed over assignable scalar values, so `\u{D7FF}` and `\u{E000}`
//! count as neighbours and the surrogate gap never splits a range.

/// The smallest rune strictly above `c`, skipping the surrogate gap.
pub(crate) fn rune_succ(c: char) -> Option<char> {
    match c {
        '\u{D7FF}' => Some('\u{E000}'),
        char::MAX => None,
        c => char::from_u32(c as u32 + 1),
    }
}

/// The largest rune strictly below `c`, skipping the surrogate gap.
pub(crate) fn rune_pred(c: char) -> Option<char> {
    match c {
        '\u{E000}' => Some('\u{D7FF}'),
        '\0' => None,
        c => char::from_u32(c as u32 - 1),
    }
}

/// A set of runes stored as coalesced inclusive ranges.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassRanges {
    ranges: Vec<(char, char)>,
}

impl ClassRanges {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from arbitrary (possibly overlapping, unordered) ranges.
    pub fn from_ranges<I>(ranges: I) -> Self
    where
        I: IntoIterator<Item = (char, char)>,
    {
        let mut set = Self {
            ranges: ranges.into_iter().filter(|(lo, hi)| lo <= hi).collect(),
        };
        set.normalize();
        set
    }

    /// The full rune space minus `\n`, the language of `.`.
    pub fn dot() -> Self {
        Self::from_ranges([('\0', '\t'), ('\u{B}', char::MAX)])
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.ranges.iter().copied()
    }

    pub fn contains(&self, c: char) -> bool {
        self.ranges.iter().any(|&(lo, hi)| lo <= c && c <= hi)
    }

    /// The single rune this set holds, if it holds exactly one.
    pub fn single_rune(&self) -> Option<char> {
        match self.ranges.as_slice() {
            [(lo, hi)] if lo == hi => Some(*lo),
            _ => None,
        }
    }

    /// Index of the one-rune range `(c, c)`, if present.
    ///
    /// A rune inside a wider range does not count: only runes the set holds
    /// in isolation can be split back out of it.
    pub fn singleton_position(&self, c: char) -> Option<usize> {
        self.ranges.iter().position(|&r| r == (c, c))
    }

    /// Remove the range at `index`.
    pub fn remove(&mut self, index: usize) {
        self.ranges.remove(index);
    }

    pub fn insert(&mut self, c: char) {
        self.insert_range(c, c);
    }

    pub fn insert_range(&mut self, lo: char, hi: char) {
        if lo <= hi {
            self.ranges.push((lo, hi));
            self.normalize();
        }
    }

    pub fn union(&mut self, other: &ClassRanges) {
        self.ranges.extend_from_slice(&other.ranges);
        self.normalize();
    }

    /// Whether this set is exactly the language of `.`.
    pub fn is_dot(&self) -> bool {
        *self == Self::dot()
    }

    /// Whether this set covers every rune.
    pub fn is_full(&self) -> bool {
        self.ranges == [('\0', char::MAX)]
    }

    /// Whether the set touches both ends of the rune space, which makes the
    /// complemented `[^…]` rendering the shorter one.
    pub fn spans_extremes(&self) -> bool {
        match (self.ranges.first(), self.ranges.last()) {
            (Some(&(lo, _)), Some(&(_, hi))) => lo == '\0' && hi == char::MAX,
            _ => false,
        }
    }

    /// The runes *not* in this set, as coalesced ranges.
    pub fn gaps(&self) -> Vec<(char, char)> {
        let mut out = Vec::new();
        let mut next = Some('\0');
        for &(lo, hi) in &self.ranges {
            if let (Some(start), Some(end)) = (next, rune_pred(lo)) {
                if start <= end {
                    out.push((start, end));
                }
            }
            next = rune_succ(hi);
        }
        if let Some(start) = next {
            out.push((start, char::MAX));
        }
        out
    }

    /// Sort and coalesce overlapping or adjacent ranges.
    fn normalize(&mut self) {
        self.ranges.sort_unstable();
        let mut merged: Vec<(char, char)> = Vec::with_capacity(self.ranges.len());
        for (lo, hi) in self.ranges.drain(..) {
            match merged.last_mut() {
                Some((_, prev_hi)) if rune_succ(*prev_hi).map_or(true, |s| s >= lo) => {
                    *prev_hi = (*prev_hi).max(hi);
                }
                _ => merged.push((lo, hi)),
            }
        }
        self.ranges = merged;
    }
}
