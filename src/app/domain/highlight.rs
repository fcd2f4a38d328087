use std::ops::Range;

use super::display::Rgb;

/// A named visual style applied to tagged buffer ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightStyle {
    pub name: &'static str,
    pub background: Rgb,
}

/// Style used for search matches.
pub const FOUND_STYLE: HighlightStyle = HighlightStyle {
    name: "found",
    background: Rgb::YELLOW,
};

/// Byte ranges currently marked as search matches.
///
/// Ranges are kept in ascending order and never overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSet {
    style: HighlightStyle,
    ranges: Vec<Range<usize>>,
}

impl HighlightSet {
    pub fn new(style: HighlightStyle) -> Self {
        Self {
            style,
            ranges: Vec::new(),
        }
    }

    pub fn style(&self) -> HighlightStyle {
        self.style
    }

    pub fn ranges(&self) -> &[Range<usize>] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn clear(&mut self) {
        self.ranges.clear();
    }

    /// Append a range that starts at or after the end of the last one.
    pub fn push(&mut self, range: Range<usize>) {
        debug_assert!(range.start < range.end, "empty highlight range {range:?}");
        debug_assert!(
            self.ranges.last().is_none_or(|last| last.end <= range.start),
            "highlight range {range:?} overlaps or precedes the last one"
        );
        self.ranges.push(range);
    }
}

impl Default for HighlightSet {
    fn default() -> Self {
        Self::new(FOUND_STYLE)
    }
}
