//! Core view-state value types

/// Inclusive range of label indices.
///
/// # Invariants
/// - `first <= last`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexRange {
    first: usize,
    last: usize,
}

impl IndexRange {
    /// Create a range covering `a..=b`, whichever order the ends arrive in.
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            first: a.min(b),
            last: a.max(b),
        }
    }

    /// Range holding exactly one index.
    pub fn single(index: usize) -> Self {
        Self {
            first: index,
            last: index,
        }
    }

    /// First index (inclusive).
    pub fn first(&self) -> usize {
        self.first
    }

    /// Last index (inclusive).
    pub fn last(&self) -> usize {
        self.last
    }

    /// Number of indices covered. Never zero.
    pub fn len(&self) -> usize {
        self.last - self.first + 1
    }

    /// Always false; present for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `index` lies within the range.
    pub fn contains(&self, index: usize) -> bool {
        (self.first..=self.last).contains(&index)
    }

    /// Whether `other` lies entirely within this range.
    pub fn covers(&self, other: &IndexRange) -> bool {
        self.first <= other.first && other.last <= self.last
    }

    /// Iterate over the covered indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = usize> {
        self.first..=self.last
    }
}

/// Pixel gaps at either end of a run of labels.
///
/// `leading` is the distance from the viewport's start edge to the top of the
/// first label; `trailing` is the distance from the bottom of the last label
/// to the viewport's end edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeOffsets {
    /// Gap before the first label.
    pub leading: i32,
    /// Gap after the last label.
    pub trailing: i32,
}

/// Labels currently on screen, written back to the axis map so tree views can
/// line their branches up with the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleLabels {
    /// Labels actually drawn.
    pub drawn: IndexRange,
    /// Pixel offsets of the drawn run.
    pub drawn_offsets: EdgeOffsets,
    /// Labels that would fit if the flank limit were lifted.
    pub capacity: IndexRange,
    /// Pixel offsets of the capacity run.
    pub capacity_offsets: EdgeOffsets,
    /// True when labels follow the cursor instead of the map's grid.
    pub windowed: bool,
}

impl VisibleLabels {
    /// Write-back for a fitted frame: every visible index is drawn at its own
    /// map position.
    pub fn fitted(range: IndexRange) -> Self {
        Self {
            drawn: range,
            drawn_offsets: EdgeOffsets::default(),
            capacity: range,
            capacity_offsets: EdgeOffsets::default(),
            windowed: false,
        }
    }
}

/// Strip viewport size, split by axis rather than by screen direction.
///
/// For a row strip `primary` is the height and `secondary` the width; a
/// column strip is the other way round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportDimensions {
    /// Extent along the matrix axis the labels follow.
    pub primary: i32,
    /// Extent along the text direction (the scrolled axis).
    pub secondary: i32,
}

impl ViewportDimensions {
    /// Create new viewport dimensions.
    pub fn new(primary: i32, secondary: i32) -> Self {
        Self { primary, secondary }
    }
}
