//! Strip layout settings: axis, orientation, justification, flank limit.

use serde::{Deserialize, Serialize};

/// Which end of the label text is pinned to the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Justification {
    /// Text starts flush with the start edge of the label frame.
    #[default]
    Start,
    /// Text ends flush with the end edge of the label frame.
    End,
}

impl Justification {
    /// The other justification.
    pub fn toggled(self) -> Self {
        match self {
            Self::Start => Self::End,
            Self::End => Self::Start,
        }
    }
}

/// Relationship between the text direction and the scroll direction.
///
/// Row labels read in the same direction the strip scrolls (`Aligned`).
/// Column labels are rotated a quarter turn, so scroll position zero sits at
/// the far end of the text (`Opposed`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Label coordinates increase with scroll coordinates.
    Aligned,
    /// Label coordinates decrease as scroll coordinates increase.
    Opposed,
}

/// Which matrix axis a strip labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StripAxis {
    /// One label per matrix row; the strip scrolls horizontally.
    Rows,
    /// One label per matrix column; text is rotated and the strip scrolls
    /// vertically.
    Columns,
}

impl StripAxis {
    /// Orientation of label text relative to scrolling on this axis.
    pub fn orientation(self) -> Orientation {
        match self {
            Self::Rows => Orientation::Aligned,
            Self::Columns => Orientation::Opposed,
        }
    }

    /// Short name used in log lines.
    pub fn name(self) -> &'static str {
        match self {
            Self::Rows => "rows",
            Self::Columns => "columns",
        }
    }
}

/// How many labels either side of the hovered one a windowed strip draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FlankLimit {
    /// Draw every label that fits.
    #[default]
    Unlimited,
    /// Draw at most this many labels on each side of the hovered label.
    Limited(u32),
}

impl FlankLimit {
    /// Convert from the persisted representation, where negative means
    /// unlimited.
    pub fn from_raw(raw: i32) -> Self {
        u32::try_from(raw).map_or(Self::Unlimited, Self::Limited)
    }

    /// Persisted representation; `-1` for unlimited.
    pub fn to_raw(self) -> i32 {
        match self {
            Self::Unlimited => -1,
            Self::Limited(n) => i32::try_from(n).unwrap_or(i32::MAX),
        }
    }

    /// Whether a label `distance` slots away from the hovered label is
    /// within the flank.
    pub fn allows(self, distance: usize) -> bool {
        match self {
            Self::Unlimited => true,
            Self::Limited(n) => distance <= n as usize,
        }
    }

    /// A zero flank draws only the hovered label, uncoloured and without the
    /// position indicator.
    pub fn is_zero(self) -> bool {
        self == Self::Limited(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_aligned_and_columns_opposed() {
        assert_eq!(StripAxis::Rows.orientation(), Orientation::Aligned);
        assert_eq!(StripAxis::Columns.orientation(), Orientation::Opposed);
    }

    #[test]
    fn justification_toggles() {
        assert_eq!(Justification::Start.toggled(), Justification::End);
        assert_eq!(Justification::End.toggled(), Justification::Start);
    }

    mod flank_limit {
        use super::*;

        #[test]
        fn negative_raw_is_unlimited() {
            assert_eq!(FlankLimit::from_raw(-1), FlankLimit::Unlimited);
            assert_eq!(FlankLimit::from_raw(-42), FlankLimit::Unlimited);
            assert_eq!(FlankLimit::from_raw(3), FlankLimit::Limited(3));
        }

        #[test]
        fn raw_round_trip() {
            for raw in [-1, 0, 1, 7] {
                assert_eq!(FlankLimit::from_raw(raw).to_raw(), raw);
            }
        }

        #[test]
        fn allows_is_inclusive() {
            let flank = FlankLimit::Limited(2);
            assert!(flank.allows(0));
            assert!(flank.allows(2));
            assert!(!flank.allows(3));
            assert!(FlankLimit::Unlimited.allows(usize::MAX));
        }

        #[test]
        fn only_limited_zero_is_zero() {
            assert!(FlankLimit::Limited(0).is_zero());
            assert!(!FlankLimit::Limited(1).is_zero());
            assert!(!FlankLimit::Unlimited.is_zero());
        }
    }
}
