//! Font attributes for label rendering.

use serde::{Deserialize, Serialize};

/// Font style flags, mirroring the plain/bold/italic combinations most
/// toolkits expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontStyle {
    /// Regular weight, upright.
    #[default]
    Plain,
    /// Bold weight, upright.
    Bold,
    /// Regular weight, slanted.
    Italic,
    /// Bold weight, slanted.
    BoldItalic,
}

impl FontStyle {
    /// The same style with bold weight added.
    ///
    /// Used for the hovered label.
    pub fn emboldened(self) -> Self {
        match self {
            Self::Plain | Self::Bold => Self::Bold,
            Self::Italic | Self::BoldItalic => Self::BoldItalic,
        }
    }

    /// Whether the style carries bold weight.
    pub fn is_bold(self) -> bool {
        matches!(self, Self::Bold | Self::BoldItalic)
    }
}

/// A concrete font: face, style and point size.
///
/// This is what metrics and surfaces receive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontSpec {
    /// Font family name.
    pub face: String,
    /// Style flags.
    pub style: FontStyle,
    /// Point size (pixels per em on the surfaces this crate targets).
    pub size: u32,
}

impl FontSpec {
    /// Create a font spec.
    pub fn new(face: impl Into<String>, style: FontStyle, size: u32) -> Self {
        Self {
            face: face.into(),
            style,
            size,
        }
    }

    /// Same face and style at a different size.
    pub fn with_size(&self, size: u32) -> Self {
        Self {
            size,
            ..self.clone()
        }
    }

    /// Same face and size with a different style.
    pub fn with_style(&self, style: FontStyle) -> Self {
        Self {
            style,
            ..self.clone()
        }
    }
}

/// How a font changed between two sets of attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontChange {
    /// Nothing that affects rendering changed.
    None,
    /// Only the point size changed.
    SizeOnly,
    /// Face or style changed (size may also have changed).
    FaceOrStyle,
}

/// Persisted font settings for one label strip.
///
/// # Invariants
/// After [`FontAttributes::normalized`]: `1 <= min_size <= size <= max_size`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontAttributes {
    /// Font family name.
    pub face: String,
    /// Style flags.
    pub style: FontStyle,
    /// Current point size.
    pub size: u32,
    /// Smallest size the font may shrink to when following the zoom level.
    pub min_size: u32,
    /// Largest size the font may grow to when following the zoom level.
    pub max_size: u32,
    /// When true the size never follows the zoom level.
    pub fixed: bool,
}

impl Default for FontAttributes {
    fn default() -> Self {
        Self {
            face: "Courier".to_string(),
            style: FontStyle::Plain,
            size: 14,
            min_size: 11,
            max_size: 30,
            fixed: false,
        }
    }
}

impl FontAttributes {
    /// The font to draw regular labels with.
    pub fn spec(&self) -> FontSpec {
        FontSpec::new(self.face.clone(), self.style, self.size)
    }

    /// The font to draw the hovered label with.
    pub fn hover_spec(&self) -> FontSpec {
        FontSpec::new(self.face.clone(), self.style.emboldened(), self.size)
    }

    /// Repair out-of-order bounds and clamp the size into them.
    pub fn normalized(mut self) -> Self {
        self.min_size = self.min_size.max(1);
        self.max_size = self.max_size.max(self.min_size);
        self.size = self.size.clamp(self.min_size, self.max_size);
        self
    }

    /// Classify the difference between `previous` and `self`.
    pub fn change_from(&self, previous: &FontAttributes) -> FontChange {
        if self.face != previous.face || self.style != previous.style {
            FontChange::FaceOrStyle
        } else if self.size != previous.size {
            FontChange::SizeOnly
        } else {
            FontChange::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_courier_fourteen_plain() {
        let font = FontAttributes::default();
        assert_eq!(font.face, "Courier");
        assert_eq!(font.style, FontStyle::Plain);
        assert_eq!(font.size, 14);
        assert_eq!((font.min_size, font.max_size), (11, 30));
        assert!(!font.fixed);
    }

    #[test]
    fn emboldened_keeps_italic() {
        assert_eq!(FontStyle::Plain.emboldened(), FontStyle::Bold);
        assert_eq!(FontStyle::Italic.emboldened(), FontStyle::BoldItalic);
        assert!(FontStyle::BoldItalic.emboldened().is_bold());
    }

    #[test]
    fn hover_spec_is_bold_version_of_spec() {
        let font = FontAttributes {
            style: FontStyle::Italic,
            ..FontAttributes::default()
        };
        assert_eq!(font.hover_spec(), font.spec().with_style(FontStyle::BoldItalic));
    }

    #[test]
    fn normalized_clamps_size_and_orders_bounds() {
        let font = FontAttributes {
            size: 40,
            min_size: 20,
            max_size: 10,
            ..FontAttributes::default()
        }
        .normalized();
        assert_eq!((font.min_size, font.size, font.max_size), (20, 20, 20));

        let zero = FontAttributes {
            size: 0,
            min_size: 0,
            max_size: 0,
            ..FontAttributes::default()
        }
        .normalized();
        assert_eq!(zero.size, 1);
    }

    mod change_from {
        use super::*;

        #[test]
        fn size_only() {
            let before = FontAttributes::default();
            let after = FontAttributes {
                size: 16,
                ..before.clone()
            };
            assert_eq!(after.change_from(&before), FontChange::SizeOnly);
        }

        #[test]
        fn face_dominates_size() {
            let before = FontAttributes::default();
            let after = FontAttributes {
                face: "Helvetica".to_string(),
                size: 16,
                ..before.clone()
            };
            assert_eq!(after.change_from(&before), FontChange::FaceOrStyle);
        }

        #[test]
        fn style_change() {
            let before = FontAttributes::default();
            let after = FontAttributes {
                style: FontStyle::Bold,
                ..before.clone()
            };
            assert_eq!(after.change_from(&before), FontChange::FaceOrStyle);
        }

        #[test]
        fn bounds_only_is_none() {
            let before = FontAttributes::default();
            let after = FontAttributes {
                min_size: 5,
                fixed: true,
                ..before.clone()
            };
            assert_eq!(after.change_from(&before), FontChange::None);
        }
    }
}
