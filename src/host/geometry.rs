//! Integer pixel geometry and colours used at the surface boundary.

/// A point in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate (grows downwards).
    pub y: i32,
}

impl Point {
    /// Create a point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle. Zero or negative extents cover nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelRect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Horizontal extent.
    pub width: i32,
    /// Vertical extent.
    pub height: i32,
}

impl PixelRect {
    /// Create a rectangle.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// True when the rectangle covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }
}

/// 8-bit RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel; 255 is opaque.
    pub a: u8,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::rgb(255, 0, 0);

    /// Opaque colour from channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Same channels with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Composite `self` over an opaque `background`.
    pub fn over(self, background: Rgba) -> Rgba {
        let blend = |fg: u8, bg: u8| -> u8 {
            let a = u32::from(self.a);
            let mixed = (u32::from(fg) * a + u32::from(bg) * (255 - a) + 127) / 255;
            u8::try_from(mixed).unwrap_or(u8::MAX)
        };
        Rgba::rgb(
            blend(self.r, background.r),
            blend(self.g, background.g),
            blend(self.b, background.b),
        )
    }
}

/// Integer affine transform from label space to surface space.
///
/// `x' = xx*x + xy*y + x0` and `y' = yx*x + yy*y + y0`. Only translations
/// and quarter turns are ever built, so the coefficients stay in
/// `{-1, 0, 1}` and pixel edges map onto pixel edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transform {
    xx: i32,
    xy: i32,
    x0: i32,
    yx: i32,
    yy: i32,
    y0: i32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        xx: 1,
        xy: 0,
        x0: 0,
        yx: 0,
        yy: 1,
        y0: 0,
    };

    /// Pure translation.
    pub const fn translate(dx: i32, dy: i32) -> Self {
        Self {
            x0: dx,
            y0: dy,
            ..Self::IDENTITY
        }
    }

    /// Quarter turn counter-clockwise inside a box `height` pixels tall:
    /// `x' = y`, `y' = height - x`. Text drawn along +x reads bottom to top.
    pub const fn quarter_turn(height: i32) -> Self {
        Self {
            xx: 0,
            xy: 1,
            x0: 0,
            yx: -1,
            yy: 0,
            y0: height,
        }
    }

    /// Whether this transform rotates (text must be laid out vertically).
    pub fn is_rotated(&self) -> bool {
        self.xy != 0
    }

    /// Map a point.
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.xx * p.x + self.xy * p.y + self.x0,
            self.yx * p.x + self.yy * p.y + self.y0,
        )
    }

    /// Map a rectangle, normalising so the result has non-negative extents.
    pub fn apply_rect(&self, rect: PixelRect) -> PixelRect {
        let a = self.apply(Point::new(rect.x, rect.y));
        let b = self.apply(Point::new(rect.right(), rect.bottom()));
        PixelRect::new(
            a.x.min(b.x),
            a.y.min(b.y),
            (a.x - b.x).abs(),
            (a.y - b.y).abs(),
        )
    }

    /// Map the unit pixel whose top-left corner is `p` to its surface-space
    /// top-left corner.
    pub fn apply_pixel(&self, p: Point) -> Point {
        let r = self.apply_rect(PixelRect::new(p.x, p.y, 1, 1));
        Point::new(r.x, r.y)
    }
}
