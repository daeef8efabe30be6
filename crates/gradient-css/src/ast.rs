// ── Gradient ──────────────────────────────────────────────────────────────

/// Gradient function family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientKind {
    Linear,
    Radial,
}

impl GradientKind {
    /// CSS function name, e.g. `linear-gradient`.
    pub fn function_name(self) -> &'static str {
        match self {
            GradientKind::Linear => "linear-gradient",
            GradientKind::Radial => "radial-gradient",
        }
    }

    /// Case-insensitive lookup of a gradient function name.
    pub fn from_function_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("linear-gradient") {
            Some(GradientKind::Linear)
        } else if name.eq_ignore_ascii_case("radial-gradient") {
            Some(GradientKind::Radial)
        } else {
            None
        }
    }
}

/// A parsed gradient: kind, optional leading orientation term, and color stops.
///
/// `stops` are kept in the order they were parsed or edited. They are sorted
/// by position only when serialized (see [`Gradient::sorted`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    pub kind: GradientKind,
    pub orientation: Option<Orientation>,
    pub stops: Vec<ColorStop>,
}

impl Gradient {
    pub fn new(kind: GradientKind, orientation: Option<Orientation>, stops: Vec<ColorStop>) -> Self {
        Self { kind, orientation, stops }
    }

    /// Angle in degrees when the orientation is an explicit `<n>deg` term.
    pub fn orientation_degrees(&self) -> Option<f64> {
        match &self.orientation {
            Some(Orientation::Angle(deg)) => Some(*deg),
            _ => None,
        }
    }

    /// Copy with stops stably sorted ascending by their sort key.
    ///
    /// Stops with equal keys keep their relative order.
    pub fn sorted(&self) -> Gradient {
        let mut out = self.clone();
        out.stops.sort_by(|a, b| a.sort_key().total_cmp(&b.sort_key()));
        out
    }

    /// Indices and percent positions of the stops that have a `%` length.
    pub fn positioned_stops(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.stops
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.position_percent().map(|p| (i, p)))
    }

    /// Effective percent position of every stop, in stop order.
    ///
    /// Missing (or non-percent) positions follow the CSS fix-up rules: the
    /// first stop defaults to 0, the last to 100, each position is raised to
    /// at least the previous one, and runs of missing positions are spread
    /// evenly between their positioned neighbours.
    pub fn resolved_positions(&self) -> Vec<f64> {
        let n = self.stops.len();
        let mut pos: Vec<Option<f64>> = self.stops.iter().map(ColorStop::position_percent).collect();
        if n == 0 {
            return Vec::new();
        }
        if pos[0].is_none() {
            pos[0] = Some(0.0);
        }
        if n > 1 && pos[n - 1].is_none() {
            pos[n - 1] = Some(100.0);
        }

        let mut max_so_far = f64::MIN;
        for p in pos.iter_mut().flatten() {
            if *p < max_so_far {
                *p = max_so_far;
            }
            max_so_far = *p;
        }

        let mut out = Vec::with_capacity(n);
        let mut i = 0;
        while i < n {
            match pos[i] {
                Some(p) => {
                    out.push(p);
                    i += 1;
                }
                None => {
                    // `pos[0]` is always set, so `out` is never empty here.
                    let start = out.last().copied().unwrap_or(0.0);
                    let run_end = (i..n).find(|&j| pos[j].is_some()).unwrap_or(n - 1);
                    let end = pos[run_end].unwrap_or(100.0);
                    let steps = (run_end - i + 1) as f64;
                    for k in i..run_end {
                        let t = (k - i + 1) as f64 / steps;
                        out.push(start + (end - start) * t);
                    }
                    i = run_end;
                }
            }
        }
        out
    }
}

// ── Orientation ───────────────────────────────────────────────────────────

/// Leading gradient term before the first color stop.
#[derive(Debug, Clone, PartialEq)]
pub enum Orientation {
    /// `135deg`
    Angle(f64),
    /// `to left`, `to top right`. Holds the side keywords after `to`.
    Directional(Vec<Side>),
    /// Radial prelude: `circle closest-side at 50% 50%`.
    Radial(RadialShape),
}

impl Orientation {
    /// Equivalent angle in degrees for linear orientations.
    ///
    /// `to top` is 0°, `to right` is 90°; corners map to the diagonal.
    pub fn as_degrees(&self) -> Option<f64> {
        match self {
            Orientation::Angle(deg) => Some(*deg),
            Orientation::Directional(sides) => {
                let (mut x, mut y) = (0.0_f64, 0.0_f64);
                for side in sides {
                    match side {
                        Side::Left => x -= 1.0,
                        Side::Right => x += 1.0,
                        Side::Top => y -= 1.0,
                        Side::Bottom => y += 1.0,
                    }
                }
                if x == 0.0 && y == 0.0 {
                    return None;
                }
                // 0° points up (negative y), angles grow clockwise.
                Some(x.atan2(-y).to_degrees().rem_euclid(360.0))
            }
            Orientation::Radial(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

impl Side {
    pub fn keyword(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
            Side::Top => "top",
            Side::Bottom => "bottom",
        }
    }

    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "left" => Some(Side::Left),
            "right" => Some(Side::Right),
            "top" => Some(Side::Top),
            "bottom" => Some(Side::Bottom),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadialEndingShape {
    Circle,
    Ellipse,
}

impl RadialEndingShape {
    pub fn keyword(self) -> &'static str {
        match self {
            RadialEndingShape::Circle => "circle",
            RadialEndingShape::Ellipse => "ellipse",
        }
    }

    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "circle" => Some(RadialEndingShape::Circle),
            "ellipse" => Some(RadialEndingShape::Ellipse),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadialExtent {
    ClosestSide,
    ClosestCorner,
    FarthestSide,
    FarthestCorner,
}

impl RadialExtent {
    pub fn keyword(self) -> &'static str {
        match self {
            RadialExtent::ClosestSide => "closest-side",
            RadialExtent::ClosestCorner => "closest-corner",
            RadialExtent::FarthestSide => "farthest-side",
            RadialExtent::FarthestCorner => "farthest-corner",
        }
    }

    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "closest-side" => Some(RadialExtent::ClosestSide),
            "closest-corner" => Some(RadialExtent::ClosestCorner),
            "farthest-side" => Some(RadialExtent::FarthestSide),
            "farthest-corner" => Some(RadialExtent::FarthestCorner),
            _ => None,
        }
    }
}

/// Radial gradient prelude. At least one field is set when parsed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RadialShape {
    pub shape: Option<RadialEndingShape>,
    pub extent: Option<RadialExtent>,
    /// Terms after `at`; empty when there is no `at` clause.
    pub at: Vec<PositionTerm>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PositionTerm {
    /// `left`, `center`, `top`, ...
    Keyword(String),
    Length(Length),
}

// ── Lengths ───────────────────────────────────────────────────────────────

/// A stop position or radial position component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Percent(f64),
    Px(f64),
    Em(f64),
}

impl Length {
    #[inline]
    pub fn value(self) -> f64 {
        match self {
            Length::Percent(v) | Length::Px(v) | Length::Em(v) => v,
        }
    }

    #[inline]
    pub fn as_percent(self) -> Option<f64> {
        match self {
            Length::Percent(v) => Some(v),
            _ => None,
        }
    }
}

// ── Colors ────────────────────────────────────────────────────────────────

/// RGBA as produced by a color picker: channels in `0..=255`, alpha in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbaColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl RgbaColor {
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn opaque(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }
}

/// Color term of a stop.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorValue {
    Rgb { r: f64, g: f64, b: f64 },
    Rgba { r: f64, g: f64, b: f64, a: f64 },
    /// Hex digits without the leading `#`, lowercased.
    Hex(String),
    /// Named color keyword, lowercased.
    Literal(String),
}

impl ColorValue {
    /// Picker output to a stop color: fully opaque becomes `rgb`, anything else `rgba`.
    pub fn from_rgba(c: RgbaColor) -> Self {
        if c.a == 1.0 {
            ColorValue::Rgb { r: c.r, g: c.g, b: c.b }
        } else {
            ColorValue::Rgba { r: c.r, g: c.g, b: c.b, a: c.a }
        }
    }

    /// Resolves the color to RGBA. `None` for unknown named colors.
    pub fn to_rgba(&self) -> Option<RgbaColor> {
        match self {
            ColorValue::Rgb { r, g, b } => Some(RgbaColor::opaque(*r, *g, *b)),
            ColorValue::Rgba { r, g, b, a } => Some(RgbaColor::new(*r, *g, *b, *a)),
            ColorValue::Hex(digits) => hex_to_rgba(digits),
            ColorValue::Literal(name) => named_color(name),
        }
    }
}

fn hex_to_rgba(digits: &str) -> Option<RgbaColor> {
    let nibble = |i: usize| u8::from_str_radix(digits.get(i..i + 1)?, 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
    let (r, g, b, a) = match digits.len() {
        3 => (nibble(0)?, nibble(1)?, nibble(2)?, 255),
        4 => (nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?),
        6 => (byte(0)?, byte(2)?, byte(4)?, 255),
        8 => (byte(0)?, byte(2)?, byte(4)?, byte(6)?),
        _ => return None,
    };
    Some(RgbaColor::new(r as f64, g as f64, b as f64, a as f64 / 255.0))
}

fn named_color(name: &str) -> Option<RgbaColor> {
    let (r, g, b) = match name {
        "transparent" => return Some(RgbaColor::new(0.0, 0.0, 0.0, 0.0)),
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "red" => (255, 0, 0),
        "green" => (0, 128, 0),
        "lime" => (0, 255, 0),
        "blue" => (0, 0, 255),
        "yellow" => (255, 255, 0),
        "cyan" | "aqua" => (0, 255, 255),
        "magenta" | "fuchsia" => (255, 0, 255),
        "gray" | "grey" => (128, 128, 128),
        "silver" => (192, 192, 192),
        "maroon" => (128, 0, 0),
        "olive" => (128, 128, 0),
        "navy" => (0, 0, 128),
        "purple" => (128, 0, 128),
        "teal" => (0, 128, 128),
        "orange" => (255, 165, 0),
        _ => return None,
    };
    Some(RgbaColor::opaque(r as f64, g as f64, b as f64))
}

// ── Stops ─────────────────────────────────────────────────────────────────

/// A color bound to an optional position.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorStop {
    pub color: ColorValue,
    pub length: Option<Length>,
}

impl ColorStop {
    #[inline]
    pub fn new(color: ColorValue, length: Option<Length>) -> Self {
        Self { color, length }
    }

    #[inline]
    pub fn at_percent(color: ColorValue, percent: f64) -> Self {
        Self::new(color, Some(Length::Percent(percent)))
    }

    /// Position in percent, `None` for stops that cannot be shown as a marker.
    #[inline]
    pub fn position_percent(&self) -> Option<f64> {
        self.length.and_then(Length::as_percent)
    }

    /// Serialization sort key: the raw length value, 0 when absent.
    #[inline]
    pub fn sort_key(&self) -> f64 {
        self.length.map_or(0.0, Length::value)
    }
}
