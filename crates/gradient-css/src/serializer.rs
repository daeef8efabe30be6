use std::fmt::{self, Display, Formatter, Write};

use crate::ast::{ColorStop, ColorValue, Gradient, Length, Orientation, PositionTerm, RadialShape};

// Numbers use `f64`'s shortest round-trip formatting: `50.0` prints as `50`,
// `0.35` as `0.35`, so re-parsing never drifts.

impl Display for Length {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Length::Percent(v) => write!(f, "{v}%"),
            Length::Px(v) => write!(f, "{v}px"),
            Length::Em(v) => write!(f, "{v}em"),
        }
    }
}

impl Display for ColorValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ColorValue::Rgb { r, g, b } => write!(f, "rgb({r},{g},{b})"),
            ColorValue::Rgba { r, g, b, a } => write!(f, "rgba({r},{g},{b},{a})"),
            ColorValue::Hex(digits) => write!(f, "#{digits}"),
            ColorValue::Literal(name) => f.write_str(name),
        }
    }
}

impl Display for ColorStop {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.length {
            Some(length) => write!(f, "{} {}", self.color, length),
            None => write!(f, "{}", self.color),
        }
    }
}

impl Display for RadialShape {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut words: Vec<String> = Vec::with_capacity(5);
        if let Some(shape) = self.shape {
            words.push(shape.keyword().to_string());
        }
        if let Some(extent) = self.extent {
            words.push(extent.keyword().to_string());
        }
        if !self.at.is_empty() {
            words.push("at".to_string());
            for term in &self.at {
                words.push(match term {
                    PositionTerm::Keyword(k) => k.clone(),
                    PositionTerm::Length(l) => l.to_string(),
                });
            }
        }
        f.write_str(&words.join(" "))
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Angle(deg) => write!(f, "{deg}deg"),
            Orientation::Directional(sides) => {
                f.write_str("to")?;
                for side in sides {
                    write!(f, " {}", side.keyword())?;
                }
                Ok(())
            }
            Orientation::Radial(shape) => Display::fmt(shape, f),
        }
    }
}

/// Canonical form: stops sorted by position, `", "` between terms.
impl Display for Gradient {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let sorted = self.sorted();
        f.write_str(self.kind.function_name())?;
        f.write_char('(')?;
        let mut first = true;
        if let Some(orientation) = &sorted.orientation {
            write!(f, "{orientation}")?;
            first = false;
        }
        for stop in &sorted.stops {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{stop}")?;
            first = false;
        }
        f.write_char(')')
    }
}

/// Serializes `gradient` to its canonical string.
///
/// Stops are stably sorted by position first, so the output order may differ
/// from `gradient.stops`.
pub fn serialize(gradient: &Gradient) -> String {
    gradient.to_string()
}
