//! Stop-set operations.
//!
//! Every function takes the current gradient by reference and returns a new
//! one. None of them re-sort the stops: indices stay valid while an
//! interactive gesture is in flight, and ordering is applied only when the
//! result is serialized.
//!
//! An index that is out of bounds (the stop was removed while the UI still
//! referenced it) returns an unchanged copy.

use crate::ast::{ColorStop, ColorValue, Gradient, Length};

/// Replaces the color of stop `index`, keeping its position.
pub fn with_color_at(gradient: &Gradient, index: usize, color: ColorValue) -> Gradient {
    let mut out = gradient.clone();
    match out.stops.get_mut(index) {
        Some(stop) => stop.color = color,
        None => log::debug!("with_color_at: stale stop index {index} (len {})", gradient.stops.len()),
    }
    out
}

/// Sets stop `index` to `percent`. The caller clamps `percent` to `[0, 100]`.
pub fn with_position_at(gradient: &Gradient, index: usize, percent: f64) -> Gradient {
    let mut out = gradient.clone();
    match out.stops.get_mut(index) {
        Some(stop) => stop.length = Some(Length::Percent(percent)),
        None => log::debug!("with_position_at: stale stop index {index} (len {})", gradient.stops.len()),
    }
    out
}

/// Removes stop `index`.
///
/// Removing the last stop leaves a gradient that serializes without stops
/// (`linear-gradient(135deg)`). That string does not parse, so a host that
/// feeds it back gets [`crate::DEFAULT_GRADIENT`].
pub fn with_stop_removed(gradient: &Gradient, index: usize) -> Gradient {
    let mut out = gradient.clone();
    if index < out.stops.len() {
        out.stops.remove(index);
    } else {
        log::debug!("with_stop_removed: stale stop index {index} (len {})", gradient.stops.len());
    }
    out
}

/// Appends a new stop at `percent`.
///
/// The new stop goes last, so after serialization it sorts behind any
/// existing stop at the same position.
pub fn with_stop_inserted(gradient: &Gradient, color: ColorValue, percent: f64) -> Gradient {
    let mut out = gradient.clone();
    out.stops.push(ColorStop::at_percent(color, percent));
    out
}
