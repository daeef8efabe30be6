//! Pixel <-> percent mapping along the track.
//!
//! Pixel offsets are relative to the track's left edge. `extent` is the
//! largest offset an element of the track can take (track width minus the
//! insert indicator), `inset` the offset that maps to 0%.

use gradient_engine::coords::Rect;

use crate::config::PickerConfig;

/// Track bounds measured from the rect the picker was laid out in.
/// Recomputed on every paint and event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    pub origin_x: f32,
    pub track_width: f32,
}

impl TrackGeometry {
    #[inline]
    pub fn from_rect(rect: Rect) -> Self {
        Self { origin_x: rect.origin.x, track_width: rect.size.x }
    }

    /// Largest offset of an element inside the track.
    #[inline]
    pub fn max_position(&self, config: &PickerConfig) -> f32 {
        self.track_width - config.insert_point_width
    }

    /// Percent under a marker whose center is at absolute `x`.
    pub fn marker_percent_at(&self, config: &PickerConfig, x: f32) -> f64 {
        to_percent(
            x - self.origin_x - config.marker_width / 2.0,
            self.max_position(config),
            config.min_left_position,
        )
    }

    /// Left edge offset of a marker at `percent`.
    pub fn marker_offset(&self, config: &PickerConfig, percent: f64) -> f32 {
        to_pixel(percent, self.max_position(config), config.min_left_position)
    }

    /// Insert indicator offset for absolute pointer `x`: centered on the
    /// pointer, then clamped into `[0, max_position]`.
    pub fn insert_offset_at(&self, config: &PickerConfig, x: f32) -> f32 {
        let raw = x - self.origin_x - config.insert_point_width / 2.0;
        raw.max(0.0).min(self.max_position(config))
    }
}

/// Halves round toward +infinity.
#[inline]
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Pixel offset to a whole percent in `[0, 100]`.
///
/// A non-positive or non-finite span (`extent <= inset`, e.g. a track that
/// has not been laid out yet) yields 0.
pub fn to_percent(pixel: f32, extent: f32, inset: f32) -> f64 {
    let denom = f64::from(extent) - f64::from(inset);
    let numer = (f64::from(pixel) - f64::from(inset)) * 100.0;
    if !denom.is_finite() || denom <= 1e-6 || !numer.is_finite() {
        log::trace!("to_percent: degenerate track (extent {extent}, inset {inset}, pixel {pixel})");
        return 0.0;
    }
    round_half_up(numer / denom).clamp(0.0, 100.0)
}

/// Percent to a whole pixel offset. Not clamped.
pub fn to_pixel(percent: f64, extent: f32, inset: f32) -> f32 {
    let span = f64::from(extent) - f64::from(inset);
    round_half_up(percent * span / 100.0 + f64::from(inset)) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_track_values() {
        // 260px track: max position 237, 0% at 5.
        assert_eq!(to_pixel(0.0, 237.0, 5.0), 5.0);
        assert_eq!(to_pixel(40.0, 237.0, 5.0), 98.0);
        assert_eq!(to_pixel(100.0, 237.0, 5.0), 237.0);
        assert_eq!(to_percent(98.0, 237.0, 5.0), 40.0);
        assert_eq!(to_percent(121.0, 237.0, 5.0), 50.0);
    }

    #[test]
    fn percent_is_clamped() {
        assert_eq!(to_percent(-40.0, 237.0, 5.0), 0.0);
        assert_eq!(to_percent(900.0, 237.0, 5.0), 100.0);
    }

    #[test]
    fn pixel_is_not_clamped() {
        assert_eq!(to_pixel(150.0, 105.0, 5.0), 155.0);
        assert_eq!(to_pixel(-10.0, 105.0, 5.0), -5.0);
    }

    #[test]
    fn halves_round_up() {
        // (5.125 - 5) * 100 / 5 = 2.5 -> 3
        assert_eq!(to_percent(5.125, 10.0, 5.0), 3.0);
        assert_eq!(to_pixel(50.0, 6.0, 5.0), 6.0); // 5.5 -> 6
    }

    #[test]
    fn degenerate_geometry_maps_to_zero() {
        assert_eq!(to_percent(10.0, 5.0, 5.0), 0.0);
        assert_eq!(to_percent(10.0, f32::INFINITY, 5.0), 0.0);
        assert_eq!(to_percent(f32::NAN, 237.0, 5.0), 0.0);
        // Spans narrower than the inset would otherwise invert the mapping.
        assert_eq!(to_percent(10.0, -23.0, 5.0), 0.0);
    }

    #[test]
    fn zero_width_track_maps_to_zero() {
        let cfg = PickerConfig::default();
        for width in [0.0, 10.0, 27.0, 28.0] {
            let g = TrackGeometry { origin_x: 0.0, track_width: width };
            for x in [0.0, 10.0, 100.0] {
                assert_eq!(g.marker_percent_at(&cfg, x), 0.0, "width {width}, x {x}");
            }
        }
        let g = TrackGeometry { origin_x: 0.0, track_width: 29.0 };
        assert_eq!(g.marker_percent_at(&cfg, 100.0), 100.0);
    }

    #[test]
    fn round_trip_stays_within_one_percent() {
        for extent in [105.0_f32, 237.0, 400.0, 1000.0] {
            for step in 0..=200 {
                let p = f64::from(step) / 2.0;
                let back = to_percent(to_pixel(p, extent, 5.0), extent, 5.0);
                assert!((back - p).abs() <= 1.0, "extent {extent}: {p} -> {back}");
            }
        }
    }

    #[test]
    fn geometry_helpers_use_config() {
        let cfg = PickerConfig::default();
        let g = TrackGeometry::from_rect(Rect::new(10.0, 0.0, 260.0, 48.0));
        assert_eq!(g.max_position(&cfg), 237.0);
        assert_eq!(g.marker_offset(&cfg, 40.0), 98.0);
        // Pointer on the 50% marker's center.
        assert_eq!(g.marker_percent_at(&cfg, 10.0 + 121.0 + 9.0), 50.0);
        assert_eq!(g.insert_offset_at(&cfg, 10.0), 0.0);
        assert_eq!(g.insert_offset_at(&cfg, 10.0 + 109.5), 98.0);
        assert_eq!(g.insert_offset_at(&cfg, 1000.0), 237.0);
    }
}
