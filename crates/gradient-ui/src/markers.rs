//! On-track markers for positioned stops.

use gradient_css::{ColorValue, Gradient};
use gradient_engine::coords::Rect;

use crate::config::PickerConfig;
use crate::geometry::TrackGeometry;

/// A marker for one stop that has a percent position.
///
/// `stop_index` indexes `Gradient::stops` directly. Stops without a percent
/// length get no marker, so marker order and stop order can differ.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerPoint {
    pub stop_index: usize,
    pub position: f64,
    /// Left edge, relative to the track origin.
    pub offset: f32,
    pub color: ColorValue,
}

impl MarkerPoint {
    /// Marker square inside `track`, vertically centered.
    pub fn rect(&self, track: Rect, config: &PickerConfig) -> Rect {
        let w = config.marker_width;
        Rect::new(track.origin.x + self.offset, track.center().y - w / 2.0, w, w)
    }
}

/// Markers for every positioned stop, in stop order.
pub fn marker_points(gradient: &Gradient, geometry: TrackGeometry, config: &PickerConfig) -> Vec<MarkerPoint> {
    gradient
        .positioned_stops()
        .map(|(stop_index, position)| MarkerPoint {
            stop_index,
            position,
            offset: geometry.marker_offset(config, position),
            color: gradient.stops[stop_index].color.clone(),
        })
        .collect()
}

/// Marker under absolute pointer `x`, skipping markers at `hidden`.
///
/// Hit testing is horizontal only. Later markers paint on top, so they win.
pub fn marker_at<'m>(
    markers: &'m [MarkerPoint],
    geometry: TrackGeometry,
    config: &PickerConfig,
    x: f32,
    hidden: Option<f64>,
) -> Option<&'m MarkerPoint> {
    let local = x - geometry.origin_x;
    markers
        .iter()
        .rev()
        .filter(|m| Some(m.position) != hidden)
        .find(|m| local >= m.offset && local < m.offset + config.marker_width)
}

/// True when an insert indicator at `offset` would crowd any marker.
pub fn crowds_marker(markers: &[MarkerPoint], config: &PickerConfig, offset: f32) -> bool {
    markers.iter().any(|m| (offset - m.offset).abs() < config.min_marker_distance)
}
