/// Sizing and gesture thresholds of the gradient picker.
///
/// All distances are logical pixels except `min_significant_move`, which is
/// in percent of the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerConfig {
    /// Width (and height) of a stop marker.
    pub marker_width: f32,
    /// Width (and height) of the insert indicator.
    pub insert_point_width: f32,
    /// Pixel offset that maps to 0%.
    pub min_left_position: f32,
    /// The insert indicator hides when it is closer than this to any marker.
    pub min_marker_distance: f32,
    /// A drag that never moves this far (in percent) counts as a click.
    pub min_significant_move: f64,
    /// Height the picker asks for during measure.
    pub track_height: f32,
    pub corner_radius: f32,
}

impl PickerConfig {
    pub const MARKER_WIDTH: f32 = 18.0;
    pub const INSERT_POINT_WIDTH: f32 = 23.0;

    pub fn new() -> Self {
        Self {
            marker_width: Self::MARKER_WIDTH,
            insert_point_width: Self::INSERT_POINT_WIDTH,
            min_left_position: 5.0,
            min_marker_distance: (Self::INSERT_POINT_WIDTH + Self::MARKER_WIDTH) / 2.0,
            min_significant_move: 5.0,
            track_height: 48.0,
            corner_radius: 4.0,
        }
    }

    pub fn track_height(mut self, v: f32) -> Self { self.track_height = v; self }
    pub fn corner_radius(mut self, v: f32) -> Self { self.corner_radius = v; self }
    pub fn min_significant_move(mut self, v: f64) -> Self { self.min_significant_move = v; self }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self::new()
    }
}
