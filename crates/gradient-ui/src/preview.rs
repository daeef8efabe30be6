//! Live preview paint: the gradient being edited, as an engine paint.

use gradient_css::{ColorValue, Gradient, GradientKind};
use gradient_engine::coords::Rect;
use gradient_engine::paint::{Color, ColorStop, LinearGradient, Paint, RadialGradient};

/// Angle CSS uses when a linear gradient has no orientation (`to bottom`).
const DEFAULT_LINEAR_ANGLE: f32 = 180.0;

/// Engine color for a stop color. Unknown named colors paint transparent.
pub fn stop_color(color: &ColorValue) -> Color {
    match color.to_rgba() {
        Some(c) => Color::from_rgb255(c.r as f32, c.g as f32, c.b as f32, c.a as f32),
        None => {
            log::debug!("no RGBA for stop color {color}; painting transparent");
            Color::transparent()
        }
    }
}

/// Paint that fills `rect` with `gradient` the way a browser would.
///
/// Stops are sorted and missing positions resolved first. Radial gradients
/// are centered in `rect` and reach its corners.
pub fn preview_paint(gradient: &Gradient, rect: Rect) -> Paint {
    let sorted = gradient.sorted();
    let stops: Vec<ColorStop> = sorted
        .resolved_positions()
        .into_iter()
        .zip(&sorted.stops)
        .map(|(position, stop)| ColorStop::new((position / 100.0) as f32, stop_color(&stop.color)))
        .collect();

    match (stops.as_slice(), gradient.kind) {
        ([], _) => Paint::Solid(Color::transparent()),
        ([only], _) => Paint::Solid(only.color),
        (_, GradientKind::Linear) => {
            let angle = sorted
                .orientation
                .as_ref()
                .and_then(|o| o.as_degrees())
                .map_or(DEFAULT_LINEAR_ANGLE, |deg| deg as f32);
            LinearGradient::from_css_angle(rect, angle, stops).into()
        }
        (_, GradientKind::Radial) => {
            let radius = rect.size.length() * 0.5;
            RadialGradient::new(rect.center(), radius, stops).into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradient_css::parse;
    use gradient_engine::coords::Vec2;

    fn rect() -> Rect {
        Rect::new(0.0, 0.0, 260.0, 48.0)
    }

    #[test]
    fn linear_uses_sorted_stops_and_angle() {
        let g = parse("linear-gradient(90deg, rgb(255,255,255) 100%, rgb(0,0,0) 0%)");
        let Paint::LinearGradient(lg) = preview_paint(&g, rect()) else { panic!("expected linear paint") };
        assert_eq!(lg.stops.iter().map(|s| s.t).collect::<Vec<_>>(), vec![0.0, 1.0]);
        assert_eq!(lg.stops[0].color, Color::from_straight(0.0, 0.0, 0.0, 1.0));
        assert!((lg.start.x - 0.0).abs() < 1e-3 && (lg.end.x - 260.0).abs() < 1e-3);
    }

    #[test]
    fn missing_orientation_runs_downward() {
        let g = parse("linear-gradient(red, blue)");
        let Paint::LinearGradient(lg) = preview_paint(&g, rect()) else { panic!("expected linear paint") };
        assert!((lg.start.y - 0.0).abs() < 1e-3 && (lg.end.y - 48.0).abs() < 1e-3);
        assert_eq!(lg.stops[1].t, 1.0);
    }

    #[test]
    fn radial_is_centered() {
        let g = parse("radial-gradient(circle, #000 0%, #fff 100%)");
        let Paint::RadialGradient(rg) = preview_paint(&g, rect()) else { panic!("expected radial paint") };
        assert_eq!(rg.center, Vec2::new(130.0, 24.0));
        assert!((rg.radius - rect().size.length() / 2.0).abs() < 1e-3);
    }

    #[test]
    fn single_stop_is_solid() {
        let g = parse("linear-gradient(rgba(0,0,0,0.5) 30%)");
        assert_eq!(preview_paint(&g, rect()), Paint::Solid(Color::from_straight(0.0, 0.0, 0.0, 0.5)));
    }

    #[test]
    fn unknown_literal_paints_transparent() {
        assert_eq!(stop_color(&ColorValue::Literal("rebeccapurple".into())), Color::transparent());
        assert_eq!(stop_color(&ColorValue::Hex("fff".into())), Color::white());
    }
}
