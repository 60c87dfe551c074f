use std::f32::consts::{FRAC_PI_2, TAU};

use egui::{Align2, FontId, Pos2, Sense, Shape, Stroke, pos2, vec2};

use crate::app::views::{MUTED, PRIMARY, View};
use crate::classification::format_percent;

const SEGMENTS: usize = 96;

/// Ring whose arc covers `certainty` of a full turn, starting at twelve
/// o'clock and running clockwise.
pub struct ClassificationOrb {
    certainty: f32,
    size: f32,
    stroke_width: f32,
}

impl ClassificationOrb {
    pub fn new(certainty: f32) -> Self {
        Self {
            certainty: certainty.clamp(0.0, 1.0),
            size: 280.0,
            stroke_width: 22.0,
        }
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }
}

impl View for ClassificationOrb {
    fn draw(&mut self, ui: &mut egui::Ui) {
        let (rect, _) = ui.allocate_exact_size(vec2(self.size, self.size), Sense::hover());
        let painter = ui.painter_at(rect);
        let center = rect.center();
        let radius = (self.size - self.stroke_width) / 2.0;

        painter.circle_stroke(
            center,
            radius,
            Stroke::new(self.stroke_width, MUTED.gamma_multiply(0.15)),
        );

        let points = arc_points(center, radius, self.certainty, SEGMENTS);
        if points.len() > 1 {
            painter.add(Shape::line(points, Stroke::new(self.stroke_width, PRIMARY)));
        }

        painter.text(
            center - vec2(0.0, 10.0),
            Align2::CENTER_CENTER,
            format_percent(self.certainty as f64),
            FontId::proportional(self.size / 6.0),
            PRIMARY,
        );
        painter.text(
            center + vec2(0.0, self.size / 8.0),
            Align2::CENTER_CENTER,
            "MATCH",
            FontId::proportional(12.0),
            MUTED,
        );
    }
}

/// Points along a clockwise arc from the top of the circle. Empty for a
/// zero sweep.
pub fn arc_points(center: Pos2, radius: f32, fraction: f32, segments: usize) -> Vec<Pos2> {
    let fraction = fraction.clamp(0.0, 1.0);
    if fraction <= 0.0 || segments == 0 {
        return Vec::new();
    }

    let steps = ((segments as f32 * fraction).ceil() as usize).max(1);
    let sweep = TAU * fraction;
    (0..=steps)
        .map(|i| {
            let angle = -FRAC_PI_2 + sweep * (i as f32 / steps as f32);
            pos2(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Pos2, b: Pos2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn empty_sweep_draws_nothing() {
        assert!(arc_points(pos2(0.0, 0.0), 10.0, 0.0, 96).is_empty());
        assert!(arc_points(pos2(0.0, 0.0), 10.0, -1.0, 96).is_empty());
    }

    #[test]
    fn arc_starts_at_top_and_runs_clockwise() {
        let points = arc_points(pos2(0.0, 0.0), 10.0, 0.25, 96);
        assert!(close(points[0], pos2(0.0, -10.0)));
        assert!(close(*points.last().unwrap(), pos2(10.0, 0.0)));
    }

    #[test]
    fn full_sweep_closes_the_ring() {
        let points = arc_points(pos2(5.0, 5.0), 10.0, 1.0, 96);
        assert_eq!(points.len(), 97);
        assert!(close(points[0], *points.last().unwrap()));
    }
}
