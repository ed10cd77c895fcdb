use egui::{Color32, Pos2};

/// A finished stroke, in canvas coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    color: Color32,
    radius: f32,
}

/// Stroke under construction while the pointer is held down
#[derive(Debug, Clone)]
pub struct MutableStroke {
    points: Vec<Pos2>,
    color: Color32,
    radius: f32,
}

impl Stroke {
    pub fn new(color: Color32, radius: f32, points: Vec<Pos2>) -> Self {
        Self {
            points,
            color,
            radius,
        }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl MutableStroke {
    pub fn new(color: Color32, radius: f32) -> Self {
        Self {
            points: Vec::new(),
            color,
            radius,
        }
    }

    // Consecutive duplicates add nothing to the path
    pub fn add_point(&mut self, point: Pos2) {
        if self.points.last() != Some(&point) {
            self.points.push(point);
        }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Freeze into a [`Stroke`]. Returns `None` when no point was recorded.
    pub fn finish(self) -> Option<Stroke> {
        if self.points.is_empty() {
            None
        } else {
            Some(Stroke::new(self.color, self.radius, self.points))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_points_collapsed() {
        let mut stroke = MutableStroke::new(Color32::WHITE, 5.0);
        stroke.add_point(Pos2::new(1.0, 1.0));
        stroke.add_point(Pos2::new(1.0, 1.0));
        stroke.add_point(Pos2::new(2.0, 3.0));
        assert_eq!(stroke.points().len(), 2);
    }

    #[test]
    fn test_empty_stroke_not_finished() {
        let stroke = MutableStroke::new(Color32::WHITE, 5.0);
        assert!(stroke.finish().is_none());
    }

    #[test]
    fn test_finish_keeps_brush() {
        let mut stroke = MutableStroke::new(Color32::RED, 10.0);
        stroke.add_point(Pos2::new(4.0, 4.0));
        let stroke = stroke.finish().unwrap();
        assert_eq!(stroke.color(), Color32::RED);
        assert_eq!(stroke.radius(), 10.0);
        assert_eq!(stroke.points(), &[Pos2::new(4.0, 4.0)]);
    }
}
