use crate::Vec2;

/// An infinite line, described by two points it goes through
pub struct Line {
    pub src: Vec2,
    pub dst: Vec2,
}

impl Line {
    pub fn new(src: Vec2, dst: Vec2) -> Self {
        Self { src, dst }
    }

    pub fn new_dir(src: Vec2, dir: Vec2) -> Self {
        Self {
            src,
            dst: src + dir,
        }
    }

    pub fn project(&self, p: Vec2) -> Vec2 {
        let r = self.vec();
        let diff2 = p - self.src;

        let proj1 = diff2.dot(r);

        let d = proj1 / r.mag2();
        self.src + r * d
    }

    /// Perpendicular distance from p to the line
    pub fn distance(&self, p: Vec2) -> f32 {
        p.distance(self.project(p))
    }

    pub fn vec(&self) -> Vec2 {
        self.dst - self.src
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec2;

    #[test]
    fn test_distance_is_perpendicular() {
        let l = Line::new_dir(vec2(0.0, 0.0), vec2(1.0, 0.0));
        assert!((l.distance(vec2(50.0, -4.0)) - 4.0).abs() < 1e-6);
        assert!((l.distance(vec2(-3.0, 2.0)) - 2.0).abs() < 1e-6);
    }
}
