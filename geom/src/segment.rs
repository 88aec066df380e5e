use super::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub src: Vec2,
    pub dst: Vec2,
}

impl Segment {
    pub fn new(src: Vec2, dst: Vec2) -> Self {
        Self { src, dst }
    }

    pub fn project(&self, p: Vec2) -> Vec2 {
        let diff: Vec2 = self.dst - self.src;
        let diff2: Vec2 = p - self.src;
        let diff3: Vec2 = p - self.dst;

        let proj1 = diff2.dot(diff);
        let proj2 = -diff3.dot(diff);

        if proj1 <= 0.0 {
            self.src
        } else if proj2 <= 0.0 {
            self.dst
        } else {
            self.src + diff * (proj1 / diff.mag2())
        }
    }

    /// Both endpoints translated by dist along normal
    pub fn offset(&self, normal: Vec2, dist: f32) -> Segment {
        Self {
            src: self.src + normal * dist,
            dst: self.dst + normal * dist,
        }
    }

    #[inline]
    pub fn vec(&self) -> Vec2 {
        self.dst - self.src
    }

    #[inline]
    pub fn middle(&self) -> Vec2 {
        (self.src + self.dst) * 0.5
    }
}
