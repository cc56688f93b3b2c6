// 2D vector math shared by every strategy

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// Plain 2D vector in field coordinates (x to the right, y down the field)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean length
    pub fn norm(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Distance between two points
    pub fn dist(self, other: Vec2) -> f32 {
        (other - self).norm()
    }

    /// Unit vector in the same direction.
    ///
    /// A zero-length vector normalizes to `Vec2::ZERO`, so "move toward the
    /// point you are already standing on" is a stay, not a NaN.
    pub fn normalize(self) -> Vec2 {
        let len = self.norm();
        if len == 0.0 {
            Vec2::ZERO
        } else {
            Vec2::new(self.x / len, self.y / len)
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}
