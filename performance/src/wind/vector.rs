use crate::{error::Result, shared::normalize_angle};
use std::ops::Sub;
use uom::si::{
    angle::{degree, radian},
    f64::*,
    velocity::knot,
};

/// A horizontal velocity split into its east (`x`) and north (`y`)
/// components, in knots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2D {
    x: f64,
    y: f64,
}
impl Vector2D {
    pub fn new(x: f64, y: f64) -> Vector2D {
        Vector2D { x, y }
    }

    /// Creates the vector for a speed along a compass bearing.
    /// Unlike the mathematical convention, 0 is north and angles
    /// increase clockwise.
    pub fn from_bearing(speed: Velocity, bearing: Angle) -> Vector2D {
        let knots = speed.get::<knot>();
        let radians = bearing.get::<radian>();

        Vector2D::new(knots * radians.sin(), knots * radians.cos())
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn magnitude(&self) -> Velocity {
        Velocity::new::<knot>(self.x.hypot(self.y))
    }

    /// The compass bearing the vector points towards, within `[0, 360)`.
    pub fn bearing(&self) -> Result<Angle> {
        normalize_angle(Angle::new::<degree>(self.x.atan2(self.y).to_degrees()))
    }
}
impl Sub for Vector2D {
    type Output = Vector2D;

    fn sub(self, other: Vector2D) -> Vector2D {
        Vector2D::new(self.x - other.x, self.y - other.y)
    }
}
