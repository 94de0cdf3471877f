/// Integer lattice coordinate, scaled by the collision precision factor.
/// Two moves collide exactly when they truncate to the same lattice point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LatticePos {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl LatticePos {
    /// Converts back to real coordinates by undoing the precision scale.
    pub fn to_point(self, precision: u32) -> Point {
        let p = f64::from(precision);
        Point {
            x: self.x as f64 / p,
            y: self.y as f64 / p,
            z: self.z as f64 / p,
        }
    }
}

/// Real-space coordinate, used only at the export boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A drawn line segment between two lattice points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub from: LatticePos,
    pub to: LatticePos,
}
