use std::cmp::Ordering;
use std::fmt;
use serde::{Serialize, Deserialize};

/// A point in the plane.
/// Contains the coordinates of the point, both freely mutable.
///
/// Points compare by their distance from the origin, not by coordinates:
/// `Point::new(3.0, 4.0) == Point::new(4.0, 3.0)` holds, and sorting a list of points
/// orders it by ascending distance from the origin.
/// Use `coords` to compare the coordinates themselves.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}
impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Point{x, y}
    }

    /// Create the origin.
    pub fn zero() -> Self {
        Point{x: 0.0, y: 0.0}
    }

    /// Get the coordinate pair.
    pub fn coords(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Get the Euclidean distance from the origin.
    pub fn distance_orig(&self) -> f64 {
        norm(self.x, self.y)
    }

    /// Get the distance between two points.
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;

        norm(dx, dy)
    }
}

/// Length of the vector `(dx, dy)`.
/// Falls back to `hypot` when the squared sum leaves the normal range,
/// so huge and tiny finite coordinates keep distinct distances.
fn norm(dx: f64, dy: f64) -> f64 {
    let sq = dx*dx + dy*dy;
    if sq.is_normal() || (dx == 0.0 && dy == 0.0) {
        sq.sqrt()
    } else {
        dx.hypot(dy)
    }
}

impl Default for Point {
    fn default() -> Self {
        Point::zero()
    }
}
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point ({}, {})", self.x, self.y)
    }
}
impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point{x, y}
    }
}

// Ordering by distance from the origin.
// `total_cmp` keeps the order total, so NaN coordinates sort after everything else.
impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Point {}
impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance_orig().total_cmp(&other.distance_orig())
    }
}
