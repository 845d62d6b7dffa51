use std::cmp::Ordering;
use std::fmt;
use serde::{Serialize, Deserialize};
use strum::Display;

use crate::geo_2d::{
    Axis,
    Palette,
    Point,
    ProcResult,
    Scalar,
    err_str,
};

/// Color given to points built from a coordinate pair without one.
pub const DEFAULT_COLOR: &str = "red";

/// Color validation applied when a colored point is built.
#[derive(Debug, Clone, Copy)]
pub enum ColorRule<'a> {
    /// Any color is accepted.
    Open,
    /// The color must be allowed by the palette at construction time.
    Palette(&'a Palette),
}
impl<'a> ColorRule<'a> {
    /// Pick the rule of the given kind, checking against `palette` if restricted.
    pub fn from_kind(kind: RuleKind, palette: &'a Palette) -> Self {
        match kind {
            RuleKind::Open => ColorRule::Open,
            RuleKind::Palette => ColorRule::Palette(palette),
        }
    }

    /// Check a color against the rule.
    pub fn check(&self, color: &str) -> ProcResult<()> {
        match self {
            ColorRule::Open => Ok(()),
            ColorRule::Palette(palette) => {
                if palette.contains(color) {
                    Ok(())
                } else {
                    err_str(&format!("Invalid color, must be one of {}", palette))
                }
            },
        }
    }

    /// Get the kind of rule, without the palette.
    pub fn kind(&self) -> RuleKind {
        match self {
            ColorRule::Open => RuleKind::Open,
            ColorRule::Palette(_) => RuleKind::Palette,
        }
    }
}

/// Kind of color rule, as named in point-set files.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RuleKind {
    #[default]
    Open,
    Palette,
}

/// A point with a color.
/// Coordinates are checked to be numbers and the color is checked against the rule
/// chosen at construction.
/// `x` can be changed afterwards, `y` and the color are read-only.
/// Compares by distance from the origin, like `Point`.
#[derive(Debug, Clone)]
pub struct ColorPoint {
    point: Point,
    color: String,
    rule: RuleKind,
}
impl ColorPoint {
    /// Create a colored point with any color.
    pub fn new<X, Y, S>(x: X, y: Y, color: S) -> ProcResult<Self>
    where X: Into<Scalar>, Y: Into<Scalar>, S: Into<String>
    {
        ColorPoint::with_rule(x, y, color, ColorRule::Open)
    }

    /// Create a colored point whose color must be in the palette.
    pub fn restricted<X, Y, S>(x: X, y: Y, color: S, palette: &Palette) -> ProcResult<Self>
    where X: Into<Scalar>, Y: Into<Scalar>, S: Into<String>
    {
        ColorPoint::with_rule(x, y, color, ColorRule::Palette(palette))
    }

    /// Create a colored point under an explicit rule.
    /// Checks `x`, then `y`, then the color.
    pub fn with_rule<X, Y, S>(x: X, y: Y, color: S, rule: ColorRule) -> ProcResult<Self>
    where X: Into<Scalar>, Y: Into<Scalar>, S: Into<String>
    {
        let x = x.into().to_coordinate(Axis::X)?;
        let y = y.into().to_coordinate(Axis::Y)?;
        let color = color.into();
        rule.check(&color)?;

        Ok(ColorPoint{point: Point::new(x, y), color, rule: rule.kind()})
    }

    /// Create a restricted point from a coordinate pair, with `DEFAULT_COLOR` if no color is given.
    pub fn from_tuple<X, Y>(coordinate: (X, Y), color: Option<&str>, palette: &Palette) -> ProcResult<Self>
    where X: Into<Scalar>, Y: Into<Scalar>
    {
        let (x, y) = coordinate;
        ColorPoint::restricted(x, y, color.unwrap_or(DEFAULT_COLOR), palette)
    }

    /// Get the distance between two colored points.
    pub fn distance_2_points(p1: &ColorPoint, p2: &ColorPoint) -> f64 {
        p1.point.distance(&p2.point)
    }

    /// Get the distance from this point to another.
    pub fn distance_to_other(&self, other: &ColorPoint) -> f64 {
        ColorPoint::distance_2_points(self, other)
    }

    /// Get the Euclidean distance from the origin.
    pub fn distance_orig(&self) -> f64 {
        self.point.distance_orig()
    }

    pub fn x(&self) -> f64 {
        self.point.x
    }

    /// Move the point along the x axis. The new value must be a number.
    pub fn set_x<X: Into<Scalar>>(&mut self, x: X) -> ProcResult<()> {
        self.point.x = x.into().to_coordinate(Axis::X)?;
        Ok(())
    }

    pub fn y(&self) -> f64 {
        self.point.y
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Get the rule the point was built under.
    pub fn rule(&self) -> RuleKind {
        self.rule
    }

    /// Get the underlying point.
    pub fn point(&self) -> &Point {
        &self.point
    }
}
impl fmt::Display for ColorPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}: {}, {}>", self.color, self.point.x, self.point.y)
    }
}
impl AsRef<Point> for ColorPoint {
    fn as_ref(&self) -> &Point {
        &self.point
    }
}
impl PartialEq for ColorPoint {
    fn eq(&self, other: &Self) -> bool {
        self.point == other.point
    }
}
impl Eq for ColorPoint {}
impl PartialOrd for ColorPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for ColorPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.point.cmp(&other.point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo_2d::GeoError;

    fn invalid(message: &str) -> GeoError {
        GeoError::InvalidInput(message.to_string())
    }

    #[test]
    fn open_color_point() {
        let p = ColorPoint::new(1, 2, "red").unwrap();
        assert_eq!(p.to_string(), "<red: 1, 2>");
        assert_eq!(p.rule(), RuleKind::Open);

        let p = ColorPoint::new(1.5, -2, "mauve").unwrap();
        assert_eq!(p.color(), "mauve");
        assert_eq!((p.x(), p.y()), (1.5, -2.0));
    }

    #[test]
    fn coordinates_must_be_numbers() {
        assert_eq!(ColorPoint::new("a", 2, "red").unwrap_err(), invalid("x must be a number"));
        assert_eq!(ColorPoint::new(1, "b", "red").unwrap_err(), invalid("y must be a number"));
        assert_eq!(ColorPoint::new("a", "b", "red").unwrap_err(), invalid("x must be a number"));

        let palette = Palette::new();
        assert_eq!(ColorPoint::restricted(true, 2, "red", &palette).unwrap_err(), invalid("x must be a number"));
        // Coordinates are checked before the color
        assert_eq!(ColorPoint::restricted(1, "b", "rojo", &palette).unwrap_err(), invalid("y must be a number"));
    }

    #[test]
    fn palette_membership() {
        let mut palette = Palette::new();
        let err = ColorPoint::restricted(1, 2, "rojo", &palette).unwrap_err();
        assert_eq!(err, invalid(
            "Invalid color, must be one of [red, blue, green, yellow, black, white, periwinkle]"
        ));

        palette.add_color("rojo");
        let p = ColorPoint::restricted(1, 2, "rojo", &palette).unwrap();
        assert_eq!(p.to_string(), "<rojo: 1, 2>");
        assert_eq!(p.rule(), RuleKind::Palette);
    }

    #[test]
    fn existing_points_survive_palette_changes() {
        let palette = Palette::new();
        let p = ColorPoint::restricted(1, 2, "periwinkle", &palette).unwrap();

        let mut narrowed = Palette::from_colors(["red"]);
        narrowed.add_color("blue");
        assert_eq!(p.color(), "periwinkle");
        assert!(ColorPoint::restricted(1, 2, "periwinkle", &narrowed).is_err());
    }

    #[test]
    fn from_tuple() {
        let palette = Palette::new();
        let p = ColorPoint::from_tuple((3, 2), None, &palette).unwrap();
        assert_eq!(p.point().coords(), (3.0, 2.0));
        assert_eq!(p.color(), DEFAULT_COLOR);

        let p = ColorPoint::from_tuple((3, 2), Some("blue"), &palette).unwrap();
        assert_eq!(p.color(), "blue");
        assert!(ColorPoint::from_tuple((3, 2), Some("rojo"), &palette).is_err());
    }

    #[test]
    fn distances() {
        let palette = Palette::new();
        let p1 = ColorPoint::restricted(1, 1, "red", &palette).unwrap();
        let p2 = ColorPoint::restricted(4, 5, "blue", &palette).unwrap();
        assert_eq!(ColorPoint::distance_2_points(&p1, &p2), 5.0);
        assert_eq!(p1.distance_to_other(&p2), ColorPoint::distance_2_points(&p1, &p2));
        assert_eq!(p2.distance_to_other(&p1), p1.distance_to_other(&p2));
        assert_eq!(p2.distance_orig(), 41f64.sqrt());
    }

    #[test]
    fn set_x() {
        let mut p = ColorPoint::new(1, 2, "red").unwrap();
        p.set_x(20).unwrap();
        assert_eq!(p.to_string(), "<red: 20, 2>");
        assert_eq!(p.set_x("far").unwrap_err(), invalid("x must be a number"));
        assert_eq!(p.x(), 20.0);
    }

    #[test]
    fn orders_by_distance() {
        let mut points = vec![
            ColorPoint::new(5, 5, "red").unwrap(),
            ColorPoint::new(0, 1, "blue").unwrap(),
            ColorPoint::new(2, 0, "green").unwrap(),
        ];
        points.sort();
        let colors: Vec<&str> = points.iter().map(|p| p.color()).collect();
        assert_eq!(colors, vec!["blue", "green", "red"]);
        assert!(points[2] > points[0]);
    }
}
