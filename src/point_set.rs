use std::cmp::Ordering;
use std::fmt;
use serde::{Serialize, Deserialize};

use crate::geo_2d::{
    self,
    Axis,
    ColorPoint,
    ColorRule,
    Palette,
    Point,
    RuleKind,
    Scalar,
};
use crate::io;

/// One point as written in a point-set file.
/// Without a color it is a plain point, unless the rule is `palette`,
/// in which case the default color is used.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PointSpec {
    pub x: Scalar,
    pub y: Scalar,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub rule: RuleKind,
}
impl PointSpec {
    /// Build the point, checking it against the palette if its rule asks for it.
    pub fn build(&self, palette: &Palette) -> geo_2d::ProcResult<PointEntry> {
        match (self.color.as_ref(), self.rule) {
            (None, RuleKind::Open) => Ok(PointEntry::Plain(Point::new(
                self.x.to_coordinate(Axis::X)?,
                self.y.to_coordinate(Axis::Y)?,
            ))),
            (None, RuleKind::Palette) => Ok(PointEntry::Colored(
                ColorPoint::from_tuple((self.x.clone(), self.y.clone()), None, palette)?
            )),
            (Some(color), rule) => Ok(PointEntry::Colored(ColorPoint::with_rule(
                self.x.clone(),
                self.y.clone(),
                color.as_str(),
                ColorRule::from_kind(rule, palette),
            )?)),
        }
    }
}

/// Point-set file contents.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PointSet {
    /// Colors added to the palette before any point is built.
    #[serde(default)]
    pub add_colors: Vec<String>,
    pub points: Vec<PointSpec>,
}
impl PointSet {
    /// Load a point-set file (json, toml or yaml).
    pub fn load(path: &str) -> io::IoResult<Self> {
        io::read_cfg_file(path)
    }

    /// Add the file's colors to the palette, then build every point.
    /// Stops at the first invalid point, naming its index.
    pub fn build(&self, palette: &mut Palette) -> geo_2d::ProcResult<Vec<PointEntry>> {
        for color in self.add_colors.iter() {
            palette.add_color(color.as_str());
        }

        let mut entries = Vec::with_capacity(self.points.len());
        for (idx, spec) in self.points.iter().enumerate() {
            match spec.build(palette) {
                Ok(entry) => entries.push(entry),
                Err(error) => return geo_2d::err_str(&format!("Point {}: {}", idx, error)),
            }
        }
        log::debug!("Built {} points", entries.len());
        Ok(entries)
    }
}

/// A built point from a point set, plain or colored.
/// Compares by distance from the origin.
#[derive(Debug, Clone)]
pub enum PointEntry {
    Plain(Point),
    Colored(ColorPoint),
}
impl PointEntry {
    /// Get the underlying point.
    pub fn point(&self) -> &Point {
        match self {
            PointEntry::Plain(point) => point,
            PointEntry::Colored(color_point) => color_point.point(),
        }
    }

    /// Get the output record for the point.
    pub fn to_record(&self) -> PointRecord {
        let point = self.point();
        let (color, rule) = match self {
            PointEntry::Plain(_) => (None, RuleKind::Open),
            PointEntry::Colored(color_point) => (Some(color_point.color().to_string()), color_point.rule()),
        };
        PointRecord{
            x: point.x,
            y: point.y,
            color,
            rule,
            distance: point.distance_orig(),
        }
    }
}
impl fmt::Display for PointEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointEntry::Plain(point) => write!(f, "{}", point),
            PointEntry::Colored(color_point) => write!(f, "{}", color_point),
        }
    }
}
impl PartialEq for PointEntry {
    fn eq(&self, other: &Self) -> bool {
        self.point() == other.point()
    }
}
impl Eq for PointEntry {}
impl PartialOrd for PointEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for PointEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.point().cmp(other.point())
    }
}

/// A sorted point, as written to the output file.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PointRecord {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub rule: RuleKind,
    pub distance: f64,
}

/// Output file contents of the sort command.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SortedPoints {
    pub points: Vec<PointRecord>,
}
impl SortedPoints {
    /// Collect the records of already sorted entries.
    pub fn from_entries(entries: &[PointEntry]) -> Self {
        SortedPoints{points: entries.iter().map(PointEntry::to_record).collect()}
    }
}
