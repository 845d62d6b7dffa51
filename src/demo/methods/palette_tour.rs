use std::io::Write;

use serde::{Serialize, Deserialize};

use crate::{args, demo, io};
use crate::geo_2d::{ColorPoint, Palette};
use demo::methods;

/// Palette tour demo struct.
/// Shows a restricted point failing on a color outside the palette, succeeding once
/// the color is added, and the factory and distance helpers.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct Method {
    /// Color added to the palette during the tour.
    #[serde(default = "Method::default_color")]
    color: String,
    /// Coordinate pair handed to the factory.
    #[serde(default = "Method::default_coordinate")]
    coordinate: (f64, f64),
}
impl Method {
    pub fn default_color() -> String {
        "rojo".to_string()
    }
    pub fn default_coordinate() -> (f64, f64) {
        (3.0, 2.0)
    }
}
impl Default for Method {
    fn default() -> Self {
        Method{
            color: Method::default_color(),
            coordinate: Method::default_coordinate(),
        }
    }
}

impl methods::DemoMethod for Method {
    fn get_method_name(&self) -> &'static str {
        "Palette Tour"
    }

    fn parse_method_cfg(&mut self, method_cfg_file: &str) -> args::ProcResult<()> {
        *self = methods::load_method_cfg(method_cfg_file)?;
        Ok(())
    }

    fn cfg_string(&self, format: args::Format) -> io::IoResult<String> {
        io::to_format_string(self, format)
    }

    fn do_demo(&self, out: &mut dyn Write) -> demo::ProcResult<()> {
        let mut palette = Palette::new();
        writeln!(out, "Allowed colors: {}", palette)?;

        match ColorPoint::restricted(1, 2, self.color.as_str(), &palette) {
            Ok(p) => writeln!(out, "AdvancedPoint(1, 2, {}) built: {}", self.color, p)?,
            Err(error) => writeln!(out, "AdvancedPoint(1, 2, {}) failed: {}", self.color, error)?,
        }

        if palette.add_color(self.color.as_str()) {
            writeln!(out, "Added {}: {}", self.color, palette)?;
        }
        let p1 = ColorPoint::restricted(1, 2, self.color.as_str(), &palette)?;
        writeln!(out, "{}", p1)?;
        writeln!(out, "distance from origin: {}", p1.distance_orig())?;

        let (x, y) = self.coordinate;
        let p2 = ColorPoint::from_tuple(self.coordinate, None, &palette)?;
        writeln!(out, "from_tuple(({}, {})): {}", x, y, p2)?;
        writeln!(out, "distance_2_points: {}", ColorPoint::distance_2_points(&p1, &p2))?;
        writeln!(out, "distance_to_other: {}", p1.distance_to_other(&p2))?;

        Ok(())
    }
}
