use std::io::Write;

use serde::{Serialize, Deserialize};

use crate::{args, demo, io};
use crate::geo_2d::{ColorPoint, Scalar};
use demo::methods;

/// Color tour demo struct.
/// Builds a colored point, then shows the error for a coordinate that is not a number.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct Method {
    #[serde(default = "Method::default_color")]
    color: String,
    /// Coordinate used to show the validation failure.
    #[serde(default = "Method::default_bad_x")]
    bad_x: Scalar,
}
impl Method {
    pub fn default_color() -> String {
        "red".to_string()
    }
    pub fn default_bad_x() -> Scalar {
        Scalar::from("a")
    }
}
impl Default for Method {
    fn default() -> Self {
        Method{
            color: Method::default_color(),
            bad_x: Method::default_bad_x(),
        }
    }
}

impl methods::DemoMethod for Method {
    fn get_method_name(&self) -> &'static str {
        "Color Tour"
    }

    fn parse_method_cfg(&mut self, method_cfg_file: &str) -> args::ProcResult<()> {
        *self = methods::load_method_cfg(method_cfg_file)?;
        Ok(())
    }

    fn cfg_string(&self, format: args::Format) -> io::IoResult<String> {
        io::to_format_string(self, format)
    }

    fn do_demo(&self, out: &mut dyn Write) -> demo::ProcResult<()> {
        let p = ColorPoint::new(1, 2, self.color.as_str())?;
        writeln!(out, "{}", p)?;
        writeln!(out, "distance from origin: {}", p.distance_orig())?;

        match ColorPoint::new(self.bad_x.clone(), 2, self.color.as_str()) {
            Ok(p) => writeln!(out, "ColorPoint({}, 2, {}) built: {}", self.bad_x, self.color, p)?,
            Err(error) => writeln!(out, "ColorPoint({}, 2, {}) failed: {}", self.bad_x, self.color, error)?,
        }

        Ok(())
    }
}
