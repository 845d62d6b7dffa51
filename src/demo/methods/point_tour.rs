use std::io::Write;

use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use serde::{Serialize, Deserialize};

use crate::{args, demo, io};
use crate::geo_2d::Point;
use demo::methods;

/// Point tour demo struct.
/// Walks through the plain point: coordinates, mutation, distance from the origin,
/// comparison and sorting of randomly generated points.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct Method {
    /// Number of random points to generate.
    #[serde(default = "Method::default_count")]
    count: usize,
    /// Random coordinates are integers in `[-range, range]`.
    #[serde(default = "Method::default_range")]
    range: u32,
    /// Seed for the random points. Unseeded runs differ every time.
    #[serde(default)]
    seed: Option<u64>,
}
impl Method {
    pub fn default_count() -> usize {
        5
    }
    pub fn default_range() -> u32 {
        10
    }

    /// Generate the random points for the tour.
    fn random_points(&self) -> Vec<Point> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let range = self.range as i64;
        (0..self.count)
            .map(|_| Point::new(
                rng.gen_range(-range..=range) as f64,
                rng.gen_range(-range..=range) as f64,
            ))
            .collect()
    }
}
impl Default for Method {
    fn default() -> Self {
        Method{
            count: Method::default_count(),
            range: Method::default_range(),
            seed: None,
        }
    }
}

impl methods::DemoMethod for Method {
    fn get_method_name(&self) -> &'static str {
        "Point Tour"
    }

    fn parse_method_cfg(&mut self, method_cfg_file: &str) -> args::ProcResult<()> {
        *self = methods::load_method_cfg(method_cfg_file)?;
        Ok(())
    }

    fn cfg_string(&self, format: args::Format) -> io::IoResult<String> {
        io::to_format_string(self, format)
    }

    fn do_demo(&self, out: &mut dyn Write) -> demo::ProcResult<()> {
        let mut p = Point::new(1.0, 2.0);
        let p4 = Point::new(4.4, -55.0);

        writeln!(out, "p.x={} and p.y={}", p.x, p.y)?;
        writeln!(out, "p4.x={} and p4.y={}", p4.x, p4.y)?;

        p.x = 20.0;
        writeln!(out, "p.x={} and p.y={}", p.x, p.y)?;
        writeln!(out, "{}", p)?;

        let points = self.random_points();
        writeln!(out, "I got these {} random points:", points.len())?;
        writeln!(out, "{}", methods::list_str(&points))?;

        let p = Point::new(3.0, 4.0);
        writeln!(out, "{}", p.distance_orig())?;

        let p2 = Point::new(1.0, 1.0);
        writeln!(out, "I am comparing p > p2: {}", p > p2)?;

        writeln!(out, "the sorted list of points is:")?;
        let sorted = points.into_iter().sorted().collect::<Vec<_>>();
        writeln!(out, "{}", methods::list_str(&sorted))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::DemoMethod;

    fn run(method: &Method) -> Vec<String> {
        let mut out = Vec::<u8>::new();
        method.do_demo(&mut out).unwrap();
        String::from_utf8(out).unwrap().lines().map(str::to_string).collect()
    }

    #[test]
    fn fixed_lines() {
        let lines = run(&Method{seed: Some(7), ..Method::default()});
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "p.x=1 and p.y=2");
        assert_eq!(lines[1], "p4.x=4.4 and p4.y=-55");
        assert_eq!(lines[2], "p.x=20 and p.y=2");
        assert_eq!(lines[3], "Point (20, 2)");
        assert_eq!(lines[4], "I got these 5 random points:");
        assert_eq!(lines[6], "5");
        assert_eq!(lines[7], "I am comparing p > p2: true");
        assert_eq!(lines[8], "the sorted list of points is:");
    }

    #[test]
    fn seeded_points_are_repeatable_and_in_range() {
        let method = Method{count: 20, range: 3, seed: Some(42)};
        let points = method.random_points();
        assert_eq!(points.len(), 20);
        assert!(points.iter().all(|p| p.x.abs() <= 3.0 && p.y.abs() <= 3.0));

        let again = method.random_points();
        assert_eq!(
            points.iter().map(Point::coords).collect::<Vec<_>>(),
            again.iter().map(Point::coords).collect::<Vec<_>>(),
        );
    }

    #[test]
    fn sorted_line_is_the_random_line_sorted() {
        let method = Method{count: 8, range: 10, seed: Some(3)};
        let lines = run(&method);

        let mut expected = method.random_points();
        expected.sort();
        assert_eq!(lines[9], methods::list_str(&expected));
        assert_eq!(lines[5], methods::list_str(&method.random_points()));
    }

    #[test]
    fn no_points() {
        let lines = run(&Method{count: 0, range: 0, seed: None});
        assert_eq!(lines[4], "I got these 0 random points:");
        assert_eq!(lines[5], "[]");
        assert_eq!(lines[9], "[]");
    }

    #[test]
    fn cfg_rejects_unknown_fields() {
        assert!(serde_yaml::from_str::<Method>("count: 3\nspeed: 2\n").is_err());
        let method: Method = serde_yaml::from_str("count: 3\n").unwrap();
        assert_eq!((method.count, method.range, method.seed), (3, 10, None));
    }
}
