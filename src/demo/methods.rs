/*!
 * This is the demo methods module.
 * Adding new demo scenarios should be done here.
 *
 * New scenarios need:
 * - A struct implementing `DemoMethod`
 * - An enum variant containing that struct in `DemoChoice`
 * - A constructor arg_name and function in `DEMO_TARGET_CONSTRUCTION`
 *
 */

use std::io::Write;

use enum_dispatch::enum_dispatch;

use crate::{
    args,
    demo,
    io,
};

//
// ------------------------------------------------------------
// Code that requires modification to add a new demo scenario
//      |
//      V
//

// Source files for the demo scenarios
mod point_tour;
mod color_tour;
mod palette_tour;

/// Demo scenarios enum.
/// To add a new scenario:
/// include it here,
/// add handling for its constructor in `DEMO_TARGET_CONSTRUCTION`,
/// and implement the `DemoMethod` trait for it.
#[derive(Debug)]
#[enum_dispatch(DemoMethod)]
pub enum DemoChoice {
    /// Plain points: coordinates, mutation, distance and sorting.
    PointTour(point_tour::Method),
    /// Colored points and coordinate validation.
    ColorTour(color_tour::Method),
    /// Restricted points: the palette, the factory and the distance helpers.
    PaletteTour(palette_tour::Method),
}

/// Demo construction array -- Written out in one place for easy modification.
/// To add a new scenario:
/// include it in the `DemoChoice` enum,
/// add handling for its constructor here,
/// and implement the `DemoMethod` trait for it.
const DEMO_TARGET_CONSTRUCTION: &[DemoConstructor] = &[
    DemoConstructor{
        arg_name: "point_tour",
        constructor: || {DemoChoice::PointTour(point_tour::Method::default())},
    },
    DemoConstructor{
        arg_name: "color_tour",
        constructor: || {DemoChoice::ColorTour(color_tour::Method::default())},
    },
    DemoConstructor{
        arg_name: "palette_tour",
        constructor: || {DemoChoice::PaletteTour(palette_tour::Method::default())},
    },
];

//
// ------------------------------------------------------------
// Traits and structs that don't need modification,
// but are references for adding a new demo scenario
//      |
//      V
//

/// Demo method trait.
/// This trait defines the functions that all demo scenarios must implement.
/// To add a new scenario:
/// include it in the `DemoChoice` enum,
/// add handling for its constructor in `DEMO_TARGET_CONSTRUCTION`,
/// and implement this trait for it.
#[enum_dispatch] // enum dispatch allows us to use the enum as a kind of trait object
pub trait DemoMethod {
    /// Get the name of the demo scenario.
    fn get_method_name(&self) -> &'static str;

    /// Parse the scenario config file (allows different arguments for different scenarios).
    /// Takes a `&str` with the path to the config file.
    fn parse_method_cfg(&mut self, method_cfg_file: &str) -> args::ProcResult<()>;

    /// Serialize the current scenario config in the given format.
    fn cfg_string(&self, format: args::Format) -> io::IoResult<String>;

    /// Run the scenario, writing its human-readable output to `out`.
    fn do_demo(&self, out: &mut dyn Write) -> demo::ProcResult<()>;
}

/// Demo constructor struct. Used to construct the demo scenarios from the arg_name string.
struct DemoConstructor {
    /// Name of the demo scenario.
    arg_name: &'static str,
    /// Constructor function.
    constructor: fn() -> DemoChoice,
}

//
// ------------------------------------------------------------
// Functions and structs with no modification or reference needed
//      |
//      V
//

/// Get the names of all the demo scenarios.
pub fn demo_names() -> Vec<&'static str> {
    DEMO_TARGET_CONSTRUCTION.iter().map(|constructor| constructor.arg_name).collect()
}

/// Demo target construction
impl DemoChoice {
    /// Construct a demo scenario from a name (given on the command line).
    pub fn from_name(arg_name: &str) -> args::ProcResult<Self> {
        for constructor in DEMO_TARGET_CONSTRUCTION.iter() {
            if constructor.arg_name == arg_name {
                return Ok((constructor.constructor)());
            }
        }

        // If the arg_name is not found, return an error with the available scenarios
        let mut error_str = format!("Demo scenario not found: {arg_name}\n");
        error_str.push('\n');
        error_str.push_str("Available scenarios:\n");
        for constructor in DEMO_TARGET_CONSTRUCTION.iter() {
            error_str.push_str(&format!("    {}\n", constructor.arg_name));
        }
        args::err_str(&error_str)
    }
}

/// Load a scenario config from a file, in the way every scenario does it.
fn load_method_cfg<T>(method_cfg_file: &str) -> args::ProcResult<T>
where T: serde::de::DeserializeOwned
{
    Ok(io::read_cfg_file(method_cfg_file)?)
}

/// Join a list of displayable items the way the demo prints lists.
fn list_str<T: std::fmt::Display>(items: &[T]) -> String {
    use itertools::Itertools;
    format!("[{}]", items.iter().join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn construct_by_name() {
        for name in demo_names() {
            let method = DemoChoice::from_name(name).unwrap();
            assert!(!method.get_method_name().is_empty());
        }
        assert_eq!(demo_names(), vec!["point_tour", "color_tour", "palette_tour"]);
    }

    #[test]
    fn unknown_name_lists_scenarios() {
        let err = DemoChoice::from_name("triangle_tour").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Demo scenario not found: triangle_tour"));
        assert!(message.contains("    palette_tour\n"));
    }

    #[test]
    fn every_cfg_serializes() {
        for name in demo_names() {
            let method = DemoChoice::from_name(name).unwrap();
            for format in args::Format::iter() {
                assert!(method.cfg_string(format).is_ok(), "{} as {}", name, format);
            }
        }
    }
}
