use std::io::Write;

use crate::{
    args,
    demo,
    err_str,
    PointResult,
};
use demo::DemoMethod;

/// Display an example config file for a demo scenario.
/// Without a scenario name, lists the available scenarios instead.
/// Returns a `PointResult` with `()` or an `Err`.
pub fn display_config(example_args: &args::ExampleArgs, out: &mut dyn Write) -> PointResult<()> {
    let available_str = format!("Available scenarios:\n{}", demo::demo_names().iter()
        .map(|name| format!("    {}\n", name))
        .collect::<String>());

    let name = match example_args.name.as_ref() {
        Some(name) => name,
        None => {
            write!(out, "{}", available_str)?;
            return Ok(());
        },
    };

    let method = match demo::DemoChoice::from_name(name) {
        Ok(method) => method,
        Err(_) => return err_str(&format!("Scenario \"{}\" not found. {}", name, available_str)),
    };
    let cfg_str = method.cfg_string(example_args.format)?;
    writeln!(out, "{}", cfg_str.trim_end())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display(name: Option<&str>, format: args::Format) -> PointResult<String> {
        let example_args = args::ExampleArgs{name: name.map(str::to_string), format};
        let mut out = Vec::<u8>::new();
        display_config(&example_args, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn lists_scenarios() {
        let output = display(None, args::Format::Yaml).unwrap();
        assert_eq!(output, "Available scenarios:\n    point_tour\n    color_tour\n    palette_tour\n");
    }

    #[test]
    fn yaml_config() {
        let output = display(Some("point_tour"), args::Format::Yaml).unwrap();
        assert_eq!(output, "count: 5\nrange: 10\nseed: null\n");
    }

    #[test]
    fn json_config() {
        let output = display(Some("palette_tour"), args::Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["color"], "rojo");
        assert_eq!(value["coordinate"], serde_json::json!([3.0, 2.0]));
    }

    #[test]
    fn toml_config() {
        let output = display(Some("color_tour"), args::Format::Toml).unwrap();
        assert!(output.contains("color = \"red\""));
        assert!(output.contains("bad_x = \"a\""));
    }

    #[test]
    fn unknown_scenario() {
        let err = display(Some("nope"), args::Format::Yaml).unwrap_err();
        assert!(err.to_string().contains("Scenario \"nope\" not found."));
    }
}
