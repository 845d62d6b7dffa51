pub mod args;
pub mod demo;
pub mod example;
pub mod geo_2d;
pub mod io;
pub mod point_set;
mod crate_errors;

use std::io::Write;

use geo_2d::{Palette, RuleKind, Scalar};
use point_set::{PointSet, PointSpec, SortedPoints};

pub use crate_errors::{
    PointError,
    PointResult,
    err_str,
};

/// Build the palette for a command: the palette file if given, else the default colors,
/// plus any colors added on the command line.
pub fn load_palette(palette_args: &args::PaletteArgs) -> PointResult<Palette> {
    let mut palette = match palette_args.palette_file.as_ref() {
        Some(palette_file) => {
            log::info!("Loading palette file: {}...", palette_file);
            io::read_cfg_file::<Palette>(palette_file)?
        },
        None => Palette::new(),
    };
    for color in palette_args.add_colors.iter() {
        palette.add_color(color.as_str());
    }
    log::debug!("Palette: {}", palette);
    Ok(palette)
}

/// Build a single point from command line arguments and print it with its distance from the origin.
pub fn show_point(point_args: &args::PointArgs, out: &mut dyn Write) -> PointResult<()> {
    let palette = load_palette(&point_args.palette_args)?;
    let spec = PointSpec{
        x: Scalar::parse_arg(&point_args.x),
        y: Scalar::parse_arg(&point_args.y),
        color: point_args.color.clone(),
        rule: if point_args.restricted { RuleKind::Palette } else { RuleKind::Open },
    };

    let entry = spec.build(&palette)?;
    writeln!(out, "{}", entry)?;
    writeln!(out, "distance from origin: {}", entry.point().distance_orig())?;
    Ok(())
}

/// Load a point-set file, print its points sorted by distance from the origin,
/// and write them to the output file if one is given.
pub fn sort_points(sort_args: &args::SortArgs, out: &mut dyn Write) -> PointResult<()> {
    let mut palette = load_palette(&sort_args.palette_args)?;

    log::info!("Loading point set: {}...", sort_args.input_path);
    let point_set = PointSet::load(&sort_args.input_path)?;
    let mut entries = point_set.build(&mut palette)?;
    entries.sort();

    for entry in entries.iter() {
        writeln!(out, "{}", entry)?;
    }

    if let Some(output_path) = sort_args.output_path.as_ref() {
        log::info!("Saving sorted points to {}...", output_path);
        io::write_cfg_file(output_path, &SortedPoints::from_entries(&entries))?;
    }
    Ok(())
}

/// Run the command given on the command line, writing its output to `out`.
pub fn run_command(cli: args::PointCli, out: &mut dyn Write) -> PointResult<()> {
    match cli.command {
        args::Command::Demo(demo_args) => {
            let demo_target = demo::DemoTarget::from_args(&demo_args)?;
            demo::do_demo(&demo_target, out)?;
        },
        args::Command::Point(point_args) => show_point(&point_args, out)?,
        args::Command::Sort(sort_args) => sort_points(&sort_args, out)?,
        args::Command::Example(example_args) => example::display_config(&example_args, out)?,
    }
    Ok(())
}

/// Top-level tests
#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn run(cli_args: &[&str]) -> PointResult<String> {
        let cli = args::PointCli::try_parse_from(cli_args).unwrap();
        let mut out = Vec::<u8>::new();
        run_command(cli, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn plain_point() {
        let output = run(&["point2d", "point", "3", "-4"]).unwrap();
        assert_eq!(output, "Point (3, -4)\ndistance from origin: 5\n");
    }

    #[test]
    fn colored_point() {
        let output = run(&["point2d", "point", "1", "2", "--color", "red"]).unwrap();
        assert_eq!(output, "<red: 1, 2>\ndistance from origin: 2.23606797749979\n");
    }

    #[test]
    fn non_numeric_coordinate() {
        let err = run(&["point2d", "point", "a", "2", "--color", "red"]).unwrap_err();
        assert!(matches!(err, PointError::GeoError(_)));
        assert_eq!(err.to_string(), "! INVALID INPUT:\n- x must be a number");
    }

    #[test]
    fn restricted_point_needs_palette_color() {
        assert!(run(&["point2d", "point", "1", "2", "-c", "rojo", "-r"]).is_err());

        let output = run(&["point2d", "point", "1", "2", "-c", "rojo", "-r", "-a", "rojo"]).unwrap();
        assert!(output.starts_with("<rojo: 1, 2>\n"));

        let output = run(&["point2d", "point", "3", "2", "-r"]).unwrap();
        assert!(output.starts_with("<red: 3, 2>\n"));
    }

    #[test]
    fn demo_by_name() {
        let output = run(&["point2d", "demo", "color_tour"]).unwrap();
        assert!(output.starts_with("<red: 1, 2>\n"));
        assert!(run(&["point2d", "demo", "no_tour"]).is_err());
    }

    #[test]
    fn missing_palette_file() {
        let err = run(&["point2d", "point", "1", "2", "-p", "no/such/palette.yaml"]).unwrap_err();
        assert!(matches!(err, PointError::IoError(_)));
    }
}
