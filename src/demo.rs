mod proc_errors;
mod cfg;
mod methods;

use std::io::Write;

// Re-export errors
pub use proc_errors::{
    DemoError,
    ProcResult,
};
// Re-export cfg handling
pub use cfg::DemoTarget;
// Re-export demo methods
pub use methods::{
    DemoChoice,
    DemoMethod,
    demo_names,
};

/// Run a demo scenario, writing its output to `out`.
pub fn do_demo(demo_target: &DemoTarget, out: &mut dyn Write) -> ProcResult<()> {
    match demo_target.cfg_file.as_ref() {
        Some(cfg_file) => log::info!("Running demo: {} (config from {})...", demo_target.demo_method.get_method_name(), cfg_file),
        None => log::info!("Running demo: {} (default config)...", demo_target.demo_method.get_method_name()),
    }
    demo_target.demo_method.do_demo(out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;

    fn run(target: &DemoTarget) -> String {
        let mut out = Vec::<u8>::new();
        do_demo(target, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn target_keeps_its_cfg_file() {
        let demo_args = args::DemoArgs{
            name: "point_tour".to_string(),
            cfg_file: Some("tests/data/point_tour.yaml".to_string()),
        };
        let target = DemoTarget::from_args(&demo_args).unwrap();
        assert_eq!(target.cfg_file.as_deref(), Some("tests/data/point_tour.yaml"));
        assert_eq!(target.demo_method.get_method_name(), "Point Tour");

        let output = run(&target);
        assert!(output.contains("I got these 3 random points:"));
        assert_eq!(output, run(&target));
    }

    #[test]
    fn target_without_cfg_file() {
        let demo_args = args::DemoArgs{name: "color_tour".to_string(), cfg_file: None};
        let target = DemoTarget::from_args(&demo_args).unwrap();
        assert!(target.cfg_file.is_none());
        assert!(!run(&target).is_empty());
    }

    #[test]
    fn demo_errors_display() {
        let error = DemoError::from(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"));
        assert_eq!(error.to_string(), "- Output Error:\nclosed");
    }
}
