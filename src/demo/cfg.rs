use crate::args;
use crate::demo::{
    DemoChoice,
    DemoMethod,
};

/// Demo target struct.
/// Contains the demo scenario, configured and ready to run.
#[derive(Debug)]
pub struct DemoTarget {
    /// Demo scenario.
    pub demo_method: DemoChoice,
    /// Config file the scenario was loaded from, if any.
    pub cfg_file: Option<String>,
}
impl DemoTarget {
    /// Construct a demo target from the demo command arguments.
    pub fn from_args(demo_args: &args::DemoArgs) -> args::ProcResult<Self> {
        let mut demo_method = DemoChoice::from_name(&demo_args.name)?;

        // Parse the method_cfg file
        if let Some(cfg_file) = demo_args.cfg_file.as_ref() {
            log::info!("Loading demo config file: {}...", cfg_file);
            demo_method.parse_method_cfg(cfg_file)?;
        }

        Ok(DemoTarget{
            demo_method,
            cfg_file: demo_args.cfg_file.clone(),
        })
    }
}
