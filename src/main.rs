use env_logger::{Builder, Env};

fn main() {

    // 1. Set up logging (RUST_LOG, warnings and errors only by default)
    Builder::from_env(Env::default().default_filter_or("warn")).init();

    // 2. Parse commandline arguments
    let cli = point2d::args::parse_cli_args();

    // 3. Run the command, printing to stdout
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = point2d::run_command(cli, &mut out) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
