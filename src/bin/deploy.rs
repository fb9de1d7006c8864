use fixture_scripts::utils::logger;
use fixture_scripts::{parse_positional, run, DeployArgs};

fn main() {
    logger::init_cli_logger();

    let args: DeployArgs = parse_positional(std::env::args_os()).unwrap_or_else(|e| e.exit());

    if let Err(e) = run(&args, std::io::stdout().lock()) {
        tracing::error!("❌ {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}
