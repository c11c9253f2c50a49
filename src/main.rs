use network_calculator::cli::{self, Cli};
use network_calculator::config::log_config_path;
use network_calculator::logging;
use std::error::Error;
use std::process::ExitCode;

fn main() -> Result<ExitCode, Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse_args();
    logging::init(&log_config_path(cli.log_config.as_deref()))?;
    log::info!("#Start main()");

    let all_valid = cli::run(cli)?;

    log::info!("#End main() all_valid={all_valid}");
    Ok(if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
