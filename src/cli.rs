//! Command line interface.

use crate::config::{AppConfig, OutputFormat};
use crate::models::BandwidthCalculator;
use crate::output::{
    bandwidth_json, network_json, print_input_error, print_network_info, print_to_console,
    write_bandwidth_csv, write_network_csv,
};
use crate::processing::{network_rows, read_cidr_file};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "network-calculator")]
#[command(about = "IPv4 CIDR and bandwidth/transfer time calculators")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// log4rs YAML config file [env: NETCALC_LOG_CONFIG, default: log4rs.yml]
    #[arg(long, global = true, value_name = "PATH")]
    pub log_config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Subnet mask, network/broadcast id, usable range and next network
    Cidr {
        /// Networks in <address>/<prefix> form
        cidrs: Vec<String>,
        /// Read more networks from a file, one per line
        #[arg(short, long, value_name = "PATH")]
        file: Option<PathBuf>,
        /// Also write a CSV file, `--csv=PATH` (dated default name when PATH is omitted)
        #[arg(long, value_name = "PATH", require_equals = true)]
        csv: Option<Option<PathBuf>>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Read/write split of a link and the time to move a data set
    Bandwidth {
        /// Media throughput, e.g. "1 Gbps" (Mbps, Gbps, Tbps)
        #[arg(short, long)]
        throughput: String,
        /// Read share in percent
        #[arg(short, long, allow_negative_numbers = true)]
        read: f64,
        /// Write share in percent
        #[arg(short, long, allow_negative_numbers = true)]
        write: f64,
        /// Initial data size, e.g. "1 TB" (GB, TB, PB)
        #[arg(short, long)]
        size: String,
        /// Also write a CSV file, `--csv=PATH` (dated default name when PATH is omitted)
        #[arg(long, value_name = "PATH", require_equals = true)]
        csv: Option<Option<PathBuf>>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

/// Run one command. Returns `Ok(false)` when some input was rejected.
pub fn run(cli: Cli) -> Result<bool, Box<dyn Error>> {
    match cli.command {
        Commands::Cidr {
            cidrs,
            file,
            csv,
            json,
        } => {
            let cfg = AppConfig::new(json, csv, cli.no_color, "cidr");
            cfg.apply_color();
            let mut cidrs = cidrs;
            if let Some(file) = file {
                cidrs.extend(read_cidr_file(file)?);
            }
            cidr_command(&cidrs, &cfg)
        }
        Commands::Bandwidth {
            throughput,
            read,
            write,
            size,
            csv,
            json,
        } => {
            let cfg = AppConfig::new(json, csv, cli.no_color, "bandwidth");
            cfg.apply_color();
            bandwidth_command(&throughput, read, write, &size, &cfg)
        }
    }
}

/// Print (and optionally write to CSV) the attributes of every CIDR.
///
/// Invalid entries are reported on stderr and skipped.
pub fn cidr_command(cidrs: &[String], cfg: &AppConfig) -> Result<bool, Box<dyn Error>> {
    if cidrs.is_empty() {
        return Err("no CIDR given: pass networks as arguments or with --file".into());
    }
    let mut rows = Vec::with_capacity(cidrs.len());
    let mut all_valid = true;
    for (input, result) in cidrs.iter().zip(network_rows(cidrs)) {
        match result {
            Ok(row) => rows.push(row),
            Err(e) => {
                print_input_error(input, &e);
                all_valid = false;
            }
        }
    }

    match cfg.format {
        OutputFormat::Table => print_network_info(&rows),
        OutputFormat::Json => println!("{}", network_json(&rows)?),
    }
    if let Some(path) = &cfg.csv_path {
        write_network_csv(&rows, path)?;
        eprintln!("{} {}", "Wrote".green(), path.display());
    }
    Ok(all_valid)
}

/// Print (and optionally write to CSV) the bandwidth report.
pub fn bandwidth_command(
    throughput: &str,
    read: f64,
    write: f64,
    size: &str,
    cfg: &AppConfig,
) -> Result<bool, Box<dyn Error>> {
    let calculator = match BandwidthCalculator::new(throughput, read, write, size) {
        Ok(calculator) => calculator,
        Err(e) => {
            let input = format!("{throughput}, {read}:{write}, {size}");
            log::warn!("rejected bandwidth input {input}: {e}");
            print_input_error(&input, &e);
            return Ok(false);
        }
    };
    log::info!(
        "transfer time for {size} at {throughput}: {} s",
        calculator.transfer_time()
    );
    let report = calculator.calculate();

    match cfg.format {
        OutputFormat::Table => print_to_console(&report),
        OutputFormat::Json => println!("{}", bandwidth_json(&report)?),
    }
    if let Some(path) = &cfg.csv_path {
        write_bandwidth_csv(&report, path)?;
        eprintln!("{} {}", "Wrote".green(), path.display());
    }
    Ok(true)
}
