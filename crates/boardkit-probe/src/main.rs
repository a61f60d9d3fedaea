//! boardkit probe
//!
//! Reports which board backend this device would use and which facade
//! operations that backend implements. With `--mock` the facade is driven
//! end-to-end against the mock vendor services instead of real hardware.

use anyhow::{Context, Result};
use boardkit_config::BoardKitConfig;
use boardkit_hal::capability::{self, Capability, Fallback};
use boardkit_hal::mock::MockProvider;
use boardkit_hal::{Board, BoardKit, DeviceInfo, DeviceProperties};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "boardkit-probe")]
#[command(about = "Detect the board backend and report its capabilities", long_about = None)]
struct Args {
    /// Configuration file (defaults to the user then system location)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Use this model string instead of the detected one
    #[arg(long)]
    model: Option<String>,

    /// Drive the facade against mock vendor services
    #[arg(long)]
    mock: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct CapabilityRow {
    capability: Capability,
    supported: bool,
    fallback: Fallback,
}

#[derive(Debug, Serialize)]
struct Report {
    properties: DeviceProperties,
    board: Board,
    board_type: &'static str,
    capabilities: Vec<CapabilityRow>,
    service_info: Option<&'static str>,
    device_info: Option<DeviceInfo>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => BoardKitConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => BoardKitConfig::load_default().context("Failed to load default config")?,
    };

    setup_logging(&config.logging.filter);
    debug!("Arguments: {:?}", args);

    let properties = DeviceProperties::detect()
        .with_model_override(config.model_override())
        .with_model_override(args.model.as_deref());

    let board = boardkit_hal::select(&properties.model);
    info!("Model {:?} maps to {}", properties.model, board);

    let capabilities = Capability::all()
        .iter()
        .map(|&cap| CapabilityRow {
            capability: cap,
            supported: capability::supports(board, cap),
            fallback: cap.fallback(),
        })
        .collect();

    let mut report = Report {
        properties: properties.clone(),
        board,
        board_type: board.board_type(),
        capabilities,
        service_info: None,
        device_info: None,
    };

    if args.mock {
        let provider = MockProvider::new();
        let kit = BoardKit::create_with_validation(&provider, properties, &config)
            .context("Failed to create facade over mock services")?;

        report.service_info = Some(kit.service_info());
        report.device_info = Some(kit.device_info().context("Failed to read device info")?);

        kit.release().context("Failed to release board service")?;
    }

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
        println!("{}", json);
    } else {
        print_report(&report);
    }

    Ok(())
}

/// Setup tracing/logging
fn setup_logging(default_filter: &str) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn print_report(report: &Report) {
    println!("Model:      {}", display_or_dash(&report.properties.model));
    println!("Board:      {}", report.board_type);
    if let Some(release) = &report.properties.android_release {
        println!("Android:    {}", release);
    }
    if let Some(service) = report.service_info {
        println!("Service:    {}", service);
    }

    if let Some(info) = &report.device_info {
        println!();
        for (label, value) in info.entries() {
            println!("{:<18}{}", label, value.as_deref().unwrap_or("-"));
        }
    }

    println!();
    println!("{:<28}{:<10}Fallback", "Operation", "Supported");
    for row in &report.capabilities {
        println!(
            "{:<28}{:<10}{:?}",
            row.capability.name(),
            if row.supported { "yes" } else { "no" },
            row.fallback
        );
    }
}

fn display_or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}
