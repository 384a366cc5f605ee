use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};

use vendor_import::app::export_use_case::{ExportOutcome, ExportUseCase};
use vendor_import::app::import_use_case::{ImportOutcome, ImportUseCase};
use vendor_import::app::ports::VendorSinkPort;
use vendor_import::config::Config;
use vendor_import::constants;
use vendor_import::infra::{DryRunSink, HttpVendorSink, JsonFileExporter, SpreadsheetSource};
use vendor_import::logging;

#[derive(Parser)]
#[command(name = "vendor_import")]
#[command(about = "Imports construction vendors from a spreadsheet")]
#[command(version)]
struct Cli {
    /// Export all vendors to a JSON file instead of importing them
    #[arg(long)]
    export_json: bool,

    /// Post each vendor to the configured API instead of printing it
    #[arg(long, conflicts_with = "export_json")]
    live: bool,

    /// Spreadsheet to read (.xlsx, .xls, .ods or .csv)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Destination of the JSON export
    #[arg(long)]
    output: Option<PathBuf>,

    /// Configuration file; defaults are used when it does not exist
    #[arg(long, default_value = constants::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = Config::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    config.apply_env_overrides();

    if let Some(input) = &cli.input {
        config.import.input_path = input.clone();
    }
    if let Some(output) = &cli.output {
        config.import.export_path = output.clone();
    }
    Ok(config)
}

fn export_vendors_json(config: &Config, source: SpreadsheetSource) -> anyhow::Result<()> {
    let exporter = JsonFileExporter::new(&config.import.export_path);
    let use_case = ExportUseCase::new(Box::new(source), Box::new(exporter));

    match use_case.run().context("writing vendor export")? {
        ExportOutcome::Exported { count, path } => {
            println!("✅ Exported {} vendors to {}", count, path.display());
            println!("You can now manually import this data into your vendor database");
        }
        ExportOutcome::NoVendors => {
            println!("❌ No vendor data to export");
        }
    }
    Ok(())
}

async fn import_vendors(config: &Config, source: SpreadsheetSource, live: bool) -> anyhow::Result<()> {
    println!("=== VENDOR DATABASE IMPORT ===");
    println!();

    let sink: Box<dyn VendorSinkPort> = if live {
        let sink = HttpVendorSink::new(&config.api).context("configuring live import")?;
        info!(url = %sink.url(), "Live import enabled");
        Box::new(sink)
    } else {
        Box::new(DryRunSink::new())
    };

    let use_case = ImportUseCase::new(Box::new(source), sink);
    match use_case.run().await {
        ImportOutcome::Completed(summary) => println!("{}", summary),
        ImportOutcome::NoVendors => println!("No vendors to import"),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let _log_guard = logging::init_logging();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let source = SpreadsheetSource::new(&config.import.input_path).with_sheet(config.import.sheet.clone());

    let result = if cli.export_json {
        export_vendors_json(&config, source)
    } else {
        import_vendors(&config, source, cli.live).await
    };

    if let Err(e) = &result {
        error!("Vendor import failed: {:#}", e);
    }
    result
}
