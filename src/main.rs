mod cli;

use cli::{Args, Settings};
use gradle_inventory::adapters::outbound::console::{
    StderrDeprecationChecker, StderrProgressReporter, StderrStatisticsReporter,
};
use gradle_inventory::adapters::outbound::filesystem::FileSystemInputStreamFactory;
use gradle_inventory::adapters::outbound::memory::InMemoryComponentSink;
use gradle_inventory::application::dto::InventoryReport;
use gradle_inventory::application::factories::{PresenterFactory, PresenterType, ReaderFactory};
use gradle_inventory::config::{discover_config, load_config_from_path, ConfigFile};
use gradle_inventory::ports::outbound::ProgressReporter;
use gradle_inventory::shared::error::ExitCode;
use gradle_inventory::shared::Result;
use std::process;

fn main() {
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let progress_reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    let config = load_config(&args)?;
    let settings = args.resolve(config)?;

    progress_reporter.report(&format!(
        "📖 Reading '{}' inventory from: {}",
        settings.reader_type, settings.source
    ));

    let report = read(&settings)?;

    progress_reporter.report_completion(&format!(
        "✅ Mapped {} component(s) with {} license(s)",
        report.component_count, report.license_count
    ));

    let presenter = PresenterFactory::create(PresenterType::from_output(settings.output.clone()));
    presenter.present(&report.to_json()?)
}

fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => load_config_from_path(path).map(Some),
        None => discover_config(&std::env::current_dir()?),
    }
}

fn read(settings: &Settings) -> Result<InventoryReport> {
    let sink = InMemoryComponentSink::new();
    let mut reader = ReaderFactory::create(
        settings.reader_type,
        FileSystemInputStreamFactory::new(),
        StderrStatisticsReporter::new(),
        sink.clone(),
        StderrDeprecationChecker::new(),
    );

    reader.read_inventory(
        &settings.source,
        &settings.application,
        settings.usage_pattern,
        &settings.repo_type,
    )?;

    Ok(InventoryReport::new(
        settings.reader_type,
        &settings.source,
        settings.application.name(),
        sink.take(),
    ))
}
