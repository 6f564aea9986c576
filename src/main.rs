mod cli;

use cli::Args;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use std::process;
use vcpkg_spdx::adapters::outbound::console::StderrProgressReporter;
use vcpkg_spdx::adapters::outbound::filesystem::FileSystemReader;
use vcpkg_spdx::adapters::outbound::process::ProcessCommandRunner;
use vcpkg_spdx::application::dto::{OutputFormat, SpdxRequest};
use vcpkg_spdx::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use vcpkg_spdx::application::use_cases::GenerateSpdxUseCase;
use vcpkg_spdx::config::{self, ConfigFile};
use vcpkg_spdx::ports::outbound::ProgressReporter;
use vcpkg_spdx::shared::error::ExitCode;
use vcpkg_spdx::shared::Result;

const DEFAULT_YAML_OUTPUT: &str = "project_spdx_document.spdx.yaml";
const DEFAULT_JSON_OUTPUT: &str = "project_spdx_document.spdx.json";

/// Everything a run needs once CLI flags and the config file are merged
#[derive(Debug)]
struct RunSettings {
    request: SpdxRequest,
    format: OutputFormat,
    destination: PresenterType,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments (clap exits with code 2 on error)
    let args = Args::parse_args();
    let verbose = args.verbose;
    let reporter = StderrProgressReporter::with_verbosity(verbose);

    reporter.report(&format!(
        "Welcome to vcpkg-spdx v{} - Licensed under MIT\n",
        env!("CARGO_PKG_VERSION")
    ));

    let config = load_config(args.config.as_deref(), &reporter)?;
    let settings = merge_settings(args, config)?;

    // Create adapters (Dependency Injection)
    let use_case = GenerateSpdxUseCase::new(
        FileSystemReader::new(),
        FileSystemReader::new(),
        FileSystemReader::new(),
        ProcessCommandRunner::new(),
        StderrProgressReporter::with_verbosity(verbose),
    );

    let response = use_case.execute(settings.request)?;

    reporter.report(FormatterFactory::progress_message(settings.format));
    let formatter = FormatterFactory::create(settings.format);
    let content = formatter.format(&response.document)?;

    let presenter = PresenterFactory::create(settings.destination.clone());
    presenter.present(&content)?;

    let package_count = response.document.packages().len();
    match settings.destination {
        PresenterType::File(path) => reporter.report_completion(&format!(
            "✅ SPDX document with {} package(s) written to: {}",
            package_count,
            path.display()
        )),
        PresenterType::Stdout => reporter.report_completion(&format!(
            "✅ SPDX document with {} package(s) written to stdout",
            package_count
        )),
    }

    Ok(())
}

/// Loads the explicit config file, or auto-discovers one in the working directory
fn load_config(explicit: Option<&Path>, reporter: &impl ProgressReporter) -> Result<ConfigFile> {
    if let Some(path) = explicit {
        let config = config::load_config_from_path(path)?;
        reporter.report(&format!("📄 Using config file: {}", path.display()));
        return Ok(config);
    }

    match config::discover_config(Path::new("."))? {
        Some((path, config)) => {
            reporter.report(&format!(
                "📄 Auto-discovered config file: {}",
                path.display()
            ));
            Ok(config)
        }
        None => Ok(ConfigFile::default()),
    }
}

/// Merges CLI flags over config file values
///
/// A flag given on the command line always wins. List options (`--features`,
/// `--creator`) replace the config list rather than extend it.
fn merge_settings(args: Args, config: ConfigFile) -> Result<RunSettings> {
    let format = args
        .format
        .or_else(|| config.output_format())
        .unwrap_or_default();

    let destination = if args.stdout {
        PresenterType::Stdout
    } else {
        let output = args
            .output
            .or(config.output)
            .unwrap_or_else(|| PathBuf::from(default_output(format)));
        PresenterType::File(output)
    };

    let features = if args.features.is_empty() {
        config.features.unwrap_or_default()
    } else {
        args.features
    };

    let creators = if args.creators.is_empty() {
        config.creators.unwrap_or_default()
    } else {
        args.creators
    };

    let mut builder = SpdxRequest::builder()
        .additional_registry(args.additional_registry.or(config.additional_registry))
        .features(features)
        .mermaid(args.mermaid || config.mermaid.unwrap_or(false))
        .skip_depend_info(args.skip_depend_info)
        .creators(creators);

    if let Some(path) = args.project_manifest.or(config.project_manifest) {
        builder = builder.project_manifest(path);
    }
    if let Some(path) = args.ports_dir.or(config.ports_dir) {
        builder = builder.ports_dir(path);
    }
    if let Some(path) = args.vcpkg_executable.or(config.vcpkg_executable) {
        builder = builder.vcpkg_executable(path);
    }
    if let Some(path) = args.dependencies_dgml.or(config.dependencies_dgml) {
        builder = builder.dependencies_dgml(path);
    }
    if let Some(path) = args.dependencies_md.or(config.dependencies_md) {
        builder = builder.dependencies_md(path);
    }

    Ok(RunSettings {
        request: builder.build()?,
        format,
        destination,
    })
}

fn default_output(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Yaml => DEFAULT_YAML_OUTPUT,
        OutputFormat::Json => DEFAULT_JSON_OUTPUT,
    }
}
