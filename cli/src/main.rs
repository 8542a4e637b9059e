//! CLI entrypoint for toonbench
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use toonbench_application::{
    ComparisonParams, FormatConverter, LlmGateway, NoProgress, ProgressNotifier, ResultStore,
    RunComparisonInput, RunComparisonUseCase,
};
use toonbench_domain::OutputFormat;
use toonbench_infrastructure::{
    CommandConverter, ConfigLoader, DatasetLoader, FileConfig, GeminiLlmGateway, JsonResultStore,
    load_api_key, save_converted,
};
use toonbench_presentation::{
    Cli, ConsoleFormatter, ErrorKind, FatalError, OutputFormatter, ProgressReporter,
    QuestionPrompt, SimpleProgress,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<FatalError>() {
            Some(fatal) => {
                eprintln!("{fatal}");
                fatal.exit_code()
            }
            None => {
                let fatal = FatalError::new(ErrorKind::Other, format!("{err:#}"));
                eprintln!("{fatal}");
                fatal.exit_code()
            }
        },
    }
}

/// Initialize logging based on verbosity level. `RUST_LOG` wins when set.
fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).map_err(FatalError::config)?
    };
    apply_overrides(&mut config, &cli);

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        println!();
        print!("{}", ConfigLoader::render(&config)?);
        return Ok(());
    }

    for issue in config.validate() {
        if issue.is_error() {
            return Err(FatalError::config(issue).into());
        }
        warn!("Config: {}", issue);
    }

    if !config.output.color {
        ConsoleFormatter::disable_color();
    }

    // Credential comes before any dataset or results file is touched
    let api_key = load_api_key(&config.llm.api_key_env).map_err(FatalError::config)?;

    // === Dependency Injection ===
    let gateway: Arc<dyn LlmGateway> = Arc::new(GeminiLlmGateway::new(
        config.llm.base_url.clone(),
        api_key,
        config.llm.timeout(),
    )?);

    if cli.list_models {
        for model in gateway.available_models().await.map_err(FatalError::from)? {
            println!("{model}");
        }
        return Ok(());
    }

    compare(&cli, &config, gateway).await
}

/// One comparison run against `gateway`, from dataset loading to persistence.
///
/// Fatal checks happen in order: dataset, results file, question, conversion.
/// Nothing is sent to the gateway until all of them have passed.
async fn compare(cli: &Cli, config: &FileConfig, gateway: Arc<dyn LlmGateway>) -> Result<()> {
    // === Input ===
    let dataset_path = cli
        .dataset
        .clone()
        .ok_or_else(|| FatalError::input("a JSON file path is required"))?;
    let dataset = DatasetLoader::load(&dataset_path).map_err(FatalError::input)?;

    let results_path = results_path(cli, config, &dataset_path);
    let store = JsonResultStore::open(&results_path).map_err(FatalError::from)?;

    let question = match cli.question().map_err(FatalError::from)? {
        Some(question) => question,
        None => QuestionPrompt::stdio()
            .with_samples(config.output.show_sample_questions)
            .ask()
            .map_err(FatalError::from)?,
    };

    let params = ComparisonParams::new(config.llm.parse_model())
        .with_delay(config.comparison.delay().unwrap_or_default());

    if !cli.quiet {
        eprintln!(
            "{}\n",
            ConsoleFormatter::banner(&params.model, &config.converter.format_name)
        );
    }

    // === Conversion ===
    let converter = CommandConverter::new(
        config.converter.program.clone(),
        config.converter.args.clone(),
        config.converter.format_name.clone(),
    );
    info!("Converting: {}", converter.describe(&dataset_path));
    let converted = converter
        .convert(&dataset_path)
        .map_err(FatalError::from)?;

    if cli.save_converted {
        let path = save_converted(&dataset_path, &converted).with_context(|| {
            format!("failed to save {} output", converter.format_name())
        })?;
        info!("Saved converted text to {}", path.display());
    }

    if !cli.quiet {
        eprintln!("{}", ConsoleFormatter::dataset_stats(&dataset, &converted));
    }

    // === Queries ===
    let use_case = RunComparisonUseCase::new(gateway);
    let input = RunComparisonInput::new(dataset, converted, question, params);
    let progress: Box<dyn ProgressNotifier> = if cli.quiet {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };
    let record = use_case
        .execute_with_progress(input, progress.as_ref())
        .await;

    // === Output ===
    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();
    println!("{}", ConsoleFormatter.render(&record, format));

    let total = store.append(&record).map_err(FatalError::from)?;
    if !cli.quiet {
        eprintln!("{}", ConsoleFormatter::saved(store.location(), total));
    }

    Ok(())
}

/// Command-line flags take precedence over every configuration source.
fn apply_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(model) = &cli.model {
        config.llm.model = model.clone();
    }
    if let Some(delay) = cli.delay_secs {
        config.comparison.delay_secs = delay;
    }
    if let Some(timeout) = cli.timeout_secs {
        config.llm.timeout_secs = timeout;
    }
    if let Some(results) = &cli.results {
        config.comparison.results_file = Some(results.clone());
    }
    if let Some(program) = &cli.converter {
        config.converter.program = program.clone();
        config.converter.args.clear();
    }
}

fn results_path(cli: &Cli, config: &FileConfig, dataset_path: &std::path::Path) -> PathBuf {
    cli.results
        .clone()
        .or_else(|| config.comparison.results_file.clone())
        .unwrap_or_else(|| JsonResultStore::default_path_for(dataset_path))
}
