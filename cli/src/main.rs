//! CLI entrypoint for madori
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use colored::Colorize;
use madori_application::{
    AnswerStore, GenerateImagesUseCase, ImageParams, ImageProgressNotifier, NoImageProgress,
    RunQuizOutput, RunQuizUseCase, ShowResultOutput, ShowResultUseCase,
};
use madori_domain::{OutputFormat, default_questionnaire};
use madori_infrastructure::{
    ConfigLoader, FileConfig, ImageProvider, JsonFileAnswerStore, build_image_generator,
    save_inline_image,
};
use madori_presentation::{
    Cli, Command, ConsoleFormatter, OutputFormatter, ProgressReporter, ProviderArg,
    SimpleProgress, SlotArg, TerminalQuizPrompter,
};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_logging(cli.verbose, cli.log_dir.as_deref())?;

    info!("Starting madori");

    // Load configuration
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    if let Some(dir) = &cli.data_dir {
        config.storage.data_dir = Some(dir.clone());
    }
    config.validate().context("Invalid configuration")?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    let data_dir = config.storage.resolve_data_dir();
    info!("Using data directory {}", data_dir.display());
    let store: Arc<dyn AnswerStore> = Arc::new(JsonFileAnswerStore::new(&data_dir));

    match cli.command {
        Command::Quiz => run_quiz(store).await,
        Command::Result { format } => {
            let format = format
                .map(OutputFormat::from)
                .or(config.output.format)
                .unwrap_or_default();
            let output = load_session(store)?;
            println!("{}", ConsoleFormatter.render(&output.recommendation, format));
            Ok(())
        }
        Command::Images {
            provider,
            only,
            quiet,
        } => generate_images(store, &config, &data_dir, provider, only, quiet).await,
        Command::ShowConfig => {
            ConfigLoader::print_config_sources(cli.config.as_ref());
            println!();
            println!("{}", "Effective configuration:".cyan().bold());
            println!("{}", toml::to_string_pretty(&config)?);
            println!("Data directory: {}", data_dir.display());
            Ok(())
        }
    }
}

/// Install the stderr subscriber and, with `--log-dir`, a daily log file
fn init_logging(verbose: u8, log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, "madori.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}

async fn run_quiz(store: Arc<dyn AnswerStore>) -> Result<()> {
    let prompter = Arc::new(TerminalQuizPrompter::new());
    let use_case = RunQuizUseCase::new(store.clone(), prompter);

    match use_case.execute(default_questionnaire()).await? {
        RunQuizOutput::Completed(_) => {
            println!("\n{}", "診断が完了しました。".green().bold());
            let output = load_session(store)?;
            println!("{}", ConsoleFormatter::format(&output.recommendation));
        }
        RunQuizOutput::Abandoned { answered } => {
            println!(
                "{}",
                format!("診断を中断しました ({}問回答、保存していません)。", answered).yellow()
            );
        }
    }
    Ok(())
}

/// Read the saved answers, turning a missing session into the restart notice
fn load_session(store: Arc<dyn AnswerStore>) -> Result<ShowResultOutput> {
    match ShowResultUseCase::new(store).execute() {
        Ok(output) => Ok(output),
        Err(e) if e.requires_restart() => {
            eprintln!("{}", e.to_string().yellow().bold());
            bail!("No usable diagnosis found. Run `madori quiz` first.")
        }
        Err(e) => Err(e.into()),
    }
}

async fn generate_images(
    store: Arc<dyn AnswerStore>,
    config: &FileConfig,
    data_dir: &Path,
    provider: Option<ProviderArg>,
    only: Option<SlotArg>,
    quiet: bool,
) -> Result<()> {
    let output = load_session(store)?;

    let mut image_config = config.image.clone();
    if let Some(provider) = provider {
        image_config.provider = provider
            .as_str()
            .parse::<ImageProvider>()
            .map_err(anyhow::Error::msg)?;
    }
    info!("Generating images with {}", image_config.provider);

    let generator = build_image_generator(&image_config)?;

    let mut params = ImageParams::default().with_request_delay(image_config.request_delay());
    if let Some(slot) = only {
        params = params.with_only(slot.into());
    }
    let use_case = GenerateImagesUseCase::new(generator).with_params(params);

    let progress: Box<dyn ImageProgressNotifier> = if quiet {
        Box::new(NoImageProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    let result = use_case
        .execute(&output.recommendation.image_prompts, progress.as_ref())
        .await;

    let image_dir: PathBuf = data_dir.join("images");
    let (lines, failures) = ConsoleFormatter::format_image_results(&result.outcomes, |reference, slot| {
        save_inline_image(reference, slot, &image_dir)
    });
    for line in lines {
        println!("{}", line);
    }

    if failures > 0 {
        bail!(
            "{} of {} images could not be generated",
            failures,
            result.outcomes.len()
        );
    }
    Ok(())
}
