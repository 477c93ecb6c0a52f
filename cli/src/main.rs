//! CLI entrypoint for memcat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use memcat_application::{CategorizeMemoryUseCase, NoProgress};
use memcat_domain::{LlmConfig, OutputFormat, Severity};
use memcat_infrastructure::{
    ConfigError, ConfigLoader, FileConfig, LlmClientFactory, load_env_file,
};
use memcat_presentation::{Cli, ConsoleFormatter, ProgressReporter};
use std::io::{IsTerminal, Read};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_directives(cli.verbose, cli.quiet)))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Provider keys may live in ./.env
    load_env_file(None);

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };
    apply_cli_overrides(&mut config, &cli);

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Warning => warn!("{}", issue.message),
            Severity::Error => tracing::error!("{}", issue.message),
        }
    }
    let errors: Vec<_> = issues.into_iter().filter(|i| i.is_error()).collect();
    if !errors.is_empty() {
        return Err(ConfigError::Invalid(errors).into());
    }

    if !config.output.color {
        colored::control::set_override(false);
    }

    let memory = match cli.memory.clone() {
        Some(text) => text,
        None => read_stdin()?,
    };

    // === Dependency Injection ===
    let llm_config: LlmConfig = config.llm.to_llm_config();
    let factory = LlmClientFactory::new(config.providers.to_provider_config())
        .with_timeout(config.llm.timeout());
    let client = factory
        .create(&config.llm.provider, llm_config)
        .context("Failed to create language model client")?;

    info!(
        "Using provider {} with model {}",
        client.provider(),
        client.model()
    );

    let mut use_case = CategorizeMemoryUseCase::new(client)
        .with_system_prompt(config.prompt.resolve()?)
        .with_retry_policy(config.retry.to_retry_policy()?);

    use_case = if cli.quiet {
        use_case.with_progress(Arc::new(NoProgress))
    } else {
        use_case.with_progress(Arc::new(ProgressReporter::new()))
    };

    let result = use_case.execute(&memory).await?;

    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();
    let output = ConsoleFormatter::format(&result, format);
    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}

/// Tracing directives for the given `-v` count.
///
/// Without `-v` the spinner prints each failed attempt itself, so the use
/// case's own failure events are silenced unless `-q` turns the spinner off.
fn log_directives(verbose: u8, quiet: bool) -> &'static str {
    match verbose {
        0 if quiet => "warn",
        0 => "warn,memcat_application=off",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    }
}

/// CLI flags take precedence over every config source.
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(provider) = &cli.provider {
        config.llm.provider = provider.clone();
    }
    if let Some(model) = &cli.model {
        config.llm.model = model.clone();
    }
    if let Some(temperature) = cli.temperature {
        config.llm.temperature = temperature;
    }
    if let Some(max_tokens) = cli.max_tokens {
        config.llm.max_tokens = max_tokens;
    }
    if let Some(max_attempts) = cli.max_attempts {
        config.retry.max_attempts = max_attempts;
    }
}

fn read_stdin() -> Result<String> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        bail!("Memory text is required. Pass it as an argument or pipe it on stdin.");
    }
    let mut text = String::new();
    stdin
        .read_to_string(&mut text)
        .context("Failed to read memory text from stdin")?;
    Ok(text)
}
