use anyhow::Result;
use clap::Parser;
use classmap::cli::{Cli, Commands};
use classmap::config::{load_config, load_config_from, AnalyzeConfig, AnalyzeOverrides};
use classmap::observability::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (verbosity, quiet) = cli.command.logging();
    init_logging(verbosity, quiet);

    match cli.command {
        command @ Commands::Analyze { .. } => handle_analyze_command(command),
        Commands::Init { force } => classmap::commands::init_config(force),
    }
}

fn handle_analyze_command(command: Commands) -> Result<()> {
    let Commands::Analyze {
        path,
        output,
        format,
        min_classes,
        min_occurrences,
        short,
        elements,
        extensions,
        ignore,
        gitignore,
        on_read_error,
        config,
        no_parallel,
        jobs,
        quiet,
        verbosity: _,
    } = command
    else {
        return Ok(());
    };

    let file_config = match config {
        Some(config_path) => load_config_from(&config_path)?,
        None => load_config(&std::env::current_dir()?)?,
    };

    let overrides = AnalyzeOverrides {
        output,
        format,
        min_classes,
        min_occurrences,
        short,
        elements,
        extensions,
        ignore,
        gitignore,
        on_read_error,
        no_parallel,
        jobs,
    };

    let analyze_config = AnalyzeConfig::resolve(path, file_config, overrides)?;
    classmap::commands::handle_analyze(analyze_config, quiet)
}
