//! Command dispatch

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{self, Settings};
use crate::domain::{render, TreeRender};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Err(CliError::Usage(
            "no command given, see `treemark --help`".to_string(),
        ));
    };

    if let Commands::Completion { shell } = command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(*shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let config_dir = resolve_config_dir(cli)?;
    let mut settings = Settings::load(Some(config_dir.as_path()))?;
    settings.verbose |= cli.verbose;
    debug!("settings: {:?}", settings);

    match command {
        Commands::Show { file } => show(&ServiceContainer::new(settings), file),
        Commands::List { file } => list(&ServiceContainer::new(settings), file),
        Commands::Convert { input, output } => {
            convert(&ServiceContainer::new(settings), input, output.as_deref())
        }
        Commands::Config { command } => config_command(command, &settings, &config_dir),
        Commands::Completion { .. } => Ok(()),
    }
}

fn resolve_config_dir(cli: &Cli) -> CliResult<PathBuf> {
    match &cli.config_dir {
        Some(dir) if !dir.is_dir() => Err(CliError::InvalidArgs(format!(
            "config directory does not exist: {}",
            dir.display()
        ))),
        Some(dir) => Ok(dir.clone()),
        None => std::env::current_dir()
            .map_err(|e| CliError::from(InfraError::io("resolve current directory", e))),
    }
}

#[instrument(skip(container))]
fn show(container: &ServiceContainer, file: &Path) -> CliResult<()> {
    let tree = container.document_service().read_file(file)?;
    output::info(&tree.to_term_tree());
    Ok(())
}

#[instrument(skip(container))]
fn list(container: &ServiceContainer, file: &Path) -> CliResult<()> {
    let tree = container.document_service().read_file(file)?;
    for (node, line) in tree.iter().zip(render::list_lines(&tree)) {
        output::info(&format!("{:>3} {}", node.depth(), line));
    }
    Ok(())
}

#[instrument(skip(container))]
fn convert(
    container: &ServiceContainer,
    input: &Path,
    output_path: Option<&Path>,
) -> CliResult<()> {
    let service = container.document_service();
    let tree = service.read_file(input)?;
    let Some(output_path) = output_path else {
        output::info(&service.to_markup_string(&tree)?);
        return Ok(());
    };
    let written = service.write_file(&tree, output_path)?;
    output::success(&format!(
        "{} -> {} ({} nodes)",
        input.display(),
        written.display(),
        tree.len()
    ));
    Ok(())
}

fn config_command(command: &ConfigCommands, settings: &Settings, config_dir: &Path) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::header("Effective settings");
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => {
            let global = config::global_config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<unavailable>".to_string());
            output::action("global", &global);
            output::action("local", &config::local_config_path(config_dir).display());
        }
    }
    Ok(())
}
