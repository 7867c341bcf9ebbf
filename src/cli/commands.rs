//! Command dispatch

use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::services::inject_active_theme;
use crate::application::ApplicationError;
use crate::cli::args::{Cli, Commands, ConfigCommands, ThemeCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::{ConnectionStats, Id, ThemeRegistry, TicketCounts};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::style_store;
use crate::infrastructure::InfraError;

/// Run the start-up sequence and dispatch the parsed command.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    // Commands that need no settings
    if let Some(Commands::Completion { shell }) = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(*shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let settings = Settings::load(cli.config.as_deref())?;
    let container = ServiceContainer::new(settings)?;

    // Style variables are published before any command reads them
    inject_active_theme(&container.registry);

    match &cli.command {
        Some(Commands::Stats {
            catalog,
            protocol,
            json,
        }) => cmd_stats(&container, catalog, protocol.as_deref(), *json),
        Some(Commands::Tree { catalog }) => cmd_tree(&container, catalog),
        Some(Commands::Tickets {
            tickets,
            user,
            json,
        }) => cmd_tickets(&container, tickets, user, *json),
        Some(Commands::Summary {
            catalog,
            tickets,
            user,
            json,
        }) => cmd_summary(&container, catalog, tickets, user, *json),
        Some(Commands::Theme { command }) => cmd_theme(&container, command),
        Some(Commands::Config { command }) => cmd_config(&container, command),
        Some(Commands::Completion { .. }) => Ok(()),
        None => Err(CliError::Usage("no command given, see --help".to_string())),
    }
}

#[instrument(skip(container))]
fn cmd_stats(
    container: &ServiceContainer,
    catalog: &Path,
    protocol: Option<&str>,
    json: bool,
) -> CliResult<()> {
    let dashboard = container.dashboard();
    if let Some(protocol) = protocol {
        let count = dashboard.count_connections(catalog, Some(protocol))?;
        if json {
            output::info(&to_json(&BTreeMap::from([(protocol, count)]))?);
        } else {
            output::stat(protocol, count);
        }
        return Ok(());
    }

    let stats = dashboard.connection_stats(catalog)?;
    if json {
        output::info(&to_json(&stats)?);
    } else {
        print_connection_stats(&stats);
    }
    Ok(())
}

#[instrument(skip(container))]
fn cmd_tree(container: &ServiceContainer, catalog: &Path) -> CliResult<()> {
    let nodes = container.dashboard().load_catalog(catalog)?;
    let label = catalog.display().to_string();
    output::info(&output::catalog_tree(&label, &nodes));
    Ok(())
}

#[instrument(skip(container))]
fn cmd_tickets(
    container: &ServiceContainer,
    tickets: &Path,
    user: &Id,
    json: bool,
) -> CliResult<()> {
    let counts = container.dashboard().ticket_counts(tickets, user)?;
    if json {
        output::info(&to_json(&counts)?);
    } else {
        print_ticket_counts(&counts);
    }
    Ok(())
}

#[instrument(skip(container))]
fn cmd_summary(
    container: &ServiceContainer,
    catalog: &Path,
    tickets: &Path,
    user: &Id,
    json: bool,
) -> CliResult<()> {
    let metrics = container.dashboard().metrics(catalog, tickets, user)?;
    if json {
        output::info(&to_json(&metrics)?);
    } else {
        print_connection_stats(&metrics.connections);
        print_ticket_counts(&metrics.tickets);
    }
    Ok(())
}

fn cmd_theme(container: &ServiceContainer, command: &ThemeCommands) -> CliResult<()> {
    let registry: &ThemeRegistry = &container.registry;
    match command {
        ThemeCommands::List => {
            let (active, _) = registry.active();
            for name in registry.names() {
                let marker = if name == active { "*" } else { " " };
                let suffix = if name == registry.default_name() {
                    " (default)"
                } else {
                    ""
                };
                output::info(&format!("{} {}{}", marker, name, suffix));
            }
        }
        ThemeCommands::Show { name } => {
            let (resolved, palette) = match name {
                Some(name) => registry.resolve_named(name),
                None => registry.active(),
            };
            let requested = name.as_deref().unwrap_or(registry.active_name());
            if requested != resolved.as_str() {
                output::warning(&format!(
                    "theme '{}' is not registered, showing '{}'",
                    requested, resolved
                ));
            }
            output::header(&format!("Theme: {}", resolved));
            output::info(&output::role_header());
            for line in output::palette_lines(palette) {
                output::info(&line);
            }
        }
        ThemeCommands::Css { output: target } => {
            let store = style_store::snapshot();
            match target {
                Some(path) => {
                    debug!("writing css to {}", path.display());
                    store
                        .write_css(container.fs.as_ref(), path)
                        .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
                }
                None => print!("{}", store.to_css()),
            }
        }
    }
    Ok(())
}

fn cmd_config(container: &ServiceContainer, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&container.settings.to_toml()?),
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => {
                return Err(CliError::Usage(
                    "cannot determine config directory".to_string(),
                ))
            }
        },
    }
    Ok(())
}

fn print_connection_stats(stats: &ConnectionStats) {
    output::header("Connection Overview");
    output::stat("Total", stats.total);
    output::stat("RDP", stats.rdp);
    output::stat("SSH", stats.ssh);
    output::stat("VNC", stats.vnc);
}

fn print_ticket_counts(counts: &TicketCounts) {
    output::header("Access Tickets");
    output::stat("Personal", counts.personal);
    output::stat("Received", counts.received);
    output::stat("Shared", counts.shared);
}

fn to_json<T: serde::Serialize>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| {
        ApplicationError::OperationFailed {
            context: "serialize output".to_string(),
            source: Box::new(e),
        }
        .into()
    })
}
