use anyhow::{Context, Result};
use fontshortcuts_core::{
    keymap, AppConfig, Command, ConfigurationService, FontShortcuts, JsonSettingsStore, Notifier,
    ResetReport, StepReport, Surface, SurfaceReport,
};
use log::info;

use crate::cli::{Cli, CliCommand};

/// Shows user-facing errors on stderr, independent of the log filter
struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn show_error(&self, message: &str) {
        eprintln!("✗ {}", message);
    }
}

pub async fn run(cli: Cli) -> Result<()> {
    if cli.command == CliCommand::List {
        print!("{}", format_command_list());
        return Ok(());
    }

    let store = open_store(&cli).await?;

    match cli.command {
        CliCommand::Run { id } => {
            let command: Command = id.parse()?;
            execute(store, command).await
        }
        CliCommand::Key { chord } => {
            let command = keymap::lookup(&chord)
                .with_context(|| format!("No command is bound to \"{}\"", chord))?;
            info!("{} -> {}", chord, command);
            execute(store, command).await
        }
        CliCommand::Get { key } => {
            let value = store
                .get(&key)
                .with_context(|| format!("\"{}\" is not set", key))?;
            println!("{}", value);
            Ok(())
        }
        CliCommand::List => Ok(()),
    }
}

async fn open_store(cli: &Cli) -> Result<JsonSettingsStore> {
    let mut config = AppConfig::load(cli.config.clone())?;
    if let Some(user) = &cli.settings {
        config.settings.user = user.clone();
    }
    if let Some(workspace) = &cli.workspace {
        config.settings.workspace = Some(workspace.clone());
    }

    JsonSettingsStore::open(&config.settings.user, config.settings.workspace.clone())
        .await
        .with_context(|| format!("Failed to open {}", config.settings.user.display()))
}

async fn execute(store: JsonSettingsStore, command: Command) -> Result<()> {
    let shortcuts = FontShortcuts::new(store, StderrNotifier);
    let reports = shortcuts.execute(command).await?;
    for (surface, report) in reports {
        println!("{}", format_report(surface, report));
    }
    Ok(())
}

fn format_report(surface: Surface, report: SurfaceReport) -> String {
    let key = surface.keys().font_size;
    match report {
        SurfaceReport::Step(StepReport::Unchanged) => format!("{}: unchanged", key),
        SurfaceReport::Step(StepReport::Changed(change)) => format!(
            "{}: {} (line height {})",
            key, change.font_size, change.line_height
        ),
        SurfaceReport::Reset(ResetReport::Cleared) => format!("{}: override cleared", key),
        SurfaceReport::Reset(ResetReport::Applied(size)) => format!("{}: {}", key, size),
        SurfaceReport::Reset(ResetReport::Rejected) => format!("{}: reset rejected", key),
    }
}

fn format_command_list() -> String {
    let mut out = String::new();
    for command in Command::ALL {
        let chords: Vec<_> = keymap::chords_for(command).collect();
        out.push_str(&format!("{:<42} {}\n", command.id(), chords.join(", ")));
    }
    out
}
