//! Iconflow Shell
//!
//! A line-driven front end for the state engine, mostly useful for poking at
//! the browser's behavior without a GUI. Each stdin line parses into one
//! action; every distinct state the engine emits prints as a one-line
//! summary.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_stream::StreamExt;
use tracing::{debug, info};

use iconflow_core::meta::{AppMeta, StageIcon};
use iconflow_core::{
    Action, Catalog, Engine, EngineConfig, EngineHandle, IconEntry, Pack, Style, SystemClipboard,
    ViewState,
};

#[derive(Parser, Debug)]
#[command(name = "iconflow-shell", about = "Interactive shell for the iconflow engine")]
struct Cli {
    /// Application version reported by the version effect
    #[arg(long, env = "ICONFLOW_APP_VERSION", default_value = env!("CARGO_PKG_VERSION"))]
    app_version: String,

    /// Icon font library version reported by the version effect
    #[arg(long, env = "ICONFLOW_FONT_LIB_VERSION", default_value = "12.4.0")]
    font_lib_version: String,

    /// Stage icon image to pre-load; may be given multiple times
    #[arg(long = "stage-icon")]
    stage_icons: Vec<PathBuf>,

    /// Override the search debounce, in milliseconds
    #[arg(long)]
    debounce_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = EngineConfig::from_env();
    if let Some(ms) = cli.debounce_ms {
        config.debounce = Duration::from_millis(ms);
    }

    let catalog = Arc::new(iconflow_core::packs::builtin_catalog().context("loading bundled pack data")?);
    let meta = load_meta(&cli)?;

    info!(
        packs = catalog.ordered_packs().len(),
        icons = catalog.all().len(),
        "starting engine"
    );
    let engine = Engine::start(config, Arc::clone(&catalog), meta, Arc::new(SystemClipboard::new()));

    let mut states = engine.subscribe();
    let printer = tokio::spawn(async move {
        while let Some(state) = states.next().await {
            println!("{}", summarize(&state));
        }
    });

    run_repl(&engine, &catalog).await?;

    engine.shutdown().await;
    let _ = printer.await;
    Ok(())
}

fn load_meta(cli: &Cli) -> Result<AppMeta> {
    let mut icons = Vec::new();
    for path in &cli.stage_icons {
        let bytes =
            std::fs::read(path).with_context(|| format!("reading stage icon {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        icons.push(StageIcon::new(name, bytes));
    }
    Ok(AppMeta::empty()
        .with_app_version(cli.app_version.clone())
        .with_font_lib_version(cli.font_lib_version.clone())
        .with_stage_icons(icons))
}

async fn run_repl(engine: &EngineHandle, catalog: &Catalog) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }
        match parse_command(line, catalog) {
            Ok(action) => {
                debug!(?action, "dispatching");
                if engine.dispatch(action).is_err() {
                    break;
                }
            }
            Err(message) => eprintln!("{message}"),
        }
    }
    Ok(())
}

/// Parse one input line into an action.
///
/// Unknown commands and unknown pack/style/glyph names report a usage error
/// instead of an action.
fn parse_command(line: &str, catalog: &Catalog) -> std::result::Result<Action, String> {
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "search" => Ok(Action::SearchChanged(rest.to_owned())),
        "clear" => Ok(Action::SearchCleared),
        "pack" => find_pack(catalog, rest).map(Action::PackToggled),
        "packs" => Ok(Action::SelectAllPacksToggled),
        "style" => find_style(catalog, rest).map(Action::StyleToggled),
        "styles" => Ok(Action::SelectAllStylesToggled),
        "fav" => find_icon(catalog, rest).map(Action::FavoriteToggled),
        "copy" => find_icon(catalog, rest).map(Action::CopyRequested),
        "details" => find_icon(catalog, rest).map(Action::ViewDetailsRequested),
        "hide" => Ok(Action::HideDetailsRequested),
        "view" => Ok(Action::ViewModeToggled),
        "filter" => Ok(Action::FilterPanelRequested),
        "help" => Err(USAGE.to_owned()),
        other => Err(format!("unknown command '{other}'\n{USAGE}")),
    }
}

const USAGE: &str = "commands: search <text> | clear | pack <name> | packs | style <name> | styles\n          fav <glyph> | copy <glyph> | details <glyph> | hide | view | filter | quit";

fn find_pack(catalog: &Catalog, name: &str) -> std::result::Result<Pack, String> {
    catalog
        .ordered_packs()
        .iter()
        .find(|pack| pack.name().eq_ignore_ascii_case(name))
        .copied()
        .ok_or_else(|| format!("unknown pack '{name}'"))
}

fn find_style(catalog: &Catalog, name: &str) -> std::result::Result<Style, String> {
    catalog
        .ordered_styles()
        .iter()
        .find(|style| style.display_name().eq_ignore_ascii_case(name))
        .copied()
        .ok_or_else(|| format!("unknown style '{name}'"))
}

fn find_icon(catalog: &Catalog, glyph: &str) -> std::result::Result<IconEntry, String> {
    catalog
        .all()
        .iter()
        .find(|entry| entry.glyph == glyph)
        .cloned()
        .ok_or_else(|| format!("unknown glyph '{glyph}'"))
}

fn summarize(state: &ViewState) -> String {
    format!(
        "[{:?}] {} | packs={} styles={} shown={} favorites={} recents={} mode={}",
        state.activity(),
        state.message(),
        state.selected_packs().len(),
        state.selected_styles().len(),
        state.displayed().len(),
        state.favorites().len(),
        state.recents().len(),
        state.view_mode().display_name(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        iconflow_core::packs::builtin_catalog().unwrap()
    }

    #[test]
    fn parses_simple_commands() {
        let catalog = catalog();
        assert_eq!(
            parse_command("search arrow", &catalog),
            Ok(Action::SearchChanged("arrow".into()))
        );
        assert_eq!(parse_command("clear", &catalog), Ok(Action::SearchCleared));
        assert_eq!(parse_command("view", &catalog), Ok(Action::ViewModeToggled));
        assert_eq!(
            parse_command("packs", &catalog),
            Ok(Action::SelectAllPacksToggled)
        );
    }

    #[test]
    fn pack_names_are_case_insensitive() {
        let catalog = catalog();
        assert_eq!(
            parse_command("pack feather", &catalog),
            Ok(Action::PackToggled(Pack::Feather))
        );
    }

    #[test]
    fn unknown_names_report_usage_errors() {
        let catalog = catalog();
        assert!(parse_command("pack nonsense", &catalog).is_err());
        assert!(parse_command("copy not-a-glyph", &catalog).is_err());
        assert!(parse_command("frobnicate", &catalog).is_err());
    }
}
