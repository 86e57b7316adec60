//! Headless editor: runs JSON commands against a session and prints responses.
//!
//! Usage: `aquascape-editor [--design <path>] [--commands <path>] [--out <path>]
//! [--fetch <id>] [--publish] [--save-settings]`. Without `--commands`,
//! commands are read from stdin, one JSON command or array of commands per
//! line. Without `--design` or `--fetch`, the last autosave is restored.

use std::io::{BufRead, BufReader, Read};
use std::path::PathBuf;

use aquascape_editor_lib::client::DesignClient;
use aquascape_editor_lib::command::{execute_json, execute_json_batch, CommandResponse};
use aquascape_editor_lib::session::EditorSession;
use aquascape_editor_lib::state::scene::{load_design_file, save_design_file};
use aquascape_editor_lib::state::EditorSettings;

#[derive(Debug, Default)]
struct Args {
    design: Option<PathBuf>,
    commands: Option<PathBuf>,
    out: Option<PathBuf>,
    fetch: Option<i64>,
    publish: bool,
    save_settings: bool,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = Args::default();
    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1);
        match (args[i].as_str(), value) {
            ("--design", Some(v)) => {
                parsed.design = Some(PathBuf::from(v));
                i += 1;
            }
            ("--commands", Some(v)) => {
                parsed.commands = Some(PathBuf::from(v));
                i += 1;
            }
            ("--out", Some(v)) => {
                parsed.out = Some(PathBuf::from(v));
                i += 1;
            }
            ("--fetch", Some(v)) => {
                match v.parse() {
                    Ok(id) => parsed.fetch = Some(id),
                    Err(e) => tracing::error!("Invalid design id '{v}': {e}"),
                }
                i += 1;
            }
            ("--publish", _) => parsed.publish = true,
            ("--save-settings", _) => parsed.save_settings = true,
            (other, _) => tracing::warn!("Ignoring argument {other}"),
        }
        i += 1;
    }
    parsed
}

/// Run one input line: a single command object or an array of them
fn run_line(session: &mut EditorSession, line: &str) -> Vec<CommandResponse> {
    let result = if line.trim_start().starts_with('[') {
        execute_json_batch(session, line)
    } else {
        execute_json(session, line).map(|r| vec![r])
    };
    match result {
        Ok(responses) => responses,
        Err(e) => {
            tracing::warn!("{e}");
            vec![CommandResponse {
                success: false,
                error: Some(e),
                data: None,
            }]
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aquascape_editor=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args();
    let settings = EditorSettings::load();
    if args.save_settings {
        // writes defaults for anything missing from the file
        settings.save();
    }
    let client = DesignClient::new(settings.api_base_url.clone());
    let mut session = EditorSession::from_settings(settings);

    if let Some(path) = &args.design {
        match load_design_file(path) {
            Ok(design) => match session.load_design(design) {
                Ok(()) => tracing::info!(
                    "Loaded design from {} ({} elements)",
                    path.display(),
                    session.element_count()
                ),
                Err(e) => tracing::error!("Design {} rejected: {e}", path.display()),
            },
            Err(e) => tracing::error!("Failed to read design {}: {e}", path.display()),
        }
    }

    if let Some(id) = args.fetch {
        if let Err(e) = session.load_remote(&client, id).await {
            tracing::error!("Failed to fetch design {id}: {e}");
        }
    }

    if args.design.is_none() && args.fetch.is_none() && session.settings.autosave {
        session.restore_autosave();
    }

    let input: Box<dyn Read> = match &args.commands {
        Some(path) => match std::fs::File::open(path) {
            Ok(file) => Box::new(file),
            Err(e) => {
                tracing::error!("Failed to open commands file {}: {e}", path.display());
                return;
            }
        },
        None => Box::new(std::io::stdin()),
    };

    for line in BufReader::new(input).lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::error!("Failed to read commands: {e}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        for response in run_line(&mut session, &line) {
            match serde_json::to_string(&response) {
                Ok(json) => println!("{json}"),
                Err(e) => tracing::error!("Failed to encode response: {e}"),
            }
        }
        session.autosave();
    }

    if let Some(path) = &args.out {
        match save_design_file(&session.to_design(), path) {
            Ok(()) => tracing::info!("Wrote design to {}", path.display()),
            Err(e) => tracing::error!("Failed to write design {}: {e}", path.display()),
        }
    }

    if args.publish {
        if let Err(e) = session.save_remote(&client).await {
            tracing::error!("Failed to publish design: {e}");
        }
    }
}
