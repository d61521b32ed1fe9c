//! folio application binary - composition root.
//!
//! Ties the folio crates into a terminal chat client:
//! 1. Parse CLI arguments and initialize tracing
//! 2. Load configuration from TOML
//! 3. Wire the Gemini transport and plain-text extractor into a Session
//! 4. Run a line-oriented chat loop over stdin/stdout
//!
//! Plain input lines are submitted to the model; `/upload <path>` grounds
//! the conversation in a document; `/quit` exits. Bot answers render
//! incrementally as the session reveals them.

use std::io::Write as _;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::io::AsyncBufReadExt;

use folio_chat::Session;
use folio_core::config::FolioConfig;
use folio_core::events::SessionEvent;
use folio_core::types::{MessageKind, Role};
use folio_extract::{ExtractConfig, PlainTextExtractor};
use folio_llm::GeminiClient;

mod cli;
use cli::CliArgs;

/// Render session events to stdout as they arrive.
///
/// Reveal updates print only the newly revealed suffix, producing the
/// typewriter effect; appended bot messages (the transport-error path)
/// print whole.
async fn render_events(mut events: tokio::sync::broadcast::Receiver<SessionEvent>) {
    let mut shown = 0usize;
    while let Ok(event) = events.recv().await {
        match event {
            SessionEvent::MessageAppended {
                role: Role::Bot,
                content,
                ..
            } => {
                println!("folio> {}", content);
            }
            SessionEvent::MessageAppended {
                kind: MessageKind::DocumentNotice,
                content,
                ..
            } => {
                println!("[{}]", content);
            }
            SessionEvent::MessageRevealed { content, done, .. } => {
                if shown == 0 {
                    print!("folio> ");
                }
                let suffix: String = content.chars().skip(shown).collect();
                print!("{}", suffix);
                let _ = std::io::stdout().flush();
                shown = content.chars().count();
                if done {
                    println!();
                    shown = 0;
                }
            }
            _ => {}
        }
    }
}

fn print_prompt() {
    print!("you> ");
    let _ = std::io::stdout().flush();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Tracing. The config file may override the level only via --log-level
    // or RUST_LOG; the subscriber is installed before the config loads so
    // load failures are visible.
    let filter = args.resolve_log_level("info");
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(&filter)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting folio v{}", env!("CARGO_PKG_VERSION"));

    // Config.
    let config_file = args.resolve_config_path();
    let mut config = FolioConfig::load_or_default(&config_file);
    if let Some(model) = args.model {
        config.llm.model = model;
    }

    // API key comes from the environment, never the config file.
    let api_key = match std::env::var(&config.llm.api_key_env) {
        Ok(key) if !key.is_empty() => key,
        _ => {
            tracing::error!(
                "No API key found. Set the {} environment variable.",
                config.llm.api_key_env
            );
            return Err("missing API key".into());
        }
    };

    // Session wiring.
    let client = Arc::new(GeminiClient::from_config(&config.llm, api_key));
    let extractor = Arc::new(PlainTextExtractor::new(ExtractConfig {
        max_document_bytes: config.upload.max_document_bytes,
    }));
    let mut session = Session::new(&config.chat, client, extractor);

    let renderer = tokio::spawn(render_events(session.subscribe()));

    println!("folio — chat with {} (/upload <path>, /quit)", config.llm.model);
    print_prompt();

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim().to_string();
        if line.is_empty() {
            print_prompt();
            continue;
        }
        if line == "/quit" || line == "/exit" {
            break;
        }

        if let Some(path) = line.strip_prefix("/upload ") {
            let path = path.trim();
            match tokio::fs::read(path).await {
                Ok(bytes) => {
                    let filename = Path::new(path)
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.to_string());
                    if let Err(e) = session.upload_document(&bytes, &filename).await {
                        eprintln!("upload failed: {}", e);
                    }
                }
                Err(e) => eprintln!("cannot read {}: {}", path, e),
            }
        } else if let Err(e) = session.submit(&line).await {
            eprintln!("{}", e);
        }

        // Give the renderer a beat to drain before re-prompting.
        tokio::time::sleep(Duration::from_millis(10)).await;
        print_prompt();
    }

    renderer.abort();
    Ok(())
}
