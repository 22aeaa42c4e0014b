//! A tiny demo compositor: virtual outputs, headless demo windows, frames
//! rendered to nowhere. Useful for exercising the core and as a template for
//! real backends.

mod config;

use std::path::PathBuf;

use clap::Parser;
use oriel_core::display_servers::{HeadlessDisplayServer, HeadlessHandle};
use oriel_core::{EventKind, HubEvent, Manager};
use tracing_subscriber::EnvFilter;

use config::FileConfig;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// Path to a TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Exit after this many rendered frames.
    #[arg(long)]
    frames: Option<u64>,

    /// More -v, more logging.
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();

    let default_level = match opts.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = FileConfig::load(opts.config.as_deref())?;
    let mut manager: Manager<HeadlessHandle, FileConfig, HeadlessDisplayServer> =
        Manager::new(config)?;

    manager.hub.subscribe(None, |state, event| match event {
        HubEvent::OutputCreated(handle) => {
            if let Some(output) = state.output(*handle) {
                tracing::info!(
                    "output {:?}: {}x{} @ {} mHz",
                    handle,
                    output.rect.width,
                    output.rect.height,
                    output.refresh_mhz
                );
            }
        }
        HubEvent::WindowCreated(id) | HubEvent::WindowClosed(id) => {
            tracing::info!("{:?} for window {}", event.kind(), id);
        }
        HubEvent::WorkspaceSwitched(output, workspace) => {
            tracing::info!("output {:?} now shows workspace {}", output, workspace);
        }
        _ => {}
    });

    if let Some(frames) = opts.frames {
        let mut rendered = 0;
        manager
            .hub
            .subscribe(Some(EventKind::OutputFrame), move |state, _| {
                rendered += 1;
                if rendered >= frames {
                    tracing::info!("rendered {} frames, stopping", rendered);
                    state.stop();
                }
            });
    }

    // A couple of headless windows so there is something to composite.
    if let Some(workspace) = manager.state.workspaces.first().map(|ws| ws.id) {
        for (index, title) in ["clock", "pager"].iter().enumerate() {
            if let Some(id) =
                manager
                    .state
                    .create_window(workspace, Some((*title).to_owned()), None)
            {
                manager.state.move_window(id, 40 + 360 * index as i32, 40);
                manager.state.resize_window(id, 320, 240);
            }
        }
    }

    tokio::select! {
        () = manager.event_loop() => {}
        _ = tokio::signal::ctrl_c() => tracing::info!("interrupted"),
    }
    Ok(())
}
