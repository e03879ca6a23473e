use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use proctor_dashboard::{create_router, ApiClient, AppContext, AppState, Command, Config};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "proctor-dashboard", version, about = "Live exam-proctoring dashboard")]
struct Cli {
    /// Config file (extension optional)
    #[arg(short, long, default_value = "config/proctor-dashboard")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Watch a detection backend; type start, stop, save, status or quit
    Monitor {
        /// Backend URL, overrides service.base_url
        #[arg(long)]
        url: Option<String>,

        /// Start a session right away
        #[arg(long)]
        autostart: bool,
    },
    /// Serve scripted detection results on the backend's HTTP contract
    Serve {
        /// JSON array of detection snapshots to cycle through
        #[arg(long)]
        snapshots: Option<PathBuf>,

        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout belongs to the dashboard
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let mut cfg = Config::load(&cli.config)?;

    info!("{} v{}", cfg.service.name, env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Monitor { url, autostart } => {
            if let Some(url) = url {
                cfg.service.base_url = url;
            }
            monitor(&cfg, autostart).await
        }
        Commands::Serve { snapshots, port } => {
            if let Some(port) = port {
                cfg.server.port = port;
            }
            serve(&cfg, snapshots).await
        }
    }
}

async fn monitor(cfg: &Config, autostart: bool) -> Result<()> {
    let api = Arc::new(ApiClient::from_config(cfg)?);
    let app = AppContext::bootstrap(cfg, api).await;

    if autostart {
        app.start_detection().await;
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut refresh = tokio::time::interval(Duration::from_secs(1));
    let mut last_frame = String::new();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read stdin")? else {
                    break;
                };
                match line.parse::<Command>() {
                    Ok(command) => {
                        if !app.dispatch(command).await {
                            break;
                        }
                    }
                    Err(e) => warn!("{}", e),
                }
            }
            _ = refresh.tick() => {
                let frame = app.render().await;
                if frame != last_frame {
                    println!("{}", frame);
                    last_frame = frame;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted");
                break;
            }
        }
    }

    app.shutdown().await;
    Ok(())
}

async fn serve(cfg: &Config, snapshots: Option<PathBuf>) -> Result<()> {
    let state = match snapshots {
        Some(path) => AppState::from_file(path)?,
        None => AppState::default(),
    };
    info!("Serving {} scripted snapshot(s)", state.snapshots.len());

    let app = create_router(state);
    let addr = format!("{}:{}", cfg.server.bind, cfg.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Replay backend listening on http://{}", addr);

    axum::serve(listener, app).await.context("HTTP server error")?;
    Ok(())
}
