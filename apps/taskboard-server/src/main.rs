//! Taskboard HTTP server.
//!
//! Reads `DATABASE_URL` and the `TASKBOARD_*` overrides (from the process
//! environment or a `.env` file), makes sure the `boards` / `tasks` tables
//! exist, then serves the REST API until SIGINT or SIGTERM.
//!
//! ```bash
//! # Development: 127.0.0.1:5000, debug logs, SQL logging, error details
//! DATABASE_URL=postgres://localhost/taskboard taskboard-server --dev
//!
//! # Production: 0.0.0.0:5000, JSON logs
//! DATABASE_URL=postgres://db/taskboard TASKBOARD_LOG_LEVEL=warn taskboard-server
//! ```

use anyhow::{Context, Result};
use boards_service::{BoardsServiceModule, Config, ErrorDetail};
use clap::Parser;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

/// Run the backend server.
#[derive(Debug, Parser)]
#[command(name = "taskboard-server", version)]
struct Cli {
    /// Development mode: loopback bind, debug logs, error details (no auto-reload, run under `cargo watch` for that)
    #[arg(long)]
    dev: bool,

    /// Listen address, overrides TASKBOARD_BIND_ADDR
    #[arg(long, value_name = "ADDR")]
    bind: Option<SocketAddr>,
}

impl Cli {
    /// Defaults the environment is layered over
    fn config_defaults(&self) -> Config {
        let base = Config::default();
        if !self.dev {
            return base;
        }
        Config {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            log_level: "debug".to_string(),
            sql_logging: true,
            ..base
        }
    }

    fn error_detail(&self) -> ErrorDetail {
        if self.dev {
            ErrorDetail::Exposed
        } else {
            ErrorDetail::Hidden
        }
    }

    fn load_config(&self) -> Result<Config> {
        let figment = Config::figment_with_defaults(self.config_defaults());
        let mut config = Config::from_figment(&figment).context("loading configuration")?;
        if let Some(bind) = self.bind {
            config.bind_addr = bind;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let dotenv = Config::load_dotenv()?;
    let config = cli.load_config()?;

    init_tracing(&config, cli.dev);
    if let Some(path) = dotenv {
        info!(path = %path.display(), "loaded environment file");
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        mode = if cli.dev { "development" } else { "production" },
        bind = %config.bind_addr,
        "taskboard server starting"
    );

    let module = BoardsServiceModule::init(&config).await?;
    let app = module.router(cli.error_detail());

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;
    info!(addr = %config.bind_addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    info!("taskboard server stopped");
    Ok(())
}

/// Filter for `level`, falling back to `info` with the parse error
fn log_filter(level: &str) -> (EnvFilter, Option<String>) {
    match EnvFilter::try_new(level) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new("info"), Some(e.to_string())),
    }
}

fn init_tracing(config: &Config, dev: bool) {
    let (filter, rejected) = log_filter(&config.log_level);

    if dev {
        fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .init();
    } else {
        fmt().with_env_filter(filter).json().init();
    }

    if let Some(error) = rejected {
        warn!(log_level = %config.log_level, %error, "invalid log level, using info");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "cannot listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
