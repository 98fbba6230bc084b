//! Voxbot HTTP server entry point.
//!
//! Binary name: `voxbot`
//!
//! Parses CLI arguments, loads config and provider credentials, then starts
//! the HTTP server.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use state::AppState;
use voxbot_infra::config::load_config;
use voxbot_infra::secret::ProviderCredentials;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    voxbot_observe::tracing_setup::init_tracing(cli.otel, cli.log_filter())
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = run(cli).await;
    voxbot_observe::tracing_setup::shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Serve {
            port,
            host,
            config,
            static_dir,
        } => {
            let config = load_config(config.as_deref()).await;
            let credentials = ProviderCredentials::from_env();
            let state = AppState::init(&config, &credentials);

            if !state.completion_configured {
                tracing::warn!("OPENAI_API_KEY not set; replies will use fallback text");
            }
            if !state.speech_configured {
                tracing::warn!("ELEVENLABS_API_KEY not set; chat requests will fail synthesis");
            }

            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            println!(
                "  {} Voxbot listening on {}",
                console::style("⚡").bold(),
                console::style(format!("http://{addr}")).cyan()
            );
            println!("  {}", console::style("Press Ctrl+C to stop").dim());

            let router = http::router::build_router(state, &static_dir);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            println!("\n  Server stopped.");
        }

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(shell, &mut cmd, "voxbot", &mut std::io::stdout());
        }
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {e}");
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
}
