//! CLI entrypoint for smartlead-mcp
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use smartlead_application::{
    GatewayContext, InvokeToolUseCase, LogSink, RetryExecutor, RetryPolicy, ToolSchemaPort,
};
use smartlead_domain::{LoggingMode, ToolCatalog, default_catalog};
use smartlead_infrastructure::{
    ConfigLoader, GatewayConfig, JsonSchemaToolConverter, SmartleadClient, TracingLogSink,
};
use smartlead_presentation::{Cli, McpServer, Outbound, ProtocolLogSink, TransportKind};
use std::fs::OpenOptions;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.show_config {
        eprintln!("{}", ConfigLoader::describe_sources(cli.config.as_deref()));
        return ExitCode::SUCCESS;
    }

    let config = match ConfigLoader::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("smartlead-mcp: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Held until exit so buffered log lines are flushed
    let _log_guard = match init_tracing(cli.verbose, config.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("smartlead-mcp: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("smartlead-mcp: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Base filter for `-v` count. `RUST_LOG` takes precedence when set.
fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    }
}

/// Install the side-channel subscriber: stderr, or the configured log file.
///
/// stdout is never written to; it carries protocol frames on stdio.
fn init_tracing(verbose: u8, log_file: Option<&Path>) -> Result<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let (writer, guard) = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_appender::non_blocking(file)
        }
        None => tracing_appender::non_blocking(std::io::stderr()),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(log_file.is_none())
        .with_writer(writer)
        .init();

    Ok(guard)
}

async fn run(cli: Cli, config: GatewayConfig) -> Result<()> {
    info!(
        api_url = %config.api_url,
        transport = ?cli.transport,
        "Starting smartlead-mcp"
    );

    // === Dependency Injection ===
    let client = Arc::new(
        SmartleadClient::new(&config.api_url, &config.api_key, config.timeout)
            .context("Failed to build HTTP client")?,
    );
    let catalog = Arc::new(default_catalog());
    let schema: Arc<dyn ToolSchemaPort> = Arc::new(JsonSchemaToolConverter);
    let mode = cli.transport.logging_mode();

    match cli.transport {
        TransportKind::Stdio => {
            let (outbound, rx) = Outbound::channel();
            let server = build_server(mode, outbound, client, catalog, schema, config.retry);
            server
                .serve(tokio::io::stdin(), tokio::io::stdout(), rx)
                .await?;
        }
        TransportKind::Tcp => {
            let listener = TcpListener::bind(&cli.listen)
                .await
                .with_context(|| format!("Failed to listen on {}", cli.listen))?;
            info!("Listening on {}", listener.local_addr()?);

            let (stream, peer) = listener
                .accept()
                .await
                .context("Failed to accept connection")?;
            info!(%peer, "Client connected");

            let (reader, writer) = stream.into_split();
            let (outbound, rx) = Outbound::channel();
            let server = build_server(mode, outbound, client, catalog, schema, config.retry);
            server.serve(reader, writer, rx).await?;
        }
    }

    Ok(())
}

/// Wire one connection's server. The log sink is picked once from `mode`.
fn build_server(
    mode: LoggingMode,
    outbound: Outbound,
    client: Arc<SmartleadClient>,
    catalog: Arc<ToolCatalog>,
    schema: Arc<dyn ToolSchemaPort>,
    retry: RetryPolicy,
) -> McpServer<SmartleadClient> {
    let protocol_log = match mode {
        LoggingMode::SideChannel => None,
        LoggingMode::ProtocolNative => Some(Arc::new(ProtocolLogSink::new(outbound.clone()))),
    };
    let sink: Arc<dyn LogSink> = match &protocol_log {
        Some(sink) => sink.clone() as Arc<dyn LogSink>,
        None => Arc::new(TracingLogSink),
    };

    let context = Arc::new(GatewayContext::new(sink));
    let executor = RetryExecutor::new(retry, context.clone());
    let use_case = Arc::new(InvokeToolUseCase::new(catalog, client, executor, context));

    let server = McpServer::new(use_case, schema, outbound);
    match protocol_log {
        Some(sink) => server.with_protocol_log(sink),
        None => server,
    }
}
