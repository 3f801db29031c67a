use std::path::PathBuf;

use actix_web::{App, HttpServer, web};
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::fmt;

use toolgate::gateway::http;
use toolgate::{
    Gateway, OutputWriter, RunnerConfig, SandboxRunner, SearchClient, SearchConfig, StorageConfig,
};

#[derive(Parser, Debug)]
#[command(name = "toolgate")]
#[command(about = "HTTP action gateway: sandboxed snippets, confined file output, docs search")]
struct Args {
    /// Listen address
    #[arg(long, default_value = "127.0.0.1")]
    bind: String,

    /// Listen port
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Output root directory (defaults to a fixed temp subfolder)
    #[arg(long)]
    output_root: Option<PathBuf>,

    /// Optional TOML file overriding the sitemap source URLs
    #[arg(long, default_value = "sources.toml")]
    sources: PathBuf,
}

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    fmt()
        .with_max_level(Level::INFO)
        .with_target(true)
        .init();

    let args = Args::parse();

    info!("Starting toolgate daemon...");

    // Assemble configuration: defaults, then env, then CLI flags
    let mut storage_config = StorageConfig::from_env();
    if let Some(root) = args.output_root {
        storage_config.output_root = root;
    }

    let mut search_config = SearchConfig::from_env();
    search_config.apply_sources_file(&args.sources)?;

    let runner_config = RunnerConfig::default();

    info!(
        output_root = %storage_config.output_root.display(),
        manual_sitemap = %search_config.manual.url,
        forum_sitemap = %search_config.forum.url,
        "Configuration loaded"
    );

    // Initialize components
    let runner = SandboxRunner::new(runner_config);
    let writer = OutputWriter::new(storage_config)?;
    info!(root = %writer.root().display(), "Output writer initialized");

    let search = SearchClient::new(search_config);
    info!("Search client initialized");

    let state = web::Data::new(Gateway::new(runner, writer, search));

    info!(bind = %args.bind, port = args.port, "Listening for requests");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(http::configure)
    })
    .bind((args.bind.as_str(), args.port))?
    .run()
    .await?;

    info!("Goodbye!");
    Ok(())
}
