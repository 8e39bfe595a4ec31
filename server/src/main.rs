use clap::Parser;
use tokio::net::TcpListener;

use paste_server::config::{generate_config_template, Cli, Config};
use paste_server::paste::ids::IdGenerator;
use paste_server::paste::store::BlobStore;
use paste_server::{routes, state};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Handle --generate-config: print template and exit
    if cli.generate_config {
        print!("{}", generate_config_template());
        return Ok(());
    }

    // Initialize tracing/logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("paste_server=info,tower_http=info"));
    if cli.json_logs {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().pretty().with_env_filter(filter).init();
    }

    tracing::info!("paste server v{} starting", env!("CARGO_PKG_VERSION"));

    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load config: {}", e);
            return Err(e.into());
        }
    };

    let store = BlobStore::new(&config.storage.tmp_path);
    let ids = IdGenerator::new(config.random.string_length);
    tracing::info!(
        "Storing pastes under {} with {}-character identifiers",
        store.root().display(),
        ids.length()
    );

    let app_state = state::AppState::new(store, ids);
    let app = routes::build_router(app_state, &config);

    // Bind and serve
    let addr = config.listen_addr()?;
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
