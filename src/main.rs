// src/main.rs
use jobboard_core::application::{
    ports::{ClockPort, SlugGeneratorPort, SuffixSourcePort},
    services::ApplicationServices,
};
use jobboard_core::config::AppConfig;
use jobboard_core::domain::{
    company::{CompanyReadRepository, CompanyWriteRepository},
    job::{JobReadRepository, JobWriteRepository},
    tag::TagRepository,
};
use jobboard_core::infrastructure::{
    database,
    repositories::{
        PostgresCompanyReadRepository, PostgresCompanyWriteRepository, PostgresJobReadRepository,
        PostgresJobWriteRepository, PostgresTagRepository,
    },
    time::SystemClock,
    util::{DefaultSlugGenerator, RandomSuffixSource},
};
use jobboard_core::presentation::http::{routes::build_router, state::HttpState};
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let job_write_repo: Arc<dyn JobWriteRepository> =
        Arc::new(PostgresJobWriteRepository::new(pool.clone()));
    let job_read_repo: Arc<dyn JobReadRepository> =
        Arc::new(PostgresJobReadRepository::new(pool.clone()));
    let company_write_repo: Arc<dyn CompanyWriteRepository> =
        Arc::new(PostgresCompanyWriteRepository::new(pool.clone()));
    let company_read_repo: Arc<dyn CompanyReadRepository> =
        Arc::new(PostgresCompanyReadRepository::new(pool.clone()));
    let tag_repo: Arc<dyn TagRepository> = Arc::new(PostgresTagRepository::new(pool));

    let clock: Arc<ClockPort> = Arc::new(SystemClock);
    let slugger: Arc<SlugGeneratorPort> = Arc::new(DefaultSlugGenerator);
    let suffixes: Arc<SuffixSourcePort> =
        Arc::new(RandomSuffixSource::from_seed(config.suffix_seed()));

    let policy = config.normalization();
    tracing::info!(
        slug_collisions = ?policy.slug_collisions,
        empty_tags = ?policy.empty_tags,
        "normalization policy"
    );

    let services = Arc::new(ApplicationServices::new(
        job_write_repo,
        job_read_repo,
        company_write_repo,
        company_read_repo,
        tag_repo,
        clock,
        slugger,
        suffixes,
        policy,
    ));

    let state = HttpState { services };
    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
