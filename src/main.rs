use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use wedding_site::utils::error::ErrorSeverity;
use wedding_site::utils::{logger, validation::Validate};
use wedding_site::{AppState, CliArgs, SiteConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // 載入 TOML 配置
    let mut config = match SiteConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    args.apply_overrides(&mut config);

    // 先驗證配置，日誌等級也來自配置
    if let Err(e) = config.validate() {
        eprintln!("❌ Configuration validation failed: {}", e);
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    logger::init_logger(&config.logging, args.verbose);
    tracing::info!("🚀 Starting {}", config.site_title());
    tracing::info!("📁 Configuration loaded from: {}", args.config);
    if let Some(bind) = &args.bind {
        tracing::info!("🔧 server.bind overridden to: {}", bind);
    }
    if let Some(public_dir) = &args.public_dir {
        tracing::info!("🔧 server.public_dir overridden to: {}", public_dir);
    }

    let state = Arc::new(AppState::from_config(&config));
    let settings = state.resolver.settings();
    tracing::info!(
        "🖼️  Gallery: {} ({} slots, prefix {})",
        settings.directory.display(),
        settings.slot_count,
        settings.public_prefix
    );

    if args.check {
        return run_check(&state);
    }

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("✅ Listening on http://{}", listener.local_addr()?);

    wedding_site::serve(listener, state)
        .await
        .context("server terminated with an error")?;

    tracing::info!("👋 Server stopped");
    Ok(())
}

fn run_check(state: &AppState) -> anyhow::Result<()> {
    tracing::info!("🔍 CHECK MODE - resolving gallery without serving");

    match state.resolver.resolve() {
        Ok(listing) => {
            tracing::info!("✅ {} images resolved ({:?})", listing.count(), listing.source);
            for image in &listing.images {
                println!("{}", image);
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ Gallery resolution failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Medium => 2, // site still serves the fallback list
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }
}
