//! Batch backfill of `jobs.company_domain` via LLM lookup.
//!
//! Usage: domain-lookup [--limit N] [--dry-run]
//! Requires DATABASE_URL and ANTHROPIC_API_KEY.

use anyhow::Result;
use clap::Parser;
use sqlx::PgPool;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use frac_voice_api::config::Config;
use frac_voice_api::db::create_pool;
use frac_voice_api::domains::{companies_missing_domain, lookup_company, update_company_domain};
use frac_voice_api::llm_client::LlmClient;

#[derive(Debug, Parser)]
#[command(name = "domain-lookup", about = "Lookup company domains using AI")]
struct Cli {
    /// Max companies to process
    #[arg(long, default_value_t = 100)]
    limit: i64,

    /// Don't actually update the database
    #[arg(long)]
    dry_run: bool,
}

enum Outcome {
    Updated,
    Skipped,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let crate_target = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{}={},domain_lookup={}", crate_target, &config.rust_log, &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting company domain lookup (limit: {}, dry run: {})",
        cli.limit, cli.dry_run
    );

    let db = create_pool(&config.database_url).await?;
    let llm = LlmClient::new(config.anthropic_api_key.clone());

    let companies = companies_missing_domain(&db, cli.limit).await?;
    info!("Found {} companies without domains", companies.len());

    let mut updated = 0u32;
    let mut skipped = 0u32;
    let mut errors = 0u32;

    for (i, name) in companies.iter().enumerate() {
        info!("[{}/{}] {}", i + 1, companies.len(), name);

        match process_company(&db, &llm, name, cli.dry_run).await {
            Ok(Outcome::Updated) => updated += 1,
            Ok(Outcome::Skipped) => skipped += 1,
            Err(e) => {
                warn!("Error processing '{name}': {e:#}");
                errors += 1;
            }
        }
    }

    info!("Complete: {updated} updated, {skipped} skipped, {errors} errors");
    Ok(())
}

async fn process_company(
    db: &PgPool,
    llm: &LlmClient,
    name: &str,
    dry_run: bool,
) -> Result<Outcome> {
    let result = lookup_company(llm, name).await?;

    let Some(domain) = result.writable_domain() else {
        info!(
            confidence = result.confidence,
            "No domain found for '{name}'"
        );
        return Ok(Outcome::Skipped);
    };

    info!(
        confidence = result.confidence,
        recruitment_agency = result.is_recruitment_agency,
        "Resolved '{name}' -> {domain}"
    );

    if dry_run {
        info!("[DRY RUN] Would update jobs for '{name}'");
        return Ok(Outcome::Updated);
    }

    let rows = update_company_domain(db, name, &domain).await?;
    info!("Updated {rows} jobs");
    Ok(Outcome::Updated)
}
