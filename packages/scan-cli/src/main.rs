// read-more-search: scan published posts for the read-more block.
//
// Prints one post ID per line for every published post in the date
// range whose content embeds the block's opening signature.

use anyhow::{Context, Result};
use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

use server_core::common::{DateRange, DateRangeError};
use server_core::domains::scanner::{MarkerScan, BLOCK_SIGNATURE};
use server_core::kernel::PgCorpus;

/// Search published posts that include the read-more-link block in
/// their content, within a specified date range.
#[derive(Debug, Parser)]
#[command(name = "read-more-search", version)]
struct Args {
    /// Date before (inclusive), in YYYY-MM-DD format. Defaults to today.
    #[arg(long)]
    date_before: Option<String>,

    /// Date after (inclusive), in YYYY-MM-DD format. Defaults to 30 days ago.
    #[arg(long)]
    date_after: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Validate dates before any database access.
    let range = DateRange::parse(args.date_after.as_deref(), args.date_before.as_deref())
        .map_err(|e| match e {
            DateRangeError::Unparseable(_) => {
                anyhow::anyhow!("Invalid date format. Use YYYY-MM-DD.")
            }
            inverted => anyhow::Error::from(inverted),
        })?;

    let _ = dotenvy::dotenv();
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    println!(
        "Searching posts from {} to {} containing the block...",
        range.after, range.before
    );

    let mut scan = MarkerScan::new(Arc::new(PgCorpus::new(pool)), range, BLOCK_SIGNATURE);

    let mut found_any = false;
    while let Some(id) = scan.next_id().await? {
        found_any = true;
        println!("{}", id);
    }

    if !found_any {
        println!("No posts found containing the read-more-link-block in the specified date range.");
    }

    Ok(())
}
