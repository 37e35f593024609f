//! The sequential search pipeline.
//!
//! Responsibilities:
//! - Wire the run's stages together: resolve the time range, submit the
//!   job, poll to completion, paginate the full result set, resolve the
//!   field order, and export.
//!
//! Does NOT handle:
//! - Process exit (errors propagate to `main`, which exits once).
//! - HTTP details (see the client crate).
//!
//! Invariants:
//! - Stages run strictly in order; each consumes the previous stage's
//!   typed output.
//! - Exactly one download path (records or messages) executes per run,
//!   fixed by configuration at startup.

use std::time::Duration;

use anyhow::{Context, Result};
use sumo_client::{Credentials, ResultKind, SearchParameters, SumoClient, time};
use sumo_config::{Config, OutputType, SearchKind};
use tracing::info;

use crate::exporters;

/// Run one search end to end.
pub async fn run(config: Config) -> Result<()> {
    let from = time::resolve(&config.search.from)?;
    let to = time::resolve(&config.search.to)?;

    let params = SearchParameters {
        query: config.search.query.clone(),
        from,
        to,
        time_zone: config.search.time_zone.clone(),
        by_receipt_time: config.search.by_receipt_time,
        auto_parsing_mode: config.search.auto_parsing_mode,
    };

    let kind = match config.search.kind {
        SearchKind::Records => ResultKind::Records,
        SearchKind::Messages => ResultKind::Messages,
    };

    let client = SumoClient::builder()
        .base_url(&config.environment.api_base_url)
        .credentials(Credentials::new(
            &config.environment.api_access_id,
            config.environment.api_access_key.clone(),
        ))
        .build()?;

    info!(base_url = client.base_url(), %kind, "starting search run");

    let handle = client.submit(&params).await?;
    let status = client
        .wait_for_completion(&handle, Duration::from_secs(config.processing.timeout))
        .await?;

    let total = status.total_for(kind);
    let rows = client
        .download_all(&handle, kind, total, config.processing.batch)
        .await?;
    let fields = client.resolve_fields(&handle, kind).await?;

    match config.processing.output_type {
        OutputType::Screen => {
            let table = exporters::screen::render(
                &fields,
                &rows,
                config.processing.screen_max_cell_width,
            );
            print!("{table}");
        }
        OutputType::Csv => {
            // Presence was validated with the configuration.
            let dest = config
                .processing
                .output_destination
                .as_deref()
                .context("output_destination is missing")?;
            exporters::csv::write(dest, &fields, &rows)?;
            info!(rows = rows.len(), destination = %dest.display(), "CSV written");
        }
    }

    Ok(())
}
