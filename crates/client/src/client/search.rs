//! Search-job lifecycle methods for [`SumoClient`].
//!
//! # What this module handles:
//! - Submitting a search job
//! - Waiting for completion with a wall-clock deadline
//! - Downloading the full result set in offset/limit batches
//! - Resolving the result schema (field order)
//!
//! # What this module does NOT handle:
//! - Low-level HTTP calls (in [`crate::endpoints`])
//! - Rendering (exporters live in the CLI crate)
//!
//! # Invariants
//! - The pagination offset advances by the number of rows actually
//!   returned, never by the requested batch size.
//! - A batch shorter than requested ends pagination even when the
//!   declared total has not been reached; the total reported at
//!   completion can be optimistic.

use std::time::Duration;

use tracing::info;

use crate::client::SumoClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{
    FieldDescriptor, JobHandle, JobStatus, ResultKind, ResultRow, SearchParameters,
};

/// Fixed delay between status polls.
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

impl SumoClient {
    /// Submit a search job and obtain its handle.
    pub async fn submit(&self, params: &SearchParameters) -> Result<JobHandle> {
        endpoints::create_job(&self.http, &self.base_url, &self.credentials, params).await
    }

    /// Poll the job every [`POLL_INTERVAL`] until it finishes gathering
    /// results, giving up after `max_wait`.
    ///
    /// The returned status carries the final record and message counts;
    /// they are the authoritative totals for pagination and are not
    /// re-queried afterward.
    pub async fn wait_for_completion(&self, id: &JobHandle, max_wait: Duration) -> Result<JobStatus> {
        self.wait_for_completion_with_interval(id, POLL_INTERVAL, max_wait)
            .await
    }

    /// [`Self::wait_for_completion`] with an explicit poll interval.
    pub async fn wait_for_completion_with_interval(
        &self,
        id: &JobHandle,
        poll_interval: Duration,
        max_wait: Duration,
    ) -> Result<JobStatus> {
        endpoints::wait_for_job(
            &self.http,
            &self.base_url,
            &self.credentials,
            id,
            poll_interval,
            max_wait,
        )
        .await
    }

    /// Download the full result set of the given kind, in order.
    ///
    /// Batches are fetched strictly one after another; the next offset
    /// depends on how many rows the previous batch actually returned.
    pub async fn download_all(
        &self,
        id: &JobHandle,
        kind: ResultKind,
        total_count: usize,
        batch_size: usize,
    ) -> Result<Vec<ResultRow>> {
        let mut rows: Vec<ResultRow> = Vec::new();
        let mut offset = 0;

        while rows.len() < total_count {
            info!(
                id = %id,
                %kind,
                offset,
                limit = batch_size,
                total = total_count,
                "downloading results"
            );

            let page = endpoints::get_page(
                &self.http,
                &self.base_url,
                &self.credentials,
                id,
                kind,
                offset,
                batch_size,
            )
            .await?;

            let received = page.rows.len();
            rows.extend(page.rows);
            offset += received;

            info!(received, downloaded = rows.len(), "batch complete");

            if received < batch_size {
                break;
            }
        }

        Ok(rows)
    }

    /// Fetch the result schema with a one-row sample query.
    ///
    /// The row data of this call is discarded; only the field list from
    /// the envelope is kept. Field order defines column order.
    pub async fn resolve_fields(
        &self,
        id: &JobHandle,
        kind: ResultKind,
    ) -> Result<Vec<FieldDescriptor>> {
        info!(id = %id, %kind, "resolving result fields");

        let page = endpoints::get_page(
            &self.http,
            &self.base_url,
            &self.credentials,
            id,
            kind,
            0,
            1,
        )
        .await?;

        Ok(page.fields)
    }
}
