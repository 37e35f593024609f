//! Search job endpoints.
//!
//! This module provides the HTTP operations of the search-job lifecycle:
//! creating a job, polling its status, and fetching result pages.
//!
//! # What this module does NOT handle:
//! - Pagination across pages (see `SumoClient::download_all`)
//! - Credential storage (see [`crate::client::Credentials`])

use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::{debug, info};

use crate::client::Credentials;
use crate::endpoints::send_expecting;
use crate::error::{ClientError, Result};
use crate::models::{
    CreateJobResponse, JobHandle, JobStatus, MessagesEnvelope, RecordsEnvelope, ResultKind,
    ResultPage, SearchParameters,
};

/// Create a new search job. The API signals acceptance with 202.
pub async fn create_job(
    http: &Client,
    base_url: &str,
    credentials: &Credentials,
    params: &SearchParameters,
) -> Result<JobHandle> {
    debug!("creating search job");

    let url = format!("{base_url}/v1/search/jobs");
    let builder = credentials.apply(http.post(&url)).json(params);

    let response = send_expecting(builder, StatusCode::ACCEPTED, |f| f.into_submission()).await?;
    let body: CreateJobResponse = response.json().await?;

    info!(id = %body.id, "search job created");
    Ok(JobHandle::new(body.id))
}

/// Get the current status of a search job.
pub async fn get_job_status(
    http: &Client,
    base_url: &str,
    credentials: &Credentials,
    id: &JobHandle,
) -> Result<JobStatus> {
    debug!(id = %id, "checking search job status");

    let url = format!("{base_url}/v1/search/jobs/{id}");
    let builder = credentials.apply(http.get(&url));

    let response = send_expecting(builder, StatusCode::OK, |f| f.into_submission()).await?;
    Ok(response.json().await?)
}

/// Poll a search job until it has gathered all results.
///
/// Polls on a fixed interval; `max_wait` is a wall-clock deadline over the
/// whole loop. A job that reaches a terminal error state fails immediately,
/// as does any non-200 status response.
pub async fn wait_for_job(
    http: &Client,
    base_url: &str,
    credentials: &Credentials,
    id: &JobHandle,
    poll_interval: Duration,
    max_wait: Duration,
) -> Result<JobStatus> {
    let start = std::time::Instant::now();

    loop {
        let status = get_job_status(http, base_url, credentials, id).await?;
        info!(id = %id, state = %status.state, "search job status");

        if status.is_done() {
            info!(
                records = status.record_count,
                messages = status.message_count,
                "search job complete"
            );
            return Ok(status);
        }

        if status.is_cancelled() {
            return Err(ClientError::JobFailed {
                id: id.to_string(),
                state: status.state,
            });
        }

        if start.elapsed() > max_wait {
            return Err(ClientError::Timeout {
                id: id.to_string(),
                timeout: max_wait,
            });
        }

        tokio::time::sleep(poll_interval).await;
    }
}

/// Fetch one page of results for the given kind.
pub async fn get_page(
    http: &Client,
    base_url: &str,
    credentials: &Credentials,
    id: &JobHandle,
    kind: ResultKind,
    offset: usize,
    limit: usize,
) -> Result<ResultPage> {
    debug!(id = %id, %kind, offset, limit, "fetching result page");

    let url = format!("{base_url}/v1/search/jobs/{id}/{}", kind.path_segment());
    let builder = credentials
        .apply(http.get(&url))
        .query(&[("offset", offset), ("limit", limit)]);

    let response = send_expecting(builder, StatusCode::OK, |f| f.into_pagination()).await?;

    match kind {
        ResultKind::Records => {
            let envelope: RecordsEnvelope = response.json().await?;
            Ok(ResultPage {
                fields: envelope.fields,
                rows: envelope.records,
            })
        }
        ResultKind::Messages => {
            let envelope: MessagesEnvelope = response.json().await?;
            Ok(ResultPage {
                fields: envelope.fields,
                rows: envelope.messages,
            })
        }
    }
}
