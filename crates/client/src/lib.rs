//! Client library for the Sumo Logic Search Job API.
//!
//! The API runs a search asynchronously: a job is created, polled until it
//! finishes gathering results, and its result rows are then downloaded in
//! offset/limit batches. This crate covers that whole lifecycle plus the
//! time-expression resolution used for the search range.

mod client;
mod error;

pub mod endpoints;
pub mod models;
pub mod time;

pub use client::{Credentials, SumoClient, SumoClientBuilder};
pub use error::{ClientError, Result};
pub use models::{
    FieldDescriptor, JobHandle, JobStatus, ResultKind, ResultPage, ResultRow, SearchParameters,
};
