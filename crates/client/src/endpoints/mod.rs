//! REST API endpoint implementations.

mod request;
mod search;

pub use search::{create_job, get_job_status, get_page, wait_for_job};

pub(crate) use request::send_expecting;
