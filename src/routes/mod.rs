use axum::extract::{rejection::QueryRejection, Query};
use serde::Deserialize;

use crate::domain::HelloAPIError;

mod hello;
mod hello_api;
mod hello_mvc;
mod hello_string;
pub mod members;

pub use hello::*;
pub use hello_api::*;
pub use hello_mvc::*;
pub use hello_string::*;

/// Query string shared by the hello endpoints. `name` is mandatory; it is
/// optional here so that its absence maps onto `HelloAPIError`.
#[derive(Deserialize)]
pub struct NameQueryParams {
    name: Option<String>,
}

/// Extracts the mandatory `name`, turning every query failure into a
/// `HelloAPIError` so that all 400 responses share the JSON error body.
fn required_name(
    query: Result<Query<NameQueryParams>, QueryRejection>,
) -> Result<String, HelloAPIError> {
    let Query(params) =
        query.map_err(|e| HelloAPIError::InvalidQuery(e.body_text()))?;
    params.name.ok_or(HelloAPIError::MissingParameter("name"))
}
