use axum::{
    extract::{rejection::QueryRejection, Query},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::HelloAPIError;

use super::{required_name, NameQueryParams};

#[tracing::instrument(name = "Hello API route handler", skip_all)]
pub async fn hello_api(
    query_params: Result<Query<NameQueryParams>, QueryRejection>,
) -> Result<Json<HelloResponse>, HelloAPIError> {
    let name = required_name(query_params)?;
    Ok(Json(HelloResponse { name }))
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct HelloResponse {
    pub name: String,
}
