use axum::extract::{rejection::QueryRejection, Query};

use crate::domain::HelloAPIError;

use super::{required_name, NameQueryParams};

#[tracing::instrument(name = "Hello string route handler", skip_all)]
pub async fn hello_string(
    query_params: Result<Query<NameQueryParams>, QueryRejection>,
) -> Result<String, HelloAPIError> {
    let name = required_name(query_params)?;
    Ok(format!("hello {name}"))
}
