use askama::Template;
use axum::{
    extract::{rejection::QueryRejection, Query},
    response::Html,
};
use color_eyre::eyre::eyre;

use crate::domain::HelloAPIError;

use super::{required_name, NameQueryParams};

#[derive(Template)]
#[template(path = "hello-template.html")]
pub struct HelloMvcTemplate {
    pub name: String,
}

#[tracing::instrument(name = "Hello MVC route handler", skip_all)]
pub async fn hello_mvc(
    query_params: Result<Query<NameQueryParams>, QueryRejection>,
) -> Result<Html<String>, HelloAPIError> {
    let name = required_name(query_params)?;
    tracing::debug!("name: {}", name);

    let page = HelloMvcTemplate { name }
        .render()
        .map_err(|e| HelloAPIError::UnexpectedError(eyre!(e)))?;

    Ok(Html(page))
}
