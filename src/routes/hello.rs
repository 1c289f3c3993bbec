use askama::Template;
use axum::response::Html;
use color_eyre::eyre::eyre;

use crate::domain::HelloAPIError;

#[derive(Template)]
#[template(path = "hello.html")]
pub struct HelloTemplate<'a> {
    pub data: &'a str,
}

#[tracing::instrument(name = "Hello route handler", skip_all)]
pub async fn hello() -> Result<Html<String>, HelloAPIError> {
    let page = HelloTemplate { data: "hello!!" }
        .render()
        .map_err(|e| HelloAPIError::UnexpectedError(eyre!(e)))?;

    Ok(Html(page))
}
