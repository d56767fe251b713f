use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// Loading the film collection failed. Terminal for the process: there is no retry.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to load movie data: {0}")]
    Request(#[from] wreq::Error),
    #[error("failed to load movie data: {0}")]
    Malformed(String),
}

#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    inner: anyhow::Error,
}

impl AppError {
    pub fn bad_request(err: impl Into<anyhow::Error>) -> Self {
        Self { status: StatusCode::BAD_REQUEST, inner: err.into() }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.inner.fmt(f)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = crate::templates::error_page(self.to_string());
        (self.status, Html(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
