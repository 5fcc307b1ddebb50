use axum::{
    async_trait,
    extract::{FromRequestParts, Path, Query},
    http::request::Parts,
};

use crate::web::error::ApiError;

/// Percent-decoded `:activity_name` path segment.
#[derive(Debug, Clone)]
pub struct ActivityName(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for ActivityName
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(name) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
        Ok(Self(name))
    }
}

/// The `email` query parameter. Form-decoded; when repeated, the last value wins.
#[derive(Debug, Clone)]
pub struct EmailParam(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for EmailParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::InvalidRequest(e.body_text()))?;

        pairs
            .into_iter()
            .rev()
            .find_map(|(key, value)| (key == "email").then_some(value))
            .map(Self)
            .ok_or(ApiError::MissingParameter("email"))
    }
}
