use thiserror::Error;

pub type ContentResult<T> = Result<T, ContentError>;

/// Errors produced while decoding persisted project content.
///
/// Rendering itself is infallible: once a [`crate::ProjectContent`] exists,
/// every missing or malformed field has a defined fallback. The only thing
/// that can fail is turning a stored blob into that structure.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Content blob is empty")]
    EmptyContent,

    #[error("Content decode error: {0}")]
    Json(#[from] serde_json::Error),
}
