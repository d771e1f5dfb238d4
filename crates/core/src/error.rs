use crate::types::DbId;

/// Domain error taxonomy shared by all resource handlers.
///
/// `NotFound` and `Validation` are expected outcomes and map to 404/400
/// at the HTTP boundary; `Internal` is a server fault and maps to 500.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
