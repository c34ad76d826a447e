/// Message returned whenever a lookup yields no rows.
pub const NO_DATA_FOUND: &str = "No Data Found";

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("{0}")]
    Validation(String),

    #[error("{NO_DATA_FOUND}")]
    NotFound,

    #[error("{0}")]
    Conflict(String),
}
