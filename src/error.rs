use thiserror::Error;

use crate::allocate::AllocationError;
use crate::validate::ValidationError;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("could not compute schedule: {0}")]
    Computation(#[from] AllocationError),

    #[error("request file not found: {0}")]
    RequestNotFound(String),

    #[error("request parse error: {0}")]
    RequestParse(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
