use thiserror::Error;

/// Top-level error surface of the controller. Every variant is a
/// recoverable outcome reported to the caller; none crash the process.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Planning(#[from] planning::PlanningError),

    #[error("invalid meal: {0}")]
    Validation(#[from] catalog::CatalogError),

    #[error(transparent)]
    Share(#[from] share::ShareError),

    #[error("failed to serialize menu for export: {0}")]
    Export(#[from] serde_json::Error),
}
