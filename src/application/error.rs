use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Report not found: {0}")]
    ReportNotFound(String),
}
