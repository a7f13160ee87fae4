/// Failures of the commit message pipeline, one per HTTP error response.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Missing diff data: {0}")]
    MissingDiff(#[from] commitgen_core::InputError),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Request body too large")]
    BodyTooLarge,

    #[error("Upstream generation failed: {0}")]
    Upstream(String),
}
