use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The input failed one or more validation rules. Carries the complete
    /// accumulated list; no partial profile exists when this is returned.
    #[error("invalid financial input: {}", .0.join("; "))]
    Validation(Vec<String>),
}

pub type Result<T> = std::result::Result<T, Error>;
