pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("expected diagram text to start with the `pie` keyword")]
    MissingPieKeyword,

    #[error("unexpected pie header token: {token}")]
    UnexpectedHeaderToken { token: String },

    #[error(
        "\"{label}\" has invalid value: {value}. Negative values are not allowed in pie charts. All slice values must be >= 0."
    )]
    NegativeSectionValue { label: String, value: f64 },

    #[error("unexpected pie statement: {statement}")]
    UnexpectedStatement { statement: String },

    #[error("Invalid directive JSON: {message}")]
    InvalidDirectiveJson { message: String },
}
