use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModeError {
    /// The `mode` query parameter is not one of `hour`, `day`, `week`, or `month`.
    ///
    /// Results in a 400 Bad Request with the message `invalid mode`.
    #[error("invalid mode '{0}'; supported: 'hour', 'day', 'week', 'month'")]
    Invalid(String),
}
