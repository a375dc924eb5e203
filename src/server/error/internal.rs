use thiserror::Error;

/// Internal issues indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Random identifier or color generation kept colliding with stored values.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to generate a unique value for column '{column}' after {attempts} attempts")]
    IdentifierExhausted {
        /// The column the candidates were checked against
        column: &'static str,
        /// Number of candidates drawn
        attempts: usize,
    },
}
