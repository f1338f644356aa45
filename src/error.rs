use thiserror::Error;

/// Convenience result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Error type returned across the pipeline.
///
/// This is a single error enum shared by loading, boundary parsing, and aggregation.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Underlying I/O error (e.g. dataset file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reading error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The requested city is not one of the three supported datasets.
    ///
    /// User-correctable: the caller is expected to re-prompt.
    #[error("unknown city '{name}': expected chicago, new york, or washington")]
    UnknownCity { name: String },

    /// The requested month is outside the january..june range covered by the datasets.
    #[error("unknown month '{name}': expected january through june, or all")]
    UnknownMonth { name: String },

    /// The requested weekday is not a day-of-week name.
    #[error("unknown weekday '{name}': expected sunday through saturday, or all")]
    UnknownWeekday { name: String },

    /// The dataset does not conform to the trip schema (missing required columns, etc.).
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A cell could not be parsed into its typed trip field.
    ///
    /// Fatal for the load: no partial/best-effort trip set is ever returned.
    #[error("malformed record at row {row} column '{column}': {message} (raw='{raw}')")]
    MalformedRecord {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },

    /// The filtered trip set is empty, so the requested statistics are undefined.
    ///
    /// Reportable outcome ("no data for this selection"), distinct from a load failure.
    #[error("no trips match the requested filter")]
    EmptyResult,
}
