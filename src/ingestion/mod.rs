//! City-dataset loading.
//!
//! Most callers should use [`load_city`], which:
//!
//! - resolves the city to its dataset file inside [`LoadOptions::data_dir`]
//! - loads the CSV once into an in-memory `Vec` of [`crate::types::Trip`]s
//! - optionally reports success/failure/alerts to a [`LoadObserver`]
//!
//! Reader-based loading (for in-memory or non-file sources) is available via
//! [`load_trips_from_reader`].

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

pub mod csv;
pub mod observability;

pub use self::csv::{START_TIME_FORMAT, load_city, load_trips_from_path, load_trips_from_reader};
pub use observability::{
    CompositeObserver, FileObserver, LoadContext, LoadObserver, LoadSeverity, LoadStats,
    StdErrObserver,
};

/// Options controlling dataset loading.
///
/// Use [`Default`] for common cases (datasets in the current directory).
#[derive(Clone)]
pub struct LoadOptions {
    /// Directory holding the per-city dataset files.
    pub data_dir: PathBuf,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: LoadSeverity,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("data_dir", &self.data_dir)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            observer: None,
            alert_at_or_above: LoadSeverity::Critical,
        }
    }
}
