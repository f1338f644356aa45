//! Request/response entry point for one analysis run.
//!
//! The interactive surface that collects city/month/day selections lives
//! outside this crate; it drives the pipeline through [`analyze`] (or the
//! owned [`AnalysisRequest`]) and decides what to do with the result or error.

use crate::error::PipelineResult;
use crate::ingestion::{LoadOptions, load_city};
use crate::processing::{derive, filter, stats};
use crate::types::{DerivedTrip, FilterSpec};

/// The outcome of one pipeline run: the filtered working set plus its report.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Filtered, derived trips in original relative order, for raw inspection
    /// via [`crate::processing::page()`].
    pub trips: Vec<DerivedTrip>,
    /// The four statistic groups over those trips.
    pub report: stats::Report,
}

/// Run the full pipeline for one [`FilterSpec`]: load, derive, filter, aggregate.
///
/// Each invocation is independent and side-effect-free apart from reading the
/// city dataset: the working set is recomputed fresh per spec, with no caching
/// across requests. Pipeline errors propagate unmodified -
/// [`crate::PipelineError::MalformedRecord`] means the load is unusable,
/// [`crate::PipelineError::EmptyResult`] means no trips match this selection -
/// and the caller decides whether to report and retry with a new spec.
pub fn analyze(spec: &FilterSpec, options: &LoadOptions) -> PipelineResult<Analysis> {
    let trips = load_city(spec.city, options)?;
    let derived = derive(trips);
    let kept = filter(&derived, spec);
    let report = stats::report(&kept)?;

    Ok(Analysis {
        trips: kept,
        report,
    })
}

/// Convenience helper for callers that want an owned request object.
///
/// This can be useful if you want to enqueue analysis work in a job system.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// The selection to analyze.
    pub spec: FilterSpec,
    /// Options controlling dataset loading.
    pub options: LoadOptions,
}

impl AnalysisRequest {
    /// Execute the request by calling [`analyze`].
    pub fn run(&self) -> PipelineResult<Analysis> {
        analyze(&self.spec, &self.options)
    }
}
