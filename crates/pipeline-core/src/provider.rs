//! Provider and filter traits

use crate::error::Result;
use crate::{Batch, BatchRequest, ProviderSpec};

/// Outcome of request negotiation, handed from `prepare` to `process`
///
/// Consumed by value, so a skip decision applies to exactly one `process`
/// call and never carries over to the next invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Preparation {
    /// The filter contributes to this invocation
    Run,

    /// Nothing the filter produces was requested; `process` is a no-op
    Skip,
}

impl Preparation {
    pub fn is_skip(&self) -> bool {
        matches!(self, Preparation::Skip)
    }
}

/// Source of batches at the upstream end of a pipeline
pub trait BatchProvider: Send + Sync {
    /// Provider identifier used in logs and errors
    fn name(&self) -> &str;

    /// Called once when the pipeline is built
    fn setup(&mut self) -> Result<()> {
        Ok(())
    }

    /// Volumes this provider can supply
    fn spec(&self) -> &ProviderSpec;

    /// Materialize every volume in `request`
    fn provide(&self, request: &BatchRequest) -> Result<Batch>;
}

/// A pipeline node that rewrites requests on the way up and batches on the
/// way down
pub trait BatchFilter: Send + Sync {
    /// Filter identifier used in logs and errors
    fn name(&self) -> &str;

    /// Derive this filter's spec from its upstream spec. Called once.
    fn setup(&mut self, upstream_spec: &ProviderSpec) -> Result<()>;

    /// Volumes this filter can supply to its downstream
    fn spec(&self) -> &ProviderSpec;

    /// Rewrite `request` before it is forwarded upstream
    fn prepare(&self, request: &mut BatchRequest) -> Result<Preparation>;

    /// Transform `batch` after upstream filled it. `request` is the request
    /// as this filter received it, before `prepare` rewrote it.
    fn process(
        &self,
        batch: &mut Batch,
        request: &BatchRequest,
        preparation: Preparation,
    ) -> Result<()>;
}
