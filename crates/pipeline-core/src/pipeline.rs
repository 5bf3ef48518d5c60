//! Linear pipeline driver

use crate::error::{PipelineError, Result};
use crate::{Batch, BatchFilter, BatchProvider, BatchRequest, ProviderSpec};
use tracing::{debug, info};

/// A source followed by a chain of filters, most upstream first
pub struct Pipeline {
    source: Box<dyn BatchProvider>,
    filters: Vec<Box<dyn BatchFilter>>,
    built: bool,
}

impl Pipeline {
    pub fn new(source: impl BatchProvider + 'static) -> Self {
        Self {
            source: Box::new(source),
            filters: Vec::with_capacity(4),
            built: false,
        }
    }

    /// Append a filter downstream of everything added so far
    pub fn with_filter(mut self, filter: impl BatchFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self.built = false;
        self
    }

    /// Run setup on every node, upstream to downstream
    pub fn build(&mut self) -> Result<()> {
        info!(
            "Building pipeline: {} source + {} filter(s)",
            self.source.name(),
            self.filters.len()
        );
        self.source.setup()?;

        for i in 0..self.filters.len() {
            let (upstream, rest) = self.filters.split_at_mut(i);
            let upstream_spec = match upstream.last() {
                Some(filter) => filter.spec(),
                None => self.source.spec(),
            };
            let filter = &mut rest[0];
            filter.setup(upstream_spec)?;
            debug!(
                "{} declares {:?}",
                filter.name(),
                filter.spec().volume_types()
            );
        }

        self.built = true;
        Ok(())
    }

    /// Spec of the most downstream node
    pub fn spec(&self) -> &ProviderSpec {
        match self.filters.last() {
            Some(filter) => filter.spec(),
            None => self.source.spec(),
        }
    }

    /// Request one batch from the end of the chain
    pub fn request_batch(&self, request: &BatchRequest) -> Result<Batch> {
        if !self.built {
            return Err(PipelineError::NotBuilt);
        }
        let spec = self.spec();
        if let Some(&missing) = request.volumes.keys().find(|t| !spec.contains(**t)) {
            return Err(PipelineError::UnsupportedVolume(missing));
        }

        self.provide_at(self.filters.len(), request)
    }

    /// Serve `request` from the node `depth` filters above the source
    fn provide_at(&self, depth: usize, request: &BatchRequest) -> Result<Batch> {
        if depth == 0 {
            return self.source.provide(request);
        }

        let filter = &self.filters[depth - 1];
        let mut upstream_request = request.clone();
        let preparation = filter.prepare(&mut upstream_request)?;

        let mut batch = self.provide_at(depth - 1, &upstream_request)?;
        filter.process(&mut batch, request, preparation)?;
        Ok(batch)
    }
}
