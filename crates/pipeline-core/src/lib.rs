//! Voxel Batch Core - request/batch protocol for volumetric training pipelines
//!
//! A pipeline is a source followed by a chain of filters. Specs flow
//! downstream once at build time, requests flow upstream and batches flow
//! back downstream once per invocation.

pub mod batch;
pub mod error;
pub mod pipeline;
pub mod provider;
pub mod request;
pub mod source;
pub mod spec;

pub use batch::Batch;
pub use error::{PipelineError, Result};
pub use pipeline::Pipeline;
pub use provider::{BatchFilter, BatchProvider, Preparation};
pub use request::BatchRequest;
pub use source::ArraySource;
pub use spec::{ProviderSpec, VolumeSpec};
