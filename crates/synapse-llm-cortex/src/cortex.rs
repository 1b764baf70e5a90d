//! The Cortex integration type and its hierarchy registration.

use synapse_core::lineage::{Lineage, TypeDescriptor};
use synapse_core::llm::{BaseLlm, Llm};
use tracing::debug;

/// Language-model integration backed by the Cortex model family.
///
/// Carries identity and hierarchy position only; the provider client is
/// attached by downstream crates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cortex;

impl Cortex {
    /// Create a new Cortex integration handle
    pub fn new() -> Self {
        debug!("initializing cortex integration");
        Self
    }
}

impl BaseLlm for Cortex {
    fn integration_name(&self) -> &'static str {
        "cortex"
    }
}

impl Llm for Cortex {}

impl Lineage for Cortex {
    fn ancestors() -> Vec<TypeDescriptor> {
        let mut chain = vec![TypeDescriptor::of::<Cortex>()];
        chain.extend(<dyn Llm as Lineage>::ancestors());
        chain
    }
}
