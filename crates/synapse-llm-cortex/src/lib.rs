//! Cortex language-model integration for the Synapse framework.
//!
//! Registers the [`Cortex`] integration type in the model-abstraction
//! hierarchy. The provider client itself lives outside this crate; what is
//! fixed here is the integration's identity and its lineage.

pub mod cortex;

pub use cortex::Cortex;
