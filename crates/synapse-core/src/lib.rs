//! Core types and abstractions for the Synapse model-integration framework.
//!
//! This crate provides the lineage reflection machinery, the capability
//! markers of the language-model abstraction hierarchy, and the error
//! handling shared by all Synapse integration crates.

pub mod error;
pub mod lineage;
pub mod llm;

pub use error::{Result, SynapseError};
pub use lineage::{
    assert_extends, extends, inspect, linearize, Lineage, LineageReport, TypeDescriptor,
};
pub use llm::{require_base_llm, BaseLlm, Llm};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::{Result, SynapseError};
    pub use crate::lineage::{
        assert_extends, extends, inspect, Lineage, LineageReport, TypeDescriptor,
    };
    pub use crate::llm::{require_base_llm, BaseLlm, Llm};
}
