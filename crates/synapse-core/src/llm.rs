//! Capability markers for the language-model abstraction hierarchy.
//!
//! Concrete integrations implement [`Llm`] and register their lineage;
//! request and streaming surface attaches to these seams in downstream
//! crates. This crate only carries identity and hierarchy position.

use crate::lineage::{Lineage, TypeDescriptor};

/// Root capability of every language-model integration.
pub trait BaseLlm: Send + Sync {
    /// Short, stable name of the concrete integration
    fn integration_name(&self) -> &'static str;
}

/// Intermediate abstraction chat-oriented integrations attach to.
///
/// At this level the trait only fixes the position in the hierarchy;
/// conversational operations live in downstream crates.
pub trait Llm: BaseLlm {}

impl Lineage for dyn BaseLlm {
    fn ancestors() -> Vec<TypeDescriptor> {
        vec![TypeDescriptor::of::<dyn BaseLlm>()]
    }
}

impl Lineage for dyn Llm {
    fn ancestors() -> Vec<TypeDescriptor> {
        let mut chain = vec![TypeDescriptor::of::<dyn Llm>()];
        chain.extend(<dyn BaseLlm as Lineage>::ancestors());
        chain
    }
}

/// Compile-time proof that `T` implements the base LLM abstraction.
///
/// Monomorphizing this function is the check: a type outside the hierarchy
/// fails to compile instead of failing at runtime.
pub fn require_base_llm<T: BaseLlm + ?Sized>() {}
