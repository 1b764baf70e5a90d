//! Lineage reflection over type hierarchies.
//!
//! Integration types register their ancestor chain through the [`Lineage`]
//! trait. Membership checks compare `TypeId`s, never name strings, so a
//! foreign type that merely shares a name with a base abstraction can never
//! satisfy a check against it. Names are kept alongside the identities for
//! failure reports and logging only.

use crate::error::{Result, SynapseError};
use serde::{Deserialize, Serialize};
use std::any::{type_name, TypeId};
use tracing::{debug, trace};

/// Identity of one entry in a type's lineage.
///
/// Equality and hashing are by type identity; the name is diagnostic.
#[derive(Debug, Clone, Copy, Eq)]
pub struct TypeDescriptor {
    id: TypeId,
    name: &'static str,
}

impl TypeDescriptor {
    /// Descriptor for a concrete type or a `dyn Trait` hierarchy level
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// Type identity used for membership checks
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Full type path as reported by the compiler
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Trailing path segment with any `dyn ` prefix stripped,
    /// e.g. `dyn synapse_core::llm::BaseLlm` becomes `BaseLlm`
    pub fn short_name(&self) -> &'static str {
        let name = self.name.strip_prefix("dyn ").unwrap_or(self.name);
        name.rsplit("::").next().unwrap_or(name)
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl std::hash::Hash for TypeDescriptor {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Reflection over a type's linearized ancestor chain.
///
/// The raw chain starts with the type itself, most-derived first, and
/// includes every base level's own chain transitively. A level shared by
/// two branches may appear more than once in the raw chain;
/// [`Lineage::lineage`] collapses repeats.
pub trait Lineage {
    /// Raw ancestor chain, self first
    fn ancestors() -> Vec<TypeDescriptor>;

    /// Linearized ancestor chain: first occurrence wins
    fn lineage() -> Vec<TypeDescriptor> {
        linearize(Self::ancestors())
    }
}

/// Collapse a raw chain into resolution order.
///
/// Keeps the first occurrence of every level and preserves their relative
/// order.
pub fn linearize(chain: Vec<TypeDescriptor>) -> Vec<TypeDescriptor> {
    let mut out: Vec<TypeDescriptor> = Vec::with_capacity(chain.len());
    for entry in chain {
        if !out.iter().any(|seen| seen.id == entry.id) {
            out.push(entry);
        }
    }
    out
}

/// Check whether `B` appears in `T`'s linearized ancestor chain.
pub fn extends<T, B>() -> bool
where
    T: Lineage + ?Sized + 'static,
    B: ?Sized + 'static,
{
    let expected = TypeId::of::<B>();
    T::lineage().iter().any(|entry| entry.id() == expected)
}

/// Assert that `B` appears in `T`'s linearized ancestor chain.
///
/// Membership is decided by type identity. On failure the error carries the
/// subject, the expected base, and the observed ancestor names so the
/// harness can report the unmet condition.
pub fn assert_extends<T, B>() -> Result<()>
where
    T: Lineage + ?Sized + 'static,
    B: ?Sized + 'static,
{
    let subject = TypeDescriptor::of::<T>();
    let expected = TypeDescriptor::of::<B>();
    let chain = T::lineage();
    trace!(
        "lineage of {}: {} levels",
        subject.short_name(),
        chain.len()
    );

    if chain.iter().any(|entry| entry.id() == expected.id()) {
        debug!(
            "{} extends {}",
            subject.short_name(),
            expected.short_name()
        );
        Ok(())
    } else {
        Err(SynapseError::assertion_failure(
            subject.short_name(),
            expected.short_name(),
            chain
                .iter()
                .map(|entry| entry.short_name().to_string())
                .collect(),
        ))
    }
}

/// Diagnostic snapshot of a computed lineage.
///
/// Built on demand, discarded after use. Names here are for reporting only;
/// membership checks never consult them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineageReport {
    /// Short name of the inspected type
    pub subject: String,
    /// Short names of the linearized chain, self first
    pub ancestors: Vec<String>,
}

/// Build a lineage report for `T`.
pub fn inspect<T>() -> LineageReport
where
    T: Lineage + ?Sized + 'static,
{
    let chain = T::lineage();
    LineageReport {
        subject: TypeDescriptor::of::<T>().short_name().to_string(),
        ancestors: chain
            .iter()
            .map(|entry| entry.short_name().to_string())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Root {}
    trait Branch: Root {}
    trait OtherBranch: Root {}

    struct Leaf;
    struct Diamond;
    struct Standalone;

    impl Lineage for dyn Root {
        fn ancestors() -> Vec<TypeDescriptor> {
            vec![TypeDescriptor::of::<dyn Root>()]
        }
    }

    impl Lineage for dyn Branch {
        fn ancestors() -> Vec<TypeDescriptor> {
            let mut chain = vec![TypeDescriptor::of::<dyn Branch>()];
            chain.extend(<dyn Root as Lineage>::ancestors());
            chain
        }
    }

    impl Lineage for dyn OtherBranch {
        fn ancestors() -> Vec<TypeDescriptor> {
            let mut chain = vec![TypeDescriptor::of::<dyn OtherBranch>()];
            chain.extend(<dyn Root as Lineage>::ancestors());
            chain
        }
    }

    impl Lineage for Leaf {
        fn ancestors() -> Vec<TypeDescriptor> {
            let mut chain = vec![TypeDescriptor::of::<Leaf>()];
            chain.extend(<dyn Branch as Lineage>::ancestors());
            chain
        }
    }

    // Reaches Root through both branches.
    impl Lineage for Diamond {
        fn ancestors() -> Vec<TypeDescriptor> {
            let mut chain = vec![TypeDescriptor::of::<Diamond>()];
            chain.extend(<dyn Branch as Lineage>::ancestors());
            chain.extend(<dyn OtherBranch as Lineage>::ancestors());
            chain
        }
    }

    impl Lineage for Standalone {
        fn ancestors() -> Vec<TypeDescriptor> {
            vec![TypeDescriptor::of::<Standalone>()]
        }
    }

    #[test]
    fn test_lineage_starts_with_self() {
        let chain = Leaf::lineage();
        assert_eq!(chain[0], TypeDescriptor::of::<Leaf>());
    }

    #[test]
    fn test_extends_self() {
        assert!(extends::<Leaf, Leaf>());
    }

    #[test]
    fn test_extends_direct_base() {
        assert!(extends::<Leaf, dyn Branch>());
    }

    #[test]
    fn test_extends_transitive_base() {
        assert!(extends::<Leaf, dyn Root>());
    }

    #[test]
    fn test_missing_base_fails() {
        let err = assert_extends::<Standalone, dyn Root>().unwrap_err();
        assert!(err.is_assertion_failure());
        match err {
            SynapseError::AssertionFailure {
                subject,
                expected,
                found,
            } => {
                assert_eq!(subject, "Standalone");
                assert_eq!(expected, "Root");
                assert_eq!(found, vec!["Standalone".to_string()]);
            }
        }
    }

    #[test]
    fn test_assert_extends_passes() {
        assert_extends::<Leaf, dyn Root>().unwrap();
    }

    #[test]
    fn test_repeated_checks_agree() {
        for _ in 0..3 {
            assert!(extends::<Leaf, dyn Root>());
            assert!(!extends::<Standalone, dyn Root>());
        }
    }

    #[test]
    fn test_linearize_collapses_diamond() {
        let chain = Diamond::lineage();
        let root = TypeDescriptor::of::<dyn Root>();
        let occurrences = chain.iter().filter(|entry| **entry == root).count();
        assert_eq!(occurrences, 1);
        // First occurrence wins: Root lands between the two branches.
        let shorts: Vec<&str> = chain.iter().map(|entry| entry.short_name()).collect();
        assert_eq!(shorts, vec!["Diamond", "Branch", "Root", "OtherBranch"]);
    }

    #[test]
    fn test_linearize_preserves_order() {
        let raw = Leaf::ancestors();
        let linearized = linearize(raw.clone());
        assert_eq!(linearized, raw);
    }

    #[test]
    fn test_short_name_strips_dyn_and_path() {
        assert_eq!(TypeDescriptor::of::<dyn Root>().short_name(), "Root");
        assert_eq!(TypeDescriptor::of::<Leaf>().short_name(), "Leaf");
    }

    #[test]
    fn test_descriptor_equality_is_by_identity() {
        let a = TypeDescriptor::of::<Leaf>();
        let b = TypeDescriptor::of::<Leaf>();
        assert_eq!(a, b);
        assert_ne!(a, TypeDescriptor::of::<Standalone>());
    }

    #[test]
    fn test_inspect_reports_short_names() {
        let report = inspect::<Leaf>();
        assert_eq!(report.subject, "Leaf");
        assert_eq!(report.ancestors, vec!["Leaf", "Branch", "Root"]);
    }
}
