//! The abstract ontology value accepted by [`crate::classify::classify`] and the
//! classified hierarchy it returns (§6). Both derive `serde` so callers can
//! construct or consume these over JSON without this crate owning a file format.

use serde::{Deserialize, Serialize};

/// One typed relationship edge from a term, e.g. `("is_a", "CHEBI:1234")` or
/// `("has_part", "CHEBI:5678")`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relationship {
    #[serde(rename = "type")]
    pub relationship_type: String,
    pub target_id: String,
}

/// One part of an `intersection_of` block: either a genus (plain class, empty
/// `relationship`) or a differentia (`relationship` names a role, `target_id`
/// names its filler).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntersectionPart {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub relationship: String,
    pub target_id: String,
}

impl IntersectionPart {
    pub fn is_genus(&self) -> bool {
        self.relationship.is_empty()
    }
}

/// One term (named concept) of the input ontology.
///
/// When `intersection_of` is non-empty, this crate requires every part to also
/// appear as a standalone entry in `relationships` (a genus part as an `is_a`
/// relationship, a differentia part as a same-role relationship) — the
/// normalizer only ever emits the *reverse* direction of the equivalence
/// (§4.3); it relies on the caller having already supplied the forward
/// direction via `relationships`. This mirrors how ChEBI's OBO export encodes
/// `intersection_of` and is documented here rather than enforced, since
/// detecting the omission in general is exactly the inference this crate
/// exists to compute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Term {
    pub id: String,
    #[serde(default)]
    pub is_obsolete: bool,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
    #[serde(default)]
    pub intersection_of: Vec<IntersectionPart>,
}

/// One role (object property) declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Typedef {
    pub id: String,
    #[serde(default)]
    pub is_transitive: bool,
    #[serde(default)]
    pub is_reflexive: bool,
}

/// The full input to classification.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AbstractOntology {
    #[serde(default)]
    pub terms: Vec<Term>,
    #[serde(default)]
    pub typedefs: Vec<Typedef>,
}

/// One named concept's position in the taxonomy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedConcept {
    pub id: String,
    pub direct_parents: Vec<String>,
    pub direct_children: Vec<String>,
}

/// Summary statistics for a classification run (§6).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ClassifierStats {
    pub concept_count: usize,
    pub role_count: usize,
    pub inferred_subsumptions: usize,
    pub saturate_time_ms: u64,
    pub reduction_time_ms: u64,
}

/// The result of classifying an [`AbstractOntology`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedHierarchy {
    pub concepts: Vec<ClassifiedConcept>,
    pub stats: ClassifierStats,
}
