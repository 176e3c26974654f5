//! Symbol table (§4.1): bijections between external names and dense ids.
//!
//! Reserves concept id 0 for `owl:Thing` and concept id 1 for `owl:Nothing`. Every
//! other component in the crate works purely in terms of [`ConceptId`]/[`RoleId`];
//! this is the only place external strings are compared.

use hashbrown::HashMap;

use crate::error::{ClassifierError, ClassifierResult};
use crate::ids::{ConceptId, RoleId, BOTTOM, TOP};

const OWL_THING: &str = "owl:Thing";
const OWL_NOTHING: &str = "owl:Nothing";

/// Bidirectional concept/role name tables plus fresh-id allocation.
#[derive(Debug, Default)]
pub struct SymbolTable {
    concept_names: Vec<String>,
    concept_ids: HashMap<String, ConceptId>,
    role_names: Vec<String>,
    role_ids: HashMap<String, RoleId>,
}

impl SymbolTable {
    /// Create a table with `owl:Thing` pre-registered at id 0 and `owl:Nothing` at
    /// id 1.
    pub fn new() -> Self {
        let mut table = SymbolTable {
            concept_names: vec![OWL_THING.to_string(), OWL_NOTHING.to_string()],
            concept_ids: HashMap::new(),
            role_names: Vec::new(),
            role_ids: HashMap::new(),
        };
        table.concept_ids.insert(OWL_THING.to_string(), TOP);
        table.concept_ids.insert(OWL_NOTHING.to_string(), BOTTOM);
        table
    }

    /// Resolve `name` to an existing concept id, or allocate a fresh one.
    ///
    /// Fails with [`ClassifierError::DuplicateReservedName`] if `name` is
    /// `owl:Thing` or `owl:Nothing` but would resolve to something other than the
    /// reserved id — which cannot happen through this method alone (the reserved
    /// names are pre-registered in `new`) but is checked defensively because a
    /// caller could otherwise corrupt the reservation by racing a rename.
    pub fn intern_concept(&mut self, name: &str) -> ClassifierResult<ConceptId> {
        if let Some(&id) = self.concept_ids.get(name) {
            if (name == OWL_THING && id != TOP) || (name == OWL_NOTHING && id != BOTTOM) {
                return Err(ClassifierError::DuplicateReservedName(name.to_string()));
            }
            return Ok(id);
        }
        if name == OWL_THING || name == OWL_NOTHING {
            // Pre-registered in `new`; reaching here means the reservation was lost.
            return Err(ClassifierError::DuplicateReservedName(name.to_string()));
        }
        let id = ConceptId(self.concept_names.len() as u32);
        self.concept_names.push(name.to_string());
        self.concept_ids.insert(name.to_string(), id);
        Ok(id)
    }

    /// Allocate a fresh, nameless concept id (used by the normalizer when folding
    /// intersections). `conceptName` returns `""` for it.
    pub fn fresh_concept(&mut self) -> ConceptId {
        let id = ConceptId(self.concept_names.len() as u32);
        self.concept_names.push(String::new());
        id
    }

    /// The external name for `id`, or `""` for fresh (unnamed) concepts.
    pub fn concept_name(&self, id: ConceptId) -> &str {
        self.concept_names
            .get(id.index())
            .map(String::as_str)
            .unwrap_or("")
    }

    /// True if `id` has a non-empty external name — i.e. it is not a fresh
    /// auxiliary concept introduced during normalization.
    pub fn is_named(&self, id: ConceptId) -> bool {
        !self.concept_name(id).is_empty()
    }

    /// Resolve `name` to an existing role id, or allocate a fresh one.
    pub fn intern_role(&mut self, name: &str) -> RoleId {
        if let Some(&id) = self.role_ids.get(name) {
            return id;
        }
        let id = RoleId(self.role_names.len() as u32);
        self.role_names.push(name.to_string());
        self.role_ids.insert(name.to_string(), id);
        id
    }

    /// Total number of concept ids allocated so far (including Top/Bottom and
    /// fresh concepts).
    pub fn concept_count(&self) -> usize {
        self.concept_names.len()
    }

    /// Total number of role ids allocated so far.
    pub fn role_count(&self) -> usize {
        self.role_names.len()
    }

    /// Iterate over all named (non-fresh) concept ids in ascending order.
    pub fn named_concepts(&self) -> impl Iterator<Item = ConceptId> + '_ {
        (0..self.concept_names.len())
            .map(|i| ConceptId(i as u32))
            .filter(move |&id| self.is_named(id))
    }
}
