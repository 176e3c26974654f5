//! Normalizer (§4.3): rewrites raw ontology axioms into the six normal forms,
//! introducing fresh auxiliary concepts where EL's grammar needs them.

use log::{debug, warn};

use crate::error::{ClassifierError, ClassifierResult};
use crate::ids::ConceptId;
use crate::model::{AbstractOntology, IntersectionPart, Term};
use crate::store::AxiomStore;
use crate::symbols::SymbolTable;

const IS_A: &str = "is_a";

/// Drives the symbol table and axiom store from an [`AbstractOntology`].
pub struct Normalizer<'a> {
    symbols: &'a mut SymbolTable,
    store: &'a mut AxiomStore,
}

impl<'a> Normalizer<'a> {
    pub fn new(symbols: &'a mut SymbolTable, store: &'a mut AxiomStore) -> Self {
        Normalizer { symbols, store }
    }

    /// Normalize every term and typedef in `ontology`, populating the symbol
    /// table and axiom store. Idempotent to call once per fresh store; calling
    /// it twice on the same store double-adds axioms (harmless, per §4.2, but
    /// wasteful).
    pub fn normalize(&mut self, ontology: &AbstractOntology) -> ClassifierResult<()> {
        for typedef in &ontology.typedefs {
            let role = self.symbols.intern_role(&typedef.id);
            self.store.grow_roles(self.symbols.role_count());
            if typedef.is_transitive {
                self.store.set_transitive(role);
            }
            if typedef.is_reflexive {
                self.store.set_reflexive(role);
            }
        }

        for term in &ontology.terms {
            self.normalize_term(term)?;
        }

        self.store.grow(self.symbols.concept_count());
        self.store.grow_roles(self.symbols.role_count());
        Ok(())
    }

    fn normalize_term(&mut self, term: &Term) -> ClassifierResult<()> {
        if term.is_obsolete {
            debug!("skipping obsolete term {}", term.id);
            return Ok(());
        }

        let c = self.symbols.intern_concept(&term.id)?;
        self.store.grow(self.symbols.concept_count());

        for rel in &term.relationships {
            let target = self.resolve_target(&rel.target_id)?;
            if rel.relationship_type == IS_A {
                self.store.add_subsumption(c, target);
            } else {
                let role = self.symbols.intern_role(&rel.relationship_type);
                self.store.grow_roles(self.symbols.role_count());
                self.store.add_exist_right(c, role, target);
            }
        }

        self.normalize_intersection_of(c, &term.intersection_of)?;
        Ok(())
    }

    /// Resolve a relationship/intersection target id, mapping a reserved-name
    /// collision into `UnresolvedReference` — per §4.3, a target that cannot be
    /// interned is a normalizer bug, not malformed user data.
    fn resolve_target(&mut self, name: &str) -> ClassifierResult<ConceptId> {
        self.symbols
            .intern_concept(name)
            .map_err(|_| ClassifierError::UnresolvedReference(name.to_string()))
    }

    /// Emit only the reverse direction `P1 ⊓ ... ⊓ Pk ⊑ C` of the equivalence
    /// `C ≡ P1 ⊓ ... ⊓ Pk` (§4.3 steps 1–3).
    fn normalize_intersection_of(
        &mut self,
        c: ConceptId,
        parts: &[IntersectionPart],
    ) -> ClassifierResult<()> {
        if parts.is_empty() {
            return Ok(());
        }

        let mut conjuncts = Vec::with_capacity(parts.len());
        for part in parts {
            conjuncts.push(self.conjunct_id(part)?);
        }
        self.store.grow(self.symbols.concept_count());

        if conjuncts.len() == 1 {
            warn!(
                "intersection_of for {} has a single part; emitting it as a plain subsumption",
                c
            );
            self.store.add_subsumption(conjuncts[0], c);
            return Ok(());
        }

        let mut acc = conjuncts[0];
        let last = conjuncts.len() - 1;
        for (i, &conjunct) in conjuncts.iter().enumerate().skip(1) {
            let target = if i == last {
                c
            } else {
                let fresh = self.symbols.fresh_concept();
                self.store.grow(self.symbols.concept_count());
                fresh
            };
            self.store.add_conjunction(acc, conjunct, target);
            acc = target;
        }
        Ok(())
    }

    /// Compute the conjunct id for one intersection part (§4.3 step 1).
    fn conjunct_id(&mut self, part: &IntersectionPart) -> ClassifierResult<ConceptId> {
        if part.is_genus() {
            self.resolve_target(&part.target_id)
        } else {
            let filler = self.resolve_target(&part.target_id)?;
            let role = self.symbols.intern_role(&part.relationship);
            self.store.grow_roles(self.symbols.role_count());
            let fresh = self.symbols.fresh_concept();
            self.store.grow(self.symbols.concept_count());
            self.store.add_exist_left(role, filler, fresh);
            Ok(fresh)
        }
    }
}
