//! Saturator (§4.4): the worklist-driven fixpoint engine.
//!
//! Drives two LIFO worklists over completion rules CR1, CR2, CR3, CR4 (forward
//! and backward), CR5, CR10, and CR11 (left and right) until both are empty.
//! Correctness does not depend on drain order (§9 "LIFO worklists"); the stack
//! discipline is a cache-locality choice only.

pub mod context;

use log::debug;
use smallvec::SmallVec;

use crate::config::ClassifierConfig;
use crate::error::ClassifierResult;
use crate::ids::{ConceptId, RoleId, BOTTOM, TOP};
use crate::store::AxiomStore;

pub use context::{Context, Contexts};

/// Owns the worklists and drives them to a fixpoint over an [`AxiomStore`].
pub struct Saturator<'a> {
    store: &'a AxiomStore,
    contexts: Contexts,
    concept_worklist: Vec<(ConceptId, ConceptId)>,
    link_worklist: Vec<(ConceptId, RoleId, ConceptId)>,
}

impl<'a> Saturator<'a> {
    /// Initialize one context per concept id in `[0, n_concepts)`, each
    /// reflexive and Top-closed, and seed the concept worklist with `(c, c)`
    /// and `(c, Top)` for every concept (§4.4 Initialization).
    pub fn new(
        store: &'a AxiomStore,
        n_concepts: usize,
        config: &ClassifierConfig,
    ) -> ClassifierResult<Self> {
        let n_roles = store.n_roles();
        let contexts = Contexts::new(n_concepts, n_roles)?;
        let mut concept_worklist =
            Vec::with_capacity(n_concepts * config.worklist_capacity_factor.max(1));
        let link_worklist =
            Vec::with_capacity(n_concepts * config.link_worklist_capacity_factor.max(1));

        for i in 0..n_concepts {
            let c = ConceptId(i as u32);
            concept_worklist.push((c, c));
            concept_worklist.push((c, TOP));
        }

        Ok(Saturator {
            store,
            contexts,
            concept_worklist,
            link_worklist,
        })
    }

    /// Drain both worklists to a fixpoint, returning the saturated contexts.
    pub fn saturate(mut self) -> Contexts {
        let mut rounds = 0u64;
        while !self.concept_worklist.is_empty() || !self.link_worklist.is_empty() {
            rounds += 1;
            while let Some((c, d)) = self.concept_worklist.pop() {
                self.apply_concept_rules(c, d);
            }
            while let Some((c, r, d)) = self.link_worklist.pop() {
                self.apply_link_rules(c, r, d);
            }
        }
        debug!("saturation reached fixpoint after {} worklist rounds", rounds);
        self.contexts
    }

    fn add_super_and_push(&mut self, c: ConceptId, e: ConceptId) {
        if self.contexts.add_super(c, e) {
            self.concept_worklist.push((c, e));
        }
    }

    fn add_link_and_push(&mut self, src: ConceptId, role: RoleId, tgt: ConceptId) {
        if self.contexts.add_link(src, role, tgt) {
            self.link_worklist.push((src, role, tgt));
        }
    }

    /// Rules that fire on "D was added to superSet(C)".
    fn apply_concept_rules(&mut self, c: ConceptId, d: ConceptId) {
        let store = self.store;

        // CR1: axiomatic subsumption.
        for &e in store.sub_to_sups(d) {
            self.add_super_and_push(c, e);
        }

        // CR2: conjunction. Symmetric storage means this fires regardless of
        // which conjunct was derived first.
        for &(d_prime, e) in store.conj_index(d) {
            if self.contexts.contains_super(c, d_prime) {
                self.add_super_and_push(c, e);
            }
        }

        // CR3: existential right.
        for &(role, b) in store.exist_right(d) {
            self.add_link_and_push(c, role, b);
        }

        // CR4 backward: a predecessor of C via some role R gains F if
        // ∃R.D ⊑ F is an axiom and D is C's newly derived superclass.
        for role_idx in 0..store.n_roles() {
            let role = RoleId(role_idx as u32);
            let fillers = store.exist_left(role, d);
            if fillers.is_empty() {
                continue;
            }
            let preds: SmallVec<[ConceptId; 8]> =
                self.contexts.preds(c, role).iter().copied().collect();
            for e in preds {
                for &f in fillers {
                    self.add_super_and_push(e, f);
                }
            }
        }
    }

    /// Rules that fire on "(C, D) was added to R(role)".
    fn apply_link_rules(&mut self, c: ConceptId, role: RoleId, d: ConceptId) {
        let store = self.store;

        // CR4 forward.
        let d_supers: SmallVec<[ConceptId; 16]> = self.contexts.super_set(d).collect();
        for e in d_supers {
            for &f in store.exist_left(role, e) {
                self.add_super_and_push(c, f);
            }
        }

        // CR5: bottom propagation.
        if self.contexts.contains_super(d, BOTTOM) && !self.contexts.contains_super(c, BOTTOM) {
            self.add_super_and_push(c, BOTTOM);
        }

        // CR10: role subsumption.
        for &s in store.role_subs(role) {
            self.add_link_and_push(c, s, d);
        }

        // CR11, left: R1 ∘ role ⊑ S propagates through C's predecessors via R1.
        for r1_idx in 0..store.n_roles() {
            let r1 = RoleId(r1_idx as u32);
            let chains = store.role_chains(r1, role);
            if chains.is_empty() {
                continue;
            }
            let preds_r1: SmallVec<[ConceptId; 8]> =
                self.contexts.preds(c, r1).iter().copied().collect();
            for &e in &preds_r1 {
                for &s in chains {
                    self.add_link_and_push(e, s, d);
                }
            }
        }

        // CR11, right: role ∘ R2 ⊑ S propagates through D's successors via R2.
        for (r2, chains) in store.role_chains_from(role) {
            let targets: SmallVec<[ConceptId; 8]> =
                self.contexts.links(d, r2).iter().copied().collect();
            for e in targets {
                for &s in chains {
                    self.add_link_and_push(c, s, e);
                }
            }
        }
    }
}
