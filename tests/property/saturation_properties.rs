//! Reflexivity, Top closure, link symmetry, closure-at-fixpoint, and
//! idempotence (§8 "Universal invariants"), generated over small random
//! axiom sets built directly against the axiom store (bypassing the
//! normalizer, which is exercised separately in `tests/boundary_scenarios.rs`).

use proptest::prelude::*;

use el_classifier::config::ClassifierConfig;
use el_classifier::ids::{ConceptId, RoleId, BOTTOM, TOP};
use el_classifier::saturation::Saturator;
use el_classifier::store::AxiomStore;

const MAX_CONCEPTS: usize = 6;
const MAX_ROLES: usize = 2;

#[derive(Debug, Clone)]
struct RandomOntology {
    n_concepts: usize,
    n_roles: usize,
    subsumptions: Vec<(u8, u8)>,
    exist_right: Vec<(u8, u8, u8)>,
    exist_left: Vec<(u8, u8, u8)>,
}

fn arb_ontology() -> impl Strategy<Value = RandomOntology> {
    (2usize..=MAX_CONCEPTS, 1usize..=MAX_ROLES).prop_flat_map(|(n_concepts, n_roles)| {
        let concept = 0u8..n_concepts as u8;
        let role = 0u8..n_roles as u8;
        (
            Just(n_concepts),
            Just(n_roles),
            prop::collection::vec((concept.clone(), concept.clone()), 0..8),
            prop::collection::vec((concept.clone(), role.clone(), concept.clone()), 0..4),
            prop::collection::vec((role, concept.clone(), concept), 0..4),
        )
            .prop_map(
                |(n_concepts, n_roles, subsumptions, exist_right, exist_left)| RandomOntology {
                    n_concepts,
                    n_roles,
                    subsumptions,
                    exist_right,
                    exist_left,
                },
            )
    })
}

fn build_store(ont: &RandomOntology) -> AxiomStore {
    let mut store = AxiomStore::new(ont.n_concepts, ont.n_roles);
    for &(a, b) in &ont.subsumptions {
        store.add_subsumption(ConceptId(a as u32), ConceptId(b as u32));
    }
    for &(a, r, b) in &ont.exist_right {
        store.add_exist_right(ConceptId(a as u32), RoleId(r as u32), ConceptId(b as u32));
    }
    for &(r, a, b) in &ont.exist_left {
        store.add_exist_left(RoleId(r as u32), ConceptId(a as u32), ConceptId(b as u32));
    }
    store
}

proptest! {
    #[test]
    fn reflexivity_and_top_closure_hold(ont in arb_ontology()) {
        let store = build_store(&ont);
        let config = ClassifierConfig::default();
        let contexts = Saturator::new(&store, ont.n_concepts, &config).unwrap().saturate();
        for i in 0..ont.n_concepts {
            let c = ConceptId(i as u32);
            prop_assert!(contexts.contains_super(c, c));
            prop_assert!(contexts.contains_super(c, TOP));
        }
    }

    #[test]
    fn link_symmetry_holds(ont in arb_ontology()) {
        let store = build_store(&ont);
        let config = ClassifierConfig::default();
        let contexts = Saturator::new(&store, ont.n_concepts, &config).unwrap().saturate();
        for i in 0..ont.n_concepts {
            let c = ConceptId(i as u32);
            for r in 0..ont.n_roles {
                let role = RoleId(r as u32);
                for &d in contexts.links(c, role) {
                    prop_assert!(contexts.preds(d, role).contains(&c));
                }
                for &e in contexts.preds(c, role) {
                    prop_assert!(contexts.links(e, role).contains(&c));
                }
            }
        }
    }

    #[test]
    fn closure_is_a_fixpoint(ont in arb_ontology()) {
        let store = build_store(&ont);
        let config = ClassifierConfig::default();
        let contexts = Saturator::new(&store, ont.n_concepts, &config).unwrap().saturate();

        // Re-running CR1 (the simplest rule to re-check directly) over the
        // already-saturated super-sets must add nothing new.
        for i in 0..ont.n_concepts {
            let c = ConceptId(i as u32);
            for d in contexts.super_set(c).collect::<Vec<_>>() {
                for &e in store.sub_to_sups(d) {
                    prop_assert!(contexts.contains_super(c, e));
                }
            }
        }

        // CR5: if Bottom is in D's super-set and (c, d) is a link, Bottom must
        // already be in c's super-set too.
        for i in 0..ont.n_concepts {
            let c = ConceptId(i as u32);
            for r in 0..ont.n_roles {
                let role = RoleId(r as u32);
                for &d in contexts.links(c, role) {
                    if contexts.contains_super(d, BOTTOM) {
                        prop_assert!(contexts.contains_super(c, BOTTOM));
                    }
                }
            }
        }
    }

    #[test]
    fn re_saturating_is_idempotent(ont in arb_ontology()) {
        let store = build_store(&ont);
        let config = ClassifierConfig::default();
        let first = Saturator::new(&store, ont.n_concepts, &config).unwrap().saturate();
        let second = Saturator::new(&store, ont.n_concepts, &config).unwrap().saturate();
        for i in 0..ont.n_concepts {
            let c = ConceptId(i as u32);
            prop_assert_eq!(first.super_set_len(c), second.super_set_len(c));
            for r in 0..ont.n_roles {
                let role = RoleId(r as u32);
                prop_assert_eq!(first.links(c, role).len(), second.links(c, role).len());
            }
        }
    }
}
