//! Taxonomy soundness and completeness (§8), over the same small random
//! axiom sets as `saturation_properties.rs`, with every concept given a name
//! (`C0`, `C1`, ...) so the fresh-concept filter never hides a row.

use std::collections::HashMap;

use proptest::prelude::*;

use el_classifier::config::ClassifierConfig;
use el_classifier::ids::{ConceptId, BOTTOM, TOP};
use el_classifier::saturation::Saturator;
use el_classifier::store::AxiomStore;
use el_classifier::symbols::SymbolTable;
use el_classifier::taxonomy::build_taxonomy;

const MAX_CONCEPTS: usize = 6;

fn arb_chain_like() -> impl Strategy<Value = (usize, Vec<(u8, u8)>)> {
    (2usize..=MAX_CONCEPTS).prop_flat_map(|n| {
        let concept = 0u8..n as u8;
        (Just(n), prop::collection::vec((concept.clone(), concept), 0..8))
    })
}

proptest! {
    #[test]
    fn taxonomy_is_sound_and_complete((n_concepts, subsumptions) in arb_chain_like()) {
        let mut symbols = SymbolTable::new();
        let mut names = HashMap::new();
        for i in 0..n_concepts {
            let id = symbols.intern_concept(&format!("C{i}")).unwrap();
            names.insert(id, i);
        }

        let mut store = AxiomStore::new(symbols.concept_count(), 0);
        for &(a, b) in &subsumptions {
            let a_id = *names.iter().find(|(_, &v)| v == a as usize).unwrap().0;
            let b_id = *names.iter().find(|(_, &v)| v == b as usize).unwrap().0;
            store.add_subsumption(a_id, b_id);
        }

        let config = ClassifierConfig::default();
        let contexts = Saturator::new(&store, symbols.concept_count(), &config).unwrap().saturate();
        let taxonomy = build_taxonomy(&symbols, &contexts);

        let row_by_id: HashMap<&str, &el_classifier::ClassifiedConcept> =
            taxonomy.iter().map(|row| (row.id.as_str(), row)).collect();

        for i in 0..n_concepts {
            let name = format!("C{i}");
            let c = *names.iter().find(|(_, &v)| v == i).unwrap().0;
            let row = row_by_id[name.as_str()];

            // Soundness: every direct parent b satisfies b ∈ superSet(c), and
            // no other candidate witnesses redundancy for it.
            for parent_name in &row.direct_parents {
                let b = if parent_name == "owl:Thing" {
                    TOP
                } else {
                    *names
                        .iter()
                        .find(|(id, _)| symbols.concept_name(**id) == parent_name)
                        .unwrap()
                        .0
                };
                prop_assert!(contexts.contains_super(c, b));
                if b != TOP {
                    for s in contexts.super_set(c) {
                        if s != b && s != c && s != TOP && s != BOTTOM {
                            prop_assert!(!contexts.contains_super(s, b));
                        }
                    }
                }
            }

            // Completeness: every named ancestor a (a != c, Top, Bottom) is
            // reachable via a direct-parent chain starting at c.
            for a_id in 0..n_concepts {
                let a = ConceptId(a_id as u32);
                if a == c || a == TOP || a == BOTTOM || !contexts.contains_super(c, a) {
                    continue;
                }
                let mut reached = false;
                let mut visited = std::collections::HashSet::new();
                let mut stack = vec![name.clone()];
                while let Some(cur) = stack.pop() {
                    if !visited.insert(cur.clone()) {
                        continue;
                    }
                    if cur == symbols.concept_name(a) {
                        reached = true;
                        break;
                    }
                    if let Some(r) = row_by_id.get(cur.as_str()) {
                        stack.extend(r.direct_parents.iter().cloned());
                    }
                }
                prop_assert!(reached);
            }
        }
    }
}
