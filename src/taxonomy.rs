//! Taxonomy builder (§4.5): local transitive reduction over the saturated
//! contexts, producing direct-parent / direct-child lists for named concepts.
//!
//! Fresh auxiliary concepts introduced during normalization participate fully
//! in the reduction (their presence in a super-set correctly reflects
//! reachability through them) but never appear in the output themselves. A
//! fresh concept that would otherwise surface as someone's direct parent is
//! transparently skipped in favor of *its own* nearest named direct parents —
//! this is the only way to reconcile "fresh concepts are excluded from the
//! output" with "the reduction is computed over all concepts" without either
//! leaking an empty-string id into `direct_parents` or dropping real ancestry
//! information. The spec is silent on the exact substitution mechanism; see
//! DESIGN.md's Open Question decisions for the reasoning behind this choice.

use hashbrown::{HashMap, HashSet};

use crate::ids::{ConceptId, BOTTOM, TOP};
use crate::model::ClassifiedConcept;
use crate::saturation::Contexts;
use crate::symbols::SymbolTable;

/// Compute the classified hierarchy's `concepts` list from saturated
/// `contexts`, in ascending concept-id order.
pub fn build_taxonomy(symbols: &SymbolTable, contexts: &Contexts) -> Vec<ClassifiedConcept> {
    let n = contexts.len();
    let raw_parents = raw_direct_parents(contexts, n);

    let mut cache: HashMap<ConceptId, Vec<ConceptId>> = HashMap::new();
    let mut visible_parents: HashMap<ConceptId, Vec<ConceptId>> = HashMap::new();

    for i in 0..n {
        let c = ConceptId(i as u32);
        if !is_output_concept(symbols, c) {
            continue;
        }
        let mut visiting = HashSet::new();
        let mut parents = named_parents_of(c, &raw_parents, symbols, &mut cache, &mut visiting);
        if parents.is_empty() {
            // §4.5 step 3: Top is always in superSet(c), so this fallback
            // always applies when no real named ancestor was found.
            parents.push(TOP);
        }
        visible_parents.insert(c, parents);
    }

    let mut children: HashMap<ConceptId, Vec<ConceptId>> = HashMap::new();
    for i in 0..n {
        let c = ConceptId(i as u32);
        if let Some(parents) = visible_parents.get(&c) {
            for &p in parents {
                children.entry(p).or_default().push(c);
            }
        }
    }

    let mut result = Vec::new();
    for i in 0..n {
        let c = ConceptId(i as u32);
        let Some(parents) = visible_parents.get(&c) else {
            continue;
        };
        result.push(ClassifiedConcept {
            id: symbols.concept_name(c).to_string(),
            direct_parents: parents
                .iter()
                .map(|&p| symbols.concept_name(p).to_string())
                .collect(),
            direct_children: children
                .get(&c)
                .into_iter()
                .flatten()
                .map(|&ch| symbols.concept_name(ch).to_string())
                .collect(),
        });
    }
    result
}

/// A non-reserved (c ≥ 2), named concept — the only ids that get an output
/// row. Fresh concepts still participate in `raw_direct_parents`.
fn is_output_concept(symbols: &SymbolTable, c: ConceptId) -> bool {
    c != TOP && c != BOTTOM && symbols.is_named(c)
}

/// §4.5 steps 1–2 for every concept id (named or fresh), with no Top fallback
/// applied yet — that fallback only makes sense once fresh parents have been
/// resolved away (see module docs), so it is applied once, at the top level,
/// in [`build_taxonomy`].
fn raw_direct_parents(contexts: &Contexts, n: usize) -> Vec<Vec<ConceptId>> {
    let mut raw = Vec::with_capacity(n);
    for i in 0..n {
        let c = ConceptId(i as u32);
        let candidates: Vec<ConceptId> = contexts
            .super_set(c)
            .filter(|&s| s != c && s != TOP && s != BOTTOM)
            .collect();

        let mut direct = Vec::new();
        for &b in &candidates {
            let witnessed = candidates
                .iter()
                .any(|&s| s != b && contexts.contains_super(s, b));
            if !witnessed {
                direct.push(b);
            }
        }
        raw.push(direct);
    }
    raw
}

/// Resolve `x`'s raw direct parents to named ids only, transparently skipping
/// through fresh concepts (recursively, with memoization and a cycle guard —
/// EL subsumption can have equivalence cycles, and a cycle confined entirely
/// to fresh concepts must not loop forever).
fn named_parents_of(
    x: ConceptId,
    raw_parents: &[Vec<ConceptId>],
    symbols: &SymbolTable,
    cache: &mut HashMap<ConceptId, Vec<ConceptId>>,
    visiting: &mut HashSet<ConceptId>,
) -> Vec<ConceptId> {
    if let Some(cached) = cache.get(&x) {
        return cached.clone();
    }
    if !visiting.insert(x) {
        return Vec::new();
    }

    let mut result = Vec::new();
    for &p in &raw_parents[x.index()] {
        if symbols.is_named(p) {
            if !result.contains(&p) {
                result.push(p);
            }
        } else {
            for q in named_parents_of(p, raw_parents, symbols, cache, visiting) {
                if !result.contains(&q) {
                    result.push(q);
                }
            }
        }
    }

    visiting.remove(&x);
    cache.insert(x, result.clone());
    result
}
