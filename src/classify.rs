//! Classifier facade (§4.6): wires normalize → saturate → build taxonomy
//! behind the single entry point callers use.

use std::time::Instant;

use log::info;

use crate::config::ClassifierConfig;
use crate::error::ClassifierResult;
use crate::model::{AbstractOntology, ClassifiedHierarchy, ClassifierStats};
use crate::normalizer::Normalizer;
use crate::saturation::Saturator;
use crate::store::AxiomStore;
use crate::symbols::SymbolTable;
use crate::taxonomy::build_taxonomy;

/// Classify `ontology`, returning the inferred taxonomy and summary stats.
///
/// Runs single-threaded to completion; there is no cancellation or deadline
/// support (§5) — callers needing one must enforce it externally.
pub fn classify(
    ontology: &AbstractOntology,
    config: &ClassifierConfig,
) -> ClassifierResult<ClassifiedHierarchy> {
    let mut symbols = SymbolTable::new();
    let mut store = AxiomStore::new(0, 0);
    Normalizer::new(&mut symbols, &mut store).normalize(ontology)?;

    if config.log_progress {
        info!(
            "normalized {} terms into {} concepts, {} roles",
            ontology.terms.len(),
            symbols.concept_count(),
            symbols.role_count()
        );
    }

    let saturate_start = Instant::now();
    let contexts = Saturator::new(&store, symbols.concept_count(), config)?.saturate();
    let saturate_time_ms = saturate_start.elapsed().as_millis() as u64;
    if config.log_progress {
        info!("saturation reached fixpoint in {saturate_time_ms}ms");
    }

    let reduction_start = Instant::now();
    let concepts = build_taxonomy(&symbols, &contexts);
    let reduction_time_ms = reduction_start.elapsed().as_millis() as u64;
    if config.log_progress {
        info!(
            "taxonomy built in {reduction_time_ms}ms: {} named concepts",
            concepts.len()
        );
    }

    let inferred_subsumptions = symbols
        .named_concepts()
        .filter(|&c| c.0 >= 2)
        .map(|c| contexts.super_set_len(c).saturating_sub(2))
        .sum();

    Ok(ClassifiedHierarchy {
        concepts,
        stats: ClassifierStats {
            concept_count: symbols.concept_count(),
            role_count: symbols.role_count(),
            inferred_subsumptions,
            saturate_time_ms,
            reduction_time_ms,
        },
    })
}
