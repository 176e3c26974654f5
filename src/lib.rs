//! An OWL 2 EL-profile classifier: normalizes terminological axioms into six
//! canonical forms, saturates them to a fixpoint with a worklist-driven
//! completion-rule engine, and reduces the result to a transitively-reduced
//! taxonomy.
//!
//! ## Architecture
//!
//! ```text
//! AbstractOntology -> Normalizer -> AxiomStore -> Saturator -> Contexts -> taxonomy::build_taxonomy -> ClassifiedHierarchy
//! ```
//!
//! [`symbols::SymbolTable`] and [`store::AxiomStore`] hold the interned,
//! array-indexed state; [`normalizer::Normalizer`] populates both from an
//! [`model::AbstractOntology`]; [`saturation::Saturator`] drives the
//! completion rules to closure; [`taxonomy::build_taxonomy`] extracts direct
//! parents and children. [`classify::classify`] wires all of it behind one
//! call.
//!
//! ## Example usage
//!
//! ```
//! use el_classifier::{classify, AbstractOntology, ClassifierConfig, Relationship, Term};
//!
//! let mut ontology = AbstractOntology::default();
//! let mut a = Term { id: "A".into(), is_obsolete: false, relationships: Vec::new(), intersection_of: Vec::new() };
//! a.relationships.push(Relationship { relationship_type: "is_a".into(), target_id: "B".into() });
//! ontology.terms.push(a);
//! ontology.terms.push(Term { id: "B".into(), is_obsolete: false, relationships: Vec::new(), intersection_of: Vec::new() });
//!
//! let hierarchy = classify(&ontology, &ClassifierConfig::default()).unwrap();
//! assert_eq!(hierarchy.concepts.iter().find(|c| c.id == "A").unwrap().direct_parents, vec!["B".to_string()]);
//! ```

pub mod classify;
pub mod config;
pub mod error;
pub mod ids;
pub mod model;
pub mod normalizer;
pub mod saturation;
pub mod store;
pub mod symbols;
pub mod taxonomy;

pub use classify::classify;
pub use config::ClassifierConfig;
pub use error::{ClassifierError, ClassifierResult};
pub use model::{
    AbstractOntology, ClassifiedConcept, ClassifiedHierarchy, ClassifierStats, IntersectionPart,
    Relationship, Term, Typedef,
};
