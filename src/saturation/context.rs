//! Per-concept saturation state (§3 Context, §4.4 `addLink`).

use hashbrown::HashSet;
use smallvec::SmallVec;

use crate::error::{ClassifierError, ClassifierResult};
use crate::ids::{ConceptId, RoleId, TOP};

/// Small per-role link vectors. Most concepts have a handful of existential
/// witnesses per role, so four inline slots avoid heap allocation in the common
/// case (§9 "Sets as flat vectors with linear scan").
pub type LinkSet = SmallVec<[ConceptId; 4]>;

/// Saturation state for one concept: its derived super-set and, per role, its
/// outgoing links and incoming (predecessor) links.
#[derive(Debug, Clone)]
pub struct Context {
    super_set: HashSet<ConceptId>,
    link_map: Vec<LinkSet>,
    pred_map: Vec<LinkSet>,
}

impl Context {
    /// A fresh context for concept `c`, already reflexive (`c ∈ superSet(c)`)
    /// and Top-closed (`Top ∈ superSet(c)`), with empty link maps sized for
    /// `n_roles` roles.
    pub fn new(c: ConceptId, n_roles: usize) -> Self {
        let mut super_set = HashSet::with_capacity(8);
        super_set.insert(c);
        super_set.insert(TOP);
        Context {
            super_set,
            link_map: vec![LinkSet::new(); n_roles],
            pred_map: vec![LinkSet::new(); n_roles],
        }
    }

    pub fn contains_super(&self, d: ConceptId) -> bool {
        self.super_set.contains(&d)
    }

    /// Insert `d` into the super-set, returning whether it was newly added.
    pub fn add_super(&mut self, d: ConceptId) -> bool {
        self.super_set.insert(d)
    }

    pub fn super_set(&self) -> impl Iterator<Item = ConceptId> + '_ {
        self.super_set.iter().copied()
    }

    pub fn super_set_len(&self) -> usize {
        self.super_set.len()
    }

    pub fn links(&self, role: RoleId) -> &[ConceptId] {
        self.link_map.get(role.index()).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn preds(&self, role: RoleId) -> &[ConceptId] {
        self.pred_map.get(role.index()).map(|v| v.as_slice()).unwrap_or(&[])
    }

    fn push_link(&mut self, role: RoleId, target: ConceptId) {
        self.link_map[role.index()].push(target);
    }

    fn push_pred(&mut self, role: RoleId, source: ConceptId) {
        self.pred_map[role.index()].push(source);
    }
}

/// All per-concept contexts, plus the cross-context bookkeeping `addLink`
/// requires (a link touches both the source's `link_map` and the target's
/// `pred_map`, which live in different `Context`s).
#[derive(Debug)]
pub struct Contexts {
    contexts: Vec<Context>,
}

impl Contexts {
    /// Allocate one context per concept id in `[0, n_concepts)`, each already
    /// reflexive and Top-closed.
    ///
    /// This is the dominant upfront allocation of a classification run (§5
    /// Memory: "Contexts are sized upfront to the final concept count"), so
    /// it is the one place this crate surfaces allocation failure as
    /// [`ClassifierError::ResourceExhaustion`] rather than aborting (§4.4
    /// "Failure semantics").
    pub fn new(n_concepts: usize, n_roles: usize) -> ClassifierResult<Self> {
        let mut contexts = Vec::new();
        contexts.try_reserve_exact(n_concepts).map_err(|err| {
            ClassifierError::ResourceExhaustion(format!(
                "failed to allocate {n_concepts} contexts: {err}"
            ))
        })?;
        contexts.extend((0..n_concepts).map(|i| Context::new(ConceptId(i as u32), n_roles)));
        Ok(Contexts { contexts })
    }

    pub fn get(&self, c: ConceptId) -> &Context {
        &self.contexts[c.index()]
    }

    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }

    pub fn contains_super(&self, c: ConceptId, d: ConceptId) -> bool {
        self.contexts[c.index()].contains_super(d)
    }

    /// Insert `d` into `superSet(c)`, returning whether it was newly added.
    pub fn add_super(&mut self, c: ConceptId, d: ConceptId) -> bool {
        self.contexts[c.index()].add_super(d)
    }

    pub fn super_set(&self, c: ConceptId) -> impl Iterator<Item = ConceptId> + '_ {
        self.contexts[c.index()].super_set()
    }

    pub fn super_set_len(&self, c: ConceptId) -> usize {
        self.contexts[c.index()].super_set_len()
    }

    pub fn links(&self, c: ConceptId, role: RoleId) -> &[ConceptId] {
        self.contexts[c.index()].links(role)
    }

    pub fn preds(&self, c: ConceptId, role: RoleId) -> &[ConceptId] {
        self.contexts[c.index()].preds(role)
    }

    /// Add `(src, tgt, role)` to the link relation. Scans `link_map(src)[role]`
    /// linearly for `tgt`; if absent, appends `tgt` to `link_map(src)[role]`
    /// and `src` to `pred_map(tgt)[role]`, maintaining link/pred symmetry
    /// (§3 invariant). Returns whether the link was new.
    pub fn add_link(&mut self, src: ConceptId, role: RoleId, tgt: ConceptId) -> bool {
        if self.contexts[src.index()].links(role).contains(&tgt) {
            return false;
        }
        self.contexts[src.index()].push_link(role, tgt);
        self.contexts[tgt.index()].push_pred(role, src);
        true
    }
}
