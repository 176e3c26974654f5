//! Axiom store (§3, §4.2): six indexed tables, one per normal form.
//!
//! All adds are append-only and O(1) amortized. The store performs no duplicate
//! suppression — the saturator's superSet/link dedup logic provides idempotence
//! even if the same payload is added twice.

use hashbrown::HashMap;

use crate::ids::{ConceptId, RoleId};

/// NF2 payload: `A1 ⊓ A2 ⊑ B`, looked up from either conjunct.
type ConjIndex = HashMap<ConceptId, Vec<(ConceptId, ConceptId)>>;

/// The six normal-form tables described in §3, plus role metadata.
#[derive(Debug, Default)]
pub struct AxiomStore {
    /// NF1: `subToSups[A]` = sequence of B such that `A ⊑ B`.
    sub_to_sups: Vec<Vec<ConceptId>>,

    /// NF2: `conjIndex[A]` = sequence of `(other_conjunct, B)` such that
    /// `A ⊓ other_conjunct ⊑ B`. Stored symmetrically: both `conjIndex[A1]` and
    /// `conjIndex[A2]` get an entry for `A1 ⊓ A2 ⊑ B`.
    conj_index: ConjIndex,

    /// NF3: `existRight[A]` = sequence of `(R, B)` such that `A ⊑ ∃R.B`.
    exist_right: Vec<Vec<(RoleId, ConceptId)>>,

    /// NF4: `existLeft[R][A]` = sequence of B such that `∃R.A ⊑ B`.
    exist_left: Vec<HashMap<ConceptId, Vec<ConceptId>>>,

    /// NF5: `roleSubs[R]` = sequence of S such that `R ⊑ S`.
    role_subs: Vec<Vec<RoleId>>,

    /// NF6: `roleChains[R1][R2]` = sequence of S such that `R1 ∘ R2 ⊑ S`.
    role_chains: Vec<HashMap<RoleId, Vec<RoleId>>>,

    transitive: Vec<bool>,
    reflexive: Vec<bool>,
}

impl AxiomStore {
    /// Create an empty store sized for `n_concepts` concepts and `n_roles` roles.
    pub fn new(n_concepts: usize, n_roles: usize) -> Self {
        let mut store = AxiomStore::default();
        store.grow(n_concepts);
        store.grow_roles(n_roles);
        store
    }

    /// Grow the concept-indexed tables to cover at least `n_concepts` ids.
    /// Required because the normalizer may allocate fresh concepts lazily, after
    /// the store was first sized.
    pub fn grow(&mut self, n_concepts: usize) {
        if self.sub_to_sups.len() < n_concepts {
            self.sub_to_sups.resize_with(n_concepts, Vec::new);
        }
        if self.exist_right.len() < n_concepts {
            self.exist_right.resize_with(n_concepts, Vec::new);
        }
    }

    /// Grow the role-indexed tables to cover at least `n_roles` ids.
    pub fn grow_roles(&mut self, n_roles: usize) {
        if self.exist_left.len() < n_roles {
            self.exist_left.resize_with(n_roles, HashMap::new);
        }
        if self.role_subs.len() < n_roles {
            self.role_subs.resize_with(n_roles, Vec::new);
        }
        if self.role_chains.len() < n_roles {
            self.role_chains.resize_with(n_roles, HashMap::new);
        }
        if self.transitive.len() < n_roles {
            self.transitive.resize(n_roles, false);
        }
        if self.reflexive.len() < n_roles {
            self.reflexive.resize(n_roles, false);
        }
    }

    /// NF1: record `A ⊑ B`.
    pub fn add_subsumption(&mut self, a: ConceptId, b: ConceptId) {
        self.sub_to_sups[a.index()].push(b);
    }

    /// NF2: record `A1 ⊓ A2 ⊑ B`, symmetrically under both conjuncts.
    pub fn add_conjunction(&mut self, a1: ConceptId, a2: ConceptId, b: ConceptId) {
        self.conj_index.entry(a1).or_default().push((a2, b));
        self.conj_index.entry(a2).or_default().push((a1, b));
    }

    /// NF3: record `A ⊑ ∃R.B`.
    pub fn add_exist_right(&mut self, a: ConceptId, r: RoleId, b: ConceptId) {
        self.exist_right[a.index()].push((r, b));
    }

    /// NF4: record `∃R.A ⊑ B`.
    pub fn add_exist_left(&mut self, r: RoleId, a: ConceptId, b: ConceptId) {
        self.exist_left[r.index()].entry(a).or_default().push(b);
    }

    /// NF5: record `R ⊑ S`.
    pub fn add_role_sub(&mut self, r: RoleId, s: RoleId) {
        self.role_subs[r.index()].push(s);
    }

    /// NF6: record `R1 ∘ R2 ⊑ S`.
    pub fn add_role_chain(&mut self, r1: RoleId, r2: RoleId, s: RoleId) {
        self.role_chains[r1.index()].entry(r2).or_default().push(s);
    }

    /// Mark `r` transitive: equivalent to `addRoleChain(r, r, r)`.
    pub fn set_transitive(&mut self, r: RoleId) {
        self.transitive[r.index()] = true;
        self.add_role_chain(r, r, r);
    }

    /// Mark `r` reflexive.
    pub fn set_reflexive(&mut self, r: RoleId) {
        self.reflexive[r.index()] = true;
    }

    pub fn is_transitive(&self, r: RoleId) -> bool {
        self.transitive.get(r.index()).copied().unwrap_or(false)
    }

    pub fn is_reflexive(&self, r: RoleId) -> bool {
        self.reflexive.get(r.index()).copied().unwrap_or(false)
    }

    pub fn sub_to_sups(&self, a: ConceptId) -> &[ConceptId] {
        self.sub_to_sups.get(a.index()).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn conj_index(&self, a: ConceptId) -> &[(ConceptId, ConceptId)] {
        self.conj_index.get(&a).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn exist_right(&self, a: ConceptId) -> &[(RoleId, ConceptId)] {
        self.exist_right.get(a.index()).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn exist_left(&self, r: RoleId, a: ConceptId) -> &[ConceptId] {
        self.exist_left
            .get(r.index())
            .and_then(|m| m.get(&a))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn role_subs(&self, r: RoleId) -> &[RoleId] {
        self.role_subs.get(r.index()).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn role_chains(&self, r1: RoleId, r2: RoleId) -> &[RoleId] {
        self.role_chains
            .get(r1.index())
            .and_then(|m| m.get(&r2))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All `(R2, chains)` pairs for which `R1 ∘ R2 ⊑ S` exists for some S — the
    /// shape CR11-right iterates over.
    pub fn role_chains_from(&self, r1: RoleId) -> impl Iterator<Item = (RoleId, &[RoleId])> {
        self.role_chains
            .get(r1.index())
            .into_iter()
            .flat_map(|m| m.iter().map(|(r2, chains)| (*r2, chains.as_slice())))
    }

    pub fn n_roles(&self) -> usize {
        self.role_subs.len()
    }
}
