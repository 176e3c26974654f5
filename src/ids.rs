//! Dense integer identifiers shared by every other module.
//!
//! Concepts and roles are addressed by 32-bit ids so that the saturator can use
//! array-indexed tables instead of hashing strings on the hot path. Strings only
//! appear at the [`crate::symbols`] boundary.

use std::fmt;

/// Identifier for a named or fresh concept.
///
/// `Top = 0` and `Bottom = 1` are reserved; the symbol table pre-registers them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConceptId(pub u32);

/// Identifier for an object property (role).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoleId(pub u32);

/// The universal concept ⊤, reserved at id 0.
pub const TOP: ConceptId = ConceptId(0);
/// The empty concept ⊥, reserved at id 1.
pub const BOTTOM: ConceptId = ConceptId(1);

impl ConceptId {
    /// Index into arrays sized by concept count.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl RoleId {
    /// Index into arrays sized by role count.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ConceptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{}", self.0)
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}
