extern crate alloc;

use alloc::vec::Vec;
use ark_bn254::Fr;
use ark_ff::AdditiveGroup;

/// Node address in the body tree: `2^depth + position`, root = 1.
pub type GeneralizedIndex = usize;

/// Generalized index of leaf `position` in a tree of the given height.
pub const fn leaf_gindex(height: usize, position: usize) -> GeneralizedIndex {
    (1 << height) + position
}

/// Siblings consumed while climbing one level of a range multiproof.
///
/// A side the verifier recomputes from the range itself stays zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiblingPair {
    pub left: Fr,
    pub right: Fr,
}

impl Default for SiblingPair {
    fn default() -> Self {
        Self {
            left: Fr::ZERO,
            right: Fr::ZERO,
        }
    }
}

/// Pruned audit path for a contiguous leaf range, one layer per tree level
/// climbed (leaf level first, the root's level excluded).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuditPath {
    pub layers: Vec<SiblingPair>,
}

impl AuditPath {
    /// Number of levels the path climbs, i.e. the tree height it fits.
    pub fn depth(&self) -> usize {
        self.layers.len()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MerkleRoot(pub Fr);
