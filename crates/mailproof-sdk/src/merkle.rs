// Copyright 2026 Mailproof Contributors
// Licensed under the Apache License, Version 2.0

//! Merkle multiproof tree over the email body.
//!
//! Built once from the body bytes, queried for contiguous ranges, immutable
//! thereafter. Nodes live in a flat store addressed by generalized index
//! (`2^depth + position`, root = 1); hashing is two-to-one Poseidon in the
//! BN254 scalar field, leaves are the body bytes as field elements.
//!
//! A range multiproof carries at most one left and one right sibling per
//! level: siblings whose pair partner already lies inside the range are
//! dropped, since the verifier recomputes that pair itself. The audit path
//! is therefore O(height), not O(range·height).
//!
//! # Example
//!
//! ```rust
//! use mailproof_sdk::merkle::{generate_root, MerkleTree};
//! use mailproof_sdk::{leaf_gindex, PoseidonHasher};
//! use ark_bn254::Fr;
//!
//! let hasher = PoseidonHasher::new();
//! let body = b"attack at dawn";
//! let tree = MerkleTree::build(body, &hasher).unwrap();
//!
//! // prove bytes 7..=10 ("at d") without revealing the rest
//! let path = tree.multi_proof(7, 10).unwrap();
//! let values: Vec<Fr> = body[7..=10].iter().map(|b| Fr::from(*b as u64)).collect();
//! let root = generate_root(
//!     &values,
//!     &path,
//!     tree.height(),
//!     leaf_gindex(tree.height(), 7),
//!     leaf_gindex(tree.height(), 10),
//!     &hasher,
//! )
//! .unwrap();
//! assert_eq!(root, tree.root().0);
//! ```

use ark_bn254::Fr;
use ark_ff::AdditiveGroup;
use mailproof_poseidon::PoseidonHasher;
use mailproof_types::{leaf_gindex, AuditPath, GeneralizedIndex, MerkleRoot, SiblingPair};

use crate::error::{MailproofError, MailproofResult};

pub struct MerkleTree {
    /// `nodes[g]` is the node at generalized index `g`; index 0 unused.
    nodes: Vec<Fr>,
    height: usize,
    leaf_count: usize,
}

impl MerkleTree {
    /// Build from leaf bytes, padding with zero field elements to the next
    /// power of two. Zero-leaf input is disallowed.
    pub fn build(leaves: &[u8], hasher: &PoseidonHasher) -> MailproofResult<Self> {
        if leaves.is_empty() {
            return Err(MailproofError::InputShape(
                "cannot build a tree from zero leaves".into(),
            ));
        }
        let width = leaves.len().next_power_of_two();
        let height = width.trailing_zeros() as usize;
        let mut nodes = vec![Fr::ZERO; 2 * width];
        for (i, b) in leaves.iter().enumerate() {
            nodes[width + i] = Fr::from(*b as u64);
        }
        for g in (1..width).rev() {
            nodes[g] = hasher.hash2(nodes[2 * g], nodes[2 * g + 1]);
        }
        Ok(Self {
            nodes,
            height,
            leaf_count: leaves.len(),
        })
    }

    pub fn root(&self) -> MerkleRoot {
        MerkleRoot(self.nodes[1])
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Leaves supplied at build time, before power-of-two padding.
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Node at a generalized index, for callers that address the tree
    /// directly.
    pub fn node(&self, gindex: GeneralizedIndex) -> Option<Fr> {
        if gindex == 0 {
            return None;
        }
        self.nodes.get(gindex).copied()
    }

    /// Multiproof for the contiguous leaf range `first..=last`.
    ///
    /// Per level the boundary parity decides what the verifier cannot
    /// recompute: a left sibling only when the level's first index is odd, a
    /// right sibling only when its last index is even. Every other sibling's
    /// pair partner is inside the range and is dropped. Missing sides stay
    /// zero; the root's level is not emitted.
    pub fn multi_proof(&self, first: usize, last: usize) -> MailproofResult<AuditPath> {
        if first > last || last >= self.leaf_count {
            return Err(MailproofError::IndexOutOfRange {
                first,
                last,
                leaves: self.leaf_count,
            });
        }
        let mut lo = leaf_gindex(self.height, first);
        let mut hi = leaf_gindex(self.height, last);
        let mut layers = Vec::with_capacity(self.height);
        while lo > 1 {
            let mut pair = SiblingPair::default();
            if lo & 1 == 1 {
                pair.left = self.nodes[lo - 1];
            }
            if hi & 1 == 0 {
                pair.right = self.nodes[hi + 1];
            }
            layers.push(pair);
            lo /= 2;
            hi /= 2;
        }
        Ok(AuditPath { layers })
    }
}

/// Recompute the root from a contiguous run of leaf values and its audit
/// path, mirroring the in-circuit verifier.
///
/// Per level the run is widened to pair alignment with the stored siblings
/// (prepend when the first index is odd, append when the last is even),
/// hashed pairwise, and the bounding indices move to their parents. After
/// `height` levels one value remains.
pub fn generate_root(
    leaf_values: &[Fr],
    path: &AuditPath,
    height: usize,
    first_gidx: GeneralizedIndex,
    last_gidx: GeneralizedIndex,
    hasher: &PoseidonHasher,
) -> MailproofResult<Fr> {
    let width = 1usize << height;
    if first_gidx < width || last_gidx >= 2 * width || first_gidx > last_gidx {
        return Err(MailproofError::InputShape(format!(
            "generalized indices {first_gidx}..={last_gidx} outside leaf level of height {height}"
        )));
    }
    if leaf_values.len() != last_gidx - first_gidx + 1 {
        return Err(MailproofError::InputShape(format!(
            "{} leaf values for range {first_gidx}..={last_gidx}",
            leaf_values.len()
        )));
    }
    if path.depth() != height {
        return Err(MailproofError::InputShape(format!(
            "audit path has {} layers, tree height is {height}",
            path.depth()
        )));
    }

    let mut run = leaf_values.to_vec();
    let mut lo = first_gidx;
    let mut hi = last_gidx;
    for layer in &path.layers {
        if lo & 1 == 1 {
            run.insert(0, layer.left);
            lo -= 1;
        }
        if hi & 1 == 0 {
            run.push(layer.right);
            hi += 1;
        }
        run = run.chunks(2).map(|pair| hasher.hash2(pair[0], pair[1])).collect();
        lo /= 2;
        hi /= 2;
    }
    Ok(run[0])
}

/// Check a range multiproof against a known root.
pub fn verify_range(
    leaf_values: &[Fr],
    path: &AuditPath,
    height: usize,
    first_gidx: GeneralizedIndex,
    last_gidx: GeneralizedIndex,
    root: &MerkleRoot,
    hasher: &PoseidonHasher,
) -> bool {
    generate_root(leaf_values, path, height, first_gidx, last_gidx, hasher)
        .map(|r| r == root.0)
        .unwrap_or(false)
}
