#![cfg_attr(not(feature = "std"), no_std)]

pub mod content;
pub mod merkle;

pub use content::{ContentLocation, LOCATE_PREFIX_LEN, MAX_CONTENT_LEN};
pub use merkle::{leaf_gindex, AuditPath, GeneralizedIndex, MerkleRoot, SiblingPair};
