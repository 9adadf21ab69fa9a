// Copyright 2026 Mailproof Contributors
// Licensed under the Apache License, Version 2.0

//! # mailproof-sdk
//!
//! Cryptographic pipeline for **Mailproof** — prove that a text fragment
//! appears at a provable position inside a DKIM-signed email, without
//! revealing the email, and hand the resulting Groth16 proof to an
//! on-chain verifier.
//!
//! The SNARK circuit, the prover, the DKIM verifier, and the platform's
//! HTTP/storage glue are external collaborators. This crate owns the data
//! transforms between them: content location, the body-range Merkle
//! multiproof, circuit-input assembly, and the verifier's byte encodings.
//!
//! ## Crate layout
//!
//! | Module | Purpose |
//! |---|---|
//! | *crate root* | Re-exports shared types (`PoseidonHasher`, `AuditPath`, …) |
//! | [`locate`] | Fragment / from-header byte offsets in the email |
//! | [`merkle`] | Body tree, range multiproofs, root recomputation |
//! | [`inputs`] | DKIM witness + fragment → prover input vector |
//! | [`codec`] | Projective BN254 points → compressed verifier bytes |
//! | [`serialize`] | 160-byte proof buffer, 32·N-byte public signals |
//! | [`error`] | Pipeline error taxonomy |
//!
//! ## Typical submission flow
//!
//! ```rust,no_run
//! use mailproof_sdk::inputs::{assemble_with_range_proof, DkimWitness};
//! use mailproof_sdk::serialize::{serialize_proof, serialize_public_signals, Proof};
//! use mailproof_sdk::PoseidonHasher;
//!
//! # fn example(witness: &DkimWitness, prover_json: &str, signals: &[String])
//! # -> mailproof_sdk::MailproofResult<()> {
//! // 1. One hasher per process, shared by reference
//! let hasher = PoseidonHasher::new();
//!
//! // 2. Witness (from the DKIM collaborator) + fragment → prover inputs
//! let fragment = "will be replaced with teflon";
//! let submitter = [0u8; 20];
//! let inputs = assemble_with_range_proof(witness, fragment, &submitter, &hasher)?;
//! let input_json = inputs.to_json()?;
//!
//! // 3. Prover (external) consumes input_json, returns proof + signals
//!
//! // 4. Encode for the on-chain verifier
//! let proof = Proof::from_prover_json(prover_json)?;
//! let proof_bytes = serialize_proof(&proof)?;
//! let signal_bytes = serialize_public_signals(signals)?;
//! # let _ = (input_json, proof_bytes, signal_bytes);
//! # Ok(())
//! # }
//! ```

// Re-exports from mailproof-types
pub use mailproof_types::{
    leaf_gindex, AuditPath, ContentLocation, GeneralizedIndex, MerkleRoot, SiblingPair,
    LOCATE_PREFIX_LEN, MAX_CONTENT_LEN,
};

// Re-export from mailproof-poseidon
pub use mailproof_poseidon::PoseidonHasher;

pub mod codec;
pub mod error;
pub mod inputs;
pub mod locate;
pub mod merkle;
pub mod serialize;

pub use error::{MailproofError, MailproofResult};
