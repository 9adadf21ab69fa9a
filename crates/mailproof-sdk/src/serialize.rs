// Copyright 2026 Mailproof Contributors
// Licensed under the Apache License, Version 2.0

//! Groth16 proof and public-signal buffers for the on-chain verifier.
//!
//! The verifier contract decodes two buffers, bit-exact:
//!
//! - a 160-byte proof buffer: compressed A at offset 0, compressed B at
//!   offset 32, compressed C at offset 96, tail zero;
//! - a 32·N-byte public-signal buffer: each signal as 32 little-endian
//!   bytes, in input order.
//!
//! # Example
//!
//! ```rust,no_run
//! use mailproof_sdk::serialize::{serialize_proof, serialize_public_signals, Proof};
//!
//! # fn example(prover_json: &str, signals: &[String]) -> mailproof_sdk::MailproofResult<()> {
//! let proof = Proof::from_prover_json(prover_json)?;
//! let proof_bytes = serialize_proof(&proof)?;
//! let signal_bytes = serialize_public_signals(signals)?;
//! // submit (proof_bytes, signal_bytes) to the verifier contract
//! # Ok(())
//! # }
//! ```

use num_bigint::BigUint;
use serde::Deserialize;

use crate::codec::{G1Point, G2Point};
use crate::error::{MailproofError, MailproofResult};

/// Verifier-side proof buffer length.
pub const PROOF_LEN: usize = 160;
/// Bytes per public signal.
pub const SIGNAL_LEN: usize = 32;

/// A Groth16 proof as the ordered triple the prover emits. Produced once,
/// consumed once by [`serialize_proof`].
#[derive(Clone, Debug)]
pub struct Proof {
    pub a: G1Point,
    pub b: G2Point,
    pub c: G1Point,
}

/// Wire mirror of the external prover's JSON output (decimal coordinate
/// strings, projective points).
#[derive(Clone, Debug, Deserialize)]
pub struct ProverProof {
    pub pi_a: Vec<String>,
    pub pi_b: Vec<Vec<String>>,
    pub pi_c: Vec<String>,
}

impl TryFrom<&ProverProof> for Proof {
    type Error = MailproofError;

    fn try_from(wire: &ProverProof) -> MailproofResult<Self> {
        Ok(Self {
            a: G1Point::from_decimal(&wire.pi_a)?,
            b: G2Point::from_decimal(&wire.pi_b)?,
            c: G1Point::from_decimal(&wire.pi_c)?,
        })
    }
}

impl Proof {
    /// Parse the prover's JSON output.
    pub fn from_prover_json(json: &str) -> MailproofResult<Self> {
        let wire: ProverProof = serde_json::from_str(json)
            .map_err(|e| MailproofError::InputShape(format!("prover proof JSON: {e}")))?;
        Proof::try_from(&wire)
    }
}

/// Assemble the 160-byte verifier proof buffer.
pub fn serialize_proof(proof: &Proof) -> MailproofResult<[u8; PROOF_LEN]> {
    let mut out = [0u8; PROOF_LEN];
    out[..32].copy_from_slice(&proof.a.compress()?);
    out[32..96].copy_from_slice(&proof.b.compress()?);
    out[96..128].copy_from_slice(&proof.c.compress()?);
    Ok(out)
}

/// Serialize public signals to 32 little-endian bytes each, concatenated in
/// input order. A signal of 256 bits or more is rejected — never truncated.
pub fn serialize_public_signals<S: AsRef<str>>(signals: &[S]) -> MailproofResult<Vec<u8>> {
    let mut out = Vec::with_capacity(signals.len() * SIGNAL_LEN);
    for signal in signals {
        let s = signal.as_ref().trim();
        let value = s
            .parse::<BigUint>()
            .map_err(|_| MailproofError::InputShape(format!("not a decimal signal: {s:?}")))?;
        let bytes = value.to_bytes_le();
        if bytes.len() > SIGNAL_LEN {
            return Err(MailproofError::FieldOverflow(s.to_string()));
        }
        out.extend_from_slice(&bytes);
        out.extend(std::iter::repeat(0u8).take(SIGNAL_LEN - bytes.len()));
    }
    Ok(out)
}

/// Hex transport form of [`serialize_proof`].
pub fn serialize_proof_hex(proof: &Proof) -> MailproofResult<String> {
    Ok(hex::encode(serialize_proof(proof)?))
}

/// Hex transport form of [`serialize_public_signals`].
pub fn serialize_public_signals_hex<S: AsRef<str>>(signals: &[S]) -> MailproofResult<String> {
    Ok(hex::encode(serialize_public_signals(signals)?))
}
