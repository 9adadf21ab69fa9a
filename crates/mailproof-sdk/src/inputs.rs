// Copyright 2026 Mailproof Contributors
// Licensed under the Apache License, Version 2.0

//! Circuit-input assembly: DKIM witness + target fragment → the named
//! input vector the proving system consumes.
//!
//! The email/DKIM verification collaborator is opaque: it parses the raw
//! email, checks the DKIM signature, and hands back the byte arrays and
//! RSA limbs below. This module adds what the circuit needs on top — the
//! located offsets, the zero-padded fragment, the submitter address as a
//! field element, and (for range-proof disclosures) the body tree's root,
//! bounding generalized indices, and pruned audit path.
//!
//! Every value in the output vector is a decimal string; the whole record
//! serializes to the prover's JSON input file via serde.

use ark_bn254::Fr;
use ark_ff::PrimeField;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use mailproof_poseidon::PoseidonHasher;
use mailproof_types::{leaf_gindex, MAX_CONTENT_LEN};

use crate::error::{MailproofError, MailproofResult};
use crate::locate::locate;
use crate::merkle::MerkleTree;

/// Output of the email/DKIM verification collaborator, taken as opaque and
/// trusted. Byte arrays arrive already padded to the circuit's fixed
/// widths; RSA limbs arrive as decimal strings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DkimWitness {
    pub header: Vec<u8>,
    pub header_len: u32,
    pub pubkey: Vec<String>,
    pub signature: Vec<String>,
    pub body: Vec<u8>,
    pub body_len: u32,
    pub body_hash_idx: u32,
    pub precomputed_sha: Vec<u8>,
}

/// The named input vector for the proving system. Field order and names
/// match the circuit's signal declarations; values are decimal strings.
#[derive(Clone, Debug, Serialize)]
pub struct EmailCircuitInputs {
    pub in_padded: Vec<String>,
    pub in_len_padded_bytes: String,
    pub pubkey: Vec<String>,
    pub signature: Vec<String>,
    pub in_body_padded: Vec<String>,
    pub in_body_len_padded_bytes: String,
    pub precomputed_sha: Vec<String>,
    pub body_hash_idx: String,
    pub content: Vec<String>,
    pub content_len: String,
    pub content_idx: String,
    pub from_idx: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merkle_root: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit_path: Option<Vec<[String; 2]>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_gidx: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_gidx: Option<String>,
}

impl EmailCircuitInputs {
    /// The prover's JSON input file.
    pub fn to_json(&self) -> MailproofResult<String> {
        serde_json::to_string(self).map_err(|e| MailproofError::Other(e.into()))
    }
}

/// Assemble inputs for a plain disclosure (content position checked by the
/// circuit over the revealed body).
pub fn assemble(
    witness: &DkimWitness,
    fragment: &str,
    address: &[u8],
) -> MailproofResult<EmailCircuitInputs> {
    assemble_inner(witness, fragment, address, None)
}

/// Assemble inputs for a range-proof disclosure: additionally builds the
/// body tree and attaches root, bounding generalized indices, and the
/// pruned audit path.
pub fn assemble_with_range_proof(
    witness: &DkimWitness,
    fragment: &str,
    address: &[u8],
    hasher: &PoseidonHasher,
) -> MailproofResult<EmailCircuitInputs> {
    assemble_inner(witness, fragment, address, Some(hasher))
}

fn assemble_inner(
    witness: &DkimWitness,
    fragment: &str,
    address: &[u8],
    hasher: Option<&PoseidonHasher>,
) -> MailproofResult<EmailCircuitInputs> {
    let fragment_bytes = fragment.as_bytes();
    if fragment_bytes.len() > MAX_CONTENT_LEN {
        return Err(MailproofError::InputShape(format!(
            "content fragment is {} bytes, circuit maximum is {MAX_CONTENT_LEN}",
            fragment_bytes.len()
        )));
    }

    // locate first: an absent fragment aborts before any hashing work
    let loc = locate(&witness.body, &witness.header, fragment_bytes)?;

    let mut content: Vec<String> = fragment_bytes.iter().map(|b| b.to_string()).collect();
    content.resize(MAX_CONTENT_LEN, "0".to_string());

    let address_fr = Fr::from_be_bytes_mod_order(address);

    let mut inputs = EmailCircuitInputs {
        in_padded: bytes_to_dec(&witness.header),
        in_len_padded_bytes: witness.header_len.to_string(),
        pubkey: witness.pubkey.clone(),
        signature: witness.signature.clone(),
        in_body_padded: bytes_to_dec(&witness.body),
        in_body_len_padded_bytes: witness.body_len.to_string(),
        precomputed_sha: bytes_to_dec(&witness.precomputed_sha),
        body_hash_idx: witness.body_hash_idx.to_string(),
        content,
        content_len: fragment_bytes.len().to_string(),
        content_idx: loc.content_idx.to_string(),
        from_idx: loc.from_idx.to_string(),
        address: fr_to_dec(&address_fr),
        merkle_root: None,
        audit_path: None,
        first_gidx: None,
        last_gidx: None,
    };

    if let Some(hasher) = hasher {
        // the tree range covers the whole fragment, so the bounded-prefix
        // match from locate() must extend to a byte-exact substring
        let end = loc.content_idx + fragment_bytes.len();
        if end > witness.body.len() || &witness.body[loc.content_idx..end] != fragment_bytes {
            return Err(MailproofError::NotFound("content fragment"));
        }

        let tree = MerkleTree::build(&witness.body, hasher)?;
        let first = loc.content_idx;
        let last = end - 1;
        let path = tree.multi_proof(first, last)?;

        inputs.merkle_root = Some(fr_to_dec(&tree.root().0));
        inputs.audit_path = Some(
            path.layers
                .iter()
                .map(|pair| [fr_to_dec(&pair.left), fr_to_dec(&pair.right)])
                .collect(),
        );
        inputs.first_gidx = Some(leaf_gindex(tree.height(), first).to_string());
        inputs.last_gidx = Some(leaf_gindex(tree.height(), last).to_string());
    }

    Ok(inputs)
}

fn bytes_to_dec(bytes: &[u8]) -> Vec<String> {
    bytes.iter().map(|b| b.to_string()).collect()
}

pub(crate) fn fr_to_dec(fr: &Fr) -> String {
    BigUint::from(fr.into_bigint()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merkle::verify_range;

    const FRAGMENT: &str =
        "Material Substitution: The existing flame-retardant will be replaced with teflon";

    fn witness() -> DkimWitness {
        let body = format!("Quarterly update follows. {FRAGMENT} across the 700 series.");
        DkimWitness {
            header: b"from:whistleblower@acme.example\r\nsubject:q3\r\n".to_vec(),
            header_len: 45,
            pubkey: vec!["121".into(), "20".into(), "3".into()],
            signature: vec!["77".into(), "4".into(), "9".into()],
            body: body.into_bytes(),
            body_len: 129,
            body_hash_idx: 17,
            precomputed_sha: vec![1, 2, 3, 4],
        }
    }

    #[test]
    fn content_padded_to_fixed_width() {
        let inputs = assemble(&witness(), FRAGMENT, &[0xaa; 20]).unwrap();
        assert_eq!(inputs.content.len(), MAX_CONTENT_LEN);
        assert_eq!(inputs.content_len, FRAGMENT.len().to_string());
        assert_eq!(inputs.content[0], b'M'.to_string());
        assert!(inputs.content[FRAGMENT.len()..].iter().all(|s| s == "0"));
    }

    #[test]
    fn offsets_and_witness_fields_carried() {
        let w = witness();
        let inputs = assemble(&w, FRAGMENT, &[0xaa; 20]).unwrap();
        assert_eq!(inputs.content_idx, "26");
        assert_eq!(inputs.from_idx, "0");
        assert_eq!(inputs.in_padded.len(), w.header.len());
        assert_eq!(inputs.in_body_padded.len(), w.body.len());
        assert_eq!(inputs.pubkey, w.pubkey);
        assert_eq!(inputs.signature, w.signature);
        assert_eq!(inputs.body_hash_idx, "17");
    }

    #[test]
    fn address_is_unsigned_integer_over_raw_bytes() {
        let inputs = assemble(&witness(), FRAGMENT, &[0x01, 0x00]).unwrap();
        assert_eq!(inputs.address, "256");
    }

    #[test]
    fn plain_mode_omits_tree_fields() {
        let inputs = assemble(&witness(), FRAGMENT, &[0xaa; 20]).unwrap();
        let json = inputs.to_json().unwrap();
        assert!(!json.contains("merkle_root"));
        assert!(!json.contains("audit_path"));
    }

    #[test]
    fn range_proof_mode_attaches_consistent_tree_fields() {
        let hasher = PoseidonHasher::new();
        let w = witness();
        let inputs = assemble_with_range_proof(&w, FRAGMENT, &[0xaa; 20], &hasher).unwrap();

        let tree = MerkleTree::build(&w.body, &hasher).unwrap();
        assert_eq!(inputs.merkle_root.as_deref(), Some(fr_to_dec(&tree.root().0).as_str()));

        let path = inputs.audit_path.unwrap();
        assert_eq!(path.len(), tree.height());

        let first = 26;
        let last = first + FRAGMENT.len() - 1;
        assert_eq!(
            inputs.first_gidx.as_deref(),
            Some(leaf_gindex(tree.height(), first).to_string().as_str())
        );
        assert_eq!(
            inputs.last_gidx.as_deref(),
            Some(leaf_gindex(tree.height(), last).to_string().as_str())
        );

        // the attached path verifies the fragment bytes against the root
        let values: Vec<Fr> = FRAGMENT.bytes().map(|b| Fr::from(b as u64)).collect();
        let audit = tree.multi_proof(first, last).unwrap();
        assert!(verify_range(
            &values,
            &audit,
            tree.height(),
            leaf_gindex(tree.height(), first),
            leaf_gindex(tree.height(), last),
            &tree.root(),
            &hasher,
        ));
    }

    #[test]
    fn absent_fragment_propagates_not_found() {
        assert!(matches!(
            assemble(&witness(), "no such text anywhere", &[0xaa; 20]),
            Err(MailproofError::NotFound("content fragment"))
        ));
    }

    #[test]
    fn oversized_fragment_rejected() {
        let too_long = "x".repeat(MAX_CONTENT_LEN + 1);
        assert!(matches!(
            assemble(&witness(), &too_long, &[0xaa; 20]),
            Err(MailproofError::InputShape(_))
        ));
    }

    #[test]
    fn prefix_match_with_divergent_tail_fails_range_mode() {
        // locate() accepts the bounded prefix; range mode must reject a
        // fragment that is not a byte-exact substring
        let hasher = PoseidonHasher::new();
        let divergent = "Material Substitution entirely different tail";
        assert!(assemble(&witness(), divergent, &[0xaa; 20]).is_ok());
        assert!(matches!(
            assemble_with_range_proof(&witness(), divergent, &[0xaa; 20], &hasher),
            Err(MailproofError::NotFound("content fragment"))
        ));
    }
}
