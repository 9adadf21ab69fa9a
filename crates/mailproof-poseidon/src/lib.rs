use ark_bn254::Fr;
use ark_crypto_primitives::sponge::{
    poseidon::{find_poseidon_ark_and_mds, PoseidonConfig, PoseidonSponge},
    CryptographicSponge, FieldBasedCryptographicSponge,
};
use ark_ff::PrimeField;

const RATE: usize = 2;
const FULL_ROUNDS: usize = 8;
const PARTIAL_ROUNDS: usize = 57;
const ALPHA: u64 = 5;

/// Two-to-one Poseidon hash over the BN254 scalar field.
///
/// The round constants and MDS matrix are derived once in [`PoseidonHasher::new`]
/// and carried by the value; tree and assembler code borrow the hasher rather
/// than rebuilding the config per call. The same parameters back the in-circuit
/// hash, so roots computed here match what the circuit recomputes.
pub struct PoseidonHasher {
    config: PoseidonConfig<Fr>,
}

impl PoseidonHasher {
    pub fn new() -> Self {
        let (ark, mds) = find_poseidon_ark_and_mds::<Fr>(
            Fr::MODULUS_BIT_SIZE as u64,
            RATE,
            FULL_ROUNDS as u64,
            PARTIAL_ROUNDS as u64,
            0,
        );
        Self {
            config: PoseidonConfig::new(FULL_ROUNDS, PARTIAL_ROUNDS, ALPHA, mds, ark, RATE, 1),
        }
    }

    pub fn config(&self) -> &PoseidonConfig<Fr> {
        &self.config
    }

    pub fn hash_many(&self, inputs: &[Fr]) -> Fr {
        let mut sponge = PoseidonSponge::new(&self.config);
        sponge.absorb(&inputs);
        sponge.squeeze_native_field_elements(1)[0]
    }

    pub fn hash2(&self, a: Fr, b: Fr) -> Fr {
        self.hash_many(&[a, b])
    }
}

impl Default for PoseidonHasher {
    fn default() -> Self {
        Self::new()
    }
}
