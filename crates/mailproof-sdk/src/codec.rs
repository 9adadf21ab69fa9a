// Copyright 2026 Mailproof Contributors
// Licensed under the Apache License, Version 2.0

//! Projective BN254 points → the on-chain verifier's compressed layout.
//!
//! The external prover hands curve points back as projective decimal
//! coordinate triples. The verifier contract consumes fixed-size buffers
//! instead: 32 bytes for G1, 64 for G2.
//!
//! # Byte order
//!
//! - Affine x, little-endian, fills the buffer (x.a0 then x.a1 for G2).
//! - Bit 6 of the final byte — point at infinity.
//! - Bit 7 of the final byte — sign: set iff affine y is the "largest" of
//!   {y, p−y} (for G2, compared on the a1 component first).
//!
//! Both flag bits sit above the 254-bit field modulus, so they never
//! collide with coordinate data.

use ark_bn254::{Fq, Fq2};
use ark_ff::{BigInteger, Field, One, PrimeField, Zero};
use num_bigint::BigUint;

use crate::error::{MailproofError, MailproofResult};

/// Infinity marker, bit 6 of the final byte.
pub const INFINITY_FLAG: u8 = 0x40;
/// Sign marker, bit 7 of the final byte.
pub const SIGN_FLAG: u8 = 0x80;

pub const G1_COMPRESSED_LEN: usize = 32;
pub const G2_COMPRESSED_LEN: usize = 64;

/// A G1 point in projective (Jacobian) coordinates, as received from the
/// prover. `(0, 0, 1)` is the canonical infinity representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct G1Point {
    pub x: Fq,
    pub y: Fq,
    pub z: Fq,
}

impl G1Point {
    /// Parse a projective `[x, y, z]` (or affine `[x, y]`) decimal triple.
    pub fn from_decimal<S: AsRef<str>>(coords: &[S]) -> MailproofResult<Self> {
        match coords {
            [x, y] => Ok(Self {
                x: parse_fq(x.as_ref())?,
                y: parse_fq(y.as_ref())?,
                z: Fq::one(),
            }),
            [x, y, z] => Ok(Self {
                x: parse_fq(x.as_ref())?,
                y: parse_fq(y.as_ref())?,
                z: parse_fq(z.as_ref())?,
            }),
            _ => Err(MailproofError::InputShape(format!(
                "G1 point has {} coordinates, expected 2 or 3",
                coords.len()
            ))),
        }
    }

    pub fn is_infinity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero() && self.z.is_one()
    }

    /// Jacobian → affine: `(x·z⁻², y·z⁻³)`. Infinity must be handled by the
    /// caller first; any other non-invertible z is malformed input.
    pub fn to_affine(&self) -> MailproofResult<(Fq, Fq)> {
        if self.z.is_one() {
            return Ok((self.x, self.y));
        }
        let zinv = self
            .z
            .inverse()
            .ok_or_else(|| MailproofError::InputShape("G1 projective z is not invertible".into()))?;
        let zinv2 = zinv.square();
        Ok((self.x * zinv2, self.y * zinv2 * zinv))
    }

    /// Compress to the verifier's 32-byte layout.
    pub fn compress(&self) -> MailproofResult<[u8; G1_COMPRESSED_LEN]> {
        let mut out = [0u8; G1_COMPRESSED_LEN];
        if self.is_infinity() {
            out[G1_COMPRESSED_LEN - 1] |= INFINITY_FLAG;
            return Ok(out);
        }
        let (x, y) = self.to_affine()?;
        out.copy_from_slice(&fq_to_bytes_le(&x));
        if y_is_largest(&y) {
            out[G1_COMPRESSED_LEN - 1] |= SIGN_FLAG;
        }
        Ok(out)
    }
}

/// A G2 point in projective (Jacobian) coordinates over Fq2 = Fq\[i\]/(i²+1).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct G2Point {
    pub x: Fq2,
    pub y: Fq2,
    pub z: Fq2,
}

impl G2Point {
    /// Parse projective `[[x0,x1],[y0,y1],[z0,z1]]` (or the affine two-row
    /// form) decimal coordinates.
    pub fn from_decimal<S, C>(coords: &[C]) -> MailproofResult<Self>
    where
        S: AsRef<str>,
        C: AsRef<[S]>,
    {
        let comps = coords
            .iter()
            .map(|c| parse_fq2(c.as_ref()))
            .collect::<MailproofResult<Vec<_>>>()?;
        match comps.as_slice() {
            [x, y] => Ok(Self {
                x: *x,
                y: *y,
                z: Fq2::one(),
            }),
            [x, y, z] => Ok(Self {
                x: *x,
                y: *y,
                z: *z,
            }),
            _ => Err(MailproofError::InputShape(format!(
                "G2 point has {} coordinates, expected 2 or 3",
                comps.len()
            ))),
        }
    }

    pub fn is_infinity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero() && self.z.is_one()
    }

    /// Jacobian → affine over Fq2. Extension-field inversion follows
    /// `1/(a0+a1·i) = (a0−a1·i)/(a0²+a1²)`.
    pub fn to_affine(&self) -> MailproofResult<(Fq2, Fq2)> {
        if self.z.is_one() {
            return Ok((self.x, self.y));
        }
        let zinv = self
            .z
            .inverse()
            .ok_or_else(|| MailproofError::InputShape("G2 projective z is not invertible".into()))?;
        let zinv2 = zinv.square();
        Ok((self.x * zinv2, self.y * zinv2 * zinv))
    }

    /// Compress to the verifier's 64-byte layout: x.a0 then x.a1, each 32
    /// little-endian bytes; sign compared on y.a1, falling back to y.a0
    /// when y.a1 is zero.
    pub fn compress(&self) -> MailproofResult<[u8; G2_COMPRESSED_LEN]> {
        let mut out = [0u8; G2_COMPRESSED_LEN];
        if self.is_infinity() {
            out[G2_COMPRESSED_LEN - 1] |= INFINITY_FLAG;
            return Ok(out);
        }
        let (x, y) = self.to_affine()?;
        out[..32].copy_from_slice(&fq_to_bytes_le(&x.c0));
        out[32..].copy_from_slice(&fq_to_bytes_le(&x.c1));
        let largest = if y.c1.is_zero() {
            y_is_largest(&y.c0)
        } else {
            y_is_largest(&y.c1)
        };
        if largest {
            out[G2_COMPRESSED_LEN - 1] |= SIGN_FLAG;
        }
        Ok(out)
    }
}

/// Little-endian canonical bytes of a base-field element, zero-padded to 32.
pub(crate) fn fq_to_bytes_le(f: &Fq) -> [u8; 32] {
    let bytes = f.into_bigint().to_bytes_le();
    let mut out = [0u8; 32];
    out[..bytes.len()].copy_from_slice(&bytes);
    out
}

/// True iff `f > p − f`. Zero counts as smaller.
fn y_is_largest(f: &Fq) -> bool {
    let neg = -*f;
    f.into_bigint() > neg.into_bigint()
}

fn parse_fq(s: &str) -> MailproofResult<Fq> {
    let n = s
        .trim()
        .parse::<BigUint>()
        .map_err(|_| MailproofError::InputShape(format!("not a decimal coordinate: {s:?}")))?;
    if n >= BigUint::from(Fq::MODULUS) {
        return Err(MailproofError::FieldOverflow(s.trim().to_string()));
    }
    Ok(Fq::from(n))
}

fn parse_fq2<S: AsRef<str>>(parts: &[S]) -> MailproofResult<Fq2> {
    match parts {
        [a0, a1] => Ok(Fq2::new(parse_fq(a0.as_ref())?, parse_fq(a1.as_ref())?)),
        _ => Err(MailproofError::InputShape(format!(
            "Fq2 component has {} parts, expected 2",
            parts.len()
        ))),
    }
}
