// Copyright 2026 Mailproof Contributors
// Licensed under the Apache License, Version 2.0

//! Typed errors for the proof pipeline.
//!
//! Every variant aborts the current proof attempt; callers retry with
//! corrected input. No stage returns a partial or truncated buffer.

#[derive(Debug, thiserror::Error)]
pub enum MailproofError {
    #[error("input shape: {0}")]
    InputShape(String),

    #[error("{0} not found in email")]
    NotFound(&'static str),

    #[error("value exceeds 256 bits: {0}")]
    FieldOverflow(String),

    #[error("leaf range {first}..={last} out of bounds for {leaves} leaves")]
    IndexOutOfRange {
        first: usize,
        last: usize,
        leaves: usize,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type MailproofResult<T> = Result<T, MailproofError>;
