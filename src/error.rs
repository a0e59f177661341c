//! Error types for wire-format encoding and decoding

use thiserror::Error;

/// Failure conditions for a decode operation.
///
/// Every variant is fatal to the enclosing decode: no partial entity is ever
/// returned. Callers that need resilience against corrupt input must discard the
/// whole buffer, not attempt recovery mid-entity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("insufficient bytes: needed {needed}, {remaining} remaining")]
    InsufficientBytes { needed: usize, remaining: usize },

    #[error("invalid {name} enumeration value: {value}")]
    InvalidEnumValue { name: &'static str, value: u64 },

    #[error("reserved field {name} must be zero, got {value}")]
    NonZeroReservedField { name: &'static str, value: u64 },

    #[error("unknown {family} discriminator: type {entity_type:#06x} version {version}")]
    UnknownDiscriminator {
        family: &'static str,
        entity_type: u16,
        version: u8,
    },

    #[error("unknown {family} name: {name}")]
    UnknownEntityName { family: &'static str, name: String },

    #[error("entity declared size {declared} but decoding consumed {consumed} bytes")]
    MismatchedEntitySize { declared: usize, consumed: usize },

    #[error("element in variable-size array has invalid zero size")]
    InvalidElementSize,

    #[error("alignment padding of {padding} bytes exceeds the {remaining} bytes remaining")]
    InvalidAlignmentPadding { padding: usize, remaining: usize },
}

pub type Result<T> = std::result::Result<T, CodecError>;
