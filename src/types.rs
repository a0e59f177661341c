//! POD value types shared across the wire format
//!
//! Every type here wraps exactly one primitive integer or fixed-length byte
//! sequence, giving it a semantic name and a compile-time-constant wire size.
//! Round-trips are total: any bit pattern of the correct width is valid.


use crate::codec::{Codec, FixedSize};
use crate::error::{CodecError, Result};
use crate::view::BufferView;

/// Defines a newtype wrapper around a little-endian unsigned integer.
macro_rules! integer_value_type {
    ($($(#[$meta:meta])* $name:ident($repr:ty)),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[repr(transparent)]
            #[derive(
                Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
                serde::Serialize, serde::Deserialize,
            )]
            pub struct $name(pub $repr);

            impl FixedSize for $name {
                const SIZE: usize = std::mem::size_of::<$repr>();
            }

            impl Codec for $name {
                fn size(&self) -> usize {
                    Self::SIZE
                }

                fn write_into(&self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.0.to_le_bytes());
                }

                fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
                    Ok($name(<$repr>::deserialize(view)?))
                }
            }

            impl From<$repr> for $name {
                fn from(value: $repr) -> Self {
                    $name(value)
                }
            }

            impl From<$name> for $repr {
                fn from(value: $name) -> Self {
                    value.0
                }
            }
        )+
    };
}

/// Defines a newtype wrapper around a fixed-length opaque byte array.
macro_rules! byte_array_type {
    ($($(#[$meta:meta])* $name:ident[$len:expr]),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[repr(transparent)]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            pub struct $name(pub [u8; $len]);

            impl FixedSize for $name {
                const SIZE: usize = $len;
            }

            impl Codec for $name {
                fn size(&self) -> usize {
                    Self::SIZE
                }

                fn write_into(&self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.0);
                }

                fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
                    Ok($name(view.read_array::<$len>()?))
                }
            }

            // not derived: [u8; N] only implements Default for N <= 32
            impl Default for $name {
                fn default() -> Self {
                    $name([0u8; $len])
                }
            }

            impl From<[u8; $len]> for $name {
                fn from(bytes: [u8; $len]) -> Self {
                    $name(bytes)
                }
            }

            impl AsRef<[u8]> for $name {
                fn as_ref(&self) -> &[u8] {
                    &self.0
                }
            }
        )+
    };
}

/// Defines a closed enumeration backed by a fixed-width integer.
///
/// Deserializing a code outside the declared set fails with
/// [`CodecError::InvalidEnumValue`]; serialization is the identity mapping to
/// the stored integer.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident: $repr:ty { $($(#[$vmeta:meta])* $variant:ident = $value:expr),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[repr($repr)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* $variant = $value),+
        }

        impl $name {
            pub fn from_value(value: $repr) -> Result<Self> {
                match value {
                    $($value => Ok($name::$variant),)+
                    _ => Err(CodecError::InvalidEnumValue {
                        name: stringify!($name),
                        value: u64::from(value),
                    }),
                }
            }

            pub fn value(self) -> $repr {
                self as $repr
            }
        }

        impl FixedSize for $name {
            const SIZE: usize = std::mem::size_of::<$repr>();
        }

        impl Codec for $name {
            fn size(&self) -> usize {
                Self::SIZE
            }

            fn write_into(&self, out: &mut Vec<u8>) {
                out.extend_from_slice(&self.value().to_le_bytes());
            }

            fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
                Self::from_value(<$repr>::deserialize(view)?)
            }
        }
    };
}

/// Defines an open bit-flag set backed by a fixed-width integer.
///
/// Any combination of bits is representable; decode never rejects. Membership
/// is tested with [`has`](Self::has), bitwise AND against a declared flag.
macro_rules! flag_set {
    (
        $(#[$meta:meta])*
        $name:ident: $repr:ty { $($(#[$fmeta:meta])* $flag:ident = $value:expr),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(
            Debug, Default, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
        )]
        pub struct $name(pub $repr);

        impl $name {
            $($(#[$fmeta])* pub const $flag: $name = $name($value);)+

            pub fn has(self, flag: $name) -> bool {
                0 != self.0 & flag.0
            }
        }

        impl std::ops::BitOr for $name {
            type Output = $name;

            fn bitor(self, rhs: $name) -> $name {
                $name(self.0 | rhs.0)
            }
        }

        impl FixedSize for $name {
            const SIZE: usize = std::mem::size_of::<$repr>();
        }

        impl Codec for $name {
            fn size(&self) -> usize {
                Self::SIZE
            }

            fn write_into(&self, out: &mut Vec<u8>) {
                out.extend_from_slice(&self.0.to_le_bytes());
            }

            fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
                Ok($name(<$repr>::deserialize(view)?))
            }
        }
    };
}

pub(crate) use byte_array_type;
pub(crate) use flag_set;
pub(crate) use integer_value_type;
pub(crate) use wire_enum;

integer_value_type! {
    /// Mosaic quantity in absolute (smallest) units.
    Amount(u64),
    /// Duration expressed in number of blocks; 0 means unlimited.
    BlockDuration(u64),
    /// Multiplier applied to transaction sizes to compute block fees.
    BlockFeeMultiplier(u32),
    /// Block generation difficulty.
    Difficulty(u64),
    FinalizationEpoch(u32),
    FinalizationPoint(u32),
    /// Chain height.
    Height(u64),
    /// Account importance score.
    Importance(u64),
    /// Height at which an importance snapshot was taken.
    ImportanceHeight(u64),
    /// Resolved mosaic identifier.
    MosaicId(u64),
    /// Random nonce used when generating a mosaic identifier.
    MosaicNonce(u32),
    MosaicRestrictionKey(u64),
    /// Resolved namespace identifier.
    NamespaceId(u64),
    /// Metadata key scoped to source, target and type.
    ScopedMetadataKey(u64),
    /// Number of milliseconds since the network epoch.
    Timestamp(u64),
    /// Mosaic identifier that may still be a namespace alias.
    UnresolvedMosaicId(u64),
}

byte_array_type! {
    /// Resolved network address (25 bytes packed into 24 on this network).
    Address[24],
    Hash256[32],
    Hash512[64],
    /// 256-bit Ed25519 public key.
    PublicKey[32],
    ProofGamma[32],
    ProofScalar[32],
    ProofVerificationHash[16],
    /// 512-bit Ed25519 signature.
    Signature[64],
    /// Address that may still be a namespace alias.
    UnresolvedAddress[24],
    VotingPublicKey[32],
}

wire_enum! {
    /// Network on which an entity is valid.
    NetworkType: u8 {
        Mainnet = 104,
        Testnet = 152,
    }
}

impl Default for NetworkType {
    fn default() -> Self {
        NetworkType::Mainnet
    }
}

/// A quantity of a certain mosaic.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Mosaic {
    pub mosaic_id: MosaicId,
    pub amount: Amount,
}

impl FixedSize for Mosaic {
    const SIZE: usize = MosaicId::SIZE + Amount::SIZE;
}

impl Codec for Mosaic {
    fn size(&self) -> usize {
        Self::SIZE
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        self.mosaic_id.write_into(out);
        self.amount.write_into(out);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let mosaic_id = MosaicId::deserialize(view)?;
        let amount = Amount::deserialize(view)?;
        Ok(Mosaic { mosaic_id, amount })
    }
}

/// A quantity of a certain mosaic, specified either directly or via an alias.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UnresolvedMosaic {
    pub mosaic_id: UnresolvedMosaicId,
    pub amount: Amount,
}

impl FixedSize for UnresolvedMosaic {
    const SIZE: usize = UnresolvedMosaicId::SIZE + Amount::SIZE;
}

impl Codec for UnresolvedMosaic {
    fn size(&self) -> usize {
        Self::SIZE
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        self.mosaic_id.write_into(out);
        self.amount.write_into(out);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let mosaic_id = UnresolvedMosaicId::deserialize(view)?;
        let amount = Amount::deserialize(view)?;
        Ok(UnresolvedMosaic { mosaic_id, amount })
    }
}
