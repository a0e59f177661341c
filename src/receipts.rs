//! Receipt wire format
//!
//! Receipts record side effects of block execution that are not expressed by
//! any transaction, such as harvest fees and expired artifacts. Every receipt
//! starts with a 4-byte size, a 2-byte version and a 2-byte type; the type
//! selects one of four body shapes.


use crate::codec::{Codec, FixedSize};
use crate::error::{CodecError, Result};
use crate::types::{wire_enum, Address, Mosaic, MosaicId, NamespaceId};
use crate::view::BufferView;

wire_enum! {
    /// Receipt type discriminators.
    ReceiptType: u16 {
        MosaicRentalFee = 4685,
        NamespaceRentalFee = 4942,
        HarvestFee = 8515,
        LockHashCompleted = 8776,
        LockSecretCompleted = 8786,
        LockHashExpired = 9032,
        LockSecretExpired = 9042,
        LockHashCreated = 12616,
        LockSecretCreated = 12626,
        MosaicExpired = 16717,
        NamespaceExpired = 16718,
        NamespaceDeleted = 16974,
        Inflation = 20803,
    }
}

/// Mosaics transferred between two accounts as a side effect, e.g. a rental
/// fee paid to the network currency sink.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BalanceTransferReceipt {
    pub mosaic: Mosaic,
    pub sender_address: Address,
    pub recipient_address: Address,
}

impl FixedSize for BalanceTransferReceipt {
    const SIZE: usize = Mosaic::SIZE + Address::SIZE * 2;
}

impl Codec for BalanceTransferReceipt {
    fn size(&self) -> usize {
        Self::SIZE
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        self.mosaic.write_into(out);
        self.sender_address.write_into(out);
        self.recipient_address.write_into(out);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let mosaic = Mosaic::deserialize(view)?;
        let sender_address = Address::deserialize(view)?;
        let recipient_address = Address::deserialize(view)?;
        Ok(BalanceTransferReceipt {
            mosaic,
            sender_address,
            recipient_address,
        })
    }
}

/// Mosaics credited to or debited from a single account. Whether the change
/// is a credit or a debit is implied by the receipt type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BalanceChangeReceipt {
    pub mosaic: Mosaic,
    pub target_address: Address,
}

impl FixedSize for BalanceChangeReceipt {
    const SIZE: usize = Mosaic::SIZE + Address::SIZE;
}

impl Codec for BalanceChangeReceipt {
    fn size(&self) -> usize {
        Self::SIZE
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        self.mosaic.write_into(out);
        self.target_address.write_into(out);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let mosaic = Mosaic::deserialize(view)?;
        let target_address = Address::deserialize(view)?;
        Ok(BalanceChangeReceipt {
            mosaic,
            target_address,
        })
    }
}

/// Network currency minted by inflation for a block.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InflationReceipt {
    pub mosaic: Mosaic,
}

impl FixedSize for InflationReceipt {
    const SIZE: usize = Mosaic::SIZE;
}

impl Codec for InflationReceipt {
    fn size(&self) -> usize {
        Self::SIZE
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        self.mosaic.write_into(out);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        Ok(InflationReceipt {
            mosaic: Mosaic::deserialize(view)?,
        })
    }
}

/// An artifact (mosaic or namespace) whose lifetime ended at this block.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactExpiryReceipt<Id> {
    pub artifact_id: Id,
}

impl<Id: FixedSize> FixedSize for ArtifactExpiryReceipt<Id> {
    const SIZE: usize = Id::SIZE;
}

impl<Id: Codec> Codec for ArtifactExpiryReceipt<Id> {
    fn size(&self) -> usize {
        self.artifact_id.size()
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        self.artifact_id.write_into(out);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        Ok(ArtifactExpiryReceipt {
            artifact_id: Id::deserialize(view)?,
        })
    }
}

macro_rules! receipt_family {
    (
        $(#[$meta:meta])*
        $body_enum:ident {
            $($variant:ident($body:ty) => $rtype:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $body_enum {
            $($variant($body)),+
        }

        impl $body_enum {
            pub fn receipt_type(&self) -> ReceiptType {
                match self {
                    $(Self::$variant(_) => ReceiptType::$rtype),+
                }
            }

            fn size(&self) -> usize {
                match self {
                    $(Self::$variant(body) => body.size()),+
                }
            }

            fn write_into(&self, out: &mut Vec<u8>) {
                match self {
                    $(Self::$variant(body) => body.write_into(out)),+
                }
            }

            fn deserialize_by_discriminator(
                receipt_type: ReceiptType,
                view: &mut BufferView<'_>,
            ) -> Result<Self> {
                match receipt_type {
                    $(ReceiptType::$rtype => Ok(Self::$variant(<$body>::deserialize(view)?))),+
                }
            }
        }
    };
}

receipt_family! {
    /// Body of a receipt, one variant per receipt type.
    ReceiptBody {
        HarvestFee(BalanceChangeReceipt) => HarvestFee,
        Inflation(InflationReceipt) => Inflation,
        LockHashCreated(BalanceChangeReceipt) => LockHashCreated,
        LockHashCompleted(BalanceChangeReceipt) => LockHashCompleted,
        LockHashExpired(BalanceChangeReceipt) => LockHashExpired,
        LockSecretCreated(BalanceChangeReceipt) => LockSecretCreated,
        LockSecretCompleted(BalanceChangeReceipt) => LockSecretCompleted,
        LockSecretExpired(BalanceChangeReceipt) => LockSecretExpired,
        MosaicExpired(ArtifactExpiryReceipt<MosaicId>) => MosaicExpired,
        MosaicRentalFee(BalanceTransferReceipt) => MosaicRentalFee,
        NamespaceExpired(ArtifactExpiryReceipt<NamespaceId>) => NamespaceExpired,
        NamespaceDeleted(ArtifactExpiryReceipt<NamespaceId>) => NamespaceDeleted,
        NamespaceRentalFee(BalanceTransferReceipt) => NamespaceRentalFee,
    }
}

/// A receipt recorded by block execution.
///
/// The version is carried through as-is; unlike transactions, receipt bodies
/// are selected by type alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Receipt {
    pub version: u16,
    pub body: ReceiptBody,
}

impl Receipt {
    pub const HEADER_SIZE: usize = 4 + 2 + 2;

    pub fn receipt_type(&self) -> ReceiptType {
        self.body.receipt_type()
    }
}

impl Codec for Receipt {
    fn size(&self) -> usize {
        Self::HEADER_SIZE + self.body.size()
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        (self.size() as u32).write_into(out);
        self.version.write_into(out);
        self.receipt_type().write_into(out);
        self.body.write_into(out);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let mut peek = *view;
        let total_size = u32::deserialize(&mut peek)?;
        let _ = u16::deserialize(&mut peek)?;
        let receipt_type = ReceiptType::deserialize(&mut peek)?;

        let mut entity = view.shrink(total_size as usize)?;
        let declared = u32::deserialize(&mut entity)? as usize;
        let version = u16::deserialize(&mut entity)?;
        let _ = ReceiptType::deserialize(&mut entity)?;
        let body = ReceiptBody::deserialize_by_discriminator(receipt_type, &mut entity)?;
        if !entity.is_empty() {
            return Err(CodecError::MismatchedEntitySize {
                declared,
                consumed: declared - entity.remaining(),
            });
        }
        Ok(Receipt { version, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Amount;

    fn harvest_fee() -> Receipt {
        Receipt {
            version: 1,
            body: ReceiptBody::HarvestFee(BalanceChangeReceipt {
                mosaic: Mosaic {
                    mosaic_id: MosaicId(0x85bb_ea6c_c462_b244),
                    amount: Amount(38_000),
                },
                target_address: Address([0x61; 24]),
            }),
        }
    }

    #[test]
    fn harvest_fee_round_trip() {
        let receipt = harvest_fee();
        let bytes = receipt.serialize();
        assert_eq!(bytes.len(), 8 + 16 + 24);
        assert_eq!(Receipt::deserialize_from(&bytes).unwrap(), receipt);
    }

    #[test]
    fn artifact_expiry_round_trip_for_both_artifact_kinds() {
        let mosaic_expired = Receipt {
            version: 1,
            body: ReceiptBody::MosaicExpired(ArtifactExpiryReceipt {
                artifact_id: MosaicId(0x265f_50e2_0525_eaf4),
            }),
        };
        assert_eq!(
            Receipt::deserialize_from(&mosaic_expired.serialize()).unwrap(),
            mosaic_expired
        );

        let namespace_deleted = Receipt {
            version: 1,
            body: ReceiptBody::NamespaceDeleted(ArtifactExpiryReceipt {
                artifact_id: NamespaceId(0xd85d_4bc1_83a0_d513),
            }),
        };
        let bytes = namespace_deleted.serialize();
        assert_eq!(bytes.len(), 16);
        assert_eq!(
            Receipt::deserialize_from(&bytes).unwrap(),
            namespace_deleted
        );
    }

    #[test]
    fn rental_fee_uses_balance_transfer_shape() {
        let receipt = Receipt {
            version: 1,
            body: ReceiptBody::NamespaceRentalFee(BalanceTransferReceipt {
                mosaic: Mosaic {
                    mosaic_id: MosaicId(1),
                    amount: Amount(2),
                },
                sender_address: Address([0x10; 24]),
                recipient_address: Address([0x20; 24]),
            }),
        };
        let bytes = receipt.serialize();
        assert_eq!(bytes.len(), 8 + 16 + 48);
        assert_eq!(Receipt::deserialize_from(&bytes).unwrap(), receipt);
    }

    #[test]
    fn unknown_receipt_type_is_rejected() {
        let mut bytes = harvest_fee().serialize();
        bytes[6..8].copy_from_slice(&0xffffu16.to_le_bytes());
        assert_eq!(
            Receipt::deserialize_from(&bytes),
            Err(CodecError::InvalidEnumValue {
                name: "ReceiptType",
                value: 0xffff,
            })
        );
    }

    #[test]
    fn receipt_with_trailing_bytes_is_rejected() {
        let receipt = harvest_fee();
        let mut bytes = receipt.serialize();
        let inflated = (receipt.size() + 2) as u32;
        bytes[0..4].copy_from_slice(&inflated.to_le_bytes());
        bytes.extend_from_slice(&[0u8; 2]);
        assert!(matches!(
            Receipt::deserialize_from(&bytes),
            Err(CodecError::MismatchedEntitySize { .. })
        ));
    }

    #[test]
    fn receipt_version_is_preserved() {
        let receipt = Receipt {
            version: 7,
            body: ReceiptBody::Inflation(InflationReceipt {
                mosaic: Mosaic {
                    mosaic_id: MosaicId(3),
                    amount: Amount(4),
                },
            }),
        };
        let decoded = Receipt::deserialize_from(&receipt.serialize()).unwrap();
        assert_eq!(decoded.version, 7);
        assert_eq!(decoded.receipt_type(), ReceiptType::Inflation);
    }
}
