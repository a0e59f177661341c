//! Property-based round-trip and size-fidelity coverage

use proptest::prelude::*;

use catapult_codec::codec::Codec;
use catapult_codec::receipts::{BalanceChangeReceipt, Receipt, ReceiptBody};
use catapult_codec::transactions::{
    Cosignature, SecretProofTransactionBody, Transaction, TransactionBody,
    TransferTransactionBody,
};
use catapult_codec::types::{
    Address, Amount, Hash256, Mosaic, MosaicId, NetworkType, PublicKey, Signature, Timestamp,
    UnresolvedAddress, UnresolvedMosaic, UnresolvedMosaicId,
};

prop_compose! {
    fn arb_unresolved_mosaics()(count in 0usize..5, base in 1u64..u64::MAX / 2) -> Vec<UnresolvedMosaic> {
        // ascending ids, as producers are required to supply them
        (0..count)
            .map(|index| UnresolvedMosaic {
                mosaic_id: UnresolvedMosaicId(base / 2 + index as u64),
                amount: Amount(base.wrapping_add(index as u64)),
            })
            .collect()
    }
}

prop_compose! {
    fn arb_transfer()(
        signature in prop::array::uniform32(any::<u8>()),
        signer in prop::array::uniform32(any::<u8>()),
        recipient in prop::array::uniform24(any::<u8>()),
        fee in any::<u64>(),
        deadline in any::<u64>(),
        mosaics in arb_unresolved_mosaics(),
        message in prop::collection::vec(any::<u8>(), 0..64),
        testnet in any::<bool>(),
    ) -> Transaction {
        let mut full_signature = [0u8; 64];
        full_signature[..32].copy_from_slice(&signature);
        full_signature[32..].copy_from_slice(&signature);
        Transaction {
            signature: Signature(full_signature),
            signer_public_key: PublicKey(signer),
            network: if testnet { NetworkType::Testnet } else { NetworkType::Mainnet },
            fee: Amount(fee),
            deadline: Timestamp(deadline),
            body: TransactionBody::TransferV1(TransferTransactionBody {
                recipient_address: UnresolvedAddress(recipient),
                mosaics,
                message,
            }),
        }
    }
}

proptest! {
    #[test]
    fn transfer_round_trip_is_identity(transaction in arb_transfer()) {
        let bytes = transaction.serialize();
        prop_assert_eq!(bytes.len(), transaction.size());
        let decoded = Transaction::deserialize_from(&bytes).unwrap();
        prop_assert_eq!(&decoded, &transaction);
        // byte fidelity: re-encoding reproduces the input exactly
        prop_assert_eq!(decoded.serialize(), bytes);
    }

    #[test]
    fn transfer_leading_size_equals_buffer_length(transaction in arb_transfer()) {
        let bytes = transaction.serialize();
        let declared = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        prop_assert_eq!(declared as usize, bytes.len());
    }

    #[test]
    fn truncated_transfer_never_decodes(transaction in arb_transfer(), fraction in 0.0f64..1.0) {
        let bytes = transaction.serialize();
        let cut = (bytes.len() as f64 * fraction) as usize;
        prop_assert!(cut < bytes.len());
        prop_assert!(Transaction::deserialize_from(&bytes[..cut]).is_err());
    }

    #[test]
    fn secret_proof_round_trip(
        recipient in prop::array::uniform24(any::<u8>()),
        secret in prop::array::uniform32(any::<u8>()),
        proof in prop::collection::vec(any::<u8>(), 0..512),
    ) {
        let body = SecretProofTransactionBody {
            recipient_address: UnresolvedAddress(recipient),
            secret: Hash256(secret),
            hash_algorithm: Default::default(),
            proof,
        };
        let bytes = body.serialize();
        prop_assert_eq!(bytes.len(), body.size());
        prop_assert_eq!(SecretProofTransactionBody::deserialize_from(&bytes).unwrap(), body);
    }

    #[test]
    fn cosignature_round_trip(version in any::<u64>(), signer in prop::array::uniform32(any::<u8>())) {
        let cosignature = Cosignature {
            version,
            signer_public_key: PublicKey(signer),
            signature: Signature([0x77; 64]),
        };
        let bytes = cosignature.serialize();
        prop_assert_eq!(bytes.len(), 104);
        prop_assert_eq!(Cosignature::deserialize_from(&bytes).unwrap(), cosignature);
    }

    #[test]
    fn receipt_round_trip(
        version in any::<u16>(),
        mosaic_id in any::<u64>(),
        amount in any::<u64>(),
        target in prop::array::uniform24(any::<u8>()),
    ) {
        let receipt = Receipt {
            version,
            body: ReceiptBody::HarvestFee(BalanceChangeReceipt {
                mosaic: Mosaic {
                    mosaic_id: MosaicId(mosaic_id),
                    amount: Amount(amount),
                },
                target_address: Address(target),
            }),
        };
        let bytes = receipt.serialize();
        prop_assert_eq!(bytes.len(), receipt.size());
        prop_assert_eq!(Receipt::deserialize_from(&bytes).unwrap(), receipt);
    }
}
