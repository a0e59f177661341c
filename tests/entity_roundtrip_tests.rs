//! End-to-end round-trip coverage across the entity catalogs

use catapult_codec::blocks::{
    Block, BlockBody, BlockType, ImportanceBlockFooter, VrfProof,
};
use catapult_codec::codec::Codec;
use catapult_codec::receipts::{
    ArtifactExpiryReceipt, BalanceChangeReceipt, BalanceTransferReceipt, InflationReceipt,
    Receipt, ReceiptBody,
};
use catapult_codec::state::{
    AccountRestrictions, AccountRestrictionsInfo, AccountRestrictionValues, AccountState,
    AccountType, HashLockInfo, LockStatus, MetadataEntry, MetadataType, MosaicDefinition,
    MosaicEntry, NamespaceAlias, NamespaceLifetime, NamespacePath, RootNamespaceHistory,
    SecretLockInfo,
};
use catapult_codec::transactions::{
    AccountAddressRestrictionTransactionBody, AccountRestrictionFlags, AggregateTransactionBody,
    Cosignature, EmbeddedTransaction, EmbeddedTransactionBody, LockHashAlgorithm,
    MosaicDefinitionTransactionBody, MosaicFlags, Transaction, TransactionBody, TransactionType,
    TransferTransactionBody,
};
use catapult_codec::types::{
    Address, Amount, BlockDuration, BlockFeeMultiplier, Difficulty, Hash256, Height, Mosaic,
    MosaicId, MosaicNonce, MosaicRestrictionKey, NamespaceId, NetworkType, ProofGamma,
    ProofScalar, ProofVerificationHash, PublicKey, ScopedMetadataKey, Signature, Timestamp,
    UnresolvedAddress, UnresolvedMosaic, UnresolvedMosaicId,
};

const TRANSACTION_NAMES: &[&str] = &[
    "account_key_link_transaction_v1",
    "node_key_link_transaction_v1",
    "aggregate_complete_transaction_v1",
    "aggregate_complete_transaction_v2",
    "aggregate_bonded_transaction_v1",
    "aggregate_bonded_transaction_v2",
    "voting_key_link_transaction_v1",
    "vrf_key_link_transaction_v1",
    "hash_lock_transaction_v1",
    "secret_lock_transaction_v1",
    "secret_proof_transaction_v1",
    "account_metadata_transaction_v1",
    "mosaic_metadata_transaction_v1",
    "namespace_metadata_transaction_v1",
    "mosaic_definition_transaction_v1",
    "mosaic_supply_change_transaction_v1",
    "mosaic_supply_revocation_transaction_v1",
    "multisig_account_modification_transaction_v1",
    "address_alias_transaction_v1",
    "mosaic_alias_transaction_v1",
    "namespace_registration_transaction_v1",
    "account_address_restriction_transaction_v1",
    "account_mosaic_restriction_transaction_v1",
    "account_operation_restriction_transaction_v1",
    "mosaic_address_restriction_transaction_v1",
    "mosaic_global_restriction_transaction_v1",
    "transfer_transaction_v1",
];

#[test]
fn every_catalog_transaction_round_trips() {
    for name in TRANSACTION_NAMES {
        let transaction = Transaction::create_by_name(name).unwrap();
        let bytes = transaction.serialize();
        assert_eq!(bytes.len(), transaction.size(), "{name}");
        let decoded = Transaction::deserialize_from(&bytes).unwrap();
        assert_eq!(decoded, transaction, "{name}");
        // re-encode must reproduce the exact input bytes
        assert_eq!(decoded.serialize(), bytes, "{name}");
    }
}

#[test]
fn every_embedded_catalog_transaction_round_trips() {
    for name in TRANSACTION_NAMES {
        if name.starts_with("aggregate_") {
            assert!(EmbeddedTransaction::create_by_name(name).is_err(), "{name}");
            continue;
        }
        let embedded = EmbeddedTransaction::create_by_name(name).unwrap();
        let bytes = embedded.serialize();
        assert_eq!(bytes.len(), embedded.size(), "{name}");
        assert_eq!(
            EmbeddedTransaction::deserialize_from(&bytes).unwrap(),
            embedded,
            "{name}"
        );
    }
}

#[test]
fn minimal_transfer_matches_reference_bytes() {
    let transaction = Transaction {
        signature: Signature([0x11; 64]),
        signer_public_key: PublicKey([0x22; 32]),
        network: NetworkType::Testnet,
        fee: Amount(100),
        deadline: Timestamp(200),
        body: TransactionBody::TransferV1(TransferTransactionBody {
            recipient_address: UnresolvedAddress([0x33; 24]),
            mosaics: vec![],
            message: vec![],
        }),
    };
    let signature_hex = "11".repeat(64);
    let signer_hex = "22".repeat(32);
    let recipient_hex = "33".repeat(24);
    let expected = [
        "a0000000",           // size = 160
        "00000000",           // verifiable entity header reserved
        signature_hex.as_str(),
        signer_hex.as_str(),
        "00000000",           // entity body reserved
        "01",                 // version
        "98",                 // network = testnet
        "5441",               // type = transfer (0x4154 LE)
        "6400000000000000",   // fee
        "c800000000000000",   // deadline
        recipient_hex.as_str(),
        "0000",               // message size
        "00",                 // mosaics count
        "00",                 // reserved
        "00000000",           // reserved
    ]
    .concat();
    assert_eq!(hex::encode(transaction.serialize()), expected);
}

#[test]
fn aggregate_padding_example_from_generated_vectors() {
    // two embedded transfers of raw sizes 121 and 130 occupy 128 + 136 bytes
    let embedded_with_message = |message_len: usize| EmbeddedTransaction {
        signer_public_key: PublicKey([0x01; 32]),
        network: NetworkType::Testnet,
        body: EmbeddedTransactionBody::TransferV1(TransferTransactionBody {
            recipient_address: UnresolvedAddress([0x02; 24]),
            mosaics: vec![],
            message: vec![0xaa; message_len],
        }),
    };
    // embedded header 48 + transfer fixed fields 32 + message
    let first = embedded_with_message(41);
    let second = embedded_with_message(50);
    assert_eq!(first.size(), 121);
    assert_eq!(second.size(), 130);

    let body = AggregateTransactionBody {
        transactions_hash: Hash256([0x03; 32]),
        transactions: vec![first, second],
        cosignatures: vec![],
    };
    assert_eq!(body.payload_size(), 264);

    let bytes = body.serialize();
    assert_eq!(bytes.len(), 32 + 4 + 4 + 264);
    assert_eq!(AggregateTransactionBody::deserialize_from(&bytes).unwrap(), body);
}

fn block_with_body(body: BlockBody) -> Block {
    Block {
        signature: Signature([0x04; 64]),
        signer_public_key: PublicKey([0x05; 32]),
        network: NetworkType::Mainnet,
        height: Height(1_000_000),
        timestamp: Timestamp(84_055_841_951),
        difficulty: Difficulty(11_527_429_947_341),
        generation_hash_proof: VrfProof {
            gamma: ProofGamma([0x06; 32]),
            verification_hash: ProofVerificationHash([0x07; 16]),
            scalar: ProofScalar([0x08; 32]),
        },
        previous_block_hash: Hash256([0x09; 32]),
        transactions_hash: Hash256([0x0a; 32]),
        receipts_hash: Hash256([0x0b; 32]),
        state_hash: Hash256([0x0c; 32]),
        beneficiary_address: Address([0x0d; 24]),
        fee_multiplier: BlockFeeMultiplier(1000),
        body,
    }
}

#[test]
fn block_containing_aggregate_transaction_round_trips() {
    let aggregate = Transaction {
        signature: Signature([0x0e; 64]),
        signer_public_key: PublicKey([0x0f; 32]),
        network: NetworkType::Mainnet,
        fee: Amount(5000),
        deadline: Timestamp(1234),
        body: TransactionBody::AggregateCompleteV2(AggregateTransactionBody {
            transactions_hash: Hash256([0x10; 32]),
            transactions: vec![EmbeddedTransaction::create_by_name(
                "mosaic_definition_transaction_v1",
            )
            .unwrap()],
            cosignatures: vec![Cosignature {
                version: 0,
                signer_public_key: PublicKey([0x12; 32]),
                signature: Signature([0x13; 64]),
            }],
        }),
    };
    let plain = Transaction::create_by_name("transfer_transaction_v1").unwrap();

    let block = block_with_body(BlockBody::NormalV1 {
        transactions: vec![aggregate, plain],
    });
    assert_eq!(block.block_type(), BlockType::Normal);
    let bytes = block.serialize();
    assert_eq!(bytes.len(), block.size());
    assert_eq!(Block::deserialize_from(&bytes).unwrap(), block);
}

#[test]
fn importance_and_nemesis_blocks_round_trip() {
    let footer = ImportanceBlockFooter {
        voting_eligible_accounts_count: 5,
        harvesting_eligible_accounts_count: 100,
        total_voting_balance: Amount(3_000_000),
        previous_importance_block_hash: Hash256([0x14; 32]),
    };
    for body in [
        BlockBody::ImportanceV1 {
            footer,
            transactions: vec![],
        },
        BlockBody::NemesisV1 {
            footer,
            transactions: vec![Transaction::create_by_name("transfer_transaction_v1").unwrap()],
        },
    ] {
        let block = block_with_body(body);
        let bytes = block.serialize();
        assert_eq!(Block::deserialize_from(&bytes).unwrap(), block);
    }
}

#[test]
fn every_receipt_shape_round_trips() {
    let mosaic = Mosaic {
        mosaic_id: MosaicId(0x85bb_ea6c_c462_b244),
        amount: Amount(1_000),
    };
    let change = BalanceChangeReceipt {
        mosaic,
        target_address: Address([0x15; 24]),
    };
    let transfer = BalanceTransferReceipt {
        mosaic,
        sender_address: Address([0x16; 24]),
        recipient_address: Address([0x17; 24]),
    };
    let bodies = [
        ReceiptBody::HarvestFee(change),
        ReceiptBody::Inflation(InflationReceipt { mosaic }),
        ReceiptBody::LockHashCreated(change),
        ReceiptBody::LockHashCompleted(change),
        ReceiptBody::LockHashExpired(change),
        ReceiptBody::LockSecretCreated(change),
        ReceiptBody::LockSecretCompleted(change),
        ReceiptBody::LockSecretExpired(change),
        ReceiptBody::MosaicExpired(ArtifactExpiryReceipt {
            artifact_id: MosaicId(1),
        }),
        ReceiptBody::MosaicRentalFee(transfer),
        ReceiptBody::NamespaceExpired(ArtifactExpiryReceipt {
            artifact_id: NamespaceId(2),
        }),
        ReceiptBody::NamespaceDeleted(ArtifactExpiryReceipt {
            artifact_id: NamespaceId(3),
        }),
        ReceiptBody::NamespaceRentalFee(transfer),
    ];
    for body in bodies {
        let receipt = Receipt { version: 1, body };
        let bytes = receipt.serialize();
        assert_eq!(bytes.len(), receipt.size());
        let decoded = Receipt::deserialize_from(&bytes).unwrap();
        assert_eq!(decoded, receipt);
        assert_eq!(decoded.receipt_type(), receipt.receipt_type());
    }
}

#[test]
fn state_entries_round_trip() {
    let account = AccountState {
        version: 1,
        address: Address([0x18; 24]),
        address_height: Height(2),
        public_key: PublicKey([0x19; 32]),
        public_key_height: Height(2),
        account_type: AccountType::Remote,
        linked_public_key: Some(PublicKey([0x1a; 32])),
        node_public_key: None,
        vrf_public_key: None,
        voting_public_keys: vec![],
        high_value: None,
        balances: vec![],
    };
    assert_eq!(
        AccountState::deserialize_from(&account.serialize()).unwrap(),
        account
    );

    let mosaic_entry = MosaicEntry {
        version: 1,
        mosaic_id: MosaicId(4),
        supply: Amount(5),
        definition: MosaicDefinition {
            start_height: Height(6),
            owner_address: Address([0x1b; 24]),
            revision: 7,
            flags: MosaicFlags::RESTRICTABLE,
            divisibility: 3,
            duration: BlockDuration(8),
        },
    };
    assert_eq!(
        MosaicEntry::deserialize_from(&mosaic_entry.serialize()).unwrap(),
        mosaic_entry
    );

    let history = RootNamespaceHistory {
        version: 1,
        id: NamespaceId(9),
        owner_address: Address([0x1c; 24]),
        lifetime: NamespaceLifetime {
            lifetime_start: Height(10),
            lifetime_end: Height(11),
        },
        root_alias: NamespaceAlias::None,
        paths: vec![NamespacePath {
            path: vec![NamespaceId(12)],
            alias: NamespaceAlias::Mosaic(MosaicId(13)),
        }],
    };
    assert_eq!(
        RootNamespaceHistory::deserialize_from(&history.serialize()).unwrap(),
        history
    );

    let hash_lock = HashLockInfo {
        version: 1,
        owner_address: Address([0x1d; 24]),
        mosaic_id: MosaicId(14),
        amount: Amount(15),
        end_height: Height(16),
        status: LockStatus::Used,
        hash: Hash256([0x1e; 32]),
    };
    assert_eq!(
        HashLockInfo::deserialize_from(&hash_lock.serialize()).unwrap(),
        hash_lock
    );

    let secret_lock = SecretLockInfo {
        version: 1,
        owner_address: Address([0x1f; 24]),
        mosaic_id: MosaicId(17),
        amount: Amount(18),
        end_height: Height(19),
        status: LockStatus::Unused,
        hash_algorithm: LockHashAlgorithm::Hash160,
        secret: Hash256([0x20; 32]),
        recipient: Address([0x21; 24]),
    };
    assert_eq!(
        SecretLockInfo::deserialize_from(&secret_lock.serialize()).unwrap(),
        secret_lock
    );

    let metadata = MetadataEntry {
        version: 1,
        source_address: Address([0x22; 24]),
        target_address: Address([0x23; 24]),
        scoped_metadata_key: ScopedMetadataKey(20),
        target_id: 21,
        metadata_type: MetadataType::Namespace,
        value: b"catapult".to_vec(),
    };
    assert_eq!(
        MetadataEntry::deserialize_from(&metadata.serialize()).unwrap(),
        metadata
    );

    let restrictions = AccountRestrictions {
        version: 1,
        address: Address([0x24; 24]),
        restrictions: vec![AccountRestrictionsInfo {
            outgoing: false,
            block: false,
            values: AccountRestrictionValues::MosaicIds(vec![MosaicId(22), MosaicId(23)]),
        }],
    };
    assert_eq!(
        AccountRestrictions::deserialize_from(&restrictions.serialize()).unwrap(),
        restrictions
    );
}

#[test]
fn undefined_flag_bits_decode_and_round_trip() {
    // bit-flag sets are open: codes outside the defined set must be accepted
    // and carried through unchanged, never rejected like closed enums
    let definition = MosaicDefinitionTransactionBody {
        id: MosaicId(1),
        duration: BlockDuration(2),
        nonce: MosaicNonce(3),
        flags: MosaicFlags(0x42), // 0x40 is not a defined bit
        divisibility: 4,
    };
    let bytes = definition.serialize();
    let decoded = MosaicDefinitionTransactionBody::deserialize_from(&bytes).unwrap();
    assert_eq!(decoded.flags, MosaicFlags(0x42));
    assert!(decoded.flags.has(MosaicFlags::TRANSFERABLE));
    assert_eq!(decoded.serialize(), bytes);

    let restriction = AccountAddressRestrictionTransactionBody {
        restriction_flags: AccountRestrictionFlags::ADDRESS | AccountRestrictionFlags(0x2000),
        restriction_additions: vec![UnresolvedAddress([0x27; 24])],
        restriction_deletions: vec![],
    };
    let bytes = restriction.serialize();
    let decoded = AccountAddressRestrictionTransactionBody::deserialize_from(&bytes).unwrap();
    assert_eq!(decoded, restriction);
    assert!(decoded.restriction_flags.has(AccountRestrictionFlags(0x2000)));
}

#[test]
fn account_state_with_only_node_key_round_trips() {
    use catapult_codec::state::AccountKeyTypeFlags;
    let account = AccountState {
        version: 1,
        address: Address([0x28; 24]),
        address_height: Height(3),
        public_key: PublicKey([0x29; 32]),
        public_key_height: Height(3),
        account_type: AccountType::Main,
        linked_public_key: None,
        node_public_key: Some(PublicKey([0x2a; 32])),
        vrf_public_key: None,
        voting_public_keys: vec![],
        high_value: None,
        balances: vec![],
    };
    let bytes = account.serialize();
    let decoded = AccountState::deserialize_from(&bytes).unwrap();
    assert_eq!(decoded, account);
    assert_eq!(
        decoded.supplemental_public_keys_mask(),
        AccountKeyTypeFlags::NODE
    );
}

#[test]
fn transaction_with_sorted_mosaics_round_trips() {
    let transaction = Transaction {
        signature: Signature::default(),
        signer_public_key: PublicKey::default(),
        network: NetworkType::Testnet,
        fee: Amount(0),
        deadline: Timestamp(0),
        body: TransactionBody::TransferV1(TransferTransactionBody {
            recipient_address: UnresolvedAddress([0x25; 24]),
            mosaics: vec![
                UnresolvedMosaic {
                    mosaic_id: UnresolvedMosaicId(1),
                    amount: Amount(10),
                },
                UnresolvedMosaic {
                    mosaic_id: UnresolvedMosaicId(2),
                    amount: Amount(20),
                },
                UnresolvedMosaic {
                    mosaic_id: UnresolvedMosaicId(3),
                    amount: Amount(30),
                },
            ],
            message: b"\0Hello, Symbol!".to_vec(),
        }),
    };
    assert_eq!(transaction.transaction_type(), TransactionType::Transfer);
    let bytes = transaction.serialize();
    assert_eq!(Transaction::deserialize_from(&bytes).unwrap(), transaction);
}

#[test]
fn mosaic_restriction_key_value_sets_round_trip() {
    use catapult_codec::state::{
        AddressKeyValue, MosaicAddressRestrictionEntry, MosaicRestrictionEntry,
    };
    let entry = MosaicRestrictionEntry::Address {
        version: 1,
        entry: MosaicAddressRestrictionEntry {
            mosaic_id: MosaicId(24),
            address: Address([0x26; 24]),
            key_pairs: vec![
                AddressKeyValue {
                    key: MosaicRestrictionKey(1),
                    value: 1,
                },
                AddressKeyValue {
                    key: MosaicRestrictionKey(9),
                    value: 2,
                },
            ],
        },
    };
    assert_eq!(
        MosaicRestrictionEntry::deserialize_from(&entry.serialize()).unwrap(),
        entry
    );
}
