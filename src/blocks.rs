//! Block wire format: shared header, per-type footers, transaction fill
//!
//! Blocks share a single header layout (size, reserved, signature, signer,
//! reserved, version, network, type, then chain fields) and diverge only in a
//! short footer before the transaction payload. The payload is an implicit
//! fill: full signed transactions back to back until the declared block size
//! is exhausted, each padded to an 8-byte boundary except the last.


use crate::arrays;
use crate::codec::{Codec, FixedSize};
use crate::error::{CodecError, Result};
use crate::transactions::Transaction;
use crate::types::{
    wire_enum, Address, Amount, BlockFeeMultiplier, Difficulty, Hash256, Height, NetworkType,
    ProofGamma, ProofScalar, ProofVerificationHash, PublicKey, Signature, Timestamp,
};
use crate::view::BufferView;

wire_enum! {
    /// Block type discriminators.
    BlockType: u16 {
        Nemesis = 32835,
        Normal = 33091,
        Importance = 33347,
    }
}

/// Verifiable random function proof attached to every block, proving the
/// harvester was eligible without revealing its VRF private key.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VrfProof {
    pub gamma: ProofGamma,
    pub verification_hash: ProofVerificationHash,
    pub scalar: ProofScalar,
}

impl FixedSize for VrfProof {
    const SIZE: usize = ProofGamma::SIZE + ProofVerificationHash::SIZE + ProofScalar::SIZE;
}

impl Codec for VrfProof {
    fn size(&self) -> usize {
        Self::SIZE
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        self.gamma.write_into(out);
        self.verification_hash.write_into(out);
        self.scalar.write_into(out);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let gamma = ProofGamma::deserialize(view)?;
        let verification_hash = ProofVerificationHash::deserialize(view)?;
        let scalar = ProofScalar::deserialize(view)?;
        Ok(VrfProof {
            gamma,
            verification_hash,
            scalar,
        })
    }
}

/// Extra footer carried by nemesis and importance blocks, snapshotting the
/// voting set at the start of an importance grouping.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportanceBlockFooter {
    pub voting_eligible_accounts_count: u32,
    pub harvesting_eligible_accounts_count: u64,
    pub total_voting_balance: Amount,
    pub previous_importance_block_hash: Hash256,
}

impl FixedSize for ImportanceBlockFooter {
    const SIZE: usize = 4 + 8 + Amount::SIZE + Hash256::SIZE;
}

impl Codec for ImportanceBlockFooter {
    fn size(&self) -> usize {
        Self::SIZE
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        self.voting_eligible_accounts_count.write_into(out);
        self.harvesting_eligible_accounts_count.write_into(out);
        self.total_voting_balance.write_into(out);
        self.previous_importance_block_hash.write_into(out);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let voting_eligible_accounts_count = u32::deserialize(view)?;
        let harvesting_eligible_accounts_count = u64::deserialize(view)?;
        let total_voting_balance = Amount::deserialize(view)?;
        let previous_importance_block_hash = Hash256::deserialize(view)?;
        Ok(ImportanceBlockFooter {
            voting_eligible_accounts_count,
            harvesting_eligible_accounts_count,
            total_voting_balance,
            previous_importance_block_hash,
        })
    }
}

/// Per-type fields following the shared block header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockBody {
    /// First block of the chain; carries the importance footer.
    NemesisV1 {
        footer: ImportanceBlockFooter,
        transactions: Vec<Transaction>,
    },
    /// Ordinary block.
    NormalV1 { transactions: Vec<Transaction> },
    /// Last block of an importance grouping.
    ImportanceV1 {
        footer: ImportanceBlockFooter,
        transactions: Vec<Transaction>,
    },
}

impl BlockBody {
    pub fn block_type(&self) -> BlockType {
        match self {
            BlockBody::NemesisV1 { .. } => BlockType::Nemesis,
            BlockBody::NormalV1 { .. } => BlockType::Normal,
            BlockBody::ImportanceV1 { .. } => BlockType::Importance,
        }
    }

    pub fn version(&self) -> u8 {
        1
    }

    pub fn transactions(&self) -> &[Transaction] {
        match self {
            BlockBody::NemesisV1 { transactions, .. }
            | BlockBody::NormalV1 { transactions }
            | BlockBody::ImportanceV1 { transactions, .. } => transactions,
        }
    }

    fn size(&self) -> usize {
        let transactions_size = arrays::size_of_aligned_elements(self.transactions(), 8, true);
        match self {
            BlockBody::NormalV1 { .. } => 4 + transactions_size,
            BlockBody::NemesisV1 { .. } | BlockBody::ImportanceV1 { .. } => {
                ImportanceBlockFooter::SIZE + transactions_size
            }
        }
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        match self {
            BlockBody::NormalV1 { transactions } => {
                0u32.write_into(out); // reserved
                arrays::write_aligned_elements(out, transactions, 8, true);
            }
            BlockBody::NemesisV1 {
                footer,
                transactions,
            }
            | BlockBody::ImportanceV1 {
                footer,
                transactions,
            } => {
                footer.write_into(out);
                arrays::write_aligned_elements(out, transactions, 8, true);
            }
        }
    }

    fn deserialize_by_discriminator(
        block_type: BlockType,
        version: u8,
        view: &mut BufferView<'_>,
    ) -> Result<Self> {
        match (block_type, version) {
            (BlockType::Normal, 1) => {
                view.read_reserved_u32("block_header_reserved_1")?;
                let transactions =
                    arrays::read_aligned_fill(view, Transaction::deserialize, 8, true)?;
                Ok(BlockBody::NormalV1 { transactions })
            }
            (BlockType::Nemesis, 1) => {
                let footer = ImportanceBlockFooter::deserialize(view)?;
                let transactions =
                    arrays::read_aligned_fill(view, Transaction::deserialize, 8, true)?;
                Ok(BlockBody::NemesisV1 {
                    footer,
                    transactions,
                })
            }
            (BlockType::Importance, 1) => {
                let footer = ImportanceBlockFooter::deserialize(view)?;
                let transactions =
                    arrays::read_aligned_fill(view, Transaction::deserialize, 8, true)?;
                Ok(BlockBody::ImportanceV1 {
                    footer,
                    transactions,
                })
            }
            _ => Err(CodecError::UnknownDiscriminator {
                family: "block",
                entity_type: block_type.value(),
                version,
            }),
        }
    }
}

/// Generic block header, shared by all block types.
struct BlockHeader {
    total_size: u32,
    signature: Signature,
    signer_public_key: PublicKey,
    version: u8,
    network: NetworkType,
    block_type: BlockType,
    height: Height,
    timestamp: Timestamp,
    difficulty: Difficulty,
    generation_hash_proof: VrfProof,
    previous_block_hash: Hash256,
    transactions_hash: Hash256,
    receipts_hash: Hash256,
    state_hash: Hash256,
    beneficiary_address: Address,
    fee_multiplier: BlockFeeMultiplier,
}

impl BlockHeader {
    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let total_size = u32::deserialize(view)?;
        view.read_reserved_u32("verifiable_entity_header_reserved_1")?;
        let signature = Signature::deserialize(view)?;
        let signer_public_key = PublicKey::deserialize(view)?;
        view.read_reserved_u32("entity_body_reserved_1")?;
        let version = u8::deserialize(view)?;
        let network = NetworkType::deserialize(view)?;
        let block_type = BlockType::deserialize(view)?;
        let height = Height::deserialize(view)?;
        let timestamp = Timestamp::deserialize(view)?;
        let difficulty = Difficulty::deserialize(view)?;
        let generation_hash_proof = VrfProof::deserialize(view)?;
        let previous_block_hash = Hash256::deserialize(view)?;
        let transactions_hash = Hash256::deserialize(view)?;
        let receipts_hash = Hash256::deserialize(view)?;
        let state_hash = Hash256::deserialize(view)?;
        let beneficiary_address = Address::deserialize(view)?;
        let fee_multiplier = BlockFeeMultiplier::deserialize(view)?;
        Ok(BlockHeader {
            total_size,
            signature,
            signer_public_key,
            version,
            network,
            block_type,
            height,
            timestamp,
            difficulty,
            generation_hash_proof,
            previous_block_hash,
            transactions_hash,
            receipts_hash,
            state_hash,
            beneficiary_address,
            fee_multiplier,
        })
    }
}

/// A signed block.
///
/// As with transactions, the version and type discriminator are derived from
/// the body variant rather than stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub signature: Signature,
    pub signer_public_key: PublicKey,
    pub network: NetworkType,
    pub height: Height,
    pub timestamp: Timestamp,
    pub difficulty: Difficulty,
    pub generation_hash_proof: VrfProof,
    pub previous_block_hash: Hash256,
    pub transactions_hash: Hash256,
    pub receipts_hash: Hash256,
    pub state_hash: Hash256,
    pub beneficiary_address: Address,
    pub fee_multiplier: BlockFeeMultiplier,
    pub body: BlockBody,
}

impl Block {
    /// Fixed number of header bytes preceding the per-type fields.
    pub const HEADER_SIZE: usize = 4
        + 4
        + Signature::SIZE
        + PublicKey::SIZE
        + 4
        + 1
        + 1
        + 2
        + Height::SIZE
        + Timestamp::SIZE
        + Difficulty::SIZE
        + VrfProof::SIZE
        + Hash256::SIZE * 4
        + Address::SIZE
        + BlockFeeMultiplier::SIZE;

    pub fn block_type(&self) -> BlockType {
        self.body.block_type()
    }

    pub fn version(&self) -> u8 {
        self.body.version()
    }
}

impl Codec for Block {
    fn size(&self) -> usize {
        Self::HEADER_SIZE + self.body.size()
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        (self.size() as u32).write_into(out);
        0u32.write_into(out); // verifiable entity header reserved
        self.signature.write_into(out);
        self.signer_public_key.write_into(out);
        0u32.write_into(out); // entity body reserved
        self.version().write_into(out);
        self.network.write_into(out);
        self.block_type().write_into(out);
        self.height.write_into(out);
        self.timestamp.write_into(out);
        self.difficulty.write_into(out);
        self.generation_hash_proof.write_into(out);
        self.previous_block_hash.write_into(out);
        self.transactions_hash.write_into(out);
        self.receipts_hash.write_into(out);
        self.state_hash.write_into(out);
        self.beneficiary_address.write_into(out);
        self.fee_multiplier.write_into(out);
        self.body.write_into(out);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        // peek the header for size and discriminator, then re-decode the whole
        // block from its start inside a size-bounded sub-view
        let mut peek = *view;
        let peeked = BlockHeader::deserialize(&mut peek)?;

        let mut entity = view.shrink(peeked.total_size as usize)?;
        let header = BlockHeader::deserialize(&mut entity)?;
        let body =
            BlockBody::deserialize_by_discriminator(peeked.block_type, peeked.version, &mut entity)?;
        if !entity.is_empty() {
            let declared = header.total_size as usize;
            return Err(CodecError::MismatchedEntitySize {
                declared,
                consumed: declared - entity.remaining(),
            });
        }
        Ok(Block {
            signature: header.signature,
            signer_public_key: header.signer_public_key,
            network: header.network,
            height: header.height,
            timestamp: header.timestamp,
            difficulty: header.difficulty,
            generation_hash_proof: header.generation_hash_proof,
            previous_block_hash: header.previous_block_hash,
            transactions_hash: header.transactions_hash,
            receipts_hash: header.receipts_hash,
            state_hash: header.state_hash,
            beneficiary_address: header.beneficiary_address,
            fee_multiplier: header.fee_multiplier,
            body,
        })
    }
}
