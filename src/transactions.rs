//! Transaction wire format: headers, bodies, factories
//!
//! Every top-level transaction shares one header layout:
//! - Total size (4 bytes, little-endian), always equal to the exact number of
//!   bytes produced for the instance
//! - Verifiable-entity reserved field (4 bytes, must be zero)
//! - Signature (64 bytes)
//! - Signer public key (32 bytes)
//! - Entity-body reserved field (4 bytes, must be zero)
//! - Version (1 byte)
//! - Network (1 byte)
//! - Type discriminator (2 bytes, little-endian)
//! - Fee (8 bytes, little-endian)
//! - Deadline (8 bytes, little-endian)
//!
//! followed by variant-specific trailing fields chosen entirely by the
//! discriminator. Embedded transactions (nested inside aggregates) omit the
//! signature, fee and deadline.
//!
//! Factory decoding peeks the generic header from a copied view to learn the
//! total size and the (type, version) pair, then fully re-decodes the entity
//! from its original start offset inside a size-bounded sub-view.


use crate::arrays;
use crate::codec::{Codec, FixedSize};
use crate::error::{CodecError, Result};
use crate::types::{
    flag_set, wire_enum, Address, Amount, BlockDuration, FinalizationEpoch, Hash256, MosaicId,
    MosaicNonce, MosaicRestrictionKey, NamespaceId, NetworkType, PublicKey, ScopedMetadataKey,
    Signature, Timestamp, UnresolvedAddress, UnresolvedMosaic, UnresolvedMosaicId,
    VotingPublicKey,
};
use crate::view::BufferView;

wire_enum! {
    /// Transaction type discriminators. These literal values are part of the
    /// network protocol and must never change.
    TransactionType: u16 {
        AccountKeyLink = 16716,
        NodeKeyLink = 16972,
        AggregateComplete = 16705,
        AggregateBonded = 16961,
        VotingKeyLink = 16707,
        VrfKeyLink = 16963,
        HashLock = 16712,
        SecretLock = 16722,
        SecretProof = 16978,
        AccountMetadata = 16708,
        MosaicMetadata = 16964,
        NamespaceMetadata = 17220,
        MosaicDefinition = 16717,
        MosaicSupplyChange = 16973,
        MosaicSupplyRevocation = 17229,
        MultisigAccountModification = 16725,
        AddressAlias = 16974,
        MosaicAlias = 17230,
        NamespaceRegistration = 16718,
        AccountAddressRestriction = 16720,
        AccountMosaicRestriction = 16976,
        AccountOperationRestriction = 17232,
        MosaicAddressRestriction = 16977,
        MosaicGlobalRestriction = 16721,
        Transfer = 16724,
    }
}

wire_enum! {
    LinkAction: u8 {
        Unlink = 0,
        Link = 1,
    }
}

impl Default for LinkAction {
    fn default() -> Self {
        LinkAction::Unlink
    }
}

wire_enum! {
    /// Algorithm used to hash a secret-lock proof.
    LockHashAlgorithm: u8 {
        Sha3_256 = 0,
        Hash160 = 1,
        Hash256 = 2,
    }
}

impl Default for LockHashAlgorithm {
    fn default() -> Self {
        LockHashAlgorithm::Sha3_256
    }
}

wire_enum! {
    MosaicSupplyChangeAction: u8 {
        Decrease = 0,
        Increase = 1,
    }
}

impl Default for MosaicSupplyChangeAction {
    fn default() -> Self {
        MosaicSupplyChangeAction::Decrease
    }
}

wire_enum! {
    AliasAction: u8 {
        Unlink = 0,
        Link = 1,
    }
}

impl Default for AliasAction {
    fn default() -> Self {
        AliasAction::Unlink
    }
}

wire_enum! {
    NamespaceRegistrationType: u8 {
        Root = 0,
        Child = 1,
    }
}

wire_enum! {
    /// Comparison operator applied by a mosaic global restriction.
    MosaicRestrictionType: u8 {
        None = 0,
        Eq = 1,
        Ne = 2,
        Lt = 3,
        Le = 4,
        Gt = 5,
        Ge = 6,
    }
}

impl Default for MosaicRestrictionType {
    fn default() -> Self {
        MosaicRestrictionType::None
    }
}

flag_set! {
    /// Mosaic property flags. Any bit combination is representable; decode
    /// never rejects.
    MosaicFlags: u8 {
        NONE = 0,
        SUPPLY_MUTABLE = 1,
        TRANSFERABLE = 2,
        RESTRICTABLE = 4,
        REVOKABLE = 8,
    }
}

flag_set! {
    /// Kind and direction of an account restriction.
    AccountRestrictionFlags: u16 {
        ADDRESS = 1,
        MOSAIC_ID = 2,
        TRANSACTION_TYPE = 4,
        OUTGOING = 0x4000,
        BLOCK = 0x8000,
    }
}

/// Cosignature attached to an aggregate transaction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cosignature {
    pub version: u64,
    pub signer_public_key: PublicKey,
    pub signature: Signature,
}

impl FixedSize for Cosignature {
    const SIZE: usize = 8 + PublicKey::SIZE + Signature::SIZE;
}

impl Codec for Cosignature {
    fn size(&self) -> usize {
        Self::SIZE
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        self.version.write_into(out);
        self.signer_public_key.write_into(out);
        self.signature.write_into(out);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let version = u64::deserialize(view)?;
        let signer_public_key = PublicKey::deserialize(view)?;
        let signature = Signature::deserialize(view)?;
        Ok(Cosignature {
            version,
            signer_public_key,
            signature,
        })
    }
}

/// Cosignature detached from an aggregate, carrying the hash of the aggregate
/// it signs. Used by partial-transaction tooling, never nested in an aggregate
/// payload.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DetachedCosignature {
    pub version: u64,
    pub signer_public_key: PublicKey,
    pub signature: Signature,
    pub parent_hash: Hash256,
}

impl FixedSize for DetachedCosignature {
    const SIZE: usize = Cosignature::SIZE + Hash256::SIZE;
}

impl Codec for DetachedCosignature {
    fn size(&self) -> usize {
        Self::SIZE
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        self.version.write_into(out);
        self.signer_public_key.write_into(out);
        self.signature.write_into(out);
        self.parent_hash.write_into(out);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let version = u64::deserialize(view)?;
        let signer_public_key = PublicKey::deserialize(view)?;
        let signature = Signature::deserialize(view)?;
        let parent_hash = Hash256::deserialize(view)?;
        Ok(DetachedCosignature {
            version,
            signer_public_key,
            signature,
            parent_hash,
        })
    }
}

// ============================================================================
// TRANSACTION BODIES
// ============================================================================

/// Delegate the account importance score to a proxy account.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AccountKeyLinkTransactionBody {
    pub linked_public_key: PublicKey,
    pub link_action: LinkAction,
}

/// Link an account with a public key used by TLS to create sessions.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NodeKeyLinkTransactionBody {
    pub linked_public_key: PublicKey,
    pub link_action: LinkAction,
}

macro_rules! key_link_codec {
    ($($body:ident),+) => {
        $(
            impl Codec for $body {
                fn size(&self) -> usize {
                    PublicKey::SIZE + LinkAction::SIZE
                }

                fn write_into(&self, out: &mut Vec<u8>) {
                    self.linked_public_key.write_into(out);
                    self.link_action.write_into(out);
                }

                fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
                    let linked_public_key = PublicKey::deserialize(view)?;
                    let link_action = LinkAction::deserialize(view)?;
                    Ok($body {
                        linked_public_key,
                        link_action,
                    })
                }
            }
        )+
    };
}

key_link_codec!(AccountKeyLinkTransactionBody, NodeKeyLinkTransactionBody);

/// Associate a finalization voting key with an account for a fixed epoch range.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VotingKeyLinkTransactionBody {
    pub linked_public_key: VotingPublicKey,
    pub start_epoch: FinalizationEpoch,
    pub end_epoch: FinalizationEpoch,
    pub link_action: LinkAction,
}

impl Codec for VotingKeyLinkTransactionBody {
    fn size(&self) -> usize {
        VotingPublicKey::SIZE
            + FinalizationEpoch::SIZE * 2
            + LinkAction::SIZE
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        self.linked_public_key.write_into(out);
        self.start_epoch.write_into(out);
        self.end_epoch.write_into(out);
        self.link_action.write_into(out);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let linked_public_key = VotingPublicKey::deserialize(view)?;
        let start_epoch = FinalizationEpoch::deserialize(view)?;
        let end_epoch = FinalizationEpoch::deserialize(view)?;
        let link_action = LinkAction::deserialize(view)?;
        Ok(VotingKeyLinkTransactionBody {
            linked_public_key,
            start_epoch,
            end_epoch,
            link_action,
        })
    }
}

/// Link an account with a VRF public key used to randomize block production.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VrfKeyLinkTransactionBody {
    pub linked_public_key: PublicKey,
    pub link_action: LinkAction,
}

key_link_codec!(VrfKeyLinkTransactionBody);

/// Lock a deposit needed to announce an aggregate bonded transaction.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HashLockTransactionBody {
    pub mosaic: UnresolvedMosaic,
    pub duration: BlockDuration,
    pub hash: Hash256,
}

impl Codec for HashLockTransactionBody {
    fn size(&self) -> usize {
        UnresolvedMosaic::SIZE + BlockDuration::SIZE + Hash256::SIZE
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        self.mosaic.write_into(out);
        self.duration.write_into(out);
        self.hash.write_into(out);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let mosaic = UnresolvedMosaic::deserialize(view)?;
        let duration = BlockDuration::deserialize(view)?;
        let hash = Hash256::deserialize(view)?;
        Ok(HashLockTransactionBody {
            mosaic,
            duration,
            hash,
        })
    }
}

/// Start a token swap: locked mosaics remain locked until a valid secret proof
/// unlocks them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SecretLockTransactionBody {
    pub recipient_address: UnresolvedAddress,
    pub secret: Hash256,
    pub mosaic: UnresolvedMosaic,
    pub duration: BlockDuration,
    pub hash_algorithm: LockHashAlgorithm,
}

impl Codec for SecretLockTransactionBody {
    fn size(&self) -> usize {
        UnresolvedAddress::SIZE
            + Hash256::SIZE
            + UnresolvedMosaic::SIZE
            + BlockDuration::SIZE
            + LockHashAlgorithm::SIZE
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        self.recipient_address.write_into(out);
        self.secret.write_into(out);
        self.mosaic.write_into(out);
        self.duration.write_into(out);
        self.hash_algorithm.write_into(out);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let recipient_address = UnresolvedAddress::deserialize(view)?;
        let secret = Hash256::deserialize(view)?;
        let mosaic = UnresolvedMosaic::deserialize(view)?;
        let duration = BlockDuration::deserialize(view)?;
        let hash_algorithm = LockHashAlgorithm::deserialize(view)?;
        Ok(SecretLockTransactionBody {
            recipient_address,
            secret,
            mosaic,
            duration,
            hash_algorithm,
        })
    }
}

/// Conclude a token swap by proving knowledge of a secret-lock proof.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SecretProofTransactionBody {
    pub recipient_address: UnresolvedAddress,
    pub secret: Hash256,
    pub hash_algorithm: LockHashAlgorithm,
    pub proof: Vec<u8>,
}

impl Codec for SecretProofTransactionBody {
    fn size(&self) -> usize {
        UnresolvedAddress::SIZE + Hash256::SIZE + 2 + LockHashAlgorithm::SIZE + self.proof.len()
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        debug_assert!(self.proof.len() <= usize::from(u16::MAX));
        self.recipient_address.write_into(out);
        self.secret.write_into(out);
        (self.proof.len() as u16).write_into(out);
        self.hash_algorithm.write_into(out);
        out.extend_from_slice(&self.proof);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let recipient_address = UnresolvedAddress::deserialize(view)?;
        let secret = Hash256::deserialize(view)?;
        let proof_size = u16::deserialize(view)?;
        let hash_algorithm = LockHashAlgorithm::deserialize(view)?;
        let proof = view.shift(usize::from(proof_size))?.to_vec();
        Ok(SecretProofTransactionBody {
            recipient_address,
            secret,
            hash_algorithm,
            proof,
        })
    }
}

/// Associate a key-value state to an account. The value is the byte-wise XOR
/// difference against any previously stored value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AccountMetadataTransactionBody {
    pub target_address: UnresolvedAddress,
    pub scoped_metadata_key: ScopedMetadataKey,
    pub value_size_delta: i16,
    pub value: Vec<u8>,
}

impl Codec for AccountMetadataTransactionBody {
    fn size(&self) -> usize {
        UnresolvedAddress::SIZE + ScopedMetadataKey::SIZE + 2 + 2 + self.value.len()
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        debug_assert!(self.value.len() <= usize::from(u16::MAX));
        self.target_address.write_into(out);
        self.scoped_metadata_key.write_into(out);
        self.value_size_delta.write_into(out);
        (self.value.len() as u16).write_into(out);
        out.extend_from_slice(&self.value);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let target_address = UnresolvedAddress::deserialize(view)?;
        let scoped_metadata_key = ScopedMetadataKey::deserialize(view)?;
        let value_size_delta = i16::deserialize(view)?;
        let value_size = u16::deserialize(view)?;
        let value = view.shift(usize::from(value_size))?.to_vec();
        Ok(AccountMetadataTransactionBody {
            target_address,
            scoped_metadata_key,
            value_size_delta,
            value,
        })
    }
}

/// Associate a key-value state to a mosaic.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MosaicMetadataTransactionBody {
    pub target_address: UnresolvedAddress,
    pub scoped_metadata_key: ScopedMetadataKey,
    pub target_mosaic_id: UnresolvedMosaicId,
    pub value_size_delta: i16,
    pub value: Vec<u8>,
}

impl Codec for MosaicMetadataTransactionBody {
    fn size(&self) -> usize {
        UnresolvedAddress::SIZE
            + ScopedMetadataKey::SIZE
            + UnresolvedMosaicId::SIZE
            + 2
            + 2
            + self.value.len()
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        debug_assert!(self.value.len() <= usize::from(u16::MAX));
        self.target_address.write_into(out);
        self.scoped_metadata_key.write_into(out);
        self.target_mosaic_id.write_into(out);
        self.value_size_delta.write_into(out);
        (self.value.len() as u16).write_into(out);
        out.extend_from_slice(&self.value);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let target_address = UnresolvedAddress::deserialize(view)?;
        let scoped_metadata_key = ScopedMetadataKey::deserialize(view)?;
        let target_mosaic_id = UnresolvedMosaicId::deserialize(view)?;
        let value_size_delta = i16::deserialize(view)?;
        let value_size = u16::deserialize(view)?;
        let value = view.shift(usize::from(value_size))?.to_vec();
        Ok(MosaicMetadataTransactionBody {
            target_address,
            scoped_metadata_key,
            target_mosaic_id,
            value_size_delta,
            value,
        })
    }
}

/// Associate a key-value state to a namespace.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NamespaceMetadataTransactionBody {
    pub target_address: UnresolvedAddress,
    pub scoped_metadata_key: ScopedMetadataKey,
    pub target_namespace_id: NamespaceId,
    pub value_size_delta: i16,
    pub value: Vec<u8>,
}

impl Codec for NamespaceMetadataTransactionBody {
    fn size(&self) -> usize {
        UnresolvedAddress::SIZE
            + ScopedMetadataKey::SIZE
            + NamespaceId::SIZE
            + 2
            + 2
            + self.value.len()
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        debug_assert!(self.value.len() <= usize::from(u16::MAX));
        self.target_address.write_into(out);
        self.scoped_metadata_key.write_into(out);
        self.target_namespace_id.write_into(out);
        self.value_size_delta.write_into(out);
        (self.value.len() as u16).write_into(out);
        out.extend_from_slice(&self.value);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let target_address = UnresolvedAddress::deserialize(view)?;
        let scoped_metadata_key = ScopedMetadataKey::deserialize(view)?;
        let target_namespace_id = NamespaceId::deserialize(view)?;
        let value_size_delta = i16::deserialize(view)?;
        let value_size = u16::deserialize(view)?;
        let value = view.shift(usize::from(value_size))?.to_vec();
        Ok(NamespaceMetadataTransactionBody {
            target_address,
            scoped_metadata_key,
            target_namespace_id,
            value_size_delta,
            value,
        })
    }
}

/// Create a new mosaic.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MosaicDefinitionTransactionBody {
    pub id: MosaicId,
    pub duration: BlockDuration,
    pub nonce: MosaicNonce,
    pub flags: MosaicFlags,
    pub divisibility: u8,
}

impl Codec for MosaicDefinitionTransactionBody {
    fn size(&self) -> usize {
        MosaicId::SIZE + BlockDuration::SIZE + MosaicNonce::SIZE + MosaicFlags::SIZE + 1
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        self.id.write_into(out);
        self.duration.write_into(out);
        self.nonce.write_into(out);
        self.flags.write_into(out);
        self.divisibility.write_into(out);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let id = MosaicId::deserialize(view)?;
        let duration = BlockDuration::deserialize(view)?;
        let nonce = MosaicNonce::deserialize(view)?;
        let flags = MosaicFlags::deserialize(view)?;
        let divisibility = u8::deserialize(view)?;
        Ok(MosaicDefinitionTransactionBody {
            id,
            duration,
            nonce,
            flags,
            divisibility,
        })
    }
}

/// Change the total supply of a mosaic.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MosaicSupplyChangeTransactionBody {
    pub mosaic_id: UnresolvedMosaicId,
    pub delta: Amount,
    pub action: MosaicSupplyChangeAction,
}

impl Codec for MosaicSupplyChangeTransactionBody {
    fn size(&self) -> usize {
        UnresolvedMosaicId::SIZE + Amount::SIZE + MosaicSupplyChangeAction::SIZE
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        self.mosaic_id.write_into(out);
        self.delta.write_into(out);
        self.action.write_into(out);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let mosaic_id = UnresolvedMosaicId::deserialize(view)?;
        let delta = Amount::deserialize(view)?;
        let action = MosaicSupplyChangeAction::deserialize(view)?;
        Ok(MosaicSupplyChangeTransactionBody {
            mosaic_id,
            delta,
            action,
        })
    }
}

/// Revoke mosaics from a holder back to the mosaic creator.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MosaicSupplyRevocationTransactionBody {
    pub source_address: UnresolvedAddress,
    pub mosaic: UnresolvedMosaic,
}

impl Codec for MosaicSupplyRevocationTransactionBody {
    fn size(&self) -> usize {
        UnresolvedAddress::SIZE + UnresolvedMosaic::SIZE
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        self.source_address.write_into(out);
        self.mosaic.write_into(out);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let source_address = UnresolvedAddress::deserialize(view)?;
        let mosaic = UnresolvedMosaic::deserialize(view)?;
        Ok(MosaicSupplyRevocationTransactionBody {
            source_address,
            mosaic,
        })
    }
}

/// Create or modify a multi-signature account.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MultisigAccountModificationTransactionBody {
    pub min_removal_delta: i8,
    pub min_approval_delta: i8,
    pub address_additions: Vec<UnresolvedAddress>,
    pub address_deletions: Vec<UnresolvedAddress>,
}

impl Codec for MultisigAccountModificationTransactionBody {
    fn size(&self) -> usize {
        1 + 1
            + 1
            + 1
            + 4
            + arrays::size_of_elements(&self.address_additions)
            + arrays::size_of_elements(&self.address_deletions)
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        debug_assert!(self.address_additions.len() <= usize::from(u8::MAX));
        debug_assert!(self.address_deletions.len() <= usize::from(u8::MAX));
        self.min_removal_delta.write_into(out);
        self.min_approval_delta.write_into(out);
        (self.address_additions.len() as u8).write_into(out);
        (self.address_deletions.len() as u8).write_into(out);
        0u32.write_into(out); // reserved
        arrays::write_elements(out, &self.address_additions);
        arrays::write_elements(out, &self.address_deletions);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let min_removal_delta = i8::deserialize(view)?;
        let min_approval_delta = i8::deserialize(view)?;
        let additions_count = u8::deserialize(view)?;
        let deletions_count = u8::deserialize(view)?;
        view.read_reserved_u32("multisig_account_modification_transaction_body_reserved_1")?;
        let address_additions = arrays::read_count(view, usize::from(additions_count))?;
        let address_deletions = arrays::read_count(view, usize::from(deletions_count))?;
        Ok(MultisigAccountModificationTransactionBody {
            min_removal_delta,
            min_approval_delta,
            address_additions,
            address_deletions,
        })
    }
}

/// Attach or detach a namespace alias to an account address.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AddressAliasTransactionBody {
    pub namespace_id: NamespaceId,
    pub address: Address,
    pub alias_action: AliasAction,
}

impl Codec for AddressAliasTransactionBody {
    fn size(&self) -> usize {
        NamespaceId::SIZE + Address::SIZE + AliasAction::SIZE
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        self.namespace_id.write_into(out);
        self.address.write_into(out);
        self.alias_action.write_into(out);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let namespace_id = NamespaceId::deserialize(view)?;
        let address = Address::deserialize(view)?;
        let alias_action = AliasAction::deserialize(view)?;
        Ok(AddressAliasTransactionBody {
            namespace_id,
            address,
            alias_action,
        })
    }
}

/// Attach or detach a namespace alias to a mosaic.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MosaicAliasTransactionBody {
    pub namespace_id: NamespaceId,
    pub mosaic_id: MosaicId,
    pub alias_action: AliasAction,
}

impl Codec for MosaicAliasTransactionBody {
    fn size(&self) -> usize {
        NamespaceId::SIZE + MosaicId::SIZE + AliasAction::SIZE
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        self.namespace_id.write_into(out);
        self.mosaic_id.write_into(out);
        self.alias_action.write_into(out);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let namespace_id = NamespaceId::deserialize(view)?;
        let mosaic_id = MosaicId::deserialize(view)?;
        let alias_action = AliasAction::deserialize(view)?;
        Ok(MosaicAliasTransactionBody {
            namespace_id,
            mosaic_id,
            alias_action,
        })
    }
}

/// Registration scope of a namespace: root namespaces rent a duration, child
/// namespaces reference their parent. The two occupy the same 8-byte slot on
/// the wire, selected by the registration type that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamespaceRegistrationScope {
    Root(BlockDuration),
    Child(NamespaceId),
}

impl Default for NamespaceRegistrationScope {
    fn default() -> Self {
        NamespaceRegistrationScope::Root(BlockDuration(0))
    }
}

impl NamespaceRegistrationScope {
    pub fn registration_type(&self) -> NamespaceRegistrationType {
        match self {
            NamespaceRegistrationScope::Root(_) => NamespaceRegistrationType::Root,
            NamespaceRegistrationScope::Child(_) => NamespaceRegistrationType::Child,
        }
    }
}

/// Register (or renew) a namespace.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NamespaceRegistrationTransactionBody {
    pub scope: NamespaceRegistrationScope,
    pub id: NamespaceId,
    pub name: Vec<u8>,
}

impl Codec for NamespaceRegistrationTransactionBody {
    fn size(&self) -> usize {
        8 + NamespaceId::SIZE + NamespaceRegistrationType::SIZE + 1 + self.name.len()
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        debug_assert!(self.name.len() <= usize::from(u8::MAX));
        match self.scope {
            NamespaceRegistrationScope::Root(duration) => duration.write_into(out),
            NamespaceRegistrationScope::Child(parent_id) => parent_id.write_into(out),
        }
        self.id.write_into(out);
        self.scope.registration_type().write_into(out);
        (self.name.len() as u8).write_into(out);
        out.extend_from_slice(&self.name);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        // the 8-byte duration/parent-id union precedes its discriminator, so
        // save the raw bytes and interpret them once the type has been read
        let scope_bytes = view.read_array::<8>()?;
        let id = NamespaceId::deserialize(view)?;
        let registration_type = NamespaceRegistrationType::deserialize(view)?;
        let scope = match registration_type {
            NamespaceRegistrationType::Root => {
                NamespaceRegistrationScope::Root(BlockDuration(u64::from_le_bytes(scope_bytes)))
            }
            NamespaceRegistrationType::Child => {
                NamespaceRegistrationScope::Child(NamespaceId(u64::from_le_bytes(scope_bytes)))
            }
        };
        let name_size = u8::deserialize(view)?;
        let name = view.shift(usize::from(name_size))?.to_vec();
        Ok(NamespaceRegistrationTransactionBody { scope, id, name })
    }
}

macro_rules! account_restriction_body {
    ($(#[$meta:meta])* $body:ident, $value:ty, $reserved:literal) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone, PartialEq, Eq)]
        pub struct $body {
            pub restriction_flags: AccountRestrictionFlags,
            pub restriction_additions: Vec<$value>,
            pub restriction_deletions: Vec<$value>,
        }

        impl Codec for $body {
            fn size(&self) -> usize {
                AccountRestrictionFlags::SIZE
                    + 1
                    + 1
                    + 4
                    + arrays::size_of_elements(&self.restriction_additions)
                    + arrays::size_of_elements(&self.restriction_deletions)
            }

            fn write_into(&self, out: &mut Vec<u8>) {
                debug_assert!(self.restriction_additions.len() <= usize::from(u8::MAX));
                debug_assert!(self.restriction_deletions.len() <= usize::from(u8::MAX));
                self.restriction_flags.write_into(out);
                (self.restriction_additions.len() as u8).write_into(out);
                (self.restriction_deletions.len() as u8).write_into(out);
                0u32.write_into(out); // reserved
                arrays::write_elements(out, &self.restriction_additions);
                arrays::write_elements(out, &self.restriction_deletions);
            }

            fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
                let restriction_flags = AccountRestrictionFlags::deserialize(view)?;
                let additions_count = u8::deserialize(view)?;
                let deletions_count = u8::deserialize(view)?;
                view.read_reserved_u32($reserved)?;
                let restriction_additions = arrays::read_count(view, usize::from(additions_count))?;
                let restriction_deletions = arrays::read_count(view, usize::from(deletions_count))?;
                Ok($body {
                    restriction_flags,
                    restriction_additions,
                    restriction_deletions,
                })
            }
        }
    };
}

account_restriction_body!(
    /// Allow or block incoming/outgoing transactions for a set of addresses.
    AccountAddressRestrictionTransactionBody,
    UnresolvedAddress,
    "account_restriction_transaction_body_reserved_1"
);

account_restriction_body!(
    /// Allow or block incoming transactions containing a set of mosaics.
    AccountMosaicRestrictionTransactionBody,
    UnresolvedMosaicId,
    "account_restriction_transaction_body_reserved_1"
);

account_restriction_body!(
    /// Allow or block outgoing transactions by transaction type.
    AccountOperationRestrictionTransactionBody,
    TransactionType,
    "account_restriction_transaction_body_reserved_1"
);

/// Set address-specific rules to transfer a restrictable mosaic.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MosaicAddressRestrictionTransactionBody {
    pub mosaic_id: UnresolvedMosaicId,
    pub restriction_key: MosaicRestrictionKey,
    pub previous_restriction_value: u64,
    pub new_restriction_value: u64,
    pub target_address: UnresolvedAddress,
}

impl Codec for MosaicAddressRestrictionTransactionBody {
    fn size(&self) -> usize {
        UnresolvedMosaicId::SIZE + MosaicRestrictionKey::SIZE + 8 + 8 + UnresolvedAddress::SIZE
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        self.mosaic_id.write_into(out);
        self.restriction_key.write_into(out);
        self.previous_restriction_value.write_into(out);
        self.new_restriction_value.write_into(out);
        self.target_address.write_into(out);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let mosaic_id = UnresolvedMosaicId::deserialize(view)?;
        let restriction_key = MosaicRestrictionKey::deserialize(view)?;
        let previous_restriction_value = u64::deserialize(view)?;
        let new_restriction_value = u64::deserialize(view)?;
        let target_address = UnresolvedAddress::deserialize(view)?;
        Ok(MosaicAddressRestrictionTransactionBody {
            mosaic_id,
            restriction_key,
            previous_restriction_value,
            new_restriction_value,
            target_address,
        })
    }
}

/// Set global rules to transfer a restrictable mosaic.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MosaicGlobalRestrictionTransactionBody {
    pub mosaic_id: UnresolvedMosaicId,
    pub reference_mosaic_id: UnresolvedMosaicId,
    pub restriction_key: MosaicRestrictionKey,
    pub previous_restriction_value: u64,
    pub new_restriction_value: u64,
    pub previous_restriction_type: MosaicRestrictionType,
    pub new_restriction_type: MosaicRestrictionType,
}

impl Codec for MosaicGlobalRestrictionTransactionBody {
    fn size(&self) -> usize {
        UnresolvedMosaicId::SIZE * 2
            + MosaicRestrictionKey::SIZE
            + 8
            + 8
            + MosaicRestrictionType::SIZE * 2
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        self.mosaic_id.write_into(out);
        self.reference_mosaic_id.write_into(out);
        self.restriction_key.write_into(out);
        self.previous_restriction_value.write_into(out);
        self.new_restriction_value.write_into(out);
        self.previous_restriction_type.write_into(out);
        self.new_restriction_type.write_into(out);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let mosaic_id = UnresolvedMosaicId::deserialize(view)?;
        let reference_mosaic_id = UnresolvedMosaicId::deserialize(view)?;
        let restriction_key = MosaicRestrictionKey::deserialize(view)?;
        let previous_restriction_value = u64::deserialize(view)?;
        let new_restriction_value = u64::deserialize(view)?;
        let previous_restriction_type = MosaicRestrictionType::deserialize(view)?;
        let new_restriction_type = MosaicRestrictionType::deserialize(view)?;
        Ok(MosaicGlobalRestrictionTransactionBody {
            mosaic_id,
            reference_mosaic_id,
            restriction_key,
            previous_restriction_value,
            new_restriction_value,
            previous_restriction_type,
            new_restriction_type,
        })
    }
}

/// Send mosaics and a message between two accounts.
///
/// Attached mosaics must be supplied in ascending mosaic-id order; the order
/// is a producer contract and is not re-validated on decode.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TransferTransactionBody {
    pub recipient_address: UnresolvedAddress,
    pub mosaics: Vec<UnresolvedMosaic>,
    pub message: Vec<u8>,
}

impl Codec for TransferTransactionBody {
    fn size(&self) -> usize {
        UnresolvedAddress::SIZE
            + 2
            + 1
            + 1
            + 4
            + arrays::size_of_elements(&self.mosaics)
            + self.message.len()
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        debug_assert!(self.message.len() <= usize::from(u16::MAX));
        debug_assert!(self.mosaics.len() <= usize::from(u8::MAX));
        arrays::debug_check_sorted(&self.mosaics, |mosaic| mosaic.mosaic_id.0);
        self.recipient_address.write_into(out);
        (self.message.len() as u16).write_into(out);
        (self.mosaics.len() as u8).write_into(out);
        0u8.write_into(out); // reserved
        0u32.write_into(out); // reserved
        arrays::write_elements(out, &self.mosaics);
        out.extend_from_slice(&self.message);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let recipient_address = UnresolvedAddress::deserialize(view)?;
        let message_size = u16::deserialize(view)?;
        let mosaics_count = u8::deserialize(view)?;
        view.read_reserved_u8("transfer_transaction_body_reserved_1")?;
        view.read_reserved_u32("transfer_transaction_body_reserved_2")?;
        let mosaics = arrays::read_count(view, usize::from(mosaics_count))?;
        let message = view.shift(usize::from(message_size))?.to_vec();
        Ok(TransferTransactionBody {
            recipient_address,
            mosaics,
            message,
        })
    }
}

/// Batch of embedded transactions plus any cosignatures filling the remaining
/// body space.
///
/// Each embedded transaction is padded up to the next 8-byte boundary before
/// the next one begins; the payload size written to the wire is the sum of
/// these padded sizes, not the sum of raw sizes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AggregateTransactionBody {
    pub transactions_hash: Hash256,
    pub transactions: Vec<EmbeddedTransaction>,
    pub cosignatures: Vec<Cosignature>,
}

impl AggregateTransactionBody {
    /// Sum of embedded transaction sizes, each padded to an 8-byte boundary.
    pub fn payload_size(&self) -> usize {
        arrays::size_of_aligned_elements(&self.transactions, 8, false)
    }
}

impl Codec for AggregateTransactionBody {
    fn size(&self) -> usize {
        Hash256::SIZE + 4 + 4 + self.payload_size() + arrays::size_of_elements(&self.cosignatures)
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        debug_assert!(self.payload_size() <= u32::MAX as usize);
        self.transactions_hash.write_into(out);
        (self.payload_size() as u32).write_into(out);
        0u32.write_into(out); // reserved
        arrays::write_aligned_elements(out, &self.transactions, 8, false);
        arrays::write_elements(out, &self.cosignatures);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let transactions_hash = Hash256::deserialize(view)?;
        let payload_size = u32::deserialize(view)?;
        view.read_reserved_u32("aggregate_transaction_header_reserved_1")?;
        let mut payload = view.shrink(payload_size as usize)?;
        let transactions =
            arrays::read_aligned_fill(&mut payload, EmbeddedTransaction::deserialize, 8, false)?;
        let cosignatures = arrays::read_fill(view)?;
        Ok(AggregateTransactionBody {
            transactions_hash,
            transactions,
            cosignatures,
        })
    }
}

// ============================================================================
// FAMILIES AND FACTORIES
// ============================================================================

/// Generates the body sum type for an entity family plus its
/// discriminator-keyed factory dispatch and name catalog.
macro_rules! transaction_family {
    (
        $(#[$meta:meta])*
        $body_enum:ident, $family:literal {
            $($variant:ident($body:ty) => ($ttype:ident, $version:literal, $name:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum $body_enum {
            $($variant($body)),+
        }

        impl $body_enum {
            /// Wire discriminator bound to this variant.
            pub fn transaction_type(&self) -> TransactionType {
                match self {
                    $(Self::$variant(_) => TransactionType::$ttype),+
                }
            }

            /// Entity version bound to this variant.
            pub fn version(&self) -> u8 {
                match self {
                    $(Self::$variant(_) => $version),+
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
                transaction_type: TransactionType,
                version: u8,
                view: &mut BufferView<'_>,
            ) -> Result<Self> {
                match (transaction_type, version) {
                    $((TransactionType::$ttype, $version) => {
                        Ok(Self::$variant(<$body>::deserialize(view)?))
                    })+
                    _ => Err(CodecError::UnknownDiscriminator {
                        family: $family,
                        entity_type: transaction_type.value(),
                        version,
                    }),
                }
            }

            /// Default-constructed body for a catalog name. This is a tooling
            /// convenience, not part of the wire format.
            pub fn create_by_name(name: &str) -> Result<Self> {
                match name {
                    $($name => Ok(Self::$variant(<$body>::default())),)+
                    _ => Err(CodecError::UnknownEntityName {
                        family: $family,
                        name: name.to_string(),
                    }),
                }
            }
        }
    };
}

transaction_family! {
    /// Variant-specific trailing fields of a top-level transaction, one
    /// variant per (type, version) discriminator pair.
    TransactionBody, "transaction" {
        AccountKeyLinkV1(AccountKeyLinkTransactionBody) => (AccountKeyLink, 1, "account_key_link_transaction_v1"),
        NodeKeyLinkV1(NodeKeyLinkTransactionBody) => (NodeKeyLink, 1, "node_key_link_transaction_v1"),
        AggregateCompleteV1(AggregateTransactionBody) => (AggregateComplete, 1, "aggregate_complete_transaction_v1"),
        AggregateCompleteV2(AggregateTransactionBody) => (AggregateComplete, 2, "aggregate_complete_transaction_v2"),
        AggregateBondedV1(AggregateTransactionBody) => (AggregateBonded, 1, "aggregate_bonded_transaction_v1"),
        AggregateBondedV2(AggregateTransactionBody) => (AggregateBonded, 2, "aggregate_bonded_transaction_v2"),
        VotingKeyLinkV1(VotingKeyLinkTransactionBody) => (VotingKeyLink, 1, "voting_key_link_transaction_v1"),
        VrfKeyLinkV1(VrfKeyLinkTransactionBody) => (VrfKeyLink, 1, "vrf_key_link_transaction_v1"),
        HashLockV1(HashLockTransactionBody) => (HashLock, 1, "hash_lock_transaction_v1"),
        SecretLockV1(SecretLockTransactionBody) => (SecretLock, 1, "secret_lock_transaction_v1"),
        SecretProofV1(SecretProofTransactionBody) => (SecretProof, 1, "secret_proof_transaction_v1"),
        AccountMetadataV1(AccountMetadataTransactionBody) => (AccountMetadata, 1, "account_metadata_transaction_v1"),
        MosaicMetadataV1(MosaicMetadataTransactionBody) => (MosaicMetadata, 1, "mosaic_metadata_transaction_v1"),
        NamespaceMetadataV1(NamespaceMetadataTransactionBody) => (NamespaceMetadata, 1, "namespace_metadata_transaction_v1"),
        MosaicDefinitionV1(MosaicDefinitionTransactionBody) => (MosaicDefinition, 1, "mosaic_definition_transaction_v1"),
        MosaicSupplyChangeV1(MosaicSupplyChangeTransactionBody) => (MosaicSupplyChange, 1, "mosaic_supply_change_transaction_v1"),
        MosaicSupplyRevocationV1(MosaicSupplyRevocationTransactionBody) => (MosaicSupplyRevocation, 1, "mosaic_supply_revocation_transaction_v1"),
        MultisigAccountModificationV1(MultisigAccountModificationTransactionBody) => (MultisigAccountModification, 1, "multisig_account_modification_transaction_v1"),
        AddressAliasV1(AddressAliasTransactionBody) => (AddressAlias, 1, "address_alias_transaction_v1"),
        MosaicAliasV1(MosaicAliasTransactionBody) => (MosaicAlias, 1, "mosaic_alias_transaction_v1"),
        NamespaceRegistrationV1(NamespaceRegistrationTransactionBody) => (NamespaceRegistration, 1, "namespace_registration_transaction_v1"),
        AccountAddressRestrictionV1(AccountAddressRestrictionTransactionBody) => (AccountAddressRestriction, 1, "account_address_restriction_transaction_v1"),
        AccountMosaicRestrictionV1(AccountMosaicRestrictionTransactionBody) => (AccountMosaicRestriction, 1, "account_mosaic_restriction_transaction_v1"),
        AccountOperationRestrictionV1(AccountOperationRestrictionTransactionBody) => (AccountOperationRestriction, 1, "account_operation_restriction_transaction_v1"),
        MosaicAddressRestrictionV1(MosaicAddressRestrictionTransactionBody) => (MosaicAddressRestriction, 1, "mosaic_address_restriction_transaction_v1"),
        MosaicGlobalRestrictionV1(MosaicGlobalRestrictionTransactionBody) => (MosaicGlobalRestriction, 1, "mosaic_global_restriction_transaction_v1"),
        TransferV1(TransferTransactionBody) => (Transfer, 1, "transfer_transaction_v1"),
    }
}

transaction_family! {
    /// Variant-specific trailing fields of an embedded transaction. Aggregates
    /// cannot be nested, so the aggregate discriminators are unknown here.
    EmbeddedTransactionBody, "embedded transaction" {
        AccountKeyLinkV1(AccountKeyLinkTransactionBody) => (AccountKeyLink, 1, "account_key_link_transaction_v1"),
        NodeKeyLinkV1(NodeKeyLinkTransactionBody) => (NodeKeyLink, 1, "node_key_link_transaction_v1"),
        VotingKeyLinkV1(VotingKeyLinkTransactionBody) => (VotingKeyLink, 1, "voting_key_link_transaction_v1"),
        VrfKeyLinkV1(VrfKeyLinkTransactionBody) => (VrfKeyLink, 1, "vrf_key_link_transaction_v1"),
        HashLockV1(HashLockTransactionBody) => (HashLock, 1, "hash_lock_transaction_v1"),
        SecretLockV1(SecretLockTransactionBody) => (SecretLock, 1, "secret_lock_transaction_v1"),
        SecretProofV1(SecretProofTransactionBody) => (SecretProof, 1, "secret_proof_transaction_v1"),
        AccountMetadataV1(AccountMetadataTransactionBody) => (AccountMetadata, 1, "account_metadata_transaction_v1"),
        MosaicMetadataV1(MosaicMetadataTransactionBody) => (MosaicMetadata, 1, "mosaic_metadata_transaction_v1"),
        NamespaceMetadataV1(NamespaceMetadataTransactionBody) => (NamespaceMetadata, 1, "namespace_metadata_transaction_v1"),
        MosaicDefinitionV1(MosaicDefinitionTransactionBody) => (MosaicDefinition, 1, "mosaic_definition_transaction_v1"),
        MosaicSupplyChangeV1(MosaicSupplyChangeTransactionBody) => (MosaicSupplyChange, 1, "mosaic_supply_change_transaction_v1"),
        MosaicSupplyRevocationV1(MosaicSupplyRevocationTransactionBody) => (MosaicSupplyRevocation, 1, "mosaic_supply_revocation_transaction_v1"),
        MultisigAccountModificationV1(MultisigAccountModificationTransactionBody) => (MultisigAccountModification, 1, "multisig_account_modification_transaction_v1"),
        AddressAliasV1(AddressAliasTransactionBody) => (AddressAlias, 1, "address_alias_transaction_v1"),
        MosaicAliasV1(MosaicAliasTransactionBody) => (MosaicAlias, 1, "mosaic_alias_transaction_v1"),
        NamespaceRegistrationV1(NamespaceRegistrationTransactionBody) => (NamespaceRegistration, 1, "namespace_registration_transaction_v1"),
        AccountAddressRestrictionV1(AccountAddressRestrictionTransactionBody) => (AccountAddressRestriction, 1, "account_address_restriction_transaction_v1"),
        AccountMosaicRestrictionV1(AccountMosaicRestrictionTransactionBody) => (AccountMosaicRestriction, 1, "account_mosaic_restriction_transaction_v1"),
        AccountOperationRestrictionV1(AccountOperationRestrictionTransactionBody) => (AccountOperationRestriction, 1, "account_operation_restriction_transaction_v1"),
        MosaicAddressRestrictionV1(MosaicAddressRestrictionTransactionBody) => (MosaicAddressRestriction, 1, "mosaic_address_restriction_transaction_v1"),
        MosaicGlobalRestrictionV1(MosaicGlobalRestrictionTransactionBody) => (MosaicGlobalRestriction, 1, "mosaic_global_restriction_transaction_v1"),
        TransferV1(TransferTransactionBody) => (Transfer, 1, "transfer_transaction_v1"),
    }
}

/// Generic transaction header, decoded during the factory's peek pass and
/// again by the concrete re-decode from the entity start.
struct TransactionHeader {
    total_size: u32,
    signature: Signature,
    signer_public_key: PublicKey,
    version: u8,
    network: NetworkType,
    transaction_type: TransactionType,
    fee: Amount,
    deadline: Timestamp,
}

impl TransactionHeader {
    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let total_size = u32::deserialize(view)?;
        view.read_reserved_u32("verifiable_entity_header_reserved_1")?;
        let signature = Signature::deserialize(view)?;
        let signer_public_key = PublicKey::deserialize(view)?;
        view.read_reserved_u32("entity_body_reserved_1")?;
        let version = u8::deserialize(view)?;
        let network = NetworkType::deserialize(view)?;
        let transaction_type = TransactionType::deserialize(view)?;
        let fee = Amount::deserialize(view)?;
        let deadline = Timestamp::deserialize(view)?;
        Ok(TransactionHeader {
            total_size,
            signature,
            signer_public_key,
            version,
            network,
            transaction_type,
            fee,
            deadline,
        })
    }
}

/// A signed top-level transaction.
///
/// The entity version and type discriminator are derived from the body
/// variant, never stored separately, so header and body cannot disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub signature: Signature,
    pub signer_public_key: PublicKey,
    pub network: NetworkType,
    pub fee: Amount,
    pub deadline: Timestamp,
    pub body: TransactionBody,
}

impl Transaction {
    /// Fixed number of header bytes preceding the variant fields.
    pub const HEADER_SIZE: usize =
        4 + 4 + Signature::SIZE + PublicKey::SIZE + 4 + 1 + 1 + 2 + Amount::SIZE + Timestamp::SIZE;

    pub fn transaction_type(&self) -> TransactionType {
        self.body.transaction_type()
    }

    pub fn version(&self) -> u8 {
        self.body.version()
    }

    /// Builds a default-valued transaction for a catalog name such as
    /// `"transfer_transaction_v1"`.
    pub fn create_by_name(name: &str) -> Result<Self> {
        Ok(Transaction {
            signature: Signature::default(),
            signer_public_key: PublicKey::default(),
            network: NetworkType::default(),
            fee: Amount::default(),
            deadline: Timestamp::default(),
            body: TransactionBody::create_by_name(name)?,
        })
    }
}

impl Codec for Transaction {
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
        self.transaction_type().write_into(out);
        self.fee.write_into(out);
        self.deadline.write_into(out);
        self.body.write_into(out);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        // peek pass: learn total size and discriminator without consuming
        let mut peek = *view;
        let peeked = TransactionHeader::deserialize(&mut peek)?;

        // concrete pass: re-decode from the original start, bounded to the
        // declared size so the body cannot over-read into the next entity
        let mut entity = view.shrink(peeked.total_size as usize)?;
        let header = TransactionHeader::deserialize(&mut entity)?;
        let body = TransactionBody::deserialize_by_discriminator(
            peeked.transaction_type,
            peeked.version,
            &mut entity,
        )?;
        if !entity.is_empty() {
            let declared = header.total_size as usize;
            return Err(CodecError::MismatchedEntitySize {
                declared,
                consumed: declared - entity.remaining(),
            });
        }
        Ok(Transaction {
            signature: header.signature,
            signer_public_key: header.signer_public_key,
            network: header.network,
            fee: header.fee,
            deadline: header.deadline,
            body,
        })
    }
}

/// Generic embedded transaction header.
struct EmbeddedTransactionHeader {
    total_size: u32,
    signer_public_key: PublicKey,
    version: u8,
    network: NetworkType,
    transaction_type: TransactionType,
}

impl EmbeddedTransactionHeader {
    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let total_size = u32::deserialize(view)?;
        view.read_reserved_u32("embedded_transaction_header_reserved_1")?;
        let signer_public_key = PublicKey::deserialize(view)?;
        view.read_reserved_u32("entity_body_reserved_1")?;
        let version = u8::deserialize(view)?;
        let network = NetworkType::deserialize(view)?;
        let transaction_type = TransactionType::deserialize(view)?;
        Ok(EmbeddedTransactionHeader {
            total_size,
            signer_public_key,
            version,
            network,
            transaction_type,
        })
    }
}

/// A transaction nested inside an aggregate payload: no signature, fee or
/// deadline of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedTransaction {
    pub signer_public_key: PublicKey,
    pub network: NetworkType,
    pub body: EmbeddedTransactionBody,
}

impl EmbeddedTransaction {
    pub const HEADER_SIZE: usize = 4 + 4 + PublicKey::SIZE + 4 + 1 + 1 + 2;

    pub fn transaction_type(&self) -> TransactionType {
        self.body.transaction_type()
    }

    pub fn version(&self) -> u8 {
        self.body.version()
    }

    pub fn create_by_name(name: &str) -> Result<Self> {
        Ok(EmbeddedTransaction {
            signer_public_key: PublicKey::default(),
            network: NetworkType::default(),
            body: EmbeddedTransactionBody::create_by_name(name)?,
        })
    }
}

impl Codec for EmbeddedTransaction {
    fn size(&self) -> usize {
        Self::HEADER_SIZE + self.body.size()
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        (self.size() as u32).write_into(out);
        0u32.write_into(out); // embedded transaction header reserved
        self.signer_public_key.write_into(out);
        0u32.write_into(out); // entity body reserved
        self.version().write_into(out);
        self.network.write_into(out);
        self.transaction_type().write_into(out);
        self.body.write_into(out);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let mut peek = *view;
        let peeked = EmbeddedTransactionHeader::deserialize(&mut peek)?;

        let mut entity = view.shrink(peeked.total_size as usize)?;
        let header = EmbeddedTransactionHeader::deserialize(&mut entity)?;
        let body = EmbeddedTransactionBody::deserialize_by_discriminator(
            peeked.transaction_type,
            peeked.version,
            &mut entity,
        )?;
        if !entity.is_empty() {
            let declared = header.total_size as usize;
            return Err(CodecError::MismatchedEntitySize {
                declared,
                consumed: declared - entity.remaining(),
            });
        }
        Ok(EmbeddedTransaction {
            signer_public_key: header.signer_public_key,
            network: header.network,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transfer_body() -> TransferTransactionBody {
        TransferTransactionBody {
            recipient_address: UnresolvedAddress([0x99; 24]),
            mosaics: vec![
                UnresolvedMosaic {
                    mosaic_id: UnresolvedMosaicId(0x0dc6_7fbe_1cad_29e3),
                    amount: Amount(100),
                },
                UnresolvedMosaic {
                    mosaic_id: UnresolvedMosaicId(0x7cdf_3b11_7a3c_40cc),
                    amount: Amount(1),
                },
            ],
            message: b"hello".to_vec(),
        }
    }

    fn transfer_transaction() -> Transaction {
        Transaction {
            signature: Signature([0x11; 64]),
            signer_public_key: PublicKey([0x22; 32]),
            network: NetworkType::Testnet,
            fee: Amount(1_000_000),
            deadline: Timestamp(71_002_584_462),
            body: TransactionBody::TransferV1(transfer_body()),
        }
    }

    #[test]
    fn transfer_round_trip() {
        let transaction = transfer_transaction();
        let bytes = transaction.serialize();
        assert_eq!(bytes.len(), transaction.size());
        assert_eq!(Transaction::deserialize_from(&bytes).unwrap(), transaction);
    }

    #[test]
    fn transfer_leading_size_field_matches_buffer_length() {
        let bytes = transfer_transaction().serialize();
        let declared = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        assert_eq!(declared as usize, bytes.len());
    }

    #[test]
    fn transfer_size_components() {
        let body = transfer_body();
        // recipient(24) + messageSize(2) + mosaicsCount(1) + reserved(1+4)
        // + 2 mosaics(32) + message(5)
        assert_eq!(body.size(), 69);
    }

    #[test]
    fn factory_rejects_unknown_version() {
        let mut bytes = transfer_transaction().serialize();
        bytes[108] = 99; // version byte
        assert_eq!(
            Transaction::deserialize_from(&bytes),
            Err(CodecError::UnknownDiscriminator {
                family: "transaction",
                entity_type: TransactionType::Transfer.value(),
                version: 99,
            })
        );
    }

    #[test]
    fn nonzero_reserved_header_field_is_rejected() {
        let mut bytes = transfer_transaction().serialize();
        bytes[4] = 1; // verifiable entity header reserved
        assert_eq!(
            Transaction::deserialize_from(&bytes),
            Err(CodecError::NonZeroReservedField {
                name: "verifiable_entity_header_reserved_1",
                value: 1,
            })
        );
    }

    #[test]
    fn trailing_bytes_inside_declared_size_are_rejected() {
        let transaction = transfer_transaction();
        let mut bytes = transaction.serialize();
        // grow the declared size by 4 and append 4 trailing bytes
        let inflated = (transaction.size() + 4) as u32;
        bytes[0..4].copy_from_slice(&inflated.to_le_bytes());
        bytes.extend_from_slice(&[0u8; 4]);
        assert!(matches!(
            Transaction::deserialize_from(&bytes),
            Err(CodecError::MismatchedEntitySize { .. })
        ));
    }

    #[test]
    fn namespace_registration_root_and_child_round_trip() {
        let root = NamespaceRegistrationTransactionBody {
            scope: NamespaceRegistrationScope::Root(BlockDuration(10_000)),
            id: NamespaceId(0xa95f_1f8a_96e2_d16b),
            name: b"roger".to_vec(),
        };
        let decoded =
            NamespaceRegistrationTransactionBody::deserialize_from(&root.serialize()).unwrap();
        assert_eq!(decoded, root);

        let child = NamespaceRegistrationTransactionBody {
            scope: NamespaceRegistrationScope::Child(NamespaceId(0xa95f_1f8a_96e2_d16b)),
            id: NamespaceId(0x07df_67a1_88a2_c229),
            name: b"rabbit".to_vec(),
        };
        let decoded =
            NamespaceRegistrationTransactionBody::deserialize_from(&child.serialize()).unwrap();
        assert_eq!(decoded, child);
        assert_eq!(child.serialize().len(), child.size());
    }

    #[test]
    fn secret_proof_round_trip_with_empty_and_nonempty_proof() {
        for proof in [vec![], vec![0xde, 0xad, 0xbe, 0xef]] {
            let body = SecretProofTransactionBody {
                recipient_address: UnresolvedAddress([3; 24]),
                secret: crate::types::Hash256([7; 32]),
                hash_algorithm: LockHashAlgorithm::Hash160,
                proof: proof.clone(),
            };
            let bytes = body.serialize();
            assert_eq!(bytes.len(), body.size());
            assert_eq!(
                SecretProofTransactionBody::deserialize_from(&bytes).unwrap(),
                body
            );
        }
    }

    #[test]
    fn embedded_transaction_round_trip() {
        let embedded = EmbeddedTransaction {
            signer_public_key: PublicKey([0x44; 32]),
            network: NetworkType::Mainnet,
            body: EmbeddedTransactionBody::MosaicAliasV1(MosaicAliasTransactionBody {
                namespace_id: NamespaceId(0xe145_1b0f_32f8_fe9d),
                mosaic_id: MosaicId(0x315f_3f0f_30d0_327e),
                alias_action: AliasAction::Link,
            }),
        };
        let bytes = embedded.serialize();
        assert_eq!(bytes.len(), EmbeddedTransaction::HEADER_SIZE + 17);
        assert_eq!(
            EmbeddedTransaction::deserialize_from(&bytes).unwrap(),
            embedded
        );
    }

    #[test]
    fn embedded_factory_rejects_aggregate_discriminator() {
        let mut embedded = EmbeddedTransaction::create_by_name("transfer_transaction_v1")
            .unwrap()
            .serialize();
        // overwrite the type discriminator with the aggregate complete code
        let type_offset = EmbeddedTransaction::HEADER_SIZE - 2;
        embedded[type_offset..type_offset + 2]
            .copy_from_slice(&TransactionType::AggregateComplete.value().to_le_bytes());
        assert!(matches!(
            EmbeddedTransaction::deserialize_from(&embedded),
            Err(CodecError::UnknownDiscriminator {
                family: "embedded transaction",
                ..
            })
        ));
    }

    #[test]
    fn aggregate_payload_size_uses_padded_sizes() {
        // a transfer embedded with a 1-byte message: 48 + 69 + 4 = forced odd sizes
        let first = EmbeddedTransaction {
            signer_public_key: PublicKey([1; 32]),
            network: NetworkType::Testnet,
            body: EmbeddedTransactionBody::TransferV1(TransferTransactionBody {
                recipient_address: UnresolvedAddress([2; 24]),
                mosaics: vec![],
                message: b"a".to_vec(),
            }),
        };
        let second = EmbeddedTransaction {
            signer_public_key: PublicKey([3; 32]),
            network: NetworkType::Testnet,
            body: EmbeddedTransactionBody::SecretProofV1(SecretProofTransactionBody {
                recipient_address: UnresolvedAddress([4; 24]),
                secret: crate::types::Hash256([5; 32]),
                hash_algorithm: LockHashAlgorithm::Sha3_256,
                proof: vec![9, 9, 9],
            }),
        };
        let raw_first = first.size();
        let raw_second = second.size();

        let body = AggregateTransactionBody {
            transactions_hash: crate::types::Hash256([6; 32]),
            transactions: vec![first, second],
            cosignatures: vec![Cosignature::default()],
        };
        let expected_payload =
            arrays::align_up(raw_first, 8) + arrays::align_up(raw_second, 8);
        assert_eq!(body.payload_size(), expected_payload);

        let bytes = body.serialize();
        assert_eq!(bytes.len(), body.size());
        let written_payload = u32::from_le_bytes([bytes[32], bytes[33], bytes[34], bytes[35]]);
        assert_eq!(written_payload as usize, expected_payload);

        let decoded = AggregateTransactionBody::deserialize_from(&bytes).unwrap();
        assert_eq!(decoded, body);
    }

    #[test]
    fn aggregate_transaction_round_trip() {
        let transaction = Transaction {
            signature: Signature([0xaa; 64]),
            signer_public_key: PublicKey([0xbb; 32]),
            network: NetworkType::Mainnet,
            fee: Amount(2_000_000),
            deadline: Timestamp(8_999_999_998),
            body: TransactionBody::AggregateBondedV2(AggregateTransactionBody {
                transactions_hash: crate::types::Hash256([0xcc; 32]),
                transactions: vec![EmbeddedTransaction {
                    signer_public_key: PublicKey([0xdd; 32]),
                    network: NetworkType::Mainnet,
                    body: EmbeddedTransactionBody::AccountKeyLinkV1(
                        AccountKeyLinkTransactionBody {
                            linked_public_key: PublicKey([0xee; 32]),
                            link_action: LinkAction::Link,
                        },
                    ),
                }],
                cosignatures: vec![Cosignature {
                    version: 0,
                    signer_public_key: PublicKey([0x12; 32]),
                    signature: Signature([0x34; 64]),
                }],
            }),
        };
        let bytes = transaction.serialize();
        assert_eq!(bytes.len(), transaction.size());
        assert_eq!(Transaction::deserialize_from(&bytes).unwrap(), transaction);
    }

    #[test]
    fn create_by_name_builds_matching_discriminator() {
        let transaction = Transaction::create_by_name("mosaic_definition_transaction_v1").unwrap();
        assert_eq!(
            transaction.transaction_type(),
            TransactionType::MosaicDefinition
        );
        assert_eq!(transaction.version(), 1);
        assert!(Transaction::create_by_name("no_such_transaction_v9").is_err());

        let v2 = Transaction::create_by_name("aggregate_complete_transaction_v2").unwrap();
        assert_eq!(v2.version(), 2);
        assert_eq!(
            v2.transaction_type(),
            TransactionType::AggregateComplete
        );
    }

    #[test]
    fn detached_cosignature_round_trip() {
        let detached = DetachedCosignature {
            version: 1,
            signer_public_key: PublicKey([8; 32]),
            signature: Signature([9; 64]),
            parent_hash: crate::types::Hash256([10; 32]),
        };
        let bytes = detached.serialize();
        assert_eq!(bytes.len(), DetachedCosignature::SIZE);
        assert_eq!(
            DetachedCosignature::deserialize_from(&bytes).unwrap(),
            detached
        );
    }

    #[test]
    fn address_alias_uses_resolved_address() {
        let body = AddressAliasTransactionBody {
            namespace_id: NamespaceId(0xe145_1b0f_32f8_fe9d),
            address: Address([0x77; 24]),
            alias_action: AliasAction::Unlink,
        };
        assert_eq!(body.size(), 33);
        assert_eq!(
            AddressAliasTransactionBody::deserialize_from(&body.serialize()).unwrap(),
            body
        );
    }
}
