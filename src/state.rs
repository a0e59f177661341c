//! Ledger state entry wire format
//!
//! State entries are the merkle-tree leaf payloads describing accounts,
//! mosaics, namespaces, locks, metadata and restrictions. Unlike transactions
//! and blocks they carry no size or type discriminator; each begins with a
//! 2-byte state version and the caller knows which entry kind it is reading.


use crate::arrays;
use crate::codec::{Codec, FixedSize};
use crate::error::{CodecError, Result};
use crate::transactions::{
    AccountRestrictionFlags, LockHashAlgorithm, MosaicFlags, MosaicRestrictionType,
    TransactionType,
};
use crate::types::{
    flag_set, wire_enum, Address, Amount, BlockDuration, FinalizationEpoch, Hash256, Height,
    Importance, ImportanceHeight, Mosaic, MosaicId, MosaicRestrictionKey, NamespaceId, PublicKey,
    ScopedMetadataKey, VotingPublicKey,
};
use crate::view::BufferView;

wire_enum! {
    /// Relationship between an account and its remote harvesting delegate.
    AccountType: u8 {
        Unlinked = 0,
        Main = 1,
        Remote = 2,
        RemoteUnlinked = 3,
    }
}

impl Default for AccountType {
    fn default() -> Self {
        AccountType::Unlinked
    }
}

wire_enum! {
    // internal discriminator: regular entries omit the importance fields
    AccountStateFormat: u8 {
        Regular = 0,
        HighValue = 1,
    }
}

flag_set! {
    /// Which supplemental public keys an account has registered.
    AccountKeyTypeFlags: u8 {
        UNSET = 0,
        LINKED = 1,
        NODE = 2,
        VRF = 4,
    }
}

wire_enum! {
    LockStatus: u8 {
        Unused = 0,
        Used = 1,
    }
}

impl Default for LockStatus {
    fn default() -> Self {
        LockStatus::Unused
    }
}

wire_enum! {
    MetadataType: u8 {
        Account = 0,
        Mosaic = 1,
        Namespace = 2,
    }
}

impl Default for MetadataType {
    fn default() -> Self {
        MetadataType::Account
    }
}

wire_enum! {
    NamespaceAliasType: u8 {
        None = 0,
        MosaicId = 1,
        Address = 2,
    }
}

wire_enum! {
    MosaicRestrictionEntryType: u8 {
        Address = 0,
        Global = 1,
    }
}

/// A voting key pinned to an epoch range.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PinnedVotingKey {
    pub voting_public_key: VotingPublicKey,
    pub start_epoch: FinalizationEpoch,
    pub end_epoch: FinalizationEpoch,
}

impl FixedSize for PinnedVotingKey {
    const SIZE: usize = VotingPublicKey::SIZE + FinalizationEpoch::SIZE * 2;
}

impl Codec for PinnedVotingKey {
    fn size(&self) -> usize {
        Self::SIZE
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        self.voting_public_key.write_into(out);
        self.start_epoch.write_into(out);
        self.end_epoch.write_into(out);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let voting_public_key = VotingPublicKey::deserialize(view)?;
        let start_epoch = FinalizationEpoch::deserialize(view)?;
        let end_epoch = FinalizationEpoch::deserialize(view)?;
        Ok(PinnedVotingKey {
            voting_public_key,
            start_epoch,
            end_epoch,
        })
    }
}

/// Account importance at the most recent importance recalculation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportanceSnapshot {
    pub importance: Importance,
    pub height: ImportanceHeight,
}

impl FixedSize for ImportanceSnapshot {
    const SIZE: usize = Importance::SIZE + ImportanceHeight::SIZE;
}

impl Codec for ImportanceSnapshot {
    fn size(&self) -> usize {
        Self::SIZE
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        self.importance.write_into(out);
        self.height.write_into(out);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let importance = Importance::deserialize(view)?;
        let height = ImportanceHeight::deserialize(view)?;
        Ok(ImportanceSnapshot { importance, height })
    }
}

/// Account activity within a single importance grouping.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HeightActivityBucket {
    pub start_height: ImportanceHeight,
    pub total_fees_paid: Amount,
    pub beneficiary_count: u32,
    pub raw_score: u64,
}

impl FixedSize for HeightActivityBucket {
    const SIZE: usize = ImportanceHeight::SIZE + Amount::SIZE + 4 + 8;
}

impl Codec for HeightActivityBucket {
    fn size(&self) -> usize {
        Self::SIZE
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        self.start_height.write_into(out);
        self.total_fees_paid.write_into(out);
        self.beneficiary_count.write_into(out);
        self.raw_score.write_into(out);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let start_height = ImportanceHeight::deserialize(view)?;
        let total_fees_paid = Amount::deserialize(view)?;
        let beneficiary_count = u32::deserialize(view)?;
        let raw_score = u64::deserialize(view)?;
        Ok(HeightActivityBucket {
            start_height,
            total_fees_paid,
            beneficiary_count,
            raw_score,
        })
    }
}

/// Importance data present only for high-value accounts: one snapshot plus a
/// fixed window of five activity buckets.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HighValueAccountData {
    pub importance_snapshot: ImportanceSnapshot,
    pub activity_buckets: [HeightActivityBucket; 5],
}

impl FixedSize for HighValueAccountData {
    const SIZE: usize = ImportanceSnapshot::SIZE + HeightActivityBucket::SIZE * 5;
}

impl Codec for HighValueAccountData {
    fn size(&self) -> usize {
        Self::SIZE
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        self.importance_snapshot.write_into(out);
        for bucket in &self.activity_buckets {
            bucket.write_into(out);
        }
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let importance_snapshot = ImportanceSnapshot::deserialize(view)?;
        let mut activity_buckets = [HeightActivityBucket::default(); 5];
        for bucket in &mut activity_buckets {
            *bucket = HeightActivityBucket::deserialize(view)?;
        }
        Ok(HighValueAccountData {
            importance_snapshot,
            activity_buckets,
        })
    }
}

/// Full state of an account.
///
/// The supplemental key mask and the regular/high-value format byte are
/// derived from field presence on write; they are never stored separately, so
/// mask and fields cannot disagree.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AccountState {
    pub version: u16,
    pub address: Address,
    pub address_height: Height,
    pub public_key: PublicKey,
    pub public_key_height: Height,
    pub account_type: AccountType,
    pub linked_public_key: Option<PublicKey>,
    pub node_public_key: Option<PublicKey>,
    pub vrf_public_key: Option<PublicKey>,
    pub voting_public_keys: Vec<PinnedVotingKey>,
    pub high_value: Option<HighValueAccountData>,
    pub balances: Vec<Mosaic>,
}

impl AccountState {
    pub fn supplemental_public_keys_mask(&self) -> AccountKeyTypeFlags {
        let mut mask = AccountKeyTypeFlags::UNSET;
        if self.linked_public_key.is_some() {
            mask = mask | AccountKeyTypeFlags::LINKED;
        }
        if self.node_public_key.is_some() {
            mask = mask | AccountKeyTypeFlags::NODE;
        }
        if self.vrf_public_key.is_some() {
            mask = mask | AccountKeyTypeFlags::VRF;
        }
        mask
    }

    fn format(&self) -> AccountStateFormat {
        if self.high_value.is_some() {
            AccountStateFormat::HighValue
        } else {
            AccountStateFormat::Regular
        }
    }
}

impl Codec for AccountState {
    fn size(&self) -> usize {
        let optional_key = |key: &Option<PublicKey>| key.map_or(0, |_| PublicKey::SIZE);
        2 + Address::SIZE
            + Height::SIZE
            + PublicKey::SIZE
            + Height::SIZE
            + AccountType::SIZE
            + AccountStateFormat::SIZE
            + AccountKeyTypeFlags::SIZE
            + 1
            + optional_key(&self.linked_public_key)
            + optional_key(&self.node_public_key)
            + optional_key(&self.vrf_public_key)
            + arrays::size_of_elements(&self.voting_public_keys)
            + self.high_value.map_or(0, |_| HighValueAccountData::SIZE)
            + 2
            + arrays::size_of_elements(&self.balances)
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        debug_assert!(self.voting_public_keys.len() <= usize::from(u8::MAX));
        debug_assert!(self.balances.len() <= usize::from(u16::MAX));
        self.version.write_into(out);
        self.address.write_into(out);
        self.address_height.write_into(out);
        self.public_key.write_into(out);
        self.public_key_height.write_into(out);
        self.account_type.write_into(out);
        self.format().write_into(out);
        self.supplemental_public_keys_mask().write_into(out);
        (self.voting_public_keys.len() as u8).write_into(out);
        if let Some(key) = self.linked_public_key {
            key.write_into(out);
        }
        if let Some(key) = self.node_public_key {
            key.write_into(out);
        }
        if let Some(key) = self.vrf_public_key {
            key.write_into(out);
        }
        arrays::write_elements(out, &self.voting_public_keys);
        if let Some(high_value) = self.high_value {
            high_value.write_into(out);
        }
        (self.balances.len() as u16).write_into(out);
        arrays::write_elements(out, &self.balances);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let version = u16::deserialize(view)?;
        let address = Address::deserialize(view)?;
        let address_height = Height::deserialize(view)?;
        let public_key = PublicKey::deserialize(view)?;
        let public_key_height = Height::deserialize(view)?;
        let account_type = AccountType::deserialize(view)?;
        let format = AccountStateFormat::deserialize(view)?;
        let mask = AccountKeyTypeFlags::deserialize(view)?;
        let voting_public_keys_count = u8::deserialize(view)?;
        let read_masked_key = |view: &mut BufferView<'_>, flag| -> Result<Option<PublicKey>> {
            if mask.has(flag) {
                Ok(Some(PublicKey::deserialize(view)?))
            } else {
                Ok(None)
            }
        };
        let linked_public_key = read_masked_key(view, AccountKeyTypeFlags::LINKED)?;
        let node_public_key = read_masked_key(view, AccountKeyTypeFlags::NODE)?;
        let vrf_public_key = read_masked_key(view, AccountKeyTypeFlags::VRF)?;
        let voting_public_keys =
            arrays::read_count(view, usize::from(voting_public_keys_count))?;
        let high_value = match format {
            AccountStateFormat::Regular => None,
            AccountStateFormat::HighValue => Some(HighValueAccountData::deserialize(view)?),
        };
        let balances_count = u16::deserialize(view)?;
        let balances = arrays::read_count(view, usize::from(balances_count))?;
        Ok(AccountState {
            version,
            address,
            address_height,
            public_key,
            public_key_height,
            account_type,
            linked_public_key,
            node_public_key,
            vrf_public_key,
            voting_public_keys,
            high_value,
            balances,
        })
    }
}

/// Definition fields of a mosaic as recorded in state (distinct from the
/// mosaic definition transaction body: ownership is resolved and versioned).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MosaicDefinition {
    pub start_height: Height,
    pub owner_address: Address,
    pub revision: u32,
    pub flags: MosaicFlags,
    pub divisibility: u8,
    pub duration: BlockDuration,
}

impl FixedSize for MosaicDefinition {
    const SIZE: usize = Height::SIZE
        + Address::SIZE
        + 4
        + MosaicFlags::SIZE
        + 1
        + BlockDuration::SIZE;
}

impl Codec for MosaicDefinition {
    fn size(&self) -> usize {
        Self::SIZE
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        self.start_height.write_into(out);
        self.owner_address.write_into(out);
        self.revision.write_into(out);
        self.flags.write_into(out);
        self.divisibility.write_into(out);
        self.duration.write_into(out);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let start_height = Height::deserialize(view)?;
        let owner_address = Address::deserialize(view)?;
        let revision = u32::deserialize(view)?;
        let flags = MosaicFlags::deserialize(view)?;
        let divisibility = u8::deserialize(view)?;
        let duration = BlockDuration::deserialize(view)?;
        Ok(MosaicDefinition {
            start_height,
            owner_address,
            revision,
            flags,
            divisibility,
            duration,
        })
    }
}

/// State entry for a mosaic.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MosaicEntry {
    pub version: u16,
    pub mosaic_id: MosaicId,
    pub supply: Amount,
    pub definition: MosaicDefinition,
}

impl FixedSize for MosaicEntry {
    const SIZE: usize = 2 + MosaicId::SIZE + Amount::SIZE + MosaicDefinition::SIZE;
}

impl Codec for MosaicEntry {
    fn size(&self) -> usize {
        Self::SIZE
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        self.version.write_into(out);
        self.mosaic_id.write_into(out);
        self.supply.write_into(out);
        self.definition.write_into(out);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let version = u16::deserialize(view)?;
        let mosaic_id = MosaicId::deserialize(view)?;
        let supply = Amount::deserialize(view)?;
        let definition = MosaicDefinition::deserialize(view)?;
        Ok(MosaicEntry {
            version,
            mosaic_id,
            supply,
            definition,
        })
    }
}

/// What a namespace currently points at, if anything. The alias type byte is
/// derived from the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamespaceAlias {
    None,
    Mosaic(MosaicId),
    Address(Address),
}

impl Default for NamespaceAlias {
    fn default() -> Self {
        NamespaceAlias::None
    }
}

impl NamespaceAlias {
    pub fn alias_type(&self) -> NamespaceAliasType {
        match self {
            NamespaceAlias::None => NamespaceAliasType::None,
            NamespaceAlias::Mosaic(_) => NamespaceAliasType::MosaicId,
            NamespaceAlias::Address(_) => NamespaceAliasType::Address,
        }
    }
}

impl Codec for NamespaceAlias {
    fn size(&self) -> usize {
        NamespaceAliasType::SIZE
            + match self {
                NamespaceAlias::None => 0,
                NamespaceAlias::Mosaic(_) => MosaicId::SIZE,
                NamespaceAlias::Address(_) => Address::SIZE,
            }
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        self.alias_type().write_into(out);
        match self {
            NamespaceAlias::None => {}
            NamespaceAlias::Mosaic(mosaic_id) => mosaic_id.write_into(out),
            NamespaceAlias::Address(address) => address.write_into(out),
        }
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        match NamespaceAliasType::deserialize(view)? {
            NamespaceAliasType::None => Ok(NamespaceAlias::None),
            NamespaceAliasType::MosaicId => Ok(NamespaceAlias::Mosaic(MosaicId::deserialize(view)?)),
            NamespaceAliasType::Address => {
                Ok(NamespaceAlias::Address(Address::deserialize(view)?))
            }
        }
    }
}

/// Start and end heights of a namespace lease.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NamespaceLifetime {
    pub lifetime_start: Height,
    pub lifetime_end: Height,
}

impl FixedSize for NamespaceLifetime {
    const SIZE: usize = Height::SIZE * 2;
}

impl Codec for NamespaceLifetime {
    fn size(&self) -> usize {
        Self::SIZE
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        self.lifetime_start.write_into(out);
        self.lifetime_end.write_into(out);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let lifetime_start = Height::deserialize(view)?;
        let lifetime_end = Height::deserialize(view)?;
        Ok(NamespaceLifetime {
            lifetime_start,
            lifetime_end,
        })
    }
}

/// Path from a root namespace down to one descendant, with that descendant's
/// alias.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NamespacePath {
    pub path: Vec<NamespaceId>,
    pub alias: NamespaceAlias,
}

impl Codec for NamespacePath {
    fn size(&self) -> usize {
        1 + arrays::size_of_elements(&self.path) + self.alias.size()
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        debug_assert!(self.path.len() <= usize::from(u8::MAX));
        (self.path.len() as u8).write_into(out);
        arrays::write_elements(out, &self.path);
        self.alias.write_into(out);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let path_size = u8::deserialize(view)?;
        let path = arrays::read_count(view, usize::from(path_size))?;
        let alias = NamespaceAlias::deserialize(view)?;
        Ok(NamespacePath { path, alias })
    }
}

/// State entry for a root namespace and all of its descendants.
///
/// Child paths must be supplied in ascending path order; as elsewhere the
/// ordering is a producer contract checked only in debug builds.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RootNamespaceHistory {
    pub version: u16,
    pub id: NamespaceId,
    pub owner_address: Address,
    pub lifetime: NamespaceLifetime,
    pub root_alias: NamespaceAlias,
    pub paths: Vec<NamespacePath>,
}

impl Codec for RootNamespaceHistory {
    fn size(&self) -> usize {
        2 + NamespaceId::SIZE
            + Address::SIZE
            + NamespaceLifetime::SIZE
            + self.root_alias.size()
            + 8
            + arrays::size_of_elements(&self.paths)
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        arrays::debug_check_sorted(&self.paths, |entry| entry.path.clone());
        self.version.write_into(out);
        self.id.write_into(out);
        self.owner_address.write_into(out);
        self.lifetime.write_into(out);
        self.root_alias.write_into(out);
        (self.paths.len() as u64).write_into(out);
        arrays::write_elements(out, &self.paths);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let version = u16::deserialize(view)?;
        let id = NamespaceId::deserialize(view)?;
        let owner_address = Address::deserialize(view)?;
        let lifetime = NamespaceLifetime::deserialize(view)?;
        let root_alias = NamespaceAlias::deserialize(view)?;
        let children_count = u64::deserialize(view)?;
        let paths = arrays::read_count(view, children_count as usize)?;
        Ok(RootNamespaceHistory {
            version,
            id,
            owner_address,
            lifetime,
            root_alias,
            paths,
        })
    }
}

/// State entry for an active hash lock.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HashLockInfo {
    pub version: u16,
    pub owner_address: Address,
    pub mosaic_id: MosaicId,
    pub amount: Amount,
    pub end_height: Height,
    pub status: LockStatus,
    pub hash: Hash256,
}

impl FixedSize for HashLockInfo {
    const SIZE: usize = 2
        + Address::SIZE
        + MosaicId::SIZE
        + Amount::SIZE
        + Height::SIZE
        + LockStatus::SIZE
        + Hash256::SIZE;
}

impl Codec for HashLockInfo {
    fn size(&self) -> usize {
        Self::SIZE
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        self.version.write_into(out);
        self.owner_address.write_into(out);
        self.mosaic_id.write_into(out);
        self.amount.write_into(out);
        self.end_height.write_into(out);
        self.status.write_into(out);
        self.hash.write_into(out);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let version = u16::deserialize(view)?;
        let owner_address = Address::deserialize(view)?;
        let mosaic_id = MosaicId::deserialize(view)?;
        let amount = Amount::deserialize(view)?;
        let end_height = Height::deserialize(view)?;
        let status = LockStatus::deserialize(view)?;
        let hash = Hash256::deserialize(view)?;
        Ok(HashLockInfo {
            version,
            owner_address,
            mosaic_id,
            amount,
            end_height,
            status,
            hash,
        })
    }
}

/// State entry for an active secret lock.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SecretLockInfo {
    pub version: u16,
    pub owner_address: Address,
    pub mosaic_id: MosaicId,
    pub amount: Amount,
    pub end_height: Height,
    pub status: LockStatus,
    pub hash_algorithm: LockHashAlgorithm,
    pub secret: Hash256,
    pub recipient: Address,
}

impl FixedSize for SecretLockInfo {
    const SIZE: usize = 2
        + Address::SIZE
        + MosaicId::SIZE
        + Amount::SIZE
        + Height::SIZE
        + LockStatus::SIZE
        + LockHashAlgorithm::SIZE
        + Hash256::SIZE
        + Address::SIZE;
}

impl Codec for SecretLockInfo {
    fn size(&self) -> usize {
        Self::SIZE
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        self.version.write_into(out);
        self.owner_address.write_into(out);
        self.mosaic_id.write_into(out);
        self.amount.write_into(out);
        self.end_height.write_into(out);
        self.status.write_into(out);
        self.hash_algorithm.write_into(out);
        self.secret.write_into(out);
        self.recipient.write_into(out);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let version = u16::deserialize(view)?;
        let owner_address = Address::deserialize(view)?;
        let mosaic_id = MosaicId::deserialize(view)?;
        let amount = Amount::deserialize(view)?;
        let end_height = Height::deserialize(view)?;
        let status = LockStatus::deserialize(view)?;
        let hash_algorithm = LockHashAlgorithm::deserialize(view)?;
        let secret = Hash256::deserialize(view)?;
        let recipient = Address::deserialize(view)?;
        Ok(SecretLockInfo {
            version,
            owner_address,
            mosaic_id,
            amount,
            end_height,
            status,
            hash_algorithm,
            secret,
            recipient,
        })
    }
}

/// State entry for one metadata key-value attachment.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MetadataEntry {
    pub version: u16,
    pub source_address: Address,
    pub target_address: Address,
    pub scoped_metadata_key: ScopedMetadataKey,
    /// Target mosaic or namespace id; zero for account metadata.
    pub target_id: u64,
    pub metadata_type: MetadataType,
    pub value: Vec<u8>,
}

impl Codec for MetadataEntry {
    fn size(&self) -> usize {
        2 + Address::SIZE * 2
            + ScopedMetadataKey::SIZE
            + 8
            + MetadataType::SIZE
            + 2
            + self.value.len()
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        debug_assert!(self.value.len() <= usize::from(u16::MAX));
        self.version.write_into(out);
        self.source_address.write_into(out);
        self.target_address.write_into(out);
        self.scoped_metadata_key.write_into(out);
        self.target_id.write_into(out);
        self.metadata_type.write_into(out);
        (self.value.len() as u16).write_into(out);
        out.extend_from_slice(&self.value);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let version = u16::deserialize(view)?;
        let source_address = Address::deserialize(view)?;
        let target_address = Address::deserialize(view)?;
        let scoped_metadata_key = ScopedMetadataKey::deserialize(view)?;
        let target_id = u64::deserialize(view)?;
        let metadata_type = MetadataType::deserialize(view)?;
        let value_size = u16::deserialize(view)?;
        let value = view.shift(usize::from(value_size))?.to_vec();
        Ok(MetadataEntry {
            version,
            source_address,
            target_address,
            scoped_metadata_key,
            target_id,
            metadata_type,
            value,
        })
    }
}

/// Restriction value stored for one (mosaic, address, key) triple.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AddressKeyValue {
    pub key: MosaicRestrictionKey,
    pub value: u64,
}

impl FixedSize for AddressKeyValue {
    const SIZE: usize = MosaicRestrictionKey::SIZE + 8;
}

impl Codec for AddressKeyValue {
    fn size(&self) -> usize {
        Self::SIZE
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        self.key.write_into(out);
        self.value.write_into(out);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let key = MosaicRestrictionKey::deserialize(view)?;
        let value = u64::deserialize(view)?;
        Ok(AddressKeyValue { key, value })
    }
}

/// Rule evaluated against a reference value to decide mosaic transferability.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RestrictionRule {
    pub reference_mosaic_id: MosaicId,
    pub restriction_value: u64,
    pub restriction_type: MosaicRestrictionType,
}

impl FixedSize for RestrictionRule {
    const SIZE: usize = MosaicId::SIZE + 8 + MosaicRestrictionType::SIZE;
}

impl Codec for RestrictionRule {
    fn size(&self) -> usize {
        Self::SIZE
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        self.reference_mosaic_id.write_into(out);
        self.restriction_value.write_into(out);
        self.restriction_type.write_into(out);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let reference_mosaic_id = MosaicId::deserialize(view)?;
        let restriction_value = u64::deserialize(view)?;
        let restriction_type = MosaicRestrictionType::deserialize(view)?;
        Ok(RestrictionRule {
            reference_mosaic_id,
            restriction_value,
            restriction_type,
        })
    }
}

/// Global restriction rule keyed by restriction key.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GlobalKeyValue {
    pub key: MosaicRestrictionKey,
    pub restriction_rule: RestrictionRule,
}

impl FixedSize for GlobalKeyValue {
    const SIZE: usize = MosaicRestrictionKey::SIZE + RestrictionRule::SIZE;
}

impl Codec for GlobalKeyValue {
    fn size(&self) -> usize {
        Self::SIZE
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        self.key.write_into(out);
        self.restriction_rule.write_into(out);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let key = MosaicRestrictionKey::deserialize(view)?;
        let restriction_rule = RestrictionRule::deserialize(view)?;
        Ok(GlobalKeyValue { key, restriction_rule })
    }
}

/// Address-scoped restriction values for one mosaic.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MosaicAddressRestrictionEntry {
    pub mosaic_id: MosaicId,
    pub address: Address,
    pub key_pairs: Vec<AddressKeyValue>,
}

impl Codec for MosaicAddressRestrictionEntry {
    fn size(&self) -> usize {
        MosaicId::SIZE + Address::SIZE + 1 + arrays::size_of_elements(&self.key_pairs)
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        debug_assert!(self.key_pairs.len() <= usize::from(u8::MAX));
        arrays::debug_check_sorted(&self.key_pairs, |pair| pair.key.0);
        self.mosaic_id.write_into(out);
        self.address.write_into(out);
        (self.key_pairs.len() as u8).write_into(out);
        arrays::write_elements(out, &self.key_pairs);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let mosaic_id = MosaicId::deserialize(view)?;
        let address = Address::deserialize(view)?;
        let key_value_count = u8::deserialize(view)?;
        let key_pairs = arrays::read_count(view, usize::from(key_value_count))?;
        Ok(MosaicAddressRestrictionEntry {
            mosaic_id,
            address,
            key_pairs,
        })
    }
}

/// Global restriction rules for one mosaic.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MosaicGlobalRestrictionEntry {
    pub mosaic_id: MosaicId,
    pub key_pairs: Vec<GlobalKeyValue>,
}

impl Codec for MosaicGlobalRestrictionEntry {
    fn size(&self) -> usize {
        MosaicId::SIZE + 1 + arrays::size_of_elements(&self.key_pairs)
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        debug_assert!(self.key_pairs.len() <= usize::from(u8::MAX));
        arrays::debug_check_sorted(&self.key_pairs, |pair| pair.key.0);
        self.mosaic_id.write_into(out);
        (self.key_pairs.len() as u8).write_into(out);
        arrays::write_elements(out, &self.key_pairs);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let mosaic_id = MosaicId::deserialize(view)?;
        let key_value_count = u8::deserialize(view)?;
        let key_pairs = arrays::read_count(view, usize::from(key_value_count))?;
        Ok(MosaicGlobalRestrictionEntry {
            mosaic_id,
            key_pairs,
        })
    }
}

/// State entry for mosaic restrictions, either address-scoped or global. The
/// entry type byte is derived from the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MosaicRestrictionEntry {
    Address {
        version: u16,
        entry: MosaicAddressRestrictionEntry,
    },
    Global {
        version: u16,
        entry: MosaicGlobalRestrictionEntry,
    },
}

impl MosaicRestrictionEntry {
    pub fn entry_type(&self) -> MosaicRestrictionEntryType {
        match self {
            MosaicRestrictionEntry::Address { .. } => MosaicRestrictionEntryType::Address,
            MosaicRestrictionEntry::Global { .. } => MosaicRestrictionEntryType::Global,
        }
    }

    pub fn version(&self) -> u16 {
        match self {
            MosaicRestrictionEntry::Address { version, .. }
            | MosaicRestrictionEntry::Global { version, .. } => *version,
        }
    }
}

impl Codec for MosaicRestrictionEntry {
    fn size(&self) -> usize {
        2 + MosaicRestrictionEntryType::SIZE
            + match self {
                MosaicRestrictionEntry::Address { entry, .. } => entry.size(),
                MosaicRestrictionEntry::Global { entry, .. } => entry.size(),
            }
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        self.version().write_into(out);
        self.entry_type().write_into(out);
        match self {
            MosaicRestrictionEntry::Address { entry, .. } => entry.write_into(out),
            MosaicRestrictionEntry::Global { entry, .. } => entry.write_into(out),
        }
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let version = u16::deserialize(view)?;
        match MosaicRestrictionEntryType::deserialize(view)? {
            MosaicRestrictionEntryType::Address => Ok(MosaicRestrictionEntry::Address {
                version,
                entry: MosaicAddressRestrictionEntry::deserialize(view)?,
            }),
            MosaicRestrictionEntryType::Global => Ok(MosaicRestrictionEntry::Global {
                version,
                entry: MosaicGlobalRestrictionEntry::deserialize(view)?,
            }),
        }
    }
}

/// Value list of one account restriction, selected by the membership bit of
/// its restriction flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountRestrictionValues {
    Addresses(Vec<Address>),
    MosaicIds(Vec<MosaicId>),
    TransactionTypes(Vec<TransactionType>),
}

impl Default for AccountRestrictionValues {
    fn default() -> Self {
        AccountRestrictionValues::Addresses(Vec::new())
    }
}

impl AccountRestrictionValues {
    fn membership_flag(&self) -> AccountRestrictionFlags {
        match self {
            AccountRestrictionValues::Addresses(_) => AccountRestrictionFlags::ADDRESS,
            AccountRestrictionValues::MosaicIds(_) => AccountRestrictionFlags::MOSAIC_ID,
            AccountRestrictionValues::TransactionTypes(_) => {
                AccountRestrictionFlags::TRANSACTION_TYPE
            }
        }
    }

    fn len(&self) -> usize {
        match self {
            AccountRestrictionValues::Addresses(values) => values.len(),
            AccountRestrictionValues::MosaicIds(values) => values.len(),
            AccountRestrictionValues::TransactionTypes(values) => values.len(),
        }
    }

    fn values_size(&self) -> usize {
        match self {
            AccountRestrictionValues::Addresses(values) => arrays::size_of_elements(values),
            AccountRestrictionValues::MosaicIds(values) => arrays::size_of_elements(values),
            AccountRestrictionValues::TransactionTypes(values) => arrays::size_of_elements(values),
        }
    }

    fn write_values(&self, out: &mut Vec<u8>) {
        match self {
            AccountRestrictionValues::Addresses(values) => arrays::write_elements(out, values),
            AccountRestrictionValues::MosaicIds(values) => arrays::write_elements(out, values),
            AccountRestrictionValues::TransactionTypes(values) => {
                arrays::write_elements(out, values)
            }
        }
    }
}

/// One restriction of an account: direction bits plus the value list its
/// membership bit selects.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AccountRestrictionsInfo {
    /// True for restrictions on outgoing rather than incoming interactions.
    pub outgoing: bool,
    /// True for block lists, false for allow lists.
    pub block: bool,
    pub values: AccountRestrictionValues,
}

impl AccountRestrictionsInfo {
    pub fn restriction_flags(&self) -> AccountRestrictionFlags {
        let mut flags = self.values.membership_flag();
        if self.outgoing {
            flags = flags | AccountRestrictionFlags::OUTGOING;
        }
        if self.block {
            flags = flags | AccountRestrictionFlags::BLOCK;
        }
        flags
    }
}

impl Codec for AccountRestrictionsInfo {
    fn size(&self) -> usize {
        AccountRestrictionFlags::SIZE + 8 + self.values.values_size()
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        self.restriction_flags().write_into(out);
        (self.values.len() as u64).write_into(out);
        self.values.write_values(out);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let flags = AccountRestrictionFlags::deserialize(view)?;
        let count = u64::deserialize(view)? as usize;
        let membership = flags.0
            & (AccountRestrictionFlags::ADDRESS.0
                | AccountRestrictionFlags::MOSAIC_ID.0
                | AccountRestrictionFlags::TRANSACTION_TYPE.0);
        let values = match AccountRestrictionFlags(membership) {
            AccountRestrictionFlags::ADDRESS => {
                AccountRestrictionValues::Addresses(arrays::read_count(view, count)?)
            }
            AccountRestrictionFlags::MOSAIC_ID => {
                AccountRestrictionValues::MosaicIds(arrays::read_count(view, count)?)
            }
            AccountRestrictionFlags::TRANSACTION_TYPE => {
                AccountRestrictionValues::TransactionTypes(arrays::read_count(view, count)?)
            }
            // zero or multiple membership bits cannot select a value list
            _ => {
                return Err(CodecError::InvalidEnumValue {
                    name: "AccountRestrictionFlags",
                    value: u64::from(flags.0),
                })
            }
        };
        Ok(AccountRestrictionsInfo {
            outgoing: flags.has(AccountRestrictionFlags::OUTGOING),
            block: flags.has(AccountRestrictionFlags::BLOCK),
            values,
        })
    }
}

/// State entry listing every restriction configured by an account.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AccountRestrictions {
    pub version: u16,
    pub address: Address,
    pub restrictions: Vec<AccountRestrictionsInfo>,
}

impl Codec for AccountRestrictions {
    fn size(&self) -> usize {
        2 + Address::SIZE + 8 + arrays::size_of_elements(&self.restrictions)
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        self.version.write_into(out);
        self.address.write_into(out);
        (self.restrictions.len() as u64).write_into(out);
        arrays::write_elements(out, &self.restrictions);
    }

    fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
        let version = u16::deserialize(view)?;
        let address = Address::deserialize(view)?;
        let restrictions_count = u64::deserialize(view)? as usize;
        let restrictions = arrays::read_count(view, restrictions_count)?;
        Ok(AccountRestrictions {
            version,
            address,
            restrictions,
        })
    }
}
