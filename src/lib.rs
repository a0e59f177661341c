//! # Catapult Codec
//!
//! Byte-exact serialization of Catapult blockchain entities: transactions,
//! blocks, receipts and ledger state entries.
//!
//! ## Architecture
//!
//! The system is layered bottom-up:
//! - Buffer view (bounded read cursor over immutable bytes)
//! - Codec contract (size / write / deserialize for every wire type)
//! - POD value types and collection protocol
//! - Entity catalogs (transactions, blocks, receipts, state entries)
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Encoding and decoding never touch I/O or global state
//! 2. **Byte Fidelity**: decode-then-encode reproduces the input buffer exactly
//! 3. **Derived Discriminators**: type codes, versions, masks and counts are
//!    computed from field presence, never stored redundantly
//! 4. **Total Failure**: a failed decode returns an error and no partial entity
//!
//! ## Usage
//!
//! ```rust
//! use catapult_codec::codec::Codec;
//! use catapult_codec::transactions::Transaction;
//!
//! let transaction = Transaction::create_by_name("transfer_transaction_v1").unwrap();
//! let bytes = transaction.serialize();
//! let decoded = Transaction::deserialize_from(&bytes).unwrap();
//! assert_eq!(decoded, transaction);
//! ```

pub mod arrays;
pub mod blocks;
pub mod codec;
pub mod error;
pub mod receipts;
pub mod state;
pub mod transactions;
pub mod types;
pub mod view;

pub use codec::{Codec, FixedSize};
pub use error::{CodecError, Result};
pub use view::BufferView;
