//! Core codec contract shared by every wire-format type
//!
//! Encoding is a two-phase protocol: compute `size` (a pure function of current
//! field values), allocate an output buffer of exactly that size, then write
//! fields in declaration order. The ordering is what guarantees the leading
//! size field of an entity always equals the bytes actually produced.

use crate::error::Result;
use crate::view::BufferView;

/// Serialization contract for a wire-format type.
pub trait Codec: Sized {
    /// Exact number of bytes `write_into` will produce for the current field
    /// values. Conditional fields contribute zero when absent.
    fn size(&self) -> usize;

    /// Appends this value's wire representation to `out`.
    fn write_into(&self, out: &mut Vec<u8>);

    /// Decodes one value from the front of `view`, advancing it by exactly the
    /// number of bytes consumed. A failed decode leaves no usable partial value.
    fn deserialize(view: &mut BufferView<'_>) -> Result<Self>;

    /// Serializes to a freshly allocated buffer of exactly `size` bytes.
    fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.size());
        self.write_into(&mut out);
        debug_assert_eq!(
            out.len(),
            self.size(),
            "serialized length must equal computed size"
        );
        out
    }

    /// Convenience entry point decoding from a plain byte slice.
    fn deserialize_from(bytes: &[u8]) -> Result<Self> {
        let mut view = BufferView::new(bytes);
        Self::deserialize(&mut view)
    }
}

/// Marker for types whose wire size is a compile-time constant.
pub trait FixedSize {
    const SIZE: usize;
}

macro_rules! integer_codec {
    ($($ty:ty => $read:ident),+ $(,)?) => {
        $(
            impl FixedSize for $ty {
                const SIZE: usize = std::mem::size_of::<$ty>();
            }

            impl Codec for $ty {
                fn size(&self) -> usize {
                    Self::SIZE
                }

                fn write_into(&self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_le_bytes());
                }

                fn deserialize(view: &mut BufferView<'_>) -> Result<Self> {
                    view.$read()
                }
            }
        )+
    };
}

integer_codec! {
    u8 => read_u8,
    u16 => read_u16,
    u32 => read_u32,
    u64 => read_u64,
    i8 => read_i8,
    i16 => read_i16,
}
