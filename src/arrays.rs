//! Collection protocol: counted arrays, fill arrays and aligned variable-size elements
//!
//! Three collection shapes exist on the wire: an explicit count prefix of
//! per-field width, an implicit count ("consume the remaining bytes of a
//! bounded view"), and a fixed literal count known from context. Variable-size
//! elements inside aggregates and blocks are additionally padded up to an
//! 8-byte boundary before the next element begins.
//!
//! Canonical sort keys attached to some collections are a producer-side
//! contract only: the write path checks ordering with debug assertions, the
//! decode path accepts any order byte-exactly.

use crate::codec::Codec;
use crate::error::{CodecError, Result};
use crate::view::BufferView;

/// Rounds `size` up to the next multiple of `alignment`.
pub fn align_up(size: usize, alignment: usize) -> usize {
    (size + alignment - 1) / alignment * alignment
}

/// Sum of element sizes, 0 for an empty collection.
pub fn size_of_elements<T: Codec>(elements: &[T]) -> usize {
    elements.iter().map(Codec::size).sum()
}

/// Sum of element sizes with each element padded up to `alignment`; when
/// `skip_last_element_padding` is set the final element contributes its raw size.
pub fn size_of_aligned_elements<T: Codec>(
    elements: &[T],
    alignment: usize,
    skip_last_element_padding: bool,
) -> usize {
    match elements.split_last() {
        None => 0,
        Some((last, front)) => {
            let front_size: usize = front
                .iter()
                .map(|element| align_up(element.size(), alignment))
                .sum();
            let last_size = if skip_last_element_padding {
                last.size()
            } else {
                align_up(last.size(), alignment)
            };
            front_size + last_size
        }
    }
}

/// Reads exactly `count` elements.
pub fn read_count<T: Codec>(view: &mut BufferView<'_>, count: usize) -> Result<Vec<T>> {
    let mut elements = Vec::with_capacity(count.min(1024));
    for _ in 0..count {
        elements.push(T::deserialize(view)?);
    }
    Ok(elements)
}

/// Reads elements until the bounded view is exhausted.
pub fn read_fill<T: Codec>(view: &mut BufferView<'_>) -> Result<Vec<T>> {
    let mut elements = Vec::new();
    while !view.is_empty() {
        elements.push(T::deserialize(view)?);
    }
    Ok(elements)
}

/// Reads variable-size elements until the bounded view is exhausted, skipping
/// alignment padding after each element. An element that ends exactly at the
/// end of the view is not followed by padding when
/// `skip_last_element_padding` is set.
pub fn read_aligned_fill<T, F>(
    view: &mut BufferView<'_>,
    deserialize: F,
    alignment: usize,
    skip_last_element_padding: bool,
) -> Result<Vec<T>>
where
    T: Codec,
    F: Fn(&mut BufferView<'_>) -> Result<T>,
{
    let mut elements = Vec::new();
    while !view.is_empty() {
        let element = deserialize(view)?;
        let element_size = element.size();
        if 0 == element_size {
            return Err(CodecError::InvalidElementSize);
        }

        let padding = if skip_last_element_padding && view.is_empty() {
            0
        } else {
            align_up(element_size, alignment) - element_size
        };
        if padding > view.remaining() {
            return Err(CodecError::InvalidAlignmentPadding {
                padding,
                remaining: view.remaining(),
            });
        }
        view.shift(padding)?;

        elements.push(element);
    }
    Ok(elements)
}

/// Writes elements back to back in order.
pub fn write_elements<T: Codec>(out: &mut Vec<u8>, elements: &[T]) {
    for element in elements {
        element.write_into(out);
    }
}

/// Writes variable-size elements, zero-padding each up to `alignment`.
pub fn write_aligned_elements<T: Codec>(
    out: &mut Vec<u8>,
    elements: &[T],
    alignment: usize,
    skip_last_element_padding: bool,
) {
    for (index, element) in elements.iter().enumerate() {
        element.write_into(out);
        if skip_last_element_padding && index + 1 == elements.len() {
            break;
        }
        let padding = align_up(element.size(), alignment) - element.size();
        out.extend(std::iter::repeat(0u8).take(padding));
    }
}

/// Encode-side canonical-order contract check for sort-keyed collections.
pub fn debug_check_sorted<T, K, F>(elements: &[T], key: F)
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    debug_assert!(
        elements.windows(2).all(|pair| key(&pair[0]) < key(&pair[1])),
        "canonically ordered array is not sorted by its extraction key"
    );
    // release builds: ordering is advisory for producers, never enforced on decode
    let _ = (elements, key);
}
