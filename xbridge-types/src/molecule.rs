//! Molecule packing for tables and byte vectors.
//!
//! Only the two shapes the bridge needs are implemented:
//!
//! ```text
//! table:          total_size (u32 LE) | offset_0 .. offset_n-1 (u32 LE) | field_0 .. field_n-1
//! fixvec<byte>:   item_count (u32 LE) | bytes
//! ```
//!
//! Unpacking is strict: the buffer must carry exactly the schema's field
//! count, and every length in a header must agree with the buffer it sits in.

use crate::error::MoleculeError;

/// Size of every length/offset number in a molecule header.
pub const NUMBER_SIZE: usize = 4;

fn read_u32_le(buf: &[u8], at: usize) -> usize {
    let mut word = [0u8; NUMBER_SIZE];
    word.copy_from_slice(&buf[at..at + NUMBER_SIZE]);
    u32::from_le_bytes(word) as usize
}

/// Pack raw bytes as `fixvec<byte>` (the schema's `Bytes`).
pub fn pack_bytes(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(NUMBER_SIZE + bytes.len());
    out.extend_from_slice(&(bytes.len() as u32).to_le_bytes());
    out.extend_from_slice(bytes);
    out
}

/// Unpack a `fixvec<byte>`, returning the item bytes.
pub fn unpack_bytes<'a>(buffer: &'static str, buf: &'a [u8]) -> Result<&'a [u8], MoleculeError> {
    if buf.len() < NUMBER_SIZE {
        return Err(MoleculeError::HeaderTooShort {
            buffer,
            expected: NUMBER_SIZE,
            actual: buf.len(),
        });
    }
    let count = read_u32_le(buf, 0);
    let expected = NUMBER_SIZE + count;
    if buf.len() != expected {
        return Err(MoleculeError::TotalSizeMismatch {
            buffer,
            expected,
            actual: buf.len(),
        });
    }
    Ok(&buf[NUMBER_SIZE..])
}

/// Pack already-serialized fields into a table.
pub fn pack_table(fields: &[&[u8]]) -> Vec<u8> {
    let header_size = NUMBER_SIZE * (fields.len() + 1);
    let body_size: usize = fields.iter().map(|f| f.len()).sum();
    let total_size = header_size + body_size;

    let mut out = Vec::with_capacity(total_size);
    out.extend_from_slice(&(total_size as u32).to_le_bytes());

    let mut offset = header_size;
    for field in fields {
        out.extend_from_slice(&(offset as u32).to_le_bytes());
        offset += field.len();
    }
    for field in fields {
        out.extend_from_slice(field);
    }
    out
}

/// Split a table into exactly `field_count` field slices.
pub fn unpack_table<'a>(
    buffer: &'static str,
    buf: &'a [u8],
    field_count: usize,
) -> Result<Vec<&'a [u8]>, MoleculeError> {
    let len = buf.len();
    if len < NUMBER_SIZE {
        return Err(MoleculeError::HeaderTooShort {
            buffer,
            expected: NUMBER_SIZE,
            actual: len,
        });
    }

    let total_size = read_u32_le(buf, 0);
    if total_size != len {
        return Err(MoleculeError::TotalSizeMismatch {
            buffer,
            expected: total_size,
            actual: len,
        });
    }

    if len == NUMBER_SIZE {
        return Err(MoleculeError::FieldCountMismatch {
            buffer,
            expected: field_count,
            actual: 0,
        });
    }
    if len < NUMBER_SIZE * 2 {
        return Err(MoleculeError::HeaderTooShort {
            buffer,
            expected: NUMBER_SIZE * 2,
            actual: len,
        });
    }

    let header_size = read_u32_le(buf, NUMBER_SIZE);
    if header_size % NUMBER_SIZE != 0 || header_size < NUMBER_SIZE * 2 {
        return Err(MoleculeError::InvalidOffset {
            buffer,
            field: 0,
            offset: header_size,
            len,
        });
    }
    if header_size > len {
        return Err(MoleculeError::HeaderTooShort {
            buffer,
            expected: header_size,
            actual: len,
        });
    }

    let actual_fields = header_size / NUMBER_SIZE - 1;
    if actual_fields != field_count {
        return Err(MoleculeError::FieldCountMismatch {
            buffer,
            expected: field_count,
            actual: actual_fields,
        });
    }

    let mut offsets: Vec<usize> = (0..field_count)
        .map(|i| read_u32_le(buf, NUMBER_SIZE * (i + 1)))
        .collect();
    offsets.push(len);

    for (i, pair) in offsets.windows(2).enumerate() {
        if pair[0] > pair[1] {
            return Err(MoleculeError::InvalidOffset {
                buffer,
                field: i,
                offset: pair[0],
                len,
            });
        }
    }

    Ok(offsets.windows(2).map(|pair| &buf[pair[0]..pair[1]]).collect())
}
