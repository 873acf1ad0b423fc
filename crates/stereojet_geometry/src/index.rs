//! Index buffer helpers: rebasing sub-part indices and picking an index width

use crate::GeometryError;

/// Concatenate per-part index arrays into one buffer.
///
/// Each part's indices are offset by the total vertex count of the parts
/// before it, so the result indexes the concatenated vertex buffer.
pub fn concat_indices<I: AsRef<[u32]>>(
    index_arrays: &[I],
    vertex_counts: &[usize],
) -> Result<Vec<u32>, GeometryError> {
    if index_arrays.len() != vertex_counts.len() {
        return Err(GeometryError::PartCountMismatch {
            index_arrays: index_arrays.len(),
            vertex_counts: vertex_counts.len(),
        });
    }

    let total = index_arrays.iter().map(|a| a.as_ref().len()).sum();
    let mut combined = Vec::with_capacity(total);
    let mut base = 0u32;
    for (indices, &count) in index_arrays.iter().zip(vertex_counts) {
        for &i in indices.as_ref() {
            let rebased = i
                .checked_add(base)
                .ok_or_else(|| overflow(u64::from(i) + u64::from(base)))?;
            combined.push(rebased);
        }
        let count = u32::try_from(count).map_err(|_| overflow(count as u64))?;
        base = base
            .checked_add(count)
            .ok_or_else(|| overflow(u64::from(base) + u64::from(count)))?;
    }
    Ok(combined)
}

fn overflow(value: u64) -> GeometryError {
    GeometryError::IndexOverflow {
        max_index: value.min(u64::from(u32::MAX)) as u32,
        bits: 32,
    }
}

/// Width of one index in the uploaded element buffer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexFormat {
    U8,
    U16,
    U32,
}

impl IndexFormat {
    /// Narrowest width able to address `vertex_count` vertices
    pub fn for_vertex_count(vertex_count: usize) -> Self {
        if vertex_count <= u8::MAX as usize + 1 {
            IndexFormat::U8
        } else if vertex_count <= u16::MAX as usize + 1 {
            IndexFormat::U16
        } else {
            IndexFormat::U32
        }
    }

    /// Bytes per index
    pub fn byte_size(self) -> usize {
        match self {
            IndexFormat::U8 => 1,
            IndexFormat::U16 => 2,
            IndexFormat::U32 => 4,
        }
    }

    fn bits(self) -> u32 {
        self.byte_size() as u32 * 8
    }

    /// Pack indices at this width (native endianness)
    pub fn pack(self, indices: &[u32]) -> Result<Vec<u8>, GeometryError> {
        let max_index = indices.iter().copied().max().unwrap_or(0);
        let fits = match self {
            IndexFormat::U8 => max_index <= u8::MAX as u32,
            IndexFormat::U16 => max_index <= u16::MAX as u32,
            IndexFormat::U32 => true,
        };
        if !fits {
            return Err(GeometryError::IndexOverflow { max_index, bits: self.bits() });
        }

        let bytes = match self {
            IndexFormat::U8 => indices.iter().map(|&i| i as u8).collect(),
            IndexFormat::U16 => {
                let narrow: Vec<u16> = indices.iter().map(|&i| i as u16).collect();
                bytemuck::cast_slice(&narrow).to_vec()
            }
            IndexFormat::U32 => bytemuck::cast_slice(indices).to_vec(),
        };
        Ok(bytes)
    }
}
