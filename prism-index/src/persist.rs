//! Binary index persistence.
//!
//! Layout, all integers little-endian:
//!
//! ```text
//! magic    4 bytes  "PIDX"
//! version  u32
//! dims     u32
//! count    u32
//! ids      count × (len u32, UTF-8 bytes)
//! matrix   count × dims × f32
//! ```
//!
//! Row *i* of the matrix belongs to id *i*, so a load reconstructs search
//! behavior bit-for-bit.

use std::path::Path;

use prism_core::errors::{IndexLoadError, PrismResult};
use tracing::info;

const MAGIC: &[u8; 4] = b"PIDX";
const FORMAT_VERSION: u32 = 1;

pub(crate) fn write_index(
    path: &Path,
    dims: usize,
    ids: &[String],
    matrix: &[f32],
) -> PrismResult<()> {
    let mut buf: Vec<u8> =
        Vec::with_capacity(16 + ids.iter().map(|id| 4 + id.len()).sum::<usize>() + matrix.len() * 4);
    buf.extend_from_slice(MAGIC);
    buf.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
    buf.extend_from_slice(&(dims as u32).to_le_bytes());
    buf.extend_from_slice(&(ids.len() as u32).to_le_bytes());
    for id in ids {
        buf.extend_from_slice(&(id.len() as u32).to_le_bytes());
        buf.extend_from_slice(id.as_bytes());
    }
    for value in matrix {
        buf.extend_from_slice(&value.to_le_bytes());
    }

    std::fs::write(path, &buf).map_err(|e| IndexLoadError::Io {
        message: format!("writing {}: {e}", path.display()),
    })?;

    info!(
        path = %path.display(),
        rows = ids.len(),
        dims,
        bytes = buf.len(),
        "index saved"
    );
    Ok(())
}

pub(crate) fn read_index(path: &Path) -> PrismResult<(usize, Vec<String>, Vec<f32>)> {
    if !path.exists() {
        return Err(IndexLoadError::Missing {
            path: path.display().to_string(),
        }
        .into());
    }

    let buf = std::fs::read(path).map_err(|e| IndexLoadError::Io {
        message: format!("reading {}: {e}", path.display()),
    })?;
    let mut cursor = Cursor::new(&buf);

    let magic = cursor.take(4)?;
    if magic != MAGIC {
        return Err(IndexLoadError::BadMagic {
            found: magic.iter().map(|b| format!("{b:02x}")).collect(),
        }
        .into());
    }

    let version = cursor.read_u32()?;
    if version != FORMAT_VERSION {
        return Err(IndexLoadError::UnsupportedVersion { found: version }.into());
    }

    let dims = cursor.read_u32()? as usize;
    let count = cursor.read_u32()? as usize;

    // Every id needs at least its 4-byte length prefix, so an absurd
    // count is caught before any allocation sized from it.
    if count.saturating_mul(4) > cursor.remaining() {
        return Err(IndexLoadError::Truncated {
            expected: cursor.offset.saturating_add(count.saturating_mul(4)),
            actual: buf.len(),
        }
        .into());
    }

    let mut ids = Vec::with_capacity(count);
    for row in 0..count {
        let len = cursor.read_u32()? as usize;
        let bytes = cursor.take(len)?;
        let id = std::str::from_utf8(bytes)
            .map_err(|_| IndexLoadError::MalformedId { row })?
            .to_string();
        ids.push(id);
    }

    // count and dims are untrusted header fields; the byte math must
    // not overflow before the size check.
    let expected_floats = count.checked_mul(dims).ok_or(IndexLoadError::Truncated {
        expected: usize::MAX,
        actual: buf.len(),
    })?;
    let matrix_bytes = expected_floats
        .checked_mul(4)
        .ok_or(IndexLoadError::Truncated {
            expected: usize::MAX,
            actual: buf.len(),
        })?;
    if cursor.remaining() != matrix_bytes {
        return Err(IndexLoadError::Truncated {
            expected: cursor.offset.saturating_add(matrix_bytes),
            actual: buf.len(),
        }
        .into());
    }

    let mut matrix = Vec::with_capacity(expected_floats);
    for chunk in cursor.rest().chunks_exact(4) {
        matrix.push(f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
    }

    info!(path = %path.display(), rows = count, dims, "index loaded");
    Ok((dims, ids, matrix))
}

/// Minimal forward-only reader over the file buffer. Every read is
/// bounds-checked so a truncated file surfaces as `Truncated`, never a
/// panic.
struct Cursor<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, offset: 0 }
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], IndexLoadError> {
        if self.offset + n > self.buf.len() {
            return Err(IndexLoadError::Truncated {
                expected: self.offset + n,
                actual: self.buf.len(),
            });
        }
        let slice = &self.buf[self.offset..self.offset + n];
        self.offset += n;
        Ok(slice)
    }

    fn read_u32(&mut self) -> Result<u32, IndexLoadError> {
        let bytes = self.take(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn remaining(&self) -> usize {
        self.buf.len() - self.offset
    }

    fn rest(&self) -> &'a [u8] {
        &self.buf[self.offset..]
    }
}
