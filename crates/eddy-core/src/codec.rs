//! Binary encode/decode primitives for dynamics persistence.
//!
//! All values are little-endian. Booleans are a single `0`/`1` byte.
//! Dynamics objects write their own state in a fixed field order; the
//! stream carries no schema and no type tags.

use std::io::{Read, Write};

use crate::error::CodecError;

// ── Primitive writers ───────────────────────────────────────────

/// Write a single byte.
pub fn write_u8(w: &mut dyn Write, v: u8) -> Result<(), CodecError> {
    w.write_all(&[v])?;
    Ok(())
}

/// Write a boolean as one byte.
pub fn write_bool(w: &mut dyn Write, v: bool) -> Result<(), CodecError> {
    write_u8(w, u8::from(v))
}

/// Write a little-endian f64.
pub fn write_f64_le(w: &mut dyn Write, v: f64) -> Result<(), CodecError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

// ── Primitive readers ───────────────────────────────────────────

/// Read a single byte.
pub fn read_u8(r: &mut dyn Read) -> Result<u8, CodecError> {
    let mut buf = [0u8; 1];
    r.read_exact(&mut buf)?;
    Ok(buf[0])
}

/// Read a boolean byte, rejecting anything other than `0` or `1`.
pub fn read_bool(r: &mut dyn Read) -> Result<bool, CodecError> {
    match read_u8(r)? {
        0 => Ok(false),
        1 => Ok(true),
        byte => Err(CodecError::InvalidBool { byte }),
    }
}

/// Read a little-endian f64.
pub fn read_f64_le(r: &mut dyn Read) -> Result<f64, CodecError> {
    let mut buf = [0u8; 8];
    r.read_exact(&mut buf)?;
    Ok(f64::from_le_bytes(buf))
}
