//! Hashing utilities for determinism checks.
//!
//! Uses FNV-1a for fast, deterministic hashing of field buffers. These
//! hashes are not cryptographically secure; they exist so two runs can be
//! compared bit-for-bit without keeping both in memory.

use ndarray::Axis;

use crate::field::FieldBuffer;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

/// Feed a single byte into an FNV-1a hash state.
#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

/// Feed a u64 (as 8 LE bytes) into an FNV-1a hash state.
#[inline]
fn fnv1a_u64(mut hash: u64, v: u64) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Fold one buffer into `hash`: shape first, then every value's bits in
/// time-column order.
pub fn buffer_hash(mut hash: u64, buffer: &FieldBuffer) -> u64 {
    let (zmax, tmax) = buffer.dim();
    hash = fnv1a_u64(hash, zmax as u64);
    hash = fnv1a_u64(hash, tmax as u64);
    for column in buffer.view().axis_iter(Axis(1)) {
        for &v in column {
            hash = fnv1a_u64(hash, v.to_bits());
        }
    }
    hash
}

/// Hash an electric/magnetic buffer pair. Buffer order matters.
pub fn fields_hash(electric: &FieldBuffer, magnetic: &FieldBuffer) -> u64 {
    let hash = buffer_hash(FNV_OFFSET, electric);
    buffer_hash(hash, magnetic)
}
