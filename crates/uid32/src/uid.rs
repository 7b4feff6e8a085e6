use std::fmt;

/// Total length of a serialized UID in bytes.
pub const LEN: usize = 32;

// Field offsets are part of the format: consumers that persist the raw
// bytes rely on them staying put.
pub const OFF_TIMESTAMP: usize = 0;
pub const OFF_STACK: usize = 8;
pub const OFF_MACHINE: usize = 16;
pub const OFF_CORE: usize = 20;
pub const OFF_THREAD: usize = 24;
pub const OFF_MIX: usize = 28;

/// A 32-byte identifier derived from machine/process/thread telemetry.
///
/// Layout (all fields little-endian):
///
/// | Offset | Size | Field                |
/// |--------|------|----------------------|
/// | 0      | 8    | timestamp counter    |
/// | 8      | 8    | stack address sample |
/// | 16     | 4    | machine id           |
/// | 20     | 4    | core index           |
/// | 24     | 4    | thread id            |
/// | 28     | 4    | mix                  |
///
/// The `mix` word is the XOR of the other fields truncated to 32 bits. It
/// adds differentiation; it is not an integrity checksum, and none of the
/// fields carry any cryptographic guarantee.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Uid32([u8; LEN]);

impl Uid32 {
    /// Borrows the serialized bytes.
    pub fn as_bytes(&self) -> &[u8; LEN] {
        &self.0
    }

    /// Consumes the id, returning the owned byte array.
    pub fn into_bytes(self) -> [u8; LEN] {
        self.0
    }
}

impl AsRef<[u8]> for Uid32 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Renders the id as 64 lowercase hex digits, suitable as a log or trace
/// correlation tag.
impl fmt::Display for Uid32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.0 {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Uid32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uid32({})", self)
    }
}

/// Serializes the five sampled fields plus the derived mix word into the
/// fixed layout.
pub(crate) fn pack(ts: u64, stack: u64, machine: u32, core: u32, tid: u32) -> Uid32 {
    let mix = (ts as u32) ^ (stack as u32) ^ machine ^ core ^ tid;
    let mut buf = [0u8; LEN];
    buf[OFF_TIMESTAMP..OFF_STACK].copy_from_slice(&ts.to_le_bytes());
    buf[OFF_STACK..OFF_MACHINE].copy_from_slice(&stack.to_le_bytes());
    buf[OFF_MACHINE..OFF_CORE].copy_from_slice(&machine.to_le_bytes());
    buf[OFF_CORE..OFF_THREAD].copy_from_slice(&core.to_le_bytes());
    buf[OFF_THREAD..OFF_MIX].copy_from_slice(&tid.to_le_bytes());
    buf[OFF_MIX..LEN].copy_from_slice(&mix.to_le_bytes());
    Uid32(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_land_at_documented_offsets() {
        let uid = pack(0x1122334455667788, 0x00000000AABBCCDD, 0x11223344, 5, 99);
        let b = uid.as_bytes();

        assert_eq!(&b[OFF_TIMESTAMP..OFF_STACK], &0x1122334455667788u64.to_le_bytes());
        assert_eq!(&b[OFF_STACK..OFF_MACHINE], &0x00000000AABBCCDDu64.to_le_bytes());
        assert_eq!(&b[OFF_MACHINE..OFF_CORE], &0x11223344u32.to_le_bytes());
        assert_eq!(&b[OFF_CORE..OFF_THREAD], &5u32.to_le_bytes());
        assert_eq!(&b[OFF_THREAD..OFF_MIX], &99u32.to_le_bytes());

        let mix = 0x55667788u32 ^ 0xAABBCCDD ^ 0x11223344 ^ 5 ^ 99;
        assert_eq!(&b[OFF_MIX..LEN], &mix.to_le_bytes());
    }

    #[test]
    fn mix_cancels_when_inputs_collide() {
        // XOR is not a checksum: identical inputs cancel out.
        let uid = pack(7, 7, 0, 0, 0);
        assert_eq!(&uid.as_bytes()[OFF_MIX..LEN], &0u32.to_le_bytes());
    }

    #[test]
    fn display_is_64_hex_digits() {
        let uid = pack(0x0102030405060708, 0, 0, 0, 0);
        let s = uid.to_string();
        assert_eq!(s.len(), 64);
        assert!(s.chars().all(|c| c.is_ascii_hexdigit()));
        // Little-endian: the low byte of the counter comes first.
        assert!(s.starts_with("0807060504030201"));
    }

    #[test]
    fn debug_wraps_display() {
        let uid = pack(0, 0, 0xFF, 0, 0);
        let dbg = format!("{:?}", uid);
        assert!(dbg.starts_with("Uid32("));
        assert!(dbg.contains(&uid.to_string()));
    }
}
