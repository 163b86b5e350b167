//! Reads a little-endian binary program into VM memory.

use std::fs;
use std::path::Path;

use crate::consts::MEM_SIZE;
use crate::error::LoadError;
use crate::memory::Memory;

/// Consumes `bytes` two at a time, writing each little-endian pair as one
/// word starting at address 0. A trailing odd byte is ignored. Stops (and
/// reports [`LoadError::Overflow`]) if the program would exceed
/// [`MEM_SIZE`] words.
pub fn load_bytes(memory: &mut Memory, bytes: &[u8]) -> Result<(), LoadError> {
    let words = memory.as_mut_slice();

    for (i, pair) in bytes.chunks_exact(2).enumerate() {
        if i >= MEM_SIZE {
            return Err(LoadError::Overflow);
        }
        words[i] = u16::from_le_bytes([pair[0], pair[1]]);
    }

    Ok(())
}

/// Opens `path` and loads it the same way as [`load_bytes`].
pub fn load_file(memory: &mut Memory, path: impl AsRef<Path>) -> Result<(), LoadError> {
    let bytes = fs::read(path)?;
    load_bytes(memory, &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_little_endian_pairs_sequentially() {
        let mut mem = Memory::new();
        load_bytes(&mut mem, &[0x09, 0x00, 0x01, 0x80]).unwrap();
        assert_eq!(mem.read(0), 9);
        assert_eq!(mem.read(1), 32769);
    }

    #[test]
    fn ignores_trailing_odd_byte() {
        let mut mem = Memory::new();
        load_bytes(&mut mem, &[0x01, 0x00, 0xff]).unwrap();
        assert_eq!(mem.read(0), 1);
        assert_eq!(mem.read(1), 0);
    }

    #[test]
    fn round_trips_through_memory() {
        let bytes: Vec<u8> = (0..64u8).collect();
        let mut mem = Memory::new();
        load_bytes(&mut mem, &bytes).unwrap();

        let mut back = Vec::new();
        for i in 0..bytes.len() / 2 {
            back.extend_from_slice(&mem.read(i as u16).to_le_bytes());
        }
        assert_eq!(back, bytes);
    }

    #[test]
    fn overflowing_program_reports_overflow() {
        let mut mem = Memory::new();
        let bytes = vec![0u8; (MEM_SIZE + 1) * 2];
        let err = load_bytes(&mut mem, &bytes).unwrap_err();
        assert!(matches!(err, LoadError::Overflow));
    }

    #[test]
    fn missing_file_reports_io_error() {
        let mut mem = Memory::new();
        let err = load_file(&mut mem, "/nonexistent/path/to/a/program.bin").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
