use super::{DecodeError, RECORD_SIZE};
use byteorder::{ByteOrder, LittleEndian, ReadBytesExt};
use std::io::{Cursor, Read};

/// Sequential little-endian reader over one record.
pub struct FieldReader<'a> {
    cursor: Cursor<&'a [u8]>,
    record: usize,
}

impl<'a> FieldReader<'a> {
    pub fn new(record: usize, bytes: &'a [u8]) -> Result<FieldReader<'a>, DecodeError> {
        if bytes.len() < RECORD_SIZE {
            return Err(DecodeError::Truncated {
                record,
                expected: RECORD_SIZE,
                actual: bytes.len(),
            });
        }
        Ok(FieldReader {
            cursor: Cursor::new(&bytes[..RECORD_SIZE]),
            record,
        })
    }

    fn truncated(&self) -> DecodeError {
        DecodeError::Truncated {
            record: self.record,
            expected: RECORD_SIZE,
            actual: self.cursor.get_ref().len(),
        }
    }

    pub fn u8(&mut self) -> Result<u8, DecodeError> {
        self.cursor.read_u8().map_err(|_| self.truncated())
    }

    pub fn u16(&mut self) -> Result<u16, DecodeError> {
        self.cursor
            .read_u16::<LittleEndian>()
            .map_err(|_| self.truncated())
    }

    pub fn flag(&mut self) -> Result<bool, DecodeError> {
        Ok(self.u8()? != 0)
    }

    pub fn bytes<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let mut buf = [0u8; N];
        self.cursor
            .read_exact(&mut buf)
            .map_err(|_| self.truncated())?;
        Ok(buf)
    }

    /// Reads a NUL padded string occupying `size` bytes. Bytes map one to
    /// one onto characters.
    pub fn string(&mut self, field: &'static str, size: usize) -> Result<String, DecodeError> {
        let mut buf = vec![0u8; size];
        self.cursor
            .read_exact(&mut buf)
            .map_err(|_| self.truncated())?;
        match buf.iter().position(|&b| b == 0) {
            Some(len) => Ok(buf[..len].iter().map(|&b| char::from(b)).collect()),
            None => Err(DecodeError::Unterminated { field, size }),
        }
    }

    pub fn skip(&mut self, len: usize) {
        let pos = self.cursor.position() + len as u64;
        self.cursor.set_position(pos);
    }
}

/// Fills a zeroed record buffer field by field.
pub struct FieldWriter {
    buf: Vec<u8>,
    pos: usize,
}

impl FieldWriter {
    pub fn new() -> FieldWriter {
        FieldWriter {
            buf: vec![0u8; RECORD_SIZE],
            pos: 0,
        }
    }

    pub fn u8(&mut self, value: u8) {
        self.buf[self.pos] = value;
        self.pos += 1;
    }

    pub fn u16(&mut self, value: u16) {
        LittleEndian::write_u16(&mut self.buf[self.pos..self.pos + 2], value);
        self.pos += 2;
    }

    pub fn flag(&mut self, value: bool) {
        self.u8(value as u8);
    }

    pub fn bytes(&mut self, value: &[u8]) {
        self.buf[self.pos..self.pos + value.len()].copy_from_slice(value);
        self.pos += value.len();
    }

    /// Writes at most `size - 1` characters so the terminating NUL always fits.
    pub fn string(&mut self, value: &str, size: usize) {
        let encoded = value
            .chars()
            .map(|ch| if (ch as u32) < 0x100 { ch as u8 } else { b'?' })
            .filter(|&b| b != 0)
            .take(size - 1);
        for (offset, b) in encoded.enumerate() {
            self.buf[self.pos + offset] = b;
        }
        self.pos += size;
    }

    pub fn skip(&mut self, len: usize) {
        self.pos += len;
    }

    pub fn finish(self) -> Vec<u8> {
        debug_assert!(self.pos <= RECORD_SIZE);
        self.buf
    }
}
