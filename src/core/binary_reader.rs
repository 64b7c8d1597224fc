use std::io::Cursor;

use byteorder::{LittleEndian, ReadBytesExt};
use thiserror::Error;

/// Bounds-checked little-endian cursor over a borrowed byte buffer.
pub struct BinaryReader<'a> {
    buffer: &'a [u8],
    offset: usize,
}

impl<'a> BinaryReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            buffer: data,
            offset: 0,
        }
    }

    pub fn read_fixed_array(&mut self, length: usize) -> Result<&'a [u8], BinaryReaderError> {
        self.check_bounds(length)?;
        let slice = &self.buffer[self.offset..self.offset + length];
        self.offset += length;
        Ok(slice)
    }

    pub fn read_u8(&mut self) -> Result<u8, BinaryReaderError> {
        self.check_bounds(1)?;
        let value = self.buffer[self.offset];
        self.offset += 1;
        Ok(value)
    }

    pub fn read_u16(&mut self) -> Result<u16, BinaryReaderError> {
        self.check_bounds(2)?;
        let mut cursor = Cursor::new(&self.buffer[self.offset..self.offset + 2]);
        let value = cursor
            .read_u16::<LittleEndian>()
            .map_err(BinaryReaderError::Io)?;
        self.offset += 2;
        Ok(value)
    }

    pub fn read_u32(&mut self) -> Result<u32, BinaryReaderError> {
        self.check_bounds(4)?;
        let mut cursor = Cursor::new(&self.buffer[self.offset..self.offset + 4]);
        let value = cursor
            .read_u32::<LittleEndian>()
            .map_err(BinaryReaderError::Io)?;
        self.offset += 4;
        Ok(value)
    }

    pub fn read_u64(&mut self) -> Result<u64, BinaryReaderError> {
        self.check_bounds(8)?;
        let mut cursor = Cursor::new(&self.buffer[self.offset..self.offset + 8]);
        let value = cursor
            .read_u64::<LittleEndian>()
            .map_err(BinaryReaderError::Io)?;
        self.offset += 8;
        Ok(value)
    }

    pub fn read_pubkey(&mut self) -> Result<String, BinaryReaderError> {
        let bytes = self.read_fixed_array(32)?;
        Ok(bs58::encode(bytes).into_string())
    }

    pub fn skip(&mut self, length: usize) -> Result<(), BinaryReaderError> {
        self.check_bounds(length)?;
        self.offset += length;
        Ok(())
    }

    pub fn buffer(&self) -> &'a [u8] {
        self.buffer
    }

    pub fn position(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.offset)
    }

    fn check_bounds(&self, length: usize) -> Result<(), BinaryReaderError> {
        if self.offset + length > self.buffer.len() {
            return Err(BinaryReaderError::BufferOverflow {
                length,
                offset: self.offset,
                buffer_len: self.buffer.len(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum BinaryReaderError {
    #[error("buffer overflow: trying to read {length} bytes at offset {offset} from buffer of length {buffer_len}")]
    BufferOverflow {
        length: usize,
        offset: usize,
        buffer_len: usize,
    },
    #[error("failed to read value: {0}")]
    Io(#[from] std::io::Error),
}
