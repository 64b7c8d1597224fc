use thiserror::Error;

use crate::core::binary_reader::BinaryReaderError;

#[derive(Debug, Error)]
pub enum JupiterError {
    #[error("instruction data too short: {len} bytes")]
    TooShort { len: usize },
    #[error("truncated buffer: {0}")]
    Truncated(#[from] BinaryReaderError),
    #[error("unknown instruction discriminator: {}", hex::encode(.discriminator))]
    UnknownInstruction { discriminator: [u8; 8] },
    #[error("invalid swap event discriminator")]
    BadEventDiscriminator,
    #[error("failed to decode instruction data: {0}")]
    InstructionData(String),
}

impl JupiterError {
    pub fn instruction_data(message: impl Into<String>) -> Self {
        Self::InstructionData(message.into())
    }
}
