use base64_simd::STANDARD;

use crate::types::SolanaInstruction;

use super::error::JupiterError;

/// Fast base64 decoder for instruction data. No caching, no logging, no fallbacks.
#[inline(always)]
pub fn decode_instruction_data(data: &str) -> Result<Vec<u8>, JupiterError> {
    if data.is_empty() {
        return Ok(Vec::new());
    }
    STANDARD
        .decode_to_vec(data)
        .map_err(|e| JupiterError::instruction_data(format!("base64 decode failed: {}", e)))
}

/// Get instruction data bytes. Fast path: no logging.
#[inline(always)]
pub fn get_instruction_data(instruction: &SolanaInstruction) -> Result<Vec<u8>, JupiterError> {
    decode_instruction_data(&instruction.data)
}

/// Log payloads appear base64-encoded on mainnet and base58 in some tooling
/// output; try both alphabets.
pub fn decode_log_payload(payload: &str) -> Result<Vec<u8>, JupiterError> {
    let trimmed = payload.trim();
    if trimmed.is_empty() {
        return Err(JupiterError::instruction_data("empty log payload"));
    }
    if let Ok(bytes) = STANDARD.decode_to_vec(trimmed) {
        return Ok(bytes);
    }
    bs58::decode(trimmed)
        .into_vec()
        .map_err(|e| JupiterError::instruction_data(format!("log payload decode failed: {}", e)))
}
