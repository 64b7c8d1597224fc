use serde::Serialize;
use tracing::debug;

use crate::core::binary_reader::BinaryReader;
use crate::core::constants::PROGRAM_DATA_LOG;
use crate::types::ClassifiedInstruction;

use super::constants::{discriminators::events, SWAP_EVENT_LEN};
use super::error::JupiterError;
use super::ser;
use super::util::{decode_log_payload, get_instruction_data};

/// Post-execution swap event, a fixed 128-byte record.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct SwapEvent {
    #[serde(serialize_with = "ser::hex_bytes")]
    pub discriminator: [u8; 8],
    /// Bytes [8..16) of the record, kept verbatim and never interpreted.
    #[serde(serialize_with = "ser::hex_bytes")]
    pub unknown: [u8; 8],
    pub amm: String,
    pub input_mint: String,
    #[serde(serialize_with = "ser::u64_string")]
    pub input_amount: u64,
    pub output_mint: String,
    #[serde(serialize_with = "ser::u64_string")]
    pub output_amount: u64,
}

/// Decode one fixed-layout swap event record. Trailing bytes beyond the
/// 128-byte record are ignored.
pub fn decode_swap_event(data: &[u8]) -> Result<SwapEvent, JupiterError> {
    if data.len() < SWAP_EVENT_LEN {
        return Err(JupiterError::TooShort { len: data.len() });
    }
    if data[..8] != events::SWAP {
        return Err(JupiterError::BadEventDiscriminator);
    }

    let mut reader = BinaryReader::new(data);
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(reader.read_fixed_array(8)?);
    let mut unknown = [0u8; 8];
    unknown.copy_from_slice(reader.read_fixed_array(8)?);

    Ok(SwapEvent {
        discriminator,
        unknown,
        amm: reader.read_pubkey()?,
        input_mint: reader.read_pubkey()?,
        input_amount: reader.read_u64()?,
        output_mint: reader.read_pubkey()?,
        output_amount: reader.read_u64()?,
    })
}

/// Discovers swap events from a transaction's two event sources.
pub struct JupiterEventParser;

impl JupiterEventParser {
    pub fn new() -> Self {
        Self
    }

    /// Scan inner instructions first, then log lines. Both sources fail per
    /// candidate: a record that does not decode is dropped, it never aborts
    /// the scan or taints the other source.
    pub fn parse_events(
        &self,
        instructions: &[ClassifiedInstruction],
        log_messages: &[String],
    ) -> Vec<SwapEvent> {
        let mut events = Vec::new();

        for classified in instructions {
            // Top-level entries are swap instructions, not event records.
            if classified.inner_index.is_none() {
                continue;
            }
            let data = match get_instruction_data(&classified.data) {
                Ok(data) => data,
                Err(_) => continue,
            };
            if data.len() != SWAP_EVENT_LEN {
                continue;
            }
            match decode_swap_event(&data) {
                Ok(event) => events.push(event),
                Err(err) => {
                    debug!(
                        outer_index = classified.outer_index,
                        %err,
                        "skipping inner-instruction event candidate"
                    );
                }
            }
        }

        for log in log_messages {
            let position = match log.find(PROGRAM_DATA_LOG) {
                Some(position) => position,
                None => continue,
            };
            let payload = &log[position + PROGRAM_DATA_LOG.len()..];
            let data = match decode_log_payload(payload) {
                Ok(data) => data,
                Err(_) => continue,
            };
            match decode_swap_event(&data) {
                Ok(event) => events.push(event),
                Err(err) => debug!(%err, "skipping log event candidate"),
            }
        }

        events
    }
}

impl Default for JupiterEventParser {
    fn default() -> Self {
        Self::new()
    }
}
