use serde::Serialize;
use tracing::debug;

use crate::config::ParseConfig;
use crate::core::binary_reader::BinaryReader;
use crate::types::ClassifiedInstruction;

use super::constants::discriminators::instructions as discriminators;
use super::error::JupiterError;
use super::ser;
use super::swap_variant::SwapVariant;
use super::util::get_instruction_data;

/// The six wire shapes of the aggregator's swap instructions.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum InstructionKind {
    Route,
    RouteWithTokenLedger,
    SharedAccountsRoute,
    SharedAccountsRouteWithTokenLedger,
    ExactOutRoute,
    SharedAccountsExactOutRoute,
}

impl InstructionKind {
    /// Exact byte match against the known discriminators. The values are
    /// disjoint, so check order does not matter.
    pub fn from_discriminator(discriminator: &[u8; 8]) -> Option<Self> {
        if discriminator == &discriminators::ROUTE {
            Some(Self::Route)
        } else if discriminator == &discriminators::ROUTE_WITH_TOKEN_LEDGER {
            Some(Self::RouteWithTokenLedger)
        } else if discriminator == &discriminators::SHARED_ACCOUNTS_ROUTE {
            Some(Self::SharedAccountsRoute)
        } else if discriminator == &discriminators::SHARED_ACCOUNTS_ROUTE_WITH_TOKEN_LEDGER {
            Some(Self::SharedAccountsRouteWithTokenLedger)
        } else if discriminator == &discriminators::EXACT_OUT_ROUTE {
            Some(Self::ExactOutRoute)
        } else if discriminator == &discriminators::SHARED_ACCOUNTS_EXACT_OUT_ROUTE {
            Some(Self::SharedAccountsExactOutRoute)
        } else {
            None
        }
    }

    /// Shared-accounts shapes carry a one-byte id before the route plan.
    pub fn has_shared_id(self) -> bool {
        matches!(
            self,
            Self::SharedAccountsRoute
                | Self::SharedAccountsRouteWithTokenLedger
                | Self::SharedAccountsExactOutRoute
        )
    }

    /// Exact-out shapes quote the output and bound the input from above.
    pub fn is_exact_out(self) -> bool {
        matches!(self, Self::ExactOutRoute | Self::SharedAccountsExactOutRoute)
    }
}

/// One hop of the route plan. The indices refer to the transaction's
/// resolved account list, which lives outside this decoder.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct RoutePlanStep {
    pub swap: SwapVariant,
    pub percent: u8,
    pub input_index: u8,
    pub output_index: u8,
}

/// A fully decoded swap instruction.
///
/// Amount fields the shape does not carry stay zero, and zero amounts are
/// omitted from the serialized form. For exact-out shapes `min_amount_out`
/// holds the derived maximum input: the wire format reuses the slot.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct SwapInstruction {
    pub instruction_type: InstructionKind,
    #[serde(skip_serializing_if = "ser::id_is_zero")]
    pub id: Option<u8>,
    pub route_plan: Vec<RoutePlanStep>,
    #[serde(skip_serializing_if = "ser::is_zero", serialize_with = "ser::u64_string")]
    pub in_amount: u64,
    #[serde(skip_serializing_if = "ser::is_zero", serialize_with = "ser::u64_string")]
    pub out_amount: u64,
    #[serde(skip_serializing_if = "ser::is_zero", serialize_with = "ser::u64_string")]
    pub quoted_out_amount: u64,
    #[serde(skip_serializing_if = "ser::is_zero", serialize_with = "ser::u64_string")]
    pub quoted_in_amount: u64,
    pub slippage_bps: u16,
    pub platform_fee_bps: u8,
    #[serde(skip_serializing_if = "ser::is_zero", serialize_with = "ser::u64_string")]
    pub min_amount_out: u64,
}

/// Worst-case output after slippage, matching the reference float math:
/// the product truncates toward zero.
#[inline]
pub fn min_amount_out(quoted_out_amount: u64, slippage_bps: u16) -> u64 {
    (quoted_out_amount as f64 * (1.0 - f64::from(slippage_bps) / 10_000.0)) as u64
}

/// Worst-case input after slippage for exact-out shapes.
#[inline]
pub fn max_amount_in(quoted_in_amount: u64, slippage_bps: u16) -> u64 {
    (quoted_in_amount as f64 * (1.0 + f64::from(slippage_bps) / 10_000.0)) as u64
}

/// Decode a single instruction buffer into a `SwapInstruction`.
pub fn decode_instruction(data: &[u8]) -> Result<SwapInstruction, JupiterError> {
    if data.len() < 8 {
        return Err(JupiterError::TooShort { len: data.len() });
    }
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&data[..8]);
    let kind = InstructionKind::from_discriminator(&discriminator)
        .ok_or(JupiterError::UnknownInstruction { discriminator })?;

    let mut reader = BinaryReader::new(data);
    reader.skip(8)?;

    let id = if kind.has_shared_id() {
        Some(reader.read_u8()?)
    } else {
        None
    };

    let route_plan = decode_route_plan(&mut reader)?;

    // Trailing fields: exact-out shapes store (out, quoted-in), the rest
    // store (in, quoted-out). All little-endian.
    let first = reader.read_u64()?;
    let second = reader.read_u64()?;
    let slippage_bps = reader.read_u16()?;
    let platform_fee_bps = reader.read_u8()?;

    let mut instruction = SwapInstruction {
        instruction_type: kind,
        id,
        route_plan,
        in_amount: 0,
        out_amount: 0,
        quoted_out_amount: 0,
        quoted_in_amount: 0,
        slippage_bps,
        platform_fee_bps,
        min_amount_out: 0,
    };

    if kind.is_exact_out() {
        instruction.out_amount = first;
        instruction.quoted_in_amount = second;
        instruction.min_amount_out = max_amount_in(second, slippage_bps);
    } else {
        instruction.in_amount = first;
        instruction.quoted_out_amount = second;
        instruction.min_amount_out = min_amount_out(second, slippage_bps);
    }

    Ok(instruction)
}

fn decode_route_plan(reader: &mut BinaryReader<'_>) -> Result<Vec<RoutePlanStep>, JupiterError> {
    let count = reader.read_u32()? as usize;
    // Each step is at least 4 bytes; cap the preallocation against garbage counts.
    let mut route_plan = Vec::with_capacity(count.min(reader.remaining() / 4));
    for _ in 0..count {
        let tag = reader.read_u8()?;
        let (swap, consumed) = SwapVariant::decode(tag, reader.buffer(), reader.position())?;
        reader.skip(consumed)?;
        route_plan.push(RoutePlanStep {
            swap,
            percent: reader.read_u8()?,
            input_index: reader.read_u8()?,
            output_index: reader.read_u8()?,
        });
    }
    Ok(route_plan)
}

/// Walks a transaction's top-level instructions and decodes every swap
/// owned by the aggregator program.
pub struct JupiterInstructionParser {
    config: ParseConfig,
}

impl JupiterInstructionParser {
    pub fn new(config: ParseConfig) -> Self {
        Self { config }
    }

    pub fn parse_instructions(
        &self,
        instructions: &[ClassifiedInstruction],
    ) -> Result<Vec<SwapInstruction>, JupiterError> {
        let mut swaps = Vec::new();
        for classified in instructions {
            if classified.inner_index.is_some() {
                continue;
            }
            let data = match get_instruction_data(&classified.data) {
                Ok(data) => data,
                Err(err) if self.config.throw_error => return Err(err),
                Err(err) => {
                    debug!(
                        outer_index = classified.outer_index,
                        %err,
                        "skipping undecodable instruction data"
                    );
                    continue;
                }
            };
            match decode_instruction(&data) {
                Ok(swap) => swaps.push(swap),
                Err(err) if self.config.throw_error => return Err(err),
                Err(err) => {
                    debug!(outer_index = classified.outer_index, %err, "skipping instruction");
                }
            }
        }
        Ok(swaps)
    }
}
