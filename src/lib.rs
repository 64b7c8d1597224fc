//! Core library entry point exposing the decoder and public data types.

pub mod config;
pub mod core;
pub mod protocols;
pub mod types;

pub use crate::config::ParseConfig;
pub use crate::protocols::jupiter::analysis::{analyze_transaction, JupiterAnalysis, SwapSummary};
pub use crate::protocols::jupiter::error::JupiterError;
pub use crate::protocols::jupiter::event_parser::{
    decode_swap_event, JupiterEventParser, SwapEvent,
};
pub use crate::protocols::jupiter::instruction_parser::{
    decode_instruction, max_amount_in, min_amount_out, InstructionKind, JupiterInstructionParser,
    RoutePlanStep, SwapInstruction,
};
pub use crate::protocols::jupiter::swap_variant::{Side, SwapVariant};
pub use crate::types::{
    ClassifiedInstruction, InnerInstruction, SolanaInstruction, SolanaTransaction,
};
