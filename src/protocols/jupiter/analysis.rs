use serde::Serialize;
use tracing::debug;

use crate::config::ParseConfig;
use crate::core::constants::program_names;
use crate::core::instruction_classifier::InstructionClassifier;
use crate::types::SolanaTransaction;

use super::error::JupiterError;
use super::event_parser::{JupiterEventParser, SwapEvent};
use super::instruction_parser::{JupiterInstructionParser, SwapInstruction};
use super::ser;

/// Swap totals derived from the event list.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct SwapSummary {
    pub total_swaps: usize,
    pub input_token: String,
    pub output_token: String,
    #[serde(serialize_with = "ser::u64_string")]
    pub total_input: u64,
    #[serde(serialize_with = "ser::u64_string")]
    pub total_output: u64,
    pub route: String,
}

/// Full decoded view of one aggregator transaction.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct JupiterAnalysis {
    pub summary: SwapSummary,
    pub instructions: Vec<SwapInstruction>,
    pub events: Vec<SwapEvent>,
}

/// Decode every aggregator instruction and event in the transaction.
///
/// Instruction decode failures are skipped unless `config.throw_error` is
/// set; event candidates are always best-effort.
pub fn analyze_transaction(
    tx: &SolanaTransaction,
    config: &ParseConfig,
) -> Result<JupiterAnalysis, JupiterError> {
    let classifier = InstructionClassifier::new(tx);
    let target = config.target_program();
    let classified = classifier.get_instructions(target);

    let instruction_parser = JupiterInstructionParser::new(config.clone());
    let instructions = instruction_parser.parse_instructions(classified)?;
    debug!(
        program = program_names::name(target),
        count = instructions.len(),
        "decoded aggregator instructions"
    );

    let events = JupiterEventParser::new().parse_events(classified, &tx.log_messages);

    Ok(JupiterAnalysis {
        summary: build_summary(&events),
        instructions,
        events,
    })
}

/// First event's input, last event's output, and the full output chain.
fn build_summary(events: &[SwapEvent]) -> SwapSummary {
    let mut summary = SwapSummary {
        total_swaps: events.len(),
        ..SwapSummary::default()
    };

    if let (Some(first), Some(last)) = (events.first(), events.last()) {
        summary.input_token = first.input_mint.clone();
        summary.total_input = first.input_amount;
        summary.output_token = last.output_mint.clone();
        summary.total_output = last.output_amount;

        let mut route = Vec::with_capacity(events.len() + 1);
        route.push(summary.input_token.as_str());
        for event in events {
            route.push(event.output_mint.as_str());
        }
        summary.route = route.join(" -> ");
    }

    summary
}
