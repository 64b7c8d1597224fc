use std::fs;

use anyhow::Result;
use jupiter_swap_parser::{analyze_transaction, InstructionKind, ParseConfig, SolanaTransaction};

const INPUT_MINT: &str = "8qbHbw2BbbTHBW1sbeqakYXVKRQM8Ne7pLK7m6CVfeR";
const MID_MINT: &str = "CktRuQ2mttgRGkXJtyksdKHjUdc2C4TgDzyB98oEzy8";
const OUTPUT_MINT: &str = "GgBaCs3NCBuZN12kCJgAW63ydqohFkHEdfdEXBPzLHq";

fn load_fixture() -> Result<SolanaTransaction> {
    let tx_data = fs::read_to_string("tests/fixtures/jupiter_swap.json")?;
    Ok(serde_json::from_str(&tx_data)?)
}

#[test]
fn fixture_transaction_is_fully_analyzed() -> Result<()> {
    let tx = load_fixture()?;
    let analysis = analyze_transaction(&tx, &ParseConfig::default())?;

    assert_eq!(analysis.instructions.len(), 1);
    let swap = &analysis.instructions[0];
    assert_eq!(swap.instruction_type, InstructionKind::Route);
    assert_eq!(swap.route_plan.len(), 1);
    assert_eq!(swap.in_amount, 30_178_889);

    // Inner-instruction events come before log events.
    assert_eq!(analysis.events.len(), 2);
    assert_eq!(analysis.events[0].input_mint, INPUT_MINT);
    assert_eq!(analysis.events[0].output_mint, MID_MINT);
    assert_eq!(analysis.events[1].input_mint, MID_MINT);
    assert_eq!(analysis.events[1].output_mint, OUTPUT_MINT);

    let summary = &analysis.summary;
    assert_eq!(summary.total_swaps, 2);
    assert_eq!(summary.input_token, INPUT_MINT);
    assert_eq!(summary.total_input, 5_000_000);
    assert_eq!(summary.output_token, OUTPUT_MINT);
    assert_eq!(summary.total_output, 9_000_000);
    assert_eq!(
        summary.route,
        format!("{INPUT_MINT} -> {MID_MINT} -> {OUTPUT_MINT}")
    );
    Ok(())
}

#[test]
fn zero_events_produce_an_empty_summary() -> Result<()> {
    let tx = SolanaTransaction {
        slot: 1,
        signature: "empty".to_string(),
        ..SolanaTransaction::default()
    };
    let analysis = analyze_transaction(&tx, &ParseConfig::default())?;
    assert_eq!(analysis.summary.total_swaps, 0);
    assert!(analysis.summary.input_token.is_empty());
    assert!(analysis.summary.output_token.is_empty());
    assert!(analysis.summary.route.is_empty());
    assert_eq!(analysis.summary.total_input, 0);
    assert_eq!(analysis.summary.total_output, 0);
    Ok(())
}

#[test]
fn bad_candidates_are_skipped_without_aborting() -> Result<()> {
    let mut tx = load_fixture()?;
    tx.log_messages
        .push("Program data: not-base64-or-bs58!!".to_string());
    // Decodes fine, but far too short for an event record.
    tx.log_messages.push("Program data: AAEC".to_string());

    let analysis = analyze_transaction(&tx, &ParseConfig::default())?;
    assert_eq!(analysis.events.len(), 2);
    Ok(())
}

#[test]
fn throw_error_controls_instruction_failure_handling() -> Result<()> {
    let mut tx = load_fixture()?;
    // Truncate the swap instruction to its discriminator alone.
    tx.instructions[1].data = "5RfLl3rjrSo=".to_string();

    let strict = ParseConfig {
        throw_error: true,
        program_id: None,
    };
    assert!(analyze_transaction(&tx, &strict).is_err());

    let lenient = analyze_transaction(&tx, &ParseConfig::default())?;
    assert!(lenient.instructions.is_empty());
    assert_eq!(lenient.events.len(), 2);
    Ok(())
}

#[test]
fn program_id_override_redirects_the_scan() -> Result<()> {
    let tx = load_fixture()?;
    let config = ParseConfig {
        throw_error: false,
        program_id: Some("SomeOtherProgram1111111111111111111111111111".to_string()),
    };
    let analysis = analyze_transaction(&tx, &config)?;
    assert!(analysis.instructions.is_empty());
    // Log-line discovery is not keyed on the program id; the log event stays.
    assert_eq!(analysis.events.len(), 1);
    assert_eq!(analysis.events[0].output_mint, OUTPUT_MINT);
    Ok(())
}
