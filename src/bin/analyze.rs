use anyhow::{Context, Result};
use jupiter_swap_parser::core::instruction_classifier::InstructionClassifier;
use jupiter_swap_parser::{analyze_transaction, decode_instruction, ParseConfig, SolanaTransaction};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .compact()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: analyze <transaction.json>");
        eprintln!("       analyze --hex <instruction-bytes>");
        std::process::exit(1);
    }

    // Raw mode: decode a single instruction buffer given as hex.
    if args[1] == "--hex" {
        let raw = args.get(2).context("missing hex instruction data")?;
        let data = hex::decode(raw.trim()).context("invalid hex instruction data")?;
        let instruction = decode_instruction(&data)?;
        println!("{}", serde_json::to_string_pretty(&instruction)?);
        return Ok(());
    }

    let raw = std::fs::read_to_string(&args[1])
        .with_context(|| format!("failed to read transaction file {}", args[1]))?;
    let tx: SolanaTransaction =
        serde_json::from_str(&raw).context("invalid transaction JSON")?;

    println!("Signature: {}", tx.signature);
    println!("Slot: {}", tx.slot);
    let classifier = InstructionClassifier::new(&tx);
    println!("Programs: {:?}", classifier.program_ids());
    println!();

    let analysis = analyze_transaction(&tx, &ParseConfig::default())?;

    println!("Instructions: {}", analysis.instructions.len());
    println!("Swaps: {}", analysis.summary.total_swaps);
    if !analysis.summary.route.is_empty() {
        println!("Route: {}", analysis.summary.route);
    }
    println!();
    println!("{}", serde_json::to_string_pretty(&analysis)?);

    Ok(())
}
