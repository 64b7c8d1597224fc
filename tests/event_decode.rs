use anyhow::Result;
use jupiter_swap_parser::{decode_swap_event, JupiterError};

const SWAP_EVENT_DISCRIMINATOR: [u8; 8] = [228, 69, 165, 46, 81, 203, 154, 29];

const AMM: &str = "4vJ9JU1bJJE96FWSJKvHsmmFADCg4gpZQff4P3bkLKi";
const INPUT_MINT: &str = "8qbHbw2BbbTHBW1sbeqakYXVKRQM8Ne7pLK7m6CVfeR";
const OUTPUT_MINT: &str = "CktRuQ2mttgRGkXJtyksdKHjUdc2C4TgDzyB98oEzy8";

fn event_fixture(opaque: [u8; 8]) -> Vec<u8> {
    let mut data = Vec::with_capacity(128);
    data.extend_from_slice(&SWAP_EVENT_DISCRIMINATOR);
    data.extend_from_slice(&opaque);
    data.extend_from_slice(&[1u8; 32]); // amm
    data.extend_from_slice(&[2u8; 32]); // input mint
    data.extend_from_slice(&5_000_000u64.to_le_bytes());
    data.extend_from_slice(&[3u8; 32]); // output mint
    data.extend_from_slice(&7_500_000u64.to_le_bytes());
    data
}

#[test]
fn fixed_layout_decodes() -> Result<()> {
    let event = decode_swap_event(&event_fixture([0xAA; 8]))?;
    assert_eq!(event.discriminator, SWAP_EVENT_DISCRIMINATOR);
    assert_eq!(event.unknown, [0xAA; 8]);
    assert_eq!(event.amm, AMM);
    assert_eq!(event.input_mint, INPUT_MINT);
    assert_eq!(event.input_amount, 5_000_000);
    assert_eq!(event.output_mint, OUTPUT_MINT);
    assert_eq!(event.output_amount, 7_500_000);
    Ok(())
}

#[test]
fn opaque_bytes_do_not_affect_the_other_fields() -> Result<()> {
    let a = decode_swap_event(&event_fixture([0x00; 8]))?;
    let b = decode_swap_event(&event_fixture([0xFF; 8]))?;
    assert_eq!(a.amm, b.amm);
    assert_eq!(a.input_mint, b.input_mint);
    assert_eq!(a.input_amount, b.input_amount);
    assert_eq!(a.output_mint, b.output_mint);
    assert_eq!(a.output_amount, b.output_amount);
    Ok(())
}

#[test]
fn short_buffers_are_rejected() {
    let err = decode_swap_event(&[0u8; 64]).unwrap_err();
    assert!(matches!(err, JupiterError::TooShort { len: 64 }));
    assert!(matches!(
        decode_swap_event(&[]).unwrap_err(),
        JupiterError::TooShort { len: 0 }
    ));
}

#[test]
fn wrong_discriminators_are_rejected() {
    let mut data = event_fixture([0; 8]);
    data[0] ^= 0xFF;
    assert!(matches!(
        decode_swap_event(&data).unwrap_err(),
        JupiterError::BadEventDiscriminator
    ));
}

#[test]
fn trailing_bytes_beyond_the_record_are_ignored() -> Result<()> {
    let mut data = event_fixture([0; 8]);
    data.extend_from_slice(&[0xEE; 7]);
    let event = decode_swap_event(&data)?;
    assert_eq!(event.output_amount, 7_500_000);
    Ok(())
}

#[test]
fn serialized_event_uses_string_amounts() -> Result<()> {
    let event = decode_swap_event(&event_fixture([0xAB; 8]))?;
    let value = serde_json::to_value(&event)?;
    assert_eq!(value["amm"], AMM);
    assert_eq!(value["input_amount"], "5000000");
    assert_eq!(value["output_amount"], "7500000");
    assert_eq!(value["unknown"], "abababababababab");
    Ok(())
}
