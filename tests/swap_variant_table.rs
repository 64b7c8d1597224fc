use anyhow::Result;
use jupiter_swap_parser::{JupiterError, Side, SwapVariant};

#[test]
fn widths_match_the_wire_layout() {
    for tag in 0u16..=255 {
        let tag = tag as u8;
        let expected = match tag {
            8 | 12 | 15 | 16 | 17 | 18 | 21 | 23 | 24 | 27 | 28 | 39 | 47 | 58 | 60 | 61 => 1,
            29 => 16,
            33 | 41 => 4,
            42 => 3,
            43 => 10,
            44 | 45 => 5,
            _ => 0,
        };
        assert_eq!(SwapVariant::param_width(tag), expected, "tag {tag}");
    }
}

#[test]
fn decode_consumes_exactly_the_declared_width() -> Result<()> {
    let buf = [0u8; 32];
    for tag in 0u16..=255 {
        let tag = tag as u8;
        let (variant, consumed) = SwapVariant::decode(tag, &buf, 0)?;
        assert_eq!(consumed, SwapVariant::param_width(tag), "tag {tag}");
        assert_eq!(variant.tag(), tag);
    }
    Ok(())
}

#[test]
fn unrecognized_tags_decode_to_unknown_with_no_params() -> Result<()> {
    for tag in [62u8, 75, 77, 107, 110, 200, 255] {
        let (variant, consumed) = SwapVariant::decode(tag, &[], 0)?;
        assert_eq!(consumed, 0);
        assert_eq!(variant, SwapVariant::Unknown { tag });
    }
    Ok(())
}

#[test]
fn flag_bytes_use_a_nonzero_test() -> Result<()> {
    for value in [0x01u8, 0x02, 0xFF] {
        let (variant, _) = SwapVariant::decode(17, &[value], 0)?;
        assert_eq!(
            variant,
            SwapVariant::Whirlpool { a_to_b: true },
            "byte {value:#04x}"
        );
        let (variant, _) = SwapVariant::decode(12, &[value], 0)?;
        assert_eq!(variant, SwapVariant::Serum { side: Side::Ask });
    }
    let (variant, _) = SwapVariant::decode(17, &[0x00], 0)?;
    assert_eq!(variant, SwapVariant::Whirlpool { a_to_b: false });
    let (variant, _) = SwapVariant::decode(12, &[0x00], 0)?;
    assert_eq!(variant, SwapVariant::Serum { side: Side::Bid });
    Ok(())
}

#[test]
fn parameter_blocks_round_trip() -> Result<()> {
    let cases: Vec<(u8, Vec<u8>)> = vec![
        (8, vec![1]),
        (12, vec![0]),
        (15, vec![1]),
        (16, vec![0]),
        (17, vec![1]),
        (18, vec![0]),
        (21, vec![1]),
        (23, vec![0]),
        (24, vec![1]),
        (27, vec![0]),
        (28, vec![1]),
        (29, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16]),
        (33, vec![0xEF, 0xBE, 0xAD, 0xDE]),
        (39, vec![1]),
        (41, vec![4, 3, 2, 1]),
        (42, vec![7, 1, 0]),
        (43, vec![2, 3, 1, 0, 0, 0, 2, 0, 0, 0]),
        (44, vec![5, 9, 0, 0, 0]),
        (45, vec![6, 1, 2, 3, 4]),
        (47, vec![0]),
        (58, vec![1]),
        (60, vec![0]),
        (61, vec![1]),
    ];

    for (tag, params) in cases {
        let (variant, consumed) = SwapVariant::decode(tag, &params, 0)?;
        assert_eq!(consumed, params.len(), "tag {tag}");
        let mut encoded = Vec::new();
        variant.encode_params(&mut encoded);
        assert_eq!(encoded, params, "tag {tag}");
    }
    Ok(())
}

#[test]
fn truncated_parameter_blocks_fail() {
    let err = SwapVariant::decode(29, &[0u8; 8], 0).unwrap_err();
    assert!(matches!(err, JupiterError::Truncated(_)));
    assert!(SwapVariant::decode(43, &[0u8; 12], 4).is_err());
    assert!(SwapVariant::decode(8, &[], 0).is_err());
}

#[test]
fn variants_serialize_externally_tagged() -> Result<()> {
    let value = serde_json::to_value(SwapVariant::Raydium {})?;
    assert_eq!(value, serde_json::json!({"Raydium": {}}));

    let (variant, _) = SwapVariant::decode(61, &[1], 0)?;
    assert_eq!(
        serde_json::to_value(variant)?,
        serde_json::json!({"SolFi": {"is_quote_to_base": true}})
    );

    let (variant, _) = SwapVariant::decode(20, &[], 0)?;
    assert_eq!(serde_json::to_value(variant)?, serde_json::json!({"GooseFX": {}}));

    let (variant, _) = SwapVariant::decode(12, &[0], 0)?;
    assert_eq!(
        serde_json::to_value(variant)?,
        serde_json::json!({"Serum": {"side": "Bid"}})
    );

    let (variant, _) = SwapVariant::decode(72, &[], 0)?;
    assert_eq!(
        serde_json::to_value(variant)?,
        serde_json::json!({"Unknown": {"tag": 72}})
    );
    Ok(())
}
