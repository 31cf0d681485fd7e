//! Tests for the family-seed text format

use seed_wallet::{CodecConfig, Error, Seed, SeedCodec};

#[test]
fn test_zero_seed_round_trip() {
    let encoded = Seed::new([0u8; 16]).to_base58();
    let decoded = Seed::from_base58(&encoded).unwrap();
    assert_eq!(decoded.as_bytes(), &[0u8; 16]);
}

#[test]
fn test_error_classification() {
    // '0' is not part of the alphabet
    let err = Seed::from_base58("0noPBrXtMeMyMHUVTgbuqAfg1SUTb").unwrap_err();
    assert!(matches!(err, Error::Format(_)));

    let err = Seed::from_base58_with("snoPBrXtMeMyMHUVTgbuqAfg1SUTc", SeedCodec::ripple()).unwrap_err();
    assert!(matches!(err, Error::Checksum(_)));

    // Valid ripple text read with the wrong dictionary
    let err = Seed::from_base58("snoPBrXtMeMyMHUVTgbuqAfg1SUTb").unwrap_err();
    assert!(err.is_format() || err.is_checksum());
}

#[test]
fn test_every_single_character_change_is_rejected() {
    let codec = SeedCodec::standard();
    let encoded = codec.encode(&[0x3C; 16]);
    let alphabet: Vec<char> = codec.alphabet().chars().collect();

    for (position, original) in encoded.char_indices() {
        let replacement = alphabet
            .iter()
            .copied()
            .find(|c| *c != original)
            .unwrap();

        let mut corrupted: Vec<char> = encoded.chars().collect();
        corrupted[position] = replacement;
        let corrupted: String = corrupted.into_iter().collect();

        assert!(
            codec.decode(&corrupted).is_err(),
            "change at position {} was accepted",
            position
        );
    }
}

#[test]
fn test_errors_never_echo_the_input() {
    let text = "snoPBrXtMeMyMHUVTgbuqAfg1SUTc";
    let err = SeedCodec::ripple().decode(text).unwrap_err();
    assert!(!err.to_string().contains(text));

    let err = SeedCodec::ripple().decode("snoPBrXtMeMyMHUVTgbuqAfg1SUT0").unwrap_err();
    assert!(!err.to_string().contains("snoPB"));
}

#[test]
fn test_codec_config_from_json() {
    let config: CodecConfig = serde_json::from_str(
        r#"{ "alphabet": "rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz" }"#,
    )
    .unwrap();
    assert_eq!(config.version, 0x21);

    let codec = SeedCodec::new(&config).unwrap();
    assert_eq!(codec.encode(&[0u8; 16]), "sp6JS7f14BuwFY8Mw6bTtLKWauoUs");
}

#[test]
fn test_codecs_with_different_tags_do_not_mix() {
    let validator = SeedCodec::new(&CodecConfig {
        version: 0x20,
        ..CodecConfig::default()
    })
    .unwrap();

    let encoded = validator.encode(&[9u8; 16]);
    assert_eq!(validator.decode(&encoded).unwrap(), [9u8; 16]);

    let err = SeedCodec::standard().decode(&encoded).unwrap_err();
    assert!(err.is_format());
}
