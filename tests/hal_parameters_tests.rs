use audiowrap::hal::constants::{ics, jb};
use audiowrap::hal::AudioParameter;
use audiowrap::{fixup_audio_parameters, CompatConfig, ConversionMode, ParameterRewriter};

#[test]
fn test_without_routing_key_is_unchanged() {
    let blob = "screen_state=on;bt_samplerate=8000";
    assert_eq!(fixup_audio_parameters(blob, ConversionMode::JbToIcs), blob);
    assert_eq!(fixup_audio_parameters(blob, ConversionMode::IcsToJb), blob);
}

#[test]
fn test_unparsed_formatting_survives_when_key_absent() {
    // Not normalised because nothing is rewritten
    let blob = ";;a=1;;b";
    assert_eq!(fixup_audio_parameters(blob, ConversionMode::JbToIcs), blob);
    assert_eq!(fixup_audio_parameters("", ConversionMode::JbToIcs), "");
}

#[test]
fn test_only_routing_value_changes() {
    // 0x4d2 fits the legacy output bits, so the value comes back unchanged
    let fixed = fixup_audio_parameters("routing=1234;other=5", ConversionMode::JbToIcs);
    assert_eq!(fixed, "routing=1234;other=5");

    let with_default = format!("other=5;routing={};last=x", jb::OUT_DEFAULT | jb::OUT_SPEAKER);
    let fixed = fixup_audio_parameters(&with_default, ConversionMode::JbToIcs);
    assert_eq!(fixed, format!("other=5;routing={};last=x", ics::OUT_DEFAULT | ics::OUT_SPEAKER));
}

#[test]
fn test_routing_dropping_unmapped_bits() {
    let routing = jb::OUT_SPEAKER | jb::OUT_REMOTE_SUBMIX;
    let fixed = fixup_audio_parameters(&format!("routing={};other=5", routing), ConversionMode::JbToIcs);
    assert_eq!(fixed, format!("routing={};other=5", ics::OUT_SPEAKER));
}

#[test]
fn test_input_routing_is_written_as_signed() {
    let fixed = fixup_audio_parameters(
        &format!("routing={}", ics::IN_BUILTIN_MIC),
        ConversionMode::IcsToJb,
    );
    let expected = jb::IN_BUILTIN_MIC as i32;
    assert!(expected < 0);
    assert_eq!(fixed, format!("routing={}", expected));

    let param = AudioParameter::parse(&fixed);
    assert_eq!(param.get_int("routing").map(|v| v as u32), Some(jb::IN_BUILTIN_MIC));
}

#[test]
fn test_negative_routing_round_trip() {
    let jb_routing = (jb::IN_DEFAULT | jb::IN_WIRED_HEADSET) as i32;
    let ics_blob = fixup_audio_parameters(&format!("routing={}", jb_routing), ConversionMode::JbToIcs);
    assert_eq!(ics_blob, format!("routing={}", (ics::IN_DEFAULT | ics::IN_WIRED_HEADSET) as i32));

    let jb_blob = fixup_audio_parameters(&ics_blob, ConversionMode::IcsToJb);
    assert_eq!(jb_blob, format!("routing={}", jb_routing));
}

#[test]
fn test_hex_routing_value_is_accepted() {
    let fixed = fixup_audio_parameters("routing=0x8002", ConversionMode::IcsToJb);
    assert_eq!(fixed, format!("routing={}", jb::OUT_DEFAULT | jb::OUT_SPEAKER));
}

#[test]
fn test_non_integer_routing_is_unchanged() {
    let blob = "routing=speaker;other=5";
    assert_eq!(fixup_audio_parameters(blob, ConversionMode::JbToIcs), blob);
}

#[test]
fn test_quirk_applies_to_routing() {
    let rewriter = ParameterRewriter::new(&CompatConfig::legacy_htc());
    let fixed = rewriter.rewrite(
        &format!("input_source=1;routing={}", jb::IN_BUILTIN_MIC as i32),
        ConversionMode::JbToIcs,
    );
    assert_eq!(fixed, format!("input_source=1;routing={}", ics::IN_VOICE_CALL));
}

#[test]
fn test_additional_device_keys() {
    let config = CompatConfig {
        device_keys: vec!["routing".to_string(), "connect".to_string()],
        ..CompatConfig::default()
    };
    let rewriter = ParameterRewriter::new(&config);
    let blob = format!("connect={};a=b", jb::OUT_DEFAULT | jb::OUT_WIRED_HEADSET);
    assert_eq!(
        rewriter.rewrite(&blob, ConversionMode::JbToIcs),
        format!("connect={};a=b", ics::OUT_DEFAULT | ics::OUT_WIRED_HEADSET)
    );
}
