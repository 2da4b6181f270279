use audiowrap::hal::constants::{ics, jb};
use audiowrap::hal::mock::StubModule;
use audiowrap::hal::{load_vendor_module, open_compat_device, HwDevice, ModuleError, ModuleRegistry};
use audiowrap::CompatConfig;

#[test]
fn test_load_vendor_module_without_instance() {
    let mut registry = ModuleRegistry::new();
    registry.register("vendor-audio", StubModule::new("vendor-audio", ics::OUT_SPEAKER));

    let device = load_vendor_module(&registry, "vendor", "audio", "audio_hw_if", None).unwrap();
    assert_eq!(device.name(), "audio_hw_if");
    assert_eq!(device.supported_devices(), ics::OUT_SPEAKER);
}

#[test]
fn test_load_vendor_module_with_instance() {
    let mut registry = ModuleRegistry::new();
    registry.register("vendor-audio.primary", StubModule::new("vendor-audio.primary", 0));

    assert!(load_vendor_module(&registry, "vendor", "audio", "audio_hw_if", Some("primary")).is_ok());

    // The plain name is a different module
    let err = load_vendor_module(&registry, "vendor", "audio", "audio_hw_if", None).err().unwrap();
    assert_eq!(
        err,
        ModuleError::NotFound {
            name: "vendor-audio".to_string()
        }
    );
    assert!(err.status() < 0);
}

#[test]
fn test_open_failure_propagates_status() {
    let mut registry = ModuleRegistry::new();
    registry.register("vendor-audio", StubModule::failing("vendor-audio", -libc::ENODEV));

    let err = load_vendor_module(&registry, "vendor", "audio", "audio_hw_if", None).err().unwrap();
    assert_eq!(err.status(), -libc::ENODEV);
    match err {
        ModuleError::OpenFailed { module, device, .. } => {
            assert_eq!(module, "vendor-audio");
            assert_eq!(device, "audio_hw_if");
        }
        other => panic!("Expected OpenFailed, got {:?}", other),
    }
}

#[test]
fn test_compat_device_translates_both_ways() {
    let stub = StubModule::new("vendor-audio", ics::OUT_SPEAKER | ics::OUT_DEFAULT);
    let received = stub.received();

    let mut registry = ModuleRegistry::new();
    registry.register("vendor-audio", stub);

    let config = CompatConfig::legacy_htc();
    let mut device = open_compat_device(&registry, &config, "audio", "audio_hw_if", None).unwrap();

    assert_eq!(device.supported_devices(), jb::OUT_SPEAKER | jb::OUT_DEFAULT);

    device
        .set_parameters(&format!("routing={};mode=2", jb::IN_BUILTIN_MIC as i32))
        .unwrap();

    // The vendor HAL saw the legacy mask with the quirk applied
    let seen = received.lock().unwrap().clone();
    assert_eq!(seen, vec![format!("routing={};mode=2", ics::IN_VOICE_CALL)]);

    // And the reply is converted back to the JB layout
    assert_eq!(
        device.get_parameters("routing"),
        format!("routing={}", jb::IN_VOICE_CALL as i32)
    );
    assert_eq!(device.get_parameters("mode"), "mode=2");
}

#[test]
fn test_custom_vendor_prefix() {
    let mut registry = ModuleRegistry::new();
    registry.register("htc-audio", StubModule::new("htc-audio", 0));

    let config = CompatConfig {
        vendor_prefix: "htc".to_string(),
        ..CompatConfig::default()
    };
    let device = open_compat_device(&registry, &config, "audio", "audio_hw_if", None).unwrap();
    assert_eq!(device.into_inner().name(), "audio_hw_if");

    assert!(open_compat_device(&registry, &CompatConfig::default(), "audio", "audio_hw_if", None).is_err());
}
