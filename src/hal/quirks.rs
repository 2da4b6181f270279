use log::info;

use super::constants::ics;
use super::types::IcsDevices;

/// Swap BUILTIN_MIC for VOICE_CALL on a legacy mask.
///
/// The stock audio policy opens BUILTIN_MIC for some input sources, which the
/// HTC vendor HAL answers with silence; its own policy manager asks for
/// VOICE_CALL instead. Every other bit is left alone, so applying this twice
/// is the same as applying it once.
pub fn fixup_audio_devices(device: IcsDevices) -> IcsDevices {
    if !device.contains(ics::IN_BUILTIN_MIC) {
        return device;
    }

    info!("fixup_audio_devices: BUILTIN_MIC set, setting VOICE_CALL instead");
    IcsDevices((device.bits() & !ics::IN_BUILTIN_MIC) | ics::IN_VOICE_CALL)
}
