// Device mask constants for both HAL revisions.
//
// `ics` holds the legacy layout (separate 16-bit output/input halves),
// `jb` the current one (single space, BIT_IN marks input devices).

/// Legacy (ICS) device mask layout
pub mod ics {
    // Output devices
    pub const OUT_EARPIECE: u32 = 0x1;
    pub const OUT_SPEAKER: u32 = 0x2;
    pub const OUT_WIRED_HEADSET: u32 = 0x4;
    pub const OUT_WIRED_HEADPHONE: u32 = 0x8;
    pub const OUT_BLUETOOTH_SCO: u32 = 0x10;
    pub const OUT_BLUETOOTH_SCO_HEADSET: u32 = 0x20;
    pub const OUT_BLUETOOTH_SCO_CARKIT: u32 = 0x40;
    pub const OUT_BLUETOOTH_A2DP: u32 = 0x80;
    pub const OUT_BLUETOOTH_A2DP_HEADPHONES: u32 = 0x100;
    pub const OUT_BLUETOOTH_A2DP_SPEAKER: u32 = 0x200;
    pub const OUT_AUX_DIGITAL: u32 = 0x400;
    pub const OUT_ANLG_DOCK_HEADSET: u32 = 0x800;
    pub const OUT_DGTL_DOCK_HEADSET: u32 = 0x1000;
    pub const OUT_FM: u32 = 0x2000;
    pub const OUT_DEFAULT: u32 = 0x8000;

    /// Every output flag plus the default bit
    pub const OUT_ALL: u32 = 0x3FFF | OUT_DEFAULT;

    // Input devices
    pub const IN_COMMUNICATION: u32 = 0x10000;
    pub const IN_AMBIENT: u32 = 0x20000;
    pub const IN_BUILTIN_MIC: u32 = 0x40000;
    pub const IN_BLUETOOTH_SCO_HEADSET: u32 = 0x80000;
    pub const IN_WIRED_HEADSET: u32 = 0x100000;
    pub const IN_AUX_DIGITAL: u32 = 0x200000;
    pub const IN_VOICE_CALL: u32 = 0x400000;
    pub const IN_BACK_MIC: u32 = 0x800000;
    pub const IN_DEFAULT: u32 = 0x8000_0000;

    /// Every input flag plus the default pattern
    pub const IN_ALL: u32 = 0x00FF_0000 | IN_DEFAULT;
}

/// Current (JB 4.2) device mask layout
pub mod jb {
    pub const BIT_IN: u32 = 0x8000_0000;
    pub const BIT_DEFAULT: u32 = 0x4000_0000;

    // Output devices
    pub const OUT_EARPIECE: u32 = 0x1;
    pub const OUT_SPEAKER: u32 = 0x2;
    pub const OUT_WIRED_HEADSET: u32 = 0x4;
    pub const OUT_WIRED_HEADPHONE: u32 = 0x8;
    pub const OUT_BLUETOOTH_SCO: u32 = 0x10;
    pub const OUT_BLUETOOTH_SCO_HEADSET: u32 = 0x20;
    pub const OUT_BLUETOOTH_SCO_CARKIT: u32 = 0x40;
    pub const OUT_BLUETOOTH_A2DP: u32 = 0x80;
    pub const OUT_BLUETOOTH_A2DP_HEADPHONES: u32 = 0x100;
    pub const OUT_BLUETOOTH_A2DP_SPEAKER: u32 = 0x200;
    pub const OUT_AUX_DIGITAL: u32 = 0x400;
    pub const OUT_ANLG_DOCK_HEADSET: u32 = 0x800;
    pub const OUT_DGTL_DOCK_HEADSET: u32 = 0x1000;
    pub const OUT_USB_ACCESSORY: u32 = 0x2000;
    pub const OUT_USB_DEVICE: u32 = 0x4000;
    pub const OUT_REMOTE_SUBMIX: u32 = 0x8000;
    pub const OUT_DEFAULT: u32 = BIT_DEFAULT;

    pub const OUT_ALL: u32 = 0xFFFF | OUT_DEFAULT;

    // Input devices
    pub const IN_COMMUNICATION: u32 = BIT_IN | 0x1;
    pub const IN_AMBIENT: u32 = BIT_IN | 0x2;
    pub const IN_BUILTIN_MIC: u32 = BIT_IN | 0x4;
    pub const IN_BLUETOOTH_SCO_HEADSET: u32 = BIT_IN | 0x8;
    pub const IN_WIRED_HEADSET: u32 = BIT_IN | 0x10;
    pub const IN_AUX_DIGITAL: u32 = BIT_IN | 0x20;
    pub const IN_VOICE_CALL: u32 = BIT_IN | 0x40;
    pub const IN_BACK_MIC: u32 = BIT_IN | 0x80;
    pub const IN_REMOTE_SUBMIX: u32 = BIT_IN | 0x100;
    pub const IN_DEFAULT: u32 = BIT_IN | BIT_DEFAULT;
}

/// Output bits that exist in both layouts
pub const DEVICE_OUT_MASK: u32 = 0x3FFF;

/// Input bits that exist in both layouts (before the 16 bit shift)
pub const DEVICE_IN_MASK: u32 = 0xFF;

/// Distance between the ICS input half and the JB input bits
pub const INPUT_SHIFT: u32 = 16;

/// Parameter key carrying the active routing mask
pub const KEY_ROUTING: &str = "routing";
