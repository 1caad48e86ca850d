use std::path::PathBuf;

use typed_builder::TypedBuilder;

/// How a [`Machine`](super::Machine) is brought up.
///
/// ```
/// use dmg_cpu::MachineConfig;
///
/// let config = MachineConfig::builder()
///     .image("tetris.gb")
///     .post_boot_state(true)
///     .build();
/// assert!(config.boot_rom.is_none());
/// ```
#[derive(Clone, Debug, Default, TypedBuilder)]
pub struct MachineConfig {
    /// 256-byte boot ROM mapped over 0x0000–0x00FF until 0xFF50 is written.
    #[builder(default, setter(strip_option, into))]
    pub boot_rom: Option<PathBuf>,
    /// Cartridge or raw program image loaded flat at 0x0000.
    #[builder(default, setter(strip_option, into))]
    pub image: Option<PathBuf>,
    /// Start at 0x0100 with the registers the DMG boot ROM leaves behind.
    /// Ignored when `boot_rom` is set.
    #[builder(default)]
    pub post_boot_state: bool,
    /// Log every executed instruction at info level.
    #[builder(default)]
    pub trace: bool,
}
