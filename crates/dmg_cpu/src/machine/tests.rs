use std::path::PathBuf;

use super::{Machine, MachineConfig, MemoryBus, Region, BOOT_DISABLE_ADDR};
use crate::cpu::Bus;
use crate::error::{Error, Opcode};
use crate::CYCLES_PER_FRAME;

/// Write `bytes` to a per-test file under the system temp dir.
fn temp_image(name: &str, bytes: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("dmg_cpu_{}_{name}", std::process::id()));
    std::fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn load_copies_image_and_zero_fills_the_rest() {
    let mut bus = MemoryBus::new();
    bus.write(0xC000, 0x55);
    bus.load(&[0x01, 0x02, 0x03]);

    assert_eq!(bus.read(0x0000), 0x01);
    assert_eq!(bus.read(0x0002), 0x03);
    assert_eq!(bus.read(0x0003), 0x00);
    assert_eq!(bus.read(0xC000), 0x00);
}

#[test]
fn oversized_image_is_truncated() {
    let mut bus = MemoryBus::new();
    bus.load(&vec![0xAA; 0x10000 + 16]);

    assert_eq!(bus.read(0x0000), 0xAA);
    assert_eq!(bus.read(0xFFFF), 0xAA);
}

#[test]
fn rom_writes_are_dropped() {
    let mut bus = MemoryBus::new();
    let mut image = vec![0; 0x8000];
    image[0x0000] = 0x12;
    image[0x4000] = 0x34;
    bus.load(&image);

    bus.write(0x0000, 0x99);
    bus.write(0x4000, 0x99);
    assert_eq!(bus.read(0x0000), 0x12);
    assert_eq!(bus.read(0x4000), 0x34);

    bus.write(0x8000, 0x99);
    assert_eq!(bus.read(0x8000), 0x99);
}

#[test]
fn echo_ram_mirrors_work_ram() {
    let mut bus = MemoryBus::new();

    bus.write(0xE010, 0x42);
    assert_eq!(bus.read(0xC010), 0x42);

    bus.write(0xC123, 0x07);
    assert_eq!(bus.read(0xE123), 0x07);
    assert_eq!(bus.read(0xFDFF), bus.read(0xDDFF));
}

#[test]
fn word_access_is_little_endian() {
    let mut bus = MemoryBus::new();
    for addr in [0x8000u16, 0xC000, 0xDFFF, 0xFF80, 0xFFFD] {
        bus.write_word(addr, 0xBEEF);
        assert_eq!(bus.read(addr), 0xEF);
        assert_eq!(bus.read(addr + 1), 0xBE);
        assert_eq!(bus.read_word(addr), 0xBEEF);
    }
}

#[test]
fn word_round_trips_over_writable_space() {
    let mut bus = MemoryBus::new();
    for addr in 0x8000..=0xFFFEu16 {
        let value = addr ^ 0xA55A;
        bus.write_word(addr, value);
        assert_eq!(bus.read_word(addr), value, "0x{addr:04X}");
    }
}

#[test]
fn push_pop_round_trips_for_every_writable_stack_pointer() {
    let mut machine = Machine::new();
    // PUSH BC; POP DE
    machine.load(&[0xC5, 0xD1]);

    for sp in 0x8002..=0xFFFFu16 {
        let value = sp.rotate_left(5) ^ 0x3C3C;
        machine.cpu.pc = 0x0000;
        machine.cpu.sp = sp;
        machine.cpu.regs.set_bc(value);

        machine.run_steps(2).unwrap();
        assert_eq!(machine.cpu.regs.de(), value, "SP=0x{sp:04X}");
        assert_eq!(machine.cpu.sp, sp);
    }
}

#[test]
fn word_read_at_top_wraps_to_zero() {
    let mut bus = MemoryBus::new();
    bus.load(&[0x34]);
    bus.write(0xFFFF, 0x12);

    assert_eq!(bus.read_word(0xFFFF), 0x3412);
    assert_eq!(Bus::read16(&mut bus, 0xFFFF), 0x3412);
}

#[test]
fn boot_overlay_shadows_cartridge_until_disabled() {
    let mut bus = MemoryBus::new();
    bus.load(&[0xAA; 0x200]);
    bus.load_boot_rom(&[0x31, 0xFE, 0xFF]);

    assert!(bus.boot_rom_enabled());
    assert_eq!(bus.region(0x0000), Region::BootRom);
    assert_eq!(bus.read(0x0000), 0x31);
    assert_eq!(bus.read(0x0003), 0x00);
    assert_eq!(bus.read(0x00FF), 0x00);
    assert_eq!(bus.read(0x0100), 0xAA);

    bus.write(0x0000, 0x00);
    assert_eq!(bus.read(0x0000), 0x31);

    bus.write(BOOT_DISABLE_ADDR, 0x01);
    assert!(!bus.boot_rom_enabled());
    assert_eq!(bus.region(0x0000), Region::RomBank0);
    assert_eq!(bus.read(0x0000), 0xAA);
    assert_eq!(bus.read(BOOT_DISABLE_ADDR), 0x01);

    // Later writes do not bring the overlay back.
    bus.write(BOOT_DISABLE_ADDR, 0x00);
    assert!(!bus.boot_rom_enabled());
    assert_eq!(bus.read(0x0000), 0xAA);
}

#[test]
fn region_boundaries() {
    let cases = [
        (0x0000, Region::RomBank0),
        (0x3FFF, Region::RomBank0),
        (0x4000, Region::RomBankN),
        (0x7FFF, Region::RomBankN),
        (0x8000, Region::VideoRam),
        (0xA000, Region::ExternalRam),
        (0xC000, Region::WorkRam),
        (0xDFFF, Region::WorkRam),
        (0xE000, Region::EchoRam),
        (0xFDFF, Region::EchoRam),
        (0xFE00, Region::Oam),
        (0xFF00, Region::Io),
        (0xFF7F, Region::Io),
        (0xFF80, Region::HighRam),
        (0xFFFE, Region::HighRam),
        (0xFFFF, Region::InterruptEnable),
    ];
    for (addr, region) in cases {
        assert_eq!(Region::of(addr), region, "0x{addr:04X}");
    }
    assert!(Region::RomBankN.is_read_only());
    assert!(!Region::HighRam.is_read_only());
}

#[test]
fn missing_image_maps_to_io_error() {
    let mut bus = MemoryBus::new();
    let path = std::env::temp_dir().join("dmg_cpu_definitely_missing.gb");

    let err = bus.load_file(&path).unwrap_err();
    match err {
        Error::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other:?}"),
    }
}

/// LD A,5; LD B,3; loop: ADD A,B; DEC B; JR NZ,loop; HALT
const COUNTDOWN: [u8; 9] = [0x3E, 0x05, 0x06, 0x03, 0x80, 0x05, 0x20, 0xFC, 0x76];

#[test]
fn machine_runs_program_from_power_on() {
    let mut machine = Machine::new();
    machine.load(&COUNTDOWN);

    let cycles = machine.run_steps(12).unwrap();
    assert_eq!(cycles, 76);
    assert!(machine.cpu.halted);
    assert_eq!(machine.cpu.regs.a, 11);
}

#[test]
fn machine_surfaces_unimplemented_opcode() {
    let mut machine = Machine::new();
    machine.load(&[0x00, 0xDD]);

    let err = machine.run_steps(5).unwrap_err();
    assert!(matches!(
        err,
        Error::UnimplementedOpcode {
            opcode: Opcode::Primary(0xDD),
            pc: 0x0001
        }
    ));
    assert_eq!(machine.cpu.cycles(), 4);
}

#[test]
fn run_frame_covers_one_frame_of_cycles() {
    let mut machine = Machine::new();
    // JR -2: 12 cycles per step, and 70224 is a multiple of 12.
    machine.load(&[0x18, 0xFE]);

    let cycles = machine.run_frame().unwrap();
    assert_eq!(cycles, CYCLES_PER_FRAME as u64);
    assert_eq!(machine.cpu.pc, 0x0000);
}

#[test]
fn software_breakpoint_stops_after_ld_b_b() {
    let mut machine = Machine::new();
    machine.load(&[0x00, 0x00, 0x40, 0x00]);

    let budget: usize = 2;
    assert!(!machine.clone().run_until_software_breakpoint(budget).unwrap());
    assert_eq!(machine.clone().run_steps(budget).unwrap(), 8);
    assert!(machine.run_until_software_breakpoint(10).unwrap());
    assert_eq!(machine.cpu.pc, 0x0003);
}

#[test]
fn trace_echo_only_without_cpu_trace_logging() {
    assert!(!Machine::new().echoes_instructions());

    // Tests install no logger, so trace-level logging is off and the
    // machine echoes each instruction itself.
    let config = MachineConfig::builder().trace(true).build();
    let mut machine = Machine::from_config(&config).unwrap();
    assert!(machine.echoes_instructions());
    assert_eq!(machine.step().unwrap(), 4);
}

#[test]
fn boot_rom_hands_over_to_cartridge() {
    let mut machine = Machine::new();
    let mut cartridge = vec![0x00; 0x8000];
    cartridge[0x0004] = 0x40;
    machine.load(&cartridge);
    // LD A,1; LDH (0x50),A
    machine.bus.load_boot_rom(&[0x3E, 0x01, 0xE0, 0x50]);

    assert!(machine.run_until_software_breakpoint(10).unwrap());
    assert!(!machine.bus.boot_rom_enabled());
    assert_eq!(machine.cpu.pc, 0x0005);
}

#[test]
fn clock_observer_sees_machine_steps() {
    let mut machine = Machine::new();
    machine.load(&COUNTDOWN);
    let mut observer = machine.cpu.clock().observer();

    machine.step().unwrap();
    assert_eq!(observer.take_delta(machine.cpu.clock()), 8);
    machine.run_steps(3).unwrap();
    assert_eq!(observer.take_delta(machine.cpu.clock()), 8 + 4 + 4);
}

#[test]
fn from_config_applies_post_boot_state() {
    let mut image = vec![0; 0x200];
    image[0x0100] = 0x00;
    image[0x0101] = 0x40;
    let path = temp_image("post_boot.gb", &image);

    let config = MachineConfig::builder()
        .image(path.clone())
        .post_boot_state(true)
        .build();
    let mut machine = Machine::from_config(&config).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(machine.cpu.pc, 0x0100);
    assert_eq!(machine.cpu.sp, 0xFFFE);
    assert_eq!(machine.cpu.regs.af(), 0x01B0);
    assert!(machine.run_until_software_breakpoint(4).unwrap());
}

#[test]
fn from_config_with_boot_rom_starts_at_zero() {
    let image = temp_image("boot_cart.gb", &[0xAA; 0x200]);
    let boot = temp_image("boot_rom.bin", &[0x31, 0xFE, 0xFF]);

    let config = MachineConfig::builder()
        .image(image.clone())
        .boot_rom(boot.clone())
        .post_boot_state(true)
        .build();
    let machine = Machine::from_config(&config).unwrap();
    std::fs::remove_file(&image).unwrap();
    std::fs::remove_file(&boot).unwrap();

    assert_eq!(machine.cpu.pc, 0x0000);
    assert!(machine.bus.boot_rom_enabled());
    assert_eq!(machine.bus.read(0x0000), 0x31);
    assert_eq!(machine.bus.read(0x0100), 0xAA);
}

#[test]
fn from_config_reports_missing_image() {
    let config = MachineConfig::builder()
        .image("/nonexistent/dmg_cpu/rom.gb")
        .build();

    assert!(matches!(
        Machine::from_config(&config),
        Err(Error::Io { .. })
    ));
}
