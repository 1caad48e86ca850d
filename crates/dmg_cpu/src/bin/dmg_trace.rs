use std::path::PathBuf;

use anyhow::{Context, Result};
use dmg_cpu::{disassemble, Machine, MachineConfig};

const DEFAULT_STEPS: usize = 30;
const USAGE: &str = "Usage: dmg_trace <image> [steps] [boot_rom]";

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let image: PathBuf = args.next().map(PathBuf::from).unwrap_or_else(|| {
        eprintln!("{USAGE}");
        std::process::exit(2);
    });
    let steps = match args.next() {
        Some(steps) => steps
            .parse()
            .with_context(|| format!("invalid step count '{steps}'"))?,
        None => DEFAULT_STEPS,
    };
    let boot_rom = args.next().map(PathBuf::from);

    let config = match boot_rom {
        Some(boot_rom) => MachineConfig::builder()
            .image(image)
            .boot_rom(boot_rom)
            .build(),
        None => MachineConfig::builder()
            .image(image)
            .post_boot_state(true)
            .build(),
    };
    let mut machine = Machine::from_config(&config).context("failed to set up machine")?;

    for _ in 0..steps {
        let pc = machine.cpu.pc;
        let (text, _) = disassemble(&mut machine.bus, pc);
        println!("{pc:04X}: {text}");
        machine
            .step()
            .with_context(|| format!("execution stopped at 0x{pc:04X}"))?;
    }

    println!(
        "AF={:04X} BC={:04X} DE={:04X} HL={:04X} SP={:04X} PC={:04X} cycles={}",
        machine.cpu.regs.af(),
        machine.cpu.regs.bc(),
        machine.cpu.regs.de(),
        machine.cpu.regs.hl(),
        machine.cpu.sp,
        machine.cpu.pc,
        machine.cpu.cycles()
    );

    Ok(())
}
