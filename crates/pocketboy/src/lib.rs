use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use pocketboy_common::Palette;
use pocketboy_gb::machine::video::{render_rgba, RGBA_FRAME_LEN};
use pocketboy_gb::{cpu, savestate, trace, GameBoy, GameBoyConfig, UnmappedPolicy};
use typed_builder::TypedBuilder;

/// Upper bound for `--until-entry`, in frames. The DMG boot animation
/// finishes well inside this.
const BOOT_FRAME_BUDGET: u64 = 600;

/// How long the runner keeps the machine going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopAt {
    Frames(u32),
    /// Stop when the boot ROM jumps to the cartridge entry point (0x0100).
    CartridgeEntry,
}

impl Default for StopAt {
    fn default() -> Self {
        StopAt::Frames(60)
    }
}

#[derive(Debug, Clone, TypedBuilder)]
pub struct RunOptions {
    pub rom: PathBuf,
    #[builder(default, setter(strip_option))]
    pub boot_rom: Option<PathBuf>,
    #[builder(default)]
    pub stop: StopAt,
    /// BESS file whose video state is installed before running.
    #[builder(default, setter(strip_option))]
    pub state: Option<PathBuf>,
    #[builder(default)]
    pub trace: bool,
    /// Print this many instructions from the start PC before running.
    #[builder(default)]
    pub disasm: usize,
    #[builder(default)]
    pub open_bus: bool,
    #[builder(default, setter(strip_option))]
    pub dump_rgba: Option<PathBuf>,
    #[builder(default, setter(strip_option))]
    pub dump_vram: Option<PathBuf>,
}

pub fn run(options: RunOptions) -> Result<()> {
    let rom = std::fs::read(&options.rom)
        .with_context(|| format!("failed to read ROM '{}'", options.rom.display()))?;
    let boot_rom = options
        .boot_rom
        .as_ref()
        .map(|path| {
            std::fs::read(path)
                .with_context(|| format!("failed to read boot ROM '{}'", path.display()))
        })
        .transpose()?;

    if options.stop == StopAt::CartridgeEntry && boot_rom.is_none() {
        bail!("--until-entry needs a boot ROM (--boot PATH)");
    }

    let config = GameBoyConfig {
        boot_rom,
        unmapped: if options.open_bus {
            UnmappedPolicy::OpenBus
        } else {
            UnmappedPolicy::Fatal
        },
    };
    let mut gb = GameBoy::new(rom, config).context("failed to start session")?;
    log::info!("loaded '{}'", gb.cartridge().header().title);

    if let Some(path) = &options.state {
        let bytes = std::fs::read(path)
            .with_context(|| format!("failed to read save state '{}'", path.display()))?;
        let state = savestate::load(&bytes)
            .with_context(|| format!("'{}' is not a usable BESS file", path.display()))?;
        gb.install_video_state(&state);
    }

    if options.disasm > 0 {
        let start = gb.cpu.regs.pc;
        for (addr, instruction) in cpu::disassemble(gb.bus(), start, options.disasm)? {
            println!("{addr:04X}  {instruction}");
        }
    }

    match options.stop {
        StopAt::Frames(frames) => {
            let target = gb.total_cycles() + u64::from(frames) * pocketboy_gb::CYCLES_PER_FRAME;
            while gb.total_cycles() < target {
                step(&mut gb, options.trace)?;
            }
        }
        StopAt::CartridgeEntry => {
            let limit = BOOT_FRAME_BUDGET * pocketboy_gb::CYCLES_PER_FRAME;
            while gb.cpu.regs.pc != 0x0100 {
                if gb.total_cycles() >= limit {
                    bail!("boot ROM did not reach 0x0100 within {BOOT_FRAME_BUDGET} frames");
                }
                step(&mut gb, options.trace)?;
            }
            println!("reached 0x0100 after {} cycles", gb.total_cycles());
        }
    }

    if !gb.serial_output().is_empty() {
        println!("serial: {}", String::from_utf8_lossy(gb.serial_output()));
    }

    if let Some(path) = &options.dump_vram {
        std::fs::write(path, gb.vram())
            .with_context(|| format!("failed to write '{}'", path.display()))?;
    }
    if let Some(path) = &options.dump_rgba {
        let mut buffer = vec![0u8; RGBA_FRAME_LEN];
        render_rgba(gb.framebuffer(), &Palette::default(), &mut buffer);
        std::fs::write(path, &buffer)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        println!(
            "wrote {} bytes ({}x{} rgba) to '{}'",
            buffer.len(),
            pocketboy_gb::SCREEN_WIDTH,
            pocketboy_gb::SCREEN_HEIGHT,
            path.display()
        );
    }
    Ok(())
}

fn step(gb: &mut GameBoy, trace: bool) -> Result<()> {
    if trace {
        println!("{}", trace::doctor_line(&gb.cpu, gb.bus()));
    }
    gb.step()?;
    Ok(())
}
