use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use pocketboy::{RunOptions, StopAt};

const USAGE: &str = "Usage: pocketboy <rom> [--boot PATH] [--frames N | --until-entry] \
[--state PATH] [--trace] [--disasm N] [--open-bus] [--dump-rgba PATH] [--dump-vram PATH]";

fn main() {
    env_logger::init();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{err:#}\n{USAGE}");
            std::process::exit(2);
        }
    };

    if let Err(err) = pocketboy::run(options) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<RunOptions> {
    let mut rom = None;
    let mut boot_rom = None;
    let mut stop = StopAt::default();
    let mut state = None;
    let mut trace = false;
    let mut disasm = 0;
    let mut open_bus = false;
    let mut dump_rgba = None;
    let mut dump_vram = None;

    while let Some(arg) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .with_context(|| format!("{name} expects a value"))
        };
        match arg.as_str() {
            "--boot" => boot_rom = Some(PathBuf::from(value("--boot")?)),
            "--frames" => {
                let frames = value("--frames")?;
                stop = StopAt::Frames(
                    frames
                        .parse()
                        .with_context(|| format!("invalid frame count '{frames}'"))?,
                );
            }
            "--until-entry" => stop = StopAt::CartridgeEntry,
            "--state" => state = Some(PathBuf::from(value("--state")?)),
            "--trace" => trace = true,
            "--disasm" => {
                let count = value("--disasm")?;
                disasm = count
                    .parse()
                    .with_context(|| format!("invalid instruction count '{count}'"))?;
            }
            "--open-bus" => open_bus = true,
            "--dump-rgba" => dump_rgba = Some(PathBuf::from(value("--dump-rgba")?)),
            "--dump-vram" => dump_vram = Some(PathBuf::from(value("--dump-vram")?)),
            flag if flag.starts_with("--") => bail!("unknown option '{flag}'"),
            _ if rom.is_none() => rom = Some(PathBuf::from(&arg)),
            _ => bail!("unexpected argument '{arg}'"),
        }
    }

    let Some(rom) = rom else {
        bail!("missing ROM path");
    };
    Ok(RunOptions {
        rom,
        boot_rom,
        stop,
        state,
        trace,
        disasm,
        open_bus,
        dump_rgba,
        dump_vram,
    })
}
