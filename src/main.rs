use std::fs;
use std::path::PathBuf;

use ansi_term::Colour;
use anyhow::{ensure, Context, Result};
use clap::{ArgAction, Parser};
use log::LevelFilter;

use cycle6502::{loader, AddressSpace, AddressableIO, ProcessorCore, INIT_VECTOR_ADDR, VERSION};

mod logger;

const BOOTSTRAP_SUBROUTINE: u16 = 0x4242;
const BOOTSTRAP_BUDGET: i32 = 9;
const DUMP_LENGTH: usize = 64;
const ENTRY_JUMP_LENGTH: usize = 3;

/// Cycle counting 6502 emulator
/// Load a raw program in memory, run it for a given number of cycles and
/// display the registers. Without program, a JSR $4242 / LDA #$84 sequence is
/// run for 9 cycles.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct CommandLineArguments {
    /// Raw binary file to load
    #[arg(short, long, conflicts_with = "bytes")]
    program: Option<PathBuf>,

    /// Program as an hexadecimal string (ie "a9c0aa")
    #[arg(short, long)]
    bytes: Option<String>,

    /// Load address of the program, hexadecimal
    #[arg(short, long, default_value = "0200", value_parser = parse_address)]
    address: u16,

    /// Cycle budget
    #[arg(short, long, default_value_t = 1000)]
    cycles: i32,

    /// More log output (-v debug, -vv every executed instruction)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Log every executed instruction
    #[arg(long)]
    trace: bool,

    /// Dump 64 bytes of memory from this address after the run, hexadecimal
    #[arg(long, value_parser = parse_address)]
    dump: Option<u16>,
}

impl CommandLineArguments {
    fn log_level(&self) -> LevelFilter {
        if self.trace {
            return LevelFilter::Trace;
        }

        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn program(&self) -> Result<Option<Vec<u8>>> {
        if let Some(path) = &self.program {
            let program = fs::read(path)
                .with_context(|| format!("could not read program file '{}'", path.display()))?;
            return Ok(Some(program));
        }

        match &self.bytes {
            Some(bytes) => {
                let program = hex::decode(bytes.trim())
                    .with_context(|| format!("invalid hexadecimal program '{}'", bytes))?;
                Ok(Some(program))
            }
            None => Ok(None),
        }
    }
}

fn parse_address(value: &str) -> Result<u16, std::num::ParseIntError> {
    let value = value
        .trim_start_matches("0x")
        .trim_start_matches('#')
        .trim_start_matches('$');

    u16::from_str_radix(value, 16)
}

fn write_bootstrap(memory: &mut AddressSpace) -> Result<()> {
    let [low, high] = BOOTSTRAP_SUBROUTINE.to_le_bytes();
    loader::load_program(memory, INIT_VECTOR_ADDR, &[0x20, low, high])
        .context("could not write the bootstrap jump")?;
    loader::load_program(memory, BOOTSTRAP_SUBROUTINE, &[0xa9, 0x84])
        .context("could not write the bootstrap subroutine")?;

    Ok(())
}

fn main() -> Result<()> {
    let arguments = CommandLineArguments::parse();
    logger::init(arguments.log_level()).context("could not install the logger")?;
    log::debug!("cycle6502 version {}", VERSION);

    let mut memory = AddressSpace::new();
    let mut core = ProcessorCore::new();
    core.reset(&mut memory);

    let budget = match arguments.program()? {
        Some(program) => {
            let start = loader::load_program(&mut memory, arguments.address, &program)
                .with_context(|| {
                    format!(
                        "could not load {} bytes at #0x{:04X}",
                        program.len(),
                        arguments.address
                    )
                })?;
            let end = start as usize + program.len();
            let entry = INIT_VECTOR_ADDR as usize;
            ensure!(
                end <= entry || start as usize >= entry + ENTRY_JUMP_LENGTH,
                "program at #0x{:04X} overlaps the entry jump at #0x{:04X}",
                start,
                INIT_VECTOR_ADDR
            );
            loader::write_entry_jump(&mut memory, start);
            arguments.cycles
        }
        None => {
            write_bootstrap(&mut memory)?;
            BOOTSTRAP_BUDGET
        }
    };

    let cycles_used = core.execute(budget, &mut memory);
    println!("{:?}", core.registers);
    println!(
        "{} {} / {}",
        Colour::Green.paint("cycles used:"),
        cycles_used,
        budget
    );

    if let Some(address) = arguments.dump {
        let length = DUMP_LENGTH.min(memory.get_size() - address as usize);
        let lines = memory
            .dump(address as usize, length)
            .context("could not dump memory")?;
        for line in lines {
            println!("{}", line);
        }
    }

    Ok(())
}
