use ansi_term::Colour;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Log sink of the command line, records go to the standard error output so
/// they do not mix with the run report.
struct TerminalLogger;

static LOGGER: TerminalLogger = TerminalLogger;

impl Log for TerminalLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level = match record.level() {
            Level::Error => Colour::Red.bold().paint("error"),
            Level::Warn => Colour::Fixed(130).paint("warn "),
            Level::Info => Colour::Green.paint("info "),
            Level::Debug => Colour::Fixed(148).paint("debug"),
            Level::Trace => Colour::Fixed(240).paint("trace"),
        };
        eprintln!("{} {}", level, record.args());
    }

    fn flush(&self) {}
}

pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);

    Ok(())
}
