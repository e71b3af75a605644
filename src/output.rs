use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::record::RecordList;

/// Write `list` as a header row followed by one tab-delimited row per record.
pub fn write_table<W: Write>(list: &RecordList, mut writer: W) -> io::Result<()> {
    writeln!(writer, "{}", list.header_line())?;
    for record in list {
        writeln!(writer, "{}", record)?;
    }
    writer.flush()
}

/// Where a finished table goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    Stdout,
    /// A file, gzip-compressed when its name ends in `.gz`.
    Path(PathBuf),
}

impl From<Option<PathBuf>> for Sink {
    fn from(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) if path != Path::new("-") => Sink::Path(path),
            _ => Sink::Stdout,
        }
    }
}

impl Sink {
    fn writer(&self) -> Result<Box<dyn Write>> {
        let writer: Box<dyn Write> = match self {
            Sink::Stdout => Box::new(io::stdout()),
            Sink::Path(path) if path.extension().map_or(false, |ext| ext == "gz") => {
                niffler::to_path(
                    path,
                    niffler::compression::Format::Gzip,
                    niffler::Level::Six,
                )?
            }
            Sink::Path(path) => Box::new(File::create(path)?),
        };
        Ok(Box::new(BufWriter::new(writer)))
    }

    /// Render `list` into this sink.
    pub fn write(&self, list: &RecordList) -> Result<()> {
        write_table(list, self.writer()?)?;
        Ok(())
    }
}
