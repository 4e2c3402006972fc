use std::{
    fs::{File, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
    sync::Mutex,
};

use tracing::{info, warn};

use crate::{
    config::LogTarget,
    error::{Error, Result},
};

type Console = Box<dyn Write + Send>;

/// Durable destination for dump records, with optional console echo.
///
/// The file is opened once and held for the sink's lifetime. Every record is
/// written and flushed under one lock, console echo included, so records from
/// concurrent callers never interleave.
pub struct LogSink {
    path: PathBuf,
    writers: Mutex<Writers>,
}

struct Writers {
    file: File,
    console: Console,
}

impl LogSink {
    /// Opens the log target, echoing to stdout.
    pub fn open(target: &LogTarget) -> Result<Self> {
        Self::with_console(target, Box::new(io::stdout()))
    }

    pub fn with_console(target: &LogTarget, console: Console) -> Result<Self> {
        let path = target.path().to_path_buf();
        let mut options = OpenOptions::new();
        if target.appends() {
            options.append(true).create(true);
        } else {
            options.write(true).create(true).truncate(true);
        }

        let file = options.open(&path).map_err(|source| Error::OpenLog {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), append = target.appends(), "opened packet log");

        Ok(Self {
            path,
            writers: Mutex::new(Writers { file, console }),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `record` plus a line terminator to the log file, and to the
    /// console when `echo_to_console` is set.
    pub fn emit(&self, record: &str, echo_to_console: bool) -> Result<()> {
        let mut line = String::with_capacity(record.len() + 1);
        line.push_str(record);
        line.push('\n');

        let mut writers = self.writers.lock().map_err(|_| Error::SinkPoisoned)?;

        writers
            .file
            .write_all(line.as_bytes())
            .and_then(|_| writers.file.flush())
            .map_err(|source| Error::WriteLog {
                path: self.path.clone(),
                source,
            })?;

        if echo_to_console {
            let console = &mut writers.console;
            if let Err(err) = console
                .write_all(line.as_bytes())
                .and_then(|_| console.flush())
            {
                warn!("failed to echo packet to console: {}", err);
            }
        }

        Ok(())
    }
}
