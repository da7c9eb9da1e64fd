//=========================================================================
// Save Sessions
//=========================================================================
//
// Line-oriented access to save files.
//
// Flow:
//   open(path, mode) → read_line()* | write_line()* → close()
//
// A session is opened for exactly one direction. Writers are buffered and
// flushed on close (and best-effort on drop).
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};
use thiserror::Error;

//=== SaveError ===========================================================

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("save session is open for {0:?}")]
    WrongMode(SaveMode),

    #[error("save session is closed")]
    Closed,
}

pub type SaveResult<T> = Result<T, SaveError>;

//=== SaveMode ============================================================

/// Direction a session was opened for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    /// Read an existing file from the start.
    Read,
    /// Create the file, or truncate it if it exists.
    Write,
    /// Create the file if needed and write after its current contents.
    Append,
}

//=== SaveSession =========================================================

enum Handle {
    Reader(BufReader<File>),
    Writer(BufWriter<File>),
}

/// An open save file.
///
/// ```no_run
/// use stagehand::save::{SaveMode, SaveSession};
///
/// let mut save = SaveSession::open("slot1.sav", SaveMode::Write)?;
/// save.write_line("level=3")?;
/// save.close()?;
///
/// let mut save = SaveSession::open("slot1.sav", SaveMode::Read)?;
/// while let Some(line) = save.read_line()? {
///     println!("{line}");
/// }
/// # Ok::<(), stagehand::save::SaveError>(())
/// ```
pub struct SaveSession {
    path: PathBuf,
    mode: SaveMode,
    handle: Option<Handle>,
}

impl SaveSession {
    //--- Construction -----------------------------------------------------

    pub fn open(path: impl AsRef<Path>, mode: SaveMode) -> SaveResult<Self> {
        let path = path.as_ref().to_path_buf();

        let opened = match mode {
            SaveMode::Read => File::open(&path),
            SaveMode::Write => File::create(&path),
            SaveMode::Append => OpenOptions::new().create(true).append(true).open(&path),
        };
        let file = opened.map_err(|source| SaveError::Io {
            path: path.clone(),
            source,
        })?;

        let handle = match mode {
            SaveMode::Read => Handle::Reader(BufReader::new(file)),
            SaveMode::Write | SaveMode::Append => Handle::Writer(BufWriter::new(file)),
        };

        debug!("Opened save file {:?} for {:?}", path, mode);
        Ok(Self {
            path,
            mode,
            handle: Some(handle),
        })
    }

    //--- Line I/O ---------------------------------------------------------

    /// Reads the next line without its `\n` / `\r\n` terminator.
    ///
    /// Returns `None` at end of file.
    pub fn read_line(&mut self) -> SaveResult<Option<String>> {
        let reader = match self.handle.as_mut() {
            Some(Handle::Reader(reader)) => reader,
            Some(Handle::Writer(_)) => return Err(SaveError::WrongMode(self.mode)),
            None => return Err(SaveError::Closed),
        };

        let mut line = String::new();
        let read = reader.read_line(&mut line).map_err(|source| SaveError::Io {
            path: self.path.clone(),
            source,
        })?;

        if read == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// Writes `line` followed by a newline.
    pub fn write_line(&mut self, line: &str) -> SaveResult<()> {
        let writer = match self.handle.as_mut() {
            Some(Handle::Writer(writer)) => writer,
            Some(Handle::Reader(_)) => return Err(SaveError::WrongMode(self.mode)),
            None => return Err(SaveError::Closed),
        };

        writeln!(writer, "{}", line).map_err(|source| SaveError::Io {
            path: self.path.clone(),
            source,
        })
    }

    /// Flushes pending writes and closes the file.
    pub fn close(&mut self) -> SaveResult<()> {
        match self.handle.take() {
            Some(Handle::Writer(mut writer)) => {
                writer.flush().map_err(|source| SaveError::Io {
                    path: self.path.clone(),
                    source,
                })?;
            }
            Some(Handle::Reader(_)) => {}
            None => return Err(SaveError::Closed),
        }

        debug!("Closed save file {:?}", self.path);
        Ok(())
    }

    //--- Queries ----------------------------------------------------------

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mode(&self) -> SaveMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for SaveSession {
    fn drop(&mut self) {
        if let Some(Handle::Writer(writer)) = self.handle.as_mut() {
            if let Err(e) = writer.flush() {
                warn!("Failed to flush save file {:?} on drop: {}", self.path, e);
            }
        }
    }
}

//=== Tests ===============================================================
