// src/file.rs

use std::{
    fs::{ self, File, OpenOptions },
    io::{ self, BufWriter, Write },
    path::Path,
};

use crate::config::consts::CSV_SEP;
use crate::csv::write_row;
use crate::store::RecordSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteMode {
    /// Truncate, then header + rows.
    Overwrite,
    /// Header only if the file doesn't exist yet, then rows at the end.
    Append,
}

/// Persist `records` to `path`. Parent directories are created as needed.
/// Existence is checked on every `Append` call; nothing is remembered between calls.
pub fn write_records(records: &RecordSet, path: &Path, mode: WriteMode) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let (file, with_header) = match mode {
        WriteMode::Overwrite => (File::create(path)?, true),
        WriteMode::Append => {
            let fresh = !path.exists();
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            (file, fresh)
        }
    };

    let mut out = BufWriter::new(file);
    if with_header {
        write_row(&mut out, &records.headers, CSV_SEP)?;
    }
    for row in &records.rows {
        write_row(&mut out, row, CSV_SEP)?;
    }
    out.flush()
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
