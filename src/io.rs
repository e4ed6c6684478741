//! Line readers for password and dictionary files.
//!
//! Small files go through a `BufReader`; files at or above the mmap threshold
//! are memory-mapped and split on `\n` with `memchr`. Both paths strip a
//! trailing `\r` and decode lossily so a stray non-UTF-8 byte in a wordlist
//! does not abort the run.
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use memmap2::Mmap;

/// Default size at which inputs are memory-mapped.
pub const DEFAULT_MMAP_THRESHOLD_BYTES: u64 = 16 * 1024 * 1024; // 16 MiB

pub type LineIter = Box<dyn Iterator<Item = io::Result<String>> + Send + 'static>;

pub fn should_use_mmap(file_size_bytes: u64, threshold_bytes: u64) -> bool {
    file_size_bytes >= threshold_bytes
}

pub fn iter_lines_bufread<P: AsRef<Path>>(path: P) -> Result<LineIter> {
    let file = File::open(&path).with_context(|| format!("open {}", path.as_ref().display()))?;
    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    let iter = std::iter::from_fn(move || {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => None,
            Ok(_) => Some(Ok(decode_line(strip_newline(&buf)))),
            Err(e) => Some(Err(e)),
        }
    });
    Ok(Box::new(iter))
}

pub fn iter_lines_mmap<P: AsRef<Path>>(path: P) -> Result<LineIter> {
    let file = File::open(&path).with_context(|| format!("open {}", path.as_ref().display()))?;
    // SAFETY: the map is read-only and input files are not expected to be
    // truncated while a run is loading them.
    let mmap =
        unsafe { Mmap::map(&file) }.with_context(|| format!("mmap {}", path.as_ref().display()))?;
    Ok(Box::new(MmapLines { mmap, pos: 0 }))
}

struct MmapLines {
    mmap: Mmap,
    pos: usize,
}

impl Iterator for MmapLines {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let data: &[u8] = &self.mmap;
        if self.pos >= data.len() {
            return None;
        }
        let rest = &data[self.pos..];
        let end = memchr::memchr(b'\n', rest).unwrap_or(rest.len());
        self.pos += (end + 1).min(rest.len());
        Some(Ok(decode_line(strip_newline(&rest[..end]))))
    }
}

fn strip_newline(bytes: &[u8]) -> &[u8] {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    bytes.strip_suffix(b"\r").unwrap_or(bytes)
}

fn decode_line(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Pick mmap or buffered reading based on file size.
pub fn iter_lines_auto<P: AsRef<Path>>(path: P, threshold_bytes: u64) -> Result<LineIter> {
    let meta =
        std::fs::metadata(&path).with_context(|| format!("stat {}", path.as_ref().display()))?;
    if meta.is_file() && should_use_mmap(meta.len(), threshold_bytes) {
        iter_lines_mmap(path)
    } else {
        iter_lines_bufread(path)
    }
}

/// Read every line of `path`, failing on the first I/O error.
pub fn read_lines<P: AsRef<Path>>(path: P, threshold_bytes: u64) -> Result<Vec<String>> {
    let display = path.as_ref().display().to_string();
    iter_lines_auto(&path, threshold_bytes)?
        .map(|l| l.with_context(|| format!("read {display}")))
        .collect()
}
