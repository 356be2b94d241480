//! Host collaborators: command execution, capacity probing and plain file reads.
//!
//! The collectors only ever see these traits, so tests can feed canned command
//! output and fake capacities without touching the host.

use crate::error::{CollectError, Result};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Runs an OS command and hands back its stdout split into lines.
pub trait CommandRunner {
    fn run(&self, argv: &[String]) -> Result<Vec<String>>;

    /// First line of output, or an empty string if there was none.
    fn first_line(&self, argv: &[String]) -> Result<String> {
        Ok(self.run(argv)?.into_iter().next().unwrap_or_default())
    }
}

/// Space figures for one mounted file system, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capacity {
    pub total:  u64,
    pub free:   u64,
    pub usable: u64,
}

pub trait CapacityProber {
    /// `None` when the path does not exist or cannot be statted.
    fn probe(&self, path: &Path) -> Option<Capacity>;
}

pub trait LinesReader {
    /// Lines of the file at `path`; empty if it is missing or unreadable.
    fn read_lines(&self, path: &Path) -> Vec<String>;
}

// ── Native implementations ────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct NativeRunner;

impl CommandRunner for NativeRunner {
    fn run(&self, argv: &[String]) -> Result<Vec<String>> {
        let (program, args) = argv.split_first().ok_or(CollectError::EmptyCommand)?;
        let out = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| CollectError::Command { command: argv.join(" "), source })?;

        // df exits 1 when some mounts could not be read but still prints the rest.
        if !out.status.success() {
            debug!(command = %argv.join(" "), status = %out.status, "command exited unsuccessfully");
        }

        let text = String::from_utf8_lossy(&out.stdout);
        Ok(text.lines().map(str::to_string).collect())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StatvfsProber;

impl CapacityProber for StatvfsProber {
    fn probe(&self, path: &Path) -> Option<Capacity> {
        // Mount points are always absolute; anything else is a header row that slipped through.
        if !path.is_absolute() || !path.exists() {
            return None;
        }
        let stat = match nix::sys::statvfs::statvfs(path) {
            Ok(s)  => s,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "statvfs failed");
                return None;
            }
        };

        let frsize = stat.fragment_size() as u64;
        Some(Capacity {
            total:  (stat.blocks() as u64).saturating_mul(frsize),
            free:   (stat.blocks_free() as u64).saturating_mul(frsize),
            usable: (stat.blocks_available() as u64).saturating_mul(frsize),
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FsLinesReader;

impl LinesReader for FsLinesReader {
    fn read_lines(&self, path: &Path) -> Vec<String> {
        match std::fs::read_to_string(path) {
            Ok(text) => text.lines().map(str::to_string).collect(),
            Err(e)   => {
                debug!(path = %path.display(), error = %e, "could not read file");
                Vec::new()
            }
        }
    }
}
