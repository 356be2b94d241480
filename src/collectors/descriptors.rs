use crate::sys::{CommandRunner, LinesReader};
use std::path::Path;
use tracing::warn;

/// Count `lsof -nl` rows after the `COMMAND ...` header. No header means 0.
pub fn count_open_files<S: AsRef<str>>(lines: &[S]) -> u64 {
    lines.iter()
        .map(|l| l.as_ref())
        .skip_while(|l| !l.starts_with("COMMAND"))
        .skip(1)
        .count() as u64
}

/// Value of the first `nofiles` line in a limits file.
///
/// ```text
/// default:
///         fsize = 2097151
///         nofiles = 2000
/// ```
///
/// Missing lines, unparsable values and AIX's `-1` all mean unlimited.
pub fn parse_nofiles<S: AsRef<str>>(lines: &[S]) -> u64 {
    let Some(line) = lines.iter()
        .map(|l| l.as_ref().trim())
        .find(|l| l.starts_with("nofiles"))
    else {
        return u64::MAX;
    };
    match line.split_whitespace().last().and_then(|v| v.parse::<i64>().ok()) {
        Some(n) if n >= 0 => n as u64,
        _                 => u64::MAX,
    }
}

pub fn open_file_descriptors(runner: &impl CommandRunner, argv: &[String]) -> u64 {
    match runner.run(argv) {
        Ok(lines) => count_open_files(&lines),
        Err(e)    => {
            warn!(error = %e, "could not list open files");
            0
        }
    }
}

/// System-wide limit from the first line of `ulimit -n`; 0 when unknown.
pub fn max_file_descriptors(runner: &impl CommandRunner, argv: &[String]) -> u64 {
    match runner.first_line(argv) {
        Ok(line) => line.trim().parse().unwrap_or(0),
        Err(e)   => {
            warn!(error = %e, "could not query descriptor limit");
            0
        }
    }
}

pub fn max_file_descriptors_per_process(reader: &impl LinesReader, limits_file: &Path) -> u64 {
    parse_nofiles(&reader.read_lines(limits_file))
}
