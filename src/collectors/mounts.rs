use crate::models::mount::MountRecord;

/// Minimum field count for a mount row once the sentinel is prepended:
/// sentinel, volume, path, vfs, three date tokens, options.
const MIN_FIELDS: usize = 8;

/// Parse `mount` output into mount records, keeping table order.
///
/// ```text
///   node       mounted        mounted over    vfs       date        options
/// -------- ---------------  ---------------  ------ ------------ ---------------
///          /dev/hd4         /                jfs2   Jun 16 09:12 rw,log=/dev/hd8
/// foo      /dev/fslv00      /home            jfs2   Jun 16 09:13 rw,log=/dev/loglv00
/// ```
///
/// The node column is optional. Prefixing every line with a sentinel token
/// makes rows with and without it split to the same positions.
pub fn parse_mounts<S: AsRef<str>>(lines: &[S]) -> Vec<MountRecord> {
    lines.iter()
        .filter_map(|line| {
            let normalized = format!("x{}", line.as_ref());
            let f: Vec<&str> = normalized.split_whitespace().collect();
            if f.len() < MIN_FIELDS { return None; }
            Some(MountRecord {
                volume:  f[1].to_string(),
                path:    f[2].to_string(),
                fs_type: f[3].to_string(),
                // Options are the last column; f[4] is the month of the date.
                options: f[f.len() - 1].to_string(),
            })
        })
        .collect()
}
