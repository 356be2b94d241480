use crate::models::filestore::FileStore;
use crate::util::human::{fmt_bytes, fmt_limit};

/// Render file stores as a plain-text table.
pub fn file_store_table(stores: &[FileStore]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:<12} {:<24} {:<20} {:<8} {:<13} {:>10} {:>10} {:>10} {:>6} {:>6}\n",
        "Name", "Volume", "Mount", "Type", "Description", "Total", "Used", "Avail", "Use%", "IUse%"
    ));
    out.push_str(&format!("{}\n", "─".repeat(126)));
    for fs in stores {
        out.push_str(&format!(
            "{:<12} {:<24} {:<20} {:<8} {:<13} {:>10} {:>10} {:>10} {:>5.1}% {:>5.1}%\n",
            fs.name, fs.volume, fs.mount, fs.fs_type, fs.description,
            fmt_bytes(fs.total_space), fmt_bytes(fs.used_space()), fmt_bytes(fs.usable_space),
            fs.use_pct(), fs.inode_pct(),
        ));
    }
    out
}

pub fn descriptor_summary(open: u64, max: u64, per_process: u64) -> String {
    format!(
        "Open file descriptors:      {}\nMax file descriptors:       {}\nMax per process:            {}\n",
        open, fmt_limit(max), fmt_limit(per_process),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_line_per_store_after_header() {
        let fs = FileStore {
            name: "hd4".into(), volume: "/dev/hd4".into(), label: "hd4".into(),
            mount: "/".into(), options: "rw".into(), description: "Local Disk".into(),
            fs_type: "jfs2".into(), free_space: 512, usable_space: 512, total_space: 1024,
            free_inodes: 1, total_inodes: 4,
        };
        let table = file_store_table(&[fs.clone(), fs]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("hd4"));
        assert!(lines[2].contains("Local Disk"));
        assert!(lines[2].contains("50.0%"));
        assert!(lines[2].contains("75.0%"));
    }

    #[test]
    fn summary_shows_unlimited() {
        let s = descriptor_summary(12, 2000, u64::MAX);
        assert!(s.contains("12"));
        assert!(s.contains("2000"));
        assert!(s.contains("unlimited"));
    }
}
