use crate::models::mount::InodeUsage;
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Rows that start with a volume: "/dev/hd4 ..." or "192.168.1.5:/export ...".
fn volume_row() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?:[A-Za-z0-9_.]+:)?/").expect("static regex"))
}

pub fn is_volume_row(line: &str) -> bool {
    volume_row().is_match(line)
}

/// Parse `df -F %l %n` output into a map of volume → inode usage.
///
/// ```text
/// Filesystem    512-blocks     Iused    Ifree
/// /dev/hd4         1441792    18137    58071
/// /proc                  -        -        -
/// 192.168.253.80:/usr/sys/inst.images   461373440    84670  5662375
/// ```
///
/// The last two columns are used and free inodes; anything unparsable counts as 0.
pub fn parse_usage<S: AsRef<str>>(lines: &[S]) -> HashMap<String, InodeUsage> {
    let mut map = HashMap::new();

    for line in lines {
        let line = line.as_ref();
        if !is_volume_row(line) { continue; }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 3 { continue; }

        let used = parse(fields[fields.len() - 2]);
        let free = parse(fields[fields.len() - 1]);
        map.insert(
            fields[0].to_string(),
            InodeUsage { free, total: used.saturating_add(free) },
        );
    }
    map
}

fn parse(s: &str) -> u64 {
    s.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DF_ALL: &[&str] = &[
        "Filesystem    512-blocks     Iused    Ifree",
        "/dev/hd4         1441792    18137    58069",
        "/dev/hd2         5636096    44046   102455",
        "/proc                  -        -        -",
        "/dev/resgrp473lv   83886080    28799  8358449",
        "192.168.253.80:/usr/sys/inst.images/toolbox_20110809   461373440    84670  5662375",
    ];

    #[test]
    fn header_is_not_a_volume_row() {
        assert!(!is_volume_row(DF_ALL[0]));
        assert!(is_volume_row("/dev/hd4 1 2 3"));
        assert!(!is_volume_row("nfs.host-1:/export 1 2 3"));
        assert!(is_volume_row("nfs.host1:/export 1 2 3"));
        assert!(!is_volume_row("  /dev/hd4 1 2 3"));
        assert!(!is_volume_row("höst:/export 1 2 3"));
    }

    #[test]
    fn parses_inode_columns() {
        let map = parse_usage(DF_ALL);
        assert_eq!(map.len(), 5);
        assert_eq!(map["/dev/hd4"], InodeUsage { free: 58069, total: 18137 + 58069 });
        assert_eq!(map["/dev/resgrp473lv"].free, 8358449);
        assert_eq!(
            map["192.168.253.80:/usr/sys/inst.images/toolbox_20110809"].total,
            84670 + 5662375
        );
    }

    #[test]
    fn placeholder_columns_count_as_zero() {
        let map = parse_usage(DF_ALL);
        assert_eq!(map["/proc"], InodeUsage { free: 0, total: 0 });
    }

    #[test]
    fn short_rows_contribute_nothing() {
        let map = parse_usage(&["/dev/hd4", "/dev/hd2 17", "/dev/hd3 1 2"]);
        assert_eq!(map.len(), 1);
        assert_eq!(map["/dev/hd3"], InodeUsage { free: 2, total: 3 });
    }

    #[test]
    fn garbage_never_panics() {
        let map = parse_usage(&["", "   ", "-------- ------", "/ x y", "/dev/hd9 a b c"]);
        assert_eq!(map["/"], InodeUsage::default());
        assert_eq!(map["/dev/hd9"], InodeUsage::default());
    }
}
