/// Format a raw byte count into a human-readable string: "12.5 MB"
pub fn fmt_bytes(bytes: u64) -> String {
    let b = bytes as f64;
    const TB: f64 = 1_099_511_627_776.0;
    const GB: f64 = 1_073_741_824.0;
    const MB: f64 = 1_048_576.0;
    const KB: f64 = 1_024.0;
    if b >= TB      { format!("{:.1} TB", b / TB) }
    else if b >= GB { format!("{:.1} GB", b / GB) }
    else if b >= MB { format!("{:.1} MB", b / MB) }
    else if b >= KB { format!("{:.1} KB", b / KB) }
    else            { format!("{:.0} B",  b) }
}

/// Descriptor limits use `u64::MAX` for "no limit".
pub fn fmt_limit(n: u64) -> String {
    if n == u64::MAX { "unlimited".to_string() } else { n.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_largest_unit() {
        assert_eq!(fmt_bytes(512), "512 B");
        assert_eq!(fmt_bytes(1536), "1.5 KB");
        assert_eq!(fmt_bytes(738_197_504), "704.0 MB");
        assert_eq!(fmt_bytes(3 * 1_099_511_627_776), "3.0 TB");
    }

    #[test]
    fn unlimited_sentinel() {
        assert_eq!(fmt_limit(u64::MAX), "unlimited");
        assert_eq!(fmt_limit(2000), "2000");
    }
}
