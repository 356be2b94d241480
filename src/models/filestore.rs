use serde::Serialize;

/// One mounted file store with capacity and inode figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileStore {
    pub name:         String,
    pub volume:       String,
    pub label:        String,
    pub mount:        String,
    pub options:      String,
    pub description:  String,
    pub fs_type:      String,
    pub free_space:   u64,
    pub usable_space: u64,
    pub total_space:  u64,
    pub free_inodes:  u64,
    pub total_inodes: u64,
}

impl FileStore {
    pub fn used_space(&self) -> u64 {
        self.total_space.saturating_sub(self.free_space)
    }

    pub fn use_pct(&self) -> f64 {
        if self.total_space == 0 { return 0.0; }
        self.total_space.saturating_sub(self.usable_space) as f64 / self.total_space as f64 * 100.0
    }

    pub fn inode_pct(&self) -> f64 {
        if self.total_inodes == 0 { return 0.0; }
        self.total_inodes.saturating_sub(self.free_inodes) as f64 / self.total_inodes as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(total: u64, free: u64, usable: u64, inodes: (u64, u64)) -> FileStore {
        FileStore {
            name: "usr".into(), volume: "/dev/hd2".into(), label: "usr".into(),
            mount: "/usr".into(), options: "rw".into(), description: "Local Disk".into(),
            fs_type: "jfs2".into(), free_space: free, usable_space: usable, total_space: total,
            free_inodes: inodes.0, total_inodes: inodes.1,
        }
    }

    #[test]
    fn percentages_handle_empty_stores() {
        let fs = store(0, 0, 0, (0, 0));
        assert_eq!(fs.use_pct(), 0.0);
        assert_eq!(fs.inode_pct(), 0.0);
    }

    #[test]
    fn percentages_saturate_on_skewed_figures() {
        let fs = store(100, 200, 150, (10, 5));
        assert_eq!(fs.used_space(), 0);
        assert_eq!(fs.use_pct(), 0.0);
        assert_eq!(fs.inode_pct(), 0.0);
    }

    #[test]
    fn percentages_use_usable_space_and_inodes() {
        let fs = store(1000, 300, 250, (25, 100));
        assert_eq!(fs.used_space(), 700);
        assert!((fs.use_pct() - 75.0).abs() < 1e-9);
        assert!((fs.inode_pct() - 75.0).abs() < 1e-9);
    }
}
