/// One row of the mount table after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountRecord {
    pub volume:  String,   // "/dev/hd4", "host:/export"
    pub path:    String,   // "/usr"
    pub fs_type: String,   // "jfs2", "nfs3", "procfs"
    pub options: String,   // "rw,log=/dev/hd8"
}

/// Inode figures for one device from the usage report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InodeUsage {
    pub free:  u64,
    pub total: u64,
}
