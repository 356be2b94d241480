//! Joins the mount table with the usage report into `FileStore`s.

use crate::collectors::{mounts, usage};
use crate::config::CommandsConfig;
use crate::error::Result;
use crate::filter::FilterPolicy;
use crate::models::filestore::FileStore;
use crate::models::mount::{InodeUsage, MountRecord};
use crate::sys::{CapacityProber, CommandRunner};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Last path component of the mount point; for `/` the last component of the volume.
pub fn display_name<'a>(path: &'a str, volume: &'a str) -> &'a str {
    let name = last_segment(path);
    if name.is_empty() { last_segment(volume) } else { name }
}

fn last_segment(s: &str) -> &str {
    s.rsplit('/').next().unwrap_or(s)
}

pub fn description(mount: &MountRecord, policy: &FilterPolicy) -> &'static str {
    if mount.volume.starts_with("/dev") || mount.path == "/" {
        "Local Disk"
    } else if mount.volume == "tmpfs" {
        "Ram Disk"
    } else if policy.is_network(&mount.fs_type) {
        "Network Disk"
    } else {
        "Mount Point"
    }
}

/// Build one store, or `None` when the mount point cannot be probed or
/// reports more free/usable space than total.
/// Volumes missing from the usage report get zero inode counts.
pub fn assemble(
    mount:  &MountRecord,
    usage:  &HashMap<String, InodeUsage>,
    prober: &impl CapacityProber,
    policy: &FilterPolicy,
) -> Option<FileStore> {
    let cap = match prober.probe(Path::new(&mount.path)) {
        Some(c) => c,
        None    => {
            debug!(path = %mount.path, volume = %mount.volume, "mount point not reachable, skipping");
            return None;
        }
    };
    if cap.usable > cap.total || cap.free > cap.total {
        debug!(path = %mount.path, total = cap.total, free = cap.free, usable = cap.usable,
            "inconsistent capacity, skipping");
        return None;
    }
    let inodes = usage.get(&mount.volume).copied().unwrap_or_default();
    let name = display_name(&mount.path, &mount.volume).to_string();

    Some(FileStore {
        label:        name.clone(),
        name,
        volume:       mount.volume.clone(),
        mount:        mount.path.clone(),
        options:      mount.options.clone(),
        description:  description(mount, policy).to_string(),
        fs_type:      mount.fs_type.clone(),
        free_space:   cap.free,
        usable_space: cap.usable,
        total_space:  cap.total,
        free_inodes:  inodes.free,
        total_inodes: inodes.total,
    })
}

/// Lists file stores using a fixed policy and a set of host collaborators.
pub struct FileStoreEnumerator<'a, R, P> {
    policy:   &'a FilterPolicy,
    commands: &'a CommandsConfig,
    runner:   &'a R,
    prober:   &'a P,
}

impl<'a, R: CommandRunner, P: CapacityProber> FileStoreEnumerator<'a, R, P> {
    pub fn new(policy: &'a FilterPolicy, commands: &'a CommandsConfig, runner: &'a R, prober: &'a P) -> Self {
        Self { policy, commands, runner, prober }
    }

    pub fn file_stores(&self, local_only: bool) -> Result<Vec<FileStore>> {
        self.list_file_stores(None, local_only)
    }

    /// All eligible stores in mount-table order, optionally only the ones
    /// whose display name equals `name_filter`.
    pub fn list_file_stores(&self, name_filter: Option<&str>, local_only: bool) -> Result<Vec<FileStore>> {
        let mut usage_cmd = self.commands.usage.clone();
        if local_only {
            usage_cmd.extend(self.commands.usage_local.iter().cloned());
        }
        let usage = usage::parse_usage(&self.runner.run(&usage_cmd)?);
        let table = mounts::parse_mounts(&self.runner.run(&self.commands.mount)?);

        let mut out = Vec::new();
        for m in &table {
            if !self.policy.is_eligible(&m.path, &m.volume, &m.fs_type, local_only) {
                debug!(path = %m.path, fs_type = %m.fs_type, "filtered out");
                continue;
            }
            if let Some(want) = name_filter {
                if display_name(&m.path, &m.volume) != want { continue; }
            }
            if let Some(fs) = assemble(m, &usage, self.prober, self.policy) {
                out.push(fs);
            }
        }
        Ok(out)
    }

    /// Re-read the live figures for `store`. Returns false when it is no longer mounted.
    pub fn refresh(&self, store: &mut FileStore) -> Result<bool> {
        let fresh = self.list_file_stores(Some(store.name.as_str()), false)?;
        let Some(found) = fresh.into_iter()
            .find(|f| f.volume == store.volume && f.mount == store.mount)
        else {
            return Ok(false);
        };

        store.description  = found.description;
        store.fs_type      = found.fs_type;
        store.free_space   = found.free_space;
        store.usable_space = found.usable_space;
        store.total_space  = found.total_space;
        store.free_inodes  = found.free_inodes;
        store.total_inodes = found.total_inodes;
        Ok(true)
    }
}
