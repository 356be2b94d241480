use crate::error::Result as CollectResult;
use crate::filter::{FilterPolicy, PathMatcher};
use anyhow::Result;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub filter: FilterConfig,

    #[serde(default)]
    pub commands: CommandsConfig,
}

/// Include/exclude patterns and fs-type classes.
///
/// Pattern lists accept either a TOML array or a single comma-separated
/// string, so both of these are valid:
/// ```toml
/// path_excludes = ["/tmp", "glob:/var/**"]
/// volume_excludes = "regex:/dev/lv[0-9]+,/dev/livedump"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    #[serde(deserialize_with = "pattern_list")]
    pub path_excludes:    Vec<String>,
    #[serde(deserialize_with = "pattern_list")]
    pub path_includes:    Vec<String>,
    #[serde(deserialize_with = "pattern_list")]
    pub volume_excludes:  Vec<String>,
    #[serde(deserialize_with = "pattern_list")]
    pub volume_includes:  Vec<String>,
    /// File system types with no storage behind them.
    pub pseudo_fs_types:  Vec<String>,
    /// File system types served by a remote host.
    pub network_fs_types: Vec<String>,
}

/// Command lines as argv arrays; no shell is involved unless one is named.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandsConfig {
    /// Usage report whose last two columns are used and free inodes.
    pub usage:           Vec<String>,
    /// Appended to `usage` for a local-only listing.
    pub usage_local:     Vec<String>,
    pub mount:           Vec<String>,
    pub open_files:      Vec<String>,
    pub max_files:       Vec<String>,
    pub limits_file:     PathBuf,
}

// ── Defaults ─────────────────────────────────────────────────────────

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            path_excludes:    Vec::new(),
            path_includes:    Vec::new(),
            volume_excludes:  Vec::new(),
            volume_includes:  Vec::new(),
            pseudo_fs_types:  strings(&[
                "anon_inodefs", "autofs", "bdev", "binfmt_misc", "bpf", "cgroup", "cgroup2",
                "configfs", "cpuset", "debugfs", "devpts", "devtmpfs", "efivarfs", "fusectl",
                "hugetlbfs", "mqueue", "namefs", "nsfs", "pipefs", "proc", "procfs", "pstore",
                "rootfs", "rpc_pipefs", "securityfs", "sockfs", "sysfs", "tracefs",
            ]),
            network_fs_types: strings(&[
                "afs", "cifs", "smbfs", "sshfs", "ncpfs", "ncp", "nfs", "nfs3", "nfs4",
                "gfs", "gfs2", "glusterfs", "stnfs",
            ]),
        }
    }
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            usage:       strings(&["df", "-F", "%l", "%n"]),
            usage_local: strings(&["-T", "local"]),
            mount:       strings(&["mount"]),
            open_files:  strings(&["lsof", "-nl"]),
            max_files:   strings(&["sh", "-c", "ulimit -n"]),
            limits_file: PathBuf::from("/etc/security/limits"),
        }
    }
}

// ── Pattern loading ───────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(untagged)]
enum PatternList {
    One(String),
    Many(Vec<String>),
}

fn pattern_list<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<Vec<String>, D::Error> {
    let raw = match PatternList::deserialize(d)? {
        PatternList::One(s)   => s.split(',').map(str::to_string).collect(),
        PatternList::Many(v)  => v,
    };
    Ok(raw.into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect())
}

fn compile(specs: &[String]) -> CollectResult<Vec<PathMatcher>> {
    specs.iter().map(|s| PathMatcher::parse(s)).collect()
}

impl FilterConfig {
    /// Compile the configured patterns into an immutable policy.
    pub fn compile(&self) -> CollectResult<FilterPolicy> {
        Ok(FilterPolicy {
            path_includes:    compile(&self.path_includes)?,
            path_excludes:    compile(&self.path_excludes)?,
            volume_includes:  compile(&self.volume_includes)?,
            volume_excludes:  compile(&self.volume_excludes)?,
            pseudo_fs_types:  self.pseudo_fs_types.iter().cloned().collect(),
            network_fs_types: self.network_fs_types.iter().cloned().collect(),
        })
    }
}

// ── Load / Save ───────────────────────────────────────────────────────

impl Config {
    pub fn load() -> Self {
        match try_load() {
            Ok(c)  => c,
            Err(e) => {
                debug!(error = %e, "using default configuration");
                // Write defaults on first run (best-effort)
                if let Err(e) = try_write_defaults() {
                    debug!(error = %e, "could not write default configuration");
                }
                Config::default()
            }
        }
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("fstores").join("fstores.toml"))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

fn try_load() -> Result<Config> {
    let path = Config::config_path().ok_or_else(|| anyhow::anyhow!("no config dir"))?;
    let text = fs::read_to_string(path)?;
    Config::from_toml(&text)
}

fn try_write_defaults() -> Result<()> {
    let path = Config::config_path().ok_or_else(|| anyhow::anyhow!("no config dir"))?;
    if path.exists() {
        // A file that failed to parse is the user's; leave it alone.
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let text = toml::to_string_pretty(&Config::default())?;
    fs::write(path, format!("# fstores configuration\n# Generated on first run, edit freely\n\n{}", text))?;
    Ok(())
}
