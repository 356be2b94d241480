use anyhow::{Context, Result};
use clap::Parser;
use fstores::collectors::descriptors;
use fstores::config::Config;
use fstores::sys::{FsLinesReader, NativeRunner, StatvfsProber};
use fstores::util::report;
use fstores::FileStoreEnumerator;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fstores", about = "List mounted file stores with capacity and inode usage", version = "0.1")]
struct Cli {
    /// Only local file systems (skips network types)
    #[arg(short, long)]
    local: bool,

    /// Only the store with this display name (e.g. "home", or "hd4" for /)
    #[arg(short, long)]
    name: Option<String>,

    /// Print a one-shot JSON snapshot and exit
    #[arg(long)]
    json: bool,

    /// Print open/max file descriptor counts and exit
    #[arg(long)]
    descriptors: bool,

    /// Print config file path and current values, then exit
    #[arg(long)]
    config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cfg = Config::load();

    if cli.config {
        return run_print_config(&cfg);
    }
    if cli.descriptors {
        return run_descriptors(&cfg);
    }
    run_list(&cfg, cli.name.as_deref(), cli.local, cli.json)
}

fn run_list(cfg: &Config, name: Option<&str>, local_only: bool, json: bool) -> Result<()> {
    let policy = cfg.filter.compile().context("invalid filter pattern in config")?;
    let enumerator = FileStoreEnumerator::new(&policy, &cfg.commands, &NativeRunner, &StatvfsProber);
    let stores = enumerator
        .list_file_stores(name, local_only)
        .context("could not enumerate file stores")?;

    if json {
        let snapshot = serde_json::json!({
            "fstores_version": "0.1",
            "timestamp":   chrono::Local::now().to_rfc3339(),
            "local_only":  local_only,
            "file_stores": stores,
        });
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", report::file_store_table(&stores));
    }
    Ok(())
}

fn run_descriptors(cfg: &Config) -> Result<()> {
    let open = descriptors::open_file_descriptors(&NativeRunner, &cfg.commands.open_files);
    let max  = descriptors::max_file_descriptors(&NativeRunner, &cfg.commands.max_files);
    let per  = descriptors::max_file_descriptors_per_process(&FsLinesReader, &cfg.commands.limits_file);
    print!("{}", report::descriptor_summary(open, max, per));
    Ok(())
}

fn run_print_config(cfg: &Config) -> Result<()> {
    let path = Config::config_path()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "(unknown)".to_string());
    let f = &cfg.filter;
    let c = &cfg.commands;
    println!("Config: {}", path);
    println!();
    println!("[filter]");
    println!("  path_excludes    = {:?}", f.path_excludes);
    println!("  path_includes    = {:?}", f.path_includes);
    println!("  volume_excludes  = {:?}", f.volume_excludes);
    println!("  volume_includes  = {:?}", f.volume_includes);
    println!("  pseudo_fs_types  = {:?}", f.pseudo_fs_types);
    println!("  network_fs_types = {:?}", f.network_fs_types);
    println!();
    println!("[commands]");
    println!("  usage       = {:?}", c.usage);
    println!("  usage_local = {:?}", c.usage_local);
    println!("  mount       = {:?}", c.mount);
    println!("  open_files  = {:?}", c.open_files);
    println!("  max_files   = {:?}", c.max_files);
    println!("  limits_file = {}", c.limits_file.display());
    Ok(())
}
