//! `favstrip config` – show where the config lives and what it resolves to.

use anyhow::Result;
use favstrip_core::config::{self, StripConfig};
use std::path::Path;

pub fn run_show_config(explicit: Option<&Path>, cfg: &StripConfig) -> Result<()> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => config::config_path()?,
    };
    println!("# {}", path.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
