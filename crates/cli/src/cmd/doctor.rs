use std::path::Path;

use mdsplice_core::config::loader::{ConfigLoader, default_config_path};

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    let rc = match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("FAIL mdsplice doctor");
            eprintln!("{e}");
            if config.is_none() {
                eprintln!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    };

    println!("OK   mdsplice doctor");
    println!("profile:      {}", rc.active_profile);
    println!("vault_root:   {}", rc.vault_root.display());
    println!("captures_dir: {}", rc.captures_dir.display());

    if !rc.captures_dir.exists() {
        println!("warn: captures_dir does not exist yet");
    }
}
