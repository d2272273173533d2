use std::fs;
use std::path::{Path, PathBuf};

use mdsplice_core::captures::{CaptureRepoError, CaptureRepository, CaptureSpec};
use mdsplice_core::config::loader::{ConfigLoader, default_config_path};
use mdsplice_core::config::types::ResolvedConfig;
use mdsplice_core::frontmatter;
use mdsplice_core::placement::{self, PlacementError};
use mdsplice_core::templates::{
    RenderContext, build_capture_context, extract_variable_names, render_string,
};
use tracing::info;

pub fn run(
    config: Option<&Path>,
    profile: Option<&str>,
    capture_name: &str,
    vars: &[(String, String)],
    dry_run: bool,
) {
    // 1. Load config
    let cfg = load_config_or_exit(config, profile);
    crate::logging::init(&cfg);

    // 2. Load capture repository
    let repo = load_repo_or_exit(&cfg);

    // 3. Get capture spec
    let loaded = match repo.get_by_name(capture_name) {
        Ok(c) => c,
        Err(CaptureRepoError::NotFound(name)) => {
            eprintln!("Capture not found: {name}");
            eprintln!("Available captures:");
            for c in repo.list_all() {
                eprintln!("  - {}", c.logical_name);
            }
            std::process::exit(1);
        }
        Err(other) => {
            eprintln!("Failed to load capture: {other}");
            std::process::exit(1);
        }
    };

    // 4. Build render context: builtins, declared defaults, then user vars
    let mut ctx = build_capture_context(&cfg);

    if let Some(vars_map) = &loaded.spec.vars {
        for (key, spec) in vars_map {
            if let Some(default) = spec.default() {
                let value = render_or_exit(default, &ctx);
                ctx.insert(key.clone(), value);
            }
        }
    }
    for (key, value) in vars {
        ctx.insert(key.clone(), value.clone());
    }

    check_required_vars(&loaded.spec, &ctx);

    // 5. Render target file path
    let target_file_raw = render_or_exit(&loaded.spec.target.file, &ctx);
    let target_file = resolve_target_path(&cfg.vault_root, &target_file_raw);

    // 6. Render content; the splice concatenates the trailing remainder
    // directly after the block, so it must end with a linebreak
    let mut rendered_content = render_or_exit(&loaded.spec.content, &ctx);
    if !rendered_content.ends_with('\n') {
        rendered_content.push('\n');
    }

    if dry_run {
        print!("{rendered_content}");
        return;
    }

    // 7. Read the target; a capture without a backing document is misuse,
    // not a placement failure
    let existing = match fs::read_to_string(&target_file) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Failed to read target file {}: {e}", target_file.display());
            eprintln!("Hint: The target file must exist before capturing to it.");
            std::process::exit(1);
        }
    };

    // 8. Resolve placement and splice
    let frontmatter_end = frontmatter::end_line(&existing);
    let result = match placement::place(
        &existing,
        frontmatter_end,
        &rendered_content,
        &loaded.spec.target.placement(),
        &ctx,
    ) {
        Ok(r) => r,
        Err(PlacementError::AnchorNotFound(a)) => {
            eprintln!("Anchor not found in {}: '{a}'", target_file.display());
            eprintln!(
                "Hint: set insert_after.create_if_not_found to synthesize the anchor."
            );
            std::process::exit(1);
        }
        Err(PlacementError::Render(e)) => {
            eprintln!("Failed to render anchor template: {e}");
            std::process::exit(1);
        }
    };

    // 9. Write back to file
    if let Err(e) = fs::write(&target_file, &result) {
        eprintln!("Failed to write to {}: {e}", target_file.display());
        std::process::exit(1);
    }

    info!(capture = %capture_name, target = %target_file.display(), "capture written");

    println!("OK   mdsplice capture");
    println!("capture: {capture_name}");
    println!("target:  {}", target_file.display());
}

pub fn list(config: Option<&Path>, profile: Option<&str>) {
    let cfg = load_config_or_exit(config, profile);
    let repo = load_repo_or_exit(&cfg);

    let infos = repo.list_all();
    if infos.is_empty() {
        println!("(no captures found)");
        return;
    }

    for info in infos {
        match repo.get_by_name(&info.logical_name) {
            Ok(loaded) => {
                let vars = variable_names(&loaded.spec);
                if vars.is_empty() {
                    println!("{}", info.logical_name);
                } else {
                    println!("{}  [{}]", info.logical_name, vars.join(", "));
                }
            }
            Err(e) => println!("{}  (unreadable: {e})", info.logical_name),
        }
    }
    println!("-- {} captures --", infos.len());
}

/// Variables a capture needs: declared ones plus any referenced in the
/// content, anchor, or target-path templates.
fn variable_names(spec: &CaptureSpec) -> Vec<String> {
    let mut names: Vec<String> = spec
        .vars
        .as_ref()
        .map(|m| m.keys().cloned().collect())
        .unwrap_or_default();

    let mut templates = vec![spec.content.as_str(), spec.target.file.as_str()];
    if let Some(insert_after) = &spec.target.insert_after {
        templates.push(insert_after.after.as_str());
    }
    for template in templates {
        for name in extract_variable_names(template) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }

    names.sort();
    names
}

fn check_required_vars(spec: &CaptureSpec, ctx: &RenderContext) {
    let Some(vars_map) = &spec.vars else { return };

    let mut missing: Vec<(&String, &str)> = vars_map
        .iter()
        .filter(|(name, spec)| spec.is_required() && !ctx.contains_key(*name))
        .map(|(name, spec)| (name, spec.prompt()))
        .collect();
    missing.sort();

    if missing.is_empty() {
        return;
    }

    eprintln!("Missing required variables:");
    for (name, prompt) in missing {
        if prompt.is_empty() {
            eprintln!("  - {name}");
        } else {
            eprintln!("  - {name}: {prompt}");
        }
    }
    eprintln!("Hint: pass them with --var name=value");
    std::process::exit(1);
}

fn load_config_or_exit(config: Option<&Path>, profile: Option<&str>) -> ResolvedConfig {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("FAIL mdsplice capture");
            eprintln!("{e}");
            if config.is_none() {
                eprintln!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}

fn load_repo_or_exit(cfg: &ResolvedConfig) -> CaptureRepository {
    match CaptureRepository::new(&cfg.captures_dir) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("FAIL mdsplice capture");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn render_or_exit(template: &str, ctx: &RenderContext) -> String {
    match render_string(template, ctx) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to render template: {e}");
            std::process::exit(1);
        }
    }
}

fn resolve_target_path(vault_root: &Path, target: &str) -> PathBuf {
    let path = Path::new(target);
    if path.is_absolute() { path.to_path_buf() } else { vault_root.join(path) }
}
