use log::{error, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use crate::config::SiteConfig;
use crate::loader::ProfileSource;


/// Outcome of the checks, so launch can decide whether to abort.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BootReport {
    pub warnings: u32,
    pub errors: u32,
}

/// Run all boot checks. Call this before Rocket launches.
/// Creates missing directories and warns about missing files. A missing
/// profile is only a warning: the page falls back to its static markup.
pub fn run(config: &SiteConfig) {
    info!("Folio boot check starting...");

    let report = check(config);

    if report.errors > 0 {
        error!(
            "Boot check FAILED: {} error(s), {} warning(s). Aborting.",
            report.errors, report.warnings
        );
        process::exit(1);
    }

    if report.warnings > 0 {
        warn!(
            "Boot check passed with {} warning(s). Some content may be missing.",
            report.warnings
        );
    } else {
        info!("Boot check passed. All systems go.");
    }
}

/// Directories the site serves from: the static dir, plus the profile's
/// parent when it is a local file. Created if missing.
pub fn required_dirs(config: &SiteConfig) -> Vec<PathBuf> {
    let mut dirs = vec![PathBuf::from(&config.static_dir)];
    if let Ok(ProfileSource::File(path)) = ProfileSource::parse(&config.profile_source) {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !dirs.iter().any(|d| d.as_path() == parent) {
                dirs.push(parent.to_path_buf());
            }
        }
    }
    dirs
}

pub fn check(config: &SiteConfig) -> BootReport {
    let mut report = BootReport::default();

    // ── 1. Directories ─────────────────────────────────
    for dir in required_dirs(config) {
        if !dir.exists() {
            match fs::create_dir_all(&dir) {
                Ok(_) => info!("  Created directory: {}", dir.display()),
                Err(e) => {
                    error!("  FAILED to create directory {}: {}", dir.display(), e);
                    report.errors += 1;
                }
            }
        }
    }

    // ── 2. Static directory ────────────────────────────
    if !Path::new(&config.static_dir).is_dir() {
        warn!("  Static directory missing: {} (assets will 404)", config.static_dir);
        report.warnings += 1;
    }

    // ── 3. Profile source ──────────────────────────────
    match ProfileSource::parse(&config.profile_source) {
        Ok(ProfileSource::File(path)) => {
            if !path.exists() {
                warn!(
                    "  Profile not found: {} (page will show default content)",
                    path.display()
                );
                report.warnings += 1;
            }
        }
        Ok(ProfileSource::Remote(url)) => {
            info!("  Profile will be fetched from {}", url);
        }
        Err(e) => {
            warn!("  {} (page will show default content)", e);
            report.warnings += 1;
        }
    }

    // ── 4. Rocket.toml exists ───────────────────────────
    if !Path::new("Rocket.toml").exists() {
        warn!("  Rocket.toml not found — using default config");
        report.warnings += 1;
    }

    report
}
