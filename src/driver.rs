//! Driver: create the output directories, then generate every preset in order

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::Serialize;

use crate::device::DeviceProfile;
use crate::generator::{generate_with, GeneratedFile};
use crate::{GeneratorConfig, Result};

/// Everything a successful run wrote
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub output_root: PathBuf,
    pub files: Vec<GeneratedFile>,
}

impl RunReport {
    /// Files written for the device with `label`
    pub fn for_device<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a GeneratedFile> + 'a {
        self.files.iter().filter(move |f| f.label == label)
    }
}

/// Generate all screenshots under `output_root` with the default configuration.
pub fn run(output_root: &Path) -> Result<RunReport> {
    run_with(&GeneratorConfig::default(), output_root)
}

/// Generate all screenshots under `output_root`.
///
/// Stops at the first failure; files already written stay on disk.
pub fn run_with(config: &GeneratorConfig, output_root: &Path) -> Result<RunReport> {
    let presets = DeviceProfile::presets();
    for profile in &presets {
        fs::create_dir_all(profile.output_dir(output_root))?;
    }

    let mut files = Vec::new();
    for profile in &presets {
        info!(
            "Generating {} {} screenshot(s) at {}x{}",
            profile.count, profile.label, profile.viewport.width, profile.viewport.height
        );
        for index in 1..=profile.count {
            let path = profile.screenshot_path(output_root, index);
            files.push(generate_with(
                config,
                profile.viewport.width,
                profile.viewport.height,
                &path,
                profile.label,
            )?);
        }
    }

    println!();
    println!("✅ All screenshots created!");
    println!("📁 Location: {}/ folder", output_root.display());

    Ok(RunReport {
        output_root: output_root.to_path_buf(),
        files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(label: &str, n: u32) -> GeneratedFile {
        GeneratedFile {
            label: label.to_string(),
            path: PathBuf::from(format!("{}/screenshot_{}.png", label, n)),
            width: 1,
            height: 1,
            sha256: String::new(),
        }
    }

    #[test]
    fn report_filters_by_device() {
        let report = RunReport {
            output_root: PathBuf::from("screenshots"),
            files: vec![file("iPhone", 1), file("iPad", 1), file("iPhone", 2)],
        };
        assert_eq!(report.for_device("iPhone").count(), 2);
        assert_eq!(report.for_device("iPad").count(), 1);
        assert_eq!(report.for_device("Watch").count(), 0);
    }

    #[test]
    fn run_fails_when_root_is_a_file() {
        let root = std::env::temp_dir().join(format!("storeshots-rootfile-{}", std::process::id()));
        fs::write(&root, b"x").unwrap();
        assert!(matches!(run(&root), Err(crate::Error::Io(_))));
        fs::remove_file(&root).ok();
    }
}
