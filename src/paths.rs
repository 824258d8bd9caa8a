// Output locations, resolved once at startup and passed down explicitly.

use crate::extension::ImageExtension;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Base name of the saved logo; only the extension varies between runs.
pub const LOGO_BASE_NAME: &str = "swift_logo";
pub const ASSETS_DIR_NAME: &str = "assets";
pub const CONFIG_FILE_NAME: &str = "config.json";

/// The project root plus the two paths derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    pub root: PathBuf,
    pub assets_dir: PathBuf,
    pub config_file: PathBuf,
}

impl ProjectPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        ProjectPaths {
            assets_dir: root.join(ASSETS_DIR_NAME),
            config_file: root.join(CONFIG_FILE_NAME),
            root,
        }
    }

    /// Anchor the project at the directory holding the running binary.
    pub fn from_executable() -> Result<Self> {
        let exe = std::env::current_exe().context("Failed to locate the running executable")?;
        let root = exe
            .parent()
            .with_context(|| format!("{} has no parent directory", exe.display()))?;
        Ok(ProjectPaths::new(root))
    }

    /// `<root>/assets/swift_logo<ext>`
    pub fn asset_file(&self, ext: ImageExtension) -> PathBuf {
        self.assets_dir
            .join(format!("{}{}", LOGO_BASE_NAME, ext.as_str()))
    }

    /// Path of `path` relative to the project root, using the platform
    /// separator. Paths outside the root are returned unchanged.
    pub fn relative_to_root(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.to_path_buf())
    }
}
