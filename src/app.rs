// Top-level flow, split in two stages:
// - stage 1 downloads the logo and saves it under assets/ (fatal on error)
// - stage 2 records the saved path in config.json (best-effort)

use crate::api::LogoClient;
use crate::config;
use crate::error::{ConfigWriteError, FetchError};
use crate::extension::{choose_extension, ImageExtension};
use crate::paths::ProjectPaths;
use crate::ui;
use std::fs;
use std::path::PathBuf;

/// A logo that was written to disk by stage 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedAsset {
    pub path: PathBuf,
    pub extension: ImageExtension,
    /// Path relative to the project root, as stored in config.json.
    pub relative_path: PathBuf,
}

/// Outcome of a successful run. `config_updated` is false when stage 2
/// failed; that failure has already been printed on stderr.
#[derive(Debug)]
pub struct RunReport {
    pub asset: SavedAsset,
    pub config_updated: bool,
}

/// Stage 1: download `url` and write it to `assets/swift_logo<ext>`.
///
/// Nothing is written until the whole body has been received, so a failed
/// request leaves any existing asset as it was.
pub fn fetch_and_save(
    client: &LogoClient,
    url: &str,
    paths: &ProjectPaths,
) -> Result<SavedAsset, FetchError> {
    let spinner = ui::spinner("Downloading...");
    let fetched = client.fetch(url);
    spinner.finish_and_clear();
    let image = fetched?;

    let extension = choose_extension(url, image.content_type.as_deref());
    tracing::debug!("classified {} as {}", url, extension);

    fs::create_dir_all(&paths.assets_dir).map_err(|source| FetchError::CreateAssetsDir {
        path: paths.assets_dir.clone(),
        source,
    })?;

    let path = paths.asset_file(extension);
    fs::write(&path, &image.bytes).map_err(|source| FetchError::WriteAsset {
        path: path.clone(),
        source,
    })?;
    tracing::info!("wrote {} bytes to {}", image.bytes.len(), path.display());

    Ok(SavedAsset {
        relative_path: paths.relative_to_root(&path),
        path,
        extension,
    })
}

/// Stage 2: point `logo_path` in config.json at the saved asset.
pub fn record_logo_path(paths: &ProjectPaths, asset: &SavedAsset) -> Result<(), ConfigWriteError> {
    let value = asset.relative_path.to_string_lossy();
    config::update_logo_path(&paths.config_file, &value)
}

/// Run both stages, printing progress the way the CLI shows it.
/// Only stage 1 errors are returned.
pub fn run(client: &LogoClient, url: &str, paths: &ProjectPaths) -> Result<RunReport, FetchError> {
    println!("Downloading logo from: {}", url);
    let asset = fetch_and_save(client, url, paths)?;
    println!("Saved logo to: {}", asset.path.display());

    let config_updated = match record_logo_path(paths, &asset) {
        Ok(()) => {
            println!(
                "Updated config.json with logo_path: {}",
                asset.relative_path.display()
            );
            true
        }
        Err(e) => {
            tracing::warn!("config update failed: {}", e);
            eprintln!("Failed to write config.json: {}", e);
            false
        }
    };

    println!("Done. Restart the app if it is running; the logo will appear in the UI.");
    Ok(RunReport {
        asset,
        config_updated,
    })
}
