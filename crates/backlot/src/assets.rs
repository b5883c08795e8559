use derive_more::{AsRef, Deref, Display, From, Into};
use fs_err as fs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Opaque handle naming an image resource, e.g. `"birdbox"`. The provider
/// decides how (and whether) it resolves to a file on disk.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct AssetRef(String);

crate::impl_string_newtype!(AssetRef);

const POSTER_EXTENSIONS: &[&str] = &["jpeg", "jpg", "png"];

fn data_directories() -> Vec<PathBuf> {
    let xdg = xdg::BaseDirectories::new();
    let mut dirs = Vec::new();

    if let Some(home) = xdg.get_data_home() {
        dirs.push(home.join("marquee"));
    }

    dirs.extend(xdg.get_data_dirs().into_iter().map(|p| p.join("marquee")));
    dirs
}

fn matches_poster(path: &Path, asset: &AssetRef) -> bool {
    let stem_matches = path
        .file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|s| s == asset.as_str());
    let ext_allowed = path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|e| POSTER_EXTENSIONS.contains(&e));
    stem_matches && ext_allowed
}

fn scan_posters(dir: &Path, asset: &AssetRef) -> Option<PathBuf> {
    let read_dir = fs::read_dir(dir).ok()?;
    read_dir
        .flatten()
        .map(|entry| entry.path())
        .find(|path| matches_poster(path, asset))
}

/// Looks up the poster image for an asset ref in the XDG data directories
/// (`<data dir>/marquee/posters/<ref>.<ext>`). First hit wins; a miss is not
/// an error, the caller renders a placeholder.
pub fn find_poster(asset: &AssetRef) -> Option<PathBuf> {
    let found = data_directories()
        .iter()
        .find_map(|dir| scan_posters(&dir.join("posters"), asset));
    if found.is_none() {
        log::debug!("no poster found for '{}'", asset);
    }
    found
}

/// Looks up the logo asset (`<data dir>/marquee/logo.png`).
pub fn find_logo() -> Option<PathBuf> {
    data_directories()
        .iter()
        .map(|dir| dir.join("logo.png"))
        .find(|path| path.exists())
}

impl AssetRef {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poster_match_requires_exact_stem() {
        let asset = AssetRef::new("birdbox");
        assert!(matches_poster(Path::new("/x/birdbox.jpeg"), &asset));
        assert!(matches_poster(Path::new("/x/birdbox.png"), &asset));
        assert!(!matches_poster(Path::new("/x/birdbox2.jpeg"), &asset));
        assert!(!matches_poster(Path::new("/x/birdbox"), &asset));
        assert!(!matches_poster(Path::new("/x/birdbox.webp"), &asset));
    }

    #[test]
    fn missing_poster_is_none() {
        assert!(find_poster(&AssetRef::new("no-such-poster-asset")).is_none());
    }
}
