//! Locating the asset directory.
//!
//! Candidates are tried in order and the first existing directory wins:
//! an explicit `--assets` path, `assets/` next to the executable, `./assets`,
//! then the system-wide install location.

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::ShellError;

pub const ASSET_DIRNAME: &str = "assets";

#[cfg(unix)]
const SYSTEM_ASSET_DIR: &str = "/usr/share/aberredshell/assets";

/// Ordered list of directories to search.
pub fn default_candidates(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(dir) = explicit {
        candidates.push(dir.to_path_buf());
    }
    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        candidates.push(exe_dir.join(ASSET_DIRNAME));
    }
    candidates.push(PathBuf::from(".").join(ASSET_DIRNAME));
    #[cfg(unix)]
    candidates.push(PathBuf::from(SYSTEM_ASSET_DIR));
    candidates
}

/// First candidate that is an existing directory.
pub fn find_asset_dir(candidates: &[PathBuf]) -> Result<PathBuf, ShellError> {
    for dir in candidates {
        if dir.is_dir() {
            info!("Using asset directory {:?}", dir);
            return Ok(dir.clone());
        }
        debug!("No asset directory at {:?}", dir);
    }
    Err(ShellError::AssetDirNotFound {
        searched: candidates.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "aberredshell_assetdir_{}_{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    #[test]
    fn test_first_existing_candidate_wins() {
        let root = temp_dir("first");
        let a = root.join("missing");
        let b = root.join("b");
        let c = root.join("c");
        std::fs::create_dir_all(&b).unwrap();
        std::fs::create_dir_all(&c).unwrap();

        let found = find_asset_dir(&[a, b.clone(), c]).unwrap();
        assert_eq!(found, b);
        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn test_files_are_not_directories() {
        let root = temp_dir("file");
        let file = root.join("assets");
        std::fs::write(&file, b"not a dir").unwrap();

        let err = find_asset_dir(&[file.clone()]).unwrap_err();
        match err {
            ShellError::AssetDirNotFound { searched } => assert_eq!(searched, vec![file]),
            other => panic!("unexpected error: {other}"),
        }
        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn test_explicit_dir_is_tried_first() {
        let explicit = PathBuf::from("/somewhere/else");
        let candidates = default_candidates(Some(&explicit));
        assert_eq!(candidates[0], explicit);
        assert!(candidates.iter().any(|c| c.ends_with(ASSET_DIRNAME)));
    }
}
