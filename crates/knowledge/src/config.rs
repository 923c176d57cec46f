//! Knowledge base state paths.
//!
//! All persistent state lives in the `.campus/` directory of the
//! workspace: the SQLite vector index and the embedding configuration
//! written at ingest time.

use std::path::{Path, PathBuf};

/// Get the state directory for a workspace.
pub fn get_state_dir(workspace: &Path) -> PathBuf {
    workspace.join(".campus")
}

/// Get the SQLite index path.
pub fn get_index_path(workspace: &Path) -> PathBuf {
    get_state_dir(workspace).join("index.sqlite")
}

/// Get the path of the embedding configuration persisted next to the
/// index. Queries load the provider from this file so that the same
/// model is used at ingest and query time.
pub fn get_embedding_config_path(workspace: &Path) -> PathBuf {
    get_state_dir(workspace).join("embedding.yaml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_live_under_state_dir() {
        let workspace = Path::new("/tmp/ws");
        assert_eq!(
            get_index_path(workspace),
            Path::new("/tmp/ws/.campus/index.sqlite")
        );
        assert_eq!(
            get_embedding_config_path(workspace),
            Path::new("/tmp/ws/.campus/embedding.yaml")
        );
    }
}
