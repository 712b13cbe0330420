use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

pub fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

/// WebView profile lives under the per-user local data dir.
pub fn default_webview_data_dir() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("com", "hellhbbd", "sales-analyzer")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))?;
    ensure_webview_data_dir(project_dirs.data_local_dir())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_webview_data_dir_creates_nested_dir() {
        let temp_dir = tempfile::tempdir().expect("should create temp dir");
        let base = temp_dir.path().join("local").join("data");

        let created = ensure_webview_data_dir(&base).expect("should create webview dir");

        assert_eq!(created, base.join("webview2"));
        assert!(created.is_dir(), "webview dir should exist on disk");
    }
}
