//! Filesystem view loader.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use crate::view::loader::ViewLoader;
use crate::view::types::{content_type_for, LoadError, View};

/// Loads view modules from files under a root directory.
#[derive(Debug, Clone)]
pub struct FsViewLoader {
    root: PathBuf,
}

impl FsViewLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Map a module identifier to a file, refusing anything that escapes the root.
    fn module_path(&self, module: &str) -> Result<PathBuf, LoadError> {
        let relative = Path::new(module);
        let contained = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if module.is_empty() || !contained {
            return Err(LoadError::InvalidModule(module.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl ViewLoader for FsViewLoader {
    async fn load(&self, module: &str) -> Result<View, LoadError> {
        let path = self.module_path(module)?;
        let body = tokio::fs::read(&path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => LoadError::Missing(module.to_string()),
            _ => LoadError::from(e),
        })?;

        Ok(View::new(module, content_type_for(module), body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("view-router-fs-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(dir.join("nested")).unwrap();
        std::fs::write(dir.join("HomeView.html"), "<h1>Home</h1>").unwrap();
        std::fs::write(dir.join("nested/app.js"), "export default {}").unwrap();
        dir
    }

    #[tokio::test]
    async fn test_loads_file_with_content_type() {
        let dir = scratch_dir();
        let loader = FsViewLoader::new(dir.clone());

        let view = loader.load("HomeView.html").await.unwrap();
        assert_eq!(view.body, b"<h1>Home</h1>");
        assert_eq!(view.content_type, "text/html; charset=utf-8");

        let nested = loader.load("nested/app.js").await.unwrap();
        assert_eq!(nested.content_type, "text/javascript; charset=utf-8");

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[tokio::test]
    async fn test_missing_module() {
        let dir = scratch_dir();
        let loader = FsViewLoader::new(dir.clone());

        let err = loader.load("LoginView.html").await.unwrap_err();
        assert!(matches!(err, LoadError::Missing(ref m) if m == "LoginView.html"));

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[tokio::test]
    async fn test_rejects_escaping_paths() {
        let loader = FsViewLoader::new("/srv/views");
        for module in ["../secret", "/etc/passwd", "a/../../b", ""] {
            let err = loader.load(module).await.unwrap_err();
            assert!(matches!(err, LoadError::InvalidModule(_)), "{module} should be rejected");
        }
    }
}
