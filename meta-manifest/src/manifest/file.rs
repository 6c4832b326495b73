use std::path::{Path, PathBuf};

use super::Manifest;
use crate::Result;

/// Represents a cavemeta.toml file with both raw content and parsed manifest.
pub struct MetaToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl MetaToml {
    /// Open and parse a cavemeta.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Directory containing the manifest; relative paths resolve against it.
    pub fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        }
    }

    /// Engine source root resolved against the manifest directory.
    pub fn engine_root(&self) -> PathBuf {
        self.manifest.engine_root(self.dir())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open_resolves_engine_root() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("cavemeta.toml");
        std::fs::write(
            &path,
            "[engine]\nroot = \"src\"\n\n[inputs]\nfiles = [\"foo.h\"]\n",
        )
        .unwrap();

        let file = MetaToml::open(&path).unwrap();

        assert_eq!(file.path(), path);
        assert_eq!(file.dir(), temp.path());
        assert_eq!(file.engine_root(), temp.path().join("src"));
        assert_eq!(file.manifest().inputs.files, vec!["foo.h".to_string()]);
        assert!(file.content().contains("[inputs]"));
    }

    #[test]
    fn test_bare_file_name_resolves_to_current_dir() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("cavemeta.toml");
        std::fs::write(&path, "[inputs]\nfiles = []\n").unwrap();

        let mut file = MetaToml::open(&path).unwrap();
        file.path = PathBuf::from("cavemeta.toml");

        assert_eq!(file.dir(), Path::new("."));
    }
}
