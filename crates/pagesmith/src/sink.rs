//! Destinations for generated artifacts.
//!
//! Generators never touch the filesystem directly; they hand every file to an
//! [`ArtifactSink`] under a path relative to the output root.

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use log::debug;

/// Receives generated files.
pub trait ArtifactSink {
    /// Write `contents` to `path`, relative to the sink's root. Existing
    /// files are replaced.
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] if the file cannot be written.
    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()>;
}

/// Writes artifacts below a directory on disk, creating directories as
/// needed.
#[derive(Debug, Clone)]
pub struct DirSink {
    root: PathBuf,
}

impl DirSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ArtifactSink for DirSink {
    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()> {
        let target = self.root.join(path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, contents)?;
        debug!(path:? = target, bytes = contents.len(); "Artifact written");
        Ok(())
    }
}

/// Keeps artifacts in memory, ordered by path.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    files: BTreeMap<PathBuf, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }

    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.files.contains_key(path.as_ref())
    }

    /// All files, ordered by path.
    pub fn files(&self) -> &BTreeMap<PathBuf, String> {
        &self.files
    }

    /// Paths of the files directly inside `dir`.
    pub fn paths_in(&self, dir: impl AsRef<Path>) -> Vec<&Path> {
        let dir = dir.as_ref();
        self.files
            .keys()
            .filter(|path| path.parent() == Some(dir))
            .map(PathBuf::as_path)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl ArtifactSink for MemorySink {
    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()> {
        self.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}

/// A directory of same-kind artifacts sharing one file extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactDir {
    dir: PathBuf,
    extension: String,
}

impl ArtifactDir {
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// `{dir}/{name}.{extension}`
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{}", self.extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_dir_paths() {
        let dir = ArtifactDir::new("components", "vue");
        assert_eq!(dir.path_for("OrderNo"), Path::new("components/OrderNo.vue"));
        assert_eq!(dir.extension(), "vue");
    }

    #[test]
    fn test_memory_sink_replaces_and_orders() {
        let mut sink = MemorySink::new();
        sink.write(Path::new("b/x.vue"), "1").unwrap();
        sink.write(Path::new("a/y.vue"), "2").unwrap();
        sink.write(Path::new("b/x.vue"), "3").unwrap();

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.get("b/x.vue"), Some("3"));
        let paths: Vec<_> = sink.files().keys().collect();
        assert_eq!(paths, [Path::new("a/y.vue"), Path::new("b/x.vue")]);
        assert_eq!(sink.paths_in("b"), [Path::new("b/x.vue")]);
    }

    #[test]
    fn test_dir_sink_creates_directories() {
        let temp = tempfile::tempdir().unwrap();
        let mut sink = DirSink::new(temp.path());

        sink.write(Path::new("components/nested/OrderNo.vue"), "<template />")
            .unwrap();

        let written = fs::read_to_string(temp.path().join("components/nested/OrderNo.vue")).unwrap();
        assert_eq!(written, "<template />");
    }
}
