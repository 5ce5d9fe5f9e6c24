use std::fs;
use std::path::{Path, PathBuf};

use crate::error::RenderError;

/// Plain-text rendering.
pub const TEXT_FILE: &str = "maze.txt";
/// Annotated grid as CSV.
pub const CSV_FILE: &str = "mazePath.csv";
/// Directed weighted edges.
pub const EDGELIST_FILE: &str = "weighted.edgelist";
/// Coloured raster image.
pub const IMAGE_FILE: &str = "mazeImage.png";
/// Node-link diagram.
pub const DIAGRAM_FILE: &str = "mazeGraph.png";

/// The directory every writer puts its artifact into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDir {
    root: PathBuf,
}

impl OutputDir {
    /// Use `root`, creating it (and its parents) if missing.
    pub fn create(root: impl Into<PathBuf>) -> Result<Self, RenderError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| RenderError::io(&root, e))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of the artifact called `name`.
    pub fn join(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_makes_nested_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let out = OutputDir::create(tmp.path().join("a").join("b")).unwrap();
        assert!(out.root().is_dir());
        assert_eq!(out.join(CSV_FILE), tmp.path().join("a/b/mazePath.csv"));
    }
}
