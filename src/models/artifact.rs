use std::path::{ Path, PathBuf };

/// A design file written by a generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub path: PathBuf,
    pub chain_length: usize,
    pub line_count: usize,
}

/// Output of a successful compile: the model directory and its executable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildArtifact {
    pub obj_dir: PathBuf,
    /// Model prefix passed to `--prefix`
    pub prefix: String,
    pub executable: PathBuf,
}

impl BuildArtifact {
    pub fn new(obj_dir: &Path, prefix: &str) -> Self {
        BuildArtifact {
            obj_dir: obj_dir.to_path_buf(),
            prefix: prefix.to_string(),
            executable: obj_dir.join(prefix),
        }
    }

    /// Header of the root class, where the split structs end up
    pub fn root_header(&self) -> PathBuf {
        self.obj_dir.join(format!("{}___024root.h", self.prefix))
    }
}
