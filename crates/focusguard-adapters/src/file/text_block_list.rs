use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use focusguard_core::{BlockListRepository, BlockListRepositoryError};

/// One entry per line. Blank lines are ignored, everything else is kept as written.
pub struct TextFileBlockList {
    path: PathBuf,
}

impl TextFileBlockList {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

impl BlockListRepository for TextFileBlockList {
    fn load(&self) -> Result<HashSet<String>, BlockListRepositoryError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(HashSet::new()),
            Err(source) => {
                return Err(BlockListRepositoryError::Read {
                    path: self.display_path(),
                    source,
                })
            }
        };

        Ok(contents
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect())
    }

    fn save(&self, entries: &HashSet<String>) -> Result<(), BlockListRepositoryError> {
        let write_error = |source| BlockListRepositoryError::Write {
            path: self.display_path(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(write_error)?;
        }

        let mut sorted: Vec<&String> = entries.iter().collect();
        sorted.sort();

        let mut contents = String::new();
        for entry in sorted {
            contents.push_str(entry);
            contents.push('\n');
        }

        fs::write(&self.path, contents).map_err(write_error)
    }
}
