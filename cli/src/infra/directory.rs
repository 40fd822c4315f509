//! Infrastructure implementation of the `DirectoryContext` port.

use std::io;
use std::path::{Path, PathBuf};

use crate::application::ports::DirectoryContext;

/// The process's real working directory.
pub struct ProcessDirectory;

impl DirectoryContext for ProcessDirectory {
    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn set_current_dir(&self, path: &Path) -> io::Result<()> {
        std::env::set_current_dir(path)
    }
}
