//! Infrastructure implementation of the `PathResolver` port.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::PathResolver;

/// Looks binaries up on `$PATH` with the `which` crate.
pub struct WhichPathResolver;

impl PathResolver for WhichPathResolver {
    fn resolve(&self, binary: &str) -> Result<PathBuf> {
        which::which(binary).with_context(|| format!("cannot locate {binary}"))
    }
}
