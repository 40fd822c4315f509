//! Run an operation with a temporary working-directory override.
//!
//! The working directory is process-wide state. Nothing here locks it:
//! concurrent scoped operations on one process must be serialized by the
//! caller.

use std::future::Future;
use std::path::{Path, PathBuf};

use crate::application::ports::DirectoryContext;
use crate::domain::{DirectoryAction, VagrantError};

/// Run `body` inside `target`, restoring the previous directory afterwards.
///
/// `None` or an empty path runs `body` directly without touching the
/// directory. The body never runs if the current directory cannot be read
/// or `target` cannot be entered.
///
/// Restoration is always attempted. A body error takes precedence over a
/// restoration error, which is then only logged; a restoration error
/// replaces a body success.
///
/// # Errors
///
/// Returns [`VagrantError::DirectoryScope`] when reading, entering, or
/// restoring the directory fails, or the body's own error.
pub async fn run_scoped<D, F, Fut, T>(
    dirs: &D,
    target: Option<&Path>,
    body: F,
) -> Result<T, VagrantError>
where
    D: DirectoryContext + ?Sized,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, VagrantError>>,
{
    let Some(target) = target.filter(|p| !p.as_os_str().is_empty()) else {
        return body().await;
    };

    let original = dirs
        .current_dir()
        .map_err(|source| VagrantError::DirectoryScope {
            action: DirectoryAction::Read,
            path: PathBuf::from("."),
            source,
        })?;

    dirs.set_current_dir(target)
        .map_err(|source| VagrantError::DirectoryScope {
            action: DirectoryAction::Enter,
            path: target.to_path_buf(),
            source,
        })?;
    tracing::debug!(from = %original.display(), to = %target.display(), "entered working directory");

    let result = body().await;

    match (result, dirs.set_current_dir(&original)) {
        (result, Ok(())) => {
            tracing::debug!(to = %original.display(), "restored working directory");
            result
        }
        (Err(err), Err(restore)) => {
            tracing::warn!(
                path = %original.display(),
                error = %restore,
                "failed to restore working directory after a failed operation"
            );
            Err(err)
        }
        (Ok(_), Err(source)) => Err(VagrantError::DirectoryScope {
            action: DirectoryAction::Restore,
            path: original,
            source,
        }),
    }
}
