use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("data directory `{path}` is unusable: {reason}")]
    DataDir { path: PathBuf, reason: String },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Replaces `{dir}/{file_name}` with `contents`, creating `dir` if needed.
///
/// The bytes go to a synced temp file in the same directory which is then
/// renamed over the target, so a reader sees the old or the new file, never a
/// truncated one.
pub(crate) fn write_atomically(
    dir: &Path,
    file_name: &str,
    contents: &str,
) -> Result<PathBuf, PersistError> {
    prepare_dir(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.as_file_mut().sync_all()?;

    let target = dir.join(file_name);
    tmp.persist(&target).map_err(|err| PersistError::Io(err.error))?;
    Ok(target)
}

fn prepare_dir(dir: &Path) -> Result<(), PersistError> {
    let unusable = |reason: String| PersistError::DataDir {
        path: dir.to_path_buf(),
        reason,
    };
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(unusable("not a directory".into())),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            fs::create_dir_all(dir).map_err(|err| unusable(err.to_string()))
        }
        Err(err) => Err(unusable(err.to_string())),
    }
}
