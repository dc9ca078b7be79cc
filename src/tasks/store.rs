//! JSON persistence for [`TaskList`]
//!
//! The whole list is read on load and rewritten on save. Saves go through a
//! temporary file in the same directory that is renamed over the target, so a
//! crash mid-write leaves the previous file intact. There is no locking: two
//! processes saving at once will lose one of the updates.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use super::TaskList;
use crate::error::{StorageOp, TaskError};

impl TaskList {
    /// Load a task list from `path`
    ///
    /// A missing file is created (along with its directory) and yields an
    /// empty list. An empty file also yields an empty list.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TaskError> {
        let path = path.as_ref();

        match fs::metadata(path) {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => {
                return Err(TaskError::storage(
                    StorageOp::Read,
                    path,
                    io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
                ));
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %path.display(), "Storage file does not exist, creating it");
                let list = Self::new();
                list.save(path)?;
                return Ok(list);
            }
            Err(e) => return Err(TaskError::storage(StorageOp::Read, path, e)),
        }

        let content =
            fs::read_to_string(path).map_err(|e| TaskError::storage(StorageOp::Read, path, e))?;

        if content.trim().is_empty() {
            debug!(path = %path.display(), "Storage file is empty, using a new task list");
            return Ok(Self::new());
        }

        let mut list: Self = serde_json::from_str(&content)
            .map_err(|e| TaskError::storage(StorageOp::Parse, path, e))?;

        let raised = list.check_ids().map_err(|message| {
            TaskError::storage(
                StorageOp::Parse,
                path,
                io::Error::new(io::ErrorKind::InvalidData, message),
            )
        })?;
        if raised {
            warn!(
                next_task_id = list.next_id(),
                "Stored nextTaskId was not above every task ID; raised it"
            );
        }

        debug!(
            path = %path.display(),
            tasks = list.len(),
            next_task_id = list.next_id(),
            "Task list loaded"
        );
        Ok(list)
    }

    /// Write the list to `path` as indented JSON, creating the file if absent
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), TaskError> {
        let path = path.as_ref();

        let mut content = serde_json::to_string_pretty(self)
            .map_err(|e| TaskError::storage(StorageOp::Serialize, path, e))?;
        content.push('\n');

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        ensure_dir(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)
            .map_err(|e| TaskError::storage(StorageOp::CreateFile, path, e))?;
        tmp.write_all(content.as_bytes())
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| TaskError::storage(StorageOp::Write, path, e))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tmp.as_file()
                .set_permissions(fs::Permissions::from_mode(0o644))
                .map_err(|e| TaskError::storage(StorageOp::Write, path, e))?;
        }

        tmp.persist(path)
            .map_err(|e| TaskError::storage(StorageOp::Write, path, e.error))?;

        debug!(path = %path.display(), bytes = content.len(), "Task list written");
        Ok(())
    }
}

/// Create `dir` and its parents (0755 on Unix) if missing
fn ensure_dir(dir: &Path) -> Result<(), TaskError> {
    if dir.is_dir() {
        return Ok(());
    }

    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }

    builder
        .create(dir)
        .map_err(|e| TaskError::storage(StorageOp::CreateDir, dir, e))?;
    info!(path = %dir.display(), "Created storage directory");
    Ok(())
}
