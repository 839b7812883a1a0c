use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::ConvertError;

/// Whether `path` carries the metadata extension (`meta` for `house.obj.meta`).
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().is_some_and(|ext| ext == extension)
}

/// Every file under `root` with the given extension, in sorted walk order.
///
/// Symbolic links are followed, so linked files and directories are found
/// under the path of the link. Entries that cannot be read, including link
/// loops, are returned as errors alongside the paths so that one unreadable
/// directory does not hide the rest of the tree.
pub fn find_metadata_files(root: &Path, extension: &str) -> Vec<Result<PathBuf, ConvertError>> {
    WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => {
                let keep = entry.file_type().is_file() && has_extension(entry.path(), extension);
                keep.then(|| Ok(entry.into_path()))
            }
            Err(err) => {
                let path = err.path().unwrap_or(root).to_path_buf();
                Some(Err(ConvertError::Walk { path, source: err }))
            }
        })
        .collect()
}
