//! Test file discovery
//!
//! Targets on the command line are files or directories. Directories are
//! searched recursively, except by [`files_in_directory`].

use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::WalkDir;

/// Extensions of YAML test files
pub const YAML_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Extensions of XML corpus files
pub const XML_EXTENSIONS: &[&str] = &["xml"];

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.contains(&ext))
}

/// Files given directly plus files with a matching extension found under
/// the given directories, sorted and without duplicates
#[must_use]
pub fn find_files(targets: &[PathBuf], extensions: &[&str]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for target in targets {
        if target.is_file() {
            files.push(target.clone());
        } else if target.is_dir() {
            files.extend(
                WalkDir::new(target)
                    .into_iter()
                    .filter_map(Result::ok)
                    .filter(|entry| entry.file_type().is_file())
                    .map(walkdir::DirEntry::into_path)
                    .filter(|path| has_extension(path, extensions)),
            );
        } else {
            warn!("{} does not exist", target.display());
        }
    }

    files.sort();
    files.dedup();
    debug!("found {} file(s)", files.len());
    files
}

/// Files directly in `directory` with a matching extension, sorted
///
/// Subdirectories are not searched.
#[must_use]
pub fn files_in_directory(directory: &Path, extensions: &[&str]) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(directory)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|path| has_extension(path, extensions))
        .collect();
    files.sort();
    files
}

/// The first file in `directory` with the given extension, by name
#[must_use]
pub fn first_with_extension(directory: &Path, extension: &str) -> Option<PathBuf> {
    files_in_directory(directory, &[extension]).into_iter().next()
}
