use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::Path;

/// Name of the synthetic entry that leads to the parent directory.
pub const PARENT_MARKER: &str = "..";

/// One row of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub is_directory: bool,
}

impl DirectoryEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_directory: false,
        }
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_directory: true,
        }
    }

    /// The `..` entry. Always a directory.
    pub fn parent_marker() -> Self {
        Self::directory(PARENT_MARKER)
    }

    pub fn is_parent_marker(&self) -> bool {
        self.name == PARENT_MARKER
    }

    /// Name as shown in the list: directories get a trailing `/`.
    pub fn display_name(&self) -> String {
        if self.is_directory {
            format!("{}/", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// Whether `path` can be left upwards. False for a filesystem root.
pub fn has_parent(path: &Path) -> bool {
    path.parent().is_some()
}

/// Listing order: `..` first, then directories, then files.
/// Names compare case-sensitively, byte by byte.
pub fn compare_entries(a: &DirectoryEntry, b: &DirectoryEntry) -> Ordering {
    b.is_parent_marker()
        .cmp(&a.is_parent_marker())
        .then_with(|| b.is_directory.cmp(&a.is_directory))
        .then_with(|| a.name.cmp(&b.name))
}

pub fn sort_entries(entries: &mut [DirectoryEntry]) {
    entries.sort_by(compare_entries);
}

/// Read and sort the entries of `path`, prepending `..` unless `path` is a root.
///
/// Symlinks are classified by their target, so a link to a directory is
/// listed (and entered) as a directory. Any error while iterating aborts
/// the whole listing.
pub fn read_entries(path: &Path) -> io::Result<Vec<DirectoryEntry>> {
    let mut entries = Vec::new();
    if has_parent(path) {
        entries.push(DirectoryEntry::parent_marker());
    }

    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        let is_directory = entry.path().is_dir();
        entries.push(DirectoryEntry { name, is_directory });
    }

    sort_entries(&mut entries);
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn names(entries: &[DirectoryEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn parent_marker_is_directory() {
        let marker = DirectoryEntry::parent_marker();
        assert!(marker.is_directory);
        assert!(marker.is_parent_marker());
        assert!(!DirectoryEntry::directory("...").is_parent_marker());
    }

    #[test]
    fn display_name_marks_directories() {
        assert_eq!(DirectoryEntry::directory("src").display_name(), "src/");
        assert_eq!(DirectoryEntry::parent_marker().display_name(), "../");
        assert_eq!(DirectoryEntry::file("a.rs").display_name(), "a.rs");
    }

    #[test]
    fn sort_puts_parent_then_dirs_then_files() {
        let mut entries = vec![
            DirectoryEntry::file("b.txt"),
            DirectoryEntry::directory("zeta"),
            DirectoryEntry::file("a.txt"),
            DirectoryEntry::parent_marker(),
            DirectoryEntry::directory("alpha"),
        ];
        sort_entries(&mut entries);
        assert_eq!(names(&entries), vec!["..", "alpha", "zeta", "a.txt", "b.txt"]);
    }

    #[test]
    fn sort_is_case_sensitive() {
        let mut entries = vec![
            DirectoryEntry::file("apple"),
            DirectoryEntry::file("Banana"),
            DirectoryEntry::file("Apple"),
        ];
        sort_entries(&mut entries);
        assert_eq!(names(&entries), vec!["Apple", "Banana", "apple"]);
    }

    #[test]
    fn read_entries_sorts_directory_contents() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("beta")).unwrap();
        fs::create_dir(dir.path().join("Alpha")).unwrap();
        File::create(dir.path().join("b.txt")).unwrap();
        File::create(dir.path().join("a.txt")).unwrap();
        File::create(dir.path().join("A.txt")).unwrap();

        let entries = read_entries(dir.path()).unwrap();
        assert_eq!(
            names(&entries),
            vec!["..", "Alpha", "beta", "A.txt", "a.txt", "b.txt"]
        );
        assert!(entries[1].is_directory);
        assert!(!entries[3].is_directory);
    }

    #[test]
    fn read_entries_empty_directory_has_only_parent() {
        let dir = TempDir::new().unwrap();
        let entries = read_entries(dir.path()).unwrap();
        assert_eq!(entries, vec![DirectoryEntry::parent_marker()]);
    }

    #[cfg(unix)]
    #[test]
    fn read_entries_root_omits_parent() {
        let entries = read_entries(Path::new("/")).unwrap();
        assert!(entries.iter().all(|e| !e.is_parent_marker()));
    }

    #[cfg(unix)]
    #[test]
    fn read_entries_follows_directory_symlinks() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("real")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("link")).unwrap();

        let entries = read_entries(dir.path()).unwrap();
        let link = entries.iter().find(|e| e.name == "link").unwrap();
        assert!(link.is_directory);
    }

    #[test]
    fn read_entries_missing_directory_errors() {
        let dir = TempDir::new().unwrap();
        assert!(read_entries(&dir.path().join("gone")).is_err());
    }

    #[test]
    fn has_parent_false_at_root() {
        assert!(has_parent(Path::new("/home/u")));
        #[cfg(unix)]
        assert!(!has_parent(Path::new("/")));
    }
}
