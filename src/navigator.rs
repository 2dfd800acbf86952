//! Directory navigation state: the current listing, the cursor, and the
//! scroll window the presenter draws from.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::fs::listing::{self, DirectoryEntry};

/// Listing and cursor state for one dialog invocation.
///
/// While `entries` is non-empty the selection always stays inside the
/// visible window: `scroll_offset <= selected_index < scroll_offset + visible_count`.
#[derive(Debug)]
pub struct Navigator {
    current_path: PathBuf,
    entries: Vec<DirectoryEntry>,
    selected_index: usize,
    scroll_offset: usize,
    visible_count: usize,
}

impl Navigator {
    /// Create a navigator listing the process's working directory.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Ok(Self::at(cwd))
    }

    /// Create a navigator listing `path`.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        let mut navigator = Self {
            current_path: PathBuf::new(),
            entries: Vec::new(),
            selected_index: 0,
            scroll_offset: 0,
            visible_count: 1,
        };
        navigator.list_directory(path);
        navigator
    }

    /// Build a navigator from a prepared listing without touching the filesystem.
    #[cfg(test)]
    pub(crate) fn with_entries(path: impl Into<PathBuf>, entries: Vec<DirectoryEntry>) -> Self {
        Self {
            current_path: path.into(),
            entries,
            selected_index: 0,
            scroll_offset: 0,
            visible_count: 1,
        }
    }

    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn selected_entry(&self) -> Option<&DirectoryEntry> {
        self.entries.get(self.selected_index)
    }

    /// Full path of the selected entry (`current_path` joined with its name).
    pub fn selected_path(&self) -> Option<PathBuf> {
        self.selected_entry()
            .map(|entry| self.current_path.join(&entry.name))
    }

    /// Replace the listing with the contents of `path` and reset the cursor.
    ///
    /// A relative `path` is resolved against the working directory first so
    /// that going up always reaches a real parent. A read failure is logged
    /// and leaves an empty listing at `path`; the dialog stays usable (the
    /// user can still go up).
    pub fn list_directory(&mut self, path: impl Into<PathBuf>) {
        self.current_path = absolutize(path.into());
        self.entries.clear();
        self.selected_index = 0;
        self.scroll_offset = 0;

        match listing::read_entries(&self.current_path) {
            Ok(entries) => {
                debug!(path = %self.current_path.display(), count = entries.len(), "listed directory");
                self.entries = entries;
            }
            Err(e) => {
                warn!(path = %self.current_path.display(), error = %e, "filesystem error while listing directory");
            }
        }
    }

    /// Move the cursor down one entry, stopping at the last one.
    pub fn select_next(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1).min(self.entries.len() - 1);
        self.update_scroll();
    }

    /// Move the cursor up one entry, stopping at the first one.
    pub fn select_previous(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.selected_index = self.selected_index.saturating_sub(1);
        self.update_scroll();
    }

    /// Open the selected entry: `..` goes up, a directory is entered.
    ///
    /// A file is left alone; deciding that a file ends the dialog is the
    /// controller's job.
    pub fn activate_selection(&mut self) {
        let Some(entry) = self.selected_entry() else {
            return;
        };

        if entry.is_parent_marker() {
            self.go_up();
        } else if entry.is_directory {
            let target = self.current_path.join(&entry.name);
            self.list_directory(target);
        } else {
            info!(path = %self.current_path.join(&entry.name).display(), "file activated, nothing to open");
        }
    }

    /// List the parent directory. No-op at a filesystem root.
    pub fn go_up(&mut self) {
        match self.current_path.parent() {
            Some(parent) => {
                let parent = parent.to_path_buf();
                self.list_directory(parent);
            }
            None => debug!(path = %self.current_path.display(), "already at the root directory"),
        }
    }

    /// Set how many rows the presenter can show and pull the window back
    /// around the selection.
    pub fn set_visible_count(&mut self, count: usize) {
        self.visible_count = count;
        self.update_scroll();
    }

    /// Shift the window the minimum amount that keeps the selection visible.
    fn update_scroll(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let visible = self.visible_count.max(1);
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + visible {
            self.scroll_offset = self.selected_index + 1 - visible;
        }
    }
}

/// Resolve a relative path against the working directory.
///
/// Existing directories are canonicalized; anything else is joined lexically.
/// If even the working directory is unavailable the path is kept as given.
fn absolutize(path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        return path;
    }
    match path.canonicalize().or_else(|_| std::path::absolute(&path)) {
        Ok(resolved) => resolved,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not resolve relative path");
            path
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    fn setup_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("alpha")).unwrap();
        fs::create_dir(dir.path().join("beta")).unwrap();
        File::create(dir.path().join("alpha").join("inner.txt")).unwrap();
        File::create(dir.path().join("file_a.txt")).unwrap();
        File::create(dir.path().join("file_b.rs")).unwrap();
        dir
    }

    fn files(count: usize) -> Vec<DirectoryEntry> {
        (0..count)
            .map(|i| DirectoryEntry::file(format!("file_{i:02}")))
            .collect()
    }

    fn assert_window(nav: &Navigator) {
        if nav.entries().is_empty() {
            return;
        }
        assert!(nav.selected_index() < nav.entries().len());
        assert!(nav.scroll_offset() <= nav.selected_index());
        assert!(nav.selected_index() < nav.scroll_offset() + nav.visible_count());
    }

    #[test]
    fn new_lists_working_directory() {
        let nav = Navigator::new().unwrap();
        assert_eq!(nav.current_path(), std::env::current_dir().unwrap());
    }

    #[test]
    fn at_lists_sorted_entries() {
        let dir = setup_dir();
        let nav = Navigator::at(dir.path());
        let names: Vec<&str> = nav.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["..", "alpha", "beta", "file_a.txt", "file_b.rs"]);
        assert_eq!(nav.selected_index(), 0);
        assert_eq!(nav.scroll_offset(), 0);
    }

    #[test]
    fn select_next_clamps_at_end() {
        let mut nav = Navigator::with_entries("/tmp", files(3));
        nav.set_visible_count(10);
        for _ in 0..5 {
            nav.select_next();
        }
        assert_eq!(nav.selected_index(), 2);
    }

    #[test]
    fn select_previous_clamps_at_start() {
        let mut nav = Navigator::with_entries("/tmp", files(3));
        nav.select_previous();
        assert_eq!(nav.selected_index(), 0);
        nav.select_next();
        nav.select_previous();
        nav.select_previous();
        assert_eq!(nav.selected_index(), 0);
    }

    #[test]
    fn selection_on_empty_listing_is_noop() {
        let mut nav = Navigator::with_entries("/tmp", Vec::new());
        nav.select_next();
        nav.select_previous();
        nav.activate_selection();
        assert_eq!(nav.selected_index(), 0);
        assert_eq!(nav.scroll_offset(), 0);
        assert_eq!(nav.current_path(), Path::new("/tmp"));
    }

    #[test]
    fn fifty_entries_scroll_window_follows_selection() {
        let mut nav = Navigator::with_entries("/tmp", files(50));
        nav.set_visible_count(10);
        for _ in 0..45 {
            nav.select_next();
        }
        assert_eq!(nav.selected_index(), 45);
        assert_eq!(nav.scroll_offset(), 36);

        for _ in 0..4 {
            nav.select_next();
        }
        assert_eq!(nav.selected_index(), 49);
        assert_eq!(nav.scroll_offset(), 40);

        nav.select_next();
        assert_eq!(nav.selected_index(), 49);
        assert_eq!(nav.scroll_offset(), 40);
    }

    #[test]
    fn select_previous_above_window_moves_window_up() {
        let mut nav = Navigator::with_entries("/tmp", files(30));
        nav.set_visible_count(5);
        for _ in 0..20 {
            nav.select_next();
        }
        assert_eq!(nav.scroll_offset(), 16);
        for _ in 0..5 {
            nav.select_previous();
        }
        assert_eq!(nav.selected_index(), 15);
        assert_eq!(nav.scroll_offset(), 15);
    }

    #[test]
    fn window_invariant_holds_for_mixed_moves() {
        let mut nav = Navigator::with_entries("/tmp", files(23));
        nav.set_visible_count(4);
        // Deterministic walk mixing long runs in both directions.
        let pattern: [i32; 10] = [7, -3, 12, -20, 30, -1, -1, 5, -9, 2];
        for step in pattern.iter().cycle().take(40) {
            for _ in 0..step.unsigned_abs() {
                if *step > 0 {
                    nav.select_next();
                } else {
                    nav.select_previous();
                }
                assert_window(&nav);
            }
        }
    }

    #[test]
    fn relisting_resets_cursor() {
        let dir = setup_dir();
        let mut nav = Navigator::at(dir.path());
        nav.set_visible_count(2);
        nav.select_next();
        nav.select_next();
        nav.select_next();
        assert!(nav.scroll_offset() > 0);

        nav.list_directory(dir.path());
        assert_eq!(nav.selected_index(), 0);
        assert_eq!(nav.scroll_offset(), 0);
    }

    #[test]
    fn list_missing_directory_leaves_empty_listing() {
        let dir = setup_dir();
        let mut nav = Navigator::at(dir.path());
        nav.select_next();
        let missing = dir.path().join("vanished");

        nav.list_directory(&missing);
        assert!(nav.entries().is_empty());
        assert_eq!(nav.current_path(), missing);
        assert_eq!(nav.selected_index(), 0);
        assert_eq!(nav.scroll_offset(), 0);

        // Still navigable afterwards.
        nav.go_up();
        assert_eq!(nav.current_path(), dir.path());
        assert!(!nav.entries().is_empty());
    }

    #[test]
    fn relative_start_path_walks_up_to_real_parents() {
        // Created inside the working directory so it is reachable by a relative name.
        let dir = tempfile::Builder::new()
            .prefix("nav-relative")
            .tempdir_in(".")
            .unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        let name = dir.path().file_name().unwrap().to_owned();
        let relative = PathBuf::from(&name).join("sub");

        let mut nav = Navigator::at(&relative);
        assert!(nav.current_path().is_absolute());
        assert!(nav.current_path().ends_with(&relative));

        nav.go_up();
        assert!(nav.current_path().is_absolute());
        assert!(nav.current_path().ends_with(&name));
        assert!(nav.entries().iter().any(|e| e.name == "sub"));

        nav.go_up();
        assert_eq!(nav.current_path(), std::env::current_dir().unwrap().canonicalize().unwrap());
        assert!(!nav.entries().is_empty());
    }

    #[test]
    fn relative_missing_path_is_still_anchored() {
        let mut nav = Navigator::at("does-not-exist-anywhere");
        assert!(nav.entries().is_empty());
        assert!(nav.current_path().is_absolute());

        nav.go_up();
        assert!(!nav.entries().is_empty());
    }

    #[test]
    fn activate_directory_enters_it() {
        let dir = setup_dir();
        let mut nav = Navigator::at(dir.path());
        nav.select_next(); // alpha
        nav.activate_selection();
        assert_eq!(nav.current_path(), dir.path().join("alpha"));
        let names: Vec<&str> = nav.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["..", "inner.txt"]);
    }

    #[test]
    fn activate_parent_marker_goes_up() {
        let dir = setup_dir();
        let mut nav = Navigator::at(dir.path().join("alpha"));
        assert!(nav.selected_entry().unwrap().is_parent_marker());
        nav.activate_selection();
        assert_eq!(nav.current_path(), dir.path());
    }

    #[test]
    fn activate_file_changes_nothing() {
        let dir = setup_dir();
        let mut nav = Navigator::at(dir.path());
        for _ in 0..3 {
            nav.select_next();
        }
        assert_eq!(nav.selected_entry().unwrap().name, "file_a.txt");
        nav.activate_selection();
        assert_eq!(nav.current_path(), dir.path());
        assert_eq!(nav.selected_index(), 3);
    }

    #[test]
    fn selected_path_joins_current_path() {
        let mut nav = Navigator::with_entries(
            "/home/u",
            vec![DirectoryEntry::parent_marker(), DirectoryEntry::file("report.txt")],
        );
        nav.select_next();
        assert_eq!(nav.selected_path(), Some(PathBuf::from("/home/u/report.txt")));
    }

    #[cfg(unix)]
    #[test]
    fn go_up_at_root_is_noop() {
        let mut nav = Navigator::at("/");
        nav.go_up();
        assert_eq!(nav.current_path(), Path::new("/"));
        assert!(nav.entries().iter().all(|e| !e.is_parent_marker()));
    }

    #[test]
    fn set_visible_count_reclamps_window() {
        let mut nav = Navigator::with_entries("/tmp", files(20));
        nav.set_visible_count(10);
        for _ in 0..9 {
            nav.select_next();
        }
        assert_eq!(nav.scroll_offset(), 0);

        nav.set_visible_count(3);
        assert_eq!(nav.scroll_offset(), 7);
        assert_window(&nav);
    }
}
