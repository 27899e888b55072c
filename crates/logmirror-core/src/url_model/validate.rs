//! Acceptance check for remote filenames used verbatim on disk.

const NAME_MAX: usize = 255;

/// True if `name` can be used as a single Linux path component unchanged:
/// non-empty, not `.` or `..`, no `/` or NUL, at most 255 bytes.
pub fn is_usable_filename(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\0'])
        && name.len() <= NAME_MAX
}
