pub(crate) mod logging;

use std::{fmt::Display, fmt::Write, path::Path};

use crate::aux::he::make_custom_error;

make_custom_error!(InvalidFile { path: String, reason: &'static str }, "'{}' {}", path, reason);

#[inline]
pub(crate) fn check_file_valid(s: impl AsRef<Path>) -> Result<(), InvalidFile> {
    let s = s.as_ref();

    if s.is_dir() {
        return Err(InvalidFile::new(s.display().to_string(), "is a folder, not a file"));
    }

    if !s.is_file() {
        return Err(InvalidFile::new(s.display().to_string(), "doesn't exist"));
    }

    Ok(())
}

/// Joins displayable items with `sep`, no trailing separator.
pub(crate) fn join_display<T: Display>(items: impl IntoIterator<Item = T>, sep: &str) -> String {
    let mut s = String::new();
    for (i, x) in items.into_iter().enumerate() {
        if i > 0 {
            s.push_str(sep);
        }
        let _ = write!(&mut s, "{}", x);
    }
    s
}
