use std::fmt::Display;

use crate::{aux::ndarray::Array2D, utils::join_display};

/// One line, elements separated by a single space.
pub fn format_sequence<T: Display>(arr: &[T]) -> String {
    join_display(arr, " ")
}

/// One line per row, cells separated by `sep`.
pub fn format_matrix<T: Display>(arr: &Array2D<T>, sep: &str) -> String {
    let mut s = String::new();
    for row in arr.rows() {
        s.push_str(&join_display(row, sep));
        s.push('\n');
    }
    s
}

pub fn section(title: &str) -> String {
    format!("===== {} =====", title)
}
