use std::{
    error,
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

use crate::{
    aux::{he::make_custom_error, ndarray::Array2D},
    utils::check_file_valid,
};

pub type Error = Box<dyn error::Error + Send + Sync>;

make_custom_error!(ParseError { line: usize, token: String }, "line {}: '{}' is not a 32-bit integer", line, token);
make_custom_error!(
    InputTooLarge { path: String, limit: u64 },
    "{} is larger than the {} byte limit for matrix files", path, limit
);

const MAX_BYTES: u64 = 1 << 20;

fn parse_cells(line_no: usize, line: &str) -> Result<Vec<i32>, ParseError> {
    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|tok| !tok.is_empty())
        .map(|tok| tok.parse::<i32>().map_err(|_| ParseError::new(line_no, tok.to_string())))
        .collect()
}

/// Integers separated by commas and/or whitespace.
pub fn parse_sequence(s: &str) -> Result<Vec<i32>, ParseError> {
    parse_cells(1, s)
}

/// Rows separated by `;` or newlines, cells by commas and/or whitespace.
///
/// Blank rows and rows starting with `#` are skipped.
pub fn parse_matrix(s: &str) -> Result<Array2D<i32>, Error> {
    let mut rows = Vec::new();

    for (line_no, line) in s.split(|c: char| c == ';' || c == '\n').enumerate() {
        let line = line.trim();
        // blank or comment line
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        rows.push(parse_cells(line_no + 1, line)?);
    }

    Ok(Array2D::from_rows(rows)?)
}

pub fn read_matrix_file(filename: impl AsRef<Path>) -> Result<Array2D<i32>, Error> {
    let filename = filename.as_ref();
    check_file_valid(filename)?;

    let mut content = String::new();
    let mut file = BufReader::new(File::open(filename)?).take(MAX_BYTES);
    let mut line = String::new();
    while file.read_line(&mut line)? > 0 {
        content.push_str(&line);
        if !line.ends_with('\n') {
            content.push('\n');
        }
        line.clear();
    }

    // a partial read would still parse as a smaller matrix
    let mut rest = file.into_inner();
    if !rest.fill_buf()?.is_empty() {
        return Err(InputTooLarge::new(filename.display().to_string(), MAX_BYTES).into());
    }

    log::debug!("read {} bytes from {}", content.len(), filename.display());
    parse_matrix(&content)
}

/// `@path` reads a file, anything else is parsed inline.
pub fn matrix_arg(arg: &str) -> Result<Array2D<i32>, Error> {
    match arg.strip_prefix('@') {
        Some(path) => read_matrix_file(path),
        None => parse_matrix(arg),
    }
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use super::*;

    #[test]
    fn sequences() {
        assert_eq!(parse_sequence("64,34, 25 12\t22").unwrap(), vec![64, 34, 25, 12, 22]);
        assert_eq!(parse_sequence("").unwrap(), Vec::<i32>::new());
        assert_eq!(parse_sequence("1 x").unwrap_err(), ParseError { line: 1, token: "x".into() });
        assert!(parse_sequence("2147483648").is_err());
    }

    #[test]
    fn inline_matrix() {
        let m = parse_matrix("1 2 3; 4 5 6").unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.as_slice(), &[1, 2, 3, 4, 5, 6]);

        let m = parse_matrix("1,2\n3,4\n").unwrap();
        assert_eq!(m.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn ragged_matrix_is_an_error() {
        let e = parse_matrix("1 2; 3").unwrap_err();
        assert_eq!(e.to_string(), "row 1 has 1 elements, expected 2 like the first row");
    }

    #[test]
    fn bad_token_reports_line() {
        let e = parse_matrix("1 2\n3 four").unwrap_err();
        assert_eq!(e.to_string(), "line 2: 'four' is not a 32-bit integer");
    }

    #[test]
    fn from_file_skips_comments() {
        let path = std::env::temp_dir().join(format!("labkit-parse-{}.txt", std::process::id()));
        {
            let mut f = File::create(&path).unwrap();
            write!(f, "# matrix B\n7 8\n\n9 10\n11 12").unwrap();
        }

        let m = matrix_arg(&format!("@{}", path.display())).unwrap();
        assert_eq!(m.shape(), (3, 2));
        assert_eq!(m.as_slice(), &[7, 8, 9, 10, 11, 12]);

        std::fs::remove_file(&path).unwrap();
        assert!(matrix_arg(&format!("@{}", path.display())).is_err());
    }

    #[test]
    fn oversized_file_is_rejected() {
        let path = std::env::temp_dir().join(format!("labkit-parse-big-{}.txt", std::process::id()));
        {
            let mut f = std::io::BufWriter::new(File::create(&path).unwrap());
            for _ in 0..70_000 {
                writeln!(f, "1000000 1000000").unwrap();
            }
        }

        let e = read_matrix_file(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        let e = e.downcast_ref::<InputTooLarge>().unwrap();
        assert_eq!(e.limit, MAX_BYTES);
    }

    #[test]
    fn file_at_the_limit_is_read_whole() {
        let path = std::env::temp_dir().join(format!("labkit-parse-edge-{}.txt", std::process::id()));
        let rows = MAX_BYTES as usize / 8;
        {
            let mut f = std::io::BufWriter::new(File::create(&path).unwrap());
            for _ in 0..rows {
                writeln!(f, "123 456").unwrap();
            }
        }

        let m = read_matrix_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(m.shape(), (rows, 2));
    }
}
