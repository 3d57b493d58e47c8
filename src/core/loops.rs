use std::io::{self, BufRead, Write};

use crate::aux::he::make_custom_error;

make_custom_error!(NegativeFactorial { n: i32 }, "factorial is not defined for negative numbers ({})", n);
make_custom_error!(
    FactorialOverflow { n: i32 },
    "{}! does not fit in a 64-bit integer, try n <= 20", n
);

#[derive(Clone, PartialEq, Debug)]
pub enum FactorialError {
    Negative(NegativeFactorial),
    Overflow(FactorialOverflow),
}

impl std::fmt::Display for FactorialError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FactorialError::Negative(e) => std::fmt::Display::fmt(e, f),
            FactorialError::Overflow(e) => std::fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for FactorialError {}

pub const FOR_EACH_NUMBERS: [i32; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

/// `1..=n`
pub fn count_to(n: i32) -> Vec<i32> {
    (1..=n).collect()
}

pub fn for_each_demo() -> Vec<i32> {
    let mut seen = Vec::with_capacity(FOR_EACH_NUMBERS.len());
    for num in FOR_EACH_NUMBERS {
        seen.push(num);
    }
    seen
}

pub fn factorial(n: i32) -> Result<i64, FactorialError> {
    if n < 0 {
        return Err(FactorialError::Negative(NegativeFactorial::new(n)));
    }

    (2..=n as i64).try_fold(1_i64, |acc, i| {
        acc.checked_mul(i)
            .ok_or(FactorialError::Overflow(FactorialOverflow::new(n)))
    })
}

/// Echoes trimmed lines until `exit` (any case) or end of input.
///
/// Returns how many non-empty lines were echoed.
pub fn echo_loop<R: BufRead, W: Write>(mut input: R, mut out: W) -> io::Result<usize> {
    let mut echoed = 0;
    let mut line = String::new();

    writeln!(out, "Enter text (type 'exit' to quit):")?;
    loop {
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out, "(No input detected - exiting loop.)")?;
            break;
        }

        let text = line.trim();
        if text.eq_ignore_ascii_case("exit") {
            break;
        }

        if text.is_empty() {
            writeln!(out, "(Empty input - type text or 'exit' to quit.)")?;
        } else {
            writeln!(out, "You entered: {}", text)?;
            echoed += 1;
        }
    }

    writeln!(out, "Exiting do-while loop...")?;
    Ok(echoed)
}

/// Asks until the answer parses and is at least `min`. End of input gives 0.
pub fn prompt_for_int<R: BufRead, W: Write>(mut input: R, mut out: W, prompt: &str, min: i32) -> io::Result<i32> {
    let mut line = String::new();

    loop {
        write!(out, "{}", prompt)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out, "(No input detected - defaulting to 0.)")?;
            return Ok(0);
        }

        match line.trim().parse::<i32>() {
            Ok(v) if v < min => writeln!(out, "Please enter an integer >= {}.", min)?,
            Ok(v) => return Ok(v),
            Err(_) => writeln!(out, "Invalid number. Please enter a valid integer.")?,
        }
    }
}

/// Same as [`prompt_for_int`] for a float, without a lower bound.
pub fn prompt_for_f64<R: BufRead, W: Write>(mut input: R, mut out: W, prompt: &str) -> io::Result<f64> {
    let mut line = String::new();

    loop {
        write!(out, "{}", prompt)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out, "(No input detected - defaulting to 0.)")?;
            return Ok(0.0);
        }

        match line.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => writeln!(out, "Invalid number. Please enter a valid number.")?,
        }
    }
}
