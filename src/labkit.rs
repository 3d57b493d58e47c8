use std::{
    io::{self, BufRead, Write},
    time::Instant,
};

use anyhow::{anyhow, bail, Context};
use log::LevelFilter;

use crate::{
    argparse::{RunConfig, Task},
    aux::{
        global_settings::{global_settings, global_settings_w, OverflowPolicy},
        ndarray::Array2D,
        pbar::{prepare_pbar, PBSummary},
    },
    core::{
        array_ops::{bubble_sort, checked_multiply, multiply, to_column_major, to_row_major},
        calculator::Calculator,
        loops::{count_to, echo_loop, factorial, for_each_demo, prompt_for_f64, prompt_for_int},
        operators::{steps_until_wrap, Snippet, WrappingCounter},
        parse::{matrix_arg, parse_sequence},
        report::{format_matrix, format_sequence, section},
    },
    utils::logging::init_logger,
};

pub const LABKIT_VER: &str = env!("CARGO_PKG_VERSION");

pub fn labkit(config: RunConfig) -> anyhow::Result<()> {
    let level = if config.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    init_logger(level)?;

    log::debug!(">> Set global configs...");
    prepare_run(&config);

    let timer = Instant::now();
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_task(config.task, stdin.lock(), stdout.lock())?;

    log::debug!("# labkit v{}, time used: {} seconds", LABKIT_VER, timer.elapsed().as_secs_f32());
    Ok(())
}

fn prepare_run(config: &RunConfig) {
    let mut settings = global_settings_w();
    settings.set_cell_separator(&config.separator);
    settings.set_overflow(config.overflow);
    settings.set_show_progress(!config.quiet);

    log::debug!("global_settings set.");
}

pub(crate) fn run_task<R: BufRead, W: Write>(task: Task, mut input: R, mut out: W) -> anyhow::Result<()> {
    log::debug!("running {:?}", task);

    match task {
        Task::Sort { values } => {
            let mut arr = parse_sequence(&values).context("cannot read the sequence")?;
            sort_report(&mut arr, &mut out)?;
        }
        Task::Flatten { matrix } => {
            let m = matrix_arg(&matrix).map_err(|e| anyhow!(e)).context("cannot read the matrix")?;
            flatten_report(&m, &mut out)?;
        }
        Task::Matmul { a, b } => {
            let a = matrix_arg(&a).map_err(|e| anyhow!(e)).context("cannot read matrix A")?;
            let b = matrix_arg(&b).map_err(|e| anyhow!(e)).context("cannot read matrix B")?;
            matmul_report(&a, &b, &mut out)?;
        }
        Task::Calc { a, b } => {
            let a = match a {
                Some(v) => v,
                None => prompt_for_f64(&mut input, &mut out, "Enter the first number: ")?,
            };
            let b = match b {
                Some(v) => v,
                None => prompt_for_f64(&mut input, &mut out, "Enter the second number: ")?,
            };
            write!(out, "{}", Calculator::new(a, b).report())?;
        }
        Task::Loops { factorial: n, echo } => {
            writeln!(out, "{}", section("For Loop (1 to 10)"))?;
            writeln!(out, "{}", format_sequence(&count_to(10)))?;
            writeln!(out, "{}", section("Foreach Loop (1 to 10)"))?;
            writeln!(out, "{}", format_sequence(&for_each_demo()))?;

            if echo {
                writeln!(out, "{}", section("Do-While Loop"))?;
                let echoed = echo_loop(&mut input, &mut out)?;
                log::debug!("echoed {} lines", echoed);
            }

            writeln!(out, "{}", section("Factorial Calculation"))?;
            let n = match n {
                Some(n) => n,
                None => prompt_for_int(
                    &mut input,
                    &mut out,
                    "Enter a non-negative integer (recommended 0..20) to calculate its factorial: ",
                    0,
                )?,
            };
            let f = factorial(n)?;
            writeln!(out, "Factorial of {} = {}", n, f)?;
        }
        Task::Explain { snippet } => match snippet {
            Some(snip) => explain_report(snip, &mut out)?,
            None => {
                for snip in Snippet::all() {
                    explain_report(snip, &mut out)?;
                }
            }
        },
        Task::Wrap { bits } => match bits {
            8 => wrap_report::<i8, _>(&mut out)?,
            16 => wrap_report::<i16, _>(&mut out)?,
            32 => wrap_report::<i32, _>(&mut out)?,
            _ => bail!("unsupported counter width: {} bits", bits),
        },
        Task::Demo => demo(&mut out)?,
    }

    out.flush()?;
    Ok(())
}

fn sort_report<W: Write>(arr: &mut [i32], out: &mut W) -> io::Result<()> {
    writeln!(out, "Array before sorting:")?;
    writeln!(out, "{}", format_sequence(arr))?;

    let swaps = bubble_sort(arr);
    log::debug!("bubble sort took {} swaps", swaps);

    writeln!(out, "Array after sorting:")?;
    writeln!(out, "{}", format_sequence(arr))
}

fn flatten_report<W: Write>(m: &Array2D<i32>, out: &mut W) -> io::Result<()> {
    let sep = global_settings().cell_separator.clone();

    writeln!(out, "Original 2D Array:")?;
    write!(out, "{}", format_matrix(m, &sep))?;
    writeln!(out, "(i) Row Major Order:")?;
    writeln!(out, "{}", format_sequence(&to_row_major(m)))?;
    writeln!(out, "(ii) Column Major Order:")?;
    writeln!(out, "{}", format_sequence(&to_column_major(m)))
}

fn matmul_report<W: Write>(a: &Array2D<i32>, b: &Array2D<i32>, out: &mut W) -> anyhow::Result<()> {
    let (sep, overflow) = {
        let settings = global_settings();
        (settings.cell_separator.clone(), settings.overflow)
    };

    writeln!(out, "Matrix A:")?;
    write!(out, "{}", format_matrix(a, &sep))?;
    writeln!(out, "Matrix B:")?;
    write!(out, "{}", format_matrix(b, &sep))?;

    let c = match overflow {
        OverflowPolicy::Wrap => multiply(a, b)?,
        OverflowPolicy::Check => checked_multiply(a, b)?,
    };

    writeln!(out, "Matrix C (A x B):")?;
    write!(out, "{}", format_matrix(&c, &sep))?;
    Ok(())
}

fn explain_report<W: Write>(snip: Snippet, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", section(snip.name()))?;
    writeln!(out, "{}", snip.explanation())?;
    writeln!(out, "Output:")?;
    for line in snip.output() {
        writeln!(out, "{}", line)?;
    }
    writeln!(out)
}

fn wrap_report<T: WrappingCounter, W: Write>(out: &mut W) -> io::Result<()> {
    let expected = 1_u64 << (T::BITS - 1);
    let pb = prepare_pbar(expected);
    pb.set_message(format!("i{} counter", T::BITS));

    let (steps, wrapped) = steps_until_wrap::<T>(&pb);
    pb.finish_with_summary();

    writeln!(out, "i{} counter wrapped from {} to {} after {} increments", T::BITS, T::MAX, wrapped, steps)?;
    writeln!(out, "loop guard `i <= MAX` still holds after the wrap: {}", wrapped <= T::MAX)
}

/// The sample data sorted, flattened and multiplied.
pub(crate) fn demo<W: Write>(out: &mut W) -> anyhow::Result<()> {
    writeln!(out, "{}", section("1. Bubble Sort"))?;
    let mut arr = [64, 34, 25, 12, 22, 11, 90];
    sort_report(&mut arr, out)?;
    writeln!(out)?;

    writeln!(out, "{}", section("2. 2D to 1D Array Conversion"))?;
    let arr2d = Array2D::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]])?;
    flatten_report(&arr2d, out)?;
    writeln!(out)?;

    writeln!(out, "{}", section("3. Matrix Multiplication"))?;
    let a = Array2D::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]])?;
    let b = Array2D::from_rows(vec![vec![7, 8], vec![9, 10], vec![11, 12]])?;
    matmul_report(&a, &b, out)
}
