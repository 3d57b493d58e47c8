use clap::{arg, builder::PossibleValuesParser, command, value_parser, ArgAction, ArgMatches, Command};

use crate::{aux::global_settings::OverflowPolicy, core::operators::Snippet};

pub(crate) fn build_command() -> Command {
    command!() // requires `cargo` feature
        .propagate_version(true)
        .subcommand_required(true)
        .arg(
            arg!(
                -v --verbose "log debug messages to stderr"
            )
            .global(true)
            .action(ArgAction::SetTrue),
        )
        .arg(
            arg!(
                -q --quiet "hide progress bars"
            )
            .global(true)
            .action(ArgAction::SetTrue),
        )
        .arg(
            arg!(
                -s --separator <separator> "cell separator for printed matrices, default is a tab"
            )
            .global(true)
            .required(false)
            .value_parser(value_parser!(String))
            .default_value("\t"),
        )
        .subcommand(
            Command::new("sort")
                .about("bubble sort a sequence of integers")
                .arg(
                    arg!(<values> "integers separated by commas or spaces")
                        .value_parser(value_parser!(String))
                        .allow_hyphen_values(true),
                ),
        )
        .subcommand(
            Command::new("flatten")
                .about("print a matrix in row-major and column-major order")
                .arg(
                    arg!(<matrix> "rows separated by ';', cells by ',' or spaces; @path reads a file")
                        .value_parser(value_parser!(String))
                        .allow_hyphen_values(true),
                ),
        )
        .subcommand(
            Command::new("matmul")
                .about("multiply two integer matrices")
                .arg(
                    arg!(<a> "left operand")
                        .value_parser(value_parser!(String))
                        .allow_hyphen_values(true),
                )
                .arg(
                    arg!(<b> "right operand")
                        .value_parser(value_parser!(String))
                        .allow_hyphen_values(true),
                )
                .arg(
                    arg!(
                        -o --overflow <overflow> "wrap: 32-bit wraparound, check: fail on overflow"
                    )
                    .required(false)
                    .value_parser(["wrap", "check"])
                    .default_value("wrap"),
                ),
        )
        .subcommand(
            Command::new("calc")
                .about("add, subtract, multiply and divide two numbers; prompts when omitted")
                .arg(arg!([a] "first number").value_parser(value_parser!(f64)).allow_negative_numbers(true))
                .arg(arg!([b] "second number").value_parser(value_parser!(f64)).allow_negative_numbers(true)),
        )
        .subcommand(
            Command::new("loops")
                .about("loop demos, an echo loop on stdin and a factorial")
                .arg(
                    arg!(
                        -f --factorial <factorial> "compute n! instead of prompting for n"
                    )
                    .required(false)
                    .allow_negative_numbers(true)
                    .value_parser(value_parser!(i32)),
                )
                .arg(
                    arg!(
                        --no_echo "skip the interactive echo loop"
                    )
                    .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("explain")
                .about("predict-the-output walkthroughs")
                .arg(
                    arg!([snippet] "walkthrough to print, all of them when omitted")
                        .value_parser(PossibleValuesParser::new(Snippet::NAMES)),
                ),
        )
        .subcommand(
            Command::new("wrap")
                .about("count increments until a signed counter wraps around")
                .arg(
                    arg!(
                        -b --bits <bits> "counter width, default is 32"
                    )
                    .required(false)
                    .value_parser(["8", "16", "32"])
                    .default_value("32"),
                ),
        )
        .subcommand(Command::new("demo").about("sort, flatten and multiply the built-in sample data"))
}

pub(crate) fn parse_args() -> ArgMatches {
    build_command().get_matches()
}

#[derive(Debug, PartialEq)]
pub enum Task {
    Sort { values: String },
    Flatten { matrix: String },
    Matmul { a: String, b: String },
    Calc { a: Option<f64>, b: Option<f64> },
    Loops { factorial: Option<i32>, echo: bool },
    Explain { snippet: Option<Snippet> },
    Wrap { bits: u32 },
    Demo,
}

#[derive(Debug)]
pub struct RunConfig {
    pub(crate) verbose: bool,
    pub(crate) quiet: bool,
    pub(crate) separator: String,
    pub(crate) overflow: OverflowPolicy,
    pub(crate) task: Task,
}

fn take_string(args: &mut ArgMatches, id: &str) -> String {
    args.remove_one::<String>(id).unwrap_or_default()
}

impl RunConfig {
    fn from_args(mut args: ArgMatches) -> RunConfig {
        let verbose = args.get_flag("verbose");
        let quiet = args.get_flag("quiet");
        let separator = take_string(&mut args, "separator");
        let mut overflow = OverflowPolicy::Wrap;

        let task = match args.remove_subcommand() {
            Some((name, mut sub)) => match name.as_str() {
                "sort" => Task::Sort {
                    values: take_string(&mut sub, "values"),
                },
                "flatten" => Task::Flatten {
                    matrix: take_string(&mut sub, "matrix"),
                },
                "matmul" => {
                    if take_string(&mut sub, "overflow") == "check" {
                        overflow = OverflowPolicy::Check;
                    }
                    Task::Matmul {
                        a: take_string(&mut sub, "a"),
                        b: take_string(&mut sub, "b"),
                    }
                }
                "calc" => Task::Calc {
                    a: sub.remove_one::<f64>("a"),
                    b: sub.remove_one::<f64>("b"),
                },
                "loops" => Task::Loops {
                    factorial: sub.remove_one::<i32>("factorial"),
                    echo: !sub.get_flag("no_echo"),
                },
                "explain" => Task::Explain {
                    snippet: sub
                        .remove_one::<String>("snippet")
                        .and_then(|s| s.parse::<Snippet>().ok()),
                },
                "wrap" => Task::Wrap {
                    bits: take_string(&mut sub, "bits").parse().unwrap_or(32),
                },
                _ => Task::Demo,
            },
            None => Task::Demo,
        };

        Self {
            verbose,
            quiet,
            separator,
            overflow,
            task,
        }
    }
}

pub fn set_configs() -> RunConfig {
    RunConfig::from_args(parse_args())
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(argv: &[&str]) -> RunConfig {
        RunConfig::from_args(build_command().try_get_matches_from(argv).unwrap())
    }

    #[test]
    fn command_is_consistent() {
        build_command().debug_assert();
    }

    #[test]
    fn sort_and_globals() {
        let cfg = parse(&["labkit", "-v", "sort", "3,1,2"]);
        assert!(cfg.verbose);
        assert!(!cfg.quiet);
        assert_eq!(cfg.separator, "\t");
        assert_eq!(cfg.task, Task::Sort { values: "3,1,2".into() });
    }

    #[test]
    fn matmul_overflow_policy() {
        let cfg = parse(&["labkit", "matmul", "1 2", "3; 4", "--overflow", "check", "-s", " "]);
        assert_eq!(cfg.overflow, OverflowPolicy::Check);
        assert_eq!(cfg.separator, " ");
        assert_eq!(cfg.task, Task::Matmul { a: "1 2".into(), b: "3; 4".into() });

        assert_eq!(parse(&["labkit", "matmul", "1", "1"]).overflow, OverflowPolicy::Wrap);
    }

    #[test]
    fn negative_leading_values() {
        assert_eq!(parse(&["labkit", "sort", "-5 3 1"]).task, Task::Sort { values: "-5 3 1".into() });
        assert_eq!(parse(&["labkit", "flatten", "-1,2;3,4"]).task, Task::Flatten { matrix: "-1,2;3,4".into() });

        let cfg = parse(&["labkit", "matmul", "-1 2; 3 4", "-3; 1", "--overflow", "check"]);
        assert_eq!(cfg.task, Task::Matmul { a: "-1 2; 3 4".into(), b: "-3; 1".into() });
        assert_eq!(cfg.overflow, OverflowPolicy::Check);
    }

    #[test]
    fn optional_operands() {
        assert_eq!(parse(&["labkit", "calc", "-3", "2.5"]).task, Task::Calc { a: Some(-3.0), b: Some(2.5) });
        assert_eq!(parse(&["labkit", "calc"]).task, Task::Calc { a: None, b: None });
        assert_eq!(
            parse(&["labkit", "loops", "--factorial", "5", "--no_echo"]).task,
            Task::Loops { factorial: Some(5), echo: false }
        );
    }

    #[test]
    fn explain_and_wrap() {
        assert_eq!(
            parse(&["labkit", "explain", "list-aliasing"]).task,
            Task::Explain { snippet: Some(Snippet::ListAliasing) }
        );
        assert_eq!(parse(&["labkit", "explain"]).task, Task::Explain { snippet: None });
        assert_eq!(
            parse(&["labkit", "explain", "non-static-entry-point"]).task,
            Task::Explain { snippet: Some(Snippet::NonStaticEntryPoint) }
        );
        assert_eq!(parse(&["labkit", "wrap", "--bits", "16"]).task, Task::Wrap { bits: 16 });
        assert!(build_command().try_get_matches_from(["labkit", "wrap", "--bits", "12"]).is_err());
        assert!(build_command().try_get_matches_from(["labkit", "explain", "nope"]).is_err());
    }

    #[test]
    fn subcommand_required() {
        assert!(build_command().try_get_matches_from(["labkit"]).is_err());
    }
}
