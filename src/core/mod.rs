pub mod array_ops;
pub mod calculator;
pub mod loops;
pub mod operators;
pub mod parse;
pub mod report;
