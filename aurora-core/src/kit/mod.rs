//! Reusable building blocks, independent of the Aurora language itself

pub mod lexer;
