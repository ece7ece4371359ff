//! Aurora language front end

pub mod lexer;
