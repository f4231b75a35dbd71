//! 20-questions style guessing game engine
//!
//! The computer narrows down a user-chosen object by walking a binary
//! decision tree of yes/no questions. A correct guess wins; a wrong guess
//! teaches the tree a new distinguishing question. Trees persist in a simple
//! line-oriented text format.

pub mod cli;
pub mod game;
pub mod output;
pub mod project;
pub mod tree;
