//! Combinators for composing primitive checkers.

pub mod and;

pub use and::And;
