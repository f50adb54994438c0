//! Piecewalk engine library.
//!
//! Declarative movement rules for chess-like pieces and the walker that turns
//! them into move/capture highlights on an occupied grid. Exposes the board,
//! move generation, catalog, setup, session, and protocol modules for use by
//! integration tests and the binary entry point.

pub mod board;
pub mod catalog;
pub mod controller;
pub mod movegen;
pub mod protocol;
pub mod session;
pub mod setup;
