//! Simulation tests.


/// Text trace parsing.
pub mod trace;
