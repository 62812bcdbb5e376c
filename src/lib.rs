//! Maps a CNF solver's model back onto the ANF problem it was derived
//! from, using the solution map written by the ANF-to-CNF conversion.

pub mod emit;
pub mod error;
pub mod map;
pub mod resolve;
pub mod solution;
