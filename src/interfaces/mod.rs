//! Interfaces between Fermidump and other software.

pub mod cli;
pub mod dirac;
pub mod input;
