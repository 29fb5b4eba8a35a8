//! Helper items to assist the working of Fermidump.

pub mod atom;
pub mod molecule;
