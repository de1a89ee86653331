//! Support code for the `rewiki` binary.

pub mod inspect;
