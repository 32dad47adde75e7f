//! # gni-to-cmake
//!
//! A very dumb regex based translation from GN variable declarations and
//! simple if statements to the equivalent CMake code. It only supports a few
//! constructs and assumes the input is formatted a certain way; upstream GN
//! files are auto-formatted, so this works most of the time.
//!
//! The output may need a bit of manual fixup, but it beats translating the
//! whole thing by hand. When new constructs show up in the upstream GN files,
//! hopefully a few extra regexes in [`passes`] will cover them.

pub mod header;
pub mod passes;

pub use header::provenance_header;
pub use passes::convert;
