//! Header synthesis for FMI model descriptions.
//!
//! [`synthesize`] turns extracted metadata and variables into the text of a
//! header declaring a typed wrapper class; [`generate`] runs the whole
//! pipeline from an input file to a written `.h` file.

pub mod builder;
pub mod generate;

pub use builder::{HeaderBuilder, synthesize};
pub use generate::{Generation, build_header, generate, write_header};
