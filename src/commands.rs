//! Auxiliary subcommands of the `jl` binary.
pub mod generate;
