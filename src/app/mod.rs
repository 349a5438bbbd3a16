// Application layer: wires the CLI commands to the library.

pub mod commands;
