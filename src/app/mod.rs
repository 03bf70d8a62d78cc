// Application layer: presentation over the core operations.

pub mod shell;
