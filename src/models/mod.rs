mod inventory;

pub use inventory::*;
