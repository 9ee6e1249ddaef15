//! Various shared functions that `tilerc` uses.
pub mod child_process;
pub mod modmask_lookup;
