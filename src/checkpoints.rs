// Checkpoint table plus the ways it gets populated: compiled-in seeds,
// JSON hash files and DNS TXT records.

pub mod defaults;
pub mod file;
pub mod loader;
pub mod store;

pub use defaults::*;
pub use file::*;
pub use store::*;
