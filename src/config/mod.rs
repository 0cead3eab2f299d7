//! Runner configuration for shellout.
//!
//! [`ShellConfig`] is an explicit value handed to [`Runner::new`](crate::Runner::new);
//! nothing in the library reads process-wide settings. It can be built in
//! code or loaded from YAML, where unknown fields are ignored and missing
//! fields take their defaults.

mod model;
mod operations;


// Re-export public API
pub use model::ShellConfig;
pub use model::{DEFAULT_READ_CHUNK_SIZE, DEFAULT_SHELL, DEFAULT_SHELL_FLAG};
