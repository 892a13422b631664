//! Dataset handling: the immutable topic store, built-in comparisons,
//! optional TOML loading and load-time validation.

pub mod builtin;
pub mod loader;
pub mod store;
pub mod validator;

pub use loader::{load_dataset, DatasetFile};
pub use store::DatasetStore;
