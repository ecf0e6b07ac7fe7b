//! # datakit
//!
//! Three small, independent data helpers:
//!
//! - [`compute_hash`]: SHA-256 digest of a string as lowercase hex.
//! - [`flatten_dict`]: collapse nested JSON objects into dot-notation keys.
//! - [`chunk_list`]: split a slice into fixed-size chunks.
//!
//! Each helper is a pure function of its arguments and is safe to call from
//! any thread. The `dk` binary exposes them on the command line over JSON.
//!
//! ```
//! use serde_json::json;
//!
//! let digest = datakit::compute_hash("");
//! assert_eq!(digest.len(), 64);
//!
//! let nested = json!({"a": 1, "b": {"c": 2}});
//! let flat = datakit::flatten_dict(nested.as_object().unwrap(), "");
//! assert_eq!(flat["b.c"], json!(2));
//!
//! let chunks = datakit::chunk_list(&[1, 2, 3, 4, 5], 2).unwrap();
//! assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`hash`] | SHA-256 hashing |
//! | [`flatten`] | Nested map flattening |
//! | [`chunk`] | Fixed-size list chunking |
//! | [`config`] | TOML configuration for the `dk` binary |
//! | [`cmd`] | `dk` command handlers |

pub mod chunk;
pub mod cmd;
pub mod config;
pub mod error;
pub mod flatten;
pub mod hash;

pub use chunk::{chunk_list, chunk_slices};
pub use error::{Error, Result};
pub use flatten::{flatten_dict, flatten_value, flatten_with_separator};
pub use hash::{compute_hash, compute_hash_bytes};
