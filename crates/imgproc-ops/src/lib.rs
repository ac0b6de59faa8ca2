//! # imgproc-ops
//!
//! Named image registry and the per-pixel operation catalog.
//!
//! # Overview
//!
//! - [`Registry`] - name to [`Image`](imgproc_core::Image) store with
//!   load/save through `imgproc-io`
//! - [`Operation`] - closed catalog of channel extraction, greyscale,
//!   brighten and flip operations
//! - [`render`] / [`apply`] - evaluate an operation into a fresh image
//!
//! # Quick Start
//!
//! ```rust
//! use imgproc_core::Image;
//! use imgproc_ops::{Operation, Registry};
//!
//! let mut registry = Registry::new();
//! registry.put("koala", Image::filled(4, 4, [0.2, 0.4, 0.6], 255).unwrap());
//!
//! registry.luma_component("koala", "koala-luma").unwrap();
//! registry.apply(&Operation::Brighten { delta: 25 }, "koala", "koala-bright").unwrap();
//!
//! assert_eq!(registry.names(), vec!["koala", "koala-bright", "koala-luma"]);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod engine;
pub mod op;
pub mod registry;

pub use engine::{apply, render};
pub use error::{OpsError, OpsResult};
pub use op::Operation;
pub use registry::Registry;
