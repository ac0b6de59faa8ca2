//! Named in-memory image store.
//!
//! The [`Registry`] owns every image loaded or produced during a session and
//! hands out shared references to them. Names are unique keys; storing under
//! an existing name replaces the old image.
//!
//! The registry has no internal locking. A multi-threaded front end should
//! wrap it in a `RwLock` so one writer at a time can `put` while readers
//! share `get`.
//!
//! # Example
//!
//! ```rust
//! use imgproc_core::Image;
//! use imgproc_ops::Registry;
//!
//! let mut registry = Registry::new();
//! registry.put("black", Image::filled(2, 2, [0.0; 3], 255).unwrap());
//!
//! assert_eq!(registry.get("black").unwrap().width(), 2);
//! assert!(registry.get("white").unwrap_err().is_not_found());
//! ```

use crate::{OpsError, OpsResult};
use imgproc_core::Image;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, trace};

/// Mapping from image name to owned [`Image`].
#[derive(Debug, Default, Clone)]
pub struct Registry {
    images: HashMap<String, Image>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the image stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::NotFound`] if no image has that name.
    pub fn get(&self, name: &str) -> OpsResult<&Image> {
        self.images
            .get(name)
            .ok_or_else(|| OpsError::NotFound(name.to_string()))
    }

    /// Stores `image` under `name`, returning the image it replaced.
    pub fn put(&mut self, name: impl Into<String>, image: Image) -> Option<Image> {
        let name = name.into();
        trace!(name = %name, info = %image.info(), "registry::put");
        self.images.insert(name, image)
    }

    /// Returns `true` if an image is stored under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.images.contains_key(name)
    }

    /// Number of stored images.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns `true` if nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Stored names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.images.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Iterates over `(name, image)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Image)> {
        self.images.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Reads a P3 file and stores it under `name`.
    ///
    /// The registry is untouched if reading fails.
    pub fn load<P: AsRef<Path>>(&mut self, path: P, name: &str) -> OpsResult<()> {
        let path = path.as_ref();
        let image = imgproc_io::read(path)?;
        debug!(path = %path.display(), name, info = %image.info(), "loaded image");
        self.put(name, image);
        Ok(())
    }

    /// Writes the image stored under `name` to a P3 file.
    pub fn save<P: AsRef<Path>>(&self, path: P, name: &str) -> OpsResult<()> {
        let path = path.as_ref();
        imgproc_io::write(path, self.get(name)?)?;
        debug!(path = %path.display(), name, "saved image");
        Ok(())
    }
}
