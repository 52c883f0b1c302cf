//! Domain models for platman
//!
//! This module contains plain domain objects: the parsed `name@version`
//! specifier, catalog rows, platform manifests and installed package records.
//! They carry no I/O; the backend constructs them and the operations consume them.

pub mod catalog;
pub mod platform;
pub mod platform_spec;

pub use catalog::{CatalogEntry, filter_catalog};
pub use platform::{
    InstalledManifest, InstalledPackage, PackageDecl, PackagesUpdate, PlatformManifest,
};
pub use platform_spec::PlatformSpec;
