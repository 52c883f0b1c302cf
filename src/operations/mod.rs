//! Operations behind each command
//!
//! Every operation is generic over the collaborator traits in
//! [`crate::backend`] and writes its user-facing output to a caller supplied
//! writer, so the same code drives the terminal and the unit tests.
//!
//! - [`SearchOperation`]: filter and print the catalog
//! - [`InstallOperation`]: install `platform[@version]` tokens
//! - [`ListOperation`]: print installed platforms
//! - [`ShowOperation`]: show a platform, offering to install it when missing
//! - [`UninstallOperation`]: remove `platform[@version]` tokens
//! - [`UpdateOperation`]: update every installed platform

pub mod install;
pub mod list;
pub mod search;
pub mod show;
pub mod uninstall;
pub mod update;

pub use install::{InstallOperation, InstallOptions};
pub use list::ListOperation;
pub use search::SearchOperation;
pub use show::ShowOperation;
pub use uninstall::UninstallOperation;
pub use update::{UpdateOperation, UpdateOptions};
