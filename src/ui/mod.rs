//! Presentation layer
//!
//! - [`formatter`]: summary blocks for `search` and `list`, as text or JSON
//! - [`display`]: the detailed `show` view of one platform
//! - [`progress`]: package installation progress

pub mod display;
pub mod formatter;
pub mod progress;

pub use display::display_platform;
pub use formatter::{PlatformSummary, summary_formatter};
