//! # mealprep-core - Core Domain Types
//!
//! Foundation crate for the MealPrepper dashboard. Provides the page registry,
//! session types, shared UI-independent types, error handling and logging.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Page Registry (`route`)
//! - [`RouteEntry`] - A registered page (path, label, auth requirement, icon)
//! - [`list_routes()`] / [`sidebar_routes()`] - Registry access in display order
//! - [`find()`] - Path lookup with normalization
//!
//! ### Session (`session`)
//! - [`Session`] - Token + user, passed explicitly to the guard
//! - [`SessionToken`] - Opaque token with redacted `Debug`
//! - [`CurrentUser`] - Signed-in user profile
//!
//! ### Domain Types (`types`)
//! - [`Viewport`] - Width class (Mobile, Tablet, Desktop)
//! - [`Icon`], [`CardVariant`], [`StatVariant`] - Presentation references
//! - [`Heading`], [`HeadingLevel`] - Page landmarks
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use mealprep_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod prelude;
pub mod route;
pub mod session;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use route::{find, list_routes, normalize_path, paths, sidebar_routes, RouteEntry, APP_NAME};
pub use session::{CurrentUser, Session, SessionToken, TOKEN_KEY};
pub use types::{
    AppPhase, CardVariant, Heading, HeadingLevel, Icon, IconMode, StatVariant, Viewport,
};
