//! Tools domain module.
//!
//! Everything tool-related lives here:
//!
//! - `definitions/` - the tool catalog, one file per API domain
//! - `adapter.rs` - declarative tool-spec to `ToolRoute` adapter
//! - `schemas.rs` - shared parameter enums
//! - `constants.rs` - SEC filing item tables
//! - `router.rs` - dynamic ToolRouter builder
//!
//! ## Adding a new tool
//!
//! 1. Define a params struct and an `ApiToolSpec` in the matching
//!    `definitions/` file (or a new one).
//! 2. Export it in `definitions/mod.rs`.
//! 3. Add a route in `router.rs` using `with_route()`.

pub mod adapter;
pub mod constants;
pub mod definitions;
pub mod router;
pub mod schemas;

pub use adapter::{ApiToolSpec, Extract};
pub use router::build_tool_router;
