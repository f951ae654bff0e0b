//! Markdown rendering of models, collections, operation results and
//! aggregates.
//!
//! Domain models implement `Display` directly (see [`models`]). Collections
//! and operation outcomes go through newtype wrappers so the same data can be
//! framed differently per context:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Display Wrapper │    │    Markdown     │
//! │ (Bed, Plant...) │───▶│      Types      │───▶│     Output      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`collections`]: listings (Beds, Plants, Harvests)
//! - [`results`]: CreateResult, UpdateResult, DeleteResult, BedDeletion
//! - [`stats`]: aggregates and charts
//! - [`status`]: OperationStatus
//! - [`datetime`]: LocalDateTime
//!
//! # Examples
//!
//! ```rust
//! use garden_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Nothing to change");
//! assert_eq!(status.to_string(), "Success: Nothing to change\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod stats;
pub mod status;

pub use collections::{Beds, Harvests, Plants};
pub use datetime::LocalDateTime;
pub use results::{BedDeletion, CreateResult, DeleteResult, Resource, UpdateResult};
pub use stats::{Producers, Ranking, Years};
pub use status::OperationStatus;
