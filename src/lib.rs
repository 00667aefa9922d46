//! Financial-independence profile engine: validates raw income/expense/asset
//! figures, derives normalized FI metrics, classifies the user into a life
//! stage and a strategy category via ordered decision rules, generates
//! advisory text, and persists exactly one profile per user scope behind an
//! injectable blob store and clock.

pub mod cli;
pub mod clock;
pub mod core;
pub mod error;
pub mod service;
pub mod store;

pub use crate::clock::{Clock, FixedClock, SystemClock};
pub use crate::core::{
    CalculationResult, Category, Metrics, Profile, ProfileInput, RawProfileInput, Stage,
    ValidationReport,
};
pub use crate::error::{Error, Result};
pub use crate::service::ProfileService;
pub use crate::store::{BlobStore, FileStore, MemoryStore, ProfileStore};
