//! Domain types for the fixture tracker.
//!
//! This module provides:
//! - Primitives: FixtureId, EntryId, Outcome and amount parsing
//! - Fixture schedule records and their classified view
//! - Ledger records: per-fixture positions and casino entries

pub mod casino;
pub mod fixture;
pub mod position;
pub mod primitives;

pub use casino::{CasinoDraft, CasinoEntry};
pub use fixture::{Fixture, FixtureStatus, FixtureTiming, FixtureView};
pub use position::Position;
pub use primitives::{parse_amount, EntryId, FixtureId, Outcome};
