//! Domain Layer
//!
//! The matching-and-allocation engine - pure logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - SlotRecord, AssetFile, LedgerDocument, SlotTable
//! - `value_objects/` - Tier, name normalization
//! - `services/` - LedgerParser, NameMatcher, SlotAllocator, LedgerWriter, LedgerDiff
//! - `policies/` - MatchPolicy and the pluggable similarity scorer
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
