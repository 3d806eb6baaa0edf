//! Core modules for Waylock

pub mod catalog;
pub mod coordinate;
pub mod engine;
pub mod frequency;
pub mod geo;
pub mod hints;
pub mod proximity;
pub mod scan;
pub mod sensor;
pub mod store;
pub mod timegate;

pub use hints::HintLedger;
pub use scan::ScanSession;
pub use sensor::{
    acquire_with_retry, FailingPositionSource, FixOptions, GpsWatch, MockPositionSource,
    PositionSource, Ticker,
};
pub use store::{ProgressStore, StoreError};
