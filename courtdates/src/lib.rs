//! # courtdates
//!
//! Court appearance and fingerprint appointment dates for the Lower
//! Mainland provincial courts.
//!
//! This crate is a **façade** over the workspace crates, plus the
//! configuration and operator-notes support used by the `courtcal` binary.
//!
//! ```rust
//! use courtdates::engine::{resolve_dates, CaseType, DateRequest, ReferenceData, Squad};
//! use courtdates::time::Date;
//!
//! let data = ReferenceData::bundled().unwrap();
//! let request = DateRequest {
//!     city: "vancouver".into(),
//!     case_type: CaseType::Youth,
//!     surname_initial: None,
//!     weeks_out: 2,
//!     issuing_squad: Squad::B,
//! };
//! let r = resolve_dates(&request, &data, Date::from_ymd(2025, 10, 9).unwrap()).unwrap();
//! assert_eq!(r.fingerprint.time, "1800hrs");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types.
pub use cd_core as core;

/// Dates, weekdays and holiday calendars.
pub use cd_time as time;

/// Court and fingerprint date resolution.
pub use cd_engine as engine;

/// Layered `courtcal` configuration.
pub mod config;

/// Operator notes file.
pub mod notes;
