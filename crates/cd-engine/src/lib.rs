//! # cd-engine
//!
//! Court date and fingerprint date resolution for the Lower Mainland
//! provincial courts.
//!
//! ```
//! use cd_engine::{resolve_dates, CaseType, DateRequest, ReferenceData, Squad};
//! use cd_time::Date;
//!
//! let data = ReferenceData::bundled().unwrap();
//! let request = DateRequest {
//!     city: "new-westminster".into(),
//!     case_type: CaseType::Adult,
//!     surname_initial: None,
//!     weeks_out: 1,
//!     issuing_squad: Squad::A,
//! };
//! let today = Date::from_ymd(2025, 10, 8).unwrap();
//! let r = resolve_dates(&request, &data, today).unwrap();
//! assert_eq!(r.court.date, Date::from_ymd(2025, 10, 15).unwrap());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Result assembly and copy text.
pub mod assembler;

/// The `resolve_dates` entry point.
pub mod engine;

/// Fingerprint appointment dates.
pub mod fingerprint;

/// Court scheduling policies.
pub mod policy;

/// Reference data loading and validation.
pub mod reference;

/// Court date resolution.
pub mod resolver;

/// Published rotation tables.
pub mod rotation_table;

/// Squads and the squad rotation.
pub mod squad;

/// Surname initials and surname rules.
pub mod surname;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use assembler::{assemble, DateResolution};
pub use engine::{resolve_dates, DateRequest};
pub use fingerprint::{fingerprint_target_weekday, FingerprintCalculator, FingerprintResult};
pub use policy::{CaseType, CourtPolicy, DaySchedule, DayType};
pub use reference::{ReferenceData, ReferenceDataBuilder};
pub use resolver::{CourtDateResolver, CourtDateResult, LookaheadWeeks};
pub use rotation_table::{CalendarRotationTable, RotationPartition};
pub use squad::{Shift, Squad, SquadRotation, WorkingSquads};
pub use surname::{parse_initial, LetterRange, SurnameRule, SurnameRules};
