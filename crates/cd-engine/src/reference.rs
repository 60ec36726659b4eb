//! Reference data: holidays, closures, court policies and rotation tables.
//!
//! Reference data is loaded from TOML, checked once by
//! [`ReferenceData::validate`], and never mutated afterwards.  A data set for
//! the Lower Mainland courts in 2025 ships with the crate, see
//! [`ReferenceData::bundled`].

use std::collections::{BTreeMap, BTreeSet};

use cd_core::errors::{Error, Result};
use cd_core::fail;
use cd_time::{ClosureSet, Date, HolidaySet};
use serde::Deserialize;
use tracing::debug;

use crate::policy::{CaseType, CourtPolicy, DaySchedule};
use crate::rotation_table::CalendarRotationTable;
use crate::squad::SquadRotation;

const BUNDLED: &str = include_str!("../data/lower_mainland_2025.toml");

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawReferenceData {
    fingerprint_location: String,
    #[serde(default)]
    rotation_anchor: Option<Date>,
    holidays: RawHolidays,
    #[serde(default)]
    closures: RawClosures,
    #[serde(default)]
    policies: Vec<CourtPolicy>,
    #[serde(default)]
    tables: Vec<CalendarRotationTable>,
}

#[derive(Debug, Deserialize)]
struct RawHolidays {
    name: String,
    dates: Vec<Date>,
}

#[derive(Debug, Default, Deserialize)]
struct RawClosures {
    #[serde(default)]
    general: Vec<Date>,
    #[serde(default)]
    cities: BTreeMap<String, Vec<Date>>,
}

impl RawReferenceData {
    fn into_domain(self) -> Result<ReferenceData> {
        let rotation = match self.rotation_anchor {
            Some(anchor) => SquadRotation::new(anchor),
            None => SquadRotation::reference()?,
        };
        let closures = self
            .closures
            .cities
            .into_iter()
            .fold(ClosureSet::new(self.closures.general), |set, (city, dates)| {
                set.with_city(city, dates)
            });
        Ok(ReferenceData {
            fingerprint_location: self.fingerprint_location,
            rotation,
            holidays: HolidaySet::new(self.holidays.name, self.holidays.dates),
            closures,
            policies: self.policies,
            tables: self.tables,
        })
    }
}

/// Everything the engine consults besides the request itself.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    fingerprint_location: String,
    rotation: SquadRotation,
    holidays: HolidaySet,
    closures: ClosureSet,
    policies: Vec<CourtPolicy>,
    tables: Vec<CalendarRotationTable>,
}

impl ReferenceData {
    /// Parse reference data from TOML and validate it.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let raw: RawReferenceData =
            toml::from_str(text).map_err(|e| Error::ReferenceData(e.to_string()))?;
        let data = raw.into_domain()?;
        data.validate()?;
        debug!(
            policies = data.policies.len(),
            tables = data.tables.len(),
            holidays = data.holidays.len(),
            "reference data loaded"
        );
        Ok(data)
    }

    /// The data set shipped with the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_toml_str(BUNDLED)
    }

    /// Check the tables for dangling references and gaps.
    ///
    /// Rejects calendar policies naming an unknown table, flexible policies
    /// with no permitted days, surname rules that leave letters uncovered,
    /// duplicate `(city, case type)` pairs and malformed rotation tables.
    pub fn validate(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for policy in &self.policies {
            let key = (policy.city.to_ascii_lowercase(), policy.case_type);
            if !seen.insert(key) {
                fail!(
                    Configuration,
                    "duplicate court policy for {} {}",
                    policy.city,
                    policy.case_type
                );
            }
            let which = format!("{} {}", policy.city, policy.case_type);
            match &policy.schedule {
                DaySchedule::Calendar { table } => {
                    if !self.tables.iter().any(|t| &t.name == table) {
                        fail!(Configuration, "{which} references unknown rotation table '{table}'");
                    }
                }
                DaySchedule::Flexible { days } => {
                    if days.is_empty() {
                        fail!(Configuration, "{which} has a flexible schedule with no days");
                    }
                }
                DaySchedule::Surname { rules } => {
                    let uncovered: String = rules.uncovered_letters().into_iter().collect();
                    if !uncovered.is_empty() {
                        fail!(
                            Configuration,
                            "{which} surname rules do not cover initials {uncovered}"
                        );
                    }
                }
                DaySchedule::Fixed { .. } => {}
            }
        }
        let mut names = BTreeSet::new();
        for table in &self.tables {
            if !names.insert(table.name.as_str()) {
                fail!(Configuration, "duplicate rotation table '{}'", table.name);
            }
            table.validate()?;
        }
        Ok(())
    }

    /// The policy for `(city, case_type)`.
    ///
    /// # Errors
    /// Input-validation error for an empty city or the `"choose"`
    /// placeholder; configuration error if no policy exists.
    pub fn policy(&self, city: &str, case_type: CaseType) -> Result<&CourtPolicy> {
        let city = city.trim();
        if city.is_empty() || city.eq_ignore_ascii_case("choose") {
            fail!(InputValidation, "Please select a court city.");
        }
        match self.policies.iter().find(|p| p.matches(city, case_type)) {
            Some(policy) => Ok(policy),
            None => fail!(
                Configuration,
                "no court policy for {city} {case_type} (known cities: {})",
                self.cities().join(", ")
            ),
        }
    }

    /// Distinct city identifiers, sorted.
    pub fn cities(&self) -> Vec<&str> {
        let set: BTreeSet<&str> = self.policies.iter().map(|p| p.city.as_str()).collect();
        set.into_iter().collect()
    }

    /// All court policies.
    pub fn policies(&self) -> &[CourtPolicy] {
        &self.policies
    }

    /// Published rotation tables.
    pub fn tables(&self) -> &[CalendarRotationTable] {
        &self.tables
    }

    /// Published holidays.
    pub fn holidays(&self) -> &HolidaySet {
        &self.holidays
    }

    /// Court closures.
    pub fn closures(&self) -> &ClosureSet {
        &self.closures
    }

    /// The squad rotation.
    pub fn rotation(&self) -> SquadRotation {
        self.rotation
    }

    /// Where fingerprinting takes place.
    pub fn fingerprint_location(&self) -> &str {
        &self.fingerprint_location
    }
}

/// Builder for [`ReferenceData`], for callers assembling data in code.
#[derive(Debug)]
pub struct ReferenceDataBuilder {
    fingerprint_location: String,
    rotation: Option<SquadRotation>,
    holidays: HolidaySet,
    closures: ClosureSet,
    policies: Vec<CourtPolicy>,
    tables: Vec<CalendarRotationTable>,
}

impl ReferenceDataBuilder {
    /// Begin building with no holidays, closures, policies or tables.
    pub fn new(fingerprint_location: impl Into<String>) -> Self {
        Self {
            fingerprint_location: fingerprint_location.into(),
            rotation: None,
            holidays: HolidaySet::default(),
            closures: ClosureSet::default(),
            policies: Vec::new(),
            tables: Vec::new(),
        }
    }

    /// Anchor the squad rotation on `anchor`.
    pub fn with_rotation_anchor(mut self, anchor: Date) -> Self {
        self.rotation = Some(SquadRotation::new(anchor));
        self
    }

    /// Set the holiday list.
    pub fn with_holidays(mut self, holidays: HolidaySet) -> Self {
        self.holidays = holidays;
        self
    }

    /// Set the closures.
    pub fn with_closures(mut self, closures: ClosureSet) -> Self {
        self.closures = closures;
        self
    }

    /// Add a court policy.
    pub fn with_policy(mut self, policy: CourtPolicy) -> Self {
        self.policies.push(policy);
        self
    }

    /// Add a rotation table.
    pub fn with_table(mut self, table: CalendarRotationTable) -> Self {
        self.tables.push(table);
        self
    }

    /// Validate and build.
    pub fn build(self) -> Result<ReferenceData> {
        let rotation = match self.rotation {
            Some(r) => r,
            None => SquadRotation::reference()?,
        };
        let data = ReferenceData {
            fingerprint_location: self.fingerprint_location,
            rotation,
            holidays: self.holidays,
            closures: self.closures,
            policies: self.policies,
            tables: self.tables,
        };
        data.validate()?;
        Ok(data)
    }
}
