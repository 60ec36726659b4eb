//! Joins the court and fingerprint results with the court's display data.

use serde::Serialize;

use crate::fingerprint::FingerprintResult;
use crate::policy::CourtPolicy;
use crate::resolver::CourtDateResult;

/// Appended to the copy line when the fingerprint date is a holiday.
pub const HOLIDAY_MARKER: &str = "HOLIDAY DATE - verify availability";

/// The complete answer for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateResolution {
    /// Resolved court date.
    pub court: CourtDateResult,
    /// Court appearance time.
    pub court_time: String,
    /// Court address.
    pub court_address: String,
    /// Note shown with the court date.
    pub court_note: Option<String>,
    /// Fingerprint appointment.
    pub fingerprint: FingerprintResult,
    /// Single line for pasting into the case file.
    pub copy_text: String,
}

impl DateResolution {
    /// Multi-line human-readable rendering.
    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!(
                "Court date:       {} at {}",
                self.court.date.long_form(),
                self.court_time
            ),
            format!("Court address:    {}", self.court_address),
        ];
        if let Some(note) = &self.court_note {
            lines.push(format!("Note:             {note}"));
        }
        let fp = &self.fingerprint;
        lines.push(format!(
            "Fingerprint date: {} at {} ({} days before court)",
            fp.date.long_form(),
            fp.time,
            fp.days_before
        ));
        lines.push(format!("Location:         {}", fp.location));
        if fp.is_holiday {
            lines.push(format!("WARNING:          {HOLIDAY_MARKER}"));
        }
        let duty = if fp.is_issuing_squad_on_duty {
            "on duty"
        } else {
            "not on duty"
        };
        lines.push(format!(
            "Squad:            {} working; issuing squad {} is {duty}",
            fp.working_squad, fp.issuing_squad
        ));
        lines.push(String::new());
        lines.push(self.copy_text.clone());
        lines.join("\n")
    }
}

/// Build the [`DateResolution`] for `policy`.
///
/// Calendar courts prefix the note with their rotation partition.
pub fn assemble(
    policy: &CourtPolicy,
    court: CourtDateResult,
    fingerprint: FingerprintResult,
) -> DateResolution {
    let court_note = match (&court.partition, &policy.note) {
        (Some(partition), Some(note)) => {
            Some(format!("This date is for last names {partition}. {note}"))
        }
        (Some(partition), None) => Some(format!("This date is for last names {partition}.")),
        (None, note) => note.clone(),
    };

    let mut copy_text = format!(
        "Court date: {} at {} - {}",
        court.date.long_form(),
        policy.time,
        policy.address
    );
    if policy.copy_note {
        if let Some(note) = &policy.note {
            copy_text.push_str(&format!(" ({note})"));
        }
    }
    copy_text.push_str(&format!(
        " // Fingerprint date: {} at {} - {}",
        fingerprint.date.long_form(),
        fingerprint.time,
        fingerprint.location
    ));
    if fingerprint.is_holiday {
        copy_text.push_str(&format!(" ({HOLIDAY_MARKER})"));
    }

    DateResolution {
        court,
        court_time: policy.time.clone(),
        court_address: policy.address.clone(),
        court_note,
        fingerprint,
        copy_text,
    }
}
