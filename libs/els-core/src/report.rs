//! Result reporting: the wire payload sent to the relay endpoint and the
//! fixed message template forwarded to the instructor channel.
//!
//! The reporter is stateless; single emission per session outcome is
//! enforced by the session's `reported` flag.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::session::{SessionOutcome, SessionStatus};
use crate::types::{Score, StudentProfile, UnitRef};

/// First line of every report message.
pub const REPORT_HEADER: &str = "📘 Test Name: ELS – English Through Reading";

/// Student identity as carried on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentData {
    pub name: String,
    pub surname: String,
    pub group: String,
}

impl From<&StudentProfile> for StudentData {
    fn from(profile: &StudentProfile) -> Self {
        Self {
            name: profile.name.clone(),
            surname: profile.surname.clone(),
            group: profile.group.clone(),
        }
    }
}

/// Body of `POST /api/send-result`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultPayload {
    pub percentage: u32,
    pub total: u32,
    pub status: SessionStatus,
    pub extra_details: String,
    pub is_grand_test: bool,
    pub selected_test_size: u32,
    pub unit: Option<UnitRef>,
    pub student_data: StudentData,
    pub score: Score,
}

impl ResultPayload {
    pub fn from_outcome(outcome: &SessionOutcome, profile: &StudentProfile) -> Self {
        Self {
            percentage: outcome.percentage,
            total: outcome.total,
            status: outcome.status,
            extra_details: outcome.extra_details(),
            is_grand_test: outcome.mode.is_grand_test,
            selected_test_size: outcome.mode.grand_test_size,
            unit: outcome.mode.unit.clone(),
            student_data: StudentData::from(profile),
            score: outcome.score,
        }
    }

    /// Exercise mode label shown in the report.
    pub fn mode_label(&self) -> String {
        if self.is_grand_test {
            format!("Grand Test ({} questions)", self.selected_test_size)
        } else if let Some(unit) = &self.unit {
            format!("Unit {}: {}", unit.id, unit.title)
        } else {
            "Unit Test".to_string()
        }
    }
}

/// Render the fixed multi-line report message. `extraDetails`, when present,
/// is appended after a blank line.
pub fn format_message(payload: &ResultPayload, now: DateTime<Utc>) -> String {
    let status_marker = match payload.status {
        SessionStatus::Completed => "✅",
        SessionStatus::Incomplete => "⚠️",
    };
    let mut lines = vec![
        REPORT_HEADER.to_string(),
        format!(
            "🧑‍🎓 Student: {} {}",
            payload.student_data.name, payload.student_data.surname
        ),
        format!("👥 Group: {}", payload.student_data.group),
        format!("📚 Mode: {}", payload.mode_label()),
        format!("📅 Date/Time: {}", now.format("%Y-%m-%d %H:%M:%S UTC")),
        format!(
            "📊 Score: {}/{} ({}%)",
            payload.score.correct, payload.total, payload.percentage
        ),
        format!("{} Status: {}", status_marker, payload.status.as_str()),
        format!("✅ Correct: {}", payload.score.correct),
        format!("❌ Wrong: {}", payload.score.wrong),
    ];
    if !payload.extra_details.is_empty() {
        lines.push(String::new());
        lines.push(payload.extra_details.clone());
    }
    lines.join("\n")
}

/// Delivery seam for session outcomes. Implementations are fire-and-forget:
/// failure must be swallowed, never surfaced to the learner.
pub trait ReportSink {
    fn deliver(&mut self, payload: &ResultPayload);
}
