//! Roles, categories, severities, and statuses for the RCA assistant.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! and parse back from the same strings through `FromStr`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Implements `Display` and `FromStr` on top of `as_str()` and `ALL`.
macro_rules! impl_str_enum {
    ($ty:ident, $kind:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = CoreError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
                Self::ALL
                    .iter()
                    .copied()
                    .find(|variant| variant.as_str() == normalized)
                    .ok_or_else(|| CoreError::UnknownVariant {
                        kind: $kind,
                        value: raw.to_string(),
                        expected: Self::ALL
                            .iter()
                            .map(|variant| variant.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Author of a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub const ALL: &'static [Self] = &[Self::User, Self::Assistant];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl_str_enum!(Role, "role");

// ---------------------------------------------------------------------------
// ResultCategory
// ---------------------------------------------------------------------------

/// Kind of card attached to an assistant turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResultCategory {
    Incident,
    Slo,
    Metric,
    Insight,
}

impl ResultCategory {
    pub const ALL: &'static [Self] = &[Self::Incident, Self::Slo, Self::Metric, Self::Insight];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Incident => "incident",
            Self::Slo => "slo",
            Self::Metric => "metric",
            Self::Insight => "insight",
        }
    }
}

impl_str_enum!(ResultCategory, "category");

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Incident severity, most severe first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub const ALL: &'static [Self] = &[Self::Critical, Self::High, Self::Medium, Self::Low];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl_str_enum!(Severity, "severity");

// ---------------------------------------------------------------------------
// IncidentStatus
// ---------------------------------------------------------------------------

/// Where an incident sits in its lifecycle.
///
/// ```text
/// active → investigating → resolved
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum IncidentStatus {
    Active,
    Investigating,
    Resolved,
}

impl IncidentStatus {
    pub const ALL: &'static [Self] = &[Self::Active, Self::Investigating, Self::Resolved];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Investigating => "investigating",
            Self::Resolved => "resolved",
        }
    }

    /// Whether the incident still needs attention.
    #[must_use]
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Resolved)
    }
}

impl_str_enum!(IncidentStatus, "status");

// ---------------------------------------------------------------------------
// ServiceHealth
// ---------------------------------------------------------------------------

/// Health badge shown on a service card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ServiceHealth {
    Healthy,
    Warning,
    Critical,
}

impl ServiceHealth {
    pub const ALL: &'static [Self] = &[Self::Healthy, Self::Warning, Self::Critical];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

impl_str_enum!(ServiceHealth, "health");

// ---------------------------------------------------------------------------
// StepStatus
// ---------------------------------------------------------------------------

/// Progress of an analysis workflow step or timeline event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Pending,
    Active,
    Completed,
}

impl StepStatus {
    pub const ALL: &'static [Self] = &[Self::Pending, Self::Active, Self::Completed];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

impl_str_enum!(StepStatus, "step status");

// ---------------------------------------------------------------------------
// TimelineKind
// ---------------------------------------------------------------------------

/// What an analysis timeline event records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TimelineKind {
    Spike,
    Log,
    Analysis,
    Resolution,
}

impl TimelineKind {
    pub const ALL: &'static [Self] = &[Self::Spike, Self::Log, Self::Analysis, Self::Resolution];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spike => "spike",
            Self::Log => "log",
            Self::Analysis => "analysis",
            Self::Resolution => "resolution",
        }
    }
}

impl_str_enum!(TimelineKind, "timeline kind");

// ---------------------------------------------------------------------------
// LogLevel
// ---------------------------------------------------------------------------

/// Level badge for a log line, inferred from its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Error,
    Warning,
    Info,
}

impl LogLevel {
    pub const ALL: &'static [Self] = &[Self::Error, Self::Warning, Self::Info];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// `Exception` anywhere means error, then `WARN` means warning. Case-sensitive.
    #[must_use]
    pub fn of_line(text: &str) -> Self {
        if text.contains("Exception") {
            Self::Error
        } else if text.contains("WARN") {
            Self::Warning
        } else {
            Self::Info
        }
    }
}

impl_str_enum!(LogLevel, "log level");

#[cfg(test)]
mod tests {
    use super::*;

    // --- Serde roundtrip tests ---

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(role_user, Role, Role::User, "user");
    test_serde_roundtrip!(role_assistant, Role, Role::Assistant, "assistant");
    test_serde_roundtrip!(category_slo, ResultCategory, ResultCategory::Slo, "slo");
    test_serde_roundtrip!(
        category_insight,
        ResultCategory,
        ResultCategory::Insight,
        "insight"
    );
    test_serde_roundtrip!(severity_critical, Severity, Severity::Critical, "critical");
    test_serde_roundtrip!(
        status_investigating,
        IncidentStatus,
        IncidentStatus::Investigating,
        "investigating"
    );
    test_serde_roundtrip!(
        health_warning,
        ServiceHealth,
        ServiceHealth::Warning,
        "warning"
    );

    // --- Display / FromStr agreement ---

    #[test]
    fn display_matches_serde_for_every_variant() {
        for category in ResultCategory::ALL {
            let json = serde_json::to_string(category).unwrap();
            assert_eq!(json, format!("\"{category}\""));
        }
        for severity in Severity::ALL {
            let json = serde_json::to_string(severity).unwrap();
            assert_eq!(json, format!("\"{severity}\""));
        }
    }

    test_serde_roundtrip!(
        step_completed,
        StepStatus,
        StepStatus::Completed,
        "completed"
    );
    test_serde_roundtrip!(
        timeline_resolution,
        TimelineKind,
        TimelineKind::Resolution,
        "resolution"
    );

    #[test]
    fn log_level_follows_line_text() {
        assert_eq!(
            LogLevel::of_line("NullPointerException in AuthController at line 45"),
            LogLevel::Error
        );
        assert_eq!(
            LogLevel::of_line("WARN: DB connection pool timeout exceeded for user login"),
            LogLevel::Warning
        );
        assert_eq!(LogLevel::of_line("warn: lowercase is not a marker"), LogLevel::Info);
        assert_eq!(LogLevel::of_line("WARN after an Exception"), LogLevel::Error);
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!("Critical".parse::<Severity>(), Ok(Severity::Critical));
        assert_eq!(" RESOLVED ".parse::<IncidentStatus>(), Ok(IncidentStatus::Resolved));
        assert_eq!("Assistant".parse::<Role>(), Ok(Role::Assistant));
    }

    #[test]
    fn from_str_reports_expected_values() {
        let err = "sev1".parse::<Severity>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Unknown severity 'sev1'"));
        assert!(message.contains("critical, high, medium, low"));
    }

    #[test]
    fn severity_orders_most_severe_first() {
        let mut severities = vec![Severity::Low, Severity::Critical, Severity::Medium, Severity::High];
        severities.sort();
        assert_eq!(severities, Severity::ALL);
    }

    #[test]
    fn only_resolved_incidents_are_closed() {
        assert!(IncidentStatus::Active.is_open());
        assert!(IncidentStatus::Investigating.is_open());
        assert!(!IncidentStatus::Resolved.is_open());
    }
}
