//! Canned root-cause walkthrough for the 12:30 auth-service latency spike.
//!
//! ```text
//! detection → tracer → analyzer → summary
//! ```
//!
//! Every step is already complete; nothing here runs an agent.

use chrono::{DateTime, TimeZone, Utc};
use rca_core::entities::{CodeSnippet, KnownIssue, LogLine, SpikeEvent, TimelineEvent, WorkflowStep};
use rca_core::enums::{StepStatus, TimelineKind};
use rca_core::responses::AnalysisResponse;

/// Confidence reported for the root cause.
pub const ANALYSIS_CONFIDENCE: u8 = 87;

/// 2025-01-27 at the given UTC time.
fn on_spike_day(hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 27, hour, minute, second)
        .single()
        .unwrap_or_default()
}

#[must_use]
pub fn spike() -> SpikeEvent {
    SpikeEvent {
        metric: "service.latency.avg".to_string(),
        service: "auth-service".to_string(),
        at: on_spike_day(12, 30, 0),
        value_ms: 420,
    }
}

/// Log lines from the five minutes before the spike, oldest first.
#[must_use]
pub fn logs() -> Vec<LogLine> {
    vec![
        LogLine::new(
            on_spike_day(12, 25, 30),
            "NullPointerException in AuthController at line 45",
        ),
        LogLine::new(
            on_spike_day(12, 26, 10),
            "WARN: DB connection pool timeout exceeded for user login",
        ),
    ]
}

#[must_use]
pub fn known_issue() -> KnownIssue {
    KnownIssue {
        id: "issue_101".to_string(),
        title: "Null pointer on login".to_string(),
        resolution: "Initialize session variable in AuthController before accessing user data."
            .to_string(),
    }
}

#[must_use]
pub fn code_snippet() -> CodeSnippet {
    CodeSnippet {
        file: "AuthController.java".to_string(),
        function: "login()".to_string(),
        snippet: "if (session == null) throw new NullPointerException();".to_string(),
    }
}

#[must_use]
pub fn workflow() -> Vec<WorkflowStep> {
    [
        ("detection", "Spike Detection", "Monitoring system detected latency anomaly"),
        ("tracer", "Tracer Agent", "Fetching logs and traces from affected services"),
        (
            "analyzer",
            "Log Analyzer",
            "AI analyzing patterns and correlating with known issues",
        ),
        ("summary", "RCA Summary", "Generating comprehensive root cause analysis"),
    ]
    .into_iter()
    .map(|(id, name, description)| WorkflowStep {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        status: StepStatus::Completed,
    })
    .collect()
}

/// Timeline for `spike`; the first event quotes its service and value.
#[must_use]
pub fn timeline(spike: &SpikeEvent) -> Vec<TimelineEvent> {
    let detected = format!("{} latency reached {}ms", spike.service, spike.value_ms);
    [
        ("12:30:00", TimelineKind::Spike, "Latency Spike Detected", detected.as_str()),
        (
            "12:30:15",
            TimelineKind::Log,
            "Tracer Agent Activated",
            "Fetching relevant logs from time window",
        ),
        (
            "12:30:45",
            TimelineKind::Analysis,
            "Log Analysis Complete",
            "AI identified suspicious patterns and root cause",
        ),
        (
            "12:31:10",
            TimelineKind::Resolution,
            "RCA Summary Generated",
            "Root cause analysis with recommended fixes",
        ),
    ]
    .into_iter()
    .zip(1u32..)
    .map(|((timestamp, kind, title, description), id)| TimelineEvent {
        id: id.to_string(),
        timestamp: timestamp.to_string(),
        kind,
        title: title.to_string(),
        description: description.to_string(),
        status: StepStatus::Completed,
    })
    .collect()
}

/// Everything `rca analysis` prints.
#[must_use]
pub fn analysis() -> AnalysisResponse {
    let spike = spike();
    let timeline = timeline(&spike);
    tracing::debug!(service = %spike.service, value_ms = spike.value_ms, "building root-cause walkthrough");

    AnalysisResponse {
        workflow: workflow(),
        timeline,
        root_cause: known_issue(),
        code: code_snippet(),
        logs: logs(),
        confidence: ANALYSIS_CONFIDENCE,
        spike,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rca_config::DashboardConfig;
    use rca_core::enums::{LogLevel, ResultCategory};

    use super::*;
    use crate::{catalog, classify};

    #[test]
    fn spike_is_1230_utc_on_the_27th() {
        assert_eq!(spike().at.to_rfc3339(), "2025-01-27T12:30:00+00:00");
    }

    #[test]
    fn workflow_runs_detection_to_summary() {
        let ids: Vec<String> = workflow().into_iter().map(|step| step.id).collect();
        assert_eq!(ids, ["detection", "tracer", "analyzer", "summary"]);
        assert!(workflow().iter().all(|step| step.status == StepStatus::Completed));
    }

    #[test]
    fn timeline_spans_seventy_seconds() {
        let events = timeline(&spike());
        let stamps: Vec<&str> = events.iter().map(|event| event.timestamp.as_str()).collect();
        assert_eq!(stamps, ["12:30:00", "12:30:15", "12:30:45", "12:31:10"]);
        assert_eq!(events[0].description, "auth-service latency reached 420ms");
        assert_eq!(events[3].kind, TimelineKind::Resolution);
        assert_eq!(events[3].id, "4");
    }

    #[test]
    fn logs_precede_spike_and_carry_levels() {
        let spike = spike();
        let logs = logs();
        assert!(logs.iter().all(|line| line.at < spike.at));
        let levels: Vec<LogLevel> = logs.iter().map(|line| line.level).collect();
        assert_eq!(levels, [LogLevel::Error, LogLevel::Warning]);
    }

    #[test]
    fn walkthrough_agrees_with_dashboard_and_chat() {
        let view = analysis();
        let alert = catalog::dashboard(&DashboardConfig::default())
            .alert
            .expect("default threshold raises alert");
        assert_eq!(view.spike.value_ms, alert.peak_ms);
        assert_eq!(view.spike.service, alert.service);
        assert_eq!(view.spike.metric, alert.metric);

        let insight = classify("Why did latency spike at 12:30?")
            .attachments
            .into_iter()
            .find(|item| item.category == ResultCategory::Insight)
            .expect("root cause reply has an insight card");
        assert_eq!(insight.confidence, view.confidence);
    }

    #[test]
    fn root_cause_points_at_auth_controller() {
        let view = analysis();
        assert_eq!(view.root_cause.id, "issue_101");
        assert_eq!(view.code.file, "AuthController.java");
        assert!(view.root_cause.resolution.contains("AuthController"));
    }
}
