//! Static dashboard data: incidents, service cards, and the latency series.
//!
//! Nothing here is fetched. The spike alert is derived from the series and the
//! configured threshold.

use rca_config::DashboardConfig;
use rca_core::entities::{Incident, MetricPoint, ServiceCard, SpikeAlert};
use rca_core::enums::{IncidentStatus, ServiceHealth, Severity};
use rca_core::responses::{DashboardResponse, IncidentListResponse};

fn incident(
    id: &str,
    title: &str,
    severity: Severity,
    status: IncidentStatus,
    occurred_at: &str,
    ai_insight: &str,
    service: &str,
) -> Incident {
    Incident {
        id: id.to_string(),
        title: title.to_string(),
        severity,
        status,
        occurred_at: occurred_at.to_string(),
        ai_insight: ai_insight.to_string(),
        service: service.to_string(),
    }
}

/// All incidents, most recent first.
#[must_use]
pub fn incidents() -> Vec<Incident> {
    vec![
        incident(
            "INC-2024-001",
            "Snowflake Query Performance Degradation",
            Severity::Critical,
            IncidentStatus::Active,
            "5 minutes ago",
            "AI detected high CPU usage correlation with recent warehouse scaling changes",
            "data-warehouse",
        ),
        incident(
            "INC-2024-002",
            "Authentication Service Latency",
            Severity::High,
            IncidentStatus::Investigating,
            "23 minutes ago",
            "Dynatrace shows 400ms+ response times, likely database connection pool exhaustion",
            "auth-service",
        ),
        incident(
            "INC-2024-003",
            "Data Pipeline Delay",
            Severity::Medium,
            IncidentStatus::Resolved,
            "1 hour ago",
            "Temporary network congestion resolved automatically via load balancer failover",
            "data-pipeline",
        ),
        incident(
            "INC-2024-004",
            "Payment Gateway Timeout",
            Severity::High,
            IncidentStatus::Resolved,
            "2 hours ago",
            "Third-party API rate limiting detected, implemented circuit breaker pattern",
            "payment-service",
        ),
        incident(
            "INC-2024-005",
            "Redis Cache Miss Spike",
            Severity::Medium,
            IncidentStatus::Resolved,
            "4 hours ago",
            "Cache invalidation pattern optimized, reducing miss rate by 60%",
            "cache-service",
        ),
    ]
}

/// Optional filters for [`list_incidents`]. `None` matches everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct IncidentFilter {
    pub status: Option<IncidentStatus>,
    pub severity: Option<Severity>,
}

impl IncidentFilter {
    #[must_use]
    pub fn matches(&self, incident: &Incident) -> bool {
        self.status.is_none_or(|status| status == incident.status)
            && self.severity.is_none_or(|severity| severity == incident.severity)
    }
}

/// Filtered incidents, truncated to `limit`, in catalog order.
#[must_use]
pub fn list_incidents(filter: &IncidentFilter, limit: u32) -> IncidentListResponse {
    let matching: Vec<Incident> = incidents()
        .into_iter()
        .filter(|incident| filter.matches(incident))
        .collect();
    let total_matches = u32::try_from(matching.len()).unwrap_or(u32::MAX);
    let open = u32::try_from(
        matching
            .iter()
            .filter(|incident| incident.status.is_open())
            .count(),
    )
    .unwrap_or(u32::MAX);
    let limit = usize::try_from(limit).unwrap_or(usize::MAX);

    IncidentListResponse {
        incidents: matching.into_iter().take(limit).collect(),
        total_matches,
        open,
    }
}

/// Health cards shown at the top of the dashboard.
#[must_use]
pub fn services() -> Vec<ServiceCard> {
    [
        ("auth-service", ServiceHealth::Critical, "99.2%", 1250, 2.1),
        ("user-service", ServiceHealth::Healthy, "99.9%", 850, 0.1),
        ("payment-service", ServiceHealth::Warning, "99.7%", 420, 0.8),
    ]
    .into_iter()
    .map(|(service, health, uptime, request_rate, error_rate)| ServiceCard {
        service: service.to_string(),
        health,
        uptime: uptime.to_string(),
        request_rate,
        error_rate,
    })
    .collect()
}

/// Five-minute latency samples leading up to the 12:30 spike.
#[must_use]
pub fn latency_series() -> Vec<MetricPoint> {
    [
        ("11:45", 82),
        ("11:50", 89),
        ("11:55", 76),
        ("12:00", 85),
        ("12:05", 92),
        ("12:10", 78),
        ("12:15", 88),
        ("12:20", 95),
        ("12:25", 180),
        ("12:30", 420),
    ]
    .into_iter()
    .map(|(timestamp, value_ms)| MetricPoint {
        timestamp: timestamp.to_string(),
        value_ms,
    })
    .collect()
}

/// Highest sample strictly above `threshold_ms`, earliest on ties.
///
/// The threshold is the baseline: the percentage is how far the peak sits
/// above it, rounded to the nearest whole percent.
#[must_use]
pub fn detect_spike(
    series: &[MetricPoint],
    threshold_ms: u32,
    service: &str,
    metric: &str,
) -> Option<SpikeAlert> {
    let peak = series
        .iter()
        .filter(|point| point.value_ms > threshold_ms)
        .fold(None::<&MetricPoint>, |best, point| match best {
            Some(best) if best.value_ms >= point.value_ms => Some(best),
            _ => Some(point),
        })?;

    Some(SpikeAlert {
        service: service.to_string(),
        metric: metric.to_string(),
        timestamp: peak.timestamp.clone(),
        peak_ms: peak.value_ms,
        threshold_ms,
        percent_above_baseline: percent_above(peak.value_ms, threshold_ms),
    })
}

/// `round((peak - baseline) / baseline * 100)`, or 0 for a zero baseline.
fn percent_above(peak_ms: u32, baseline_ms: u32) -> u32 {
    if baseline_ms == 0 {
        return 0;
    }
    let baseline = u64::from(baseline_ms);
    let delta = u64::from(peak_ms).saturating_sub(baseline);
    u32::try_from((delta * 100 + baseline / 2) / baseline).unwrap_or(u32::MAX)
}

/// Everything `rca dashboard` prints.
#[must_use]
pub fn dashboard(config: &DashboardConfig) -> DashboardResponse {
    let series = latency_series();
    let alert = detect_spike(
        &series,
        config.latency_threshold_ms,
        &config.service,
        &config.metric,
    );
    if let Some(alert) = &alert {
        tracing::debug!(
            service = %alert.service,
            at = %alert.timestamp,
            peak_ms = alert.peak_ms,
            "latency spike detected"
        );
    }

    DashboardResponse {
        services: services(),
        metric: config.metric.clone(),
        series,
        alert,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rca_core::enums::ResultCategory;

    use super::*;

    fn point(timestamp: &str, value_ms: u32) -> MetricPoint {
        MetricPoint {
            timestamp: timestamp.to_string(),
            value_ms,
        }
    }

    #[test]
    fn catalog_has_five_incidents_with_unique_ids() {
        let all = incidents();
        assert_eq!(all.len(), 5);
        let ids: HashSet<&str> = all.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn filter_by_status_and_severity() {
        let resolved = list_incidents(
            &IncidentFilter {
                status: Some(IncidentStatus::Resolved),
                severity: None,
            },
            20,
        );
        assert_eq!(resolved.total_matches, 3);
        assert_eq!(resolved.open, 0);

        let high = list_incidents(
            &IncidentFilter {
                status: None,
                severity: Some(Severity::High),
            },
            20,
        );
        let titles: Vec<&str> = high.incidents.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["Authentication Service Latency", "Payment Gateway Timeout"]);
        assert_eq!(high.open, 1);
    }

    #[test]
    fn limit_truncates_but_keeps_total() {
        let listed = list_incidents(&IncidentFilter::default(), 2);
        assert_eq!(listed.incidents.len(), 2);
        assert_eq!(listed.total_matches, 5);
        assert_eq!(listed.open, 2);
        assert_eq!(listed.incidents[0].id, "INC-2024-001");
    }

    #[test]
    fn default_series_spikes_at_1230() {
        let alert = detect_spike(&latency_series(), 100, "auth-service", "service.latency.avg")
            .expect("series crosses the threshold");
        assert_eq!(alert.timestamp, "12:30");
        assert_eq!(alert.peak_ms, 420);
        assert_eq!(alert.threshold_ms, 100);
        assert_eq!(alert.percent_above_baseline, 320);
    }

    #[test]
    fn no_alert_when_nothing_exceeds_threshold() {
        assert_eq!(detect_spike(&latency_series(), 420, "svc", "m"), None);
        assert_eq!(detect_spike(&[], 100, "svc", "m"), None);
    }

    #[test]
    fn ties_resolve_to_earliest_point() {
        let series = [point("a", 50), point("b", 300), point("c", 300)];
        let alert = detect_spike(&series, 100, "svc", "m").unwrap();
        assert_eq!(alert.timestamp, "b");
        assert_eq!(alert.percent_above_baseline, 200);
    }

    #[test]
    fn percent_rounds_to_nearest() {
        let series = [point("a", 150), point("b", 133)];
        let alert = detect_spike(&series, 120, "svc", "m").unwrap();
        assert_eq!(alert.peak_ms, 150);
        assert_eq!(alert.percent_above_baseline, 25);

        let alert = detect_spike(&[point("a", 101)], 3, "svc", "m").unwrap();
        assert_eq!(alert.percent_above_baseline, 3267);
    }

    #[test]
    fn zero_threshold_reports_no_percentage() {
        let alert = detect_spike(&[point("a", 10)], 0, "svc", "m").unwrap();
        assert_eq!(alert.percent_above_baseline, 0);
    }

    #[test]
    fn dashboard_percentage_matches_root_cause_card() {
        let alert = dashboard(&DashboardConfig::default())
            .alert
            .expect("default threshold raises alert");
        let card = crate::classifier::classify("Why did latency spike at 12:30?")
            .attachments
            .into_iter()
            .find(|item| item.category == ResultCategory::Metric)
            .expect("root cause reply has a metric card");
        let expected = format!(
            "Peak latency reached {}ms ({}% above baseline)",
            alert.peak_ms, alert.percent_above_baseline
        );
        assert_eq!(card.description, expected);
    }

    #[test]
    fn dashboard_uses_configured_threshold() {
        let config = DashboardConfig {
            latency_threshold_ms: 500,
            ..DashboardConfig::default()
        };
        let view = dashboard(&config);
        assert_eq!(view.services.len(), 3);
        assert_eq!(view.series.len(), 10);
        assert!(view.alert.is_none());

        let view = dashboard(&DashboardConfig::default());
        let alert = view.alert.expect("default threshold raises alert");
        assert_eq!(alert.service, "auth-service");
        assert_eq!(view.metric, "service.latency.avg");
    }
}
