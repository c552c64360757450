//! Canned replies returned by the classifier.
//!
//! Each function builds a fresh [`Reply`]; the text and card order are fixed.

use rca_core::entities::ResultItem;
use rca_core::enums::ResultCategory;

use crate::classifier::{Reply, Topic};

pub const INCIDENT_LIST_TEXT: &str = "I found 5 incidents in the last 24 hours. Here's a breakdown:";
pub const SLO_COMPLIANCE_TEXT: &str = "Here's the SLO compliance status for auth-service:";
pub const ROOT_CAUSE_TEXT: &str = "I analyzed the latency spike at 12:30. Here's what I found:";
pub const MTTR_TREND_TEXT: &str = "MTTR trend analysis for this week:";
pub const FALLBACK_TEXT: &str = "I understand you're asking about incidents and system performance. Could you be more specific? For example, you can ask about specific time periods, services, or metrics.";

#[must_use]
pub fn incident_list() -> Reply {
    Reply::matched(
        Topic::IncidentList,
        INCIDENT_LIST_TEXT,
        vec![
            ResultItem::new(
                "INC-2024-001",
                ResultCategory::Incident,
                "Snowflake Query Performance Degradation",
                "Critical incident affecting data warehouse performance",
                95,
            )
            .occurred_at("5 minutes ago"),
            ResultItem::new(
                "INC-2024-002",
                ResultCategory::Incident,
                "Authentication Service Latency",
                "High latency in user authentication flows",
                87,
            )
            .occurred_at("23 minutes ago"),
            ResultItem::new(
                "INC-2024-003",
                ResultCategory::Incident,
                "Payment Gateway Timeout",
                "Intermittent timeouts in payment processing",
                92,
            )
            .occurred_at("2 hours ago"),
        ],
    )
}

#[must_use]
pub fn slo_compliance() -> Reply {
    Reply::matched(
        Topic::SloCompliance,
        SLO_COMPLIANCE_TEXT,
        vec![
            ResultItem::new(
                "slo-auth-1",
                ResultCategory::Slo,
                "Authentication Response Time",
                "Target: <200ms, Current: 185ms (92.5% compliance)",
                94,
            ),
            ResultItem::new(
                "slo-auth-2",
                ResultCategory::Slo,
                "Authentication Success Rate",
                "Target: >99.9%, Current: 99.2% (Below target)",
                98,
            ),
        ],
    )
}

#[must_use]
pub fn root_cause() -> Reply {
    Reply::matched(
        Topic::RootCause,
        ROOT_CAUSE_TEXT,
        vec![
            ResultItem::new(
                "analysis-1",
                ResultCategory::Insight,
                "Root Cause: Null Pointer Exception",
                "AuthController threw NullPointerException due to uninitialized session variable",
                87,
            ),
            ResultItem::new(
                "metric-1",
                ResultCategory::Metric,
                "Latency Impact",
                "Peak latency reached 420ms (320% above baseline)",
                100,
            ),
        ],
    )
}

#[must_use]
pub fn mttr_trend() -> Reply {
    Reply::matched(
        Topic::MttrTrend,
        MTTR_TREND_TEXT,
        vec![
            ResultItem::new(
                "mttr-1",
                ResultCategory::Metric,
                "Average MTTR",
                "12 minutes (improved from 17 minutes last week)",
                96,
            ),
            ResultItem::new(
                "mttr-2",
                ResultCategory::Insight,
                "Improvement Driver",
                "AI-powered root cause analysis reduced investigation time by 40%",
                89,
            ),
        ],
    )
}

/// Reply for queries no rule recognizes. Carries no cards.
#[must_use]
pub fn fallback() -> Reply {
    Reply {
        topic: None,
        text: FALLBACK_TEXT.to_string(),
        attachments: Vec::new(),
    }
}
