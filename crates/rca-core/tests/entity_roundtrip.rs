//! Serde roundtrip and JsonSchema validation tests for all entity types.

use chrono::Utc;
use schemars::schema_for;
use rca_core::entities::*;
use rca_core::enums::*;
use rca_core::responses::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            pretty_assertions::assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn sample_item() -> ResultItem {
    ResultItem::new(
        "INC-2024-002",
        ResultCategory::Incident,
        "Authentication Service Latency",
        "High latency in user authentication flows",
        87,
    )
    .occurred_at("23 minutes ago")
}

roundtrip_and_validate!(
    user_turn_roundtrip,
    ChatTurn,
    ChatTurn::user(
        "trn-000002",
        "What incidents happened in the last 24 hours?",
        Utc::now()
    )
);

roundtrip_and_validate!(
    assistant_turn_roundtrip,
    ChatTurn,
    ChatTurn::assistant(
        "trn-000003",
        "I found 5 incidents in the last 24 hours. Here's a breakdown:",
        vec![sample_item()],
        Utc::now(),
    )
);

roundtrip_and_validate!(
    incident_roundtrip,
    Incident,
    Incident {
        id: "INC-2024-005".into(),
        title: "Redis Cache Miss Spike".into(),
        severity: Severity::Medium,
        status: IncidentStatus::Resolved,
        occurred_at: "4 hours ago".into(),
        ai_insight: "Cache invalidation pattern optimized, reducing miss rate by 60%".into(),
        service: "cache-service".into(),
    }
);

roundtrip_and_validate!(
    transcript_roundtrip,
    TranscriptResponse,
    TranscriptResponse {
        conversation_id: "cnv-000001".into(),
        turns: vec![
            ChatTurn::assistant("trn-000001", "Hello!", Vec::new(), Utc::now()),
            ChatTurn::user("trn-000002", "hi", Utc::now()),
        ],
        pending: true,
    }
);

roundtrip_and_validate!(
    ask_response_fallback_roundtrip,
    AskResponse,
    AskResponse {
        query: "hello".into(),
        matched_rule: None,
        text: "Could you be more specific?".into(),
        attachments: Vec::new(),
    }
);

roundtrip_and_validate!(
    dashboard_roundtrip,
    DashboardResponse,
    DashboardResponse {
        services: vec![ServiceCard {
            service: "auth-service".into(),
            health: ServiceHealth::Critical,
            uptime: "99.2%".into(),
            request_rate: 1250,
            error_rate: 2.1,
        }],
        metric: "service.latency.avg".into(),
        series: vec![MetricPoint {
            timestamp: "12:30".into(),
            value_ms: 420,
        }],
        alert: Some(SpikeAlert {
            service: "auth-service".into(),
            metric: "service.latency.avg".into(),
            timestamp: "12:30".into(),
            peak_ms: 420,
            threshold_ms: 100,
            percent_above_baseline: 320,
        }),
    }
);

roundtrip_and_validate!(
    analysis_response,
    AnalysisResponse,
    AnalysisResponse {
        spike: SpikeEvent {
            metric: "service.latency.avg".into(),
            service: "auth-service".into(),
            at: Utc::now(),
            value_ms: 420,
        },
        workflow: vec![WorkflowStep {
            id: "detection".into(),
            name: "Spike Detection".into(),
            description: "Monitoring system detected latency anomaly".into(),
            status: StepStatus::Completed,
        }],
        timeline: vec![TimelineEvent {
            id: "1".into(),
            timestamp: "12:30:00".into(),
            kind: TimelineKind::Spike,
            title: "Latency Spike Detected".into(),
            description: "auth-service latency reached 420ms".into(),
            status: StepStatus::Completed,
        }],
        root_cause: KnownIssue {
            id: "issue_101".into(),
            title: "Null pointer on login".into(),
            resolution: "Initialize session variable".into(),
        },
        code: CodeSnippet {
            file: "AuthController.java".into(),
            function: "login()".into(),
            snippet: "if (session == null) throw new NullPointerException();".into(),
        },
        logs: vec![LogLine::new(Utc::now(), "WARN: DB connection pool timeout")],
        confidence: 87,
    }
);

#[test]
fn confidence_schema_rejects_out_of_range() {
    let schema = serde_json::to_value(schema_for!(ResultItem)).unwrap();
    let mut instance = serde_json::to_value(sample_item()).unwrap();
    instance["confidence"] = serde_json::json!(101);
    let errors = validate_against_schema(&schema, &instance);
    assert!(!errors.is_empty(), "confidence 101 should violate schema");
}

#[test]
fn unknown_category_fails_to_deserialize() {
    let json = r#"{"id":"x","category":"alert","title":"t","description":"d","confidence":1}"#;
    let parsed: Result<ResultItem, _> = serde_json::from_str(json);
    assert!(parsed.is_err());
}
