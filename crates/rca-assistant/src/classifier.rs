//! Keyword classifier for free-text questions.
//!
//! Rules are evaluated top to bottom and the first rule whose keywords all
//! occur in the lowercased query wins. Anything else gets the fallback reply.
//!
//! ```text
//! "incident" + "24 hours" → incident list
//! "slo"      + "auth"     → SLO compliance
//! "latency"  + "spike"    → root cause
//! "mttr"     + "trend"    → MTTR trend
//! otherwise               → fallback
//! ```

use std::fmt;

use rca_core::entities::ResultItem;
use rca_core::responses::AskResponse;

use crate::bundles;

/// Topic of a matched keyword rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    IncidentList,
    SloCompliance,
    RootCause,
    MttrTrend,
}

impl Topic {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IncidentList => "incident_list",
            Self::SloCompliance => "slo_compliance",
            Self::RootCause => "root_cause",
            Self::MttrTrend => "mttr_trend",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary text plus ordered result cards for one assistant answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// `None` for the fallback reply.
    pub topic: Option<Topic>,
    pub text: String,
    pub attachments: Vec<ResultItem>,
}

impl Reply {
    pub(crate) fn matched(topic: Topic, text: &str, attachments: Vec<ResultItem>) -> Self {
        Self {
            topic: Some(topic),
            text: text.to_string(),
            attachments,
        }
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.topic.is_none()
    }

    /// Shape used by `rca ask`.
    #[must_use]
    pub fn into_response(self, query: &str) -> AskResponse {
        AskResponse {
            query: query.to_string(),
            matched_rule: self.topic.map(|topic| topic.as_str().to_string()),
            text: self.text,
            attachments: self.attachments,
        }
    }
}

/// One row of the rule table: every keyword must be present.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub topic: Topic,
    /// Lowercase substrings, all required.
    pub keywords: &'static [&'static str],
    pub bundle: fn() -> Reply,
}

impl KeywordRule {
    /// `lowered` must already be lowercase.
    #[must_use]
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().all(|keyword| lowered.contains(keyword))
    }
}

/// The shipped rule table, in evaluation order.
pub const DEFAULT_RULES: &[KeywordRule] = &[
    KeywordRule {
        topic: Topic::IncidentList,
        keywords: &["incident", "24 hours"],
        bundle: bundles::incident_list,
    },
    KeywordRule {
        topic: Topic::SloCompliance,
        keywords: &["slo", "auth"],
        bundle: bundles::slo_compliance,
    },
    KeywordRule {
        topic: Topic::RootCause,
        keywords: &["latency", "spike"],
        bundle: bundles::root_cause,
    },
    KeywordRule {
        topic: Topic::MttrTrend,
        keywords: &["mttr", "trend"],
        bundle: bundles::mttr_trend,
    },
];

/// Ordered, first-match-wins rule evaluator.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<KeywordRule>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(DEFAULT_RULES.to_vec())
    }
}

impl Classifier {
    #[must_use]
    pub const fn new(rules: Vec<KeywordRule>) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    /// First rule matching `query`, if any.
    #[must_use]
    pub fn matching_rule(&self, query: &str) -> Option<&KeywordRule> {
        let lowered = query.to_lowercase();
        self.rules.iter().find(|rule| rule.matches(&lowered))
    }

    /// Map a query to its reply. Total over all strings.
    #[must_use]
    pub fn classify(&self, query: &str) -> Reply {
        match self.matching_rule(query) {
            Some(rule) => {
                tracing::debug!(topic = %rule.topic, "query matched keyword rule");
                (rule.bundle)()
            }
            None => {
                tracing::debug!("query matched no keyword rule; using fallback");
                bundles::fallback()
            }
        }
    }
}

/// Classify with the shipped rule table.
#[must_use]
pub fn classify(query: &str) -> Reply {
    Classifier::default().classify(query)
}
