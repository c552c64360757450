use rca_assistant::samples::{SAMPLE_QUERIES, is_deep_analysis};
use rca_config::RcaConfig;
use rca_core::responses::SampleQuery;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `rca samples`.
pub fn handle(config: &RcaConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&sample_queries(config.assistant.deep_analysis_prompt), flags.format)
}

fn sample_queries(deep_analysis: bool) -> Vec<SampleQuery> {
    (1u32..)
        .zip(SAMPLE_QUERIES)
        .map(|(index, query)| SampleQuery {
            index,
            query: query.to_string(),
            needs_confirmation: deep_analysis && is_deep_analysis(query),
        })
        .collect()
}
