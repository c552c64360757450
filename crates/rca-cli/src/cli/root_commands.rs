use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Answer one question with the scripted classifier.
    Ask(AskArgs),
    /// Interactive incident Q&A session.
    Chat,
    /// List the suggested questions.
    Samples,
    /// List incidents from the catalog.
    Incidents(IncidentsArgs),
    /// Service health, latency series, and spike alert.
    Dashboard,
    /// Canned root-cause walkthrough for the 12:30 auth-service spike.
    Analysis,
}

#[derive(Clone, Debug, Args)]
pub struct AskArgs {
    /// Question text. Multiple words are joined with spaces.
    #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
    pub query: Vec<String>,
}

impl AskArgs {
    #[must_use]
    pub fn text(&self) -> String {
        self.query.join(" ")
    }
}

#[derive(Clone, Debug, Args)]
pub struct IncidentsArgs {
    /// Only incidents with this status (active, investigating, resolved).
    #[arg(long)]
    pub status: Option<String>,
    /// Only incidents with this severity (critical, high, medium, low).
    #[arg(long)]
    pub severity: Option<String>,
    /// Max incidents to return (overrides the global --limit).
    #[arg(long = "max")]
    pub limit: Option<u32>,
}
