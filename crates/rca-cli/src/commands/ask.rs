use rca_assistant::classify;
use rca_core::responses::AskResponse;

use crate::cli::root_commands::AskArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// Handle `rca ask`. Answers immediately; the chat delay does not apply.
pub fn handle(args: &AskArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = respond(&args.text());

    match flags.format {
        OutputFormat::Table => {
            println!("{}", response.text);
            if !response.attachments.is_empty() {
                println!();
                output(&response.attachments, flags.format)?;
            }
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output(&response, flags.format),
    }
}

fn respond(query: &str) -> AskResponse {
    classify(query).into_response(query)
}
