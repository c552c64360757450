use rca_assistant::analysis;
use rca_core::entities::{LogLine, SpikeEvent};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// Handle `rca analysis`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let view = analysis::analysis();

    match flags.format {
        OutputFormat::Table => {
            println!("{}", spike_line(&view.spike));
            println!();
            output(&view.workflow, flags.format)?;
            println!();
            output(&view.timeline, flags.format)?;
            println!();
            println!(
                "Root cause ({}% confidence): {} [{}]",
                view.confidence, view.root_cause.title, view.root_cause.id
            );
            println!("Fix: {}", view.root_cause.resolution);
            println!();
            println!("{} in {}", view.code.function, view.code.file);
            println!("    {}", view.code.snippet);
            println!();
            for line in &view.logs {
                println!("{}", log_line(line));
            }
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output(&view, flags.format),
    }
}

fn spike_line(spike: &SpikeEvent) -> String {
    format!(
        "{} {} reached {}ms at {}",
        spike.service,
        spike.metric,
        spike.value_ms,
        spike.at.format("%Y-%m-%d %H:%M:%S UTC"),
    )
}

fn log_line(line: &LogLine) -> String {
    format!(
        "{} {:<7} {}",
        line.at.format("%H:%M:%S"),
        line.level.as_str().to_uppercase(),
        line.text
    )
}

#[cfg(test)]
mod tests {
    use rca_assistant::analysis;

    use super::{log_line, spike_line};
    use crate::cli::OutputFormat;
    use crate::output::render;

    #[test]
    fn spike_line_names_service_and_peak() {
        assert_eq!(
            spike_line(&analysis::spike()),
            "auth-service service.latency.avg reached 420ms at 2025-01-27 12:30:00 UTC"
        );
    }

    #[test]
    fn log_lines_lead_with_time_and_level() {
        let rendered: Vec<String> = analysis::logs().iter().map(log_line).collect();
        assert_eq!(
            rendered,
            [
                "12:25:30 ERROR   NullPointerException in AuthController at line 45",
                "12:26:10 WARNING WARN: DB connection pool timeout exceeded for user login",
            ]
        );
    }

    #[test]
    fn json_output_carries_every_section() {
        let rendered = render(&analysis::analysis(), OutputFormat::Json).expect("json renders");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");
        for key in ["spike", "workflow", "timeline", "root_cause", "code", "logs", "confidence"] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        assert_eq!(value["timeline"][0]["kind"], "spike");
        assert_eq!(value["confidence"], 87);
    }
}
