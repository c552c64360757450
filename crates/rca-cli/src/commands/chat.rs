use std::io::{self, BufRead, Write};

use rca_assistant::samples::{self, InputDraft, SAMPLE_QUERIES, SampleChoice};
use rca_assistant::{Conversation, ConversationOptions, SubmitOutcome};
use rca_config::{AssistantConfig, RcaConfig};
use rca_core::entities::ChatTurn;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output;

const HELP: &str = "Ask a question, or use /samples, /sample <n>, /send, /history, /quit.";

/// Handle `rca chat`.
pub async fn handle(config: &RcaConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut terminal = Terminal::new(stdin.lock(), io::stdout().lock());
    let mut session = ChatSession::new(&config.assistant, flags.format);
    session.run(&mut terminal).await
}

/// Line-oriented stdin/stdout pair.
struct Terminal<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    const fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Print `prompt` and read one line without its terminator. `None` at EOF.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    /// Anything but `y` or `yes` is a no, including EOF and read errors.
    fn ask_yes_no(&mut self, question: &str) -> bool {
        match self.prompt(&format!("{question} [y/N] ")) {
            Ok(Some(answer)) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Ok(None) => false,
            Err(error) => {
                tracing::warn!(%error, "failed to read confirmation; treating as no");
                false
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum ChatCommand<'a> {
    Samples,
    Sample(&'a str),
    Send,
    History,
    Quit,
    Unknown(&'a str),
    Text(&'a str),
}

impl<'a> ChatCommand<'a> {
    fn parse(line: &'a str) -> Self {
        let Some(command) = line.trim().strip_prefix('/') else {
            return Self::Text(line);
        };
        let (name, rest) = command
            .split_once(char::is_whitespace)
            .map_or((command, ""), |(name, rest)| (name, rest.trim()));

        match name {
            "samples" => Self::Samples,
            "sample" => Self::Sample(rest),
            "send" => Self::Send,
            "history" => Self::History,
            "quit" | "exit" => Self::Quit,
            _ => Self::Unknown(name),
        }
    }
}

struct ChatSession {
    conversation: Conversation,
    draft: InputDraft,
    deep_analysis: bool,
    format: OutputFormat,
}

impl ChatSession {
    fn new(config: &AssistantConfig, format: OutputFormat) -> Self {
        Self {
            conversation: Conversation::new(ConversationOptions::from(config)),
            draft: InputDraft::default(),
            deep_analysis: config.deep_analysis_prompt,
            format,
        }
    }

    async fn run<R: BufRead, W: Write>(&mut self, terminal: &mut Terminal<R, W>) -> anyhow::Result<()> {
        for turn in self.conversation.turns() {
            print_turn(terminal, &turn)?;
        }
        terminal.say(HELP)?;

        while let Some(line) = terminal.prompt("> ")? {
            match ChatCommand::parse(&line) {
                ChatCommand::Quit => break,
                ChatCommand::Samples => {
                    for (index, query) in SAMPLE_QUERIES.iter().enumerate() {
                        terminal.say(&format!("  {}. {query}", index + 1))?;
                    }
                }
                ChatCommand::Sample(raw) => self.choose_sample(raw, terminal)?,
                ChatCommand::Send => {
                    let text = self.draft.take();
                    self.submit(&text, terminal).await?;
                }
                ChatCommand::History => self.history(terminal)?,
                ChatCommand::Unknown(name) => {
                    terminal.say(&format!("unknown command '/{name}'. {HELP}"))?;
                }
                ChatCommand::Text(text) => {
                    if self.deep_analysis && samples::is_deep_analysis(text) {
                        self.fill_draft(text, terminal)?;
                    } else {
                        self.submit(text, terminal).await?;
                    }
                }
            }
        }

        tracing::debug!(conversation = %self.conversation.id(), turns = self.conversation.len(), "chat ended");
        Ok(())
    }

    fn choose_sample<R: BufRead, W: Write>(
        &mut self,
        raw: &str,
        terminal: &mut Terminal<R, W>,
    ) -> io::Result<()> {
        let chosen = raw.parse::<usize>().ok().and_then(samples::sample);
        match chosen {
            Some(query) => self.fill_draft(query, terminal),
            None => terminal.say(&format!(
                "pick a sample between 1 and {}",
                SAMPLE_QUERIES.len()
            )),
        }
    }

    fn fill_draft<R: BufRead, W: Write>(
        &mut self,
        query: &str,
        terminal: &mut Terminal<R, W>,
    ) -> io::Result<()> {
        let mut confirm = |question: &str| terminal.ask_yes_no(question);
        let choice = self.draft.choose_sample(query, self.deep_analysis, &mut confirm);
        match choice {
            SampleChoice::Filled | SampleChoice::RemediationFilled => {
                terminal.say("draft:")?;
                terminal.say(self.draft.text())?;
                terminal.say("(/send to submit)")
            }
            SampleChoice::Declined => Ok(()),
        }
    }

    /// Submit and wait for the reply before reading more input.
    async fn submit<R: BufRead, W: Write>(
        &self,
        text: &str,
        terminal: &mut Terminal<R, W>,
    ) -> io::Result<()> {
        match self.conversation.submit(text) {
            SubmitOutcome::Accepted { .. } => {
                terminal.say("assistant is analyzing...")?;
                self.conversation.settled().await;
                match self.conversation.last_turn() {
                    Some(turn) => print_turn(terminal, &turn),
                    None => Ok(()),
                }
            }
            SubmitOutcome::RejectedBlank => terminal.say("(nothing to send)"),
            SubmitOutcome::RejectedPending => terminal.say("(still waiting for the last answer)"),
            SubmitOutcome::RejectedNoRuntime => terminal.say("(assistant unavailable)"),
        }
    }

    fn history<R: BufRead, W: Write>(&self, terminal: &mut Terminal<R, W>) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Table => {
                for turn in self.conversation.turns() {
                    print_turn(terminal, &turn)?;
                }
            }
            OutputFormat::Json | OutputFormat::Raw => {
                let rendered = output::render(&self.conversation.snapshot(), self.format)?;
                terminal.say(&rendered)?;
            }
        }
        Ok(())
    }
}

fn print_turn<R: BufRead, W: Write>(terminal: &mut Terminal<R, W>, turn: &ChatTurn) -> io::Result<()> {
    terminal.say(&format!("{}> {}", turn.role, turn.text))?;
    for item in &turn.attachments {
        let when = item
            .occurred_at
            .as_deref()
            .map_or_else(String::new, |at| format!(", {at}"));
        terminal.say(&format!(
            "  [{}] {} ({}% confidence{when})",
            item.category, item.title, item.confidence
        ))?;
        terminal.say(&format!("      {}", item.description))?;
    }
    Ok(())
}
