// SPDX-License-Identifier: MIT OR Apache-2.0
//! Word prediction shell - interactive front end for the prediction simulation.
//!
//! Provides a readline-based interface that shows the context poem, accepts
//! prompts, and renders the predicted word with the vector table and a
//! terminal plot of the vector space.

pub mod cli;
pub mod input;
pub mod output;
pub mod style;

use std::path::{Path, PathBuf};

use lexicon_store::{LexiconError, Scenario};
use rustyline::error::ReadlineError;
use rustyline::history::{DefaultHistory, History};
use rustyline::Editor;
use thiserror::Error;
use tracing::debug;
use word_predictor::{PredictionSession, Predictor};

use crate::cli::{Cli, OutputFormat, PlotView};
use crate::input::PredictHelper;
use crate::output::ScatterPlot;
use crate::style::{Icons, Theme};

/// Shell configuration options.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Path to history file (None disables persistence).
    pub history_file: Option<PathBuf>,
    /// Maximum number of history entries to keep.
    pub history_size: usize,
    /// Prompt string displayed before each input.
    pub prompt: String,
    /// Projection used by the vector space plot.
    pub view: PlotView,
    /// Plot grid width in cells.
    pub plot_width: usize,
    /// Plot grid height in cells.
    pub plot_height: usize,
    /// Force the plain theme and ASCII icons.
    pub no_color: bool,
    /// Show only the prediction panel after a prompt.
    pub quiet: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            history_file: dirs_home().map(|h| h.join(".predict_sim_history")),
            history_size: 1000,
            prompt: "> ".to_string(),
            view: PlotView::default(),
            plot_width: output::PLOT_WIDTH,
            plot_height: output::PLOT_HEIGHT,
            no_color: false,
            quiet: false,
        }
    }
}

/// Returns the user's home directory if available.
fn dirs_home() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

/// Result of executing a shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Command ran successfully with output.
    Output(String),
    /// Shell should exit.
    Exit,
    /// Help text to display.
    Help(String),
    /// Empty input (no-op).
    Empty,
    /// Error occurred.
    Error(String),
}

/// Action to take after processing a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopAction {
    /// Continue the shell loop.
    Continue,
    /// Exit the shell.
    Exit,
}

/// Errors that can occur in the shell.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShellError {
    /// Failed to initialize readline.
    #[error("Shell initialization failed: {0}")]
    Init(String),

    /// The scenario file could not be loaded.
    #[error("Failed to load scenario: {0}")]
    Lexicon(#[from] LexiconError),

    /// A prompt file could not be read.
    #[error("I/O error: {0}")]
    Io(String),
}

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

/// Interactive shell for the word prediction simulation.
pub struct Shell {
    poem: String,
    prompts: Vec<String>,
    predictor: Predictor,
    session: PredictionSession,
    config: ShellConfig,
    theme: Theme,
    icons: &'static Icons,
}

impl Shell {
    /// Creates a shell over the built-in scenario with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ShellConfig::default())
    }

    /// Creates a shell over the built-in scenario with custom configuration.
    #[must_use]
    pub fn with_config(config: ShellConfig) -> Self {
        Self::with_scenario(&Scenario::builtin(), config)
    }

    /// Creates a shell over the given scenario.
    #[must_use]
    pub fn with_scenario(scenario: &Scenario, config: ShellConfig) -> Self {
        let (theme, icons) = if config.no_color {
            (Theme::plain(), Icons::plain())
        } else {
            (Theme::auto(), Icons::auto())
        };
        Self {
            poem: scenario.poem.clone(),
            prompts: scenario.suggested_prompts(),
            predictor: Predictor::from_scenario(scenario),
            session: PredictionSession::new(),
            config,
            theme,
            icons,
        }
    }

    /// Creates a shell from parsed command-line arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if the `--lexicon` scenario file cannot be loaded.
    pub fn from_cli(cli: &Cli) -> Result<Self, ShellError> {
        let scenario = match &cli.lexicon {
            Some(path) => Scenario::load(path)?,
            None => Scenario::builtin(),
        };
        debug!(
            words = scenario.lexicon.len(),
            prompts = scenario.targets.len(),
            "scenario ready"
        );
        let config = ShellConfig {
            view: cli.view,
            plot_width: cli.plot_width,
            plot_height: cli.plot_height,
            no_color: cli.no_color,
            quiet: cli.quiet,
            ..ShellConfig::default()
        };
        Ok(Self::with_scenario(&scenario, config))
    }

    /// Returns the predictor for direct access.
    #[must_use]
    pub const fn predictor(&self) -> &Predictor {
        &self.predictor
    }

    /// Returns the current prediction session.
    #[must_use]
    pub const fn session(&self) -> &PredictionSession {
        &self.session
    }

    /// Returns the shell configuration.
    #[must_use]
    pub const fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Executes a single line and returns the result.
    ///
    /// Built-in commands are matched case-insensitively; anything else is a prompt.
    pub fn execute(&mut self, input: &str) -> CommandResult {
        let trimmed = input.trim();

        if trimmed.is_empty() {
            return CommandResult::Empty;
        }

        let lower = trimmed.to_lowercase();
        match lower.as_str() {
            "exit" | "quit" | "\\q" => return CommandResult::Exit,
            "help" | "\\h" | "\\?" => return CommandResult::Help(self.help_text()),
            "clear" | "\\c" => {
                self.session.reset();
                return CommandResult::Output(CLEAR_SCREEN.to_string());
            },
            "poem" | "\\p" => {
                return CommandResult::Output(format!(
                    "{}\n\n{}",
                    output::format_poem(&self.poem, &self.theme),
                    self.prompts_text()
                ));
            },
            "prompts" | "\\s" => return CommandResult::Output(self.prompts_text()),
            "vectors" | "\\v" => return CommandResult::Output(self.vectors_text()),
            "plot" | "\\g" => return CommandResult::Output(self.plot_text()),
            _ => {},
        }

        if let Some(prompt) = rank_argument(trimmed, &lower) {
            return self.rank(prompt);
        }

        self.predict(trimmed, OutputFormat::Table)
    }

    /// Runs a prediction, recording it in the session, and formats the outcome.
    pub fn predict(&mut self, prompt: &str, format: OutputFormat) -> CommandResult {
        self.session.submit(&self.predictor, prompt);

        if format == OutputFormat::Json {
            let outcome = match (self.session.result(), self.session.error()) {
                (Some(result), _) => Ok(result.clone()),
                (None, Some(e)) => Err(e.clone()),
                (None, None) => return CommandResult::Empty,
            };
            let record = output::format_json(&outcome);
            return if outcome.is_ok() {
                CommandResult::Output(record)
            } else {
                CommandResult::Error(record)
            };
        }

        let panel = output::format_state(
            self.session.state(),
            &self.prompts,
            &self.theme,
            self.icons,
        );
        if self.session.error().is_some() {
            return CommandResult::Error(panel);
        }
        if self.config.quiet {
            return CommandResult::Output(panel);
        }
        CommandResult::Output(format!(
            "{panel}\n\n{}\n\n{}",
            self.vectors_text(),
            self.plot_text()
        ))
    }

    fn rank(&self, prompt: &str) -> CommandResult {
        match self.predictor.rank(prompt) {
            Ok(candidates) => CommandResult::Output(output::format_rank(
                prompt.trim(),
                &candidates,
                &self.theme,
            )),
            Err(e) => CommandResult::Error(output::format_error(
                &e,
                &self.prompts,
                &self.theme,
                self.icons,
            )),
        }
    }

    fn prompts_text(&self) -> String {
        output::format_prompts(&self.prompts, &self.theme, self.icons)
    }

    fn vectors_text(&self) -> String {
        output::format_vector_table(
            self.predictor.lexicon(),
            self.session.highlighted_word(),
            self.session.target(),
            &self.theme,
            self.icons,
        )
    }

    fn plot_text(&self) -> String {
        ScatterPlot::new(self.config.view)
            .with_size(self.config.plot_width, self.config.plot_height)
            .render(
                self.predictor.lexicon(),
                self.session.highlighted_word(),
                self.session.target(),
                &self.theme,
                self.icons,
            )
    }

    /// Returns the help text.
    #[must_use]
    pub fn help_text(&self) -> String {
        output::format_help(&self.theme)
    }

    /// Returns the screen shown when the interactive shell starts.
    #[must_use]
    pub fn intro_text(&self) -> String {
        if self.config.quiet {
            return output::compact_banner(Self::version(), &self.theme);
        }
        format!(
            "{}\n{}\n\n{}\n\n{}\n",
            output::welcome_banner(Self::version(), &self.theme),
            output::format_poem(&self.poem, &self.theme),
            self.prompts_text(),
            output::format_state(
                self.session.state(),
                &self.prompts,
                &self.theme,
                self.icons
            )
        )
    }

    /// Processes a command result and returns whether to continue the loop.
    #[must_use]
    pub fn process_result(result: &CommandResult) -> LoopAction {
        match result {
            CommandResult::Output(text) | CommandResult::Help(text) => {
                println!("{text}");
                LoopAction::Continue
            },
            CommandResult::Error(text) => {
                eprintln!("{text}");
                LoopAction::Continue
            },
            CommandResult::Exit => {
                println!("Goodbye!");
                LoopAction::Exit
            },
            CommandResult::Empty => LoopAction::Continue,
        }
    }

    /// Returns the shell version string.
    #[must_use]
    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// Predicts one prompt non-interactively and prints the outcome.
    ///
    /// JSON records always go to stdout. Returns whether the prediction succeeded.
    pub fn run_once(&mut self, prompt: &str, format: OutputFormat) -> bool {
        let result = self.predict(prompt, format);
        let succeeded = !matches!(result, CommandResult::Error(_));
        match (format, result) {
            (OutputFormat::Json, CommandResult::Output(text) | CommandResult::Error(text)) => {
                println!("{text}");
            },
            (_, result) => {
                let _ = Self::process_result(&result);
            },
        }
        succeeded
    }

    /// Predicts each non-blank line of a file.
    ///
    /// Returns whether every prediction succeeded.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn run_file(&mut self, path: &Path, format: OutputFormat) -> Result<bool, ShellError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ShellError::Io(format!("{}: {e}", path.display())))?;

        let mut all_succeeded = true;
        for line in contents.lines().filter(|l| !l.trim().is_empty()) {
            all_succeeded &= self.run_once(line, format);
        }
        Ok(all_succeeded)
    }

    /// Runs the interactive shell loop.
    ///
    /// # Errors
    ///
    /// Returns an error if readline initialization fails.
    pub fn run(&mut self) -> Result<(), ShellError> {
        let mut editor: Editor<PredictHelper, DefaultHistory> =
            Editor::new().map_err(|e| ShellError::Init(e.to_string()))?;
        editor.set_helper(Some(PredictHelper::new(self.prompts.clone())));
        if let Some(ref path) = self.config.history_file {
            let _ = editor.load_history(path);
        }
        editor
            .history_mut()
            .set_max_len(self.config.history_size)
            .map_err(|e| ShellError::Init(e.to_string()))?;

        println!("{}", self.intro_text());

        loop {
            match editor.readline(&self.config.prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = editor.add_history_entry(line.trim());
                    }
                    let result = self.execute(&line);
                    if Self::process_result(&result) == LoopAction::Exit {
                        break;
                    }
                },
                Err(ReadlineError::Interrupted) => println!("^C"),
                Err(ReadlineError::Eof) => {
                    println!("Goodbye!");
                    break;
                },
                Err(err) => {
                    eprintln!("Error: {err}");
                    break;
                },
            }
        }
        if let Some(ref path) = self.config.history_file {
            let _ = editor.save_history(path);
        }
        Ok(())
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts the prompt from `rank <prompt>` or `\r <prompt>`.
fn rank_argument<'a>(trimmed: &'a str, lower: &str) -> Option<&'a str> {
    ["rank", "\\r"].into_iter().find_map(|cmd| {
        let rest = lower.strip_prefix(cmd)?;
        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            trimmed.get(cmd.len()..)
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexicon_store::{Lexicon, PromptTargets, Vector};
    use std::io::Write as _;

    fn test_config() -> ShellConfig {
        ShellConfig {
            history_file: None,
            no_color: true,
            ..ShellConfig::default()
        }
    }

    fn shell() -> Shell {
        Shell::with_config(test_config())
    }

    fn ok_text(result: CommandResult) -> String {
        match result {
            CommandResult::Output(text) => text,
            other => panic!("expected output, got {other:?}"),
        }
    }

    fn err_text(result: CommandResult) -> String {
        match result {
            CommandResult::Error(text) => text,
            other => panic!("expected error, got {other:?}"),
        }
    }

    #[test]
    fn test_shell_creation() {
        let shell = Shell::new();
        assert!(!shell.config.prompt.is_empty());
        assert_eq!(shell.config.history_size, 1000);
        assert!(shell.session().is_idle());
    }

    #[test]
    fn test_shell_with_config() {
        let config = ShellConfig {
            history_file: None,
            history_size: 500,
            prompt: "predict> ".to_string(),
            view: PlotView::NatureAction,
            plot_width: 32,
            plot_height: 12,
            no_color: true,
            quiet: true,
        };
        let shell = Shell::with_config(config);
        assert_eq!(shell.config().prompt, "predict> ");
        assert_eq!(shell.config().history_size, 500);
        assert_eq!(shell.config().view, PlotView::NatureAction);
    }

    #[test]
    fn test_default_config() {
        let config = ShellConfig::default();
        assert_eq!(config.prompt, "> ");
        assert_eq!(config.view, PlotView::Isometric);
        assert!(!config.quiet);
        if let Some(path) = config.history_file {
            assert!(path.ends_with(".predict_sim_history"));
        }
    }

    #[test]
    fn test_empty_input() {
        let mut shell = shell();
        assert_eq!(shell.execute(""), CommandResult::Empty);
        assert_eq!(shell.execute("   "), CommandResult::Empty);
        assert_eq!(shell.execute("\t\n"), CommandResult::Empty);
        assert!(shell.session().is_idle());
    }

    #[test]
    fn test_exit_commands() {
        let mut shell = shell();
        assert_eq!(shell.execute("exit"), CommandResult::Exit);
        assert_eq!(shell.execute("quit"), CommandResult::Exit);
        assert_eq!(shell.execute("\\q"), CommandResult::Exit);
        assert_eq!(shell.execute("EXIT"), CommandResult::Exit);
    }

    #[test]
    fn test_help_commands() {
        let mut shell = shell();
        for cmd in ["help", "\\h", "\\?", "HELP"] {
            assert!(matches!(shell.execute(cmd), CommandResult::Help(_)));
        }
        assert!(shell.help_text().contains("rank <prompt>"));
    }

    #[test]
    fn test_predict_builtin_prompt() {
        let mut shell = shell();
        let text = ok_text(shell.execute("Bunga di"));
        assert!(text.contains("Bunga di taman"));
        assert!(text.contains("Word 'taman' was chosen"));
        assert!(text.contains("Vector Dictionary"));
        assert_eq!(shell.session().highlighted_word(), Some("taman"));
    }

    #[test]
    fn test_predict_trims_prompt() {
        let mut shell = shell();
        let text = ok_text(shell.execute("  Hati yang  "));
        assert!(text.contains("Hati yang rindu"));
    }

    #[test]
    fn test_predict_menyentuh_picks_hati() {
        let mut shell = shell();
        let text = ok_text(shell.execute("Menyentuh"));
        assert!(text.contains("Menyentuh hati"));
        assert!(text.contains("(score 0.0735)"));
    }

    #[test]
    fn test_unknown_prompt() {
        let mut shell = shell();
        let text = err_text(shell.execute("not a real prompt"));
        assert!(text.contains("has no predefined target context vector"));
        assert!(text.contains("Suggested prompts:"));
        assert!(shell.session().error().is_some());
        assert!(shell.session().result().is_none());
    }

    #[test]
    fn test_prompt_lookup_is_case_sensitive() {
        let mut shell = shell();
        let text = err_text(shell.execute("bunga di"));
        assert!(text.contains("\"bunga di\""));
    }

    #[test]
    fn test_failure_clears_previous_result() {
        let mut shell = shell();
        let _ = shell.execute("Bunga di");
        assert!(shell.session().result().is_some());
        let _ = shell.execute("nope");
        assert!(shell.session().result().is_none());
        assert!(shell.session().target().is_none());
    }

    #[test]
    fn test_quiet_shows_only_panel() {
        let mut shell = Shell::with_config(ShellConfig {
            quiet: true,
            ..test_config()
        });
        let text = ok_text(shell.execute("Wanginya harum"));
        assert!(text.contains("Wanginya harum semerbak"));
        assert!(!text.contains("Vector Dictionary"));
    }

    #[test]
    fn test_clear_resets_session() {
        let mut shell = shell();
        let _ = shell.execute("Bunga di");
        assert_eq!(
            shell.execute("clear"),
            CommandResult::Output(CLEAR_SCREEN.to_string())
        );
        assert!(shell.session().is_idle());
    }

    #[test]
    fn test_poem_and_prompts_commands() {
        let mut shell = shell();
        let text = ok_text(shell.execute("poem"));
        assert!(text.contains("Context Data (Poem)"));
        assert!(text.contains("Menyentuh"));
        let text = ok_text(shell.execute("\\s"));
        assert!(text.contains("* Bunga di"));
        assert!(text.contains("* Hati yang"));
    }

    #[test]
    fn test_vectors_command_follows_session() {
        let mut shell = shell();
        let before = ok_text(shell.execute("vectors"));
        assert!(!before.contains("Distance"));
        let _ = shell.execute("Menyentuh");
        let after = ok_text(shell.execute("\\v"));
        assert!(after.contains("Distance"));
        assert!(after.contains("-> hati"));
    }

    #[test]
    fn test_plot_command() {
        let mut shell = shell();
        let text = ok_text(shell.execute("plot"));
        assert!(text.contains("isometric"));
        let text = ok_text(shell.execute("\\G"));
        assert!(text.contains("isometric"));
    }

    #[test]
    fn test_plot_uses_configured_size() {
        let mut shell = Shell::with_config(ShellConfig {
            plot_width: 20,
            plot_height: 10,
            ..test_config()
        });
        let text = ok_text(shell.execute("plot"));
        let grid: Vec<&str> = text.lines().skip(1).take(10).collect();
        assert!(grid.iter().all(|l| l.chars().count() <= 20));
        assert!(text.lines().nth(11).is_some_and(|l| l.contains("word")));
    }

    #[test]
    fn test_rank_command() {
        let mut shell = shell();
        let text = ok_text(shell.execute("rank Menyentuh"));
        assert!(text.contains("Ranking for \"Menyentuh\""));
        let hati = text.find("hati");
        let rindu = text.find("rindu");
        assert!(hati.is_some() && hati < rindu);
        assert!(shell.session().is_idle());

        let text = ok_text(shell.execute("\\r Bunga di"));
        assert!(text.contains("taman"));
    }

    #[test]
    fn test_rank_errors() {
        let mut shell = shell();
        let text = err_text(shell.execute("rank"));
        assert!(text.contains("please enter a prompt"));
        let text = err_text(shell.execute("RANK unknown"));
        assert!(text.contains("\"unknown\""));
    }

    #[test]
    fn test_rank_argument() {
        assert_eq!(rank_argument("rank Bunga di", "rank bunga di"), Some(" Bunga di"));
        assert_eq!(rank_argument("\\r x", "\\r x"), Some(" x"));
        assert_eq!(rank_argument("rank", "rank"), Some(""));
        assert_eq!(rank_argument("ranked", "ranked"), None);
        assert_eq!(rank_argument("Bunga di", "bunga di"), None);
    }

    #[test]
    fn test_predict_json() {
        let mut shell = shell();
        let text = ok_text(shell.predict("Bunga di", OutputFormat::Json));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["predictedWord"], "taman");
        assert_eq!(value["fullSentence"], "Bunga di taman");

        let text = err_text(shell.predict("", OutputFormat::Json));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["error"], "please enter a prompt");
    }

    #[test]
    fn test_empty_lexicon_scenario() {
        let targets =
            PromptTargets::from_entries([("Bunga di", Vector::new(0.92, 0.15, 0.18))]).unwrap();
        let scenario = Scenario::new("", Lexicon::new(), targets);
        let mut shell = Shell::with_scenario(&scenario, test_config());
        let text = err_text(shell.execute("Bunga di"));
        assert!(text.contains("no candidate words available"));
    }

    #[test]
    fn test_run_once_reports_success() {
        let mut shell = shell();
        assert!(shell.run_once("Hati yang", OutputFormat::Json));
        assert!(!shell.run_once("missing", OutputFormat::Json));
        assert!(!shell.run_once("   ", OutputFormat::Table));
    }

    #[test]
    fn test_run_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Bunga di\n\n   \nHati yang").unwrap();
        let mut shell = shell();
        assert!(shell.run_file(file.path(), OutputFormat::Json).unwrap());
        assert_eq!(shell.session().highlighted_word(), Some("rindu"));

        writeln!(file, "unknown").unwrap();
        assert!(!shell.run_file(file.path(), OutputFormat::Json).unwrap());
    }

    #[test]
    fn test_run_file_missing() {
        let mut shell = shell();
        let err = shell
            .run_file(Path::new("/nonexistent/prompts.txt"), OutputFormat::Table)
            .unwrap_err();
        assert!(matches!(err, ShellError::Io(_)));
    }

    #[test]
    fn test_from_cli_builtin() {
        use clap::Parser;
        let cli = Cli::parse_from([
            "predict-sim",
            "--no-color",
            "-q",
            "--view",
            "nature-action",
            "--plot-width",
            "30",
        ]);
        let shell = Shell::from_cli(&cli).unwrap();
        assert!(shell.config().quiet);
        assert_eq!(shell.config().view, PlotView::NatureAction);
        assert_eq!(shell.config().plot_width, 30);
        assert_eq!(shell.config().plot_height, output::PLOT_HEIGHT);
        assert_eq!(shell.predictor().lexicon().len(), 14);
    }

    #[test]
    fn test_from_cli_scenario_file() {
        use clap::Parser;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"poem":"Langit biru","words":[{{"word":"awan","vector":[0.9,0.1,0.1]}}],
            "prompts":[{{"prompt":"Di langit","target":[0.8,0.1,0.1]}}]}}"#
        )
        .unwrap();
        let path = file.path().to_string_lossy().to_string();
        let cli = Cli::parse_from(["predict-sim", "--no-color", "--lexicon", path.as_str()]);
        let mut shell = Shell::from_cli(&cli).unwrap();
        let text = ok_text(shell.execute("Di langit"));
        assert!(text.contains("Di langit awan"));
        assert!(ok_text(shell.execute("poem")).contains("Langit biru"));
    }

    #[test]
    fn test_from_cli_bad_scenario() {
        use clap::Parser;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let path = file.path().to_string_lossy().to_string();
        let cli = Cli::parse_from(["predict-sim", "--lexicon", path.as_str()]);
        let err = Shell::from_cli(&cli).err().unwrap();
        assert!(matches!(err, ShellError::Lexicon(_)));
        assert!(err.to_string().starts_with("Failed to load scenario"));
    }

    #[test]
    fn test_intro_text() {
        let shell = shell();
        let text = shell.intro_text();
        assert!(text.contains("LLM Word Prediction Simulation"));
        assert!(text.contains(output::IDLE_PLACEHOLDER));
        assert!(text.contains("Or try one of these prompts:"));

        let quiet = Shell::with_config(ShellConfig {
            quiet: true,
            ..test_config()
        });
        assert!(!quiet.intro_text().contains(output::IDLE_PLACEHOLDER));
    }

    #[test]
    fn test_shell_error_display() {
        let err = ShellError::Init("test error".to_string());
        assert_eq!(err.to_string(), "Shell initialization failed: test error");
        let err = ShellError::Io("x: not found".to_string());
        assert_eq!(err.to_string(), "I/O error: x: not found");
        let err: ShellError = LexiconError::EmptyWord.into();
        assert!(matches!(err, ShellError::Lexicon(LexiconError::EmptyWord)));
    }

    #[test]
    fn test_process_result() {
        assert_eq!(
            Shell::process_result(&CommandResult::Output("x".to_string())),
            LoopAction::Continue
        );
        assert_eq!(
            Shell::process_result(&CommandResult::Help("h".to_string())),
            LoopAction::Continue
        );
        assert_eq!(
            Shell::process_result(&CommandResult::Error("e".to_string())),
            LoopAction::Continue
        );
        assert_eq!(Shell::process_result(&CommandResult::Empty), LoopAction::Continue);
        assert_eq!(Shell::process_result(&CommandResult::Exit), LoopAction::Exit);
    }

    #[test]
    fn test_shell_version() {
        assert!(!Shell::version().is_empty());
    }
}
