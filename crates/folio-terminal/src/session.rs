//! A shell session: submission, dispatch, and the timed task runner.
//!
//! Time is virtual. The host (or a test) calls [`Session::advance`] with the
//! elapsed time and the session runs whatever continuations came due. A
//! submission is two-phase: a pending "Processing..." message goes up
//! immediately and is swapped for real output after the thinking delay.

use std::collections::VecDeque;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use folio_types::config::ShellConfig;
use folio_types::error::Result;
use folio_types::theme::Theme;

use crate::clock::{Clock, SystemClock};
use crate::commands::welcome_panel;
use crate::content::Portfolio;
use crate::effects::SideEffects;
use crate::history::History;
use crate::interpreter::{CommandOutput, CommandRegistry, Context};
use crate::message::{MessageId, MessageKind, Payload, Reply};
use crate::output::OutputLog;
use crate::scheduler::Scheduler;
use crate::tokenizer;

/// Text of the transient message shown while a submission is in flight.
pub const PENDING_TEXT: &str = "Processing...";

const IDLE_PLACEHOLDER: &str = "Type a command... (try \"help\")";

/// Outcome of [`Session::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Queued for dispatch after the thinking delay.
    Accepted,
    /// Blank input; nothing happened.
    Empty,
    /// A command is still in flight; nothing happened.
    Busy,
}

#[derive(Debug)]
enum Task {
    /// Retract the pending message and run the line.
    Dispatch { pending: MessageId, input: String },
    /// Append the next step of a multi-step command.
    Step {
        command: String,
        remaining: VecDeque<Reply>,
    },
}

pub struct Session<E: SideEffects> {
    config: ShellConfig,
    registry: CommandRegistry,
    content: Portfolio,
    history: History,
    log: OutputLog,
    theme: Theme,
    scheduler: Scheduler<Task>,
    effects: E,
    clock: Box<dyn Clock>,
    rng: StdRng,
    pending: Option<MessageId>,
    active_sequences: usize,
}

impl<E: SideEffects> Session<E> {
    /// Session on the system clock with the built-in commands.
    pub fn new(config: ShellConfig, content: Portfolio, effects: E) -> Result<Self> {
        Self::with_clock(config, content, effects, Box::new(SystemClock))
    }

    pub fn with_clock(
        config: ShellConfig,
        content: Portfolio,
        effects: E,
        clock: Box<dyn Clock>,
    ) -> Result<Self> {
        let registry = CommandRegistry::with_builtins()?;
        Ok(Self::from_parts(config, content, registry, effects, clock))
    }

    /// Assemble a session around an already-built registry.
    pub fn from_parts(
        config: ShellConfig,
        content: Portfolio,
        registry: CommandRegistry,
        effects: E,
        clock: Box<dyn Clock>,
    ) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let theme = config.initial_theme;
        let mut session = Self {
            config,
            registry,
            content,
            history: History::new(),
            log: OutputLog::new(),
            theme,
            scheduler: Scheduler::new(),
            effects,
            clock,
            rng,
            pending: None,
            active_sequences: 0,
        };
        session.show_welcome();
        log::info!(
            "Session started: {} commands, {} theme",
            session.registry.len(),
            session.theme
        );
        session
    }

    /// Submit a line from the input surface.
    ///
    /// Blank input and input while busy are ignored. Otherwise the line is
    /// recorded in history and a pending message is appended; dispatch
    /// happens once the thinking delay has elapsed.
    pub fn submit(&mut self, input: &str) -> Submission {
        let line = input.trim();
        if line.is_empty() {
            return Submission::Empty;
        }
        if self.is_busy() {
            log::debug!("Rejected '{line}': busy");
            return Submission::Busy;
        }
        self.history.record(line);
        let pending = self.log.push(
            MessageKind::Pending,
            Payload::Text(PENDING_TEXT.to_string()),
            Some(line),
            self.clock.now(),
        );
        self.pending = Some(pending);
        self.scheduler.schedule(
            self.config.thinking_delay(),
            Task::Dispatch {
                pending,
                input: line.to_string(),
            },
        );
        Submission::Accepted
    }

    /// Echo and run one line. Only reached from a due `Task::Dispatch`, so
    /// the busy gate in [`Session::submit`] covers every dispatch.
    fn dispatch(&mut self, input: &str) {
        let parsed = tokenizer::parse(input);
        if parsed.is_empty() {
            return;
        }
        let line = input.trim();
        self.log.push(
            MessageKind::CommandEcho,
            Payload::Text(line.to_string()),
            Some(line),
            self.clock.now(),
        );

        let writes_theme = self
            .registry
            .get(&parsed.command)
            .is_some_and(|cmd| cmd.writes_theme());
        let mut ctx = Context::new(
            &parsed.command,
            &self.registry,
            &self.content,
            self.clock.as_ref(),
            &mut self.rng,
            &mut self.effects,
            self.theme,
        );
        let output = self.registry.execute(&parsed, &mut ctx);
        let (theme_request, failures) = ctx.finish();

        self.apply_output(line, output);

        if let Some(theme) = theme_request {
            if writes_theme {
                self.set_theme(theme);
            } else {
                log::warn!("'{}' may not change the theme; request ignored", parsed.command);
            }
        }
        for failure in failures {
            log::warn!("{}: {failure}", parsed.command);
            self.log
                .push_reply(Reply::warning(failure.to_string()), Some(line), self.clock.now());
        }
    }

    fn apply_output(&mut self, line: &str, output: CommandOutput) {
        let now = self.clock.now();
        match output {
            CommandOutput::None => {},
            CommandOutput::Reply(reply) => {
                self.log.push_reply(reply, Some(line), now);
            },
            CommandOutput::Replies(replies) => {
                for reply in replies {
                    self.log.push_reply(reply, Some(line), now);
                }
            },
            CommandOutput::Clear => {
                self.log.clear();
                self.show_welcome();
            },
            CommandOutput::Sequence(steps) => self.start_sequence(line, steps.into()),
        }
    }

    fn start_sequence(&mut self, command: &str, mut steps: VecDeque<Reply>) {
        let Some(first) = steps.pop_front() else {
            return;
        };
        self.log.push_reply(first, Some(command), self.clock.now());
        if steps.is_empty() {
            return;
        }
        self.active_sequences += 1;
        self.scheduler.schedule(
            self.config.sequence_step_delay(),
            Task::Step {
                command: command.to_string(),
                remaining: steps,
            },
        );
    }

    fn run_task(&mut self, task: Task) {
        match task {
            Task::Dispatch { pending, input } => {
                self.log.remove(pending);
                self.pending = None;
                self.dispatch(&input);
            },
            Task::Step {
                command,
                mut remaining,
            } => {
                if let Some(reply) = remaining.pop_front() {
                    self.log.push_reply(reply, Some(&command), self.clock.now());
                }
                if remaining.is_empty() {
                    self.active_sequences = self.active_sequences.saturating_sub(1);
                    log::debug!("Sequence for '{command}' finished");
                } else {
                    self.scheduler.schedule(
                        self.config.sequence_step_delay(),
                        Task::Step { command, remaining },
                    );
                }
            },
        }
    }

    /// Let `dt` of virtual time pass, running every task that comes due.
    pub fn advance(&mut self, dt: Duration) {
        let until = self.scheduler.now() + dt;
        while let Some(task) = self.scheduler.pop_due(until) {
            self.run_task(task);
        }
        self.scheduler.advance_to(until);
    }

    /// Advance until no tasks remain.
    pub fn run_until_idle(&mut self) {
        while let Some(wait) = self.next_deadline() {
            self.advance(wait);
        }
    }

    /// Time until the next scheduled task, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler
            .next_deadline()
            .map(|due| due.saturating_sub(self.scheduler.now()))
    }

    /// True while a submission is in flight or a sequence is still emitting.
    pub fn is_busy(&self) -> bool {
        self.pending.is_some() || self.active_sequences > 0
    }

    /// Input placeholder for the current state.
    pub fn placeholder(&self) -> &'static str {
        if self.is_busy() {
            PENDING_TEXT
        } else {
            IDLE_PLACEHOLDER
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip the theme from outside the command vocabulary.
    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self.theme.toggled();
        self.set_theme(theme);
        theme
    }

    fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.effects.theme_changed(theme);
        log::debug!("Theme set to {theme}");
    }

    fn show_welcome(&mut self) {
        let panel = welcome_panel(&self.content);
        self.log
            .push(MessageKind::Plain, Payload::Panel(panel), None, self.clock.now());
    }

    /// Complete a partial command name.
    pub fn complete(&self, partial: &str) -> String {
        self.registry.complete(partial)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    pub fn log(&self) -> &OutputLog {
        &self.log
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn content(&self) -> &Portfolio {
        &self.content
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn effects(&self) -> &E {
        &self.effects
    }
}
