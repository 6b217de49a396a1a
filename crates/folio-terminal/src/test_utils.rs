//! Shared fixtures for unit tests.

use chrono::{Local, TimeZone};
use rand::SeedableRng;
use rand::rngs::StdRng;

use folio_types::config::ShellConfig;
use folio_types::error::FolioError;
use folio_types::theme::Theme;

use crate::clock::FixedClock;
use crate::content::Portfolio;
use crate::effects::RecordingEffects;
use crate::interpreter::{CommandOutput, CommandRegistry, Context};
use crate::message::MessageKind;
use crate::session::Session;
use crate::tokenizer;

pub const SEED: u64 = 42;

pub fn fixed_clock() -> FixedClock {
    let at = Local
        .with_ymd_and_hms(2025, 3, 14, 15, 9, 26)
        .single()
        .unwrap_or_else(Local::now);
    FixedClock(at)
}

/// Everything a command context borrows.
pub struct TestEnv {
    pub content: Portfolio,
    pub clock: FixedClock,
    pub rng: StdRng,
    pub effects: RecordingEffects,
    pub theme: Theme,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            content: Portfolio::builtin().unwrap(),
            clock: fixed_clock(),
            rng: StdRng::seed_from_u64(SEED),
            effects: RecordingEffects::new(),
            theme: Theme::Dark,
        }
    }
}

pub fn ctx_for<'a>(
    env: &'a mut TestEnv,
    registry: &'a CommandRegistry,
    invoked: &'a str,
) -> Context<'a> {
    Context::new(
        invoked,
        registry,
        &env.content,
        &env.clock,
        &mut env.rng,
        &mut env.effects,
        env.theme,
    )
}

/// Result of running one line straight through the registry.
pub struct Run {
    pub output: CommandOutput,
    pub theme_request: Option<Theme>,
    pub failures: Vec<FolioError>,
}

impl Run {
    /// The single reply's kind and text. Panics if there is not exactly one
    /// text reply.
    pub fn only_text(&self) -> (MessageKind, String) {
        let replies = self.output.replies();
        assert_eq!(replies.len(), 1, "expected one reply, got {replies:?}");
        let text = replies[0].payload.as_text().expect("text reply");
        (replies[0].kind, text.to_string())
    }
}

pub fn run_line(env: &mut TestEnv, line: &str) -> Run {
    let registry = CommandRegistry::with_builtins().unwrap();
    let parsed = tokenizer::parse(line);
    let mut ctx = ctx_for(env, &registry, &parsed.command);
    let output = registry.execute(&parsed, &mut ctx);
    let (theme_request, failures) = ctx.finish();
    Run {
        output,
        theme_request,
        failures,
    }
}

/// A session on the built-in content, a fixed clock and a fixed seed.
pub fn session() -> Session<RecordingEffects> {
    session_with(RecordingEffects::new())
}

pub fn session_with(effects: RecordingEffects) -> Session<RecordingEffects> {
    let config = ShellConfig {
        seed: Some(SEED),
        ..ShellConfig::default()
    };
    Session::with_clock(
        config,
        Portfolio::builtin().unwrap(),
        effects,
        Box::new(fixed_clock()),
    )
    .unwrap()
}
