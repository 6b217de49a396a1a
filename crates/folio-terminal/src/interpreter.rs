//! Command trait, registry, and dispatch logic.
//!
//! The registry is built once at start-up and is read-only afterwards.
//! Every accepted token (primary name and aliases) maps to exactly one
//! command; collisions are rejected at registration time.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use folio_types::error::{FolioError, Result};
use folio_types::theme::Theme;

use crate::clock::Clock;
use crate::completion;
use crate::content::Portfolio;
use crate::effects::SideEffects;
use crate::message::{HelpCategory, HelpEntry, Reply};
use crate::tokenizer::ParsedInput;

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    /// Command produced no visible output.
    None,
    Reply(Reply),
    Replies(Vec<Reply>),
    /// Signal to empty the output log and show the welcome panel.
    Clear,
    /// Replies appended one at a time, a fixed delay apart. The first is
    /// appended immediately.
    Sequence(Vec<Reply>),
}

impl CommandOutput {
    /// Every reply carried, in order.
    pub fn replies(&self) -> &[Reply] {
        match self {
            Self::Reply(reply) => std::slice::from_ref(reply),
            Self::Replies(replies) | Self::Sequence(replies) => replies,
            Self::None | Self::Clear => &[],
        }
    }
}

impl From<Reply> for CommandOutput {
    fn from(reply: Reply) -> Self {
        Self::Reply(reply)
    }
}

/// Help grouping. Commands in [`Category::Hidden`] are left out of `help`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Navigation,
    Utilities,
    Fun,
    Hidden,
}

impl Category {
    /// Categories listed by `help`, in display order.
    pub const LISTED: [Category; 3] = [Self::Navigation, Self::Utilities, Self::Fun];

    pub fn title(self) -> &'static str {
        match self {
            Self::Navigation => "Navigation",
            Self::Utilities => "Utilities",
            Self::Fun => "Fun",
            Self::Hidden => "Hidden",
        }
    }
}

/// Everything a command may read or touch while it runs.
///
/// The theme is read-only here. A command may file a change request, which
/// the session applies only for commands that declare
/// [`Command::writes_theme`]. Effect failures are collected rather than
/// returned so a handler always finishes with its own output.
pub struct Context<'a> {
    /// The token the user typed (a name or an alias), lower-cased.
    pub invoked: &'a str,
    pub registry: &'a CommandRegistry,
    pub content: &'a Portfolio,
    pub clock: &'a dyn Clock,
    rng: &'a mut StdRng,
    effects: &'a mut dyn SideEffects,
    theme: Theme,
    theme_request: Option<Theme>,
    failures: Vec<FolioError>,
}

impl<'a> Context<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        invoked: &'a str,
        registry: &'a CommandRegistry,
        content: &'a Portfolio,
        clock: &'a dyn Clock,
        rng: &'a mut StdRng,
        effects: &'a mut dyn SideEffects,
        theme: Theme,
    ) -> Self {
        Self {
            invoked,
            registry,
            content,
            clock,
            rng,
            effects,
            theme,
            theme_request: None,
            failures: Vec::new(),
        }
    }

    /// The session theme as of dispatch.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Ask for a theme change once the command returns.
    pub fn request_theme(&mut self, theme: Theme) {
        self.theme_request = Some(theme);
    }

    pub fn open_external(&mut self, url: &str) {
        if let Err(e) = self.effects.open_external(url) {
            self.failures.push(e);
        }
    }

    pub fn copy_to_clipboard(&mut self, text: &str) {
        if let Err(e) = self.effects.copy_to_clipboard(text) {
            self.failures.push(e);
        }
    }

    /// Split into the theme request and the effect failures.
    pub fn finish(self) -> (Option<Theme>, Vec<FolioError>) {
        (self.theme_request, self.failures)
    }

    /// Pick one item from a fixed pool.
    pub fn choose<T: Copy + Default>(&mut self, pool: &[T]) -> T {
        pool.choose(&mut *self.rng).copied().unwrap_or_default()
    }

    /// The session RNG, for commands that need more than one pick.
    pub fn rng(&mut self) -> &mut StdRng {
        &mut *self.rng
    }
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types).
    fn name(&self) -> &str;

    /// Other tokens that run this command.
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string (e.g. "project [id]").
    fn usage(&self) -> &str;

    /// Command category for grouping in `help` output.
    fn category(&self) -> Category {
        Category::Hidden
    }

    /// Whether a theme request from this command is honoured.
    fn writes_theme(&self) -> bool {
        false
    }

    /// Execute the command with the given arguments and context.
    fn execute(&self, args: &[&str], ctx: &mut Context<'_>) -> Result<CommandOutput>;
}

/// Registry of available commands with dispatch.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in command in registration order.
    pub fn with_builtins() -> Result<Self> {
        let mut reg = Self::new();
        crate::commands::register_portfolio_commands(&mut reg)?;
        crate::fun_commands::register_fun_commands(&mut reg)?;
        crate::shell_commands::register_shell_commands(&mut reg)?;
        log::debug!("Registered {} commands", reg.len());
        Ok(reg)
    }

    /// Register a command. Fails if its name or any alias is already
    /// taken; nothing is inserted in that case.
    pub fn register(&mut self, cmd: Box<dyn Command>) -> Result<()> {
        let mut tokens: Vec<String> = Vec::with_capacity(1 + cmd.aliases().len());
        tokens.push(cmd.name().to_lowercase());
        tokens.extend(cmd.aliases().iter().map(|a| a.to_lowercase()));

        for (i, token) in tokens.iter().enumerate() {
            if token.is_empty() || token.contains(char::is_whitespace) {
                return Err(FolioError::Registry(format!(
                    "'{token}' is not a valid command token"
                )));
            }
            if let Some(&owner) = self.index.get(token) {
                return Err(FolioError::Registry(format!(
                    "'{token}' is already registered by '{}'",
                    self.commands[owner].name()
                )));
            }
            if tokens[..i].contains(token) {
                return Err(FolioError::Registry(format!(
                    "'{token}' is listed twice by '{}'",
                    cmd.name()
                )));
            }
        }

        let slot = self.commands.len();
        for token in tokens {
            self.index.insert(token, slot);
        }
        self.commands.push(cmd);
        Ok(())
    }

    /// Look up a command by name or alias, ignoring case.
    pub fn get(&self, token: &str) -> Option<&dyn Command> {
        let slot = *self.index.get(&token.to_lowercase())?;
        self.commands.get(slot).map(|c| &**c)
    }

    /// Primary names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(|c| c.name())
    }

    /// Complete a partial command name.
    pub fn complete(&self, partial: &str) -> String {
        completion::complete(partial, self.names())
    }

    /// Listed commands grouped for the help panel.
    pub fn help_categories(&self) -> Vec<HelpCategory> {
        Category::LISTED
            .iter()
            .map(|&category| HelpCategory {
                title: category.title().to_string(),
                entries: self
                    .commands
                    .iter()
                    .filter(|c| c.category() == category)
                    .map(|c| HelpEntry {
                        usage: c.usage().to_string(),
                        description: c.description().to_string(),
                    })
                    .collect(),
            })
            .filter(|group| !group.entries.is_empty())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Run a parsed line. Errors become replies here and go no further.
    pub fn execute(&self, input: &ParsedInput, ctx: &mut Context<'_>) -> CommandOutput {
        let Some(cmd) = self.get(&input.command) else {
            log::debug!("Unknown command: {}", input.command);
            return unknown_command(&input.command).into();
        };
        log::debug!("Dispatching {} ({} args)", cmd.name(), input.args.len());
        let args = input.arg_refs();
        match cmd.execute(&args, ctx) {
            Ok(output) => output,
            Err(e) => error_reply(e).into(),
        }
    }
}

/// The reply for a token nothing is registered under.
pub fn unknown_command(token: &str) -> Reply {
    let err = FolioError::UnknownCommand(token.to_string());
    Reply::error(format!("{err}\nType 'help' to see available commands."))
}

/// Usage problems are warnings; everything else is an error.
pub fn error_reply(err: FolioError) -> Reply {
    if err.is_usage() {
        Reply::warning(err.to_string())
    } else {
        Reply::error(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageKind;
    use crate::test_utils::{TestEnv, ctx_for};

    struct Named(&'static str, &'static [&'static str]);
    impl Command for Named {
        fn name(&self) -> &str {
            self.0
        }
        fn aliases(&self) -> &'static [&'static str] {
            self.1
        }
        fn description(&self) -> &str {
            "test"
        }
        fn usage(&self) -> &str {
            self.0
        }
        fn execute(&self, _args: &[&str], _ctx: &mut Context<'_>) -> Result<CommandOutput> {
            Ok(CommandOutput::None)
        }
    }

    #[test]
    fn builtins_register_without_collisions() {
        let reg = CommandRegistry::with_builtins().unwrap();
        assert!(reg.len() > 40);
        assert!(reg.get("help").is_some());
        assert!(reg.get("?").is_some());
        assert!(reg.get("cls").is_some());
        assert!(reg.get("HACKER").is_some());
    }

    #[test]
    fn name_collision_rejected() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(Named("clear", &["cls"]))).unwrap();
        let err = reg.register(Box::new(Named("clear", &[]))).unwrap_err();
        assert!(matches!(err, FolioError::Registry(_)));
    }

    #[test]
    fn alias_collision_rejected_atomically() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(Named("clear", &["cls"]))).unwrap();
        let err = reg
            .register(Box::new(Named("wipe", &["erase", "cls"])))
            .unwrap_err();
        assert!(matches!(err, FolioError::Registry(_)));
        // Nothing from the rejected command leaked in.
        assert!(reg.get("wipe").is_none());
        assert!(reg.get("erase").is_none());
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn alias_may_not_shadow_a_name() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(Named("help", &[]))).unwrap();
        assert!(reg.register(Box::new(Named("assist", &["HELP"]))).is_err());
    }

    #[test]
    fn self_duplicate_alias_rejected() {
        let mut reg = CommandRegistry::new();
        assert!(reg.register(Box::new(Named("a", &["b", "b"]))).is_err());
        assert!(reg.register(Box::new(Named("c", &["C"]))).is_err());
    }

    #[test]
    fn lookup_ignores_case_and_resolves_aliases() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(Named("about", &["whoami"]))).unwrap();
        assert_eq!(reg.get("ABOUT").map(|c| c.name()), Some("about"));
        assert_eq!(reg.get("WhoAmI").map(|c| c.name()), Some("about"));
        assert!(reg.get("abou").is_none());
    }

    #[test]
    fn completion_uses_names_not_aliases() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(Named("clear", &["cls"]))).unwrap();
        reg.register(Box::new(Named("contact", &[]))).unwrap();
        assert_eq!(reg.complete("cl"), "clear");
        assert_eq!(reg.complete("cls"), "cls");
    }

    #[test]
    fn builtin_projects_completes_before_project() {
        let reg = CommandRegistry::with_builtins().unwrap();
        assert_eq!(reg.complete("pro"), "projects");
    }

    #[test]
    fn unknown_command_reply() {
        let reply = unknown_command("zzzz");
        assert_eq!(reply.kind, MessageKind::Error);
        assert_eq!(
            reply.payload.as_text(),
            Some("Command not found: zzzz\nType 'help' to see available commands.")
        );
    }

    #[test]
    fn execute_unknown_is_error_reply() {
        let mut env = TestEnv::new();
        let reg = CommandRegistry::new();
        let parsed = crate::tokenizer::parse("zzzz");
        let mut ctx = ctx_for(&mut env, &reg, "zzzz");
        let out = reg.execute(&parsed, &mut ctx);
        assert_eq!(out, CommandOutput::Reply(unknown_command("zzzz")));
    }

    #[test]
    fn usage_errors_become_warnings() {
        assert_eq!(
            error_reply(FolioError::missing("Usage: x")).kind,
            MessageKind::Warning
        );
        assert_eq!(
            error_reply(FolioError::NotFound("gone".into())).kind,
            MessageKind::Error
        );
    }

    #[test]
    fn help_categories_skip_hidden_and_keep_order() {
        let reg = CommandRegistry::with_builtins().unwrap();
        let cats = reg.help_categories();
        let titles: Vec<&str> = cats.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Navigation", "Utilities", "Fun"]);
        let nav: Vec<&str> = cats[0].entries.iter().map(|e| e.usage.as_str()).collect();
        assert_eq!(nav[0], "about");
        let all: Vec<&str> = cats
            .iter()
            .flat_map(|c| c.entries.iter().map(|e| e.usage.as_str()))
            .collect();
        assert!(!all.contains(&"lenny"));
        assert!(!all.contains(&"b"));
    }

    #[test]
    fn context_collects_effect_failures() {
        let mut env = TestEnv::new();
        env.effects.fail = true;
        let reg = CommandRegistry::new();
        let mut ctx = ctx_for(&mut env, &reg, "github");
        ctx.open_external("https://example.com");
        ctx.copy_to_clipboard("x");
        let (request, failures) = ctx.finish();
        assert!(request.is_none());
        assert_eq!(failures.len(), 2);
    }

    #[test]
    fn choose_from_empty_pool_is_default() {
        let mut env = TestEnv::new();
        let reg = CommandRegistry::new();
        let mut ctx = ctx_for(&mut env, &reg, "x");
        let empty: [&str; 0] = [];
        assert_eq!(ctx.choose(&empty), "");
        assert_eq!(ctx.choose(&["only"]), "only");
    }
}
