//! Portfolio and utility commands: help, about, projects, project, skills,
//! contact, clear, theme, github, linkedin, email, resume, history, date,
//! echo.

use folio_types::error::{FolioError, Result};
use folio_types::theme::Theme;

use crate::content::Portfolio;
use crate::interpreter::{Category, Command, CommandOutput, CommandRegistry, Context};
use crate::message::{Panel, Reply};

/// Register the portfolio commands. Order matters for tab completion.
pub fn register_portfolio_commands(reg: &mut CommandRegistry) -> Result<()> {
    reg.register(Box::new(HelpCmd))?;
    reg.register(Box::new(AboutCmd))?;
    reg.register(Box::new(ProjectsCmd))?;
    reg.register(Box::new(ProjectCmd))?;
    reg.register(Box::new(SkillsCmd))?;
    reg.register(Box::new(ContactCmd))?;
    reg.register(Box::new(ClearCmd))?;
    reg.register(Box::new(ThemeCmd))?;
    reg.register(Box::new(GithubCmd))?;
    reg.register(Box::new(LinkedinCmd))?;
    reg.register(Box::new(EmailCmd))?;
    reg.register(Box::new(ResumeCmd))?;
    reg.register(Box::new(HistoryCmd))?;
    reg.register(Box::new(DateCmd))?;
    reg.register(Box::new(EchoCmd))?;
    Ok(())
}

/// Commands suggested on the welcome panel.
pub const QUICK_COMMANDS: [&str; 4] = ["about", "projects", "skills", "contact"];

/// The greeting shown at start-up and after `clear`.
pub fn welcome_panel(content: &Portfolio) -> Panel {
    Panel::Welcome {
        name: content.profile.name.clone(),
        title: content.profile.title.clone(),
        quick_commands: QUICK_COMMANDS.iter().map(|c| c.to_string()).collect(),
    }
}

/// Keyboard hints listed under the help categories.
pub const SHORTCUTS: [(&str, &str); 4] = [
    ("↑↓", "history"),
    ("Tab", "autocomplete"),
    ("Ctrl+C", "cancel"),
    ("clear", "reset"),
];

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn aliases(&self) -> &'static [&'static str] {
        &["?"]
    }
    fn description(&self) -> &str {
        "List available commands"
    }
    fn usage(&self) -> &str {
        "help"
    }
    fn execute(&self, _args: &[&str], ctx: &mut Context<'_>) -> Result<CommandOutput> {
        Ok(Reply::panel(Panel::Help {
            categories: ctx.registry.help_categories(),
            shortcuts: SHORTCUTS
                .iter()
                .map(|(key, what)| (key.to_string(), what.to_string()))
                .collect(),
        })
        .into())
    }
}

// ---------------------------------------------------------------------------
// about / whoami
// ---------------------------------------------------------------------------

struct AboutCmd;
impl Command for AboutCmd {
    fn name(&self) -> &str {
        "about"
    }
    fn aliases(&self) -> &'static [&'static str] {
        &["whoami"]
    }
    fn description(&self) -> &str {
        "Show information about me"
    }
    fn usage(&self) -> &str {
        "about"
    }
    fn category(&self) -> Category {
        Category::Navigation
    }
    fn execute(&self, _args: &[&str], ctx: &mut Context<'_>) -> Result<CommandOutput> {
        let profile = &ctx.content.profile;
        if ctx.invoked == "whoami" {
            return Ok(Reply::info(format!(
                "You are currently using {}'s interactive portfolio terminal.\n\
                 Built with Rust and crossterm.\n\n\
                 Type 'about' to learn more about me, or 'help' for available commands.",
                profile.name
            ))
            .into());
        }
        Ok(Reply::panel(Panel::About(profile.clone())).into())
    }
}

// ---------------------------------------------------------------------------
// projects
// ---------------------------------------------------------------------------

struct ProjectsCmd;
impl Command for ProjectsCmd {
    fn name(&self) -> &str {
        "projects"
    }
    fn description(&self) -> &str {
        "List projects (e.g. projects fintech)"
    }
    fn usage(&self) -> &str {
        "projects [filter]"
    }
    fn category(&self) -> Category {
        Category::Navigation
    }
    fn execute(&self, args: &[&str], ctx: &mut Context<'_>) -> Result<CommandOutput> {
        let (filter, projects) = if args.is_empty() {
            (None, ctx.content.projects.clone())
        } else {
            let filter = args.join(" ");
            let projects = ctx
                .content
                .filter_projects(&filter)
                .into_iter()
                .cloned()
                .collect();
            (Some(filter), projects)
        };
        Ok(Reply::panel(Panel::Projects { filter, projects }).into())
    }
}

// ---------------------------------------------------------------------------
// project
// ---------------------------------------------------------------------------

struct ProjectCmd;
impl Command for ProjectCmd {
    fn name(&self) -> &str {
        "project"
    }
    fn description(&self) -> &str {
        "View specific project details"
    }
    fn usage(&self) -> &str {
        "project [id]"
    }
    fn category(&self) -> Category {
        Category::Navigation
    }
    fn execute(&self, args: &[&str], ctx: &mut Context<'_>) -> Result<CommandOutput> {
        if args.is_empty() {
            let example = ctx
                .content
                .projects
                .first()
                .map_or("my-project", |p| p.id.as_str());
            return Err(FolioError::missing(format!(
                "Usage: project [id]\nExample: project {example}\n\n\
                 Type \"projects\" to see all available projects."
            )));
        }
        let id = args.join(" ");
        match ctx.content.find_project(&id) {
            Some(project) => Ok(Reply::panel(Panel::ProjectDetail(project.clone())).into()),
            None => Err(FolioError::NotFound(format!(
                "Project \"{id}\" not found. Type 'projects' to see all available projects."
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// skills / contact
// ---------------------------------------------------------------------------

struct SkillsCmd;
impl Command for SkillsCmd {
    fn name(&self) -> &str {
        "skills"
    }
    fn description(&self) -> &str {
        "Display technical skills"
    }
    fn usage(&self) -> &str {
        "skills"
    }
    fn category(&self) -> Category {
        Category::Navigation
    }
    fn execute(&self, _args: &[&str], ctx: &mut Context<'_>) -> Result<CommandOutput> {
        Ok(Reply::panel(Panel::Skills(ctx.content.skills.clone())).into())
    }
}

struct ContactCmd;
impl Command for ContactCmd {
    fn name(&self) -> &str {
        "contact"
    }
    fn description(&self) -> &str {
        "Show contact details"
    }
    fn usage(&self) -> &str {
        "contact"
    }
    fn category(&self) -> Category {
        Category::Navigation
    }
    fn execute(&self, _args: &[&str], ctx: &mut Context<'_>) -> Result<CommandOutput> {
        let social = &ctx.content.profile.social;
        Ok(Reply::panel(Panel::Contact {
            email: social.email.clone(),
            links: social.links(),
        })
        .into())
    }
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn aliases(&self) -> &'static [&'static str] {
        &["cls"]
    }
    fn description(&self) -> &str {
        "Clear terminal"
    }
    fn usage(&self) -> &str {
        "clear"
    }
    fn category(&self) -> Category {
        Category::Utilities
    }
    fn execute(&self, _args: &[&str], _ctx: &mut Context<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Clear)
    }
}

// ---------------------------------------------------------------------------
// theme
// ---------------------------------------------------------------------------

const THEME_USAGE: &str = "Usage: theme [dark|light]\nExample: theme dark";

struct ThemeCmd;
impl Command for ThemeCmd {
    fn name(&self) -> &str {
        "theme"
    }
    fn description(&self) -> &str {
        "Switch color theme"
    }
    fn usage(&self) -> &str {
        "theme [dark|light]"
    }
    fn category(&self) -> Category {
        Category::Utilities
    }
    fn writes_theme(&self) -> bool {
        true
    }
    fn execute(&self, args: &[&str], ctx: &mut Context<'_>) -> Result<CommandOutput> {
        let theme = match args.first() {
            None => ctx.theme().toggled(),
            Some(value) => value
                .parse::<Theme>()
                .map_err(|_| FolioError::invalid(THEME_USAGE))?,
        };
        ctx.request_theme(theme);
        Ok(Reply::success(format!("✓ Theme switched to {theme} mode")).into())
    }
}

// ---------------------------------------------------------------------------
// github / linkedin / email
// ---------------------------------------------------------------------------

struct GithubCmd;
impl Command for GithubCmd {
    fn name(&self) -> &str {
        "github"
    }
    fn description(&self) -> &str {
        "Open GitHub profile"
    }
    fn usage(&self) -> &str {
        "github"
    }
    fn category(&self) -> Category {
        Category::Utilities
    }
    fn execute(&self, _args: &[&str], ctx: &mut Context<'_>) -> Result<CommandOutput> {
        let url = ctx.content.profile.social.github.clone();
        ctx.open_external(&url);
        Ok(Reply::success("✓ Opening GitHub profile...").into())
    }
}

struct LinkedinCmd;
impl Command for LinkedinCmd {
    fn name(&self) -> &str {
        "linkedin"
    }
    fn description(&self) -> &str {
        "Open LinkedIn profile"
    }
    fn usage(&self) -> &str {
        "linkedin"
    }
    fn category(&self) -> Category {
        Category::Utilities
    }
    fn execute(&self, _args: &[&str], ctx: &mut Context<'_>) -> Result<CommandOutput> {
        let url = ctx.content.profile.social.linkedin.clone();
        ctx.open_external(&url);
        Ok(Reply::success("✓ Opening LinkedIn profile...").into())
    }
}

struct EmailCmd;
impl Command for EmailCmd {
    fn name(&self) -> &str {
        "email"
    }
    fn description(&self) -> &str {
        "Copy email address"
    }
    fn usage(&self) -> &str {
        "email"
    }
    fn category(&self) -> Category {
        Category::Utilities
    }
    fn execute(&self, _args: &[&str], ctx: &mut Context<'_>) -> Result<CommandOutput> {
        let email = ctx.content.profile.social.email.clone();
        ctx.copy_to_clipboard(&email);
        Ok(Reply::success(format!("✓ Email copied to clipboard: {email}")).into())
    }
}

// ---------------------------------------------------------------------------
// resume / history / date / echo
// ---------------------------------------------------------------------------

struct ResumeCmd;
impl Command for ResumeCmd {
    fn name(&self) -> &str {
        "resume"
    }
    fn aliases(&self) -> &'static [&'static str] {
        &["cv"]
    }
    fn description(&self) -> &str {
        "Download resume"
    }
    fn usage(&self) -> &str {
        "resume"
    }
    fn category(&self) -> Category {
        Category::Utilities
    }
    fn execute(&self, _args: &[&str], ctx: &mut Context<'_>) -> Result<CommandOutput> {
        Ok(Reply::info(format!(
            "📄 Resume download feature coming soon!\nFor now, contact me at {}",
            ctx.content.profile.social.email
        ))
        .into())
    }
}

struct HistoryCmd;
impl Command for HistoryCmd {
    fn name(&self) -> &str {
        "history"
    }
    fn description(&self) -> &str {
        "Show command history"
    }
    fn usage(&self) -> &str {
        "history"
    }
    fn category(&self) -> Category {
        Category::Utilities
    }
    fn execute(&self, _args: &[&str], _ctx: &mut Context<'_>) -> Result<CommandOutput> {
        Ok(Reply::info("Use ↑/↓ arrow keys to navigate through command history").into())
    }
}

struct DateCmd;
impl Command for DateCmd {
    fn name(&self) -> &str {
        "date"
    }
    fn aliases(&self) -> &'static [&'static str] {
        &["time"]
    }
    fn description(&self) -> &str {
        "Show the current date and time"
    }
    fn usage(&self) -> &str {
        "date"
    }
    fn execute(&self, _args: &[&str], ctx: &mut Context<'_>) -> Result<CommandOutput> {
        let now = ctx.clock.now();
        Ok(Reply::info(format!("📅 {}", now.format("%A, %B %-d, %Y at %I:%M:%S %p"))).into())
    }
}

struct EchoCmd;
impl Command for EchoCmd {
    fn name(&self) -> &str {
        "echo"
    }
    fn description(&self) -> &str {
        "Print text"
    }
    fn usage(&self) -> &str {
        "echo [text...]"
    }
    fn execute(&self, args: &[&str], _ctx: &mut Context<'_>) -> Result<CommandOutput> {
        if args.is_empty() {
            return Ok(CommandOutput::None);
        }
        Ok(Reply::plain(args.join(" ")).into())
    }
}
