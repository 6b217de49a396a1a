//! Fake shell builtins: ls, pwd, sudo, exit, hello.
//!
//! None of these touch a real filesystem or process; they answer with fixed
//! text built from the portfolio content.

use folio_types::error::Result;

use crate::interpreter::{Command, CommandOutput, CommandRegistry, Context};
use crate::message::Reply;

pub fn register_shell_commands(reg: &mut CommandRegistry) -> Result<()> {
    reg.register(Box::new(LsCmd))?;
    reg.register(Box::new(PwdCmd))?;
    reg.register(Box::new(SudoCmd))?;
    reg.register(Box::new(ExitCmd))?;
    reg.register(Box::new(HelloCmd))?;
    Ok(())
}

/// Projects listed by name in `ls` before the rest are summarised.
const LS_PREVIEW: usize = 3;

struct LsCmd;
impl Command for LsCmd {
    fn name(&self) -> &str {
        "ls"
    }
    fn description(&self) -> &str {
        "List portfolio sections"
    }
    fn usage(&self) -> &str {
        "ls"
    }
    fn execute(&self, _args: &[&str], ctx: &mut Context<'_>) -> Result<CommandOutput> {
        let projects = &ctx.content.projects;
        let mut lines = vec![
            "📁 portfolio/".to_string(),
            "├── 📄 about.md".to_string(),
            "├── 📁 projects/".to_string(),
        ];
        let shown = projects.len().min(LS_PREVIEW);
        let rest = projects.len() - shown;
        for (i, project) in projects.iter().take(shown).enumerate() {
            let branch = if i + 1 == shown && rest == 0 {
                "└──"
            } else {
                "├──"
            };
            lines.push(format!("│   {branch} 📄 {}", project.id));
        }
        if rest > 0 {
            lines.push(format!("│   └── ... ({rest} more)"));
        }
        lines.push("├── 📁 skills/".to_string());
        lines.push("│   └── 📄 tech-stack.toml".to_string());
        lines.push("└── 📄 contact.md".to_string());
        lines.push(String::new());
        lines.push("Use 'about', 'projects', 'skills', or 'contact' to explore.".to_string());
        Ok(Reply::info(lines.join("\n")).into())
    }
}

struct PwdCmd;
impl Command for PwdCmd {
    fn name(&self) -> &str {
        "pwd"
    }
    fn description(&self) -> &str {
        "Print working directory"
    }
    fn usage(&self) -> &str {
        "pwd"
    }
    fn execute(&self, _args: &[&str], ctx: &mut Context<'_>) -> Result<CommandOutput> {
        let home = ctx
            .content
            .profile
            .name
            .split_whitespace()
            .next()
            .unwrap_or("user")
            .to_lowercase();
        Ok(Reply::info(format!("~/{home}/portfolio")).into())
    }
}

struct SudoCmd;
impl Command for SudoCmd {
    fn name(&self) -> &str {
        "sudo"
    }
    fn description(&self) -> &str {
        "Try it"
    }
    fn usage(&self) -> &str {
        "sudo"
    }
    fn execute(&self, _args: &[&str], _ctx: &mut Context<'_>) -> Result<CommandOutput> {
        Ok(Reply::warning("Nice try! 😏 But you don't need sudo powers here.").into())
    }
}

struct ExitCmd;
impl Command for ExitCmd {
    fn name(&self) -> &str {
        "exit"
    }
    fn aliases(&self) -> &'static [&'static str] {
        &["quit"]
    }
    fn description(&self) -> &str {
        "Say goodbye"
    }
    fn usage(&self) -> &str {
        "exit"
    }
    fn execute(&self, _args: &[&str], _ctx: &mut Context<'_>) -> Result<CommandOutput> {
        Ok(Reply::info("Thanks for visiting! Press Esc or Ctrl+D to leave. 👋").into())
    }
}

struct HelloCmd;
impl Command for HelloCmd {
    fn name(&self) -> &str {
        "hello"
    }
    fn aliases(&self) -> &'static [&'static str] {
        &["hi", "hey"]
    }
    fn description(&self) -> &str {
        "Say hello"
    }
    fn usage(&self) -> &str {
        "hello"
    }
    fn execute(&self, _args: &[&str], _ctx: &mut Context<'_>) -> Result<CommandOutput> {
        Ok(Reply::info(
            "Hello there! 👋 Welcome to my portfolio. Type 'help' to see what you can do.",
        )
        .into())
    }
}
