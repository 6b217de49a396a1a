//! Turn output-log messages into styled terminal lines.
//!
//! Rendering is split in two: [`render_message`] builds theme-independent
//! [`Line`]s, and [`write_lines`] paints them with crossterm colors picked
//! from the active theme. Piped mode prints the same lines uncolored.

use std::io::Write;

use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::{cursor, queue, terminal};

use folio_terminal::content::{Project, Skill};
use folio_terminal::message::{Message, MessageId, MessageKind, Panel};
use folio_terminal::output::OutputLog;
use folio_types::theme::Theme;

/// Filters suggested when a project filter matches nothing.
const FILTER_HINT: &str = "Try: fintech, e-commerce, 2025, featured";

/// Semantic color of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Prompt,
    Success,
    Error,
    Warning,
    Info,
    Accent,
    Muted,
}

impl Tone {
    fn for_kind(kind: MessageKind) -> Self {
        match kind {
            MessageKind::CommandEcho => Self::Prompt,
            MessageKind::Plain => Self::Plain,
            MessageKind::Success => Self::Success,
            MessageKind::Error => Self::Error,
            MessageKind::Warning => Self::Warning,
            MessageKind::Info => Self::Info,
            MessageKind::Pending => Self::Muted,
        }
    }

    /// Foreground color for this tone under `theme`.
    pub fn color(self, theme: Theme) -> Color {
        match (theme, self) {
            (_, Self::Plain) => Color::Reset,
            (Theme::Dark, Self::Prompt) => Color::Cyan,
            (Theme::Dark, Self::Success) => Color::Green,
            (Theme::Dark, Self::Error) => Color::Red,
            (Theme::Dark, Self::Warning) => Color::Yellow,
            (Theme::Dark, Self::Info) => Color::Blue,
            (Theme::Dark, Self::Accent) => Color::Magenta,
            (Theme::Dark, Self::Muted) => Color::DarkGrey,
            (Theme::Light, Self::Prompt) => Color::DarkCyan,
            (Theme::Light, Self::Success) => Color::DarkGreen,
            (Theme::Light, Self::Error) => Color::DarkRed,
            (Theme::Light, Self::Warning) => Color::DarkYellow,
            (Theme::Light, Self::Info) => Color::DarkBlue,
            (Theme::Light, Self::Accent) => Color::DarkMagenta,
            (Theme::Light, Self::Muted) => Color::Grey,
        }
    }
}

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub tone: Tone,
    pub text: String,
}

impl Line {
    fn new(tone: Tone, text: impl Into<String>) -> Self {
        Self {
            tone,
            text: text.into(),
        }
    }

    fn plain(text: impl Into<String>) -> Self {
        Self::new(Tone::Plain, text)
    }

    fn blank() -> Self {
        Self::plain("")
    }
}

/// Render one message. Pending placeholders render as nothing; the input
/// line shows the busy state instead.
pub fn render_message(message: &Message, prompt: &str) -> Vec<Line> {
    if message.kind == MessageKind::Pending {
        return Vec::new();
    }
    if let Some(panel) = message.panel() {
        return render_panel(panel);
    }
    let text = message.text().unwrap_or_default();
    let tone = Tone::for_kind(message.kind);
    if message.kind == MessageKind::CommandEcho {
        return vec![Line::new(tone, format!("{prompt} {text}"))];
    }
    let body = match message.kind.indicator() {
        Some(glyph) if !text.starts_with(glyph) => format!("{glyph} {text}"),
        _ => text.to_string(),
    };
    body.lines().map(|l| Line::new(tone, l)).collect()
}

pub fn render_panel(panel: &Panel) -> Vec<Line> {
    match panel {
        Panel::Welcome {
            name,
            title,
            quick_commands,
        } => vec![
            Line::new(Tone::Accent, format!("Welcome to {name}'s portfolio")),
            Line::plain(title.clone()),
            Line::blank(),
            Line::new(
                Tone::Muted,
                format!("Quick commands: {}", quick_commands.join(" · ")),
            ),
            Line::new(Tone::Muted, "Type 'help' to see all commands."),
        ],
        Panel::Help {
            categories,
            shortcuts,
        } => {
            let mut lines = vec![Line::new(Tone::Accent, "Available commands")];
            for category in categories {
                lines.push(Line::blank());
                lines.push(Line::new(Tone::Info, category.title.clone()));
                for entry in &category.entries {
                    lines.push(Line::plain(format!(
                        "  {:<20} {}",
                        entry.usage, entry.description
                    )));
                }
            }
            lines.push(Line::blank());
            lines.push(Line::new(Tone::Info, "Shortcuts"));
            for (key, what) in shortcuts {
                lines.push(Line::new(Tone::Muted, format!("  {key:<8} {what}")));
            }
            lines
        },
        Panel::About(profile) => {
            let mut lines = vec![
                Line::new(Tone::Accent, profile.name.clone()),
                Line::plain(profile.title.clone()),
            ];
            if !profile.location.is_empty() {
                lines.push(Line::new(Tone::Muted, format!("📍 {}", profile.location)));
            }
            if !profile.bio.is_empty() {
                lines.push(Line::blank());
                lines.extend(profile.bio.iter().map(|p| Line::plain(p.clone())));
            }
            if !profile.highlights.is_empty() {
                lines.push(Line::blank());
                lines.push(Line::new(Tone::Info, "Highlights"));
                lines.extend(
                    profile
                        .highlights
                        .iter()
                        .map(|h| Line::plain(format!("  • {h}"))),
                );
            }
            lines
        },
        Panel::Projects { filter, projects } => render_projects(filter.as_deref(), projects),
        Panel::ProjectDetail(project) => render_project_detail(project),
        Panel::Skills(categories) => {
            let mut lines = vec![Line::new(Tone::Accent, "Skills")];
            for category in categories {
                lines.push(Line::blank());
                lines.push(Line::new(Tone::Info, category.name.clone()));
                lines.extend(category.skills.iter().map(|s| Line::plain(skill_row(s))));
            }
            lines
        },
        Panel::Contact { email, links } => {
            let mut lines = vec![
                Line::new(Tone::Accent, "Get in touch"),
                Line::plain(format!("  ✉  {email}")),
                Line::blank(),
            ];
            lines.extend(
                links
                    .iter()
                    .map(|(label, url)| Line::plain(format!("  {label:<10} {url}"))),
            );
            lines
        },
        Panel::Matrix(rows) => rows.iter().map(|r| Line::new(Tone::Success, r.clone())).collect(),
        Panel::Art(art) => art.lines().map(Line::plain).collect(),
    }
}

fn render_projects(filter: Option<&str>, projects: &[Project]) -> Vec<Line> {
    let header = match filter {
        Some(f) => format!("📂 Projects matching \"{f}\" ({} found)", projects.len()),
        None => format!("📂 Projects ({})", projects.len()),
    };
    let mut lines = vec![Line::new(Tone::Accent, header)];
    if projects.is_empty() {
        if let Some(f) = filter {
            lines.push(Line::new(
                Tone::Warning,
                format!("No projects found matching \"{f}\". {FILTER_HINT}"),
            ));
        } else {
            lines.push(Line::new(Tone::Muted, "No projects yet."));
        }
        return lines;
    }
    for project in projects {
        let star = if project.featured { "★ " } else { "" };
        lines.push(Line::blank());
        lines.push(Line::new(
            Tone::Info,
            format!("{star}{} [{}]", project.name, project.id),
        ));
        lines.push(Line::new(
            Tone::Muted,
            format!("  {} · {} · {}", project.kind, project.sector, project.year),
        ));
        lines.push(Line::plain(format!("  {}", project.description)));
        if !project.tech.is_empty() {
            lines.push(Line::plain(format!("  Tech: {}", project.tech.join(", "))));
        }
    }
    lines.push(Line::blank());
    lines.push(Line::new(Tone::Muted, "Type 'project [id]' for details."));
    lines
}

fn render_project_detail(project: &Project) -> Vec<Line> {
    let mut lines = vec![
        Line::new(Tone::Accent, project.name.clone()),
        Line::new(
            Tone::Muted,
            format!(
                "{} · {} · {}{}",
                project.kind,
                project.sector,
                project.year,
                if project.featured { " · ★ featured" } else { "" }
            ),
        ),
        Line::blank(),
        Line::plain(project.description.clone()),
    ];
    if !project.tech.is_empty() {
        lines.push(Line::blank());
        lines.push(Line::plain(format!("Tech: {}", project.tech.join(", "))));
    }
    if let Some(ref live) = project.live {
        lines.push(Line::plain(format!("Live:   {live}")));
    }
    if let Some(ref github) = project.github {
        lines.push(Line::plain(format!("GitHub: {github}")));
    }
    lines
}

/// `  🦀 Rust             ██████████████████░░ 90%`
fn skill_row(skill: &Skill) -> String {
    let filled = skill.filled_blocks().min(Skill::BAR_WIDTH);
    let bar = format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(Skill::BAR_WIDTH - filled)
    );
    let label = if skill.icon.is_empty() {
        skill.name.clone()
    } else {
        format!("{} {}", skill.icon, skill.name)
    };
    format!("  {label:<18} {bar} {}%", skill.level.min(100))
}

/// Lines to paint since the last call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// New lines go below what is already on screen.
    Append(Vec<Line>),
    /// The log was cleared; wipe the screen first.
    Redraw(Vec<Line>),
}

/// Tracks how much of the log is already on screen.
#[derive(Debug, Default)]
pub struct Renderer {
    last: Option<MessageId>,
    generation: u64,
    stale: bool,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Force the next frame to repaint the whole log.
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    pub fn frame(&mut self, log: &OutputLog, prompt: &str) -> Frame {
        let redraw = self.stale || log.generation() != self.generation;
        if redraw {
            self.stale = false;
            self.generation = log.generation();
            self.last = None;
        }
        let mut lines = Vec::new();
        for message in log.since(self.last) {
            lines.extend(render_message(message, prompt));
            self.last = Some(message.id);
        }
        if redraw {
            Frame::Redraw(lines)
        } else {
            Frame::Append(lines)
        }
    }
}

/// Join lines without color, for piped output and tests.
pub fn plain_text(lines: &[Line]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(&line.text);
        out.push('\n');
    }
    out
}

/// Paint lines in raw mode. Each line ends with `\r\n` since raw mode does
/// not translate newlines.
pub fn write_lines<W: Write>(out: &mut W, lines: &[Line], theme: Theme) -> std::io::Result<()> {
    for line in lines {
        queue!(
            out,
            SetForegroundColor(line.tone.color(theme)),
            Print(&line.text),
            ResetColor,
            Print("\r\n"),
        )?;
    }
    Ok(())
}

/// Apply a frame: clear on redraw, then paint.
pub fn write_frame<W: Write>(out: &mut W, frame: &Frame, theme: Theme) -> std::io::Result<()> {
    match frame {
        Frame::Redraw(lines) => {
            queue!(
                out,
                terminal::Clear(terminal::ClearType::All),
                cursor::MoveTo(0, 0)
            )?;
            write_lines(out, lines, theme)
        },
        Frame::Append(lines) => write_lines(out, lines, theme),
    }
}

/// Redraw the input row in place: prompt, then the text or a placeholder.
pub fn write_input_line<W: Write>(
    out: &mut W,
    prompt: &str,
    text: &str,
    cursor_chars: usize,
    placeholder: &str,
    theme: Theme,
) -> std::io::Result<()> {
    queue!(
        out,
        cursor::MoveToColumn(0),
        terminal::Clear(terminal::ClearType::CurrentLine),
        SetForegroundColor(Tone::Prompt.color(theme)),
        Print(prompt),
        Print(' '),
        ResetColor,
    )?;
    if text.is_empty() {
        queue!(
            out,
            SetForegroundColor(Tone::Muted.color(theme)),
            Print(placeholder),
            ResetColor,
        )?;
    } else {
        queue!(out, Print(text))?;
    }
    let column = prompt.chars().count() + 1 + cursor_chars;
    queue!(out, cursor::MoveToColumn(u16::try_from(column).unwrap_or(u16::MAX)))?;
    out.flush()
}
