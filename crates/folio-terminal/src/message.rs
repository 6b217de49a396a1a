//! Messages appended to the output log and the replies commands produce.

use std::fmt;

use chrono::{DateTime, Local};

use crate::content::{Profile, Project, SkillCategory};

/// Identity of a message in the output log. Never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How a message is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// The user's own input, echoed before dispatch.
    CommandEcho,
    Plain,
    Success,
    Error,
    Warning,
    Info,
    /// Transient "thinking" placeholder, removed once dispatch runs.
    Pending,
}

impl MessageKind {
    /// Glyph shown in front of the message body, if any.
    pub fn indicator(self) -> Option<&'static str> {
        match self {
            Self::Success => Some("✓"),
            Self::Error => Some("✗"),
            Self::Warning => Some("⚠"),
            Self::Info => Some("ℹ"),
            Self::Pending => Some("◐"),
            Self::CommandEcho | Self::Plain => None,
        }
    }
}

/// One line of the help panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEntry {
    pub usage: String,
    pub description: String,
}

/// A titled group of help entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpCategory {
    pub title: String,
    pub entries: Vec<HelpEntry>,
}

/// Structured output the display surface knows how to draw.
#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    /// Greeting shown at start-up and after `clear`.
    Welcome {
        name: String,
        title: String,
        quick_commands: Vec<String>,
    },
    Help {
        categories: Vec<HelpCategory>,
        shortcuts: Vec<(String, String)>,
    },
    About(Profile),
    Projects {
        filter: Option<String>,
        projects: Vec<Project>,
    },
    ProjectDetail(Project),
    Skills(Vec<SkillCategory>),
    Contact {
        email: String,
        links: Vec<(String, String)>,
    },
    /// Rows of rain glyphs, top to bottom.
    Matrix(Vec<String>),
    /// Pre-formatted art, drawn verbatim.
    Art(String),
}

/// Message body: text or a panel.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Text(String),
    Panel(Panel),
}

impl Payload {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Panel(_) => None,
        }
    }

    pub fn as_panel(&self) -> Option<&Panel> {
        match self {
            Self::Panel(panel) => Some(panel),
            Self::Text(_) => None,
        }
    }
}

/// What a command hands back before it is stamped into a [`Message`].
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub kind: MessageKind,
    pub payload: Payload,
}

impl Reply {
    pub fn text(kind: MessageKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            payload: Payload::Text(text.into()),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::text(MessageKind::Plain, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::text(MessageKind::Success, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::text(MessageKind::Error, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::text(MessageKind::Warning, text)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::text(MessageKind::Info, text)
    }

    pub fn panel(panel: Panel) -> Self {
        Self {
            kind: MessageKind::Plain,
            payload: Payload::Panel(panel),
        }
    }
}

/// An entry in the output log.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: MessageId,
    pub kind: MessageKind,
    pub payload: Payload,
    /// The submission this message belongs to, when there is one.
    pub command: Option<String>,
    pub created_at: DateTime<Local>,
}

impl Message {
    pub fn text(&self) -> Option<&str> {
        self.payload.as_text()
    }

    pub fn panel(&self) -> Option<&Panel> {
        self.payload.as_panel()
    }
}
