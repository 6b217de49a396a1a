//! The output log: an ordered, append-and-filter sequence of messages.

use chrono::{DateTime, Local};

use crate::message::{Message, MessageId, MessageKind, Payload, Reply};

/// Messages in append order.
///
/// Ids come from a counter that survives [`OutputLog::clear`], so a display
/// surface can track what it has drawn by id alone. `generation` bumps on
/// every clear so the surface knows to redraw from scratch.
#[derive(Debug, Default)]
pub struct OutputLog {
    messages: Vec<Message>,
    next_id: u64,
    generation: u64,
}

impl OutputLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message and return its id.
    pub fn push(
        &mut self,
        kind: MessageKind,
        payload: Payload,
        command: Option<&str>,
        created_at: DateTime<Local>,
    ) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        self.messages.push(Message {
            id,
            kind,
            payload,
            command: command.map(str::to_string),
            created_at,
        });
        id
    }

    /// Append a command reply.
    pub fn push_reply(
        &mut self,
        reply: Reply,
        command: Option<&str>,
        created_at: DateTime<Local>,
    ) -> MessageId {
        self.push(reply.kind, reply.payload, command, created_at)
    }

    /// Remove a message by id. Returns false if it was already gone.
    pub fn remove(&mut self, id: MessageId) -> bool {
        let before = self.messages.len();
        self.messages.retain(|m| m.id != id);
        self.messages.len() != before
    }

    /// Drop every message.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.generation += 1;
    }

    pub fn get(&self, id: MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Bumped on every clear.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Messages appended after `id`, in order.
    pub fn since(&self, id: Option<MessageId>) -> impl Iterator<Item = &Message> {
        self.messages
            .iter()
            .filter(move |m| id.is_none_or(|seen| m.id > seen))
    }
}
