//! Human-readable status output supplied by the caller.

use std::cell::RefCell;

pub trait MessageSink {
    fn send(&self, message: &str);
}

impl<F> MessageSink for F
where
    F: Fn(&str),
{
    fn send(&self, message: &str) {
        self(message)
    }
}

/// Prints each message on its own line to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl MessageSink for StderrSink {
    fn send(&self, message: &str) {
        eprintln!("{message}");
    }
}

/// Routes messages into the `log` facade at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl MessageSink for LogSink {
    fn send(&self, message: &str) {
        log::warn!(target: "barfeed::sink", "{message}");
    }
}

/// Keeps every message, in order.
#[derive(Debug, Default)]
pub struct CollectingSink {
    messages: RefCell<Vec<String>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.messages.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }
}

impl MessageSink for CollectingSink {
    fn send(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
