//! Console message queue.
//!
//! Producers anywhere in the client log through a cloneable [`ConsoleSender`];
//! the render thread owns the [`Console`] and drains it once per frame. The
//! hand-off is an unbounded `mpsc` channel, so submission order is kept and
//! draining never blocks.

use crate::message::{Message, MessageLevel};
use crate::text::StyledText;
use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use thiserror::Error;
use tracing::{trace, warn};

/// Errors emitted when submitting console messages.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConsoleError {
    /// The receiving console was dropped (e.g. the overlay shut down).
    #[error("console is closed; message dropped")]
    Disconnected,
}

/// Anything the overlay can pull pending messages from.
pub trait MessageSource {
    /// Take the oldest pending message without blocking.
    fn poll(&mut self) -> Option<Message>;

    /// Take every pending message, oldest first.
    fn drain(&mut self) -> Vec<Message> {
        let mut out = Vec::new();
        while let Some(message) = self.poll() {
            out.push(message);
        }
        out
    }
}

/// Write half of the console. Cheap to clone and safe to send across threads.
#[derive(Debug, Clone)]
pub struct ConsoleSender {
    tx: Sender<Message>,
}

impl ConsoleSender {
    /// Queue a prebuilt message.
    pub fn send(&self, message: Message) -> Result<(), ConsoleError> {
        trace!(level = %message.level(), duration = message.duration(), "console message queued");
        self.tx.send(message).map_err(|err| {
            warn!(level = %err.0.level(), "dropping console message: {}", err.0.text());
            ConsoleError::Disconnected
        })
    }

    /// Queue a message with the given level, text and on-screen duration.
    pub fn log(
        &self,
        level: MessageLevel,
        text: impl Into<StyledText>,
        duration: f64,
    ) -> Result<(), ConsoleError> {
        self.send(Message::new(level, text, duration))
    }
}

/// Read half of the console, owned by the render thread.
#[derive(Debug)]
pub struct Console {
    rx: Receiver<Message>,
    tx: Sender<Message>,
}

impl Console {
    /// Create a console and its first sender.
    pub fn channel() -> (ConsoleSender, Console) {
        let (tx, rx) = mpsc::channel();
        let sender = ConsoleSender { tx: tx.clone() };
        (sender, Console { rx, tx })
    }

    /// Another sender for this console.
    pub fn sender(&self) -> ConsoleSender {
        ConsoleSender {
            tx: self.tx.clone(),
        }
    }
}

impl MessageSource for Console {
    fn poll(&mut self) -> Option<Message> {
        match self.rx.try_recv() {
            Ok(message) => Some(message),
            // The console keeps its own sender, so the channel never disconnects.
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}

impl MessageSource for VecDeque<Message> {
    fn poll(&mut self) -> Option<Message> {
        self.pop_front()
    }
}
