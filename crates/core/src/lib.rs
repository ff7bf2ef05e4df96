#![warn(missing_docs)]
//! Core primitives shared across the workspace: message levels, styled text,
//! packed colours and the console queue that feeds the overlay.

pub mod argb;
mod console;
mod message;
mod text;

// Re-export commonly used types
pub use console::{Console, ConsoleError, ConsoleSender, MessageSource};
pub use message::{Message, MessageLevel};
pub use text::{StyledText, TextSpan};
