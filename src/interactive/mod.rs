//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, InputMode, KeyAction, Message, MessageStyle, Tui, run_tui};
