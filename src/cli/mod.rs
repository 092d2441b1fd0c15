//! Command-line interface — one-shot commands and the interactive menu.

pub mod commands;
pub mod menu;
