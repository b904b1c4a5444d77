// SPDX-FileCopyrightText: 2026 Maria Eduarda
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line entry and terminal interface of Agenda.

mod cli;
mod cmd_generate_completion;
mod cmd_tui;
mod config;
mod logging;
mod tui;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::cmd_generate_completion::{CmdGenerateCompletion, Shell};
pub use crate::cmd_tui::CmdTui;
pub use crate::config::{Config, parse_config};
pub use crate::tui::{AppStore, run_contact_book};
