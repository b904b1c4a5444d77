// SPDX-FileCopyrightText: 2026 Maria Eduarda
//
// SPDX-License-Identifier: Apache-2.0

//! The hidden `generate-completion` command, which prints or installs the
//! completion script of `agenda` for one shell.

use std::{
    error::Error,
    io::{self, Write},
    path::{Path, PathBuf},
};

use agenda_core::APP_NAME;
use clap::{ArgMatches, Command, ValueEnum, ValueHint, arg, value_parser};
use clap_complete::{Generator, generate};
use tokio::fs;

use crate::Cli;
use crate::config::expand_path;

#[derive(Debug, Clone)]
pub struct CmdGenerateCompletion {
    pub shell: Shell,

    /// File or directory to install the script into, stdout when unset
    pub output: Option<PathBuf>,
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Generate the completion script of agenda")
            .hide(true)
            .arg(arg!(shell: <SHELL> "Shell to complete for").value_parser(value_parser!(Shell)))
            .arg(
                arg!(-o --output <PATH> "Write the script to this file, or into this directory")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::AnyPath),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let Some(&shell) = matches.get_one::<Shell>("shell") else {
            unreachable!("shell is a required argument")
        };
        Self {
            shell,
            output: matches.get_one("output").cloned(),
        }
    }

    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating shell completion...");
        let script = self.shell.script();

        let Some(output) = &self.output else {
            io::stdout().write_all(&script)?;
            return Ok(());
        };

        let path = self.target(output)?;
        fs::write(&path, script)
            .await
            .map_err(|e| format!("Failed to write completion to {}: {e}", path.display()))?;
        tracing::info!(shell = ?self.shell, path = %path.display(), "completion installed");
        Ok(())
    }

    /// Resolves `output`, appending the shell's file name when it is a directory.
    fn target(&self, output: &Path) -> Result<PathBuf, Box<dyn Error>> {
        let path = expand_path(output)?;
        Ok(if path.is_dir() {
            path.join(self.shell.file_name())
        } else {
            path
        })
    }
}

/// Shells with a completion script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Fish,
    Nushell,
    Zsh,
}

impl Shell {
    /// The completion script for the whole command line, `tui --category` included.
    pub fn script(self) -> Vec<u8> {
        match self {
            Shell::Bash => render(clap_complete::Shell::Bash),
            Shell::Fish => render(clap_complete::Shell::Fish),
            Shell::Nushell => render(clap_complete_nushell::Nushell {}),
            Shell::Zsh => render(clap_complete::Shell::Zsh),
        }
    }

    /// File name the shell looks the script up by.
    pub fn file_name(self) -> String {
        match self {
            Shell::Bash => format!("{APP_NAME}.bash"),
            Shell::Fish => format!("{APP_NAME}.fish"),
            Shell::Nushell => format!("{APP_NAME}.nu"),
            Shell::Zsh => format!("_{APP_NAME}"),
        }
    }
}

fn render(generator: impl Generator) -> Vec<u8> {
    let mut cmd = Cli::command();
    let mut buf = vec![];
    generate(generator, &mut cmd, APP_NAME, &mut buf);
    buf
}
