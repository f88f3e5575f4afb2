// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Command help table.

/// Help entry of one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandHelp {
    /// Name of command.
    pub name: &'static str,

    /// One line summary.
    pub summary: &'static str,

    /// Long description with usage examples.
    pub details: &'static str,
}

/// Help entries of every command, in display order.
pub static COMMAND_HELP: &[CommandHelp] = &[
    CommandHelp {
        name: "list",
        summary: "List all available templates.",
        details: "Examples:\n  \
                  iggen list\n  \
                  iggen list --proxy 127.0.0.1:1080",
    },
    CommandHelp {
        name: "search",
        summary: "Search templates by keyword.",
        details: "Matches names containing the keyword, or names whose letters and digits \
                  start or end with the keyword's letters and digits. Case is ignored.\n\n\
                  Examples:\n  \
                  iggen search java\n  \
                  iggen search node-js",
    },
    CommandHelp {
        name: "gen",
        summary: "Generate .gitignore from one or more templates.",
        details: "Templates are merged in the order given, and written to .gitignore in the \
                  current directory. Names are matched regardless of case.\n\n\
                  Examples:\n  \
                  iggen gen Python\n  \
                  iggen gen go rust --banners\n  \
                  iggen gen Node --proxy 127.0.0.1:7890",
    },
];

/// Look up help entry of command by name.
pub fn lookup(name: &str) -> Option<&'static CommandHelp> {
    COMMAND_HELP.iter().find(|help| help.name == name)
}

/// Summary of command, or empty string for unknown commands.
pub fn summary(name: &str) -> &'static str {
    lookup(name).map(|help| help.summary).unwrap_or_default()
}

/// Long description of command, or empty string for unknown commands.
pub fn details(name: &str) -> &'static str {
    lookup(name).map(|help| help.details).unwrap_or_default()
}
