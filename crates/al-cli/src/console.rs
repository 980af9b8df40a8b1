use al_account::{ProfileError, ProfileListener, ProfileNotice};
use al_core::ProfileView;

use std::sync::{Mutex, PoisonError};

/// One line of user-facing output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Line {
    Out(String),
    Err(String),
}

/// Buffers what a command shows the user; printed once the command ends.
#[derive(Debug, Default)]
pub(crate) struct Console {
    lines: Mutex<Vec<Line>>,
}

impl Console {
    pub(crate) fn say(&self, text: impl Into<String>) {
        self.push(Line::Out(text.into()));
    }

    pub(crate) fn complain(&self, text: impl Into<String>) {
        self.push(Line::Err(text.into()));
    }

    pub(crate) fn lines(&self) -> Vec<Line> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub(crate) fn print(&self) {
        for line in self.lines() {
            match line {
                Line::Out(text) => println!("{text}"),
                Line::Err(text) => eprintln!("{text}"),
            }
        }
    }

    fn push(&self, line: Line) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line);
    }
}

/// Renders the home screen fields; `failed` records whether a read error arrived.
#[derive(Debug)]
pub(crate) struct ProfilePrinter<'a> {
    console: &'a Console,
    failed: Mutex<bool>,
}

impl<'a> ProfilePrinter<'a> {
    pub(crate) fn new(console: &'a Console) -> Self {
        Self {
            console,
            failed: Mutex::new(false),
        }
    }

    pub(crate) fn failed(&self) -> bool {
        *self.failed.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ProfileListener for ProfilePrinter<'_> {
    fn on_profile(&self, view: &ProfileView) {
        self.console.say(format!("Имя: {}", view.name));
        self.console.say(format!("Email: {}", view.email));
    }

    fn on_notice(&self, notice: ProfileNotice) {
        self.console.complain(notice.user_message());
    }

    fn on_error(&self, error: &ProfileError) {
        *self.failed.lock().unwrap_or_else(PoisonError::into_inner) = true;
        self.console.complain(error.user_message());
    }
}
