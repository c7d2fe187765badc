//! Console design tokens and terminal detection

use crossterm::style::{Color, Stylize};
use is_terminal::IsTerminal;

use crate::config::ColorMode;

/// Semantic colors; nothing else in the console output is colored.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const INFO: &str = "●";
    pub const ARROW: &str = "↳";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const INFO: &str = "[..]";
    pub const ARROW: &str = "->";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Info,
    Arrow,
}

impl Icon {
    pub fn render(&self, unicode: bool) -> &'static str {
        match (unicode, self) {
            (true, Icon::Success) => icons::SUCCESS,
            (true, Icon::Error) => icons::ERROR,
            (true, Icon::Warning) => icons::WARNING,
            (true, Icon::Info) => icons::INFO,
            (true, Icon::Arrow) => icons::ARROW,
            (false, Icon::Success) => icons_ascii::SUCCESS,
            (false, Icon::Error) => icons_ascii::ERROR,
            (false, Icon::Warning) => icons_ascii::WARNING,
            (false, Icon::Info) => icons_ascii::INFO,
            (false, Icon::Arrow) => icons_ascii::ARROW,
        }
    }

    fn color(&self) -> Color {
        match self {
            Icon::Success => colors::SUCCESS,
            Icon::Error => colors::ERROR,
            Icon::Warning => colors::WARNING,
            Icon::Info => colors::INFO,
            Icon::Arrow => colors::DIM,
        }
    }
}

/// What the console can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleStyle {
    pub color: bool,
    pub unicode: bool,
}

impl ConsoleStyle {
    /// Plain ASCII without escapes; stable across terminals
    pub const PLAIN: ConsoleStyle = ConsoleStyle {
        color: false,
        unicode: false,
    };

    /// Detect from the color preference, stdout and the environment
    pub fn detect(mode: ColorMode, unicode: bool) -> Self {
        detect_impl(
            mode,
            unicode,
            |key| std::env::var(key).ok(),
            std::io::stdout().is_terminal(),
        )
    }

    pub fn icon(&self, icon: Icon) -> String {
        let s = icon.render(self.unicode);
        if self.color {
            format!("{}", s.with(icon.color()))
        } else {
            s.to_string()
        }
    }

    pub fn dim(&self, text: &str) -> String {
        if self.color {
            format!("{}", text.with(colors::DIM))
        } else {
            text.to_string()
        }
    }
}

fn detect_impl(
    mode: ColorMode,
    unicode: bool,
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
) -> ConsoleStyle {
    let term = get_env("TERM").unwrap_or_default();
    let term_is_dumb = term.eq_ignore_ascii_case("dumb");

    let color = match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => is_tty && !term_is_dumb && get_env("NO_COLOR").is_none(),
    };

    ConsoleStyle {
        color,
        unicode: unicode && !term_is_dumb,
    }
}
