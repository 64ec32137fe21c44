// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the morsel CLI.
//!
//! Theme-aware ANSI output: OneDark for dark terminals, One Light for light
//! ones. Detection tries `MORSEL_THEME` first (for explicit control), then
//! `COLORFGBG` (set by some terminals), then defaults to dark because most
//! developers live there. Respects `NO_COLOR` and non-TTY pipelines by
//! dropping the escapes entirely.

use std::sync::OnceLock;

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();
static COLOR: OnceLock<bool> = OnceLock::new();

/// Detect terminal theme from environment
fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("MORSEL_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG format is "fg;bg"; backgrounds 7+ (except 8) read as light.
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

/// Should output carry ANSI escapes at all?
pub fn supports_color() -> bool {
    *COLOR.get_or_init(|| {
        std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
    })
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

/// Accent colors, picked per theme (OneDark / One Light values).
#[derive(Debug, Clone, Copy)]
pub enum Accent {
    Green,
    Yellow,
    Blue,
    Red,
}

impl Accent {
    fn rgb(self) -> (u8, u8, u8) {
        match (theme(), self) {
            (Theme::Dark, Accent::Green) => (152, 195, 121),
            (Theme::Dark, Accent::Yellow) => (229, 192, 123),
            (Theme::Dark, Accent::Blue) => (97, 175, 239),
            (Theme::Dark, Accent::Red) => (224, 108, 117),
            (Theme::Light, Accent::Green) => (80, 161, 79),
            (Theme::Light, Accent::Yellow) => (193, 132, 1),
            (Theme::Light, Accent::Blue) => (1, 132, 188),
            (Theme::Light, Accent::Red) => (228, 86, 73),
        }
    }
}

/// Wrap `text` in a truecolor escape, or return it untouched for
/// non-colored output.
pub fn paint(accent: Accent, text: &str) -> String {
    if !supports_color() {
        return text.to_string();
    }
    let (r, g, b) = accent.rgb();
    format!("\x1b[38;2;{};{};{}m{}{}", r, g, b, text, RESET)
}

/// Bold without color.
pub fn bold(text: &str) -> String {
    if !supports_color() {
        return text.to_string();
    }
    format!("{}{}{}", BOLD, text, RESET)
}

/// Dim without color.
pub fn dim(text: &str) -> String {
    if !supports_color() {
        return text.to_string();
    }
    format!("{}{}{}", DIM, text, RESET)
}

/// Format a count with thousands separators: 1234567 -> "1,234,567".
pub fn format_count(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Print a boxed section header.
pub fn header(title: &str) {
    let width = 64;
    println!("┌{}┐", "─".repeat(width));
    println!("│ {:<width$}│", bold(title), width = width - 1 + bold(title).len() - title.len());
    println!("└{}┘", "─".repeat(width));
}
