// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! ANSI colors for terminal output.

use std::fmt::{Debug, Display};

pub const GREY: &str = "\x1b[0;0m\x1b[90m";
pub const LAVENDER: &str = "\x1b[38;5;183;1m";
pub const MINT: &str = "\x1b[38;5;48;1m";
pub const RED: &str = "\x1b[31;1m";
pub const RESET: &str = "\x1b[0;0m";
pub const YELLOW: &str = "\x1b[33;1m";

/// Wraps a displayable value in color codes.
pub trait Color {
    fn color(&self, color: &str) -> String;

    fn grey(&self) -> String {
        self.color(GREY)
    }
    fn mint(&self) -> String {
        self.color(MINT)
    }
    fn red(&self) -> String {
        self.color(RED)
    }
    fn yellow(&self) -> String {
        self.color(YELLOW)
    }
}

impl<T: Display + ?Sized> Color for T {
    fn color(&self, color: &str) -> String {
        format!("{color}{self}{RESET}")
    }
}

/// Like [`Color`], but for types that only implement [`Debug`].
pub trait DebugColor {
    fn debug_color(&self, color: &str) -> String;

    fn debug_lavender(&self) -> String {
        self.debug_color(LAVENDER)
    }
    fn debug_red(&self) -> String {
        self.debug_color(RED)
    }
}

impl<T: Debug + ?Sized> DebugColor for T {
    fn debug_color(&self, color: &str) -> String {
        format!("{color}{self:?}{RESET}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_and_resets() {
        assert_eq!("hi".mint(), format!("{MINT}hi{RESET}"));
        assert_eq!(30u64.debug_lavender(), format!("{LAVENDER}30{RESET}"));
    }
}
