// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's named colour themes and provides
//! utilities for converting colors between Ratatui's internal representation
//! and external formats (such as hexadecimal strings) used for terminal
//! emulator styling.

use ratatui::style::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Theme {
    pub(crate) name: &'static str,

    pub(crate) background_colour: Color,
    pub(crate) sidebar_colour: Color,
    pub(crate) text_colour: Color,
    pub(crate) accent_colour: Color,
}

const fn rgb(hex: u32) -> Color {
    Color::Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

const fn theme(name: &'static str, background: u32, sidebar: u32, text: u32, accent: u32) -> Theme {
    Theme {
        name,
        background_colour: rgb(background),
        sidebar_colour: rgb(sidebar),
        text_colour: rgb(text),
        accent_colour: rgb(accent),
    }
}

/// Every theme selectable from the settings page, in display order.
pub(crate) const THEMES: [Theme; 16] = [
    theme("Glacier Blue", 0xEEF5FF, 0xC4DFFF, 0x2C3E50, 0x2E5C9A),
    theme("Volcanic Dark", 0x1A1A1A, 0x2D2D2D, 0xFFFFFF, 0xFF4B2B),
    theme("Forest Depths", 0x1E2923, 0x2A3831, 0xE8F3E9, 0x43A047),
    theme("Royal Purple", 0x21152C, 0x2D1B3D, 0xF8F0FF, 0x9C27B0),
    theme("Ocean Deep", 0x0A192F, 0x112240, 0xE6F1FF, 0x64FFDA),
    theme("Desert Night", 0x2B2118, 0x3D2E21, 0xFFF8F0, 0xFF9800),
    theme("Cherry Blossom", 0xFFF0F3, 0xFFE1E7, 0x4A1B24, 0xFF4D6D),
    theme("Emerald City", 0x004D40, 0x00695C, 0xE0F2F1, 0x1DE9B6),
    theme("Nordic Frost", 0x2E3440, 0x3B4252, 0xECEFF4, 0x88C0D0),
    theme("Golden Hour", 0x2C1810, 0x3D2217, 0xFFF3E0, 0xFFB74D),
    theme("Electric Dreams", 0x16161E, 0x1E1E2A, 0xE0E0FF, 0xFF2E97),
    theme("Mint Chocolate", 0x1B2B21, 0x2A3D30, 0xE8F5EC, 0x00BFA5),
    theme("Cosmic Purple", 0x13111C, 0x1D1A26, 0xE6E4F0, 0xB388FF),
    theme("Ruby Red", 0x2D1418, 0x3D1D22, 0xFFE6E9, 0xFF1744),
    theme("Teal Depths", 0x0B3F3F, 0x0F4C4C, 0xE0F7F7, 0x26C6DA),
    theme("Creamsicle", 0xF7E8D0, 0xE7C697, 0x2C4B3B, 0xFF7B54),
];

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        THEMES[0]
    }
}

impl Theme {
    /// Looks up a theme by name, ignoring case.
    pub(crate) fn named(name: &str) -> Option<Theme> {
        THEMES
            .iter()
            .find(|theme| theme.name.eq_ignore_ascii_case(name))
            .copied()
    }

    pub(crate) fn index(&self) -> usize {
        THEMES
            .iter()
            .position(|theme| theme.name == self.name)
            .unwrap_or_default()
    }

    /// Text drawn on top of the accent colour, such as highlighted rows.
    pub(crate) fn highlight_fg(&self) -> Color {
        self.background_colour
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// This is primarily used to set the terminal emulator's background color
    /// via escape sequences. Colours that are not RGB have no hex form.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}
