use crate::scene::Role;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color, // Blue
    pub comment: Color, // Grey
    pub success: Color, // Green
    pub border_focused: Color,
    pub border_normal: Color,
    pub cursor: Color,     // Yellow for active cursors/pointers
    pub visited: Color,    // Grey-blue for already-examined elements
    pub accepted: Color,   // Green for elements in the answer
    pub rejected: Color,   // Red for discarded elements
    pub active: Color,     // Orange for the working set
    pub dim: Color,        // Faint for unfilled cells
    pub phase: Color,      // Teal for the phase tag
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250), // Blue
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    cursor: Color::Rgb(249, 226, 175),         // Yellow
    visited: Color::Rgb(116, 143, 184),        // Grey-blue
    accepted: Color::Rgb(166, 227, 161),       // Green
    rejected: Color::Rgb(243, 139, 168),       // Red
    active: Color::Rgb(250, 179, 135),         // Orange
    dim: Color::Rgb(88, 91, 112),              // Faint
    phase: Color::Rgb(148, 226, 213),          // Cyan/teal
};

impl Theme {
    /// Colour for a scene role
    pub fn role_color(&self, role: Role) -> Color {
        match role {
            Role::Normal => self.fg,
            Role::Cursor => self.cursor,
            Role::Active => self.active,
            Role::Visited => self.visited,
            Role::Accepted => self.accepted,
            Role::Rejected => self.rejected,
            Role::Dim => self.dim,
        }
    }
}
