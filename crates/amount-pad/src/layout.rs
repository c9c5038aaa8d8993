//! Keypad button grid
//!
//! Describes where every key sits so a front end can render the pad and map
//! a tap (by element id or by terminal cell) back to a [`Key`].

use serde::{Deserialize, Serialize};

use crate::keys::Key;

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeypadButton {
    /// The key this button sends
    pub key: Key,
    /// Stable element id (`btn-7`, `btn-done`, ...)
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
    /// Number of rows the button covers
    pub row_span: usize,
}

impl KeypadButton {
    /// Creates a single-cell button
    #[must_use]
    pub fn new(key: Key, row: usize, col: usize) -> Self {
        Self {
            key,
            id: key.element_id(),
            row,
            col,
            row_span: 1,
        }
    }

    /// Makes the button cover `rows` grid rows
    #[must_use]
    pub fn spanning(mut self, rows: usize) -> Self {
        self.row_span = rows.max(1);
        self
    }

    /// Returns the label printed on the button
    #[must_use]
    pub fn label(&self) -> String {
        self.key.label()
    }

    /// Returns true if the button covers the given cell
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        col == self.col && row >= self.row && row < self.row + self.row_span
    }
}

/// Amount keypad layout
///
/// ```text
/// [ 1 ] [ 2 ] [ 3 ] [ ⌫ ]
/// [ 4 ] [ 5 ] [ 6 ] [ ✕ ]
/// [ 7 ] [ 8 ] [ 9 ] [ ✓ ]
/// [ ± ] [ 0 ] [ . ] [ ✓ ]
/// [ + ] [ − ] [ × ] [ = ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard amount keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            KeypadButton::new(Key::Digit(1), 0, 0),
            KeypadButton::new(Key::Digit(2), 0, 1),
            KeypadButton::new(Key::Digit(3), 0, 2),
            KeypadButton::new(Key::Delete, 0, 3),
            KeypadButton::new(Key::Digit(4), 1, 0),
            KeypadButton::new(Key::Digit(5), 1, 1),
            KeypadButton::new(Key::Digit(6), 1, 2),
            KeypadButton::new(Key::Close, 1, 3),
            KeypadButton::new(Key::Digit(7), 2, 0),
            KeypadButton::new(Key::Digit(8), 2, 1),
            KeypadButton::new(Key::Digit(9), 2, 2),
            KeypadButton::new(Key::Done, 2, 3).spanning(2),
            KeypadButton::new(Key::ToggleSign, 3, 0),
            KeypadButton::new(Key::Digit(0), 3, 1),
            KeypadButton::new(Key::Decimal, 3, 2),
            KeypadButton::new(Key::ADD, 4, 0),
            KeypadButton::new(Key::SUBTRACT, 4, 1),
            KeypadButton::new(Key::MULTIPLY, 4, 2),
            KeypadButton::new(Key::Equals, 4, 3),
        ];

        Self {
            buttons,
            rows: 5,
            cols: 4,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns all buttons in row-major order
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Gets the button covering a cell, accounting for row spans
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.buttons.iter().find(|b| b.covers(row, col))
    }

    /// Finds a button by element id
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the button that sends `key`
    #[must_use]
    pub fn find_button_by_key(&self, key: Key) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.key == key)
    }

    /// Resolves a tap on an element id to its key
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<Key> {
        self.find_button_by_id(element_id).map(|b| b.key)
    }

    /// Converts a terminal cell inside a bordered area to a key.
    ///
    /// `area` is `(x, y, width, height)` including a one-cell border.
    #[must_use]
    pub fn hit_test(&self, area: (u16, u16, u16, u16), x: u16, y: u16) -> Option<Key> {
        let (ax, ay, width, height) = area;
        if x < ax || y < ay || x >= ax.saturating_add(width) || y >= ay.saturating_add(height) {
            return None;
        }

        let rel_x = x - ax;
        let rel_y = y - ay;

        // border
        if rel_x == 0 || rel_y == 0 || rel_x >= width - 1 || rel_y >= height - 1 {
            return None;
        }

        let btn_width = (width - 2) / self.cols as u16;
        let btn_height = (height - 2) / self.rows as u16;
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = ((rel_x - 1) / btn_width) as usize;
        let row = ((rel_y - 1) / btn_height) as usize;
        self.get_button_at(row, col).map(|b| b.key)
    }

    /// Renders the grid as text, one line per row
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows);
        for row in 0..self.rows {
            let cells: Vec<String> = (0..self.cols)
                .map(|col| {
                    self.get_button_at(row, col)
                        .map_or_else(|| "     ".to_string(), |b| format!("[ {} ]", b.label()))
                })
                .collect();
            lines.push(cells.join(" "));
        }
        lines.join("\n")
    }
}
