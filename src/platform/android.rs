//! Android widget family
//!
//! Buttons truncate long content to 8 characters; text boxes store their
//! content reversed. The grid enumerates buttons in insertion order but
//! never yields its text boxes.

use std::io::{self, Write};

use crate::widget::{Button, Grid, TextBox, UiFactory};

/// Android button - keeps content under 9 chars, else truncates to 8
#[derive(Default)]
pub struct AndroidButton {
    content: String,
}

impl Button for AndroidButton {
    fn set_content(&mut self, raw: &str) {
        self.content = if raw.chars().count() < 9 {
            raw.to_string()
        } else {
            raw.chars().take(8).collect()
        };
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn display(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.content)
    }

    fn press(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Sweet {}!", self.content)
    }
}

/// Android text box - stores content reversed
#[derive(Default)]
pub struct AndroidTextBox {
    content: String,
}

impl TextBox for AndroidTextBox {
    fn set_content(&mut self, raw: &str) {
        self.content = raw.chars().rev().collect();
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn display(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.content)
    }
}

/// Android grid - forward buttons, no text-box enumeration
#[derive(Default)]
pub struct AndroidGrid {
    buttons: Vec<Box<dyn Button>>,
    text_boxes: Vec<Box<dyn TextBox>>,
}

impl Grid for AndroidGrid {
    fn add_button(&mut self, button: Box<dyn Button>) {
        self.buttons.push(button);
    }

    fn add_text_box(&mut self, text_box: Box<dyn TextBox>) {
        self.text_boxes.push(text_box);
    }

    fn buttons(&self) -> Box<dyn Iterator<Item = &dyn Button> + '_> {
        Box::new(self.buttons.iter().map(|b| b.as_ref()))
    }

    fn text_boxes(&self) -> Box<dyn Iterator<Item = &dyn TextBox> + '_> {
        // Android grids never surface their text boxes, no matter how many
        // were added. Storage still preserves them in insertion order.
        Box::new(std::iter::empty())
    }
}

/// Factory for the Android family
#[derive(Debug)]
pub struct AndroidFactory;

impl UiFactory for AndroidFactory {
    fn create_button(&self, out: &mut dyn Write) -> io::Result<Box<dyn Button>> {
        writeln!(out, "Android Button created")?;
        Ok(Box::new(AndroidButton::default()))
    }

    fn create_text_box(&self, out: &mut dyn Write) -> io::Result<Box<dyn TextBox>> {
        writeln!(out, "Android TextBox created")?;
        Ok(Box::new(AndroidTextBox::default()))
    }

    fn create_grid(&self, out: &mut dyn Write) -> io::Result<Box<dyn Grid>> {
        writeln!(out, "Android Grid created")?;
        Ok(Box::new(AndroidGrid::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_truncates_long_content() {
        let mut button = AndroidButton::default();

        // 5 chars, under the limit
        button.set_content("Baton");
        assert_eq!(button.content(), "Baton");

        // 8 chars, still under the limit
        button.set_content("12345678");
        assert_eq!(button.content(), "12345678");

        // 10 chars, truncated to the first 8
        button.set_content("1234567890");
        assert_eq!(button.content(), "12345678");

        button.set_content("BigPurpleButton");
        assert_eq!(button.content(), "BigPurpl");

        button.set_content("");
        assert_eq!(button.content(), "");
    }

    #[test]
    fn test_press_message() {
        let mut button = AndroidButton::default();
        button.set_content("Baton");
        let mut out = Vec::new();
        button.press(&mut out).unwrap();
        assert_eq!(out, b"Sweet Baton!\n");
    }

    #[test]
    fn test_text_box_reverses_content() {
        let mut text_box = AndroidTextBox::default();

        text_box.set_content("xoBtxeT");
        assert_eq!(text_box.content(), "TextBox");

        text_box.set_content("");
        assert_eq!(text_box.content(), "");
    }

    #[test]
    fn test_text_box_reverse_round_trip() {
        let original = "EmptyTextBox";
        let mut text_box = AndroidTextBox::default();
        text_box.set_content(original);
        let reversed = text_box.content().to_string();
        text_box.set_content(&reversed);
        assert_eq!(text_box.content(), original);
    }

    #[test]
    fn test_grid_buttons_insertion_order() {
        let mut grid = AndroidGrid::default();
        for label in ["a", "b", "c"] {
            let mut button = AndroidButton::default();
            button.set_content(label);
            grid.add_button(Box::new(button));
        }

        let buttons: Vec<&str> = grid.buttons().map(|b| b.content()).collect();
        assert_eq!(buttons, ["a", "b", "c"]);
    }

    #[test]
    fn test_grid_never_yields_text_boxes() {
        let mut grid = AndroidGrid::default();
        for count in 1..=3 {
            let mut text_box = AndroidTextBox::default();
            text_box.set_content("t");
            grid.add_text_box(Box::new(text_box));
            assert_eq!(grid.text_boxes().count(), 0, "after {} additions", count);
        }
    }
}
