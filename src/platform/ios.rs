//! iOS widget family
//!
//! The baseline family: content passes through untouched and the grid
//! enumerates both widget kinds in insertion order.

use std::io::{self, Write};

use crate::widget::{Button, Grid, TextBox, UiFactory};

/// iOS button - identity content transformation
#[derive(Default)]
pub struct IosButton {
    content: String,
}

impl Button for IosButton {
    fn set_content(&mut self, raw: &str) {
        self.content = raw.to_string();
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn display(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.content)
    }

    fn press(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "IOS Button pressed, content - {}", self.content)
    }
}

/// iOS text box - identity content transformation
#[derive(Default)]
pub struct IosTextBox {
    content: String,
}

impl TextBox for IosTextBox {
    fn set_content(&mut self, raw: &str) {
        self.content = raw.to_string();
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn display(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.content)
    }
}

/// iOS grid - insertion-order enumeration for both widget kinds
#[derive(Default)]
pub struct IosGrid {
    buttons: Vec<Box<dyn Button>>,
    text_boxes: Vec<Box<dyn TextBox>>,
}

impl Grid for IosGrid {
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
        Box::new(self.text_boxes.iter().map(|t| t.as_ref()))
    }
}

/// Factory for the iOS family
#[derive(Debug)]
pub struct IosFactory;

impl UiFactory for IosFactory {
    fn create_button(&self, out: &mut dyn Write) -> io::Result<Box<dyn Button>> {
        writeln!(out, "iOS Button created")?;
        Ok(Box::new(IosButton::default()))
    }

    fn create_text_box(&self, out: &mut dyn Write) -> io::Result<Box<dyn TextBox>> {
        writeln!(out, "iOS TextBox created")?;
        Ok(Box::new(IosTextBox::default()))
    }

    fn create_grid(&self, out: &mut dyn Write) -> io::Result<Box<dyn Grid>> {
        writeln!(out, "iOS Grid created")?;
        Ok(Box::new(IosGrid::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_passes_through() {
        let mut button = IosButton::default();
        button.set_content("BigPurpleButton");
        assert_eq!(button.content(), "BigPurpleButton");

        let mut text_box = IosTextBox::default();
        text_box.set_content("xoBtxeT");
        assert_eq!(text_box.content(), "xoBtxeT");

        text_box.set_content("");
        assert_eq!(text_box.content(), "");
    }

    #[test]
    fn test_press_message_includes_content() {
        let mut button = IosButton::default();
        button.set_content("Baton");
        let mut out = Vec::new();
        button.press(&mut out).unwrap();
        assert_eq!(out, b"IOS Button pressed, content - Baton\n");
    }

    #[test]
    fn test_display_shows_stored_content() {
        let mut button = IosButton::default();
        button.set_content("SmallButton");
        let mut out = Vec::new();
        button.display(&mut out).unwrap();
        assert_eq!(out, b"SmallButton\n");
    }

    #[test]
    fn test_grid_enumerates_in_insertion_order() {
        let mut grid = IosGrid::default();
        for label in ["a", "b", "c"] {
            let mut button = IosButton::default();
            button.set_content(label);
            grid.add_button(Box::new(button));

            let mut text_box = IosTextBox::default();
            text_box.set_content(label);
            grid.add_text_box(Box::new(text_box));
        }

        let buttons: Vec<&str> = grid.buttons().map(|b| b.content()).collect();
        assert_eq!(buttons, ["a", "b", "c"]);

        let text_boxes: Vec<&str> = grid.text_boxes().map(|t| t.content()).collect();
        assert_eq!(text_boxes, ["a", "b", "c"]);

        // Enumeration does not consume the backing store
        assert_eq!(grid.buttons().count(), 3);
    }

    #[test]
    fn test_factory_emits_created_lines() {
        let factory = IosFactory;
        let mut out = Vec::new();
        factory.create_grid(&mut out).unwrap();
        factory.create_button(&mut out).unwrap();
        factory.create_text_box(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text.lines().collect::<Vec<_>>(),
            ["iOS Grid created", "iOS Button created", "iOS TextBox created"]
        );
    }
}
