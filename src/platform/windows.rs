//! Windows widget family
//!
//! Buttons shout their content in uppercase; text boxes keep only the back
//! half of the input and append a runtime credit. The grid walks buttons in
//! reverse insertion order and text boxes in the staggered order computed
//! by [`staggered_indices`].

use std::io::{self, Write};

use crate::widget::{Button, Grid, TextBox, UiFactory};

/// Windows button - uppercases content on assignment
#[derive(Default)]
pub struct WindowsButton {
    content: String,
}

impl Button for WindowsButton {
    fn set_content(&mut self, raw: &str) {
        self.content = raw.to_uppercase();
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn display(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.content)
    }

    fn press(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Windows button pressed")
    }
}

/// Windows text box - keeps the back half of the input plus a credit suffix
///
/// The split point is `char_count / 2` (integer division), so an empty
/// input stores just the suffix.
#[derive(Default)]
pub struct WindowsTextBox {
    content: String,
}

impl TextBox for WindowsTextBox {
    fn set_content(&mut self, raw: &str) {
        let len = raw.chars().count();
        let mut content: String = raw.chars().skip(len / 2).collect();
        content.push_str(" by .Net Core");
        self.content = content;
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn display(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.content)
    }
}

/// Index order for the Windows text-box walk.
///
/// A single element is yielded once. Otherwise the walk runs from the last
/// index down to 1, yielding index 0 ahead of the last element on its first
/// step; index 0 itself is never reached by the walk. Orders by count:
/// 0 -> `[]`, 1 -> `[0]`, 2 -> `[0, 1]`, 3 -> `[0, 2, 1]`, 4 -> `[0, 3, 2, 1]`.
pub(crate) fn staggered_indices(count: usize) -> Vec<usize> {
    if count == 1 {
        return vec![0];
    }
    let mut order = Vec::with_capacity(count);
    for i in (1..count).rev() {
        if i == count - 1 {
            order.push(0);
        }
        order.push(i);
    }
    order
}

/// Windows grid - reverse-order buttons, staggered text boxes
#[derive(Default)]
pub struct WindowsGrid {
    buttons: Vec<Box<dyn Button>>,
    text_boxes: Vec<Box<dyn TextBox>>,
}

impl Grid for WindowsGrid {
    fn add_button(&mut self, button: Box<dyn Button>) {
        self.buttons.push(button);
    }

    fn add_text_box(&mut self, text_box: Box<dyn TextBox>) {
        self.text_boxes.push(text_box);
    }

    fn buttons(&self) -> Box<dyn Iterator<Item = &dyn Button> + '_> {
        Box::new(self.buttons.iter().rev().map(|b| b.as_ref()))
    }

    fn text_boxes(&self) -> Box<dyn Iterator<Item = &dyn TextBox> + '_> {
        Box::new(
            staggered_indices(self.text_boxes.len())
                .into_iter()
                .map(move |i| self.text_boxes[i].as_ref()),
        )
    }
}

/// Factory for the Windows family
#[derive(Debug)]
pub struct WindowsFactory;

impl UiFactory for WindowsFactory {
    fn create_button(&self, out: &mut dyn Write) -> io::Result<Box<dyn Button>> {
        writeln!(out, "Windows Button created")?;
        Ok(Box::new(WindowsButton::default()))
    }

    fn create_text_box(&self, out: &mut dyn Write) -> io::Result<Box<dyn TextBox>> {
        writeln!(out, "Windows TextBox created")?;
        Ok(Box::new(WindowsTextBox::default()))
    }

    fn create_grid(&self, out: &mut dyn Write) -> io::Result<Box<dyn Grid>> {
        writeln!(out, "Windows Grid created")?;
        Ok(Box::new(WindowsGrid::default()))
    }
}
