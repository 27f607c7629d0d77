//! Widget interfaces for PolyUI
//!
//! Every platform family implements the same four seams: `Button`,
//! `TextBox`, `Grid`, and `UiFactory`. Rendering is simulated - widgets
//! write their content to an injected output sink instead of drawing, so
//! the printed line sequence can be asserted in tests.

use std::io::{self, Write};

/// A pressable widget with display content
///
/// `set_content` applies the family's transformation exactly once, at
/// assignment time; `display` and `press` only ever see the stored,
/// transformed value.
pub trait Button {
    /// Apply the platform transformation and store the result
    fn set_content(&mut self, raw: &str);

    /// Current stored (transformed) content
    fn content(&self) -> &str;

    /// Write the stored content to the sink
    fn display(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Write the family's press message to the sink
    fn press(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// A display-only text widget
///
/// Same contract as [`Button`], minus the press operation.
pub trait TextBox {
    fn set_content(&mut self, raw: &str);
    fn content(&self) -> &str;
    fn display(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// An ordered container of buttons and text boxes
///
/// Insertion order is preserved in storage. Enumeration is a
/// family-specific view over the stored sequence: lazy per call,
/// re-enumerable across calls, never mutating the backing store.
pub trait Grid {
    fn add_button(&mut self, button: Box<dyn Button>);
    fn add_text_box(&mut self, text_box: Box<dyn TextBox>);

    /// Enumerate buttons in the family's order
    fn buttons(&self) -> Box<dyn Iterator<Item = &dyn Button> + '_>;

    /// Enumerate text boxes in the family's order
    fn text_boxes(&self) -> Box<dyn Iterator<Item = &dyn TextBox> + '_>;
}

/// Factory for one platform family
///
/// Stateless. Each create method writes the family's "created" line to the
/// sink before handing back the widget, so construction is observable the
/// same way regardless of the caller.
pub trait UiFactory: std::fmt::Debug {
    fn create_button(&self, out: &mut dyn Write) -> io::Result<Box<dyn Button>>;
    fn create_text_box(&self, out: &mut dyn Write) -> io::Result<Box<dyn TextBox>>;
    fn create_grid(&self, out: &mut dyn Write) -> io::Result<Box<dyn Grid>>;
}
