//! Demo driver
//!
//! Sequences one demonstration per configured platform: build a grid of
//! sample widgets through the platform's factory, then walk the grid's
//! enumerations. All output goes through the injected sink.

use std::io::Write;

use crate::config::DemoConfig;
use crate::errors::UiError;
use crate::platform::Platform;
use crate::widget::{Button as _, Grid as _, TextBox as _, UiFactory};

/// Build and exercise one platform's UI
///
/// Creates a grid, populates it with the sample buttons and text boxes
/// (content assigned right after each widget's creation), then presses and
/// displays every button and displays every text box in the grid's
/// enumeration order.
pub fn build_ui(
    factory: &dyn UiFactory,
    config: &DemoConfig,
    out: &mut dyn Write,
) -> Result<(), UiError> {
    let mut grid = factory.create_grid(out)?;

    let mut buttons = Vec::with_capacity(config.buttons.len());
    for sample in &config.buttons {
        let mut button = factory.create_button(out)?;
        button.set_content(sample);
        buttons.push(button);
    }
    for button in buttons {
        grid.add_button(button);
    }

    let mut text_boxes = Vec::with_capacity(config.text_boxes.len());
    for sample in &config.text_boxes {
        let mut text_box = factory.create_text_box(out)?;
        text_box.set_content(sample);
        text_boxes.push(text_box);
    }
    for text_box in text_boxes {
        grid.add_text_box(text_box);
    }

    for button in grid.buttons() {
        button.press(out)?;
        button.display(out)?;
    }

    for text_box in grid.text_boxes() {
        text_box.display(out)?;
    }

    Ok(())
}

/// Run the demonstration for every configured platform, in order
///
/// Each platform gets a banner line and a fresh, independent widget set. An
/// unrecognized tag aborts the run with [`UiError::UnknownPlatform`].
pub fn run(config: &DemoConfig, out: &mut dyn Write) -> Result<(), UiError> {
    for tag in &config.platforms {
        let platform = Platform::from_tag(tag)
            .ok_or_else(|| UiError::UnknownPlatform(tag.clone()))?;
        writeln!(out, "{}", platform.banner())?;
        build_ui(platform.factory().as_ref(), config, out)?;
    }
    Ok(())
}
