//! Platform families
//!
//! One submodule per simulated platform. Each family implements the widget
//! traits with its own content transformations and grid enumeration order.

pub mod android;
pub mod ios;
pub mod windows;

use crate::errors::UiError;
use crate::widget::UiFactory;

/// A simulated target platform
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Ios,
    Windows,
    Android,
}

impl Platform {
    /// All platforms, in demonstration order
    pub const ALL: [Platform; 3] = [Platform::Ios, Platform::Windows, Platform::Android];

    /// Parse a platform tag. Tags are exact; there is no fallback platform.
    pub fn from_tag(tag: &str) -> Option<Platform> {
        match tag {
            "iOS" => Some(Platform::Ios),
            "Windows" => Some(Platform::Windows),
            "Android" => Some(Platform::Android),
            _ => None,
        }
    }

    /// Display name used in output lines and banners
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Ios => "iOS",
            Platform::Windows => "Windows",
            Platform::Android => "Android",
        }
    }

    /// Separator line printed before this platform's demonstration
    pub fn banner(&self) -> String {
        format!("<{0}{1}{0}>", "-".repeat(21), self.display_name())
    }

    /// Factory producing this platform's widget family
    pub fn factory(&self) -> Box<dyn UiFactory> {
        match self {
            Platform::Ios => Box::new(ios::IosFactory),
            Platform::Windows => Box::new(windows::WindowsFactory),
            Platform::Android => Box::new(android::AndroidFactory),
        }
    }
}

/// Resolve a platform tag to its widget factory
///
/// Fails with [`UiError::UnknownPlatform`] for any unrecognized tag.
pub fn get_factory(tag: &str) -> Result<Box<dyn UiFactory>, UiError> {
    Platform::from_tag(tag)
        .map(|platform| platform.factory())
        .ok_or_else(|| UiError::UnknownPlatform(tag.to_string()))
}
