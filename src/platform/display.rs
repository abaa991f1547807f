//! Write-only display sink
//!
//! The simulation pushes a handful of values out each frame and never reads
//! them back. The browser implementation writes SVG attributes and styles.

/// Output surface driven by the frame loop
pub trait Display {
    /// Player's top edge in simulation space
    fn set_player_vertical_position(&mut self, y: f32);
    /// Scene container horizontal offset (pixels, <= 0 while running)
    fn set_scroll_offset(&mut self, pixels: f32);
    fn show_failure_message(&mut self, text: &str);
    fn hide_start_message(&mut self);
}

/// Keeps the last value written to each output, for tests and headless runs
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingDisplay {
    pub player_y: Option<f32>,
    pub scroll_offset: Option<f32>,
    pub failure_message: Option<String>,
    pub start_message_visible: bool,
    /// Number of failure messages shown
    pub failures: u32,
}

impl RecordingDisplay {
    /// Fresh page: nothing written yet, start message showing
    pub fn new() -> Self {
        Self {
            player_y: None,
            scroll_offset: None,
            failure_message: None,
            start_message_visible: true,
            failures: 0,
        }
    }
}

impl Default for RecordingDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for RecordingDisplay {
    fn set_player_vertical_position(&mut self, y: f32) {
        self.player_y = Some(y);
    }

    fn set_scroll_offset(&mut self, pixels: f32) {
        self.scroll_offset = Some(pixels);
    }

    fn show_failure_message(&mut self, text: &str) {
        self.failure_message = Some(text.to_string());
        self.start_message_visible = true;
        self.failures += 1;
    }

    fn hide_start_message(&mut self) {
        self.start_message_visible = false;
    }
}
