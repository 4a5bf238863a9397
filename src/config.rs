//! Application-wide constants and compile-time configuration.
//!
//! All display geometry, timing parameters, and UI strings that the
//! navigator depends on live here so they can be tuned in one place.

// Display

/// Visible width of the OLED in pixels. Also the slide animation extent.
pub const SCREEN_WIDTH: i32 = 128;

/// Visible height of the OLED in pixels.
pub const SCREEN_HEIGHT: i32 = 64;

/// I²C address of the display controller.
pub const DISPLAY_I2C_ADDRESS: u8 = 0x3C;

// Input

/// Minimum time between two reported presses of *any* button (ms).
pub const BUTTON_DEBOUNCE_MS: u32 = 200;

/// Pause between two poll cycles of the main loop (ms).
pub const POLL_INTERVAL_MS: u32 = 10;

// Slide transition

/// Horizontal distance covered per animation frame (px).
pub const SLIDE_STEP_PX: i32 = 16;

/// Delay after each committed animation frame (ms).
pub const SLIDE_FRAME_DELAY_MS: u32 = 20;

// Scan browser

/// How long the "selected" confirmation stays on screen (ms).
pub const CONFIRMATION_MS: u32 = 1500;

/// Interval between two horizontal scroll steps of a long name (ms).
pub const SCROLL_STEP_MS: u32 = 300;

/// A name scrolls when it is wider than `SCREEN_WIDTH - SCROLL_MARGIN_PX`.
pub const SCROLL_MARGIN_PX: i32 = 8;

/// Left edge of scrolling text at step 0.
pub const SCROLL_ORIGIN_X: i32 = 4;

/// Gap inserted between two copies of a scrolling name.
pub const SCROLL_SEPARATOR: &str = "   ";

/// Longest SSID allowed by 802.11.
pub const SSID_MAX_LEN: usize = 32;

/// Target names wider than `SCREEN_WIDTH - WRAP_MARGIN_PX` are wrapped.
pub const WRAP_MARGIN_PX: i32 = 12;

/// Maximum number of wrapped lines for a target name.
pub const WRAP_MAX_LINES: usize = 4;

// Menu

/// Title shown in the top-level menu header.
pub const MENU_TITLE: &str = "kajdanecek :3";

/// Frames that can be stacked above the root menu.
pub const MAX_MENU_DEPTH: usize = 4;

// Decorative effects

/// Frames of the submenu "enter" burst.
pub const ENTER_EFFECT_FRAMES: i32 = 12;
pub const ENTER_EFFECT_FRAME_MS: u32 = 40;
pub const ENTER_FLASH_MS: u32 = 50;
pub const ENTER_BLANK_MS: u32 = 30;

/// Frames of the scan progress screen shown before a scan.
pub const SCAN_PROGRESS_FRAMES: i32 = 15;
pub const SCAN_PROGRESS_FRAME_MS: u32 = 120;
pub const SCAN_DONE_MS: u32 = 500;
