//! Paginated single-item browser over a scan result set, with a timed
//! "selected" confirmation and horizontal scrolling for long names.

use heapless::String;

use crate::clock::{deadline_reached, elapsed_ms};
use crate::config::{CONFIRMATION_MS, SCROLL_SEPARATOR, SCROLL_STEP_MS, SSID_MAX_LEN};
use crate::ui::input_logic::{press_direction, select_next, select_prev};
use crate::ui::transition::SlideDirection;
use crate::ui::Button;
use crate::wifi::ScanProvider;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionState {
    /// No scan has been run for this session yet.
    #[default]
    NotStarted,
    Browsing,
    /// The confirmation overlay is showing.
    Confirming,
}

impl SessionState {
    pub const fn as_str(self) -> &'static str {
        match self {
            SessionState::NotStarted => "not-started",
            SessionState::Browsing => "browsing",
            SessionState::Confirming => "confirming",
        }
    }
}

/// Copy `name` into a fixed-capacity string, dropping whatever does not fit.
pub(crate) fn copy_name(name: &str) -> String<SSID_MAX_LEN> {
    let mut out = String::new();
    for ch in name.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}

/// Browsing state for one feature session.
///
/// Indices satisfy `current < item_count` and `previous < item_count`
/// whenever `item_count > 0`, and are 0 otherwise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListBrowser {
    item_count: usize,
    current: usize,
    previous: usize,
    session: SessionState,
    confirmation_deadline: u32,
    confirmed: String<SSID_MAX_LEN>,
    scroll_offset: usize,
    last_scroll_ms: u32,
    scrolling: bool,
}

impl ListBrowser {
    pub const fn new() -> Self {
        Self {
            item_count: 0,
            current: 0,
            previous: 0,
            session: SessionState::NotStarted,
            confirmation_deadline: 0,
            confirmed: String::new(),
            scroll_offset: 0,
            last_scroll_ms: 0,
            scrolling: false,
        }
    }

    /// Back to the state of a fresh session.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Run the scan once and start browsing its results.
    ///
    /// A failed scan browses an empty list. Returns the item count.
    pub fn begin<P: ScanProvider + ?Sized>(&mut self, provider: &mut P, now_ms: u32) -> usize {
        self.reset();

        let count = match provider.scan() {
            Ok(count) => {
                info!("scan: {} networks", count);
                count
            }
            Err(e) => {
                warn!("scan: failed ({})", e.as_str());
                0
            }
        };

        self.set_item_count(count);
        self.session = SessionState::Browsing;
        self.last_scroll_ms = now_ms;
        count
    }

    /// Change the count and re-clamp both indices.
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
        let last = item_count.saturating_sub(1);
        self.current = self.current.min(last);
        self.previous = self.previous.min(last);
    }

    pub fn move_up(&mut self, now_ms: u32) -> Option<SlideDirection> {
        self.step(Button::Up, now_ms)
    }

    pub fn move_down(&mut self, now_ms: u32) -> Option<SlideDirection> {
        self.step(Button::Down, now_ms)
    }

    fn step(&mut self, button: Button, now_ms: u32) -> Option<SlideDirection> {
        if self.session != SessionState::Browsing || self.item_count == 0 {
            return None;
        }
        let direction = press_direction(button)?;

        self.previous = self.current;
        self.current = match button {
            Button::Up => select_prev(self.current, self.item_count),
            _ => select_next(self.current, self.item_count),
        };
        self.restart_scroll(now_ms);
        debug!("browser: item {}", self.current);
        Some(direction)
    }

    /// Show the confirmation overlay for `name`.
    ///
    /// `needs_scroll` is true when the rendered name is wider than the space
    /// available for it. Returns false if there is nothing to confirm.
    pub fn confirm(&mut self, name: &str, needs_scroll: bool, now_ms: u32) -> bool {
        if self.session != SessionState::Browsing || self.item_count == 0 {
            return false;
        }

        self.confirmed = copy_name(name);
        self.session = SessionState::Confirming;
        self.confirmation_deadline = now_ms.wrapping_add(CONFIRMATION_MS);
        self.scrolling = needs_scroll;
        self.restart_scroll(now_ms);
        info!("browser: selected {}", self.confirmed.as_str());
        true
    }

    /// Close the confirmation overlay. Returns false if it was not showing.
    pub fn dismiss(&mut self, now_ms: u32) -> bool {
        if self.session != SessionState::Confirming {
            return false;
        }
        self.session = SessionState::Browsing;
        self.scrolling = false;
        self.restart_scroll(now_ms);
        true
    }

    /// Time-driven updates: confirmation expiry and scroll steps.
    pub fn tick(&mut self, now_ms: u32) {
        if self.session != SessionState::Confirming {
            return;
        }

        if deadline_reached(self.confirmation_deadline, now_ms) {
            debug!("browser: confirmation expired");
            self.dismiss(now_ms);
            return;
        }

        if self.scrolling && elapsed_ms(self.last_scroll_ms, now_ms) >= SCROLL_STEP_MS {
            self.scroll_offset = (self.scroll_offset + 1) % self.scroll_period();
            self.last_scroll_ms = now_ms;
        }
    }

    /// Forget the outgoing item once a transition has finished.
    pub fn settle(&mut self) {
        self.previous = self.current;
    }

    /// Number of scroll steps before the looping text repeats.
    pub fn scroll_period(&self) -> usize {
        self.confirmed.chars().count() + SCROLL_SEPARATOR.len()
    }

    fn restart_scroll(&mut self, now_ms: u32) {
        self.scroll_offset = 0;
        self.last_scroll_ms = now_ms;
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn previous(&self) -> usize {
        self.previous
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    pub fn is_confirming(&self) -> bool {
        self.session == SessionState::Confirming
    }

    pub fn confirmed(&self) -> &str {
        &self.confirmed
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn is_scrolling(&self) -> bool {
        self.scrolling
    }
}

impl Default for ListBrowser {
    fn default() -> Self {
        Self::new()
    }
}
