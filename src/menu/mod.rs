//! Top-level feature menu: entry identities and per-level navigation state.

pub mod view;

use crate::ui::input_logic::{menu_slide_direction, select_next, select_prev};
use crate::ui::transition::SlideDirection;

/// Feature entries of the root menu, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Entry {
    WifiScan,
    Deauth,
    EvilTwin,
    BeaconSpam,
    Sniffer,
    Settings,
    Info,
}

impl Entry {
    pub const ALL: [Entry; 7] = [
        Entry::WifiScan,
        Entry::Deauth,
        Entry::EvilTwin,
        Entry::BeaconSpam,
        Entry::Sniffer,
        Entry::Settings,
        Entry::Info,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Entry::WifiScan => "WiFi Scan",
            Entry::Deauth => "Deauth",
            Entry::EvilTwin => "Evil Twin",
            Entry::BeaconSpam => "Beacon Spam",
            Entry::Sniffer => "Sniffer",
            Entry::Settings => "Settings",
            Entry::Info => "Info",
        }
    }

    pub fn from_index(index: usize) -> Option<Entry> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Entries whose screen is built around the last confirmed network.
    pub const fn uses_target(self) -> bool {
        matches!(self, Entry::Deauth | Entry::EvilTwin)
    }
}

/// Navigation position within one menu level.
///
/// Invariant: `index < entry_count` and `last_index < entry_count` whenever
/// `entry_count > 0`; both are 0 otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuState {
    pub index: usize,
    /// Entry highlighted before the last move, until [`MenuState::settle`].
    pub last_index: usize,
    /// Entry that was active when the current feature was entered.
    pub selected: Option<Entry>,
    pub in_submenu: bool,
    entry_count: usize,
}

impl MenuState {
    pub const fn new(entry_count: usize) -> Self {
        Self {
            index: 0,
            last_index: 0,
            selected: None,
            in_submenu: false,
            entry_count,
        }
    }

    /// Root menu over every [`Entry`].
    pub const fn root() -> Self {
        Self::new(Entry::ALL.len())
    }

    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    pub fn move_up(&mut self) {
        self.last_index = self.index;
        self.index = select_prev(self.index, self.entry_count);
    }

    pub fn move_down(&mut self) {
        self.last_index = self.index;
        self.index = select_next(self.index, self.entry_count);
    }

    pub fn slide_direction(&self) -> SlideDirection {
        menu_slide_direction(self.index, self.last_index, self.entry_count)
    }

    /// Forget the outgoing entry once a transition has finished.
    pub fn settle(&mut self) {
        self.last_index = self.index;
    }

    /// Mark the highlighted entry as the active feature.
    pub fn enter(&mut self) -> Option<Entry> {
        self.selected = self.current();
        self.in_submenu = true;
        self.selected
    }

    pub fn exit(&mut self) {
        self.selected = None;
        self.in_submenu = false;
    }

    /// Change the number of entries and re-clamp both indices.
    pub fn set_entry_count(&mut self, entry_count: usize) {
        self.entry_count = entry_count;
        let last = entry_count.saturating_sub(1);
        self.index = self.index.min(last);
        self.last_index = self.last_index.min(last);
    }

    pub fn current(&self) -> Option<Entry> {
        if self.index < self.entry_count {
            Entry::from_index(self.index)
        } else {
            None
        }
    }

    pub fn previous(&self) -> Option<Entry> {
        if self.last_index < self.entry_count {
            Entry::from_index(self.last_index)
        } else {
            None
        }
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::root()
    }
}

/// One level of the navigation stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Frame {
    Menu(MenuState),
    Feature(Entry),
}
