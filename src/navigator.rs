//! Top-level controller: owns every collaborator and all navigation state,
//! and advances the UI by one step per poll cycle.

use embedded_hal::delay::DelayNs;
use heapless::{String, Vec};

use crate::clock::Clock;
use crate::config::{MAX_MENU_DEPTH, POLL_INTERVAL_MS, SSID_MAX_LEN};
use crate::dispatch::{draw_inactive, handler_for, Handler};
use crate::menu::view::draw_menu;
use crate::menu::{Entry, Frame, MenuState};
use crate::ui::buttons::{ButtonLines, InputDebouncer};
use crate::ui::effects::{enter_effect, scan_progress};
use crate::ui::surface::{present, Surface};
use crate::ui::transition::{run_slide, Slide, SlideDirection, Visual};
use crate::ui::Button;
use crate::wifi::browser::{copy_name, ListBrowser, SessionState};
use crate::wifi::view::{draw_chrome, draw_confirmation, draw_empty, draw_network, name_needs_scroll};
use crate::wifi::{NetworkInfo, ScanProvider};

/// All mutable navigation state.
///
/// The root menu sits below a stack of frames pushed on "enter" and popped
/// on "back". The root itself is never popped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigatorContext {
    root: MenuState,
    frames: Vec<Frame, MAX_MENU_DEPTH>,
    browser: ListBrowser,
    /// Last confirmed network. Survives feature exits.
    target: String<SSID_MAX_LEN>,
}

impl NavigatorContext {
    pub const fn new() -> Self {
        Self {
            root: MenuState::root(),
            frames: Vec::new(),
            browser: ListBrowser::new(),
            target: String::new(),
        }
    }

    /// Menu level currently receiving navigation input.
    pub fn menu(&self) -> &MenuState {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| match frame {
                Frame::Menu(menu) => Some(menu),
                Frame::Feature(_) => None,
            })
            .unwrap_or(&self.root)
    }

    pub fn menu_mut(&mut self) -> &mut MenuState {
        self.frames
            .iter_mut()
            .rev()
            .find_map(|frame| match frame {
                Frame::Menu(menu) => Some(menu),
                Frame::Feature(_) => None,
            })
            .unwrap_or(&mut self.root)
    }

    /// Number of levels, root included.
    pub fn depth(&self) -> usize {
        self.frames.len() + 1
    }

    pub fn active_feature(&self) -> Option<Entry> {
        match self.frames.last() {
            Some(Frame::Feature(entry)) => Some(*entry),
            _ => None,
        }
    }

    pub fn in_feature(&self) -> bool {
        self.active_feature().is_some()
    }

    /// Open a nested menu level above the current one.
    pub fn push_menu(&mut self, menu: MenuState) -> bool {
        self.frames.push(Frame::Menu(menu)).is_ok()
    }

    /// Enter the highlighted entry of the current menu.
    pub fn enter(&mut self) -> Option<Entry> {
        let entry = self.menu().current()?;
        if self.frames.push(Frame::Feature(entry)).is_err() {
            warn!("navigator: frame stack full");
            return None;
        }
        self.menu_mut().enter();
        self.browser.reset();
        Some(entry)
    }

    /// Pop the top frame. Leaving a feature drops all of its session state.
    pub fn back(&mut self) -> Option<Frame> {
        let frame = self.frames.pop()?;
        if let Frame::Feature(_) = frame {
            self.menu_mut().exit();
            self.browser.reset();
        }
        Some(frame)
    }

    pub fn browser(&self) -> &ListBrowser {
        &self.browser
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn set_target(&mut self, name: &str) {
        self.target = copy_name(name);
    }
}

impl Default for NavigatorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// The device UI.
///
/// Each [`Navigator::poll`] reads the buttons, advances one state machine
/// step and renders. Animations run synchronously inside the poll that
/// triggered them.
pub struct Navigator<S, P, L, C, D> {
    surface: S,
    scanner: P,
    lines: L,
    clock: C,
    delay: D,
    debouncer: InputDebouncer,
    ctx: NavigatorContext,
}

impl<S, P, L, C, D> Navigator<S, P, L, C, D>
where
    S: Surface,
    P: ScanProvider,
    L: ButtonLines,
    C: Clock,
    D: DelayNs,
{
    pub fn new(surface: S, scanner: P, lines: L, clock: C, delay: D) -> Self {
        Self {
            surface,
            scanner,
            lines,
            clock,
            delay,
            debouncer: InputDebouncer::new(),
            ctx: NavigatorContext::new(),
        }
    }

    /// Draw the first menu frame.
    pub fn start(&mut self) {
        info!("navigator: start, {} entries", self.ctx.menu().entry_count());
        draw_menu(&mut self.surface, self.ctx.menu());
    }

    /// Poll forever.
    pub fn run(&mut self) -> ! {
        self.start();
        loop {
            self.poll();
            self.delay.delay_ms(POLL_INTERVAL_MS);
        }
    }

    /// One poll cycle.
    pub fn poll(&mut self) {
        let now = self.clock.now_ms();

        if self.ctx.in_feature() {
            if self.pressed(Button::Back, now) {
                self.leave();
            } else {
                self.run_feature(true);
            }
            return;
        }

        if self.pressed(Button::Up, now) {
            self.ctx.menu_mut().move_up();
            self.slide_menu();
        } else if self.pressed(Button::Down, now) {
            self.ctx.menu_mut().move_down();
            self.slide_menu();
        } else if self.pressed(Button::Confirm, now) {
            self.enter();
        } else if self.pressed(Button::Back, now) && self.ctx.back().is_some() {
            draw_menu(&mut self.surface, self.ctx.menu());
        }
    }

    fn pressed(&mut self, button: Button, now: u32) -> bool {
        self.debouncer.poll(&mut self.lines, button, now)
    }

    fn slide_menu(&mut self) {
        let menu = *self.ctx.menu();
        debug!("menu: {} -> {}", menu.last_index, menu.index);

        let label = |entry: Option<Entry>, boxed| {
            entry.map_or(Visual::Blank, |e| Visual::MenuEntry { label: e.label(), boxed })
        };
        let slide = Slide {
            incoming: label(menu.current(), true),
            outgoing: label(menu.previous(), false),
            backdrop: Visual::MenuChrome {
                position: menu.index + 1,
                total: menu.entry_count(),
            },
            direction: menu.slide_direction(),
        };

        run_slide(&mut self.surface, &mut self.delay, &slide);
        self.ctx.menu_mut().settle();
    }

    fn enter(&mut self) {
        let Some(entry) = self.ctx.enter() else {
            return;
        };
        info!("navigator: enter {}", entry.label());
        enter_effect(&mut self.surface, &mut self.delay);
        // First frame only; the confirm press that got us here is spent.
        self.run_feature(false);
    }

    fn leave(&mut self) {
        if let Some(Frame::Feature(entry)) = self.ctx.back() {
            info!("navigator: leave {}", entry.label());
        }
        draw_menu(&mut self.surface, self.ctx.menu());
    }

    fn run_feature(&mut self, read_input: bool) {
        let entry = self.ctx.active_feature();
        match handler_for(entry) {
            Handler::Scan => self.scan_cycle(read_input),
            Handler::Inert => {
                self.surface.clear();
                draw_inactive(&mut self.surface, entry, &self.ctx.target);
                present(&mut self.surface);
            }
        }
    }

    fn scan_cycle(&mut self, read_input: bool) {
        if self.ctx.browser.session() == SessionState::NotStarted {
            scan_progress(&mut self.surface, &mut self.delay);
            let now = self.clock.now_ms();
            self.ctx.browser.begin(&mut self.scanner, now);
        }

        if read_input {
            self.scan_input(self.clock.now_ms());
        }

        self.ctx.browser.tick(self.clock.now_ms());
        self.draw_scan();
    }

    fn scan_input(&mut self, now: u32) {
        if self.ctx.browser.is_confirming() {
            let any = self.pressed(Button::Up, now)
                || self.pressed(Button::Down, now)
                || self.pressed(Button::Confirm, now);
            if any {
                self.ctx.browser.dismiss(now);
            }
        } else if self.ctx.browser.item_count() > 0 {
            if self.pressed(Button::Up, now) {
                if let Some(direction) = self.ctx.browser.move_up(now) {
                    self.slide_networks(direction);
                }
            } else if self.pressed(Button::Down, now) {
                if let Some(direction) = self.ctx.browser.move_down(now) {
                    self.slide_networks(direction);
                }
            } else if self.pressed(Button::Confirm, now) {
                let name = self.scanner.name(self.ctx.browser.current());
                let needs_scroll = name_needs_scroll(&self.surface, name);
                if self.ctx.browser.confirm(name, needs_scroll, now) {
                    self.ctx.set_target(name);
                }
            }
        }
    }

    fn slide_networks(&mut self, direction: SlideDirection) {
        let browser = &self.ctx.browser;
        let slide = Slide {
            incoming: Visual::Network(NetworkInfo::read(&self.scanner, browser.current())),
            outgoing: Visual::Network(NetworkInfo::read(&self.scanner, browser.previous())),
            backdrop: Visual::NetworkChrome {
                position: browser.current() + 1,
                total: browser.item_count(),
            },
            direction,
        };

        run_slide(&mut self.surface, &mut self.delay, &slide);
        self.ctx.browser.settle();
    }

    fn draw_scan(&mut self) {
        let browser = &self.ctx.browser;
        self.surface.clear();

        if browser.is_confirming() {
            draw_confirmation(&mut self.surface, browser);
        } else if browser.item_count() == 0 {
            draw_empty(&mut self.surface);
        } else {
            let current = browser.current();
            draw_chrome(&mut self.surface, current + 1, browser.item_count());
            draw_network(&mut self.surface, &NetworkInfo::read(&self.scanner, current), 0);
        }

        present(&mut self.surface);
    }

    pub fn context(&self) -> &NavigatorContext {
        &self.ctx
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn scanner(&self) -> &P {
        &self.scanner
    }

    pub fn lines_mut(&mut self) -> &mut L {
        &mut self.lines
    }

    /// Session state of the scan browser, for diagnostics.
    pub fn session_name(&self) -> &'static str {
        self.ctx.browser.session().as_str()
    }
}
