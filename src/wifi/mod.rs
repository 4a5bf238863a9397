//! WiFi scan browsing.
//!
//! The radio itself is behind [`ScanProvider`]; this module only reads the
//! result set. Results are borrowed for one browsing session and are never
//! copied, except for the name of a confirmed network.

pub mod browser;
pub mod view;

use crate::error::Error;

/// Access-point scanner.
///
/// `scan` blocks until a complete result set is available. The accessors are
/// only meaningful for `index < count` of the most recent scan.
pub trait ScanProvider {
    /// Run a scan and return the number of networks found.
    fn scan(&mut self) -> Result<usize, Error>;

    fn name(&self, index: usize) -> &str;

    /// RSSI in dBm.
    fn signal_strength(&self, index: usize) -> i8;

    /// True for networks without encryption.
    fn is_open(&self, index: usize) -> bool;
}

impl<P: ScanProvider + ?Sized> ScanProvider for &mut P {
    fn scan(&mut self) -> Result<usize, Error> {
        (**self).scan()
    }

    fn name(&self, index: usize) -> &str {
        (**self).name(index)
    }

    fn signal_strength(&self, index: usize) -> i8 {
        (**self).signal_strength(index)
    }

    fn is_open(&self, index: usize) -> bool {
        (**self).is_open(index)
    }
}

/// One scan result, borrowed from the provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NetworkInfo<'a> {
    pub name: &'a str,
    pub rssi: i8,
    pub open: bool,
}

impl<'a> NetworkInfo<'a> {
    pub fn read<P: ScanProvider + ?Sized>(provider: &'a P, index: usize) -> Self {
        Self {
            name: provider.name(index),
            rssi: provider.signal_strength(index),
            open: provider.is_open(index),
        }
    }

    /// Signal quality as 0 to 4 bars.
    pub fn signal_bars(&self) -> u8 {
        match self.rssi {
            r if r >= -55 => 4,
            r if r >= -67 => 3,
            r if r >= -75 => 2,
            r if r >= -85 => 1,
            _ => 0,
        }
    }
}
