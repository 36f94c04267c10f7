//! Coordination for automatic country detection.
//!
//! This crate performs no I/O itself. The host owns the actual lookup
//! (geo-IP call, OS locale, anything else); [`AutoCountryService`] only
//! makes sure it runs at most once per process and that every interested
//! field hears the result, including fields created after the lookup
//! finished.

use std::sync::mpsc::{self, Receiver, Sender};

use country_data::Iso2;

/// Fans one detection result out to any number of subscribers.
///
/// Goals:
/// - The lookup runs at most once; [`begin`](Self::begin) gates it.
/// - Subscribers never block; results arrive over plain channels.
/// - A late subscriber gets the cached result immediately.
pub struct AutoCountryService {
    subscribers: Vec<Sender<Iso2>>,
    resolved: Option<Iso2>,
    started: bool,
}

impl AutoCountryService {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            resolved: None,
            started: false,
        }
    }

    /// Register interest in the detection result.
    ///
    /// If the lookup already completed the receiver has the result buffered
    /// before this returns.
    pub fn subscribe(&mut self) -> Receiver<Iso2> {
        let (tx, rx) = mpsc::channel();
        match self.resolved {
            Some(iso2) => {
                let _ = tx.send(iso2);
            }
            None => self.subscribers.push(tx),
        }
        rx
    }

    /// Claim the lookup. Returns `true` for the first caller, who should
    /// then perform it and report back via [`complete`](Self::complete);
    /// everyone else gets `false` and just subscribes.
    pub fn begin(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        log::debug!(target: "detect", "country lookup claimed");
        true
    }

    /// Report the lookup result and broadcast it.
    ///
    /// The first completion wins; later calls are dropped. Subscribers that
    /// went away in the meantime are skipped silently.
    pub fn complete(&mut self, iso2: Iso2) {
        if self.resolved.is_some() {
            log::debug!(target: "detect", "duplicate completion {iso2} ignored");
            return;
        }
        self.started = true;
        self.resolved = Some(iso2);
        log::debug!(
            target: "detect",
            "country lookup complete: {iso2} ({} subscribers)",
            self.subscribers.len()
        );
        for tx in self.subscribers.drain(..) {
            let _ = tx.send(iso2);
        }
    }

    /// The cached result, if the lookup already completed.
    pub fn resolved(&self) -> Option<Iso2> {
        self.resolved
    }
}

impl Default for AutoCountryService {
    fn default() -> Self {
        Self::new()
    }
}
