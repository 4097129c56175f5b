use std::time::Duration;

/// Pulse length used when the overspend alert fires.
pub const DEFAULT_HAPTIC_PULSE: Duration = Duration::from_millis(200);

/// State changes of the overspend alert, emitted by the store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LedgerEvent {
    /// Expenses just reached the alert threshold
    AlertRaised { expense_ratio: f64 },
    /// Expenses dropped back below the threshold
    AlertCleared,
}

/// A device able to give the user a short physical nudge.
pub trait Haptics {
    fn pulse(&mut self, duration: Duration);
}

/// Fire one pulse for every `AlertRaised` event. Returns the number of pulses.
pub fn dispatch_alerts(events: &[LedgerEvent], haptics: &mut dyn Haptics, pulse: Duration) -> usize {
    let mut fired = 0;
    for event in events {
        if let LedgerEvent::AlertRaised { expense_ratio } = event {
            tracing::debug!(expense_ratio, pulse_ms = pulse.as_millis() as u64, "haptic pulse");
            haptics.pulse(pulse);
            fired += 1;
        }
    }
    fired
}
