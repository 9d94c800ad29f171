//! Event buffer and rolling alert log.
//!
//! Every [`SimEvent`] is logged through the `log` facade, kept until the next
//! snapshot drains it, and appended to a bounded alert log.

use std::collections::VecDeque;

use log::{debug, info, warn};

use bulwark_core::enums::AlertLevel;
use bulwark_core::events::{Alert, SimEvent};

pub struct Telemetry {
    events: Vec<SimEvent>,
    alerts: VecDeque<Alert>,
    capacity: usize,
}

impl Telemetry {
    pub fn new(capacity: usize) -> Self {
        Self {
            events: Vec::new(),
            alerts: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record an event that happened at `tick`.
    pub fn record(&mut self, event: SimEvent, tick: u64) {
        let message = event.to_string();
        match event {
            SimEvent::WaveIncoming { .. }
            | SimEvent::StructureBuilt { .. }
            | SimEvent::StructureDemolished { .. }
            | SimEvent::StructureDestroyed { .. } => info!("{message}"),
            _ => debug!("{message}"),
        }
        self.push_alert(event.level(), message, tick);
        self.events.push(event);
    }

    /// Note a queued command that was turned down.
    pub fn rejected(&mut self, message: String, tick: u64) {
        warn!("Command rejected: {message}");
        self.push_alert(AlertLevel::Warning, message, tick);
    }

    fn push_alert(&mut self, level: AlertLevel, message: String, tick: u64) {
        if self.capacity == 0 {
            return;
        }
        while self.alerts.len() >= self.capacity {
            self.alerts.pop_front();
        }
        self.alerts.push_back(Alert {
            level,
            message,
            tick,
        });
    }

    /// Events recorded since the last drain.
    pub fn pending_events(&self) -> &[SimEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    /// Alert log, oldest first.
    pub fn alerts(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulwark_core::types::JetId;

    #[test]
    fn test_alert_log_is_bounded() {
        let mut telemetry = Telemetry::new(50);
        for i in 0..60 {
            telemetry.record(SimEvent::JetOutOfFuel { jet: JetId(i) }, i);
        }
        let alerts: Vec<&Alert> = telemetry.alerts().collect();
        assert_eq!(alerts.len(), 50);
        assert_eq!(alerts[0].tick, 10, "oldest entries are dropped first");
        assert_eq!(alerts[49].message, "Jet #59 ran out of fuel");
        assert_eq!(telemetry.pending_events().len(), 60);
    }

    #[test]
    fn test_drain_events() {
        let mut telemetry = Telemetry::new(5);
        telemetry.record(SimEvent::JetOutOfFuel { jet: JetId(1) }, 0);
        telemetry.rejected("No missile silo with id #4".to_string(), 0);

        assert_eq!(telemetry.drain_events().len(), 1);
        assert!(telemetry.pending_events().is_empty());
        assert_eq!(telemetry.alerts().count(), 2, "alerts survive a drain");
    }

    #[test]
    fn test_zero_capacity_keeps_no_alerts() {
        let mut telemetry = Telemetry::new(0);
        telemetry.record(SimEvent::JetOutOfFuel { jet: JetId(1) }, 0);
        assert_eq!(telemetry.alerts().count(), 0);
    }
}
