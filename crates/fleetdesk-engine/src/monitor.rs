//! The 30-second status monitor and the storage-facing tick.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, info, warn};

use fleetdesk_core::state::{StatusRecord, VehicleState};
use fleetdesk_store::{Catalog, KvStore};

use crate::clock::Clock;
use crate::tick::{TickOutcome, evaluate_fleet};

/// Timing for the monitor loop.
#[derive(Debug, Clone, Copy)]
pub struct MonitorOptions {
    /// Delay before the first tick after startup.
    pub initial_delay: Duration,
    /// Interval between ticks.
    pub interval: Duration,
}

impl Default for MonitorOptions {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_secs(1),
            interval: Duration::from_secs(30),
        }
    }
}

/// Loads the fleet, evaluates one tick and persists the map when anything
/// changed. Skipped schedules are logged at WARN; a failed persist is
/// logged and the previous stored state stands (the next tick retries the
/// same observation).
pub fn run_tick<S: KvStore, C: Clock>(catalog: &Catalog<S>, clock: &C) -> TickOutcome {
    let buses = catalog.buses();
    let schedules = catalog.schedules();
    let prior = catalog.status_map();

    let outcome = evaluate_fleet(clock.now_wall(), clock.now_utc(), &buses, &schedules, &prior);

    for skip in &outcome.skipped {
        warn!(
            schedule = %skip.schedule_code,
            plate = %skip.bus_plate,
            error = %skip.error,
            "skipping malformed schedule"
        );
    }

    if outcome.has_changes() {
        match catalog.save_status_map(&outcome.statuses) {
            Ok(()) => debug!(changed = outcome.changed.len(), "status map persisted"),
            Err(e) => warn!(error = %e, "failed to persist status map"),
        }
    }

    outcome
}

/// Operator override: an unconditional write that clears any schedule tag.
///
/// No validation against active schedules; a vehicle can be marked broken
/// mid-trip. Callers reject non-manual states (`preparing`) before getting
/// here.
pub fn set_state<S: KvStore, C: Clock>(
    catalog: &Catalog<S>,
    plate: &str,
    state: VehicleState,
    clock: &C,
) -> fleetdesk_store::Result<StatusRecord> {
    let mut map = catalog.status_map();
    let record = StatusRecord::new(state, clock.now_utc());
    map.insert(plate.to_owned(), record.clone());
    catalog.save_status_map(&map)?;
    info!(plate, state = %state, "operator override applied");
    Ok(record)
}

/// Handle to the background monitor thread.
///
/// One deferred initial tick, then a fixed-interval tick. Dropping the
/// handle stops the loop.
pub struct StatusMonitor {
    stop_tx: Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl StatusMonitor {
    /// Spawns the monitor over the given catalog and clock.
    pub fn spawn<S, C>(catalog: Catalog<S>, clock: C, options: MonitorOptions) -> Self
    where
        S: KvStore + 'static,
        C: Clock + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel();
        let handle = thread::spawn(move || run_loop(catalog, clock, options, stop_rx));
        Self {
            stop_tx,
            handle: Some(handle),
        }
    }

    /// Stops the loop and waits for the thread to finish.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        let _ = self.stop_tx.send(());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for StatusMonitor {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run_loop<S: KvStore, C: Clock>(
    catalog: Catalog<S>,
    clock: C,
    options: MonitorOptions,
    stop_rx: Receiver<()>,
) {
    info!(interval = ?options.interval, "status monitor started");
    let mut wait = options.initial_delay;
    loop {
        match stop_rx.recv_timeout(wait) {
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {
                run_tick(&catalog, &clock);
                wait = options.interval;
            }
        }
    }
    info!("status monitor stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::clock::FixedClock;
    use fleetdesk_core::bus::Bus;
    use fleetdesk_core::schedule::Schedule;
    use fleetdesk_core::timeparse::parse_date;
    use fleetdesk_store::MemoryStore;

    fn seed<S: KvStore>(catalog: &Catalog<S>) {
        catalog
            .save_buses(&[Bus {
                plate: "29A-12345".into(),
                model: "Seater".into(),
                capacity: 45,
            }])
            .unwrap();
        catalog
            .save_schedules(&[Schedule {
                code: "LC001".into(),
                service_date: "2025-06-15".into(),
                departs_at: "08:00".into(),
                ends_at: "10:00".into(),
                driver_code: "D001".into(),
                bus_plate: "29A-12345".into(),
                route_code: "R001".into(),
            }])
            .unwrap();
    }

    fn seeded_catalog() -> Catalog<MemoryStore> {
        let catalog = Catalog::new(MemoryStore::new());
        seed(&catalog);
        catalog
    }

    fn mid_trip_clock() -> FixedClock {
        FixedClock::at(
            parse_date("2025-06-15")
                .unwrap()
                .and_hms_opt(8, 30, 0)
                .unwrap(),
        )
    }

    #[test]
    fn run_tick_persists_changes() {
        let catalog = seeded_catalog();
        let outcome = run_tick(&catalog, &mid_trip_clock());
        assert!(outcome.has_changes());

        let stored = catalog.status_map();
        assert_eq!(stored["29A-12345"].state, VehicleState::Running);
    }

    #[test]
    fn run_tick_is_idempotent() {
        let catalog = seeded_catalog();
        run_tick(&catalog, &mid_trip_clock());
        let second = run_tick(&catalog, &mid_trip_clock());
        assert!(!second.has_changes());
    }

    #[test]
    fn override_then_tick_keeps_the_lock() {
        let catalog = seeded_catalog();
        set_state(&catalog, "29A-12345", VehicleState::Broken, &mid_trip_clock()).unwrap();

        // The schedule's active window contains `now`, but the lock holds.
        run_tick(&catalog, &mid_trip_clock());
        let stored = catalog.status_map();
        assert_eq!(stored["29A-12345"].state, VehicleState::Broken);
        assert_eq!(stored["29A-12345"].schedule_code, None);
    }

    #[test]
    fn monitor_runs_the_deferred_initial_tick() {
        let store = Arc::new(MemoryStore::new());
        seed(&Catalog::new(Arc::clone(&store)));

        let monitor = StatusMonitor::spawn(
            Catalog::new(Arc::clone(&store)),
            mid_trip_clock(),
            MonitorOptions {
                initial_delay: Duration::from_millis(10),
                interval: Duration::from_secs(60),
            },
        );
        thread::sleep(Duration::from_millis(300));
        monitor.stop();

        let stored = Catalog::new(store).status_map();
        assert_eq!(stored["29A-12345"].state, VehicleState::Running);
    }
}
