use std::cell::RefCell;
use std::rc::Rc;
use gloo_timers::callback::Interval;
use leptos::{
    create_rw_signal, on_cleanup, store_value, RwSignal, SignalGetUntracked, SignalSet, SignalUpdate,
    StoredValue,
};
use crate::logging::log;
use crate::models::{Route, SimulationConfig};
use super::controller::{Fleet, TickOutput};

/// Reactive handle to a running fleet
///
/// The fleet itself lives inside the interval callback; the handle only
/// exposes what the views read plus pause/resume and teardown.
#[derive(Clone, Copy)]
pub struct SimulationHandle {
    pub outputs: RwSignal<Vec<TickOutput>>,
    pub running: RwSignal<bool>,
    pub tick_count: RwSignal<u64>,
    timer: StoredValue<Option<Interval>>,
}

impl SimulationHandle {
    pub fn pause(&self) {
        self.running.set(false);
    }

    pub fn resume(&self) {
        if self.is_stopped() {
            return;
        }
        self.running.set(true);
    }

    pub fn toggle(&self) {
        if self.is_stopped() {
            return;
        }
        self.running.update(|running| *running = !*running);
    }

    /// Cancel the timer; a stopped simulation cannot be resumed
    pub fn stop(&self) {
        let _ = self.timer.try_update_value(|timer| {
            if let Some(interval) = timer.take() {
                drop(interval);
                log!("Train simulation stopped");
            }
        });
        let _ = self.running.try_set(false);
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.timer.try_with_value(Option::is_none).unwrap_or(true)
    }
}

/// Start the train simulation on a browser interval
///
/// Outputs are published once per tick. The interval is cancelled when the
/// owning reactive scope is disposed, or earlier through
/// [`SimulationHandle::stop`].
#[must_use]
pub fn use_train_simulation(routes: Vec<Route>, config: &SimulationConfig) -> SimulationHandle {
    let fleet = Fleet::from_config(routes, config);
    log!("Starting train simulation: {} routes every {}ms", fleet.len(), config.tick_interval_ms);

    let outputs = create_rw_signal(fleet.snapshot());
    let running = create_rw_signal(true);
    let tick_count = create_rw_signal(0_u64);

    let fleet = Rc::new(RefCell::new(fleet));
    let interval = Interval::new(config.tick_interval_ms, move || {
        if !running.get_untracked() {
            return;
        }
        let mut fleet = fleet.borrow_mut();
        let ticked = fleet.tick_all();
        tick_count.set(fleet.tick_count());
        outputs.set(ticked);
    });

    let handle = SimulationHandle {
        outputs,
        running,
        tick_count,
        timer: store_value(Some(interval)),
    };

    on_cleanup(move || handle.stop());

    handle
}
