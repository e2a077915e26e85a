use crate::distributor::distributor::{Controller, FleetSnapshot, TickStatus};
use crate::error::ControllerError;

use crossbeam_channel as cbc;
use log::{debug, info};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSettings {
    /// Stop after this many ticks even if orders are still being served.
    pub max_ticks: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Queue drained and every elevator parked.
    Completed { ticks: u64 },
    /// Stopped from the outside, by message or by the tick limit.
    Stopped { ticks: u64 },
}

fn emit(snapshot_tx: &cbc::Sender<FleetSnapshot>, controller: &Controller) {
    if snapshot_tx.send(controller.snapshot()).is_err() {
        debug!("presentation channel closed, snapshot dropped");
    }
}

/// Drives `controller` tick by tick until the simulation settles.
///
/// Before each tick the current fleet is sent on `snapshot_tx`. Between ticks
/// the loop waits for the controller's pause, or returns early when anything
/// arrives on `stop_rx` (a disconnected stop channel counts as a stop).
pub fn run(
    controller: &mut Controller,
    settings: &RunSettings,
    snapshot_tx: &cbc::Sender<FleetSnapshot>,
    stop_rx: &cbc::Receiver<()>,
) -> Result<RunOutcome, ControllerError> {
    loop {
        emit(snapshot_tx, controller);

        if controller.tick()? == TickStatus::Finished {
            emit(snapshot_tx, controller);
            info!("simulation completed after {} ticks", controller.ticks());
            return Ok(RunOutcome::Completed {
                ticks: controller.ticks(),
            });
        }

        if settings.max_ticks.map_or(false, |limit| controller.ticks() >= limit) {
            info!("tick limit reached after {} ticks", controller.ticks());
            return Ok(RunOutcome::Stopped {
                ticks: controller.ticks(),
            });
        }

        cbc::select! {
            recv(stop_rx) -> _ => {
                info!("simulation stopped after {} ticks", controller.ticks());
                return Ok(RunOutcome::Stopped { ticks: controller.ticks() });
            },
            recv(cbc::after(controller.pause_time())) -> _ => {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn stop_message_ends_the_run() {
        let mut controller = Controller::new(Duration::from_secs(3600));
        controller.add_elevator(1);
        controller.push_order(0, 9);
        let (snapshot_tx, snapshot_rx) = cbc::unbounded();
        let (stop_tx, stop_rx) = cbc::bounded(1);
        stop_tx.send(()).unwrap();

        let outcome = run(&mut controller, &RunSettings::default(), &snapshot_tx, &stop_rx);

        assert_eq!(outcome, Ok(RunOutcome::Stopped { ticks: 1 }));
        assert_eq!(snapshot_rx.try_iter().count(), 1);
    }

    #[test]
    fn tick_limit_ends_the_run() {
        let mut controller = Controller::new(Duration::ZERO);
        controller.add_elevator(1);
        controller.push_order(0, 9);
        let (snapshot_tx, _snapshot_rx) = cbc::unbounded();

        let outcome = run(
            &mut controller,
            &RunSettings { max_ticks: Some(4) },
            &snapshot_tx,
            &cbc::never(),
        );

        assert_eq!(outcome, Ok(RunOutcome::Stopped { ticks: 4 }));
    }

    #[test]
    fn closed_presentation_channel_is_not_an_error() {
        let mut controller = Controller::new(Duration::ZERO);
        controller.add_elevator(1);
        controller.push_order(0, 2);
        let (snapshot_tx, snapshot_rx) = cbc::unbounded();
        drop(snapshot_rx);

        let outcome = run(&mut controller, &RunSettings::default(), &snapshot_tx, &cbc::never());

        assert!(matches!(outcome, Ok(RunOutcome::Completed { .. })));
    }

    #[test]
    fn run_without_elevators_fails() {
        let mut controller = Controller::new(Duration::ZERO);
        controller.push_order(1, 3);
        let (snapshot_tx, _snapshot_rx) = cbc::unbounded();

        let outcome = run(&mut controller, &RunSettings::default(), &snapshot_tx, &cbc::never());

        assert_eq!(outcome, Err(ControllerError::NoElevators));
    }
}
