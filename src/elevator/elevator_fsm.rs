use crate::elevator::elevator::Elevator;
use crate::elevator::orders::Floor;
use crate::elevator::state::State;
use crate::error::ElevatorError;

use log::{debug, trace};

/// One floor closer to `target`.
fn step_towards(position: Floor, target: Floor) -> i32 {
    let position = position.to_int();
    if position < target.to_int() {
        position + 1
    } else {
        position - 1
    }
}

/// Advances `elevator` by one simulation tick.
///
/// The transition only depends on the elevator itself; cars never look at
/// each other, so the fleet can be advanced in any order.
pub fn next_state(elevator: &Elevator) -> Result<Elevator, ElevatorError> {
    let position = elevator.position;
    let order = elevator.current_order;

    let next = match elevator.state {
        State::StopAtFloor(floor) => {
            if order.is_empty() {
                *elevator
            } else if floor == order.from {
                elevator.with_state(State::LoadingAtFloor(floor))
            } else {
                elevator.with_state(State::MovingEmptyTo(order.from))
            }
        }
        State::MovingEmptyTo(target) => {
            if position == target {
                elevator.new_position_and_state(target.to_int(), State::LoadingAtFloor(target))?
            } else {
                let next_floor = step_towards(position, target);
                elevator.new_position_and_state(next_floor, State::MovingEmptyTo(target))?
            }
        }
        State::LoadingAtFloor(_) => elevator.with_state(State::TransportingPeopleTo(order.to)),
        State::TransportingPeopleTo(target) => {
            if position == target {
                elevator.new_position_and_state(target.to_int(), State::UnloadingAtFloor(target))?
            } else {
                let next_floor = step_towards(position, target);
                elevator.new_position_and_state(next_floor, State::TransportingPeopleTo(target))?
            }
        }
        State::UnloadingAtFloor(_) => {
            if order.is_empty() {
                elevator.with_state(State::StopAtFloor(position))
            } else if position == order.from {
                // An order was bound while unloading and starts right here.
                elevator.with_state(State::LoadingAtFloor(position))
            } else if position == order.to {
                elevator.parked()
            } else {
                elevator.with_state(State::MovingEmptyTo(order.from))
            }
        }
    };

    if next.state != elevator.state {
        debug!(
            "elevator {}: {:?} -> {:?} at floor {} with order {}",
            elevator.index, elevator.state, next.state, next.position, next.current_order
        );
    } else {
        trace!("elevator {}: {:?} at floor {}", elevator.index, next.state, next.position);
    }

    Ok(next)
}
