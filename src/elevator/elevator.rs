use crate::config::config;
use crate::elevator::orders::{compute_distance, Floor, Order};
use crate::elevator::state::State;
use crate::error::{ElevatorError, OrderError};


/// One car of the fleet. Values are immutable snapshots: every operation
/// that changes an elevator hands back a new one.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elevator {
    pub(crate) index: u8,
    pub(crate) current_order: Order,
    pub(crate) position: Floor,
    pub(crate) state: State,
}

impl Elevator {
    /// A new car parked at the ground floor with nothing to do.
    pub fn init(index: u8) -> Self {
        Elevator {
            index,
            current_order: Order::EMPTY,
            position: Floor::new(0),
            state: State::StopAtFloor(Floor::new(0)),
        }
    }

    pub fn new(index: u8, current_order: Order, position: Floor, state: State) -> Self {
        Elevator {
            index,
            current_order,
            position,
            state,
        }
    }

    pub fn index(&self) -> u8 {
        self.index
    }

    pub fn current_order(&self) -> Order {
        self.current_order
    }

    pub fn position(&self) -> Floor {
        self.position
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_ready_for_new_order(&self) -> bool {
        match self.state {
            State::StopAtFloor(_) => self.current_order.is_empty(),
            State::UnloadingAtFloor(_) => true,
            State::MovingEmptyTo(_)
            | State::LoadingAtFloor(_)
            | State::TransportingPeopleTo(_) => false,
        }
    }

    /// Parked with no order bound: nothing left to do for this car.
    pub fn is_idle(&self) -> bool {
        self.state.is_stopped() && self.current_order.is_empty()
    }

    /// Floors to travel before this car could start serving `new_order`,
    /// counting whatever it still has to do for its current order.
    pub fn remaining_distance(&self, new_order: &Order) -> i64 {
        let current = self.current_order;
        match self.state {
            State::StopAtFloor(_) | State::UnloadingAtFloor(_) => {
                compute_distance(self.position, new_order.from)
            }
            State::LoadingAtFloor(_) | State::TransportingPeopleTo(_) => {
                compute_distance(self.position, current.to)
                    + compute_distance(current.to, new_order.from)
            }
            State::MovingEmptyTo(_) => {
                compute_distance(self.position, current.from)
                    + compute_distance(current.from, current.to)
                    + compute_distance(current.to, new_order.from)
            }
        }
    }

    /// Binds `order` to this car. Position and state are left untouched; the
    /// next state machine tick picks the order up.
    ///
    /// The destination check compares the position with the `to` floor of the
    /// order being replaced, so an idle car (empty order, `to == 0`) only
    /// accepts orders while parked at the ground floor.
    pub fn add_order(&self, order: Order) -> Result<Elevator, OrderError> {
        let (min, max) = (config::MIN_FLOOR, config::MAX_FLOOR);
        if order.is_empty() {
            return Err(OrderError::EmptyOrder);
        }
        if order.from < min || order.from > max {
            return Err(OrderError::FromOutOfBounds { floor: order.from, min, max });
        }
        if order.to < min || order.to > max {
            return Err(OrderError::ToOutOfBounds { floor: order.to, min, max });
        }
        if order.from == order.to {
            return Err(OrderError::SameFloor(order.from));
        }
        if self.current_order.to != self.position {
            return Err(OrderError::DestinationNotReached {
                index: self.index,
                position: self.position,
                destination: self.current_order.to,
            });
        }

        Ok(Elevator {
            current_order: order,
            ..*self
        })
    }

    pub fn new_position_and_state(
        &self,
        position: i32,
        state: State,
    ) -> Result<Elevator, ElevatorError> {
        if position < 0 {
            return Err(ElevatorError::NegativePosition {
                index: self.index,
                position,
            });
        }

        Ok(Elevator {
            position: Floor::new(position),
            state,
            ..*self
        })
    }

    /// Same car with its order cleared, parked where it stands.
    pub(crate) fn parked(&self) -> Elevator {
        Elevator {
            current_order: Order::EMPTY,
            state: State::StopAtFloor(self.position),
            ..*self
        }
    }

    pub(crate) fn with_state(&self, state: State) -> Elevator {
        Elevator { state, ..*self }
    }
}
