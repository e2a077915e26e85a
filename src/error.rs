use thiserror::Error;

use crate::elevator::orders::Floor;

/// Reasons an order cannot be bound to an elevator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("cannot add empty order")]
    EmptyOrder,

    #[error("order.from {floor} is out of bound [{min}-{max}]")]
    FromOutOfBounds { floor: Floor, min: Floor, max: Floor },

    #[error("order.to {floor} is out of bound [{min}-{max}]")]
    ToOutOfBounds { floor: Floor, min: Floor, max: Floor },

    #[error("order.from {0} should not be equal to order.to {0}")]
    SameFloor(Floor),

    #[error(
        "elevator n°{index} has not reached its destination {destination} yet \
         (at floor {position}), cannot add new order"
    )]
    DestinationNotReached {
        index: u8,
        position: Floor,
        destination: Floor,
    },
}

/// Broken elevator invariants. These point at a defect in the state machine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ElevatorError {
    #[error("elevator n°{index}: invalid negative position {position}")]
    NegativePosition { index: u8, position: i32 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ControllerError {
    #[error("there is no elevator configured in the system currently to receive orders")]
    NoElevators,

    #[error("order rejected: {0}")]
    Order(#[from] OrderError),

    #[error("elevator invariant violated: {0}")]
    Elevator(#[from] ElevatorError),
}
