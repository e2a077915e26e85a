use std::collections::BTreeMap;
use std::time::Duration;

use crate::cost_function::cost_function;
use crate::distributor::all_orders::OrdersBuffer;
use crate::elevator::elevator::Elevator;
use crate::elevator::elevator_fsm;
use crate::elevator::orders::Order;
use crate::error::ControllerError;

use log::{debug, info, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickStatus {
    Running,
    Finished,
}

/// Read-only view of the fleet handed to the presentation layer.
/// Elevators are listed by ascending index.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FleetSnapshot {
    pub tick: u64,
    pub elevators: Vec<Elevator>,
    pub orders_buffer: OrdersBuffer,
}

/// Owns the fleet and the pending orders, and advances both one tick at a time.
#[derive(Debug, Clone)]
pub struct Controller {
    elevators: BTreeMap<u8, Elevator>,
    orders_buffer: OrdersBuffer,
    pause_time: Duration,
    tick: u64,
}

impl Controller {
    pub fn new(pause_time: Duration) -> Self {
        Controller {
            elevators: BTreeMap::new(),
            orders_buffer: OrdersBuffer::init(),
            pause_time,
            tick: 0,
        }
    }

    /// Registers a car parked at the ground floor. Returns false, leaving the
    /// existing car untouched, when `index` is already taken.
    pub fn add_elevator(&mut self, index: u8) -> bool {
        if self.elevators.contains_key(&index) {
            return false;
        }
        self.elevators.insert(index, Elevator::init(index));
        debug!("elevator {} registered", index);
        true
    }

    /// Queues an order. Validation happens when it is bound to a car.
    pub fn push_order(&mut self, from: i32, to: i32) {
        let order = Order::new(from, to);
        self.orders_buffer.push(order);
        debug!("order {} queued ({} pending)", order, self.orders_buffer.len());
    }

    pub fn elevators(&self) -> impl Iterator<Item = &Elevator> {
        self.elevators.values()
    }

    pub fn elevator(&self, index: u8) -> Option<&Elevator> {
        self.elevators.get(&index)
    }

    pub fn orders_buffer(&self) -> &OrdersBuffer {
        &self.orders_buffer
    }

    pub fn pause_time(&self) -> Duration {
        self.pause_time
    }

    pub fn ticks(&self) -> u64 {
        self.tick
    }

    /// Tries to hand the oldest pending order to the best ready car.
    ///
    /// An order nobody can take stays at the head of the queue. A rejection
    /// by the chosen car is returned as is; the next candidate is not tried.
    pub fn pop_order_from_buffer(&mut self) -> Result<(), ControllerError> {
        if self.elevators.is_empty() {
            return Err(ControllerError::NoElevators);
        }

        let next_order = match self.orders_buffer.head() {
            Some(order) => *order,
            None => return Ok(()),
        };

        let candidates = cost_function::rank_candidates(self.elevators.values(), &next_order);
        let elevator_to_update = match candidates.first() {
            Some(elevator) => elevator,
            None => {
                trace!("no elevator ready for order {}", next_order);
                return Ok(());
            }
        };

        let new_elevator = elevator_to_update.add_order(next_order)?;
        self.elevators.insert(new_elevator.index(), new_elevator);
        self.orders_buffer.pop_head();
        info!("order {} dispatched to elevator {}", next_order, new_elevator.index());

        Ok(())
    }

    /// Moves every car one step. Nothing is committed unless all cars made
    /// a valid transition.
    pub fn advance_elevators(&mut self) -> Result<(), ControllerError> {
        let next_elevators = self
            .elevators
            .iter()
            .map(|(index, elevator)| elevator_fsm::next_state(elevator).map(|next| (*index, next)))
            .collect::<Result<BTreeMap<_, _>, _>>()?;
        self.elevators = next_elevators;
        Ok(())
    }

    /// No order waiting and every car parked with nothing bound.
    pub fn is_finished(&self) -> bool {
        self.orders_buffer.is_empty()
            && self.elevators.values().all(|elevator| {
                elevator.is_ready_for_new_order() && elevator.current_order().is_empty()
            })
    }

    /// One full simulation step: advance all cars, then one dispatch attempt.
    pub fn tick(&mut self) -> Result<TickStatus, ControllerError> {
        self.advance_elevators()?;
        self.pop_order_from_buffer()?;
        self.tick += 1;

        if self.is_finished() {
            Ok(TickStatus::Finished)
        } else {
            Ok(TickStatus::Running)
        }
    }

    pub fn snapshot(&self) -> FleetSnapshot {
        FleetSnapshot {
            tick: self.tick,
            elevators: self.elevators.values().copied().collect(),
            orders_buffer: self.orders_buffer.clone(),
        }
    }
}
