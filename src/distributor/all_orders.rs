use std::fmt;

use crate::elevator::orders::{Order, Orders};

/// FIFO of orders waiting for an elevator. Only the head is ever handed out,
/// and only after it has been bound to a car.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct OrdersBuffer {
    orders: Orders,
}

impl OrdersBuffer {
    pub fn init() -> Self {
        Self::default()
    }

    pub fn push(&mut self, order: Order) {
        self.orders.push_back(order);
    }

    pub fn head(&self) -> Option<&Order> {
        self.orders.front()
    }

    pub(crate) fn pop_head(&mut self) -> Option<Order> {
        self.orders.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }
}

impl FromIterator<Order> for OrdersBuffer {
    fn from_iter<I: IntoIterator<Item = Order>>(iter: I) -> Self {
        OrdersBuffer {
            orders: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for OrdersBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (position, order) in self.orders.iter().enumerate() {
            if position > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", order)?;
        }
        write!(f, "]")
    }
}
