use std::collections::VecDeque;
use std::fmt;


#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, Default)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Floor(i32);

impl Floor {
    pub const fn new(floor: i32) -> Self {
        Floor(floor)
    }

    pub const fn to_int(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of floors between `from` and `to`, whichever way the car travels.
/// Exact for any pair of `i32` floors, including unvalidated ones.
pub fn compute_distance(from: Floor, to: Floor) -> i64 {
    (i64::from(to.to_int()) - i64::from(from.to_int())).abs()
}

/// A request to carry people from one floor to another.
///
/// `Order::EMPTY` (`0 -> 0`) is the sentinel bound to an elevator that has
/// nothing to do.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Order {
    pub from: Floor,
    pub to: Floor,
}

impl Order {
    pub const EMPTY: Order = Order {
        from: Floor::new(0),
        to: Floor::new(0),
    };

    pub fn new(from: i32, to: i32) -> Self {
        Order {
            from: Floor::new(from),
            to: Floor::new(to),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Order::EMPTY
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}->{}]", self.from, self.to)
    }
}

pub type Orders = VecDeque<Order>;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn compute_distance_counts_floors_in_both_directions() {
        let cases = [
            ("nominal", Order::new(2, 5), 3),
            ("negative", Order::new(5, 1), 4),
            ("same floor", Order::new(7, 7), 0),
            ("extreme floors", Order::new(i32::MIN, i32::MAX), i64::from(u32::MAX)),
        ];
        for (name, order, want) in cases {
            assert_eq!(compute_distance(order.from, order.to), want, "{}", name);
        }
    }

    #[test]
    fn empty_order_is_the_ground_floor_sentinel() {
        assert!(Order::EMPTY.is_empty());
        assert!(Order::default().is_empty());
        assert!(!Order::new(0, 2).is_empty());
        assert!(!Order::new(3, 0).is_empty());
    }

    #[test]
    fn order_display() {
        assert_eq!(Order::new(1, 3).to_string(), "[1->3]");
        assert_eq!(Order::new(5, 2).to_string(), "[5->2]");
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(f1 in 0i32..=9, f2 in 0i32..=9) {
            prop_assume!(f1 != f2);
            let (a, b) = (Floor::new(f1), Floor::new(f2));
            prop_assert_eq!(compute_distance(a, b), compute_distance(b, a));
            prop_assert_eq!(compute_distance(a, b), i64::from((f1 - f2).abs()));
        }
    }
}
