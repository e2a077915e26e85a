use std::time;

use crate::elevator::orders::Floor;

pub const MIN_FLOOR: Floor = Floor::new(0);
pub const MAX_FLOOR: Floor = Floor::new(9);

pub const DEFAULT_PAUSE_TIME_IN_SECS: u64 = 2;
pub const LEGEND_PAUSE_DURATION: time::Duration = time::Duration::from_secs(15);

pub const DEFAULT_ELEVATORS: [u8; 2] = [1, 2];
pub const DEFAULT_ORDERS: [(i32, i32); 5] = [(1, 3), (5, 2), (0, 2), (3, 6), (4, 0)];
