use std::cmp::Ordering;

use crate::elevator::elevator::Elevator;
use crate::elevator::orders::Order;

/// Dispatch ordering between two candidates for `new_order`.
///
/// Parked cars always come first, whatever their distance. Within the same
/// tier the smaller remaining distance wins.
pub fn compare_for_dispatch(left: &Elevator, right: &Elevator, new_order: &Order) -> Ordering {
    let left_is_free = left.state().is_stopped();
    let right_is_free = right.state().is_stopped();

    match (left_is_free, right_is_free) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => left
            .remaining_distance(new_order)
            .cmp(&right.remaining_distance(new_order)),
    }
}

/// Cars sorted from best to worst for `new_order`.
///
/// The sort is stable, so candidates that compare equal keep the order they
/// were given in; the controller hands them over by ascending index.
pub fn sort_elevators_by_distance<'a, I>(elevators: I, new_order: &Order) -> Vec<Elevator>
where
    I: IntoIterator<Item = &'a Elevator>,
{
    let mut sorted: Vec<Elevator> = elevators.into_iter().copied().collect();
    sorted.sort_by(|left, right| compare_for_dispatch(left, right, new_order));
    sorted
}

/// Ready cars ranked for `new_order`, best candidate first.
pub fn rank_candidates<'a, I>(elevators: I, new_order: &Order) -> Vec<Elevator>
where
    I: IntoIterator<Item = &'a Elevator>,
{
    let ready = elevators
        .into_iter()
        .filter(|elevator| elevator.is_ready_for_new_order());
    sort_elevators_by_distance(ready, new_order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elevator::orders::Floor;
    use crate::elevator::state::State;

    fn floor(f: i32) -> Floor {
        Floor::new(f)
    }

    fn indices(elevators: &[Elevator]) -> Vec<u8> {
        elevators.iter().map(|elevator| elevator.index()).collect()
    }

    #[test]
    fn sort_elevators_by_availability() {
        let transporting = Elevator::new(
            2,
            Order::new(1, 4),
            floor(2),
            State::TransportingPeopleTo(floor(4)),
        );
        let new_order = Order::new(1, 3);

        let cases = [
            (
                "one elevator stopped at floor",
                Elevator::new(1, Order::EMPTY, floor(5), State::StopAtFloor(floor(5))),
                vec![1, 2],
            ),
            (
                "one elevator unloading",
                Elevator::new(1, Order::EMPTY, floor(2), State::UnloadingAtFloor(floor(2))),
                vec![1, 2],
            ),
            (
                "one elevator loading at floor",
                Elevator::new(1, Order::new(2, 3), floor(2), State::LoadingAtFloor(floor(2))),
                vec![1, 2],
            ),
            (
                "one elevator moving empty",
                Elevator::new(1, Order::new(2, 5), floor(1), State::MovingEmptyTo(floor(2))),
                vec![2, 1],
            ),
        ];
        for (name, other, want) in cases {
            let sorted = sort_elevators_by_distance(&[transporting, other], &new_order);
            assert_eq!(indices(&sorted), want, "{}", name);
        }
    }

    #[test]
    fn parked_car_beats_closer_busy_car() {
        let far_parked = Elevator::new(1, Order::EMPTY, floor(9), State::StopAtFloor(floor(9)));
        let close_busy = Elevator::new(
            2,
            Order::new(4, 2),
            floor(2),
            State::TransportingPeopleTo(floor(2)),
        );
        let new_order = Order::new(1, 5);

        assert_eq!(
            compare_for_dispatch(&far_parked, &close_busy, &new_order),
            Ordering::Less
        );
        assert_eq!(
            indices(&sort_elevators_by_distance(&[close_busy, far_parked], &new_order)),
            vec![1, 2]
        );
    }

    #[test]
    fn ties_keep_the_given_order() {
        let first = Elevator::init(1);
        let second = Elevator::init(2);
        let new_order = Order::new(1, 3);

        assert_eq!(compare_for_dispatch(&first, &second, &new_order), Ordering::Equal);
        assert_eq!(indices(&sort_elevators_by_distance(&[first, second], &new_order)), vec![1, 2]);
    }

    #[test]
    fn rank_candidates_skips_busy_cars() {
        let busy = Elevator::new(
            1,
            Order::new(1, 4),
            floor(2),
            State::TransportingPeopleTo(floor(4)),
        );
        let unloading = Elevator::new(
            2,
            Order::new(0, 6),
            floor(6),
            State::UnloadingAtFloor(floor(6)),
        );
        let parked = Elevator::new(3, Order::EMPTY, floor(0), State::StopAtFloor(floor(0)));
        let new_order = Order::new(5, 1);

        let ranked = rank_candidates(&[busy, unloading, parked], &new_order);

        assert_eq!(indices(&ranked), vec![3, 2]);
    }
}
