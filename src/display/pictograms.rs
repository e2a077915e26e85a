//! Text rendering of elevators, one line per car.

use crate::distributor::distributor::FleetSnapshot;
use crate::elevator::elevator::Elevator;
use crate::elevator::orders::Floor;
use crate::elevator::state::State;


const EMPTY_CELL: &str = " _ ";
const EMPTY_ORDER: &str = "[    ]";

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pictograms,
    Json,
}

fn waiting_at(floor: Floor) -> String {
    format!("{}☹{}", floor, floor)
}

fn destination(floor: Floor) -> String {
    format!("❲{}❳", floor)
}

fn parked_at(floor: Floor) -> String {
    format!("⎣{}⎦", floor)
}

fn moving(position: Floor, target: Floor, up: &str, down: &str) -> String {
    if position < target {
        up.to_string()
    } else {
        down.to_string()
    }
}

/// The glyphs drawn for `elevator`, keyed by floor. The car itself comes
/// first so that it wins over any marker on the same floor.
fn markers(elevator: &Elevator) -> Vec<(Floor, String)> {
    let position = elevator.position();
    let order = elevator.current_order();

    match elevator.state() {
        State::StopAtFloor(_) if order.is_empty() => vec![(position, parked_at(position))],
        State::StopAtFloor(_) => vec![
            (position, parked_at(position)),
            (order.from, waiting_at(order.from)),
            (order.to, destination(order.to)),
        ],
        State::MovingEmptyTo(target) => {
            let car = if position == target {
                parked_at(position)
            } else {
                moving(position, target, "|⋅⟩", "⟨⋅|")
            };
            vec![
                (position, car),
                (order.from, waiting_at(order.from)),
                (order.to, destination(order.to)),
            ]
        }
        State::LoadingAtFloor(_) => vec![
            (position, format!("↑{}↑", position)),
            (order.to, destination(order.to)),
            (order.from, EMPTY_CELL.to_string()),
        ],
        State::TransportingPeopleTo(target) => {
            let car = if position == target {
                format!("{}☺{}", position, position)
            } else {
                moving(position, target, "|☺⟩", "⟨☺|")
            };
            vec![
                (position, car),
                (order.to, destination(order.to)),
                (order.from, EMPTY_CELL.to_string()),
            ]
        }
        State::UnloadingAtFloor(_) => vec![(position, format!("↓{}↓", position))],
    }
}

fn render_cells(markers: &[(Floor, String)]) -> String {
    let top = markers.iter().map(|(floor, _)| floor.to_int()).max().unwrap_or(0);

    (0..=top)
        .map(|floor| {
            markers
                .iter()
                .find(|(marker_floor, _)| marker_floor.to_int() == floor)
                .map_or(EMPTY_CELL, |(_, glyph)| glyph.as_str())
        })
        .collect()
}

/// `"<order>(<state>)<padding>:<cells>"`, without the elevator index.
pub fn render_state(elevator: &Elevator) -> String {
    let order = elevator.current_order();
    let order_label = if order.is_empty() {
        EMPTY_ORDER.to_string()
    } else {
        order.to_string()
    };
    let state_label = format!("({})", elevator.state().name());

    format!("{}{:<22}:{}", order_label, state_label, render_cells(&markers(elevator)))
}

pub fn render_elevator(elevator: &Elevator) -> String {
    format!("{} {}", elevator.index(), render_state(elevator))
}

pub fn render_fleet(snapshot: &FleetSnapshot) -> String {
    let mut display = format!("\n\n\tElevators state (tick {}): \n", snapshot.tick);
    display += &format!("\tOrdersBuffer: {}\n\n", snapshot.orders_buffer);
    for elevator in &snapshot.elevators {
        display += &render_elevator(elevator);
        display += "\n";
    }
    display
}
