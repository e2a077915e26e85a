use crate::elevator::orders::Floor;


/// Motion state of one elevator. Every variant carries its reference floor.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "state", content = "floor")]
pub enum State {
    /// Parked at the floor, possibly with a freshly bound order.
    StopAtFloor(Floor),
    /// Empty car on its way to the pickup floor.
    MovingEmptyTo(Floor),
    /// One tick of boarding at the pickup floor.
    LoadingAtFloor(Floor),
    /// Loaded car on its way to the drop-off floor.
    TransportingPeopleTo(Floor),
    /// One tick of disembarking at the drop-off floor.
    UnloadingAtFloor(Floor),
}

impl State {
    pub fn floor(&self) -> Floor {
        match *self {
            State::StopAtFloor(floor)
            | State::MovingEmptyTo(floor)
            | State::LoadingAtFloor(floor)
            | State::TransportingPeopleTo(floor)
            | State::UnloadingAtFloor(floor) => floor,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            State::StopAtFloor(_) => "StopAtFloor",
            State::MovingEmptyTo(_) => "MovingEmptyTo",
            State::LoadingAtFloor(_) => "LoadingAtFloor",
            State::TransportingPeopleTo(_) => "TransportingPeopleTo",
            State::UnloadingAtFloor(_) => "UnloadingAtFloor",
        }
    }

    pub fn is_stopped(&self) -> bool {
        matches!(self, State::StopAtFloor(_))
    }
}
