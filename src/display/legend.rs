pub const BANNER: &str = r"
 _____ _                 _
| ____| | _____   ____ _| |_ ___  _ __
|  _| | |/ _ \ \ / / _` | __/ _ \| '__|
| |___| |  __/\ V / (_| | || (_) | |
|_____|_|\___| \_/ \__,_|\__\___/|_|
";

pub const LEGEND: &str = "
	Pictograms:

	⎣x⎦ : elevator STAYING EMPTY at floor 'x'
	x☹x : people WAITING for elevator at floor 'x'
	❲x❳ : destination floor 'x'
	|⋅⟩ : EMPTY elevator moving UP
	⟨⋅| : EMPTY elevator moving DOWN
	↑x↑ : elevator LOADING people at floor 'x'
	↓x↓ : elevator UNLOADING people at floor 'x'
	|☺⟩ : elevator TRANSPORTING people moving UP
	⟨☺| : elevator TRANSPORTING people moving DOWN
	x☺x : elevator TRANSPORTING people arrived at floor 'x'
	x->y: an ORDER to take people from floor 'x' to floor 'y'

	Display system:

	1 [1->3](MovingEmptyTo)       :|⋅⟩1☹1 _ ❲3❳   means

	elevator n°1, with current order Floor 1 to Floor 3, current state: MovingEmptyTo,
	then the display of the elevator movement
";

pub const END_OF_SIMULATION: &str =
    "\n\n**************** End of Simulation *******************\n\n";

pub fn pause_notice(pause_time_in_secs: u64) -> String {
    format!("\n\tTime between 2 states transitions set to {} seconds\n\n", pause_time_in_secs)
}
