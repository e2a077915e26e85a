use elevator_dispatch::config::config;
use elevator_dispatch::config::fetch_arguments;
use elevator_dispatch::display::legend;
use elevator_dispatch::display::printer;
use elevator_dispatch::distributor::distributor::Controller;
use elevator_dispatch::distributor::run_loop::{self, RunOutcome, RunSettings};
use elevator_dispatch::logger;

use std::process::ExitCode;
use std::thread::{self, spawn};
use std::time::Duration;
use crossbeam_channel as cbc;
use log::{error, info, warn};

fn main() -> ExitCode {
    let arguments = fetch_arguments::fetch_command_line_arguments();

    if let Err(e) = logger::init(logger::level_from_verbosity(arguments.verbose)) {
        eprintln!("logger already installed: {}", e);
    }

    println!("{}", legend::BANNER);
    print!("{}", legend::pause_notice(arguments.pause_time_in_secs));
    print!("{}", legend::LEGEND);

    if !arguments.skip_pause {
        println!(
            "\n\tPausing {} seconds to let you read the pictograms and the display system ....",
            config::LEGEND_PAUSE_DURATION.as_secs()
        );
        thread::sleep(config::LEGEND_PAUSE_DURATION);
    }

    let mut controller = Controller::new(Duration::from_secs(arguments.pause_time_in_secs));

    for index in arguments.elevator_indices() {
        if !controller.add_elevator(index) {
            warn!("elevator {} is already registered, ignoring", index);
        }
    }
    for (from, to) in arguments.order_pairs() {
        controller.push_order(from, to);
    }

    let (snapshot_tx, snapshot_rx) = cbc::unbounded();
    let format = arguments.format;
    let printer_handle = spawn(move || printer::printer(snapshot_rx, format));

    let settings = RunSettings {
        max_ticks: arguments.max_ticks,
    };
    let outcome = run_loop::run(&mut controller, &settings, &snapshot_tx, &cbc::never());

    drop(snapshot_tx);
    if printer_handle.join().is_err() {
        error!("printer thread panicked");
    }

    match outcome {
        Ok(RunOutcome::Completed { ticks }) => {
            info!("all orders served in {} ticks", ticks);
            print!("{}", legend::END_OF_SIMULATION);
            ExitCode::SUCCESS
        }
        Ok(RunOutcome::Stopped { ticks }) => {
            warn!(
                "stopped after {} ticks with {} order(s) still queued",
                ticks,
                controller.orders_buffer().len()
            );
            print!("{}", legend::END_OF_SIMULATION);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("simulation aborted: {}", e);
            for elevator in controller.elevators() {
                error!("  {:?}", elevator);
            }
            error!("  pending orders: {}", controller.orders_buffer());
            ExitCode::FAILURE
        }
    }
}
