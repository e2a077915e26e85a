use std::str::FromStr;

use crate::config::config;
use crate::display::pictograms::OutputFormat;

use clap::Parser;

/// `from:to` (or `from->to`) as typed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderArgument {
    pub from: i32,
    pub to: i32,
}

impl FromStr for OrderArgument {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (from, to) = s
            .split_once("->")
            .or_else(|| s.split_once(':'))
            .ok_or_else(|| format!("expected <from>:<to>, got '{}'", s))?;
        let parse = |floor: &str| {
            floor
                .trim()
                .parse::<i32>()
                .map_err(|e| format!("floor '{}' is not a number: {}", floor.trim(), e))
        };
        Ok(OrderArgument {
            from: parse(from)?,
            to: parse(to)?,
        })
    }
}

/// Bank of elevators serving pickup/drop-off orders with a greedy dispatcher.
#[derive(Parser, Debug)]
#[command(name = "elevator-dispatch", version, about, long_about = None)]
pub struct Arguments {
    /// Pause time in seconds between 2 states transitions.
    #[arg(long, default_value_t = config::DEFAULT_PAUSE_TIME_IN_SECS)]
    pub pause_time_in_secs: u64,

    /// Skip the initial pause to read pictograms.
    #[arg(long)]
    pub skip_pause: bool,

    /// Elevator index to register. Repeat or comma separate (default 1,2).
    #[arg(long = "elevator", value_delimiter = ',')]
    pub elevators: Vec<u8>,

    /// Order to queue as <from>:<to>. Repeatable (default: five demo orders).
    #[arg(long = "order")]
    pub orders: Vec<OrderArgument>,

    /// How each tick is printed.
    #[arg(long, value_enum, default_value_t = OutputFormat::Pictograms)]
    pub format: OutputFormat,

    /// Stop after this many ticks.
    #[arg(long)]
    pub max_ticks: Option<u64>,

    /// Log verbosity, repeat for more (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Arguments {
    pub fn elevator_indices(&self) -> Vec<u8> {
        if self.elevators.is_empty() {
            config::DEFAULT_ELEVATORS.to_vec()
        } else {
            self.elevators.clone()
        }
    }

    pub fn order_pairs(&self) -> Vec<(i32, i32)> {
        if self.orders.is_empty() {
            config::DEFAULT_ORDERS.to_vec()
        } else {
            self.orders.iter().map(|order| (order.from, order.to)).collect()
        }
    }
}

pub fn fetch_command_line_arguments() -> Arguments {
    Arguments::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let arguments = Arguments::try_parse_from(["elevator-dispatch"]).unwrap();

        assert_eq!(arguments.pause_time_in_secs, 2);
        assert!(!arguments.skip_pause);
        assert_eq!(arguments.format, OutputFormat::Pictograms);
        assert_eq!(arguments.elevator_indices(), vec![1, 2]);
        assert_eq!(arguments.order_pairs(), config::DEFAULT_ORDERS.to_vec());
        assert_eq!(arguments.max_ticks, None);
    }

    #[test]
    fn explicit_fleet_and_orders() {
        let arguments = Arguments::try_parse_from([
            "elevator-dispatch",
            "--pause-time-in-secs",
            "0",
            "--skip-pause",
            "--elevator",
            "3,4",
            "--elevator",
            "9",
            "--order",
            "1:3",
            "--order",
            "5->2",
            "--format",
            "json",
            "-vv",
        ])
        .unwrap();

        assert_eq!(arguments.pause_time_in_secs, 0);
        assert!(arguments.skip_pause);
        assert_eq!(arguments.elevator_indices(), vec![3, 4, 9]);
        assert_eq!(arguments.order_pairs(), vec![(1, 3), (5, 2)]);
        assert_eq!(arguments.format, OutputFormat::Json);
        assert_eq!(arguments.verbose, 2);
    }

    #[test]
    fn malformed_order_is_rejected() {
        assert!("13".parse::<OrderArgument>().is_err());
        assert!("a:3".parse::<OrderArgument>().is_err());
        assert_eq!("-1:3".parse::<OrderArgument>(), Ok(OrderArgument { from: -1, to: 3 }));
        assert!(Arguments::try_parse_from(["elevator-dispatch", "--order", "x"]).is_err());
    }
}
