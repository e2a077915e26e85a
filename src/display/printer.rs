use std::io::{self, Write};

use crate::display::pictograms::{self, OutputFormat};
use crate::distributor::distributor::FleetSnapshot;

use crossbeam_channel as cbc;
use log::warn;

pub fn write_snapshot<W: Write>(
    out: &mut W,
    snapshot: &FleetSnapshot,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Pictograms => write!(out, "{}", pictograms::render_fleet(snapshot))?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, snapshot)?;
            writeln!(out)?;
        }
    }
    out.flush()
}

/// Prints every snapshot received until the sending side hangs up.
pub fn printer(snapshot_rx: cbc::Receiver<FleetSnapshot>, format: OutputFormat) {
    let stdout = io::stdout();
    for snapshot in snapshot_rx.iter() {
        let mut out = stdout.lock();
        if let Err(e) = write_snapshot(&mut out, &snapshot, format) {
            warn!("could not print tick {}: {}", snapshot.tick, e);
        }
    }
}
