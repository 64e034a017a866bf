//! probetap — interactive console harness for a binary-protocol TCP server.
//!
//! Two threads total. The compio reactor thread owns the socket, the timers,
//! and every piece of client state, running the client actor, the job
//! simulator, and the command dispatcher as cooperative tasks. A dedicated
//! input thread blocks on stdin. The only cross-thread state is the command
//! mailbox and the pause/stop control cell.

use std::thread;

use probetap_core::prelude::*;
use tracing::warn;

/// Initialize a fmt subscriber when `RUST_LOG` is set. Status lines for the
/// operator go to stdout regardless; tracing only carries diagnostics.
fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    }
}

#[compio::main]
async fn main() {
    init_tracing();

    let options = HarnessOptions::default();
    let mailbox = CommandMailbox::new();
    let control = ControlCell::new();

    let monitor = InputMonitor::new(mailbox.clone(), control.clone());
    let input = thread::spawn(move || monitor.run());

    // Let the usage banner print before status lines start interleaving.
    compio::time::sleep(options.startup_grace).await;

    let (client_tx, client_rx) = flume::unbounded();
    let client = ProbeClient::new(options.max_packet);
    let jobs = JobSimulator::new(control.clone(), options.work_interval);
    let dispatcher = CommandDispatcher::new(mailbox, client_tx, options.poll_interval);

    // The dispatcher returns on `X`; dropping its sender ends the client
    // actor, and the job simulator stops at its next tick. Once all three
    // are done the reactor has no pending work left.
    futures::join!(client.run(client_rx), jobs.run(), dispatcher.run());

    if input.join().is_err() {
        warn!("input thread panicked");
    }
    println!("Event loop finished");
}
