// Front-ends that drive the decoder and session: interactive console and batch file runner.

pub mod batch;
pub mod console;

pub use batch::{run_batch, BatchReport, RejectedLine};
pub use console::{Console, ConsoleCommand, Flow};
