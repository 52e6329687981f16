//! Host-side runner for a single OpenCL compute kernel: acquire one device,
//! build the program, dispatch an element-wise `square` kernel over a 1-D
//! index space and read the result back.
//!
//! The kernel itself lives in a separate `.cl` source file and is opaque to
//! this crate; the host only compiles it, binds positional arguments and
//! partitions the work.
use failure::Error;

pub type Result<T> = std::result::Result<T, Error>;

mod error;

pub mod config;
pub mod device;
pub mod job;

pub use config::JobConfig;
pub use device::Accel;
pub use job::{covering_global_size, SquareJob};
