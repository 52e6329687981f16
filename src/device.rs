use crate::error::OptionExt as _;
use crate::Result;
use failure::ResultExt as _;
use ocl::{Context, Device, Queue};

/// One acquired accelerator: a context bound to exactly one device and an
/// in-order, non-profiling command queue on it.
///
/// Dropping an `Accel` releases the queue before the context, the reverse of
/// acquisition order.
#[derive(Debug)]
pub struct Accel {
    device: Device,
    context: Context,
    queue: Queue,
}

impl Accel {
    /// Pick the first usable OpenCL device and set up a context and queue
    /// for it. Any failure here is fatal for the run; there is no retry.
    pub fn acquire() -> Result<Self> {
        let context = Context::builder()
            .devices(Device::specifier().first())
            .build()
            .context("Create OpenCL context")?;
        let device = *context.devices().get(0).context("No OpenCL device")?;
        // `None` properties: in-order execution, no profiling.
        let queue = Queue::new(&context, device, None).context("Create command queue")?;
        Ok(Self {
            device,
            context,
            queue,
        })
    }

    pub fn device(&self) -> Device {
        self.device
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn queue(&self) -> &Queue {
        &self.queue
    }
}
