use crate::{Accel, JobConfig, Result};
use failure::{ensure, ResultExt as _};
use ocl::{Buffer, Kernel, Program};

/// Least multiple of `local_size` that is >= `n`.
///
/// The dispatch call requires the local size to evenly divide the global
/// size, so the index space is rounded up to the next full workgroup and the
/// kernel masks off the ids beyond `n`.
pub fn covering_global_size(n: usize, local_size: usize) -> usize {
    assert!(local_size > 0, "local size must be nonzero");
    (n + local_size - 1) / local_size * local_size
}

/// A compiled square-kernel program, ready to dispatch over host arrays.
///
/// Buffers and the kernel object are scoped inside [`run`](Self::run); the
/// program outlives them and the [`Accel`] outlives the program, so drops
/// happen in reverse acquisition order.
#[derive(Debug)]
pub struct SquareJob {
    accel: Accel,
    program: Program,
    config: JobConfig,
}

impl SquareJob {
    /// Read the kernel source named by `config.program_file` and build it
    /// for the accelerator's context and device.
    pub fn compile(accel: Accel, config: JobConfig) -> Result<Self> {
        ensure!(config.local_size > 0, "Workgroup size must be nonzero");
        let src = std::fs::read_to_string(&config.program_file)
            .with_context(|_| format!("Read kernel source {}", config.program_file.display()))?;
        let program = Program::builder()
            .src(src)
            .devices(accel.device())
            .build(accel.context())
            .context("Build OpenCL program")?;
        Ok(Self {
            accel,
            program,
            config,
        })
    }

    /// Square every element of `input` on the device and return the result.
    ///
    /// Both device buffers and the readback are sized to the full input
    /// length. An empty input returns an empty vec without touching the
    /// queue at all.
    pub fn run(&self, input: &[f32]) -> Result<Vec<f32>> {
        if input.is_empty() {
            return Ok(Vec::new());
        }
        let n = input.len();
        let queue = self.accel.queue();

        let input_buffer = Buffer::<f32>::builder()
            .queue(queue.clone())
            .flags(ocl::flags::MEM_READ_ONLY | ocl::flags::MEM_COPY_HOST_PTR)
            .len(n)
            .copy_host_slice(input)
            .build()
            .context("Create input buffer")?;
        let out_buffer = Buffer::<f32>::builder()
            .queue(queue.clone())
            .flags(ocl::flags::MEM_READ_WRITE)
            .len(n)
            .build()
            .context("Create output buffer")?;

        let local_size = self.config.local_size;
        let global_size = covering_global_size(n, local_size);

        let kernel = Kernel::builder()
            .name(self.config.kernel_func.as_str())
            .program(&self.program)
            .queue(queue.clone())
            .global_work_size(global_size)
            .local_work_size(local_size)
            .arg(&input_buffer)
            .arg(&out_buffer)
            .arg(n as i32)
            .build()
            .context("Create kernel")?;

        unsafe { kernel.enq().context("Enqueue kernel")? };
        // Drain the queue before reading back.
        queue.finish().context("Wait for queue")?;

        let mut output = vec![0.0f32; n];
        out_buffer
            .read(&mut output[..])
            .enq()
            .context("Read output buffer")?;
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covering_size_is_tightest_multiple() {
        for &local in &[1usize, 2, 7, 64, 256] {
            for n in 1..1000 {
                let global = covering_global_size(n, local);
                assert_eq!(global % local, 0, "n={} local={}", n, local);
                assert!(global >= n, "n={} local={}", n, local);
                assert!(global - n < local, "n={} local={}", n, local);
            }
        }
    }

    #[test]
    fn covering_size_concrete() {
        // 1000 items in groups of 256 -> 4 groups.
        assert_eq!(covering_global_size(1000, 256), 1024);
        assert_eq!(covering_global_size(256, 256), 256);
        assert_eq!(covering_global_size(257, 256), 512);
        assert_eq!(covering_global_size(1, 256), 256);
    }

    #[test]
    fn covering_size_empty() {
        assert_eq!(covering_global_size(0, 256), 0);
    }

    #[test]
    #[should_panic(expected = "nonzero")]
    fn covering_size_zero_local() {
        covering_global_size(10, 0);
    }
}
