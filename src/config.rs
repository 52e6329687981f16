use std::path::PathBuf;

pub const PROGRAM_FILE: &str = "cl/square.cl";
pub const KERNEL_FUNC: &str = "square";
pub const WG_SIZE: usize = 256;

/// Everything the runner needs to locate and dispatch the kernel.
///
/// These were fixed constants in earlier revisions; they are plain fields now
/// so tests can swap the kernel source or shrink the workgroup size.
#[derive(Debug, Clone)]
pub struct JobConfig {
    /// Path of the OpenCL C source file containing the kernel.
    pub program_file: PathBuf,
    /// Name of the kernel entry point inside the program.
    pub kernel_func: String,
    /// Work-items per workgroup. Must be nonzero; the global size is rounded
    /// up to a multiple of it.
    pub local_size: usize,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            program_file: PROGRAM_FILE.into(),
            kernel_func: KERNEL_FUNC.to_owned(),
            local_size: WG_SIZE,
        }
    }
}
