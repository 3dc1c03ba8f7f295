//! Exit code constants for the taskdoc CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unknown task type or curriculum tag)
//! - 2: Render failure (PDF serialization)
//! - 3: I/O failure (artifact or record file)
//! - 4: Configuration failure (unreadable or invalid render config)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or a malformed task request.
pub const USER_ERROR: i32 = 1;

/// Render failure: the PDF library could not serialize the document.
pub const RENDER_FAILURE: i32 = 2;

/// I/O failure: writing the artifact or appending a record failed.
pub const IO_FAILURE: i32 = 3;

/// Configuration failure: the render config could not be loaded.
pub const CONFIG_FAILURE: i32 = 4;
