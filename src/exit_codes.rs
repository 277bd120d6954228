//! Exit code constants for the maildraft CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unusable input data)
//! - 2: Configuration error (bad config file, missing credential)
//! - 3: Output failure (generated drafts could not be written)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, missing topic, or unreadable/empty roster.
pub const USER_ERROR: i32 = 1;

/// Configuration error: invalid config file or missing service credential.
pub const CONFIG_ERROR: i32 = 2;

/// Output failure: the generated drafts could not be written.
pub const OUTPUT_FAILURE: i32 = 3;
