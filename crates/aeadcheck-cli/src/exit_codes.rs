//! Process exit codes of the `aeadcheck` binary. Stable for CI consumers;
//! summary.json's reason codes are the richer contract.

pub const SUCCESS: i32 = 0;
pub const VECTOR_FAILURE: i32 = 1;
pub const CONFIG_ERROR: i32 = 2;
