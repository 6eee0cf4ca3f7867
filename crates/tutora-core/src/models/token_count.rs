use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Token counts for one model invocation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TokenCount {
    pub input: u64,
    pub output: u64,
}

impl TokenCount {
    pub fn total(&self) -> u64 {
        self.input + self.output
    }
}
