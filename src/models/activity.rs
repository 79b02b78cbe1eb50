use serde::{Deserialize, Serialize};

/// A user-controlled accumulation window (e.g. one walk or run segment).
///
/// Sessions are day-agnostic: they keep counting across midnight and keep
/// their total while toggled off. Id allocation belongs to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySession {
    pub id: u32,
    pub steps: u64,
    pub active: bool,
}

impl ActivitySession {
    /// New sessions start active with an empty total.
    pub fn new(id: u32) -> Self {
        Self {
            id,
            steps: 0,
            active: true,
        }
    }
}
