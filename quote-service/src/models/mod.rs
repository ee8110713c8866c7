//! Transient value types, each scoped to a single request.

use serde::{Deserialize, Serialize};

/// A short text attributed to an author. Built by parsing model output or
/// by reading request input; never stored or mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub quote: String,
    pub author: String,
}

/// Body of `POST /api/create-image`. Absent fields fall back to the
/// handler's defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateImageRequest {
    pub quote: Option<String>,
    pub author: Option<String>,
}
