pub use std::time::{Duration as StdDuration, Instant};

pub use anyhow::{anyhow, Context};
pub use tracing::{debug, info, instrument};

pub type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;
