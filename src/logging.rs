use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::prelude::*;

/// Initialises tracing.
pub fn init(verbosity: u8) -> Result {
    let filter = EnvFilter::try_from_env("RIDE_SMOKE_LOG")
        .or_else(|_| EnvFilter::try_new(convert_verbosity_to_directives(verbosity)))?;
    let format_layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_writer(std::io::stderr)
        .with_filter(filter);
    tracing_subscriber::registry().with(format_layer).init();
    Ok(())
}

fn convert_verbosity_to_directives(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "ride_smoke=warn",
        1 => "ride_smoke=info",
        2 => "ride_smoke=debug",
        _ => "ride_smoke=trace",
    }
}
