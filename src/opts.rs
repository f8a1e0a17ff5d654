//! CLI options.

use clap::Parser;

use crate::prelude::*;
use crate::ride::{LocationId, Ride};

/// Sends one test ride to the prediction service and prints the response
#[derive(Parser)]
#[command(version, about)]
pub struct Opts {
    /// Prediction service endpoint
    #[arg(long, env = "PREDICT_URL", default_value = "http://localhost:9696/predict")]
    pub url: String,

    /// Request timeout, blocks indefinitely unless set
    #[arg(long, value_parser = humantime::parse_duration)]
    pub timeout: Option<StdDuration>,

    /// Pickup location ID
    #[arg(long, default_value_t = 10)]
    pub pickup_location_id: LocationId,

    /// Drop-off location ID
    #[arg(long, default_value_t = 50)]
    pub dropoff_location_id: LocationId,

    /// Trip distance in miles
    #[arg(long, default_value_t = 40.0)]
    pub trip_distance: f64,

    /// Increases log verbosity
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

impl Opts {
    pub fn ride(&self) -> Ride {
        Ride {
            pickup_location_id: self.pickup_location_id,
            dropoff_location_id: self.dropoff_location_id,
            trip_distance: self.trip_distance,
        }
    }
}
