use serde::{Deserialize, Serialize};

pub type LocationId = u16;

/// Request payload for the `/predict` endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct Ride {
    #[serde(rename = "PULocationID")]
    pub pickup_location_id: LocationId,

    #[serde(rename = "DOLocationID")]
    pub dropoff_location_id: LocationId,

    pub trip_distance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_ok() -> crate::prelude::Result {
        let ride = Ride {
            pickup_location_id: 10,
            dropoff_location_id: 50,
            trip_distance: 40.0,
        };
        assert_eq!(
            serde_json::to_string(&ride)?,
            // language=JSON
            r#"{"PULocationID":10,"DOLocationID":50,"trip_distance":40.0}"#,
        );
        Ok(())
    }
}
