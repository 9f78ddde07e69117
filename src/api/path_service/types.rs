use anyhow::anyhow;
use serde::{Deserialize, Serialize};

use crate::api::{Coord, LonLat};

/// What the backend answers with when the two points are not connected.
pub const NO_PATH_FOUND: &str = "ERROR NO PATH FOUND";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetPathRequest {
    pub start: Coord,
    pub end: Coord,
}

impl GetPathRequest {
    pub fn new(start: LonLat, end: LonLat) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct PathCollection {
    pub features: Vec<Geometry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    /// Coordinates are `[lat, lon]`, as stored in the graph.
    LineString { coordinates: Vec<[f64; 2]> },
}

impl PathCollection {
    /// `None` when the backend reported that no path exists.
    pub fn from_value(value: serde_json::Value) -> anyhow::Result<Option<Self>> {
        if value.as_str() == Some(NO_PATH_FOUND) {
            return Ok(None);
        }

        if value["type"] != "FeatureCollection" {
            return Err(anyhow!("unexpected path response: {value}"));
        }

        let collection = serde_json::from_value(value)
            .map_err(|e| anyhow!("malformed path collection: {e}"))?;

        Ok(Some(collection))
    }

    pub fn points(&self) -> Vec<Coord> {
        self.features
            .iter()
            .flat_map(|Geometry::LineString { coordinates }| coordinates)
            .map(|&[lat, lon]| Coord { lat, lon })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub status: u16,
    pub message: String,
}
