use anyhow::anyhow;
use serde::{Deserialize, Serialize};

pub mod path_service;

/// `[longitude, latitude]`, the order map widgets hand coordinates around in.
pub type LonLat = [f64; 2];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

impl From<LonLat> for Coord {
    fn from([lon, lat]: LonLat) -> Self {
        Self { lat, lon }
    }
}

/// Parses `"lon,lat"`.
pub fn parse_lon_lat(s: &str) -> anyhow::Result<LonLat> {
    let (lon, lat) = s
        .split_once(',')
        .ok_or_else(|| anyhow!("{s} is not a coordinate pair, expected LON,LAT"))?;

    let lon: f64 = lon
        .trim()
        .parse()
        .map_err(|e| anyhow!("invalid longitude {lon:?}: {e}"))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|e| anyhow!("invalid latitude {lat:?}: {e}"))?;

    Ok([lon, lat])
}
