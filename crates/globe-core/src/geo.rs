//! Geo feed contract: the engine's only input.
//!
//! The host supplies three collections of entities, each optionally carrying
//! `coordinates: { lat, lng }`. Nothing else is read; entities without valid
//! coordinates are dropped during validation.

use glam::Vec3;
use serde::Deserialize;

use crate::constants::{AGENCY_COLOR, TALENT_COLOR, TEAM_COLOR};

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("feed is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A latitude/longitude pair in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct GeoPoint {
    #[serde(alias = "latitude")]
    pub lat: f32,
    #[serde(alias = "longitude")]
    pub lng: f32,
}

impl GeoPoint {
    pub fn new(lat: f32, lng: f32) -> Self {
        Self { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// Point on the unit sphere (y up, lat 90 at the north pole).
    pub fn to_unit_vector(&self) -> Vec3 {
        let lat = self.lat.to_radians();
        let lng = self.lng.to_radians();
        Vec3::new(lat.cos() * lng.cos(), lat.sin(), lat.cos() * lng.sin())
    }
}

/// One feed entity; every field except `coordinates` is ignored.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct FeedEntity {
    #[serde(default)]
    pub coordinates: Option<GeoPoint>,
}

/// The three unordered destination collections supplied by the host.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GeoFeed {
    #[serde(default)]
    pub talent: Vec<FeedEntity>,
    #[serde(default)]
    pub team: Vec<FeedEntity>,
    #[serde(default)]
    pub agency: Vec<FeedEntity>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DestinationKind {
    Talent,
    Team,
    Agency,
}

impl DestinationKind {
    pub fn color(self) -> [f32; 3] {
        match self {
            DestinationKind::Talent => TALENT_COLOR,
            DestinationKind::Team => TEAM_COLOR,
            DestinationKind::Agency => AGENCY_COLOR,
        }
    }
}

/// A feed entity that survived validation.
#[derive(Clone, Copy, Debug)]
pub struct Destination {
    pub location: GeoPoint,
    pub kind: DestinationKind,
}

impl GeoFeed {
    pub fn from_json(json: &str) -> Result<Self, FeedError> {
        Ok(serde_json::from_str(json)?)
    }

    /// All entities with valid coordinates, tagged by collection.
    pub fn destinations(&self) -> Vec<Destination> {
        let tagged = [
            (DestinationKind::Talent, &self.talent),
            (DestinationKind::Team, &self.team),
            (DestinationKind::Agency, &self.agency),
        ];
        let mut out = Vec::new();
        for (kind, entities) in tagged {
            out.extend(entities.iter().filter_map(|e| {
                let location = e.coordinates.filter(GeoPoint::is_valid)?;
                Some(Destination { location, kind })
            }));
        }
        out
    }
}
