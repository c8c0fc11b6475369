use crate::data::feature_polygon;
use crate::normalize::JsonObject;
use geo::algorithm::bounding_rect::BoundingRect;
use geo::algorithm::contains::Contains;
use geo::{MultiPolygon, Point};
use geojson::FeatureCollection;
use rstar::{RTree, RTreeObject, AABB};
use tracing::info;

// Wrapper for RTree indexing
struct BoundaryEnvelope {
    index: usize,
    aabb: AABB<[f64; 2]>,
}

impl RTreeObject for BoundaryEnvelope {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        self.aabb
    }
}

pub struct Boundary {
    pub geometry: MultiPolygon<f64>,
    pub properties: JsonObject,
}

/// Finds the boundary polygon under a coordinate.
pub struct AreaLocator {
    boundaries: Vec<Boundary>,
    tree: RTree<BoundaryEnvelope>,
}

impl AreaLocator {
    pub fn new(collection: &FeatureCollection) -> Self {
        let boundaries: Vec<Boundary> = collection
            .features
            .iter()
            .filter_map(|feature| {
                Some(Boundary {
                    geometry: feature_polygon(feature)?,
                    properties: feature.properties.clone().unwrap_or_default(),
                })
            })
            .collect();

        let envelopes: Vec<BoundaryEnvelope> = boundaries
            .iter()
            .enumerate()
            .filter_map(|(index, boundary)| {
                let rect = boundary.geometry.bounding_rect()?;
                Some(BoundaryEnvelope {
                    index,
                    aabb: AABB::from_corners([rect.min().x, rect.min().y], [rect.max().x, rect.max().y]),
                })
            })
            .collect();

        info!("Built spatial index over {} boundaries", envelopes.len());
        Self {
            boundaries,
            tree: RTree::bulk_load(envelopes),
        }
    }

    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    pub fn locate(&self, lat: f64, lon: f64) -> Option<&Boundary> {
        let point = Point::new(lon, lat);
        let envelope = AABB::from_point([lon, lat]);

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .filter_map(|candidate| self.boundaries.get(candidate.index))
            .find(|boundary| boundary.geometry.contains(&point))
    }
}
