//! Turns an unpacked edge stream into a geometric/textual route description.

use tracing::debug;

use crate::coordinate::FixedPointCoordinate;
use crate::path_data::{PathData, SegmentInformation};
use crate::phantom::PhantomNode;
use crate::polyline;
use crate::types::{Weight, TURN_ARRIVE, TURN_DEPART};

/// Either a Google-polyline-encoded string or the raw coordinate list it
/// would have encoded, depending on what the caller asked for.
pub enum PolylineOutput {
    Encoded(String),
    Raw(Vec<FixedPointCoordinate>),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RouteSummary {
    pub start_name: u32,
    pub dest_name: u32,
    pub length_meters: u32,
    pub duration_seconds: u32,
}

impl RouteSummary {
    pub fn formatted_distance(&self) -> String {
        if self.length_meters >= 1000 {
            format!("{:.1} km", self.length_meters as f64 / 1000.0)
        } else {
            format!("{} m", self.length_meters)
        }
    }

    pub fn formatted_duration(&self) -> String {
        let minutes = self.duration_seconds / 60;
        let hours = minutes / 60;
        let minutes = minutes % 60;
        if hours > 0 {
            format!("{hours}h {minutes}min")
        } else {
            format!("{minutes} min")
        }
    }
}

/// Accumulates [`SegmentInformation`] records for one response and emits the
/// geometry/summary the caller serializes.
#[derive(Debug, Default)]
pub struct DescriptionFactory {
    segments: Vec<SegmentInformation>,
    start_phantom: Option<PhantomNode>,
    target_phantom: Option<PhantomNode>,
}

impl DescriptionFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[SegmentInformation] {
        &self.segments
    }

    /// Record the start and anchor a zero-distance "depart" segment at its
    /// coordinate.
    pub fn set_start_segment(&mut self, start_phantom: &PhantomNode) {
        self.start_phantom = Some(*start_phantom);
        self.segments.push(SegmentInformation {
            location: start_phantom.location,
            name_id: start_phantom.name_id,
            duration: 0,
            weight: start_phantom.weight1,
            turn_instruction: TURN_DEPART,
            necessary: true,
        });
    }

    /// Append one unpacked edge's worth of description at `location`.
    ///
    /// If the description currently holds exactly one entry and it sits at
    /// the same coordinate, that entry is patched in place with the new
    /// street name instead of appended — this is what keeps a leg junction
    /// that lands exactly on the previous leg's end from producing a
    /// duplicate zero-length hop.
    pub fn append_segment(&mut self, location: FixedPointCoordinate, path_data: &PathData) {
        if self.segments.len() == 1 && self.segments[0].location == location {
            self.segments[0].name_id = path_data.name_id;
            return;
        }

        self.segments.push(SegmentInformation {
            location,
            name_id: path_data.name_id,
            duration: path_data.duration,
            weight: path_data.weight,
            turn_instruction: path_data.turn_instruction,
            necessary: true,
        });
    }

    /// Append the final, necessary "arrive" segment.
    pub fn set_end_segment(&mut self, target_phantom: &PhantomNode) {
        self.target_phantom = Some(*target_phantom);
        self.segments.push(SegmentInformation {
            location: target_phantom.location,
            name_id: target_phantom.name_id,
            duration: 0,
            weight: 0,
            turn_instruction: TURN_ARRIVE,
            necessary: true,
        });
    }

    pub fn build_route_summary(&self, distance: Weight, time: Weight) -> RouteSummary {
        let summary = RouteSummary {
            start_name: self.start_phantom.map(|p| p.name_id).unwrap_or(0),
            dest_name: self.target_phantom.map(|p| p.name_id).unwrap_or(0),
            length_meters: distance.max(0) as u32,
            duration_seconds: time.max(0) as u32,
        };
        debug!(distance = summary.length_meters, duration = summary.duration_seconds, "route summary built");
        summary
    }

    pub fn append_encoded_polyline_string(&self, encoded: bool) -> PolylineOutput {
        let coordinates: Vec<_> = self.segments.iter().map(|segment| segment.location).collect();
        if encoded {
            PolylineOutput::Encoded(polyline::encode(&coordinates))
        } else {
            PolylineOutput::Raw(polyline::raw_coordinates(&coordinates))
        }
    }

    /// Initial great-circle bearing from segment `index` to the next one.
    pub fn bearing_at(&self, index: usize) -> Option<f64> {
        let a = self.segments.get(index)?;
        let b = self.segments.get(index + 1)?;
        Some(a.location.bearing_to(&b.location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phantom_at(location: FixedPointCoordinate, name_id: u32) -> PhantomNode {
        PhantomNode {
            edge_based_node: 0,
            is_bidirected: false,
            weight1: 0,
            weight2: 0,
            name_id,
            location,
        }
    }

    #[test]
    fn start_then_end_at_same_location_yields_two_segments() {
        let location = FixedPointCoordinate::new(0, 0);
        let mut factory = DescriptionFactory::new();
        factory.set_start_segment(&phantom_at(location, 1));
        factory.set_end_segment(&phantom_at(location, 1));

        assert_eq!(factory.segments().len(), 2);
        assert_eq!(factory.segments()[0].location, factory.segments()[1].location);
    }

    #[test]
    fn append_segment_patches_single_entry_at_same_coordinate() {
        let location = FixedPointCoordinate::new(0, 0);
        let mut factory = DescriptionFactory::new();
        factory.set_start_segment(&phantom_at(location, 1));

        factory.append_segment(
            location,
            &PathData {
                node: 0,
                name_id: 42,
                duration: 0,
                weight: 0,
                turn_instruction: 0,
            },
        );

        assert_eq!(factory.segments().len(), 1);
        assert_eq!(factory.segments()[0].name_id, 42);
    }

    #[test]
    fn append_segment_at_new_coordinate_pushes_a_new_entry() {
        let mut factory = DescriptionFactory::new();
        factory.set_start_segment(&phantom_at(FixedPointCoordinate::new(0, 0), 1));

        factory.append_segment(
            FixedPointCoordinate::new(10, 10),
            &PathData {
                node: 1,
                name_id: 2,
                duration: 5,
                weight: 5,
                turn_instruction: 0,
            },
        );

        assert_eq!(factory.segments().len(), 2);
    }

    #[test]
    fn bearing_between_segments_is_in_range() {
        let mut factory = DescriptionFactory::new();
        factory.set_start_segment(&phantom_at(FixedPointCoordinate::from_degrees(0.0, 0.0), 1));
        factory.set_end_segment(&phantom_at(FixedPointCoordinate::from_degrees(0.0, 1.0), 1));

        let bearing = factory.bearing_at(0).unwrap();
        assert!((bearing - 90.0).abs() < 1e-6);
    }

    #[test]
    fn route_summary_takes_names_from_phantoms() {
        let mut factory = DescriptionFactory::new();
        factory.set_start_segment(&phantom_at(FixedPointCoordinate::new(0, 0), 7));
        factory.set_end_segment(&phantom_at(FixedPointCoordinate::new(1, 1), 9));

        let summary = factory.build_route_summary(1500, 90);
        assert_eq!(summary.start_name, 7);
        assert_eq!(summary.dest_name, 9);
        assert_eq!(summary.formatted_distance(), "1.5 km");
        assert_eq!(summary.formatted_duration(), "1 min");
    }
}
