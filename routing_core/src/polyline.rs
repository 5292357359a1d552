//! Google polyline encoding.
//!
//! No crate in the corpus this workspace is descended from speaks this
//! format (it ships its own `polyline_compressor` collaborator instead), so
//! it's implemented directly: delta-encode at `POLYLINE_PRECISION`,
//! zig-zag, then base-64-ish chunk every value into 5-bit groups with a
//! continuation bit, exactly as the format is specified.

use crate::constants::POLYLINE_PRECISION;
use crate::coordinate::FixedPointCoordinate;

/// Encode a coordinate sequence as a Google polyline string.
pub fn encode(coordinates: &[FixedPointCoordinate]) -> String {
    let mut output = String::new();
    let mut prev_lat = 0i64;
    let mut prev_lon = 0i64;

    for coordinate in coordinates {
        let lat = (coordinate.lat_degrees() * POLYLINE_PRECISION).round() as i64;
        let lon = (coordinate.lon_degrees() * POLYLINE_PRECISION).round() as i64;

        encode_value(lat - prev_lat, &mut output);
        encode_value(lon - prev_lon, &mut output);

        prev_lat = lat;
        prev_lon = lon;
    }

    output
}

fn encode_value(value: i64, output: &mut String) {
    let mut shifted = value << 1;
    if value < 0 {
        shifted = !shifted;
    }

    while shifted >= 0x20 {
        let chunk = ((shifted & 0x1f) | 0x20) as u8 + 63;
        output.push(chunk as char);
        shifted >>= 5;
    }
    output.push((shifted as u8 + 63) as char);
}

/// Decode a Google polyline string back into coordinates. Used only to test
/// that [`encode`] round-trips.
pub fn decode(polyline: &str) -> Vec<FixedPointCoordinate> {
    let bytes = polyline.as_bytes();
    let mut index = 0;
    let mut lat = 0i64;
    let mut lon = 0i64;
    let mut coordinates = Vec::new();

    while index < bytes.len() {
        lat += decode_value(bytes, &mut index);
        lon += decode_value(bytes, &mut index);

        coordinates.push(FixedPointCoordinate::from_degrees(
            lat as f64 / POLYLINE_PRECISION,
            lon as f64 / POLYLINE_PRECISION,
        ));
    }

    coordinates
}

fn decode_value(bytes: &[u8], index: &mut usize) -> i64 {
    let mut result: i64 = 0;
    let mut shift = 0;

    loop {
        let byte = bytes[*index] as i64 - 63;
        *index += 1;
        result |= (byte & 0x1f) << shift;
        shift += 5;
        if byte < 0x20 {
            break;
        }
    }

    if result & 1 != 0 {
        !(result >> 1)
    } else {
        result >> 1
    }
}

/// Unencoded fallback: a raw coordinate list, for callers that asked for
/// `encoded = false`.
pub fn raw_coordinates(coordinates: &[FixedPointCoordinate]) -> Vec<FixedPointCoordinate> {
    coordinates.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_within_rounding_tolerance() {
        let original = vec![
            FixedPointCoordinate::from_degrees(38.5, -120.2),
            FixedPointCoordinate::from_degrees(40.7, -120.95),
            FixedPointCoordinate::from_degrees(43.252, -126.453),
        ];

        let encoded = encode(&original);
        let decoded = decode(&encoded);

        assert_eq!(decoded.len(), original.len());
        for (a, b) in original.iter().zip(decoded.iter()) {
            assert!((a.lat_degrees() - b.lat_degrees()).abs() < 1e-5);
            assert!((a.lon_degrees() - b.lon_degrees()).abs() < 1e-5);
        }
    }

    #[test]
    fn known_vector_matches_reference_encoding() {
        // from Google's own polyline algorithm documentation
        let coordinates = vec![
            FixedPointCoordinate::from_degrees(38.5, -120.2),
            FixedPointCoordinate::from_degrees(40.7, -120.95),
            FixedPointCoordinate::from_degrees(43.252, -126.453),
        ];
        assert_eq!(encode(&coordinates), "_p~iF~ps|U_ulLnnqC_mqNvxq`@");
    }

    #[test]
    fn empty_input_encodes_to_empty_string() {
        assert_eq!(encode(&[]), "");
    }
}
