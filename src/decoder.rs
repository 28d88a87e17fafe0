//! Line classification and field decoding for `APT.txt`.

use crate::error::{Error, Result};
use crate::geo::LatLon;
use crate::txt_data::{float_or_zero, int_or_zero, Span};
use crate::types::*;
use log::warn;

// Airport row
const APT_TYPE: Span = Span::at(14, 13);
const APT_IDENT: Span = Span::at(27, 4);
const APT_REGION: Span = Span::at(41, 3);
const APT_STATE: Span = Span::at(50, 20);
const APT_COUNTY: Span = Span::at(70, 21);
const APT_CITY: Span = Span::at(93, 40);
const APT_NAME: Span = Span::at(133, 50);
const APT_OWNERSHIP: Span = Span::at(183, 2);
const APT_LAT: Span = Span::at(523, 14);
const APT_LON: Span = Span::at(550, 15);
const APT_ELEVATION: Span = Span::at(578, 7);
const APT_ARTCC: Span = Span::at(637, 4);
const APT_TOWER: Span = Span::at(980, 1);
const APT_CTAF: Span = Span::at(988, 7);
const APT_ICAO: Span = Span::at(1210, 4);

// Runway row
const RWY_PREFIX: &[u8] = b"RWY";
const RWY_IDENT: Span = Span::at(16, 7);
const RWY_LENGTH: Span = Span::at(23, 5);
const RWY_WIDTH: Span = Span::at(28, 4);
const RWY_MARKINGS: Span = Span::at(304, 5);

/// A decoded physical line.
#[derive(Clone, Debug, PartialEq)]
pub enum Line {
    Airport(AirportRecord),
    /// Belongs to the airport decoded most recently.
    Runway(RunwayRecord),
    /// An airport row that could not be built. Runway rows after it have no
    /// airport to attach to.
    Rejected,
    Ignore,
}

pub fn classify_and_decode<L: AsRef<[u8]> + ?Sized>(line: &L) -> Line {
    let line = line.as_ref();
    if let Some(ty) = AirportType::from_txt(&APT_TYPE.extract(line)) {
        match decode_airport(line, ty) {
            Ok(airport) => Line::Airport(airport),
            Err(e) => {
                warn!("Skipping {} row: {}", ty, e);
                Line::Rejected
            }
        }
    } else if line.starts_with(RWY_PREFIX) {
        Line::Runway(decode_runway(line))
    } else {
        Line::Ignore
    }
}

fn decode_airport(line: &[u8], ty: AirportType) -> Result<AirportRecord> {
    AirportRecordBuilder::default()
        .icao(APT_ICAO.extract(line))
        .identifier(APT_IDENT.extract(line))
        .name(APT_NAME.extract(line))
        .city(APT_CITY.extract(line))
        .county(APT_COUNTY.extract(line))
        .state(APT_STATE.extract(line))
        .latlon(LatLon::from_apt_txt(
            &APT_LAT.extract(line),
            &APT_LON.extract(line),
        ))
        .elevation(float_or_zero(&APT_ELEVATION.extract(line)))
        .ty(ty)
        .region_code(APT_REGION.extract(line))
        .ownership(Ownership::from_code(&APT_OWNERSHIP.extract(line)))
        .artcc(APT_ARTCC.extract(line))
        .has_control_tower(APT_TOWER.extract(line) == "Y")
        .ctaf(APT_CTAF.extract(line))
        .build()
        .map_err(|e| Error::InvalidRecord {
            reason: e.to_string(),
        })
}

fn decode_runway(line: &[u8]) -> RunwayRecord {
    RunwayRecord::new(
        RWY_IDENT.extract(line),
        int_or_zero(&RWY_LENGTH.extract(line)),
        int_or_zero(&RWY_WIDTH.extract(line)),
        RWY_MARKINGS.extract(line),
    )
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Lays `fields` out at their byte offsets on a space padded line.
    pub(crate) fn fixed_line(fields: &[(usize, &str)]) -> String {
        let len = fields.iter().map(|(at, s)| at + s.len()).max().unwrap_or(0);
        let mut line = vec![b' '; len];
        for (at, s) in fields {
            line[*at..*at + s.len()].copy_from_slice(s.as_bytes());
        }
        String::from_utf8(line).unwrap()
    }

    pub(crate) fn airport_line(ident: &str) -> String {
        fixed_line(&[
            (0, "APT"),
            (3, "03488.*A"),
            (14, "AIRPORT"),
            (27, ident),
            (41, "ASW"),
            (48, "TX"),
            (50, "TEXAS"),
            (70, "HARRIS"),
            (91, "TX"),
            (93, "HOUSTON"),
            (133, "GEORGE BUSH INTERCONTINENTAL/HOUSTON"),
            (183, "PU"),
            (523, "29-59-04.2000N"),
            (550, "095-20-28.8000W"),
            (578, "  97.4"),
            (637, "ZHU"),
            (980, "Y"),
            (988, "118.1"),
            (1210, "KIAH"),
        ])
    }

    pub(crate) fn runway_line(id: &str, length: &str, width: &str) -> String {
        fixed_line(&[
            (0, "RWY"),
            (3, "03488.*A"),
            (14, "TX"),
            (16, id),
            (23, length),
            (28, width),
            (304, "PIR"),
        ])
    }

    #[test]
    fn decodes_airport_fields() {
        let apt = match classify_and_decode(&airport_line("IAH")) {
            Line::Airport(apt) => apt,
            other => panic!("expected airport, got {:?}", other),
        };

        assert_eq!(apt.identifier(), "IAH");
        assert_eq!(apt.icao(), "KIAH");
        assert_eq!(apt.name(), "GEORGE BUSH INTERCONTINENTAL/HOUSTON");
        assert_eq!(apt.city(), "HOUSTON");
        assert_eq!(apt.county(), "HARRIS");
        assert_eq!(apt.state(), "TEXAS");
        assert_eq!(apt.region_code(), "ASW");
        assert_eq!(apt.ty(), AirportType::Airport);
        assert_eq!(apt.ownership(), Ownership::Public);
        assert_eq!(apt.artcc(), "ZHU");
        assert!(apt.has_control_tower());
        assert_eq!(apt.ctaf(), "118.1");
        assert_eq!(apt.elevation(), 97.4);
        assert!((apt.latitude() - 29.9845).abs() < 1e-9);
        assert!((apt.longitude() + 95.3413333333).abs() < 1e-9);
        assert!(apt.runways().is_empty());
    }

    #[test]
    fn recognises_every_facility_type() {
        for (token, ty) in &[
            ("BALLOONPORT", AirportType::Balloonport),
            ("SEAPLANE BASE", AirportType::SeaplaneBase),
            ("GLIDERPORT", AirportType::Gliderport),
            ("HELIPORT", AirportType::Heliport),
            ("ULTRALIGHT", AirportType::Ultralight),
        ] {
            let line = fixed_line(&[(0, "APT"), (14, *token), (27, "XYZ")]);
            match classify_and_decode(&line) {
                Line::Airport(apt) => assert_eq!(apt.ty(), *ty),
                other => panic!("expected airport, got {:?}", other),
            }
        }
    }

    #[test]
    fn tower_flag_must_be_uppercase_y() {
        for (flag, expected) in &[("Y", true), ("N", false), (" ", false), ("y", false)] {
            let line = fixed_line(&[(14, "AIRPORT"), (27, "T1"), (980, *flag)]);
            match classify_and_decode(&line) {
                Line::Airport(apt) => assert_eq!(apt.has_control_tower(), *expected),
                other => panic!("expected airport, got {:?}", other),
            }
        }
    }

    #[test]
    fn unknown_ownership_code() {
        let line = fixed_line(&[(14, "AIRPORT"), (27, "T2"), (183, "XX")]);
        match classify_and_decode(&line) {
            Line::Airport(apt) => assert_eq!(apt.ownership(), Ownership::Unknown),
            other => panic!("expected airport, got {:?}", other),
        }
    }

    #[test]
    fn non_numeric_elevation_is_zero() {
        let line = fixed_line(&[(14, "AIRPORT"), (27, "T3"), (578, "UNKNOWN")]);
        match classify_and_decode(&line) {
            Line::Airport(apt) => assert_eq!(apt.elevation(), 0.0),
            other => panic!("expected airport, got {:?}", other),
        }
    }

    #[test]
    fn short_airport_line_keeps_defaults() {
        let line = fixed_line(&[(14, "HELIPORT"), (27, "0TX1")]);
        match classify_and_decode(&line) {
            Line::Airport(apt) => {
                assert_eq!(apt.identifier(), "0TX1");
                assert_eq!(apt.icao(), "");
                assert_eq!(apt.latitude(), 0.0);
                assert_eq!(apt.longitude(), 0.0);
                assert_eq!(apt.ownership(), Ownership::Unknown);
                assert!(!apt.has_control_tower());
            }
            other => panic!("expected airport, got {:?}", other),
        }
    }

    #[test]
    fn decodes_runway_fields() {
        assert_eq!(
            classify_and_decode(&runway_line("08L/26R", "09000", "150")),
            Line::Runway(RunwayRecord::new("08L/26R", 9000, 150, "PIR"))
        );
    }

    #[test]
    fn non_numeric_runway_dimensions_are_zero() {
        match classify_and_decode(&runway_line("H1", "N/A", "??")) {
            Line::Runway(rwy) => {
                assert_eq!(rwy.length(), 0);
                assert_eq!(rwy.width(), 0);
            }
            other => panic!("expected runway, got {:?}", other),
        }
    }

    #[test]
    fn invalid_utf8_does_not_shift_later_columns() {
        let mut line = airport_line("IAH").into_bytes();
        line[133..183].fill(b' ');
        line[133..143].copy_from_slice(b"CAF\xC9 FIELD");

        match classify_and_decode(&line) {
            Line::Airport(apt) => {
                assert_eq!(apt.name(), "CAF\u{FFFD} FIELD");
                assert_eq!(apt.ownership(), Ownership::Public);
                assert_eq!(apt.artcc(), "ZHU");
                assert_eq!(apt.ctaf(), "118.1");
                assert_eq!(apt.icao(), "KIAH");
                assert_eq!(apt.elevation(), 97.4);
                assert!((apt.latitude() - 29.9845).abs() < 1e-9);
            }
            other => panic!("expected airport, got {:?}", other),
        }
    }

    #[test]
    fn airport_row_without_identifier_is_rejected() {
        let line = fixed_line(&[(0, "APT"), (14, "AIRPORT"), (133, "NAMELESS")]);
        assert_eq!(classify_and_decode(&line), Line::Rejected);
    }

    #[test]
    fn other_lines_are_ignored() {
        assert_eq!(classify_and_decode(""), Line::Ignore);
        assert_eq!(
            classify_and_decode(&fixed_line(&[(0, "ATT"), (14, "SOMETHING")])),
            Line::Ignore
        );
        assert_eq!(
            classify_and_decode(&fixed_line(&[(0, "RMK"), (16, "A110-1")])),
            Line::Ignore
        );
    }
}
