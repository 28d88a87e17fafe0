use crate::geo::LatLon;
use derive_builder::Builder;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AirportType {
    Airport,
    Balloonport,
    SeaplaneBase,
    Gliderport,
    Heliport,
    Ultralight,
}

impl AirportType {
    pub fn from_txt(x: &str) -> Option<Self> {
        match x {
            "AIRPORT" => Some(AirportType::Airport),
            "BALLOONPORT" => Some(AirportType::Balloonport),
            "SEAPLANE BASE" => Some(AirportType::SeaplaneBase),
            "GLIDERPORT" => Some(AirportType::Gliderport),
            "HELIPORT" => Some(AirportType::Heliport),
            "ULTRALIGHT" => Some(AirportType::Ultralight),
            _ => None,
        }
    }
}

impl From<AirportType> for &str {
    fn from(x: AirportType) -> &'static str {
        match x {
            AirportType::Airport => "AIRPORT",
            AirportType::Balloonport => "BALLOONPORT",
            AirportType::SeaplaneBase => "SEAPLANE BASE",
            AirportType::Gliderport => "GLIDERPORT",
            AirportType::Heliport => "HELIPORT",
            AirportType::Ultralight => "ULTRALIGHT",
        }
    }
}

impl fmt::Display for AirportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).into())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Ownership {
    Public,
    Private,
    AirForce,
    Navy,
    Army,
    CoastGuard,
    Unknown,
}

impl Ownership {
    /// Maps the two letter ownership code. Anything unrecognised, including an
    /// empty field, is `Unknown`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "PU" => Ownership::Public,
            "PR" => Ownership::Private,
            "MA" => Ownership::AirForce,
            "MN" => Ownership::Navy,
            "MR" => Ownership::Army,
            "CG" => Ownership::CoastGuard,
            _ => Ownership::Unknown,
        }
    }
}

impl From<Ownership> for &str {
    fn from(x: Ownership) -> &'static str {
        match x {
            Ownership::Public => "PUBLICLY OWNED",
            Ownership::Private => "PRIVATELY OWNED",
            Ownership::AirForce => "AIR FORCE OWNED",
            Ownership::Navy => "NAVY OWNED",
            Ownership::Army => "ARMY OWNED",
            Ownership::CoastGuard => "COAST GUARD OWNED",
            Ownership::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Ownership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).into())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RunwayRecord {
    identifier: String,
    length: u32,
    width: u32,
    markings: String,
}

impl RunwayRecord {
    pub fn new<S: Into<String>>(identifier: S, length: u32, width: u32, markings: S) -> Self {
        RunwayRecord {
            identifier: identifier.into(),
            length,
            width,
            markings: markings.into(),
        }
    }

    /// Runway identifier, e.g. `09/27`.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Length in feet.
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Width in feet.
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn markings(&self) -> &str {
        &self.markings
    }
}

/// One landing facility from `APT.txt`.
///
/// Runways are attached in file order after the record is built, and that is
/// the only change a record goes through.
#[derive(Clone, Debug, PartialEq, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct AirportRecord {
    #[builder(default)]
    icao: String,
    identifier: String,
    #[builder(default)]
    name: String,
    #[builder(default)]
    city: String,
    #[builder(default)]
    county: String,
    #[builder(default)]
    state: String,
    #[builder(default = "LatLon::new(0.0, 0.0)")]
    latlon: LatLon,
    #[builder(default)]
    elevation: f64,
    ty: AirportType,
    #[builder(default)]
    region_code: String,
    #[builder(default = "Ownership::Unknown")]
    ownership: Ownership,
    #[builder(default)]
    artcc: String,
    #[builder(default)]
    has_control_tower: bool,
    #[builder(default)]
    ctaf: String,
    #[builder(setter(skip))]
    runways: Vec<RunwayRecord>,
}

impl AirportRecordBuilder {
    fn validate(&self) -> Result<(), String> {
        match &self.identifier {
            Some(id) if id.trim().is_empty() => Err("airport identifier is blank".to_owned()),
            _ => Ok(()),
        }
    }
}

impl AirportRecord {
    pub fn add_runway(&mut self, runway: RunwayRecord) {
        self.runways.push(runway);
    }

    pub fn runways(&self) -> &[RunwayRecord] {
        &self.runways
    }

    /// ICAO location indicator; empty for most small fields.
    pub fn icao(&self) -> &str {
        &self.icao
    }

    /// FAA location identifier.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn county(&self) -> &str {
        &self.county
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn latlon(&self) -> LatLon {
        self.latlon
    }

    /// Latitude in decimal degrees, negative south of the equator.
    pub fn latitude(&self) -> f64 {
        self.latlon.lat()
    }

    /// Longitude in decimal degrees, negative west of Greenwich.
    pub fn longitude(&self) -> f64 {
        self.latlon.lon()
    }

    /// Field elevation in feet.
    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    pub fn ty(&self) -> AirportType {
        self.ty
    }

    pub fn region_code(&self) -> &str {
        &self.region_code
    }

    pub fn ownership(&self) -> Ownership {
        self.ownership
    }

    /// Code of the ARTCC whose boundary contains the airport.
    pub fn artcc(&self) -> &str {
        &self.artcc
    }

    pub fn has_control_tower(&self) -> bool {
        self.has_control_tower
    }

    pub fn ctaf(&self) -> &str {
        &self.ctaf
    }
}
