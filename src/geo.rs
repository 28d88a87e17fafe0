use crate::txt_data::float_or_zero;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLon(f64, f64);

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        LatLon(lat, lon)
    }

    //Ex: 40-38-23.7400N 073-46-43.2900W
    pub fn from_apt_txt(lat: &str, lon: &str) -> Self {
        LatLon(dms_to_decimal(lat), dms_to_decimal(lon))
    }

    pub fn lat(self) -> f64 {
        self.0
    }

    pub fn lon(self) -> f64 {
        self.1
    }

    pub fn to_vrc(self) -> String {
        // Rounded to the millisecond first so 59.9996" carries into the minutes
        fn to_dms(dd: f64) -> (u64, u64, f64) {
            let ms = (dd.abs() * 3_600_000.0).round() as u64;
            let d = ms / 3_600_000;
            let m = (ms / 60_000) % 60;
            let s = (ms % 60_000) as f64 / 1000.0;
            (d, m, s)
        }

        let mut tmp = String::new();
        tmp += if self.0.is_sign_positive() { "N" } else { "S" };
        let (d, m, s) = to_dms(self.0);
        tmp += &format!("{:03}.{:02}.{:06.03}", d, m, s);

        tmp += " ";

        tmp += if self.1.is_sign_positive() { "E" } else { "W" };
        let (d, m, s) = to_dms(self.1);
        tmp += &format!("{:03}.{:02}.{:06.03}", d, m, s);
        tmp
    }
}

fn hemisphere(c: char) -> Option<char> {
    match c {
        'N' | 'S' | 'E' | 'W' => Some(c),
        _ => None,
    }
}

/// Converts a `DEG-MIN-SEC` coordinate to signed decimal degrees.
///
/// The hemisphere is normally the last character of the seconds part
/// (`40-30-00.0000N`); a leading letter (`N40-30-00`) is used when the seconds
/// carry none. `S` and `W` make the result negative. Each part contributes its
/// leading numeric prefix and missing or garbled parts count as zero, so this
/// never fails.
///
/// The value is computed as `deg + (min * 60 + sec) / 3600`, which is the
/// usual `deg + min / 60 + sec / 3600` with the minutes folded into seconds.
pub fn dms_to_decimal(dms: &str) -> f64 {
    let dms = dms.trim();
    let leading = dms.chars().next().and_then(hemisphere);
    let body = if leading.is_some() { &dms[1..] } else { dms };

    let mut parts = body.splitn(3, '-');
    let deg = float_or_zero(parts.next().unwrap_or(""));
    let min = float_or_zero(parts.next().unwrap_or(""));
    let sec = parts.next().unwrap_or("");
    let dir = sec.chars().last().and_then(hemisphere).or(leading);
    let sec = float_or_zero(sec);

    let coord = deg + ((min * 60.0) + sec) / 3600.0;

    match dir {
        Some('S') | Some('W') => -coord,
        _ => coord,
    }
}
