#![deny(clippy::all)]
#![forbid(unsafe_code)]

use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::PathBuf;

use apt_parser::txt_data::open_file;
use apt_parser::zip_util::{read_entry, APT_ENTRY};
use apt_parser::{AirportRecord, Scanner};
use itertools::Itertools;
use log::info;
use structopt::StructOpt;

static VRC_SEPERATOR: &str =
    "\n\n;===============================================================================\n\n";

static DEFAULT_CTAF: &str = "122.800";

#[derive(StructOpt)]
struct Args {
    /// APT.txt or a NASR subscription zip containing it
    #[structopt(name = "input", parse(from_os_str))]
    input: PathBuf,
    /// Write to this file instead of stdout
    #[structopt(short = "o", long = "output", parse(from_os_str))]
    output: Option<PathBuf>,
    /// Only keep airports within these ARTCCs
    #[structopt(short = "f", long = "filter")]
    artcc_ids: Vec<String>,
    /// Emit a VRC [AIRPORT] section
    #[structopt(long = "sct")]
    sct: bool,
}

fn summary(a: &AirportRecord) -> String {
    format!(
        "{:4} {:4} {} ({}, {}) {:.4} {:.4} {}ft {} {} rwy: {}\n",
        a.identifier(),
        a.icao(),
        a.name(),
        a.city(),
        a.state(),
        a.latitude(),
        a.longitude(),
        a.elevation(),
        a.ty(),
        a.ownership(),
        a.runways().iter().map(|r| r.identifier()).join(",")
    )
}

fn sct_line(a: &AirportRecord) -> String {
    let ctaf = if a.ctaf().is_empty() {
        DEFAULT_CTAF
    } else {
        a.ctaf()
    };
    let class = if a.has_control_tower() { "D" } else { "E" };
    format!(
        "{:4} {:7} {} {}\n",
        a.identifier(),
        ctaf,
        a.latlon().to_vrc(),
        class
    )
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Args::from_args();

    let is_zip = matches!(args.input.extension(), Some(ext) if ext.eq_ignore_ascii_case("zip"));
    let reader: Box<dyn BufRead> = if is_zip {
        info!("Unpacking {} from NASR archive...", APT_ENTRY);
        Box::new(read_entry(&args.input, APT_ENTRY)?)
    } else {
        Box::new(BufReader::new(open_file(&args.input)?))
    };

    info!("Processing airports...");
    let mut out = String::new();
    if args.sct {
        out += VRC_SEPERATOR;
        out += "[AIRPORT]\n";
    }

    let mut count = 0;
    for a in Scanner::from_reader(reader).airports() {
        let a = a?;
        if !args.artcc_ids.is_empty() && !args.artcc_ids.iter().any(|x| x == a.artcc()) {
            continue;
        }
        count += 1;
        out += &if args.sct { sct_line(&a) } else { summary(&a) };
    }
    info!("Kept {} airports", count);

    match args.output {
        Some(path) => File::create(path)?.write_all(out.as_bytes())?,
        None => std::io::stdout().write_all(out.as_bytes())?,
    }
    Ok(())
}
