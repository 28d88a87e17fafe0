//! Sequential scan of an `APT.txt` file.
//!
//! Runway rows carry no reference to their airport; they belong to whichever
//! airport row precedes them. A scan therefore keeps a single "current
//! airport" slot, local to that scan.

use crate::decoder::{classify_and_decode, Line};
use crate::error::Result;
use crate::txt_data::{open_file, RawLines};
use crate::types::AirportRecord;
use log::{debug, trace};
use std::cell::RefCell;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::rc::Rc;

/// An airport handed out while its runway rows are still being read.
pub type SharedAirport = Rc<RefCell<AirportRecord>>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub airports: usize,
    pub runways: usize,
    /// Runway rows seen before any airport row.
    pub orphan_runways: usize,
    /// Airport rows the decoder could not turn into a record.
    pub rejected: usize,
    pub ignored: usize,
}

#[derive(Debug)]
pub struct Scanner<R> {
    reader: R,
}

impl Scanner<BufReader<File>> {
    /// Opens `path` for scanning. A missing file is reported here, before
    /// anything is read.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = open_file(path)?;
        Ok(Scanner::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> Scanner<R> {
    pub fn from_reader(reader: R) -> Self {
        Scanner { reader }
    }

    /// Calls `on_airport` as soon as each airport row is decoded.
    ///
    /// The callback receives the same record that the following runway rows
    /// are appended to, so its runway list is only complete once the scan
    /// has returned. Use [`Scanner::airports`] to receive finished records.
    pub fn for_each<F>(self, mut on_airport: F) -> Result<ScanStats>
    where
        F: FnMut(SharedAirport),
    {
        let mut stats = ScanStats::default();
        let mut current: Option<SharedAirport> = None;

        for line in RawLines::new(self.reader) {
            match classify_and_decode(&line?) {
                Line::Airport(airport) => {
                    stats.airports += 1;
                    let airport = Rc::new(RefCell::new(airport));
                    current = Some(Rc::clone(&airport));
                    on_airport(airport);
                }
                Line::Runway(runway) => match &current {
                    Some(airport) => {
                        stats.runways += 1;
                        airport.borrow_mut().add_runway(runway);
                    }
                    None => {
                        stats.orphan_runways += 1;
                        debug!("Dropping runway {} with no airport", runway.identifier());
                    }
                },
                Line::Rejected => {
                    stats.rejected += 1;
                    current = None;
                }
                Line::Ignore => {
                    stats.ignored += 1;
                    trace!("Ignoring line");
                }
            }
        }

        debug!("Scan finished: {:?}", stats);
        Ok(stats)
    }

    /// Iterates over airports with their runway lists complete.
    ///
    /// An airport is yielded once the next airport row or the end of input is
    /// reached. Dropping the iterator early releases the reader.
    pub fn airports(self) -> Airports<R> {
        Airports {
            lines: RawLines::new(self.reader),
            pending: None,
            done: false,
        }
    }
}

pub struct Airports<R> {
    lines: RawLines<R>,
    pending: Option<AirportRecord>,
    done: bool,
}

impl<R: BufRead> Iterator for Airports<R> {
    type Item = Result<AirportRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e));
                }
                None => {
                    self.done = true;
                    return self.pending.take().map(Ok);
                }
            };

            match classify_and_decode(&line) {
                Line::Airport(airport) => {
                    if let Some(finished) = self.pending.replace(airport) {
                        return Some(Ok(finished));
                    }
                }
                Line::Runway(runway) => match &mut self.pending {
                    Some(airport) => airport.add_runway(runway),
                    None => debug!("Dropping runway {} with no airport", runway.identifier()),
                },
                Line::Rejected => {
                    if let Some(finished) = self.pending.take() {
                        return Some(Ok(finished));
                    }
                }
                Line::Ignore => trace!("Ignoring line"),
            }
        }
    }
}
