use crate::error::Result;
use crate::txt_data::open_file;
use std::io::prelude::*;
use std::io::{BufReader, Cursor};
use std::path::Path;
use zip::read::ZipArchive;

pub type PseudoFile = Cursor<Vec<u8>>;

/// Name of the airport file inside a NASR subscription archive.
pub const APT_ENTRY: &str = "APT.txt";

/// Reads entry `name` of the zip archive at `archive` into memory.
pub fn read_entry<P: AsRef<Path>>(archive: P, name: &str) -> Result<PseudoFile> {
    let mut archive = ZipArchive::new(BufReader::new(open_file(archive)?))?;
    read_archive_entry(&mut archive, name)
}

pub fn read_archive_entry<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
) -> Result<PseudoFile> {
    let mut entry = archive.by_name(name)?;
    let mut tmp = Cursor::new(Vec::with_capacity(entry.size() as usize));
    entry.read_to_end(tmp.get_mut())?;
    Ok(tmp)
}
