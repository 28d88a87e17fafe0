use custom_error::custom_error;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

custom_error! {pub Error
    Io{source: std::io::Error} = "I/O error",
    FileNotFound{path: PathBuf} = @{ format!("File not found: {}", path.display()) },
    Zip{source: zip::result::ZipError} = "ZIP archive error",
    InvalidRecord{reason: String} = "Invalid record: {reason}"
}
