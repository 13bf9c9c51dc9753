use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Capture date from the image's EXIF block, preferring DateTimeOriginal.
/// Images without EXIF (or PNGs in general) simply yield an error the
/// scanner turns into `None`.
pub fn extract_capture_date(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    let mut bufreader = BufReader::new(file);
    let exif = exif::Reader::new().read_from_container(&mut bufreader)?;

    for tag in [exif::Tag::DateTimeOriginal, exif::Tag::DateTime] {
        if let Some(field) = exif.get_field(tag, exif::In::PRIMARY) {
            return Ok(field.display_value().to_string());
        }
    }

    Err("no capture date in EXIF".into())
}
