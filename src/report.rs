//! File-size reporting: raw and gzip-compressed byte counts, formatted as
//! human-readable decimal (1000-based) units.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;

use crate::error::MinifyError;

const UNITS: [&str; 9] = ["B", "kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Raw and gzip sizes of one file, already formatted.
pub struct SizeReport {
    pub raw: String,
    pub gzip: String,
}

pub fn size_report(path: &Path) -> Result<SizeReport, MinifyError> {
    Ok(SizeReport {
        raw: raw_size(path)?,
        gzip: gzip_size(path)?,
    })
}

/// On-disk size of the file. Fails if the file does not exist.
pub fn raw_size(path: &Path) -> Result<String, MinifyError> {
    let len = std::fs::metadata(path)?.len();
    pretty_bytes(len as f64)
}

/// Size of the file after a gzip pass at the default compression level.
/// The content is streamed through the encoder into a counting sink, so
/// nothing is buffered beyond the encoder's own window.
pub fn gzip_size(path: &Path) -> Result<String, MinifyError> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut encoder = GzEncoder::new(CountingSink::default(), Compression::default());
    io::copy(&mut reader, &mut encoder)?;
    let sink = encoder.finish()?;
    pretty_bytes(sink.bytes as f64)
}

/// Write sink that only counts.
#[derive(Default)]
struct CountingSink {
    bytes: u64,
}

impl Write for CountingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes += buf.len() as u64;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Format a byte count with 1000-based units and 3 significant digits.
///
/// Values with magnitude below one byte are printed as-is with a `B` unit
/// (so fractional byte counts come out fractional). That quirk is kept on
/// purpose; callers feed this averages as well as file sizes.
pub fn pretty_bytes(num: f64) -> Result<String, MinifyError> {
    if !num.is_finite() {
        return Err(MinifyError::NonFiniteSize(num));
    }

    let neg = if num < 0.0 { "-" } else { "" };
    let num = num.abs();

    if num < 1.0 {
        return Ok(format!("{neg}{num} B"));
    }

    // Equivalent to min(floor(log1000(num)), 8), but exact at the unit
    // boundaries where log10 can land a hair under the integer.
    let mut exponent = 0;
    let mut scaled = num;
    while scaled >= 1000.0 && exponent < UNITS.len() - 1 {
        scaled /= 1000.0;
        exponent += 1;
    }
    let scaled = round_significant(scaled, 3);

    Ok(format!("{neg}{scaled} {}", UNITS[exponent]))
}

/// Round to `sig` significant digits. Trailing zeros disappear when the
/// result is formatted through `Display`. Powers of ten are kept as exact
/// integer factors so no 0.1-style factor pollutes the result.
fn round_significant(x: f64, sig: i32) -> f64 {
    let digits = sig - 1 - x.log10().floor() as i32;
    if digits <= 0 {
        let factor = 10f64.powi(-digits);
        (x / factor).round() * factor
    } else {
        let factor = 10f64.powi(digits);
        (x * factor).round() / factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use std::path::PathBuf;

    fn fixture() -> PathBuf {
        PathBuf::from(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/tests/fixtures/sample.js"
        ))
    }

    // ── pretty_bytes ──

    #[test]
    fn test_zero() {
        assert_eq!(pretty_bytes(0.0).unwrap(), "0 B");
    }

    #[test]
    fn test_negative_one() {
        assert_eq!(pretty_bytes(-1.0).unwrap(), "-1 B");
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(pretty_bytes(f64::NAN).is_err());
        assert!(pretty_bytes(f64::INFINITY).is_err());
        assert!(pretty_bytes(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_non_finite_message() {
        let err = pretty_bytes(f64::INFINITY).unwrap_err();
        assert!(err.to_string().contains("Expected a finite number"));
    }

    #[test]
    fn test_sub_one_byte_passthrough() {
        assert_eq!(pretty_bytes(0.4).unwrap(), "0.4 B");
        assert_eq!(pretty_bytes(-0.4).unwrap(), "-0.4 B");
    }

    #[test]
    fn test_unit_steps() {
        assert_eq!(pretty_bytes(1.0).unwrap(), "1 B");
        assert_eq!(pretty_bytes(999.0).unwrap(), "999 B");
        assert_eq!(pretty_bytes(1000.0).unwrap(), "1 kB");
        assert_eq!(pretty_bytes(1_000_000.0).unwrap(), "1 MB");
        assert_eq!(pretty_bytes(1e9).unwrap(), "1 GB");
        assert_eq!(pretty_bytes(1e12).unwrap(), "1 TB");
        assert_eq!(pretty_bytes(1.2e24).unwrap(), "1.2 YB");
    }

    #[test]
    fn test_three_significant_digits() {
        assert_eq!(pretty_bytes(1234.0).unwrap(), "1.23 kB");
        assert_eq!(pretty_bytes(1500.0).unwrap(), "1.5 kB");
        assert_eq!(pretty_bytes(123_456.0).unwrap(), "123 kB");
        assert_eq!(pretty_bytes(12_345_678.0).unwrap(), "12.3 MB");
    }

    #[test]
    fn test_rounding_can_reach_next_magnitude() {
        // 999 949 scales to 999.949 kB, which rounds to 1000 kB rather
        // than bumping the unit (matches the 3-significant-digit rule).
        assert_eq!(pretty_bytes(999_949.0).unwrap(), "1000 kB");
    }

    #[test]
    fn test_beyond_last_unit_stays_in_yb() {
        assert_eq!(pretty_bytes(1.2e27).unwrap(), "1200 YB");
    }

    // ── raw_size / gzip_size ──

    #[test]
    fn test_raw_size_of_fixture() {
        assert_eq!(raw_size(&fixture()).unwrap(), "542 B");
    }

    #[test]
    fn test_raw_size_missing_file() {
        let err = raw_size(Path::new("no/such/file.js")).unwrap_err();
        assert!(matches!(err, MinifyError::Io(_)));
    }

    #[test]
    fn test_gzip_size_matches_full_encode() {
        let mut content = Vec::new();
        File::open(fixture())
            .unwrap()
            .read_to_end(&mut content)
            .unwrap();
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&content).unwrap();
        let encoded = encoder.finish().unwrap();

        let expected = pretty_bytes(encoded.len() as f64).unwrap();
        assert_eq!(gzip_size(&fixture()).unwrap(), expected);
    }

    #[test]
    fn test_gzip_size_missing_file() {
        assert!(gzip_size(Path::new("no/such/file.js")).is_err());
    }

    #[test]
    fn test_size_report_combines_both() {
        let report = size_report(&fixture()).unwrap();
        assert_eq!(report.raw, "542 B");
        assert!(report.gzip.ends_with(" B"));
    }
}
