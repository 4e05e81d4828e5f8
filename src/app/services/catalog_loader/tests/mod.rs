//! Tests for the catalog loader


use std::io::Write;
use tempfile::NamedTempFile;

/// Verbatim ExoFOP header line covering every required column plus stellar mass
pub const EXOFOP_HEADER: &str = "TOI,TIC ID,TESS Disposition,TESS Mag,RA,Dec,Epoch (BJD),Period (days),Duration (hours),Depth (ppm),Stellar Eff Temp (K),Stellar log(g) (cm/s^2),Stellar Radius (R_Sun),Stellar Mass (M_Sun),Comments";

/// A complete, valid data row matching [`EXOFOP_HEADER`]
pub const VALID_ROW: &str =
    "1000.01,261136679,PC,12.9,123.45,-45.6,2459000.5,4.2,2.1,3200,3300,4.8,0.35,0.33,looks clean";

/// Write catalog content to a temp CSV file
pub fn write_temp_catalog(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("failed to write temp catalog");
    file.flush().expect("failed to flush temp catalog");
    file
}
