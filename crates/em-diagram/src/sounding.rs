//! Upper-air soundings from University of Wyoming `TEXT:LIST` listings.
//!
//! A listing looks like:
//!
//! ```text
//! -----------------------------------------------------------------------------
//!    PRES   HGHT   TEMP   DWPT   RELH   MIXR   DRCT   SKNT   THTA   THTE   THTV
//!     hPa     m      C      C      %    g/kg    deg   knot     K      K      K
//! -----------------------------------------------------------------------------
//!  1000.0    106
//!   997.0    133   26.2   21.2     74  16.15    200      6  299.4  347.0  302.3
//! ```
//!
//! Columns are 7 characters wide. Blank or unparsable cells become `None`.

use crate::{DiagramError, DiagramResult};
use em_thermo::{Curve, CurvePoint, calc_theta_e, calc_theta_es};
use serde::{Deserialize, Serialize};
use std::path::Path;

const COLUMN_WIDTH: usize = 7;
const HEADER_LINES: usize = 4;

/// One observed level. Field names follow the listing columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SoundingLevel {
    /// Pressure [hPa]
    pub pres: Option<f64>,
    /// Geopotential height [m]
    pub hght: Option<f64>,
    /// Temperature [degC]
    pub temp: Option<f64>,
    /// Dewpoint [degC]
    pub dewt: Option<f64>,
    /// Relative humidity [%]
    pub relh: Option<f64>,
    /// Mixing ratio [g/kg]
    pub mixr: Option<f64>,
    /// Wind direction [deg]
    pub drct: Option<f64>,
    /// Wind speed [knot]
    pub sknt: Option<f64>,
    /// Potential temperature [K]
    pub thta: Option<f64>,
    /// Equivalent potential temperature [K]
    pub thte: Option<f64>,
    /// Last listing column (virtual potential temperature) [K]
    pub thtw: Option<f64>,
}

impl SoundingLevel {
    /// Parse one fixed-width data row.
    pub fn parse_row(row: &str) -> Self {
        let cell = |index: usize| -> Option<f64> {
            let start = index * COLUMN_WIDTH;
            let end = (start + COLUMN_WIDTH).min(row.len());
            row.get(start..end)?.trim().parse().ok()
        };

        Self {
            pres: cell(0),
            hght: cell(1),
            temp: cell(2),
            dewt: cell(3),
            relh: cell(4),
            mixr: cell(5),
            drct: cell(6),
            sknt: cell(7),
            thta: cell(8),
            thte: cell(9),
            thtw: cell(10),
        }
    }

    /// Equivalent potential temperature [K] from pressure, temperature and dewpoint.
    pub fn theta_e(&self) -> Option<f64> {
        Some(calc_theta_e(self.pres?, self.temp?, self.dewt?))
    }

    /// Saturation equivalent potential temperature [K].
    pub fn theta_es(&self) -> Option<f64> {
        Some(calc_theta_es(self.pres?, self.temp?))
    }
}

/// A sounding at one station and time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sounding {
    pub station: u32,
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub data: Vec<SoundingLevel>,
}

impl Sounding {
    /// Parse a listing, or the HTML page that wraps it in `<pre>`.
    pub fn parse_listing(
        station: u32,
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        text: &str,
    ) -> DiagramResult<Self> {
        let body = first_pre_block(text).unwrap_or(text).trim();

        let data: Vec<SoundingLevel> = body
            .lines()
            .skip(HEADER_LINES)
            .filter(|row| !row.trim().is_empty())
            .map(SoundingLevel::parse_row)
            .collect();

        if data.is_empty() {
            return Err(DiagramError::EmptySounding);
        }

        let missing_pressure = data.iter().filter(|level| level.pres.is_none()).count();
        if missing_pressure > 0 {
            tracing::warn!(station, missing_pressure, "sounding rows without pressure");
        }
        tracing::debug!(station, levels = data.len(), "parsed sounding listing");

        Ok(Self {
            station,
            year,
            month,
            day,
            hour,
            data,
        })
    }

    /// `obs_{YYYY}{MM}{DD}{HH}_{station}.json`
    pub fn file_name(&self) -> String {
        format!(
            "obs_{:04}{:02}{:02}{:02}_{}.json",
            self.year, self.month, self.day, self.hour, self.station
        )
    }

    /// Temperature profile, levels lacking pressure or temperature skipped.
    pub fn temperature_profile(&self) -> Curve {
        self.data
            .iter()
            .filter_map(|level| Some(CurvePoint::new(level.pres?, level.temp?)))
            .collect()
    }

    /// Dewpoint profile, levels lacking pressure or dewpoint skipped.
    pub fn dewpoint_profile(&self) -> Curve {
        self.data
            .iter()
            .filter_map(|level| Some(CurvePoint::new(level.pres?, level.dewt?)))
            .collect()
    }

    pub fn save_json(&self, path: &Path) -> DiagramResult<()> {
        std::fs::write(path, serde_json::to_string(self)?)?;
        Ok(())
    }

    pub fn load_json(path: &Path) -> DiagramResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Body of the first `<pre>` element. Tag names match in any case and the
/// opening tag may carry attributes.
fn first_pre_block(text: &str) -> Option<&str> {
    // ASCII lowercasing keeps byte offsets, so indices carry over to `text`.
    let lower = text.to_ascii_lowercase();

    let mut from = 0;
    let name_end = loop {
        let at = from + lower[from..].find("<pre")?;
        let end = at + "<pre".len();
        match lower.as_bytes().get(end) {
            Some(b'>') => break end,
            Some(c) if c.is_ascii_whitespace() => break end,
            _ => from = end,
        }
    };
    let open = name_end + lower[name_end..].find('>')? + 1;
    let close = open + lower[open..].find("</pre")?;
    Some(&text[open..close])
}
