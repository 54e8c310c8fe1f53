use crate::spreadsheet::reference::index_to_reference;
use crate::table::Value;
use chrono::Duration;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::NaiveTime;

/// Types of cell data in spreadsheet files.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub(crate) enum CellType {
    #[default]
    Empty,
    /// Boolean values (true/false)
    Boolean,
    /// Numeric values
    Number,
    /// Date/time values stored as numbers from 1900 epoch
    NumberDateTime1900,
    /// Date values stored as numbers from 1900 epoch
    NumberDate1900,
    /// Time values stored as numbers from 1900 epoch
    NumberTime1900,
    /// Date/time values stored as numbers from 1904 epoch
    NumberDateTime1904,
    /// Date values stored as numbers from 1904 epoch
    NumberDate1904,
    /// Time values stored as numbers from 1904 epoch
    NumberTime1904,
    /// ISO 8601 date/time strings
    IsoDateTime,
    /// Inline string values
    InlineString,
    /// Shared string table references
    SharedString,
    /// Error values such as `#N/A`
    Error,
}

impl CellType {
    /// Parses built-in Excel number format IDs to determine cell type.
    pub(crate) fn parse_builtin_number_format_id(id: &str, is_1904: bool) -> Option<Self> {
        match id {
            "22" => Some(if is_1904 { Self::NumberDateTime1904 } else { Self::NumberDateTime1900 }),
            "14" | "15" | "16" | "17" => Some(if is_1904 { Self::NumberDate1904 } else { Self::NumberDate1900 }),
            "18" | "19" | "20" | "21" | "45" | "46" | "47" => Some(if is_1904 { Self::NumberTime1904 } else { Self::NumberTime1900 }),
            _ => None,
        }
    }

    /// Parses custom number format strings to determine cell type.
    /// Quoted literals, escapes and bracketed sections (colors, locales) are skipped.
    pub(crate) fn parse_custom_number_format(format: &str, is_1904: bool) -> Self {
        let mut is_escaped = false;
        let mut is_literal = false;
        let mut is_date = false;
        let mut is_time = false;
        let mut is_color = false;
        for character in format.chars() {
            match character {
                _ if is_escaped => is_escaped = false,
                '_' | '\\' if !is_escaped => is_escaped = true,

                '"' if is_literal => is_literal = false,
                '"' if !is_literal && !is_color => is_literal = true,

                ']' if is_color => is_color = false,
                '[' if !is_color && !is_literal => is_color = true,
                _ if is_literal || is_color => (),

                'Y' | 'y' | 'D' | 'd' => is_date = true,
                'H' | 'h' | 'S' | 's' => is_time = true,
                _ => (),
            }
        }

        match (is_date, is_time, is_1904) {
            (true, true, false) => Self::NumberDateTime1900,
            (true, true, true) => Self::NumberDateTime1904,
            (true, false, false) => Self::NumberDate1900,
            (true, false, true) => Self::NumberDate1904,
            (false, true, false) => Self::NumberTime1900,
            (false, true, true) => Self::NumberTime1904,
            (false, false, _) => Self::Number,
        }
    }

    /// Whether the serial number of this type counts from 1904-01-01.
    fn is_1904(&self) -> bool {
        matches!(self, Self::NumberDateTime1904 | Self::NumberDate1904 | Self::NumberTime1904)
    }
}

/// Represents a single cell in a spreadsheet with position, type, and value.
#[derive(Clone, Debug)]
pub(crate) struct Cell {
    /// Row index (0-based)
    pub(crate) row: usize,
    /// Column index (0-based)
    pub(crate) col: usize,
    /// Cell data type
    pub(crate) kind: CellType,
    /// Cell value as stored in the sheet XML
    pub(crate) value: String,
}

impl Cell {
    /// Returns the Excel-style cell reference (e.g., "A1", "B2").
    pub(crate) fn reference(&self) -> String {
        index_to_reference(self.row, self.col)
    }

    fn to_double(&self) -> Result<f64, String> {
        self.value.parse::<f64>().map_err(|_| format!("parse '{}' to double failed", self.value))
    }

    /// Converts the raw cell into a typed value.
    ///
    /// Date-formatted numbers and ISO 8601 cells become date-times, shared
    /// string indexes are resolved against `shared_strings`.
    pub(crate) fn to_value(&self, shared_strings: &[String]) -> Result<Value, String> {
        match self.kind {
            CellType::Empty => Ok(Value::Empty),
            CellType::Boolean => Ok(Value::Bool(self.value == "1")),
            CellType::Number => self.to_double().map(Value::Number),
            CellType::NumberDateTime1900 | CellType::NumberDate1900 | CellType::NumberTime1900 |
            CellType::NumberDateTime1904 | CellType::NumberDate1904 | CellType::NumberTime1904 => {
                let serial = self.to_double()?;
                serial_to_datetime(serial, self.kind.is_1904())
                    .map(Value::DateTime)
                    .ok_or_else(|| format!("serial date '{}' out of range", self.value))
            }
            CellType::IsoDateTime => parse_iso_datetime(&self.value).map(Value::DateTime),
            CellType::SharedString => {
                let index = self.value.parse::<usize>()
                    .map_err(|_| format!("parse '{}' to shared string index failed", self.value))?;
                shared_strings
                    .get(index)
                    .map(|string| Value::Text(string.to_owned()))
                    .ok_or_else(|| format!("shared string {} not found", index))
            }
            CellType::InlineString | CellType::Error => Ok(Value::Text(self.value.to_owned())),
        }
    }
}

/// Largest serial Excel accepts, 9999-12-31 in the 1900 system
const MAX_SERIAL: f64 = 2_958_465.0;

/// Converts an Excel serial number to a date-time.
///
/// The 1900 system counts from 1899-12-30 and keeps Lotus 1-2-3's phantom
/// 1900-02-29, so serials below 60 shift by one day. Time of day is rounded
/// to the microsecond. Serials beyond Excel's range in either direction
/// yield `None`.
pub(crate) fn serial_to_datetime(serial: f64, is_1904: bool) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial.abs() > MAX_SERIAL {
        return None;
    }
    let days = serial.trunc() as i64;
    let offset = if is_1904 {
        1_462
    } else if days < 60 {
        1
    } else {
        0
    };
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_time(NaiveTime::MIN);
    let microseconds = (serial.fract() * 86_400_000_000f64).round() as i64;
    epoch
        .checked_add_signed(Duration::try_days(days.checked_add(offset)?)?)?
        .checked_add_signed(Duration::microseconds(microseconds))
}

/// Parses the ISO 8601 text stored in `t="d"` cells.
fn parse_iso_datetime(value: &str) -> Result<NaiveDateTime, String> {
    let value = value.trim_end_matches('Z');
    if value.contains('T') {
        NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
            .map_err(|_| format!("parse '{}' to NaiveDateTime failed", value))
    } else {
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(|date| date.and_time(NaiveTime::MIN))
            .map_err(|_| format!("parse '{}' to NaiveDate failed", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, second)
            .unwrap()
    }

    fn cell(kind: CellType, value: &str) -> Cell {
        Cell {
            row: 1,
            col: 2,
            kind,
            value: value.to_owned(),
        }
    }

    #[test]
    fn builtin_formats() {
        assert_eq!(CellType::parse_builtin_number_format_id("14", false), Some(CellType::NumberDate1900));
        assert_eq!(CellType::parse_builtin_number_format_id("22", true), Some(CellType::NumberDateTime1904));
        assert_eq!(CellType::parse_builtin_number_format_id("46", false), Some(CellType::NumberTime1900));
        assert_eq!(CellType::parse_builtin_number_format_id("0", false), None);
        assert_eq!(CellType::parse_builtin_number_format_id("10", false), None);
    }

    #[test]
    fn custom_formats() {
        assert_eq!(CellType::parse_custom_number_format("yyyy-mm-dd hh:mm:ss", false), CellType::NumberDateTime1900);
        assert_eq!(CellType::parse_custom_number_format("dd/mm/yyyy", true), CellType::NumberDate1904);
        assert_eq!(CellType::parse_custom_number_format("hh:mm", false), CellType::NumberTime1900);
        assert_eq!(CellType::parse_custom_number_format("0.00", false), CellType::Number);
        assert_eq!(CellType::parse_custom_number_format("[Red]0.00", false), CellType::Number);
        assert_eq!(CellType::parse_custom_number_format("\"days\" 0", false), CellType::Number);
        assert_eq!(CellType::parse_custom_number_format("#,##0_);\\(#,##0\\)", false), CellType::Number);
    }

    #[test]
    fn serial_dates_1900() {
        assert_eq!(serial_to_datetime(1.0, false), Some(at(1900, 1, 1, 0, 0, 0)));
        assert_eq!(serial_to_datetime(59.0, false), Some(at(1900, 2, 28, 0, 0, 0)));
        assert_eq!(serial_to_datetime(61.0, false), Some(at(1900, 3, 1, 0, 0, 0)));
        assert_eq!(serial_to_datetime(45_364.0, false), Some(at(2024, 3, 13, 0, 0, 0)));
        assert_eq!(serial_to_datetime(45_364.5, false), Some(at(2024, 3, 13, 12, 0, 0)));
        assert_eq!(serial_to_datetime(45_364.75, false), Some(at(2024, 3, 13, 18, 0, 0)));
    }

    #[test]
    fn serial_dates_1904() {
        assert_eq!(serial_to_datetime(0.0, true), Some(at(1904, 1, 1, 0, 0, 0)));
        assert_eq!(serial_to_datetime(43_902.25, true), Some(at(2024, 3, 13, 6, 0, 0)));
    }

    #[test]
    fn serial_rejects_non_finite() {
        assert_eq!(serial_to_datetime(f64::NAN, false), None);
        assert_eq!(serial_to_datetime(f64::INFINITY, false), None);
    }

    #[test]
    fn serial_rejects_out_of_range() {
        assert_eq!(serial_to_datetime(1e19, true), None);
        assert_eq!(serial_to_datetime(1e19, false), None);
        assert_eq!(serial_to_datetime(-1e19, true), None);
        assert_eq!(serial_to_datetime(2_958_466.0, false), None);
        assert_eq!(serial_to_datetime(2_958_465.5, false), Some(at(9999, 12, 31, 12, 0, 0)));
        assert!(cell(CellType::NumberDateTime1904, "1e19").to_value(&[]).is_err());
    }

    #[test]
    fn typed_values() {
        let strings = vec!["Ana".to_owned(), "https://board/card/7".to_owned()];
        assert_eq!(cell(CellType::Boolean, "1").to_value(&strings), Ok(Value::Bool(true)));
        assert_eq!(cell(CellType::Number, "3.5").to_value(&strings), Ok(Value::Number(3.5)));
        assert_eq!(cell(CellType::InlineString, "x").to_value(&strings), Ok(Value::Text("x".to_owned())));
        assert_eq!(cell(CellType::Error, "#N/A").to_value(&strings), Ok(Value::Text("#N/A".to_owned())));
        assert_eq!(
            cell(CellType::SharedString, "1").to_value(&strings),
            Ok(Value::Text("https://board/card/7".to_owned()))
        );
        assert_eq!(
            cell(CellType::NumberDateTime1900, "45364.5").to_value(&strings),
            Ok(Value::DateTime(at(2024, 3, 13, 12, 0, 0)))
        );
        assert_eq!(
            cell(CellType::IsoDateTime, "2024-03-12T08:30:00").to_value(&strings),
            Ok(Value::DateTime(at(2024, 3, 12, 8, 30, 0)))
        );
        assert_eq!(
            cell(CellType::IsoDateTime, "2024-03-12").to_value(&strings),
            Ok(Value::DateTime(at(2024, 3, 12, 0, 0, 0)))
        );
    }

    #[test]
    fn invalid_values() {
        let strings = vec!["only".to_owned()];
        assert!(cell(CellType::SharedString, "4").to_value(&strings).is_err());
        assert!(cell(CellType::Number, "abc").to_value(&strings).is_err());
        assert!(cell(CellType::NumberDate1900, "soon").to_value(&strings).is_err());
        assert!(cell(CellType::IsoDateTime, "12/03/2024").to_value(&strings).is_err());
        assert_eq!(cell(CellType::Number, "1").reference(), "C2");
    }
}
