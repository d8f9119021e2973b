// used to compare dates of possibly different precisions
use std::cmp::Ordering;
// used to print out readable forms of a data type
use std::fmt;

// so the item pattern is compiled once
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Serialize, Serializer};
use tracing::warn;

use crate::error::{PositionHistoryError, Result};

lazy_static! {
    static ref ITEM_ID: Regex = Regex::new(r"^Q\d+$").unwrap();
}

// ------------- Item -------------
/// An opaque reference to an entity, such as a person or a position.
///
/// Identity is the `Q`-prefixed id string; two references to the same id
/// are the same item no matter where they were read from.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug)]
pub struct Item {
    id: String,
}
impl Item {
    /// Accepts a bare id (`Q42`) or an entity URL whose last segment is the id.
    pub fn parse(reference: &str) -> Result<Item> {
        let reference = reference.trim();
        if reference.is_empty() {
            return Err(PositionHistoryError::MissingId(String::from("empty reference")));
        }
        let id = reference.rsplit('/').next().unwrap_or(reference);
        if !ITEM_ID.is_match(id) {
            return Err(PositionHistoryError::MalformedId { id: id.to_owned() });
        }
        Ok(Item { id: id.to_owned() })
    }
    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn qlink(&self) -> String {
        format!("{{{{Q|{}}}}}", self.id)
    }
    pub fn qblink(&self) -> String {
        format!("{{{{QB|{}}}}}", self.id)
    }
    pub fn qlink_i(&self) -> String {
        format!("''{}''", self.qlink())
    }
    pub fn qblink_i(&self) -> String {
        format!("''{}''", self.qblink())
    }
}
impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.qlink())
    }
}
impl Serialize for Item {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.id)
    }
}

// ------------- Precision -------------
/// The granularity at which a date is known.
#[derive(Eq, PartialEq, Hash, Clone, Copy, Debug)]
pub enum Precision {
    Century,
    Decade,
    Year,
    Month,
    Day,
    /// A numeric code outside the supported range, displayed as the raw string.
    Unsupported(i64),
}
impl Precision {
    /// Maps the query service's numeric precision code; no code means a full date.
    pub fn from_code(code: Option<&str>) -> std::result::Result<Precision, String> {
        let code = match code.map(str::trim) {
            None | Some("") => return Ok(Precision::Day),
            Some(code) => code,
        };
        match code.parse::<i64>() {
            Ok(11) => Ok(Precision::Day),
            Ok(10) => Ok(Precision::Month),
            Ok(9) => Ok(Precision::Year),
            Ok(8) => Ok(Precision::Decade),
            Ok(7) => Ok(Precision::Century),
            Ok(other) => Ok(Precision::Unsupported(other)),
            Err(_) => Err(code.to_owned()),
        }
    }
    pub fn code(&self) -> i64 {
        match self {
            Precision::Day => 11,
            Precision::Month => 10,
            Precision::Year => 9,
            Precision::Decade => 8,
            Precision::Century => 7,
            Precision::Unsupported(code) => *code,
        }
    }
    fn length(&self) -> Option<usize> {
        match self {
            Precision::Day => Some(10),
            Precision::Month => Some(7),
            Precision::Year | Precision::Decade => Some(4),
            Precision::Century => Some(2),
            Precision::Unsupported(_) => None,
        }
    }
}

// ------------- PrecisionDate -------------
pub const RAW_LENGTH: usize = 10;

/// A date as delivered by the query service, together with the precision it
/// is known to. Values are immutable once created.
#[derive(Eq, PartialEq, Hash, Clone, Debug)]
pub struct PrecisionDate {
    raw: String,
    precision: Precision,
}
impl PrecisionDate {
    /// Only the leading `YYYY-MM-DD` of the raw value is kept.
    pub fn new(raw: &str, precision: Precision) -> PrecisionDate {
        PrecisionDate {
            raw: raw.chars().take(RAW_LENGTH).collect(),
            precision,
        }
    }
    pub fn from_code(raw: &str, code: Option<&str>) -> Result<PrecisionDate> {
        let precision = Precision::from_code(code).map_err(|code| {
            PositionHistoryError::MalformedPrecision { code, date: raw.to_owned() }
        })?;
        Ok(PrecisionDate::new(raw, precision))
    }
    pub fn raw(&self) -> &str {
        &self.raw
    }
    pub fn precision(&self) -> Precision {
        self.precision
    }
    /// The absent date; it carries no display or comparison meaning.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
    pub fn display(&self) -> String {
        let precisioned = match self.precision {
            Precision::Century => format!("{}. century", self.truncated()),
            Precision::Decade => format!("{}s", self.truncated()),
            _ => self.truncated().to_owned(),
        };
        match precisioned.strip_prefix('0') {
            Some(stripped) => stripped.to_owned(),
            None => precisioned,
        }
    }
    /// Text before the first `-`; empty for dates before the common era.
    pub fn year(&self) -> String {
        self.display().split('-').next().unwrap_or_default().to_owned()
    }
    pub fn month(&self) -> Option<String> {
        self.display().split('-').nth(1).map(String::from)
    }
    /// Orders two dates, returning `None` when their precisions cannot be
    /// reconciled (e.g. a bare year against a full date in that same year).
    ///
    /// Dates of equal precision compare by display text. Otherwise the year
    /// parts decide, then the month parts if both dates have one. Decade and
    /// century displays offer their whole text as the "year".
    pub fn compare(&self, other: &PrecisionDate) -> Option<Ordering> {
        if self.precision == other.precision {
            return Some(self.display().cmp(&other.display()));
        }
        let (year, other_year) = (self.year(), other.year());
        if year != other_year {
            return Some(year.cmp(&other_year));
        }
        match (self.month(), other.month()) {
            (Some(month), Some(other_month)) => Some(month.cmp(&other_month)),
            _ => None,
        }
    }
    fn truncated(&self) -> &str {
        match self.precision.length() {
            Some(length) => match self.raw.char_indices().nth(length) {
                Some((end, _)) => &self.raw[..end],
                None => &self.raw,
            },
            None => {
                warn!(precision = self.precision.code(), date = %self.raw, "cannot handle precision");
                &self.raw
            }
        }
    }
}
impl fmt::Display for PrecisionDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
impl Serialize for PrecisionDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.display())
    }
}
