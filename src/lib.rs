//! Position history – consistency checking for the succession of holders of a position.
//!
//! A position (a presidency, a mayoralty, an ambassadorship) is held by a
//! sequence of people. The query service reports every *mandate*: who held
//! the position, from when, until when, and whom they claim to have replaced
//! or been replaced by. This crate cross-checks those claims against the
//! sequence itself and attaches a warning to every mandate that does not add
//! up.
//!
//! ## Modules
//! * [`datatype`] – [`datatype::Item`] references and [`datatype::PrecisionDate`],
//!   a date known to day, month, year, decade or century precision, with a
//!   comparison that admits when two precisions cannot be ordered.
//! * [`construct`] – The [`construct::Mandate`] record, the
//!   [`construct::ImpliedList`] of direct and indirect relations, and
//!   biographical rows.
//! * [`check`] – The consistency rules, each judging a mandate against its
//!   `(later, current, earlier)` window.
//! * [`history`] – Windows a whole sequence and produces one validated row per mandate.
//! * [`position`] – Inception, abolition and related positions of the position itself.
//! * [`report`] – Chooses the report outcome for a position and assembles it.
//! * [`bindings`] – Decodes SPARQL JSON results into the types above.
//! * [`server`] – A small HTTP service producing reports as JSON.
//!
//! ## Rules
//! | Rule | Headline |
//! |------|----------|
//! | missing start/end dates or succession claims | `Missing field(s)` |
//! | end date after the successor's start date | `Date overlap` |
//! | dates whose precisions cannot be ordered | `Date precision` |
//! | claimed predecessor is not the previous holder | `Inconsistent predecessor` |
//! | claimed successor is not the next holder | `Inconsistent successor` |
//!
//! Findings are never errors. Only input that cannot be understood at all,
//! such as a mandate without an officeholder, is reported through
//! [`error::PositionHistoryError`].
//!
//! ## Quick Start
//! ```
//! use position_history::config::Config;
//! use position_history::construct::Mandate;
//! use position_history::datatype::{Item, Precision, PrecisionDate};
//! use position_history::history::validate;
//!
//! let config = Config::default();
//! let mandates = vec![
//!     Mandate::new(Item::parse("Q2").unwrap())
//!         .with_start_date(PrecisionDate::new("1742-02-16", Precision::Day))
//!         .with_predecessor(Item::parse("Q1").unwrap()),
//!     Mandate::new(Item::parse("Q1").unwrap())
//!         .with_start_date(PrecisionDate::new("1721-04-04", Precision::Day))
//!         .with_end_date(PrecisionDate::new("1742-02-27", Precision::Day))
//!         .with_successor(Item::parse("Q2").unwrap()),
//! ];
//! let rows = validate(&mandates, &config);
//! assert!(rows[0].warnings.is_empty());
//! assert_eq!(rows[1].warnings[0].headline, "Date overlap");
//! ```

pub mod bindings;
pub mod check;
pub mod config;
pub mod construct;
pub mod datatype;
pub mod error;
pub mod history;
pub mod position;
pub mod report;
pub mod server;
