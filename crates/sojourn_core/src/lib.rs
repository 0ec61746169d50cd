//! # sojourn_core: Rolling-Window Stay Compliance
//!
//! Core library for checking a history of stays against a regulatory
//! rule of the form "no more than A occupied days within any rolling
//! window of P days", and for planning the soonest future stay that
//! keeps the record compliant.
//!
//! The crate is pure computation over in-memory date arithmetic:
//! single-threaded, synchronous, no I/O and no shared mutable state.
//! Every value is immutable or exclusively owned by the caller, so no
//! locking is ever needed.
//!
//! ## Components
//!
//! - `types`: `Date`, `StayInterval`, `StayRule`, and the error enums
//! - `compliance`: overlap validation and the rolling-window predicate
//! - `planner`: bounded forward search for the next compliant stay
//!
//! ## Usage Example
//!
//! ```rust
//! use sojourn_core::compliance::is_compliant;
//! use sojourn_core::planner::find_next_stay;
//! use sojourn_core::types::{parse_intervals, StayRule};
//!
//! let history = parse_intervals(&[
//!     ("2018-10-15", "2018-11-27"),
//!     ("2019-01-14", "2019-02-26"),
//! ])
//! .unwrap();
//!
//! let rule = StayRule::default(); // 90 days in any 180
//! assert!(is_compliant(&history, &rule).unwrap());
//!
//! let next = find_next_stay(&history, 45, &rule).unwrap();
//! assert_eq!(next.day_count(), 45);
//! assert!(next.begin() > history[1].end());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `Date`, `StayInterval`, and
//!   `StayRule` (stay deserialisation re-validates the date order)

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod compliance;
pub mod planner;
pub mod types;
