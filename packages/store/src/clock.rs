//! Platform-aware wall clock.
//!
//! `chrono`'s `wasmbind` feature routes [`chrono::Local`] through `js_sys::Date`
//! in the browser, so the same call works on every target.

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Current local date and time.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Current local calendar date.
pub fn today() -> NaiveDate {
    now().date()
}
