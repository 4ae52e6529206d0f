//!  Wanderer Travel Agent
//!
//!  Copyright (C) 2026  Mamy Ratsimbazafy
//!
//!  This program is free software: you can redistribute it and/or modify
//!  it under the terms of the GNU Affero General Public License as published by
//!  the Free Software Foundation, either version 3 of the License, or
//!  (at your option) any later version.
//!
//!  This program is distributed in the hope that it will be useful,
//!  but WITHOUT ANY WARRANTY; without even the implied warranty of
//!  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//!  GNU Affero General Public License for more details.
//!
//!  You should have received a copy of the GNU Affero General Public License
//!  along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Date rule tests, all against a pinned clock.
//!
//! Covers strict dd/mm/yyyy parsing (format shape and real-calendar
//! resolution), the departed-in-the-past check, and the
//! return-before-departure check.
//!
//! Run with:
//!     cargo test --test t_rules_dates

use chrono::{Duration, NaiveDate};
use wanderer_clock::FixedClock;
use wanderer_flight_search::{
    evaluate, FlightSearch, FlightSearchRequest, FlightSearchRequestBuilder, Violation,
};

// Pinned well before the leap-day fixtures below.
fn pinned_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
}

fn dmy(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

fn plus_days(days: i64) -> String {
    dmy(pinned_today() + Duration::days(days))
}

fn validator() -> FlightSearch {
    FlightSearch::with_clock(Box::new(FixedClock::new(pinned_today())))
}

fn request_with_dates(departure: &str, ret: &str) -> FlightSearchRequestBuilder {
    FlightSearchRequest::builder(departure, "mel", ret, "pvg")
}

#[test]
fn departure_today_is_accepted() {
    let request = request_with_dates(&dmy(pinned_today()), &plus_days(5)).build();
    assert!(validator().validate(&request), "today is not the past");
}

#[test]
fn departure_yesterday_is_rejected() {
    let request = request_with_dates(&plus_days(-1), &plus_days(5)).build();
    assert_eq!(
        evaluate(&request, pinned_today()),
        Err(Violation::DepartureInPast)
    );
    assert!(!validator().validate(&request));
}

#[test]
fn return_equal_to_departure_is_accepted() {
    let request = request_with_dates(&plus_days(10), &plus_days(10)).build();
    assert!(validator().validate(&request), "same-day return is allowed");
}

#[test]
fn return_before_departure_is_rejected() {
    let request = request_with_dates(&plus_days(10), &plus_days(9)).build();
    assert_eq!(
        evaluate(&request, pinned_today()),
        Err(Violation::ReturnBeforeDeparture)
    );
    assert!(!validator().validate(&request));
}

#[test]
fn leap_day_of_non_leap_year_is_rejected() {
    // 2026 has no 29 Feb; a lenient parser would roll it to 1 Mar
    let request = request_with_dates("29/02/2026", "05/03/2026").build();
    assert_eq!(
        evaluate(&request, pinned_today()),
        Err(Violation::MalformedDate)
    );
    assert!(!validator().validate(&request));
}

#[test]
fn last_of_february_in_non_leap_year_is_accepted() {
    let request = request_with_dates("28/02/2026", "05/03/2026").build();
    assert!(validator().validate(&request));
}

#[test]
fn loose_date_shapes_are_rejected() {
    // chrono alone accepts single-digit day/month, so the shape gate
    // has to reject these
    for departure in ["1/03/2026", "01/3/2026", "01/03/26", "2026-03-01", "garbage"] {
        let request = request_with_dates(departure, "05/03/2026").build();
        assert_eq!(
            evaluate(&request, pinned_today()),
            Err(Violation::MalformedDate),
            "{departure:?} should be rejected as malformed"
        );
    }
}

#[test]
fn missing_dates_are_rejected_not_erroneous() {
    let mut request = request_with_dates(&plus_days(1), &plus_days(5)).build();
    request.departure_date = None;
    assert_eq!(
        evaluate(&request, pinned_today()),
        Err(Violation::MalformedDate)
    );

    let mut request = request_with_dates(&plus_days(1), &plus_days(5)).build();
    request.return_date = None;
    assert_eq!(
        evaluate(&request, pinned_today()),
        Err(Violation::MalformedDate)
    );
}

#[test]
fn malformed_return_reported_before_past_departure() {
    // both dates are checked for shape before either ordering rule runs
    let request = request_with_dates(&plus_days(-3), "31/02/2026").build();
    assert_eq!(
        evaluate(&request, pinned_today()),
        Err(Violation::MalformedDate)
    );
}
