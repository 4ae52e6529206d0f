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

//! # Flight Search Rules
//!
//! Side-effect free evaluation of the business rules a search request
//! must satisfy. Rules run in a fixed order and stop at the first
//! violation; "today" comes in as a parameter so the engine itself
//! never touches the wall clock.

use std::collections::HashSet;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::search_request::FlightSearchRequest;

/// Airports currently served.
pub static ALLOWED_AIRPORTS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from(["syd", "mel", "lax", "cdg", "del", "pvg", "doh"]));

/// Cabin classes currently sold.
pub static ALLOWED_CLASSES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from(["economy", "premium economy", "business", "first"]));

// chrono's %d/%m accept single-digit fields, so the shape is gated
// separately before the calendar parse.
static STRICT_DMY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{2}/\d{2}/\d{4}$").unwrap());

/// The first rule a request fails, if any.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    #[error("passenger total must be between 1 and 9")]
    PassengerTotalOutOfRange,
    #[error("passenger counts cannot be negative")]
    NegativePassengerCount,
    #[error("seating class missing or not offered")]
    SeatingClassNotOffered,
    #[error("airport code missing or not served")]
    AirportNotServed,
    #[error("departure and destination airports must differ")]
    SameDepartureAndDestination,
    #[error("date missing or not a strict dd/mm/yyyy calendar date")]
    MalformedDate,
    #[error("departure date is in the past")]
    DepartureInPast,
    #[error("return date is before departure date")]
    ReturnBeforeDeparture,
    #[error("children cannot sit in an emergency row")]
    ChildInEmergencyRow,
    #[error("children cannot travel in first class")]
    ChildInFirstClass,
    #[error("infants cannot sit in an emergency row")]
    InfantInEmergencyRow,
    #[error("infants cannot travel in business class")]
    InfantInBusinessClass,
    #[error("at most two children per adult")]
    TooManyChildrenPerAdult,
    #[error("at most one infant per adult")]
    TooManyInfantsPerAdult,
    #[error("emergency row seating is only available in economy")]
    EmergencyRowOutsideEconomy,
}

/// Parse a date under strict `DD/MM/YYYY`: two-digit day and month,
/// four-digit year, real calendar resolution. Impossible dates such as
/// 29 Feb in a non-leap year are rejected, never rolled over.
fn parse_strict_dmy(input: Option<&str>) -> Option<NaiveDate> {
    let input = input?;
    if !STRICT_DMY_RE.is_match(input) {
        return None;
    }
    NaiveDate::parse_from_str(input, "%d/%m/%Y").ok()
}

/// Evaluate every rule against `request`, stopping at the first
/// violation. Pure: no state is read or written beyond the arguments.
///
/// Rule order is part of the contract — a request violating several
/// rules reports the one listed first here.
pub fn evaluate(request: &FlightSearchRequest, today: NaiveDate) -> Result<(), Violation> {
    // passenger total 1..=9, every count non-negative
    if request.adult_passenger_count < 0
        || request.child_passenger_count < 0
        || request.infant_passenger_count < 0
    {
        return Err(Violation::NegativePassengerCount);
    }
    if !(1..=9).contains(&request.total_passengers()) {
        return Err(Violation::PassengerTotalOutOfRange);
    }

    // seating class on the whitelist
    let Some(seating_class) = request.seating_class.as_deref() else {
        return Err(Violation::SeatingClassNotOffered);
    };
    if !ALLOWED_CLASSES.contains(seating_class) {
        return Err(Violation::SeatingClassNotOffered);
    }

    // both airports served, route must actually go somewhere
    let (Some(from), Some(to)) = (
        request.departure_airport_code.as_deref(),
        request.destination_airport_code.as_deref(),
    ) else {
        return Err(Violation::AirportNotServed);
    };
    if !ALLOWED_AIRPORTS.contains(from) || !ALLOWED_AIRPORTS.contains(to) {
        return Err(Violation::AirportNotServed);
    }
    if from == to {
        return Err(Violation::SameDepartureAndDestination);
    }

    // both dates strict dd/mm/yyyy with real calendar resolution
    let departure = parse_strict_dmy(request.departure_date.as_deref())
        .ok_or(Violation::MalformedDate)?;
    let return_date =
        parse_strict_dmy(request.return_date.as_deref()).ok_or(Violation::MalformedDate)?;

    // departure not in the past (today is fine)
    if departure < today {
        return Err(Violation::DepartureInPast);
    }

    // return on or after departure
    if return_date < departure {
        return Err(Violation::ReturnBeforeDeparture);
    }

    // children: no emergency row, no first class
    if request.child_passenger_count > 0 {
        if request.emergency_row_seating {
            return Err(Violation::ChildInEmergencyRow);
        }
        if seating_class == "first" {
            return Err(Violation::ChildInFirstClass);
        }
    }

    // infants: no emergency row, no business class
    if request.infant_passenger_count > 0 {
        if request.emergency_row_seating {
            return Err(Violation::InfantInEmergencyRow);
        }
        if seating_class == "business" {
            return Err(Violation::InfantInBusinessClass);
        }
    }

    // supervision ratios
    if request.child_passenger_count > 2 * request.adult_passenger_count {
        return Err(Violation::TooManyChildrenPerAdult);
    }
    if request.infant_passenger_count > request.adult_passenger_count {
        return Err(Violation::TooManyInfantsPerAdult);
    }

    // emergency rows exist only in economy
    if request.emergency_row_seating && seating_class != "economy" {
        return Err(Violation::EmergencyRowOutsideEconomy);
    }

    Ok(())
}
