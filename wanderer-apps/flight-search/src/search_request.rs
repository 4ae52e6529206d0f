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

//! # Flight Search Request
//!
//! The nine-field request a caller submits for validation. Building a
//! request performs no checks; every rule is evaluated by
//! [`FlightSearch::validate`](crate::FlightSearch::validate) so that
//! state commit stays behind a single gate.

use serde::{Deserialize, Serialize};

/// A transient flight-search request.
///
/// String fields are `Option` so a missing value is representable;
/// the rule engine rejects `None` the same way it rejects any other
/// invalid input. All strings are expected pre-lowercased by the
/// caller — no case normalization happens here or in the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightSearchRequest {
    /// Outbound date, strict `DD/MM/YYYY`.
    pub departure_date: Option<String>,
    /// Origin, lowercase 3-letter code.
    pub departure_airport_code: Option<String>,
    pub emergency_row_seating: bool,
    /// Inbound date, strict `DD/MM/YYYY`.
    pub return_date: Option<String>,
    /// Destination, lowercase 3-letter code.
    pub destination_airport_code: Option<String>,
    pub seating_class: Option<String>,
    pub adult_passenger_count: i32,
    pub child_passenger_count: i32,
    pub infant_passenger_count: i32,
}

impl FlightSearchRequest {
    pub fn builder(
        departure_date: impl Into<String>,
        departure_airport_code: impl Into<String>,
        return_date: impl Into<String>,
        destination_airport_code: impl Into<String>,
    ) -> FlightSearchRequestBuilder {
        FlightSearchRequestBuilder {
            departure_date: Some(departure_date.into()),
            departure_airport_code: Some(departure_airport_code.into()),
            emergency_row_seating: false,
            return_date: Some(return_date.into()),
            destination_airport_code: Some(destination_airport_code.into()),
            seating_class: Some("economy".to_string()),
            adult_passenger_count: 1,
            child_passenger_count: 0,
            infant_passenger_count: 0,
        }
    }

    /// Total travellers across all three categories.
    ///
    /// Widened to `i64` so counts near `i32::MAX` sum without
    /// overflowing and fall through to an ordinary rejection.
    pub fn total_passengers(&self) -> i64 {
        self.adult_passenger_count as i64
            + self.child_passenger_count as i64
            + self.infant_passenger_count as i64
    }
}

#[derive(Clone)]
pub struct FlightSearchRequestBuilder {
    departure_date: Option<String>,
    departure_airport_code: Option<String>,
    emergency_row_seating: bool,
    return_date: Option<String>,
    destination_airport_code: Option<String>,
    seating_class: Option<String>,
    adult_passenger_count: i32,
    child_passenger_count: i32,
    infant_passenger_count: i32,
}

impl FlightSearchRequestBuilder {
    pub fn seating_class(mut self, seating_class: impl Into<String>) -> Self {
        self.seating_class = Some(seating_class.into());
        self
    }

    pub fn emergency_row(mut self, emergency_row_seating: bool) -> Self {
        self.emergency_row_seating = emergency_row_seating;
        self
    }

    pub fn adults(mut self, count: i32) -> Self {
        self.adult_passenger_count = count;
        self
    }

    pub fn children(mut self, count: i32) -> Self {
        self.child_passenger_count = count;
        self
    }

    pub fn infants(mut self, count: i32) -> Self {
        self.infant_passenger_count = count;
        self
    }

    pub fn build(self) -> FlightSearchRequest {
        FlightSearchRequest {
            departure_date: self.departure_date,
            departure_airport_code: self.departure_airport_code,
            emergency_row_seating: self.emergency_row_seating,
            return_date: self.return_date,
            destination_airport_code: self.destination_airport_code,
            seating_class: self.seating_class,
            adult_passenger_count: self.adult_passenger_count,
            child_passenger_count: self.child_passenger_count,
            infant_passenger_count: self.infant_passenger_count,
        }
    }
}
