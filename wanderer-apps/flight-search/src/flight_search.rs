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

//! # Flight Search Validator
//!
//! Stateful wrapper around the rule engine: a valid request is
//! committed as the instance's current search, an invalid one leaves
//! the previous commit untouched.

use serde::Serialize;
use wanderer_clock::{Clock, SystemClock};

use crate::search_request::FlightSearchRequest;
use crate::search_rules;

/// The last successfully validated request.
///
/// Built whole from a request that passed every rule; the string
/// fields are non-optional because a valid request cannot be missing
/// any of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommittedSearch {
    pub departure_date: String,
    pub departure_airport_code: String,
    pub emergency_row_seating: bool,
    pub return_date: String,
    pub destination_airport_code: String,
    pub seating_class: String,
    pub adult_passenger_count: i32,
    pub child_passenger_count: i32,
    pub infant_passenger_count: i32,
}

impl CommittedSearch {
    // Only called after the rules passed, so every Option is Some.
    fn from_request(request: &FlightSearchRequest) -> Option<Self> {
        Some(Self {
            departure_date: request.departure_date.clone()?,
            departure_airport_code: request.departure_airport_code.clone()?,
            emergency_row_seating: request.emergency_row_seating,
            return_date: request.return_date.clone()?,
            destination_airport_code: request.destination_airport_code.clone()?,
            seating_class: request.seating_class.clone()?,
            adult_passenger_count: request.adult_passenger_count,
            child_passenger_count: request.child_passenger_count,
            infant_passenger_count: request.infant_passenger_count,
        })
    }
}

/// Validates flight-search requests and holds the last valid one.
///
/// Two observable states: empty (no successful search yet, every
/// accessor at its default) and committed (all nine accessors reflect
/// the last accepted request). A failing [`validate`](Self::validate)
/// call never moves between them.
///
/// Not safe for concurrent calls against one instance; callers must
/// serialize access themselves.
pub struct FlightSearch {
    clock: Box<dyn Clock>,
    committed: Option<CommittedSearch>,
}

impl Default for FlightSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl FlightSearch {
    /// A validator reading "today" from the host wall clock.
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    /// A validator with an injected date source, for deterministic tests.
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            clock,
            committed: None,
        }
    }

    /// Run every rule against `request`. On success the request is
    /// committed in a single swap and `true` is returned; on the first
    /// violated rule the previous commit is left byte-for-byte intact
    /// and `false` is returned. Rule violations are ordinary outcomes,
    /// never errors or panics.
    pub fn validate(&mut self, request: &FlightSearchRequest) -> bool {
        let today = self.clock.today();
        match search_rules::evaluate(request, today) {
            Ok(()) => {
                let Some(committed) = CommittedSearch::from_request(request) else {
                    // unreachable once the rules passed
                    return false;
                };
                tracing::debug!(
                    from = %committed.departure_airport_code,
                    to = %committed.destination_airport_code,
                    "search request committed"
                );
                self.committed = Some(committed);
                true
            }
            Err(violation) => {
                tracing::debug!(%violation, "search request rejected");
                false
            }
        }
    }

    /// The last committed request, if any call has succeeded.
    pub fn last_committed(&self) -> Option<&CommittedSearch> {
        self.committed.as_ref()
    }

    // Accessors mirror the committed state, with all-default values
    // before the first successful call.

    pub fn departure_date(&self) -> Option<&str> {
        self.committed.as_ref().map(|c| c.departure_date.as_str())
    }

    pub fn departure_airport_code(&self) -> Option<&str> {
        self.committed
            .as_ref()
            .map(|c| c.departure_airport_code.as_str())
    }

    pub fn emergency_row_seating(&self) -> bool {
        self.committed
            .as_ref()
            .is_some_and(|c| c.emergency_row_seating)
    }

    pub fn return_date(&self) -> Option<&str> {
        self.committed.as_ref().map(|c| c.return_date.as_str())
    }

    pub fn destination_airport_code(&self) -> Option<&str> {
        self.committed
            .as_ref()
            .map(|c| c.destination_airport_code.as_str())
    }

    pub fn seating_class(&self) -> Option<&str> {
        self.committed.as_ref().map(|c| c.seating_class.as_str())
    }

    pub fn adult_passenger_count(&self) -> i32 {
        self.committed
            .as_ref()
            .map_or(0, |c| c.adult_passenger_count)
    }

    pub fn child_passenger_count(&self) -> i32 {
        self.committed
            .as_ref()
            .map_or(0, |c| c.child_passenger_count)
    }

    pub fn infant_passenger_count(&self) -> i32 {
        self.committed
            .as_ref()
            .map_or(0, |c| c.infant_passenger_count)
    }
}
