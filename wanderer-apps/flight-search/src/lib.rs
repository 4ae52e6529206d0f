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

// Library for wanderer-flight-search
// Validation of flight-search requests for Wanderer travel services

mod flight_search;
mod search_request;
mod search_rules;

// Re-export the validator and its committed-state view
pub use flight_search::{CommittedSearch, FlightSearch};

// Re-export the request type and builder
pub use search_request::{FlightSearchRequest, FlightSearchRequestBuilder};

// Re-export the pure rule engine for callers that need the reason
pub use search_rules::{evaluate, Violation, ALLOWED_AIRPORTS, ALLOWED_CLASSES};
