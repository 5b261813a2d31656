pub mod itineraries;
pub mod places;
pub mod routes;
