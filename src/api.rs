pub mod interface;
pub mod server;

pub use interface::{JourneyAPI, RouteAPI, API};
pub use server::serve;
