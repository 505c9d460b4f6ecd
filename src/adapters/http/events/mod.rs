//! Public event listings. Manager-side event editing lives in `manager`.

mod dto;
mod handlers;
mod routes;

pub use dto::{EventListQuery, EventRequest};
pub use routes::event_routes;
