pub mod api;
pub mod arithmetic;
pub mod fetch;
pub mod iqama;
pub mod normalize;
pub mod session;

pub use api::{AladhanClient, TimingsSource};
pub use arithmetic::TimeOfDay;
pub use fetch::{FetchReport, Fetcher};
pub use session::{FetchDisposition, LocationSession};
