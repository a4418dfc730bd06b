pub mod construct;
pub mod population;
pub mod query;
pub mod window;

pub use construct::{CONSTRUCTS, Construct, N_CONSTRUCTS};
pub use population::{PopulationRow, PopulationTable};
pub use query::{Query, QueryError};
pub use window::CohortWindow;
