pub mod error;
pub mod executor;
pub mod probe;
pub mod resolver;

pub use error::*;
pub use executor::*;
pub use probe::*;
pub use resolver::*;
