//! Price history providers and the sector universe

pub mod period;
pub mod provider;
pub mod symbol;
pub mod synthetic;
pub mod universe;
pub mod yahoo;

pub use period::Period;
pub use provider::{
    CompanyProfile, DataError, DataSource, PriceBar, PriceHistory, PriceProvider,
};
pub use synthetic::SyntheticProvider;
pub use universe::{SectorMatch, SectorSummary, Universe};
pub use yahoo::YahooProvider;
