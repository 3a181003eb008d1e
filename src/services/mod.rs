pub mod dataset;
pub mod location;
pub mod matcher;
pub mod providers;
pub mod season;
pub mod suggestion;

pub use dataset::{load_dataset, ColumnFilter};
pub use matcher::{choose_outfit, find_outfits, MatchCriteria, MatchMode};
pub use providers::{IpInfoProvider, LocationProvider, OpenWeatherProvider, WeatherProvider};
