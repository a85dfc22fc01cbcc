pub mod checker;
pub mod config;
pub mod filter;
pub mod model;
pub mod normalizer;
pub mod parser;
pub mod query;
pub mod scraper;
pub mod trigger;
pub mod utils;

pub use checker::AwardChecker;
pub use config::{load_config, AppConfig, CabinClassTables};
pub use model::{FlightPointInfo, FlightSegment, LiveCheckRequest, LiveCheckResponse};
pub use scraper::{Scraper, ScraperImpl};
