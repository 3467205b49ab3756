pub mod enrichment;
pub mod providers;
pub mod recommendations;
pub mod recommender;

pub use enrichment::{DetailEnricher, Enrichment};
pub use providers::{MovieDetailsProvider, TmdbProvider};
pub use recommender::Recommender;
