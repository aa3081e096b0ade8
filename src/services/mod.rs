pub mod aggregator;
pub mod contact;
pub mod providers;
pub mod query_builder;
pub mod recommendations;
pub mod seed;
pub mod selection;
pub mod session;

pub use providers::{BookProvider, GoogleBooksProvider, SearchRequest};
pub use recommendations::RecommendationFetcher;
pub use session::RequestSession;
