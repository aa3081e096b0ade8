pub mod book;
pub mod contact;
pub mod recommendation;

pub use book::{ApiImageLinks, ApiVolume, ApiVolumeInfo, ApiVolumeList, Book, BookCard};
pub use contact::{ContactForm, ContactReceipt};
pub use recommendation::{
    QueryOutcome, RecommendationOutcome, RecommendationRequest, RecommendationResponse,
    RecommendationStatus, RequestPhase, Seed, FALLBACK_GENRE,
};
