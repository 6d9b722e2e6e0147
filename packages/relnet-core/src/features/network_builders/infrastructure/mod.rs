//! Concrete builders

mod search_website;
mod units;
mod website_concept;
mod website_keyword;
mod website_ner;

pub use search_website::SearchWebsiteBuilder;
pub use website_concept::WebsiteConceptBuilder;
pub use website_keyword::WebsiteKeywordBuilder;
pub use website_ner::WebsiteNerBuilder;
