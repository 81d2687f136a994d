pub mod similarity_to_percent;
pub mod sort_ranked_matches;

pub use similarity_to_percent::similarity_to_percent;
pub use sort_ranked_matches::sort_ranked_matches;
