//! Text cleaning and sentence segmentation.

pub mod normalize;
pub mod sentence;

pub use normalize::normalize;
pub use sentence::split_sentences;
