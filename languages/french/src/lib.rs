pub mod capitalizer;
pub mod classifier;
pub mod geocoder;
pub mod lexicon;
pub mod titler;

pub use geocoder::BanGeocoder;
pub use lexicon::{ElisionPolicy, FrenchLexicon};
pub use titler::FrenchTitleCaser;
