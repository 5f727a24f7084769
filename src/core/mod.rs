pub mod classifier;
pub mod generator;
pub mod palindrome;
pub mod search;

pub use crate::domain::model::{PalindromeMatch, PriceResults, VolumeKind};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
pub use search::PalindromeSearch;
