pub mod store_key;
pub mod validated_json;

pub use store_key::{MatchRef, PlayerId};
pub use validated_json::ValidatedJson;
