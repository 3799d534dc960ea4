pub mod aside;
pub mod speaker;

pub use aside::Aside;
pub use speaker::{SpeakerMatch, SpeakerTag};
