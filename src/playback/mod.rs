pub mod external;
pub mod player;

pub use external::ExternalPlayer;
pub use player::{PlaybackError, Player};
