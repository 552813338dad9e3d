pub mod background;
pub mod collision;
pub mod movement;
pub mod scoring;
pub mod spawner;

pub use background::*;
pub use collision::*;
pub use movement::*;
pub use scoring::*;
pub use spawner::*;
