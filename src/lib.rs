pub mod catalog;
pub mod commands;
pub mod constants;
pub mod easing;
pub mod particles;
pub mod reveal;
pub mod scene;
pub mod timeline;
pub mod timer;
pub mod transport;

pub use catalog::*;
pub use commands::*;
pub use particles::*;
pub use reveal::*;
pub use scene::*;
pub use timeline::*;
pub use timer::*;
pub use transport::*;
