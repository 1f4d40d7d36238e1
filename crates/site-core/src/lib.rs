pub mod constants;
pub mod error;
pub mod nav;
pub mod particles;
pub mod sections;

pub use constants::*;
pub use error::*;
pub use nav::*;
pub use particles::*;
pub use sections::*;
