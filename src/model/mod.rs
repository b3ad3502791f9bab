pub mod level;
pub mod node;
pub mod outline;

pub use level::*;
pub use node::*;
pub use outline::*;
