pub mod dice;
pub use dice::*;

pub mod script;
pub use script::*;

pub mod source;
pub use source::*;
