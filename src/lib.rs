mod commons;
mod decode;
mod encode;
mod error;
mod value;

pub use commons::*;
pub use decode::*;
pub use encode::*;
pub use error::*;
pub use value::*;

pub type BdecodeResult<T> = std::result::Result<T, BdecodeError>;
