mod classification;
mod device_type;

pub use classification::*;
pub use device_type::*;
