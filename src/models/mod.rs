pub mod bit_string;
pub mod mode;
pub mod request;
pub mod version;

pub use bit_string::BitString;
pub use mode::Mode;
pub use request::{EncodeRequest, Payload};
pub use version::{EcLevel, Version};
