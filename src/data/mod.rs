pub mod bundle;
pub mod period;

pub use bundle::InputBundle;
pub use period::{Period, parse_period};
