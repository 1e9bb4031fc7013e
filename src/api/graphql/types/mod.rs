mod currency;
mod inputs;
mod money;
mod wallet;

pub use currency::*;
pub use inputs::*;
pub use money::*;
pub use wallet::*;
