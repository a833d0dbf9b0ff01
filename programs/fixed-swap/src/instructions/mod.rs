pub mod add_liquidity;
pub mod initialize;
pub mod set_price;
pub mod swap;

pub use add_liquidity::*;
pub use initialize::*;
pub use set_price::*;
pub use swap::*;
