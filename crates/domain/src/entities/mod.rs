pub mod metal;
pub mod price_bar;
pub mod quote;

pub use metal::Metal;
pub use price_bar::PriceBar;
pub use quote::SpotQuote;
