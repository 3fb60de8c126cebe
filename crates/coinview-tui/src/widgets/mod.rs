//! Custom widget components

mod chart_view;
mod coin_detail;
mod coin_list;
mod header;
mod loader;
mod price_view;

pub use chart_view::ChartView;
pub use coin_detail::CoinDetail;
pub use coin_list::CoinList;
pub use header::{HintSet, MainHeader};
pub use loader::Loader;
pub use price_view::PriceView;
