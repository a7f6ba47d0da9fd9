//! Budget categories backed by a ledger, with a textual report per category and an
//! ASCII bar chart of how spending splits between them.

pub mod category;
pub mod chart;
pub mod data;

pub use category::Category;
pub use chart::render_chart;
pub use data::{Error, Transaction};
