pub mod history;
pub mod quotes;
