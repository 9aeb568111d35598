pub mod collision;
pub mod evaluate;
pub mod query;
