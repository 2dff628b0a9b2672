pub mod merge;
pub mod simple;
pub mod split;
