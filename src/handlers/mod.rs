pub mod pages;
pub mod search;
