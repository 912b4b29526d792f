// Career quiz: fixed questions, answer collection, and weighted match ranking.

pub mod answers;
pub mod handlers;
pub mod questions;
pub mod scoring;
pub mod session;
