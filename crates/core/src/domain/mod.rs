pub mod market;
pub mod notification;
pub mod portfolio;
pub mod recommendation;
