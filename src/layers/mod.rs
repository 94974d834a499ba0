pub mod animation;
pub mod filter;
pub mod marker;
pub mod scene;
