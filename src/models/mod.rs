pub mod material;
pub mod partner;
pub mod user;
