pub mod entities;
pub mod resolver;
