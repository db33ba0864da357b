pub mod prelude;

pub mod facts;
pub mod painting_aliases;
pub mod paintings;
