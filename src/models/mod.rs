pub mod alias;
pub mod fact;
pub mod painting;
