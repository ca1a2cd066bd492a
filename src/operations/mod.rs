pub mod cut;
pub mod probe;
