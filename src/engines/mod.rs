pub mod flora;
pub mod genetics;
pub mod spatial;
