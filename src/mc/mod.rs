pub mod histogram;
pub mod mc_engine;
