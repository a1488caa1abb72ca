pub mod hemisphere;
pub mod sampler;
pub mod unit_ball;
pub mod unit_vector;

pub use sampler::{Sampler, SamplerKind};
