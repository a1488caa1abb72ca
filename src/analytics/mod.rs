pub mod density;
pub mod reference;
