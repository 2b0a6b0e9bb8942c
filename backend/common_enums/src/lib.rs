pub mod enums;

pub use enums::{Env, MethodCode, OrderStatus, ScopeLevel};
