pub mod node;
pub mod object;
pub mod value;

pub use node::{Member, MemberCategory, Node};
pub use object::{CallableValue, Introspectable, ObjectValue};
pub use value::{SharedValue, Value};
