pub mod dragdrop;
pub mod pointer;

pub use dragdrop::wire_drag_and_drop;
pub use pointer::wire_pointer_handlers;
