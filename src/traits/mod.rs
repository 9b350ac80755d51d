//! Traits que el host implementa para conectar el crate con su runtime de eventos.

pub mod environment;
pub mod events;
pub mod factory;
pub mod widget;

pub use environment::EnvironmentProbe;
pub use events::{DispatchTarget, ListenerHost, RawInputEventExt};
pub use factory::MouseEventFactory;
pub use widget::MouseWidgetExt;
