//! # Crate `orbit_touch_mouse`
//!
//! **Traducción de entrada táctil a eventos de mouse** para widgets de Orbit Engine
//! que solo entienden secuencias de mouse (`mousedown`, `mousemove`, `mouseup`,
//! `mouseover`, `mouseout`, `click`).
//!
//! Un widget de arrastre escrito contra eventos de mouse no reacciona en una
//! pantalla táctil. Este crate escucha los eventos crudos de toque o de puntero
//! sobre el elemento raíz del widget y sintetiza los eventos de mouse
//! equivalentes, que el propio widget recibe por sus bindings nativos.
//!
//! ---
//!
//! ## Flujo de un evento
//!
//! ```text
//! touchstart / pointerdown
//!        │
//!        ▼
//! ┌──────────────┐   ┌──────────────────┐   ┌──────────────┐   ┌──────────────┐
//! │ TouchMouse   │ → │ TouchHandlers    │ → │ synthesize() │ → │ listeners de │
//! │ (listener)   │   │ (IDLE / ACTIVE)  │   │ (+ factory)  │   │ mouse (host) │
//! └──────────────┘   └──────────────────┘   └──────────────┘   └──────────────┘
//! ```
//!
//! | Entrada            | Eventos sintetizados                     |
//! |--------------------|------------------------------------------|
//! | inicio             | `mouseover`, `mousemove`, `mousedown`    |
//! | movimiento         | `mousemove`                              |
//! | fin / cancelación  | `mouseup`, `mouseout` [, `click`]        |
//!
//! El `click` solo se emite si no hubo ningún movimiento entre inicio y fin.
//!
//! ---
//!
//! ## Qué implementa el host
//!
//! Igual que el resto de crates `orbit_*`, este crate no conoce la plataforma:
//! el host provee los tipos concretos a través de traits.
//!
//! - [`RawInputEventExt`]: evento crudo de toque o de puntero
//! - [`DispatchTarget`] y [`ListenerHost`]: el elemento del widget
//! - [`MouseEventFactory`]: construcción del evento de mouse nativo (moderna y legada)
//! - [`EnvironmentProbe`]: detección de capacidades
//! - [`MouseWidgetExt`]: el widget de mouse envuelto
//!
//! ## Ejemplo
//!
//! ```rust,ignore
//! use orbit_touch_mouse::{InteractionContext, TouchMouse};
//!
//! // Una vez por página: detecta capacidades y crea el estado compartido.
//! let context = InteractionContext::new(&BrowserProbe, BrowserMouseEvents);
//!
//! let mut draggable = TouchMouse::new(Draggable::new(element), &context);
//! draggable.init();
//! // ...
//! draggable.destroy();
//! ```
//!
//! ---
//!
//! ## Reglas
//!
//! - 🔒 **Una sola interacción a la vez** entre todos los widgets que comparten un
//!   [`InteractionContext`].
//! - ✋ **Sin multi-touch**: eventos táctiles con dos o más contactos se ignoran.
//! - 🖱️ Los eventos de puntero de mouse o lápiz pasan intactos al manejo nativo.
//! - 💤 Sin entrada táctil el crate queda inerte: no registra ningún listener.
//!
//! ## Features
//!
//! - `std_lock` (default): estado compartido protegido con `std::sync::Mutex`.
//! - `parking_lot`: usa `parking_lot::Mutex`.
//!
//! ## Logging
//!
//! El crate emite eventos [`tracing`] (`trace` para eventos ignorados, `debug`
//! para capacidades y bindings, `warn` para eventos de mouse perdidos). No
//! instala ningún subscriber.

pub mod binder;
pub mod capabilities;
pub mod error;
pub mod event;
pub mod interaction;
mod sync;
pub mod synth;
pub mod traits;

// Re-exports limpios
pub use traits::*;

pub use binder::{BoundListenerSet, TouchMouse};
pub use capabilities::{BindingMode, InputCapabilities};
pub use error::{ConstructError, SynthesisError, SynthesisResult};
pub use event::{
    InteractionPhase, Listener, ListenerOptions, Modifiers, MouseEventInit, MouseEventKind,
    PointerKind, RawEventKind, TouchPoint,
};
pub use interaction::{IgnoreReason, InteractionContext, Outcome, TouchHandlers, WidgetInteractionState};
pub use synth::{NativeMouseEvent, describe, synthesize};
