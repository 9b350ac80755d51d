//! Detección de capacidades de entrada del host.

use crate::event::RawEventKind;
use crate::traits::EnvironmentProbe;

/// Capacidades de entrada del host, calculadas una sola vez.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InputCapabilities {
    pub has_unified_pointer_events: bool,
    pub has_touch_like_input: bool,
}

impl InputCapabilities {
    /// Consulta las sondas del host.
    ///
    /// La API unificada de punteros implica entrada táctil posible; en ese caso
    /// las demás sondas no se consultan.
    pub fn detect<P: EnvironmentProbe + ?Sized>(probe: &P) -> Self {
        let has_unified_pointer_events = probe.has_pointer_event_api();
        let has_touch_like_input = has_unified_pointer_events
            || probe.supports_touch_start()
            || probe.is_touch_document();

        Self {
            has_unified_pointer_events,
            has_touch_like_input,
        }
    }

    /// Modo de binding a usar, o `None` si el crate debe quedar inerte.
    pub fn binding_mode(&self) -> Option<BindingMode> {
        if !self.has_touch_like_input {
            None
        } else if self.has_unified_pointer_events {
            Some(BindingMode::Pointer)
        } else {
            Some(BindingMode::Touch)
        }
    }
}

/// Familia de eventos crudos que se registra sobre el elemento del widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BindingMode {
    /// `pointerdown`, `pointermove`, `pointerup`, `pointercancel`.
    Pointer,
    /// `touchstart`, `touchmove`, `touchend`, `touchcancel`.
    Touch,
}

impl BindingMode {
    /// Los cuatro eventos del modo, en orden inicio, movimiento, fin, cancelación.
    pub fn kinds(self) -> [RawEventKind; 4] {
        match self {
            BindingMode::Pointer => [
                RawEventKind::PointerDown,
                RawEventKind::PointerMove,
                RawEventKind::PointerUp,
                RawEventKind::PointerCancel,
            ],
            BindingMode::Touch => [
                RawEventKind::TouchStart,
                RawEventKind::TouchMove,
                RawEventKind::TouchEnd,
                RawEventKind::TouchCancel,
            ],
        }
    }
}
