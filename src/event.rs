//! Tipos de valor compartidos por todo el crate: clases de evento crudo,
//! clases de evento de mouse sintetizado, coordenadas y modificadores.

use std::fmt;
use std::sync::Arc;

/// Tipo de puntero reportado por un evento de la API unificada de punteros.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
    Unknown,
}

impl PointerKind {
    /// Traduce el atributo textual `pointerType` del host.
    pub fn from_pointer_type(value: &str) -> Self {
        match value {
            "mouse" => PointerKind::Mouse,
            "touch" => PointerKind::Touch,
            "pen" => PointerKind::Pen,
            _ => PointerKind::Unknown,
        }
    }

    pub fn is_touch(self) -> bool {
        self == PointerKind::Touch
    }
}

/// Fase de una interacción a la que pertenece un evento crudo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InteractionPhase {
    Start,
    Move,
    End,
}

/// Eventos crudos que el binder registra sobre el elemento raíz del widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RawEventKind {
    PointerDown,
    PointerMove,
    PointerUp,
    PointerCancel,
    TouchStart,
    TouchMove,
    TouchEnd,
    TouchCancel,
}

impl RawEventKind {
    /// Nombre del evento tal como lo conoce el host.
    pub fn as_str(self) -> &'static str {
        match self {
            RawEventKind::PointerDown => "pointerdown",
            RawEventKind::PointerMove => "pointermove",
            RawEventKind::PointerUp => "pointerup",
            RawEventKind::PointerCancel => "pointercancel",
            RawEventKind::TouchStart => "touchstart",
            RawEventKind::TouchMove => "touchmove",
            RawEventKind::TouchEnd => "touchend",
            RawEventKind::TouchCancel => "touchcancel",
        }
    }

    /// Fase de la interacción que dispara este evento. Cancel cuenta como fin.
    ///
    /// El binder la usa para elegir el listener de cada evento registrado.
    pub fn phase(self) -> InteractionPhase {
        match self {
            RawEventKind::PointerDown | RawEventKind::TouchStart => InteractionPhase::Start,
            RawEventKind::PointerMove | RawEventKind::TouchMove => InteractionPhase::Move,
            RawEventKind::PointerUp
            | RawEventKind::PointerCancel
            | RawEventKind::TouchEnd
            | RawEventKind::TouchCancel => InteractionPhase::End,
        }
    }
}

impl fmt::Display for RawEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Eventos de mouse que el sintetizador sabe construir.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseEventKind {
    MouseOver,
    MouseMove,
    MouseDown,
    MouseUp,
    MouseOut,
    Click,
}

impl MouseEventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MouseEventKind::MouseOver => "mouseover",
            MouseEventKind::MouseMove => "mousemove",
            MouseEventKind::MouseDown => "mousedown",
            MouseEventKind::MouseUp => "mouseup",
            MouseEventKind::MouseOut => "mouseout",
            MouseEventKind::Click => "click",
        }
    }
}

impl fmt::Display for MouseEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Teclas modificadoras activas durante un evento.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

/// Coordenadas de un punto de contacto (o del propio evento de puntero).
///
/// Los hosts que no reportan alguna coordenada la dejan en `0.0`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TouchPoint {
    pub screen_x: f64,
    pub screen_y: f64,
    pub client_x: f64,
    pub client_y: f64,
}

impl TouchPoint {
    /// Punto con las mismas coordenadas de pantalla y de cliente.
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            screen_x: x,
            screen_y: y,
            client_x: x,
            client_y: y,
        }
    }
}

/// Descriptor del evento de mouse sintetizado.
///
/// Es un valor transitorio: se arma en cada llamada a [`synthesize`](crate::synthesize)
/// y se entrega a la [`MouseEventFactory`](crate::MouseEventFactory) del host, que
/// lo convierte en su evento nativo. Ambos caminos de construcción (moderno y
/// legado) reciben exactamente los mismos valores.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MouseEventInit {
    pub kind: MouseEventKind,
    pub bubbles: bool,
    pub cancelable: bool,
    pub detail: i32,
    pub screen_x: f64,
    pub screen_y: f64,
    pub client_x: f64,
    pub client_y: f64,
    pub modifiers: Modifiers,
    /// Botón primario.
    pub button: i16,
    /// Siempre `false`: los eventos sintetizados no llevan `relatedTarget`.
    pub has_related_target: bool,
}

impl MouseEventInit {
    pub fn new(kind: MouseEventKind, point: TouchPoint, modifiers: Modifiers) -> Self {
        Self {
            kind,
            bubbles: true,
            cancelable: true,
            detail: 1,
            screen_x: point.screen_x,
            screen_y: point.screen_y,
            client_x: point.client_x,
            client_y: point.client_y,
            modifiers,
            button: 0,
            has_related_target: false,
        }
    }
}

/// Opciones con las que se registran los listeners crudos.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerOptions {
    pub capture: bool,
    pub passive: bool,
}

impl ListenerOptions {
    /// Fase de burbuja y no pasivo: `prevent_default()` dentro del listener
    /// tiene efecto sobre el scroll y la selección nativos.
    pub const NON_PASSIVE: ListenerOptions = ListenerOptions {
        capture: false,
        passive: false,
    };
}

/// Listener de eventos crudos. Se comparan por identidad (`Arc::ptr_eq`) al removerlos.
pub type Listener<E> = Arc<dyn Fn(&E) + Send + Sync>;
