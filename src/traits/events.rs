use crate::event::{Listener, ListenerOptions, Modifiers, PointerKind, RawEventKind, TouchPoint};

/// # Trait `RawInputEventExt`
///
/// Vista de solo lectura sobre un **evento crudo de toque o de puntero** del host.
///
/// El mismo tipo cubre ambos modos de entrada; cada modo rellena lo que le
/// corresponde y deja el resto vacío:
///
/// | Dato                    | Pointer Events         | Touch Events              |
/// |-------------------------|------------------------|---------------------------|
/// | `pointer_type()`        | `Some(kind)`           | `None`                    |
/// | `touch_count()`         | `None`                 | `Some(touches.length)`    |
/// | `first_changed_touch()` | `None`                 | `Some(changedTouches[0])` |
/// | `point()`               | coordenadas del evento | coordenadas del evento    |
///
/// ## Ejemplo de implementación (conceptual)
///
/// ```rust,ignore
/// impl RawInputEventExt for web_sys::PointerEvent {
///     type Target = HostElement;
///
///     fn pointer_type(&self) -> Option<PointerKind> {
///         Some(PointerKind::from_pointer_type(&self.pointer_type()))
///     }
///     fn touch_count(&self) -> Option<usize> { None }
///     fn first_changed_touch(&self) -> Option<TouchPoint> { None }
///     // ...
/// }
/// ```
pub trait RawInputEventExt {
    /// Elemento sobre el que se despacha el evento de mouse sintetizado.
    type Target: DispatchTarget;

    /// Tipo de puntero, solo presente en eventos de la API unificada.
    fn pointer_type(&self) -> Option<PointerKind>;

    /// Cantidad de contactos simultáneos (`touches`), solo en eventos táctiles clásicos.
    fn touch_count(&self) -> Option<usize>;

    /// Primer contacto de la lista `changedTouches`, si existe y no está vacía.
    fn first_changed_touch(&self) -> Option<TouchPoint>;

    /// Coordenadas que el evento lleva directamente.
    fn point(&self) -> TouchPoint;

    /// Teclas modificadoras activas.
    fn modifiers(&self) -> Modifiers;

    /// Suprime la acción por defecto del host (scroll, selección, zoom).
    ///
    /// Solo tiene efecto porque los listeners se registran con
    /// [`ListenerOptions::NON_PASSIVE`].
    fn prevent_default(&self);

    /// Elemento destino del evento.
    fn target(&self) -> Option<Self::Target>;

    /// Destino alternativo de hosts antiguos (`srcElement`).
    ///
    /// Se consulta únicamente cuando [`target`](Self::target) devuelve `None`.
    fn src_element(&self) -> Option<Self::Target> {
        None
    }

    /// Coordenadas que se entregan al predicado de captura del widget.
    ///
    /// Con eventos de puntero son las del propio evento; con eventos táctiles,
    /// las del primer contacto cambiado, o las del evento si la lista está vacía.
    fn capture_point(&self) -> TouchPoint {
        match self.pointer_type() {
            Some(_) => self.point(),
            None => self.first_changed_touch().unwrap_or_else(|| self.point()),
        }
    }
}

/// # Trait `DispatchTarget`
///
/// Elemento capaz de **despachar sincrónicamente** un evento de mouse nativo.
///
/// Los listeners de mouse que el host tenga en ese subárbol (incluidos los del
/// propio widget) deben ejecutarse antes de que `dispatch_event` retorne.
pub trait DispatchTarget {
    /// Evento de mouse nativo del host.
    type MouseEvent;

    /// Despacha el evento. Retorna `false` si algún listener lo canceló.
    fn dispatch_event(&self, event: Self::MouseEvent) -> bool;
}

/// # Trait `ListenerHost`
///
/// Elemento que acepta **listeners crudos** de toque o de puntero.
///
/// La remoción debe comparar listeners por identidad (`Arc::ptr_eq`) y por la
/// fase de captura, igual que `removeEventListener` en un DOM.
pub trait ListenerHost<E> {
    fn add_event_listener(&self, kind: RawEventKind, listener: Listener<E>, options: ListenerOptions);

    fn remove_event_listener(&self, kind: RawEventKind, listener: &Listener<E>, options: ListenerOptions);
}
