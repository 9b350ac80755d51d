use crate::event::TouchPoint;
use crate::traits::events::{ListenerHost, RawInputEventExt};

/// # Trait `MouseWidgetExt`
///
/// Contrato del **widget de arrastre** que solo entiende eventos de mouse.
///
/// El widget es un colaborador externo: el crate nunca reemplaza su manejo de
/// mouse, solo lo envuelve con [`TouchMouse`](crate::TouchMouse), que registra
/// los listeners crudos alrededor de `mouse_init` y `mouse_destroy`.
///
/// ```text
/// TouchMouse::init()              TouchMouse::destroy()
///   ├─ bind pointer/touch           ├─ unbind pointer/touch
///   └─ widget.mouse_init()          └─ widget.mouse_destroy()
/// ```
pub trait MouseWidgetExt {
    /// Evento crudo que recibe el elemento raíz.
    type Event: RawInputEventExt + 'static;

    /// Elemento raíz del widget.
    type Element: ListenerHost<Self::Event>;

    fn element(&self) -> &Self::Element;

    /// Predicado de captura: decide si el widget quiere manejar una
    /// interacción que empieza en `point`.
    ///
    /// Se llama desde el listener de inicio con el lock del widget tomado:
    /// la implementación no debe despachar eventos crudos ni volver a entrar
    /// en el [`TouchMouse`](crate::TouchMouse) que la envuelve.
    fn mouse_capture(&self, point: &TouchPoint) -> bool;

    /// Inicialización original del widget (sus bindings de mouse nativos).
    fn mouse_init(&mut self);

    /// Destrucción original del widget.
    fn mouse_destroy(&mut self);
}
