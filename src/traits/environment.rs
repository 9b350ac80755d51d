/// # Trait `EnvironmentProbe`
///
/// Sondas de **detección de capacidades** del host.
///
/// Se consultan una única vez, al crear el
/// [`InteractionContext`](crate::InteractionContext); el resultado queda fijo en
/// [`InputCapabilities`](crate::InputCapabilities).
///
/// ## Ejemplo (conceptual, navegador)
///
/// ```rust,ignore
/// struct BrowserProbe;
///
/// impl EnvironmentProbe for BrowserProbe {
///     fn has_pointer_event_api(&self) -> bool {
///         js_sys::Reflect::has(&window(), &"PointerEvent".into()).unwrap_or(false)
///     }
///     fn supports_touch_start(&self) -> bool {
///         js_sys::Reflect::has(&window(), &"ontouchstart".into()).unwrap_or(false)
///     }
///     fn is_touch_document(&self) -> bool {
///         false
///     }
/// }
/// ```
pub trait EnvironmentProbe {
    /// El host expone la API unificada de eventos de puntero.
    fn has_pointer_event_api(&self) -> bool;

    /// El host soporta eventos táctiles clásicos (`touchstart`).
    fn supports_touch_start(&self) -> bool;

    /// El documento es de un tipo táctil reconocido por el host (`DocumentTouch`).
    fn is_touch_document(&self) -> bool;
}
