use crate::error::ConstructError;
use crate::event::MouseEventInit;

/// # Trait `MouseEventFactory`
///
/// Convierte un [`MouseEventInit`] en el **evento de mouse nativo** del host.
///
/// Los hosts modernos construyen eventos con un constructor tipado
/// (`new MouseEvent(type, init)`); los antiguos solo ofrecen una fábrica de
/// estilo `createEvent` + `initMouseEvent`. El sintetizador siempre intenta
/// primero [`construct`](Self::construct) y, si falla, reintenta con
/// [`construct_legacy`](Self::construct_legacy) usando los mismos valores.
///
/// ```text
/// MouseEventInit ──► construct() ──ok──► M
///                        │
///                       err
///                        ▼
///                construct_legacy() ──ok──► M
///                        │
///                       err ──► SynthesisError::Construction
/// ```
///
/// ## Reglas de implementación
/// - Ambos caminos deben producir eventos indistinguibles para el receptor.
/// - Ninguno debe despachar el evento: eso lo hace el sintetizador.
pub trait MouseEventFactory<M> {
    /// Camino moderno.
    fn construct(&self, init: &MouseEventInit) -> Result<M, ConstructError>;

    /// Camino legado. Por defecto el host no lo ofrece.
    fn construct_legacy(&self, init: &MouseEventInit) -> Result<M, ConstructError> {
        Err(ConstructError::Unsupported(format!(
            "{} sin fábrica legada",
            init.kind
        )))
    }
}
