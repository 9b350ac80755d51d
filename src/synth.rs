//! Síntesis de eventos de mouse a partir de eventos de toque o de puntero.

use tracing::debug;

use crate::error::{SynthesisError, SynthesisResult};
use crate::event::{MouseEventInit, MouseEventKind};
use crate::traits::{DispatchTarget, MouseEventFactory, RawInputEventExt};

/// Tipo de evento de mouse nativo asociado al destino de un evento crudo.
pub type NativeMouseEvent<E> = <<E as RawInputEventExt>::Target as DispatchTarget>::MouseEvent;

/// Arma el descriptor del evento de mouse equivalente a `source`.
///
/// Las coordenadas salen del primer contacto cambiado si el evento trae uno;
/// si no, del propio evento.
pub fn describe<E: RawInputEventExt>(source: &E, kind: MouseEventKind) -> MouseEventInit {
    let point = source.first_changed_touch().unwrap_or_else(|| source.point());
    MouseEventInit::new(kind, point, source.modifiers())
}

/// Construye y despacha sincrónicamente un evento de mouse `kind` equivalente a `source`.
///
/// Suprime la acción por defecto de `source` antes de construir. Si el
/// constructor moderno de la fábrica falla se reintenta con el legado; si ambos
/// fallan el evento se pierde y se retorna [`SynthesisError::Construction`].
pub fn synthesize<E, F>(factory: &F, source: &E, kind: MouseEventKind) -> SynthesisResult<()>
where
    E: RawInputEventExt,
    F: MouseEventFactory<NativeMouseEvent<E>> + ?Sized,
{
    let init = describe(source, kind);

    source.prevent_default();

    let event = match factory.construct(&init) {
        Ok(event) => event,
        Err(modern) => {
            debug!(%kind, error = %modern, "constructor moderno falló, usando fábrica legada");
            factory
                .construct_legacy(&init)
                .map_err(|legacy| SynthesisError::Construction { modern, legacy })?
        }
    };

    let target = source
        .target()
        .or_else(|| source.src_element())
        .ok_or(SynthesisError::MissingTarget)?;

    target.dispatch_event(event);
    Ok(())
}
