//! Errores del crate.
//!
//! Solo la síntesis de eventos puede fallar. Los guards de la máquina de
//! estados no son errores: ignoran el evento y lo reportan como
//! [`Outcome::Ignored`](crate::Outcome::Ignored).

use thiserror::Error;

/// Falla de una [`MouseEventFactory`](crate::MouseEventFactory) al construir un evento.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstructError {
    /// El host no ofrece este camino de construcción.
    #[error("construcción no soportada: {0}")]
    Unsupported(String),

    /// El host rechazó los valores del evento.
    #[error("construcción rechazada: {0}")]
    Rejected(String),
}

/// Errores de una llamada a [`synthesize`](crate::synthesize).
///
/// Afectan solo al evento de esa llamada; el estado de la interacción no se toca.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SynthesisError {
    /// El evento de origen no tiene `target` ni `src_element`.
    #[error("el evento de origen no tiene elemento destino")]
    MissingTarget,

    /// Fallaron tanto el constructor moderno como la fábrica legada.
    #[error("no se pudo construir el evento de mouse (moderno: {modern}; legado: {legacy})")]
    Construction {
        modern: ConstructError,
        legacy: ConstructError,
    },
}

/// Alias de resultado para la síntesis.
pub type SynthesisResult<T> = Result<T, SynthesisError>;
