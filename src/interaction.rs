//! Máquina de estados de la interacción táctil.
//!
//! ```text
//!            start (libre + captura aceptada)
//!   IDLE ───────────────────────────────────────► ACTIVE
//!    ▲       over, move, down                       │ │
//!    │                                       move   │ │
//!    │                               (mousemove) ◄──┘ │
//!    │          end / cancel                          │
//!    └────────────────────────────────────────────────┘
//!               up, out [, click si no hubo move]
//! ```
//!
//! El estado `IDLE`/`ACTIVE` vive en un [`InteractionContext`] compartido por
//! todos los widgets que lo reciben: mientras un widget es dueño de la
//! interacción, ningún otro puede empezar la suya.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use tracing::{debug, trace, warn};

use crate::capabilities::InputCapabilities;
use crate::event::{MouseEventKind, PointerKind, TouchPoint};
use crate::sync::Lock;
use crate::synth::{NativeMouseEvent, synthesize};
use crate::traits::{EnvironmentProbe, MouseEventFactory, RawInputEventExt};

enum Phase {
    Idle,
    Active { owner: Arc<WidgetInteractionState> },
}

struct ContextInner<F> {
    capabilities: InputCapabilities,
    factory: F,
    phase: Lock<Phase>,
    next_widget: AtomicU64,
}

/// Contexto compartido: capacidades detectadas, fábrica de eventos del host y
/// dueño actual de la interacción.
///
/// Clonarlo es barato y todos los clones ven el mismo estado.
pub struct InteractionContext<F> {
    inner: Arc<ContextInner<F>>,
}

impl<F> Clone for InteractionContext<F> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<F> std::fmt::Debug for InteractionContext<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InteractionContext")
            .field("capabilities", &self.inner.capabilities)
            .field("owner", &self.owner_id())
            .finish()
    }
}

impl<F> InteractionContext<F> {
    /// Detecta las capacidades del host (una sola vez) y crea el contexto.
    pub fn new<P: EnvironmentProbe + ?Sized>(probe: &P, factory: F) -> Self {
        let capabilities = InputCapabilities::detect(probe);
        debug!(
            pointer = capabilities.has_unified_pointer_events,
            touch = capabilities.has_touch_like_input,
            "capacidades de entrada detectadas"
        );
        Self::with_capabilities(capabilities, factory)
    }

    /// Crea el contexto con capacidades ya resueltas.
    pub fn with_capabilities(capabilities: InputCapabilities, factory: F) -> Self {
        Self {
            inner: Arc::new(ContextInner {
                capabilities,
                factory,
                phase: Lock::new(Phase::Idle),
                next_widget: AtomicU64::new(1),
            }),
        }
    }

    pub fn capabilities(&self) -> InputCapabilities {
        self.inner.capabilities
    }

    pub fn factory(&self) -> &F {
        &self.inner.factory
    }

    /// `true` mientras alguna interacción esté en curso.
    pub fn is_active(&self) -> bool {
        matches!(*self.inner.phase.lock(), Phase::Active { .. })
    }

    /// Identificador del widget dueño de la interacción en curso.
    pub fn owner_id(&self) -> Option<u64> {
        self.owner().map(|owner| owner.id())
    }

    /// Estado por widget para un nuevo participante del contexto.
    pub fn register_widget(&self) -> Arc<WidgetInteractionState> {
        let id = self.inner.next_widget.fetch_add(1, Ordering::Relaxed);
        Arc::new(WidgetInteractionState::new(id))
    }

    fn owner(&self) -> Option<Arc<WidgetInteractionState>> {
        match &*self.inner.phase.lock() {
            Phase::Idle => None,
            Phase::Active { owner } => Some(Arc::clone(owner)),
        }
    }

    fn try_claim(&self, owner: &Arc<WidgetInteractionState>) -> bool {
        let mut phase = self.inner.phase.lock();
        if matches!(*phase, Phase::Active { .. }) {
            return false;
        }
        *phase = Phase::Active {
            owner: Arc::clone(owner),
        };
        true
    }

    fn release(&self) {
        *self.inner.phase.lock() = Phase::Idle;
    }
}

/// Estado de interacción de un widget.
#[derive(Debug)]
pub struct WidgetInteractionState {
    id: u64,
    moved_since_start: AtomicBool,
}

impl WidgetInteractionState {
    fn new(id: u64) -> Self {
        Self {
            id,
            moved_since_start: AtomicBool::new(false),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Hubo al menos un movimiento desde el último inicio.
    pub fn moved_since_start(&self) -> bool {
        self.moved_since_start.load(Ordering::Relaxed)
    }

    fn set_moved(&self, moved: bool) {
        self.moved_since_start.store(moved, Ordering::Relaxed);
    }
}

/// Motivo por el que un evento crudo no produjo nada.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Evento de puntero de mouse, lápiz u otro tipo no táctil.
    NotTouchPointer(PointerKind),
    /// Evento táctil clásico con más de un contacto.
    MultiTouch(usize),
    /// Otro widget ya es dueño de la interacción.
    AlreadyOwned,
    /// El predicado de captura del widget rechazó el punto inicial.
    CaptureRejected,
    /// No hay interacción en curso.
    NotActive,
}

/// Resultado de procesar un evento crudo.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Ignored(IgnoreReason),
    Started,
    Moved,
    Ended { clicked: bool },
}

/// Transiciones de la máquina de estados vistas desde un widget.
pub struct TouchHandlers<F> {
    context: InteractionContext<F>,
    state: Arc<WidgetInteractionState>,
}

impl<F> Clone for TouchHandlers<F> {
    fn clone(&self) -> Self {
        Self {
            context: self.context.clone(),
            state: Arc::clone(&self.state),
        }
    }
}

impl<F> TouchHandlers<F> {
    pub fn new(context: InteractionContext<F>, state: Arc<WidgetInteractionState>) -> Self {
        Self { context, state }
    }

    pub fn context(&self) -> &InteractionContext<F> {
        &self.context
    }

    pub fn state(&self) -> &Arc<WidgetInteractionState> {
        &self.state
    }

    /// Inicio de interacción. `capture` es el predicado de captura del widget.
    pub fn on_start<E, C>(&self, event: &E, capture: C) -> Outcome
    where
        E: RawInputEventExt,
        F: MouseEventFactory<NativeMouseEvent<E>>,
        C: FnOnce(&TouchPoint) -> bool,
    {
        if let Some(reason) = self.filter(event) {
            return self.ignore(reason);
        }
        if self.context.is_active() {
            return self.ignore(IgnoreReason::AlreadyOwned);
        }
        if !capture(&event.capture_point()) {
            return self.ignore(IgnoreReason::CaptureRejected);
        }
        if !self.context.try_claim(&self.state) {
            return self.ignore(IgnoreReason::AlreadyOwned);
        }

        self.state.set_moved(false);
        trace!(widget = self.state.id(), "interacción iniciada");

        self.emit(event, MouseEventKind::MouseOver);
        self.emit(event, MouseEventKind::MouseMove);
        self.emit(event, MouseEventKind::MouseDown);
        Outcome::Started
    }

    /// Movimiento dentro de la interacción en curso.
    pub fn on_move<E>(&self, event: &E) -> Outcome
    where
        E: RawInputEventExt,
        F: MouseEventFactory<NativeMouseEvent<E>>,
    {
        if let Some(reason) = self.filter(event) {
            return self.ignore(reason);
        }
        let Some(owner) = self.context.owner() else {
            return self.ignore(IgnoreReason::NotActive);
        };

        owner.set_moved(true);
        self.emit(event, MouseEventKind::MouseMove);
        Outcome::Moved
    }

    /// Fin o cancelación de la interacción en curso.
    pub fn on_end<E>(&self, event: &E) -> Outcome
    where
        E: RawInputEventExt,
        F: MouseEventFactory<NativeMouseEvent<E>>,
    {
        if let Some(reason) = self.filter(event) {
            return self.ignore(reason);
        }
        let Some(owner) = self.context.owner() else {
            return self.ignore(IgnoreReason::NotActive);
        };

        self.emit(event, MouseEventKind::MouseUp);
        self.emit(event, MouseEventKind::MouseOut);

        // Un toque sin movimiento es un click.
        let clicked = !owner.moved_since_start();
        if clicked {
            self.emit(event, MouseEventKind::Click);
        }

        self.context.release();
        trace!(widget = owner.id(), clicked, "interacción terminada");
        Outcome::Ended { clicked }
    }

    fn filter<E: RawInputEventExt>(&self, event: &E) -> Option<IgnoreReason> {
        if self.context.capabilities().has_unified_pointer_events {
            if let Some(kind) = event.pointer_type() {
                if !kind.is_touch() {
                    return Some(IgnoreReason::NotTouchPointer(kind));
                }
            }
        }
        match event.touch_count() {
            Some(count) if count > 1 => Some(IgnoreReason::MultiTouch(count)),
            _ => None,
        }
    }

    fn ignore(&self, reason: IgnoreReason) -> Outcome {
        trace!(widget = self.state.id(), ?reason, "evento ignorado");
        Outcome::Ignored(reason)
    }

    fn emit<E>(&self, event: &E, kind: MouseEventKind)
    where
        E: RawInputEventExt,
        F: MouseEventFactory<NativeMouseEvent<E>>,
    {
        if let Err(error) = synthesize(self.context.factory(), event, kind) {
            warn!(widget = self.state.id(), %kind, %error, "evento de mouse perdido");
        }
    }
}
