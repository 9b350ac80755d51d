//! Ciclo de vida: registra y retira los listeners crudos alrededor de la
//! inicialización y destrucción originales del widget.

use std::sync::{Arc, Weak};

use tracing::debug;

use crate::capabilities::BindingMode;
use crate::event::{InteractionPhase, Listener, ListenerOptions, RawEventKind};
use crate::interaction::{InteractionContext, TouchHandlers, WidgetInteractionState};
use crate::sync::Lock;
use crate::synth::NativeMouseEvent;
use crate::traits::{ListenerHost, MouseEventFactory, MouseWidgetExt};

/// Listeners exactos que se agregaron al elemento y el modo con que se agregaron.
pub struct BoundListenerSet<E> {
    mode: BindingMode,
    on_start: Listener<E>,
    on_move: Listener<E>,
    on_end: Listener<E>,
}

impl<E> BoundListenerSet<E> {
    pub fn mode(&self) -> BindingMode {
        self.mode
    }

    /// Listener que atiende `kind` según su fase; fin y cancelación comparten listener.
    pub fn listener_for(&self, kind: RawEventKind) -> &Listener<E> {
        match kind.phase() {
            InteractionPhase::Start => &self.on_start,
            InteractionPhase::Move => &self.on_move,
            InteractionPhase::End => &self.on_end,
        }
    }

    /// Pares evento/listener del modo, en el orden de [`BindingMode::kinds`].
    pub fn entries(&self) -> [(RawEventKind, &Listener<E>); 4] {
        self.mode.kinds().map(|kind| (kind, self.listener_for(kind)))
    }
}

impl<E> std::fmt::Debug for BoundListenerSet<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundListenerSet").field("mode", &self.mode).finish_non_exhaustive()
    }
}

/// # `TouchMouse`
///
/// Envoltorio de un widget de mouse que le agrega soporte táctil.
///
/// No reemplaza nada del widget: en [`init`](Self::init) registra los cuatro
/// listeners crudos del modo detectado y después llama a
/// [`MouseWidgetExt::mouse_init`]; en [`destroy`](Self::destroy) los retira y
/// llama a [`MouseWidgetExt::mouse_destroy`]. Si el host no tiene entrada
/// táctil, ambos métodos solo delegan.
///
/// ## Ejemplo
///
/// ```rust,ignore
/// let context = InteractionContext::new(&BrowserProbe, BrowserMouseEvents);
///
/// let mut slider = TouchMouse::new(Slider::new(element), &context);
/// let mut sortable = TouchMouse::new(Sortable::new(other), &context);
/// slider.init();
/// sortable.init();
/// // ... un solo arrastre táctil a la vez entre ambos ...
/// slider.destroy();
/// ```
///
/// ## Reentrada
///
/// El widget vive detrás de un lock que los listeners toman para consultar el
/// predicado de captura. El host no debe despachar eventos crudos desde
/// dentro de [`with_widget`](Self::with_widget).
///
/// Los listeners solo guardan una referencia débil al widget: soltar el
/// envoltorio sin `destroy` libera el widget y los listeners que queden en el
/// elemento rechazan cualquier captura nueva.
pub struct TouchMouse<W, F>
where
    W: MouseWidgetExt,
{
    widget: Arc<Lock<W>>,
    handlers: TouchHandlers<F>,
    bound: Option<BoundListenerSet<W::Event>>,
}

impl<W, F> TouchMouse<W, F>
where
    W: MouseWidgetExt + Send + 'static,
    F: MouseEventFactory<NativeMouseEvent<W::Event>> + Send + Sync + 'static,
{
    pub fn new(widget: W, context: &InteractionContext<F>) -> Self {
        let state = context.register_widget();
        Self {
            widget: Arc::new(Lock::new(widget)),
            handlers: TouchHandlers::new(context.clone(), state),
            bound: None,
        }
    }

    /// Registra los listeners crudos y ejecuta la inicialización original.
    ///
    /// Llamarlo de nuevo sin `destroy` reemplaza los listeners anteriores.
    pub fn init(&mut self) {
        self.unbind();

        if let Some(mode) = self.handlers.context().capabilities().binding_mode() {
            let set = self.listeners(mode);
            {
                let widget = self.widget.lock();
                for (kind, listener) in set.entries() {
                    widget.element().add_event_listener(
                        kind,
                        Arc::clone(listener),
                        ListenerOptions::NON_PASSIVE,
                    );
                }
            }
            debug!(widget = self.id(), ?mode, "listeners táctiles registrados");
            self.bound = Some(set);
        }

        self.widget.lock().mouse_init();
    }

    /// Retira los listeners registrados y ejecuta la destrucción original.
    pub fn destroy(&mut self) {
        self.unbind();
        self.widget.lock().mouse_destroy();
    }

    /// Acceso al widget envuelto.
    pub fn with_widget<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        f(&mut self.widget.lock())
    }

    pub fn is_bound(&self) -> bool {
        self.bound.is_some()
    }

    pub fn bound_mode(&self) -> Option<BindingMode> {
        self.bound.as_ref().map(BoundListenerSet::mode)
    }

    pub fn context(&self) -> &InteractionContext<F> {
        self.handlers.context()
    }

    pub fn interaction_state(&self) -> &Arc<WidgetInteractionState> {
        self.handlers.state()
    }

    fn id(&self) -> u64 {
        self.handlers.state().id()
    }

    fn listeners(&self, mode: BindingMode) -> BoundListenerSet<W::Event> {
        let start = self.handlers.clone();
        let widget: Weak<Lock<W>> = Arc::downgrade(&self.widget);
        let on_start: Listener<W::Event> = Arc::new(move |event: &W::Event| {
            start.on_start(event, |point| {
                widget
                    .upgrade()
                    .is_some_and(|widget| widget.lock().mouse_capture(point))
            });
        });

        let motion = self.handlers.clone();
        let on_move: Listener<W::Event> = Arc::new(move |event: &W::Event| {
            motion.on_move(event);
        });

        let end = self.handlers.clone();
        let on_end: Listener<W::Event> = Arc::new(move |event: &W::Event| {
            end.on_end(event);
        });

        BoundListenerSet {
            mode,
            on_start,
            on_move,
            on_end,
        }
    }

    fn unbind(&mut self) {
        let Some(set) = self.bound.take() else {
            return;
        };
        let widget = self.widget.lock();
        for (kind, listener) in set.entries() {
            widget
                .element()
                .remove_event_listener(kind, listener, ListenerOptions::NON_PASSIVE);
        }
        debug!(widget = self.id(), mode = ?set.mode, "listeners táctiles retirados");
    }
}

impl<W, F> std::fmt::Debug for TouchMouse<W, F>
where
    W: MouseWidgetExt,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TouchMouse")
            .field("widget", &self.handlers.state().id())
            .field("bound", &self.bound)
            .finish()
    }
}
