//! Registro y retiro de listeners alrededor de la inicialización original.

use std::sync::Arc;

use orbit_touch_mouse::{BindingMode, Listener, ListenerHost, ListenerOptions, RawEventKind, TouchMouse};

use crate::helpers::{
    MockElement, MockEvent, MockWidget, inert_context, pointer_context, touch_context,
};

fn calls_of(widget: &MockWidget) -> Vec<String> {
    widget.calls().lock().unwrap().clone()
}

#[test]
fn no_touch_support_only_delegates() {
    let context = inert_context();
    let element = MockElement::new();
    let mut widget = TouchMouse::new(MockWidget::new(&element), &context);

    widget.init();
    assert!(!widget.is_bound());
    assert_eq!(element.listener_count(), 0);

    widget.destroy();
    assert_eq!(widget.with_widget(|w| calls_of(w)), vec!["init", "destroy"]);
    assert_eq!(element.listener_count(), 0);
}

#[test]
fn touch_mode_binds_four_non_passive_listeners() {
    let context = touch_context();
    let element = MockElement::new();
    let mut widget = TouchMouse::new(MockWidget::new(&element), &context);

    widget.init();

    assert_eq!(widget.bound_mode(), Some(BindingMode::Touch));
    assert_eq!(
        element.listener_kinds(),
        vec![
            RawEventKind::TouchStart,
            RawEventKind::TouchMove,
            RawEventKind::TouchEnd,
            RawEventKind::TouchCancel,
        ]
    );
    assert!(
        element
            .listener_options()
            .iter()
            .all(|o| *o == ListenerOptions::NON_PASSIVE)
    );
    assert_eq!(widget.with_widget(|w| calls_of(w)), vec!["init"]);
}

#[test]
fn pointer_mode_binds_pointer_listeners() {
    let context = pointer_context();
    let element = MockElement::new();
    let mut widget = TouchMouse::new(MockWidget::new(&element), &context);

    widget.init();

    assert_eq!(widget.bound_mode(), Some(BindingMode::Pointer));
    assert_eq!(element.listener_kinds(), BindingMode::Pointer.kinds().to_vec());
}

#[test]
fn destroy_removes_exactly_what_was_added() {
    let context = touch_context();
    let element = MockElement::new();
    let foreign: Listener<MockEvent> = Arc::new(|_: &MockEvent| {});
    element.add_event_listener(RawEventKind::TouchStart, Arc::clone(&foreign), ListenerOptions::NON_PASSIVE);

    let mut widget = TouchMouse::new(MockWidget::new(&element), &context);
    widget.init();
    assert_eq!(element.listener_count(), 5);

    widget.destroy();
    assert!(!widget.is_bound());
    assert_eq!(element.listener_kinds(), vec![RawEventKind::TouchStart]);
    assert_eq!(widget.with_widget(|w| calls_of(w)), vec!["init", "destroy"]);

    // Sin listeners propios, los eventos ya no producen nada.
    element.fire(RawEventKind::TouchStart, &MockEvent::touch(&element, 1.0, 1.0));
    assert!(element.dispatched().is_empty());
    assert!(!context.is_active());
}

#[test]
fn repeated_init_does_not_double_bind() {
    let context = pointer_context();
    let element = MockElement::new();
    let mut widget = TouchMouse::new(MockWidget::new(&element), &context);

    widget.init();
    widget.init();
    assert_eq!(element.listener_count(), 4);
    assert_eq!(widget.with_widget(|w| calls_of(w)), vec!["init", "init"]);
}

#[test]
fn destroy_without_init_only_delegates() {
    let context = touch_context();
    let element = MockElement::new();
    let mut widget = TouchMouse::new(MockWidget::new(&element), &context);

    widget.destroy();
    widget.destroy();
    assert_eq!(widget.with_widget(|w| calls_of(w)), vec!["destroy", "destroy"]);
}

#[test]
fn capture_sees_the_first_changed_touch() {
    let context = touch_context();
    let element = MockElement::new();
    let mut widget = TouchMouse::new(MockWidget::new(&element), &context);
    widget.init();

    element.fire(RawEventKind::TouchStart, &MockEvent::touch(&element, 10.0, 20.0));

    assert_eq!(
        widget.with_widget(|w| calls_of(w)),
        vec!["init", "capture(10,20)"]
    );
}

#[test]
fn rejected_capture_leaves_context_idle() {
    let context = touch_context();
    let rejecting_el = MockElement::new();
    let accepting_el = MockElement::new();
    let mut rejecting = TouchMouse::new(MockWidget::rejecting(&rejecting_el), &context);
    let mut accepting = TouchMouse::new(MockWidget::new(&accepting_el), &context);
    rejecting.init();
    accepting.init();

    let start = MockEvent::touch(&rejecting_el, 1.0, 1.0);
    rejecting_el.fire(RawEventKind::TouchStart, &start);
    assert!(rejecting_el.dispatched().is_empty());
    assert!(!start.was_prevented());
    assert!(!context.is_active());

    accepting_el.fire(RawEventKind::TouchStart, &MockEvent::touch(&accepting_el, 1.0, 1.0));
    assert_eq!(context.owner_id(), Some(accepting.interaction_state().id()));
}

#[test]
fn context_reports_detected_capabilities() {
    let context = pointer_context();
    let caps = context.capabilities();
    assert!(caps.has_unified_pointer_events);
    assert!(caps.has_touch_like_input);

    let element = MockElement::new();
    let widget = TouchMouse::new(MockWidget::new(&element), &context);
    assert_eq!(widget.context().capabilities(), caps);
}

#[test]
fn dropping_without_destroy_frees_the_widget() {
    let context = touch_context();
    let element = MockElement::new();
    let inner = MockWidget::new(&element);
    let calls = inner.calls();

    let mut widget = TouchMouse::new(inner, &context);
    widget.init();
    assert_eq!(Arc::strong_count(&calls), 2);

    drop(widget);
    assert_eq!(Arc::strong_count(&calls), 1);

    // Los listeners que quedan en el elemento ya no pueden capturar.
    let start = MockEvent::touch(&element, 1.0, 1.0);
    element.fire(RawEventKind::TouchStart, &start);
    assert!(element.dispatched().is_empty());
    assert!(!start.was_prevented());
    assert!(!context.is_active());
    assert_eq!(*calls.lock().unwrap(), vec!["init".to_string()]);
}

#[test]
fn each_bound_kind_gets_the_listener_of_its_phase() {
    let context = pointer_context();
    let element = MockElement::new();
    let mut widget = TouchMouse::new(MockWidget::new(&element), &context);
    widget.init();

    // Fin y cancelación comparten listener: tres listeners distintos para cuatro eventos.
    let listeners = element.listeners();
    assert_eq!(listeners.len(), 4);
    assert!(!Arc::ptr_eq(&listeners[0], &listeners[1]));
    assert!(!Arc::ptr_eq(&listeners[1], &listeners[2]));
    assert!(Arc::ptr_eq(&listeners[2], &listeners[3]));
}
