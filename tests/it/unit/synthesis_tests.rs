//! `synthesize` contra el host simulado.

use orbit_touch_mouse::{
    MouseEventKind, PointerKind, SynthesisError, TouchPoint, describe, synthesize,
};

use crate::helpers::{MockElement, MockEvent, MockFactory};

#[test]
fn legacy_fallback_is_indistinguishable() {
    let modern_el = MockElement::new();
    let legacy_el = MockElement::new();
    let legacy = MockFactory {
        modern_fails: true,
        ..MockFactory::default()
    };

    synthesize(&MockFactory::default(), &MockEvent::touch(&modern_el, 4.0, 9.0), MouseEventKind::MouseDown)
        .unwrap();
    synthesize(&legacy, &MockEvent::touch(&legacy_el, 4.0, 9.0), MouseEventKind::MouseDown).unwrap();

    assert_eq!(legacy.legacy_calls(), 1);
    assert_eq!(modern_el.dispatched(), legacy_el.dispatched());
}

#[test]
fn modern_success_skips_legacy() {
    let el = MockElement::new();
    let factory = MockFactory::default();
    synthesize(&factory, &MockEvent::touch(&el, 0.0, 0.0), MouseEventKind::Click).unwrap();
    assert_eq!(factory.legacy_calls(), 0);
}

#[test]
fn both_paths_failing_reports_both_errors() {
    let el = MockElement::new();
    let factory = MockFactory {
        modern_fails: true,
        legacy_fails: true,
        ..MockFactory::default()
    };
    let ev = MockEvent::touch(&el, 0.0, 0.0);

    let err = synthesize(&factory, &ev, MouseEventKind::MouseUp).unwrap_err();
    match err {
        SynthesisError::Construction { modern, legacy } => {
            assert!(modern.to_string().contains("MouseEvent"));
            assert!(legacy.to_string().contains("initMouseEvent"));
        }
        other => panic!("error inesperado: {other:?}"),
    }
    assert!(el.dispatched().is_empty());
    // La acción por defecto se suprime antes de construir.
    assert!(ev.was_prevented());
}

#[test]
fn missing_target_falls_back_to_src_element() {
    let el = MockElement::new();
    let mut ev = MockEvent::pointer(&el, PointerKind::Touch, 1.0, 1.0);
    ev.target = None;
    ev.src = Some(el.clone());

    synthesize(&MockFactory::default(), &ev, MouseEventKind::MouseOver).unwrap();
    assert_eq!(el.dispatched().len(), 1);

    ev.src = None;
    assert_eq!(
        synthesize(&MockFactory::default(), &ev, MouseEventKind::MouseOver),
        Err(SynthesisError::MissingTarget)
    );
}

#[test]
fn missing_coordinates_default_to_zero() {
    let el = MockElement::new();
    let mut ev = MockEvent::touch(&el, 0.0, 0.0);
    ev.changed.clear();

    let init = describe(&ev, MouseEventKind::MouseMove);
    assert_eq!(init.screen_x, 0.0);
    assert_eq!(init.client_y, 0.0);

    ev.changed.push(TouchPoint {
        screen_x: 100.0,
        screen_y: 200.0,
        client_x: 10.0,
        client_y: 20.0,
    });
    let init = describe(&ev, MouseEventKind::MouseMove);
    assert_eq!((init.screen_x, init.screen_y), (100.0, 200.0));
    assert_eq!((init.client_x, init.client_y), (10.0, 20.0));
}
