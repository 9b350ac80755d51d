//! Selección del mecanismo de bloqueo para el estado compartido.
//!
//! El crate soporta dos backends de sincronización, elegidos por feature:
//!
//! - `std_lock` (default): [`std::sync::Mutex`], recuperando el valor si el lock
//!   quedó envenenado.
//! - `parking_lot`: `parking_lot::Mutex`, sin envenenamiento y más liviano.
//!
//! Si ambas features están activas gana `parking_lot`. El resto del crate solo
//! ve `Lock` y su método `lock()`.

#[cfg(feature = "parking_lot")]
mod imp {
    pub(crate) struct Lock<T>(parking_lot::Mutex<T>);

    pub(crate) type Guard<'a, T> = parking_lot::MutexGuard<'a, T>;

    impl<T> Lock<T> {
        pub(crate) fn new(value: T) -> Self {
            Self(parking_lot::Mutex::new(value))
        }

        pub(crate) fn lock(&self) -> Guard<'_, T> {
            self.0.lock()
        }
    }
}

#[cfg(not(feature = "parking_lot"))]
mod imp {
    use std::sync::{Mutex, PoisonError};

    pub(crate) struct Lock<T>(Mutex<T>);

    pub(crate) type Guard<'a, T> = std::sync::MutexGuard<'a, T>;

    impl<T> Lock<T> {
        pub(crate) fn new(value: T) -> Self {
            Self(Mutex::new(value))
        }

        pub(crate) fn lock(&self) -> Guard<'_, T> {
            self.0.lock().unwrap_or_else(PoisonError::into_inner)
        }
    }
}

pub(crate) use imp::Lock;
