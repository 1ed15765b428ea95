//! Pure scalar functions applied around a raw conversion.

use std::fmt;
use std::sync::Arc;

/// A stateless `f64 -> f64` transform.
///
/// Hooks are shared read-only between clones of a [`crate::UnitConv`], so
/// they must be `Fn` (never `FnMut`) and `Send + Sync`.
#[derive(Clone, Default)]
pub struct Hook(Option<Arc<dyn Fn(f64) -> f64 + Send + Sync>>);

impl Hook {
    pub fn new(f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self(Some(Arc::new(f)))
    }

    /// The identity transform.
    pub fn identity() -> Self {
        Self(None)
    }

    pub fn is_identity(&self) -> bool {
        self.0.is_none()
    }

    #[inline]
    pub fn apply(&self, value: f64) -> f64 {
        match &self.0 {
            Some(f) => f(value),
            None => value,
        }
    }
}

impl fmt::Debug for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_identity() {
            f.write_str("Hook(identity)")
        } else {
            f.write_str("Hook(fn)")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_passes_through() {
        let h = Hook::default();
        assert!(h.is_identity());
        assert_eq!(h.apply(3.25), 3.25);
    }

    #[test]
    fn custom_hook_applies() {
        let offset = 1.5;
        let h = Hook::new(move |v| v + offset);
        assert!(!h.is_identity());
        assert_eq!(h.clone().apply(1.0), 2.5);
    }
}
