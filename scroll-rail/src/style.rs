use core::fmt;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Companion stylesheet for the default rail layout.
///
/// Load it once per document. The rail only emits class names; snap geometry, flex layout and
/// control positioning live here.
pub const BASELINE_CSS: &str = r#".rsr-root {
  position: relative;
}

.rsr-scroller {
  display: flex;
  gap: 1rem;
  overflow-x: auto;
  overflow-y: hidden;
  overscroll-behavior-x: contain;
  scroll-behavior: smooth;
  padding-bottom: 0.5rem;
}

.rsr-scroller:focus-visible {
  outline: 2px solid currentColor;
  outline-offset: 2px;
}

.rsr-snap {
  scroll-snap-type: x mandatory;
}

.rsr-item {
  flex: 0 0 auto;
}

.rsr-snap-item {
  scroll-snap-align: start;
}

.rsr-control {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 9999px;
  border: 1px solid rgba(0, 0, 0, 0.15);
  background: rgba(255, 255, 255, 0.9);
  font-size: 1.5rem;
  line-height: 1;
  cursor: pointer;
}

.rsr-control--custom {
  border: none;
  background: none;
}

.rsr-control:disabled {
  opacity: 0.35;
  cursor: default;
}

.rsr-prev {
  left: 0.25rem;
}

.rsr-next {
  right: 0.25rem;
}
"#;

/// Ordered inline CSS declarations (`property: value`).
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InlineStyle {
    declarations: Vec<(String, String)>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// The scroller's required baseline: momentum scrolling and a stable scrollbar gutter.
    pub fn scroller_baseline() -> Self {
        Self::new()
            .with("-webkit-overflow-scrolling", "touch")
            .with("scrollbar-gutter", "stable both-edges")
    }

    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    /// Sets a declaration, replacing an existing one for the same property in place.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.declarations.iter_mut().find(|(p, _)| *p == property) {
            Some(slot) => slot.1 = value,
            None => self.declarations.push((property, value)),
        }
    }

    pub fn remove(&mut self, property: &str) -> Option<String> {
        let pos = self.declarations.iter().position(|(p, _)| p == property)?;
        Some(self.declarations.remove(pos).1)
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(p, v)| (p.as_str(), v.as_str()))
    }

    /// Applies `overrides` on top of `self`: shared properties take the override's value,
    /// new ones are appended.
    pub fn merged(&self, overrides: &InlineStyle) -> InlineStyle {
        let mut out = self.clone();
        for (p, v) in overrides.iter() {
            out.set(p.to_string(), v.to_string());
        }
        out
    }
}

impl fmt::Display for InlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (p, v)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{p}: {v};")?;
        }
        Ok(())
    }
}
