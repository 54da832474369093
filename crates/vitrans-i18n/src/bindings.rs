//! Explicit registry of translation-bound view elements.
//!
//! Instead of scanning a view tree for annotated elements on every
//! language change, dependents register each bound element once, with a
//! stable identifier, the slot being written (text content or one of
//! the attribute channels), and the dictionary key path. Activation
//! resolves the registry against the new dictionary; bindings whose key
//! is absent are skipped so existing content stays untouched.

use tracing::trace;

use crate::dictionary::Dictionary;

/// Stable identifier of a bound view element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementId(pub String);

impl ElementId {
    /// Creates an element identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which part of the element the translation is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingSlot {
    /// Visible text content.
    Text,
    /// Input placeholder text.
    Placeholder,
    /// Hover tooltip text.
    Tooltip,
    /// Accessible-name text.
    AriaLabel,
}

/// One registered element-to-key binding.
#[derive(Debug, Clone)]
pub struct Binding {
    /// The bound element.
    pub element: ElementId,
    /// The slot being written.
    pub slot: BindingSlot,
    /// Dot-separated dictionary key path.
    pub key: String,
}

impl Binding {
    /// Creates a text-content binding.
    pub fn text(element: impl Into<String>, key: impl Into<String>) -> Self {
        Self::new(element, BindingSlot::Text, key)
    }

    /// Creates a binding for the given slot.
    pub fn new(element: impl Into<String>, slot: BindingSlot, key: impl Into<String>) -> Self {
        Self {
            element: ElementId::new(element),
            slot,
            key: key.into(),
        }
    }
}

/// A resolved binding ready to be applied by the view layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingUpdate {
    /// The bound element.
    pub element: ElementId,
    /// The slot being written.
    pub slot: BindingSlot,
    /// Localized text from the new dictionary.
    pub value: String,
}

/// Registry of all translation-bound elements.
#[derive(Debug, Default)]
pub struct BindingRegistry {
    bindings: Vec<Binding>,
}

impl BindingRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one binding.
    pub fn register(&mut self, binding: Binding) {
        self.bindings.push(binding);
    }

    /// Registers a batch of bindings.
    pub fn register_all(&mut self, bindings: impl IntoIterator<Item = Binding>) {
        self.bindings.extend(bindings);
    }

    /// Number of registered bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Resolves every binding against `dictionary`.
    ///
    /// Bindings whose key path is absent produce no update, so the view
    /// keeps whatever content it already shows for that element.
    pub fn resolve(&self, dictionary: &Dictionary) -> Vec<BindingUpdate> {
        self.bindings
            .iter()
            .filter_map(|binding| match dictionary.get(&binding.key) {
                Some(value) => Some(BindingUpdate {
                    element: binding.element.clone(),
                    slot: binding.slot,
                    value: value.to_string(),
                }),
                None => {
                    trace!(
                        "No translation for key '{}' (element {}), leaving content unchanged",
                        binding.key,
                        binding.element
                    );
                    None
                }
            })
            .collect()
    }
}
