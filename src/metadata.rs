//! Metadata model for test suites and scenarios.
//!
//! Each test suite registers a description of its scenarios through the
//! [`MetadataProvider`] interface. The resolver queries these records
//! instead of inspecting the host language's introspection facility, which
//! keeps the resolution logic independent of how the metadata was declared.
//!
//! - `Tag`: key-style label for categorization/filtering downstream
//! - `Marker`: presence-only annotation (pending, ignored, ...)
//! - `ScenarioMetadata` / `SuiteMetadata`: structured metadata records
//! - `SuiteDescription`: builder-constructed static provider

use std::collections::HashMap;
use std::fmt;

/// Namespace of markers defined by chronicle itself. Markers contributed by
/// other test frameworks carry their own namespace.
pub const CORE_NAMESPACE: &str = "chronicle";

/// A key-style label attached to a suite or scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub kind: String,
}

impl Tag {
    /// Kind applied when a tag is declared without one.
    pub const DEFAULT_KIND: &'static str = "feature";

    pub fn new(name: &str, kind: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: kind.to_string(),
        }
    }

    /// A tag with the default `feature` kind.
    pub fn feature(name: &str) -> Self {
        Self::new(name, Self::DEFAULT_KIND)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.name)
    }
}

/// A presence-only marker signaling a boolean property of a scenario.
///
/// Identity is the (namespace, name) pair. The simple name alone is used
/// for name-based recognition, so ignore-markers contributed by different
/// test frameworks are all recognized (see the resolver).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub namespace: String,
    pub name: String,
}

impl Marker {
    /// Simple name shared by all ignore-markers, whatever their namespace.
    pub const IGNORE_NAME: &'static str = "Ignore";

    pub fn new(namespace: &str, name: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
            name: name.to_string(),
        }
    }

    /// The canonical pending marker.
    pub fn pending() -> Self {
        Self::new(CORE_NAMESPACE, "Pending")
    }

    /// Chronicle's own ignore marker.
    pub fn ignore() -> Self {
        Self::new(CORE_NAMESPACE, Self::IGNORE_NAME)
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.namespace, self.name)
    }
}

/// Metadata record for a single scenario (test method).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScenarioMetadata {
    /// Human-readable title, shown in reports instead of the raw name.
    pub title: Option<String>,
    /// Single declared issue reference.
    pub issue: Option<String>,
    /// Declared issue list. `None` when the scenario declares no list;
    /// distinct from an empty list.
    pub issues: Option<Vec<String>>,
    /// Ordered tag list.
    pub tags: Vec<Tag>,
    /// Singular tag, appended after `tags` when resolving.
    pub tag: Option<Tag>,
    /// Presence markers attached to the scenario.
    pub markers: Vec<Marker>,
}

impl ScenarioMetadata {
    /// Whether a marker with this exact (namespace, name) identity is attached.
    pub fn has_marker(&self, marker: &Marker) -> bool {
        self.markers.contains(marker)
    }

    /// Whether any attached marker carries this simple name.
    pub fn has_marker_named(&self, name: &str) -> bool {
        self.markers.iter().any(|m| m.is_named(name))
    }
}

/// Metadata record for the suite (test type) itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuiteMetadata {
    pub issue: Option<String>,
    pub issues: Option<Vec<String>>,
    pub tags: Vec<Tag>,
    pub tag: Option<Tag>,
}

/// Source of metadata for one test suite.
///
/// Scenario lookup is by normalized base name (see [`crate::naming`]) and
/// covers zero-argument scenarios only; a miss is an expected outcome, not
/// an error.
pub trait MetadataProvider {
    fn suite(&self) -> &SuiteMetadata;
    fn scenario(&self, base_name: &str) -> Option<&ScenarioMetadata>;
}

/// Statically registered suite metadata.
///
/// The builder methods consume and return `self` so a description can be
/// assembled in one expression.
#[derive(Debug, Clone, Default)]
pub struct SuiteDescription {
    suite: SuiteMetadata,
    scenarios: HashMap<String, ScenarioMetadata>,
}

impl SuiteDescription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_suite(mut self, suite: SuiteMetadata) -> Self {
        self.suite = suite;
        self
    }

    pub fn with_scenario(mut self, name: &str, metadata: ScenarioMetadata) -> Self {
        self.scenarios.insert(name.to_string(), metadata);
        self
    }
}

impl MetadataProvider for SuiteDescription {
    fn suite(&self) -> &SuiteMetadata {
        &self.suite
    }

    fn scenario(&self, base_name: &str) -> Option<&ScenarioMetadata> {
        self.scenarios.get(base_name)
    }
}
