//! Scenario metadata resolution.
//!
//! [`AnnotationResolver`] is a query facade over one suite's metadata. It
//! merges declared metadata (titles, issues, tags, markers) with issue
//! references embedded in title text, and degrades to extracting references
//! from the raw scenario name when no suite metadata exists at all (e.g.
//! dynamically generated scenario names).
//!
//! Every operation is a total function: a missing scenario, suite, or
//! metadata field yields an empty/negative result, never an error.

use crate::formatting::issues_in;
use crate::metadata::{Marker, MetadataProvider, ScenarioMetadata, Tag};
use crate::naming::base_scenario_name;

/// Operating mode: backed by suite metadata, or purely textual.
enum Scope<'a> {
    Suite(&'a dyn MetadataProvider),
    NameOnly,
}

/// Immutable query facade over a suite's scenario metadata.
///
/// Construction is cheap; a resolver holds no state beyond its scope and
/// may be rebuilt for every resolution.
pub struct AnnotationResolver<'a> {
    scope: Scope<'a>,
}

impl<'a> AnnotationResolver<'a> {
    /// Resolver backed by a suite's metadata provider.
    pub fn for_suite(provider: &'a dyn MetadataProvider) -> Self {
        Self {
            scope: Scope::Suite(provider),
        }
    }

    /// Resolver with no suite context. Scenario lookups come up empty and
    /// issue resolution falls back to the scenario name itself.
    pub fn name_only() -> Self {
        Self {
            scope: Scope::NameOnly,
        }
    }

    fn scenario(&self, scenario_name: &str) -> Option<&'a ScenarioMetadata> {
        match self.scope {
            Scope::Suite(provider) => provider.scenario(base_scenario_name(scenario_name)),
            Scope::NameOnly => None,
        }
    }

    /// Declared title of the matching scenario.
    pub fn title_for(&self, scenario_name: &str) -> Option<String> {
        self.scenario(scenario_name).and_then(|s| s.title.clone())
    }

    /// Whether the resolved scenario carries the canonical pending marker.
    pub fn is_pending(&self, scenario_name: &str) -> bool {
        scenario_is_pending(self.scenario(scenario_name))
    }

    /// Whether the resolved scenario carries any marker named `Ignore`.
    pub fn is_ignored(&self, scenario_name: &str) -> bool {
        scenario_is_ignored(self.scenario(scenario_name))
    }

    /// Issue references embedded in the scenario's title, falling back to
    /// the raw scenario name when no title resolves.
    pub fn issues_in_title_of(&self, scenario_name: &str) -> Vec<String> {
        match self.title_for(scenario_name) {
            Some(title) => issues_in(&title),
            None => issues_in(scenario_name),
        }
    }

    /// The scenario's single declared issue, independent of title parsing.
    pub fn declared_issue_for(&self, scenario_name: &str) -> Option<String> {
        self.scenario(scenario_name).and_then(|s| s.issue.clone())
    }

    /// The scenario's declared issue list, independent of title parsing.
    pub fn declared_issues_for(&self, scenario_name: &str) -> Option<Vec<String>> {
        self.scenario(scenario_name).and_then(|s| s.issues.clone())
    }

    /// The suite's single declared issue.
    pub fn suite_issue(&self) -> Option<String> {
        match self.scope {
            Scope::Suite(provider) => provider.suite().issue.clone(),
            Scope::NameOnly => None,
        }
    }

    /// The suite's declared issue list.
    pub fn suite_issues(&self) -> Option<Vec<String>> {
        match self.scope {
            Scope::Suite(provider) => provider.suite().issues.clone(),
            Scope::NameOnly => None,
        }
    }

    /// All issues associated with a scenario.
    ///
    /// In suite mode, merges in fixed order: the declared issue list, the
    /// singular declared issue, and - only when the scenario also carries a
    /// title - the references embedded in that title. In name-only mode the
    /// scenario name itself is the only source. Order preserved, no
    /// deduplication.
    pub fn issues_for(&self, scenario_name: &str) -> Vec<String> {
        match self.scope {
            Scope::Suite(_) => self.issues_from_scenario(scenario_name),
            Scope::NameOnly => self.issues_in_title_of(scenario_name),
        }
    }

    fn issues_from_scenario(&self, scenario_name: &str) -> Vec<String> {
        let mut issues = Vec::new();

        if let Some(declared) = self.declared_issues_for(scenario_name) {
            issues.extend(declared);
        }
        if let Some(issue) = self.declared_issue_for(scenario_name) {
            issues.push(issue);
        }
        if self.title_for(scenario_name).is_some() {
            issues.extend(self.issues_in_title_of(scenario_name));
        }

        issues
    }

    /// Suite tags followed by the scenario's tags, order preserved.
    pub fn tags_for(&self, scenario_name: &str) -> Vec<Tag> {
        let mut tags = self.suite_tags();
        if let Some(scenario) = self.scenario(scenario_name) {
            tags.extend(scenario.tags.iter().cloned());
            if let Some(tag) = &scenario.tag {
                tags.push(tag.clone());
            }
        }
        tags
    }

    /// Type-level tags: the declared tag list followed by the singular tag.
    pub fn suite_tags(&self) -> Vec<Tag> {
        match self.scope {
            Scope::Suite(provider) => {
                let suite = provider.suite();
                let mut tags = suite.tags.clone();
                if let Some(tag) = &suite.tag {
                    tags.push(tag.clone());
                }
                tags
            }
            Scope::NameOnly => Vec::new(),
        }
    }
}

/// Whether a scenario carries the canonical pending marker, matched by
/// exact (namespace, name) identity. `None` is not pending.
pub fn scenario_is_pending(scenario: Option<&ScenarioMetadata>) -> bool {
    scenario.is_some_and(|s| s.has_marker(&Marker::pending()))
}

/// Whether a scenario carries any marker whose simple name is `Ignore`,
/// whatever namespace declared it. `None` is not ignored.
pub fn scenario_is_ignored(scenario: Option<&ScenarioMetadata>) -> bool {
    scenario.is_some_and(|s| s.has_marker_named(Marker::IGNORE_NAME))
}
