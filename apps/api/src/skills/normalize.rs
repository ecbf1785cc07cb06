//! Skill normalization and alias resolution.
//!
//! Two skill tokens are the same skill iff their normalized keys are equal.
//! A partial match is anything related but not identical: one key contains the
//! other, or both keys sit in the same alias group.

use std::collections::{HashMap, HashSet};

/// Abbreviation → long forms. Every entry is already a normalized key and no
/// key appears in more than one group.
const BUILTIN_ALIAS_GROUPS: &[(&str, &[&str])] = &[
    ("js", &["javascript", "ecmascript"]),
    ("ts", &["typescript"]),
    ("k8s", &["kubernetes", "kube"]),
    ("aws", &["amazonwebservices"]),
    ("gcp", &["googlecloud", "googlecloudplatform"]),
    ("azure", &["microsoftazure"]),
    ("py", &["python"]),
    ("go", &["golang"]),
    ("postgres", &["postgresql", "psql"]),
    ("node", &["nodejs"]),
    ("react", &["reactjs"]),
    ("vue", &["vuejs"]),
    ("angular", &["angularjs"]),
    ("ml", &["machinelearning"]),
    ("ai", &["artificialintelligence"]),
    ("nlp", &["naturallanguageprocessing"]),
    ("cicd", &["continuousintegration", "continuousdelivery"]),
    ("c++", &["cpp"]),
    ("c#", &["csharp"]),
    ("tf", &["terraform"]),
    ("mongo", &["mongodb"]),
    ("gql", &["graphql"]),
    ("sre", &["sitereliabilityengineering"]),
    ("ux", &["userexperience"]),
    ("ui", &["userinterface"]),
];

/// Canonical key for a skill token: lower-cased, keeping only `[a-z0-9+#]`.
///
/// Idempotent. Whitespace-only input yields an empty key.
pub fn normalize(token: &str) -> String {
    token
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '+' || *c == '#')
        .collect()
}

/// Immutable table of alias groups, keyed by the group's short form.
///
/// Membership is symmetric within a group and never inferred across groups.
#[derive(Debug, Clone)]
pub struct AliasTable {
    groups: HashMap<String, HashSet<String>>,
}

impl AliasTable {
    /// The curated abbreviation/full-name table shipped with the service.
    pub fn builtin() -> Self {
        Self::from_groups(
            BUILTIN_ALIAS_GROUPS
                .iter()
                .map(|(key, values)| (*key, values.iter().copied())),
        )
    }

    /// Builds a table from raw groups. Keys and values are normalized on the way in.
    pub fn from_groups<'a, I, V>(groups: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, V)>,
        V: IntoIterator<Item = &'a str>,
    {
        let groups = groups
            .into_iter()
            .map(|(key, values)| {
                let values: HashSet<String> = values
                    .into_iter()
                    .map(normalize)
                    .filter(|v| !v.is_empty())
                    .collect();
                (normalize(key), values)
            })
            .filter(|(key, _)| !key.is_empty())
            .collect();
        Self { groups }
    }

    /// True when both normalized keys belong to one group (key and values taken as one set).
    pub fn same_group(&self, a: &str, b: &str) -> bool {
        self.groups.iter().any(|(key, values)| {
            let member = |k: &str| k == key || values.contains(k);
            member(a) && member(b)
        })
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterates groups as (key, members) with members excluding the key.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &HashSet<String>)> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Skill comparison backed by an alias table.
///
/// Read-only after construction; share it freely across threads.
#[derive(Debug, Clone, Default)]
pub struct SkillMatcher {
    aliases: AliasTable,
}

impl SkillMatcher {
    pub fn new(aliases: AliasTable) -> Self {
        Self { aliases }
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Related but not identical skills.
    ///
    /// Exact matches are never partial. Containment only counts for non-empty keys.
    pub fn is_partial_match(&self, a: &str, b: &str) -> bool {
        let a = normalize(a);
        let b = normalize(b);
        if a == b {
            return false;
        }
        if !a.is_empty() && !b.is_empty() && (a.contains(b.as_str()) || b.contains(a.as_str())) {
            return true;
        }
        self.aliases.same_group(&a, &b)
    }
}
