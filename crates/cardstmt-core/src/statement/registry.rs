//! Issuer profiles and the ordered registry used for detection.

use std::fmt;
use std::sync::Arc;

use lazy_static::lazy_static;
use tracing::debug;

use crate::error::{Result, StatementError};
use crate::models::config::RegistryConfig;
use crate::models::statement::{Field, FieldSet};

use super::issuers::{self, IssuerSpec};
use super::rules::{Capture, FieldExtractor, Normalizer, PatternRule, RuleSet};

lazy_static! {
    static ref BUILTIN_REGISTRY: Arc<IssuerRegistry> = Arc::new(
        IssuerRegistry::from_specs(&issuers::BUILTIN).expect("built-in issuer tables are valid")
    );
}

/// Decides whether a text belongs to an issuer.
pub trait Detect: Send + Sync {
    /// True if the text looks like this issuer's statement.
    fn detect(&self, text: &str) -> bool;
}

impl<F> Detect for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn detect(&self, text: &str) -> bool {
        self(text)
    }
}

/// Case-insensitive keyword presence. Any one keyword is enough.
#[derive(Debug, Clone)]
pub struct KeywordDetector {
    keywords: Vec<String>,
}

impl KeywordDetector {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl Detect for KeywordDetector {
    fn detect(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }
}

/// One issuer: a name, a detector and its rule tables.
pub struct IssuerProfile {
    name: String,
    detector: Box<dyn Detect>,
    rules: RuleSet,
}

impl IssuerProfile {
    /// Assemble a profile from parts.
    ///
    /// No completeness check is made; use [`IssuerProfile::builder`] for
    /// that.
    pub fn new(name: impl Into<String>, detector: impl Detect + 'static, rules: RuleSet) -> Self {
        Self {
            name: name.into(),
            detector: Box::new(detector),
            rules,
        }
    }

    /// Start building a profile.
    pub fn builder(name: impl Into<String>) -> IssuerProfileBuilder {
        IssuerProfileBuilder::new(name)
    }

    /// Compile a static issuer table.
    pub fn from_spec(spec: &IssuerSpec) -> Result<Self> {
        let mut builder = Self::builder(spec.name).keywords(spec.keywords.iter().copied());
        for field in Field::ALL {
            for rule in spec.rules(field) {
                builder = builder.rule_with(field, rule.pattern, rule.capture, Normalizer::for_field(field))?;
            }
        }
        builder.build()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn detect(&self, text: &str) -> bool {
        self.detector.detect(text)
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Run this issuer's rules over text.
    pub fn extract(&self, text: &str) -> FieldSet {
        self.rules.extract(text)
    }
}

impl fmt::Debug for IssuerProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IssuerProfile")
            .field("name", &self.name)
            .field("rules", &self.rules.len())
            .finish_non_exhaustive()
    }
}

/// Builder for [`IssuerProfile`].
pub struct IssuerProfileBuilder {
    name: String,
    detector: Option<Box<dyn Detect>>,
    rules: RuleSet,
}

impl IssuerProfileBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detector: None,
            rules: RuleSet::new(),
        }
    }

    /// Detect by keywords.
    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.detector = Some(Box::new(KeywordDetector::new(keywords)));
        self
    }

    /// Detect with an arbitrary predicate.
    pub fn detector(mut self, detector: impl Detect + 'static) -> Self {
        self.detector = Some(Box::new(detector));
        self
    }

    /// Add a rule capturing group 1 with the field's usual normalizer.
    pub fn rule(self, field: Field, pattern: &str) -> Result<Self> {
        self.rule_with(field, pattern, Capture::Group(1), Normalizer::for_field(field))
    }

    /// Add a rule with explicit capture and normalizer.
    pub fn rule_with(
        mut self,
        field: Field,
        pattern: &str,
        capture: Capture,
        normalizer: Normalizer,
    ) -> Result<Self> {
        let rule = PatternRule::new(pattern, capture, normalizer).map_err(|source| {
            StatementError::InvalidPattern {
                issuer: self.name.clone(),
                field,
                source,
            }
        })?;

        let group = capture.max_group();
        if group == 0 || group > rule.group_count() {
            return Err(StatementError::InvalidCapture {
                issuer: self.name,
                field,
                group,
                available: rule.group_count(),
            });
        }

        self.rules.push(field, rule);
        Ok(self)
    }

    /// Finish the profile. Every field needs at least one rule; without an
    /// explicit detector the issuer name is used as the keyword.
    pub fn build(self) -> Result<IssuerProfile> {
        if let Some(field) = Field::ALL.into_iter().find(|f| self.rules.rules(*f).is_empty()) {
            return Err(StatementError::IncompleteRules {
                issuer: self.name,
                field,
            });
        }

        let detector: Box<dyn Detect> = match self.detector {
            Some(detector) => detector,
            None => Box::new(KeywordDetector::new([self.name.as_str()])),
        };

        Ok(IssuerProfile {
            name: self.name,
            detector,
            rules: self.rules,
        })
    }
}

impl fmt::Debug for IssuerProfileBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IssuerProfileBuilder")
            .field("name", &self.name)
            .field("detector", &self.detector.is_some())
            .field("rules", &self.rules.len())
            .finish()
    }
}

/// Ordered list of issuer profiles. Earlier registration wins detection.
#[derive(Debug)]
pub struct IssuerRegistry {
    profiles: Vec<IssuerProfile>,
}

impl IssuerRegistry {
    /// The shared registry of all built-in issuers in default order.
    pub fn builtin() -> Arc<IssuerRegistry> {
        Arc::clone(&BUILTIN_REGISTRY)
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Registry of the configured built-in issuers, in configured order.
    ///
    /// Names match either the display name (`HDFC Bank`) or the short id
    /// (`hdfc`), ignoring case. An empty list enables all of them.
    pub fn from_config(config: &RegistryConfig) -> Result<Self> {
        if config.issuers.is_empty() {
            return Self::from_specs(&issuers::BUILTIN);
        }

        let specs = config
            .issuers
            .iter()
            .map(|name| issuers::find(name).ok_or_else(|| StatementError::UnknownIssuer(name.clone())))
            .collect::<Result<Vec<_>>>()?;

        Self::from_specs(specs)
    }

    fn from_specs<'a>(specs: impl IntoIterator<Item = &'a IssuerSpec>) -> Result<Self> {
        specs
            .into_iter()
            .try_fold(Self::builder(), |builder, spec| builder.register(IssuerProfile::from_spec(spec)?))?
            .build()
    }

    /// First profile whose detector accepts the text.
    pub fn detect(&self, text: &str) -> Option<&IssuerProfile> {
        let found = self.profiles.iter().find(|p| p.detect(text));
        match found {
            Some(profile) => debug!("Detected issuer: {}", profile.name()),
            None => debug!("No issuer detected"),
        }
        found
    }

    /// Every profile whose detector accepts the text, in priority order.
    pub fn candidates(&self, text: &str) -> Vec<&IssuerProfile> {
        self.profiles.iter().filter(|p| p.detect(text)).collect()
    }

    /// Profile by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&IssuerProfile> {
        self.profiles.iter().find(|p| p.name().eq_ignore_ascii_case(name))
    }

    /// Registered names in priority order.
    pub fn names(&self) -> Vec<&str> {
        self.profiles.iter().map(IssuerProfile::name).collect()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IssuerProfile> {
        self.profiles.iter()
    }
}

/// Builder for [`IssuerRegistry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    profiles: Vec<IssuerProfile>,
}

impl RegistryBuilder {
    /// Append a profile at the lowest priority.
    pub fn register(mut self, profile: IssuerProfile) -> Result<Self> {
        if self.profiles.iter().any(|p| p.name().eq_ignore_ascii_case(profile.name())) {
            return Err(StatementError::DuplicateIssuer(profile.name));
        }
        self.profiles.push(profile);
        Ok(self)
    }

    pub fn build(self) -> Result<IssuerRegistry> {
        if self.profiles.is_empty() {
            return Err(StatementError::EmptyRegistry);
        }
        Ok(IssuerRegistry {
            profiles: self.profiles,
        })
    }
}
