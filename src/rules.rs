//! Rule configuration: what an acceptable file looks like.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::RuleError;

/// Immutable rule set applied to one validation run.
///
/// Every field is optional; an empty set accepts any readable file. Extension
/// matching is strict, case-sensitive equality. Any dimension bound makes the
/// file an image requirement, see [`RuleSet::requires_image`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    max_size_mb: Option<f64>,
    allowed_extensions: HashSet<String>,
    min_width: Option<u32>,
    max_width: Option<u32>,
    exact_width: Option<u32>,
    min_height: Option<u32>,
    max_height: Option<u32>,
    exact_height: Option<u32>,
}

impl RuleSet {
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::default()
    }

    pub fn max_size_mb(&self) -> Option<f64> {
        self.max_size_mb
    }

    pub fn allowed_extensions(&self) -> &HashSet<String> {
        &self.allowed_extensions
    }

    /// True when any dimension rule is present. The validator then consults
    /// the image probe before evaluating the bounds. Derived, never set
    /// directly.
    pub fn requires_image(&self) -> bool {
        self.min_width.is_some()
            || self.max_width.is_some()
            || self.exact_width.is_some()
            || self.min_height.is_some()
            || self.max_height.is_some()
            || self.exact_height.is_some()
    }

    pub fn min_width(&self) -> Option<u32> {
        self.min_width
    }

    pub fn max_width(&self) -> Option<u32> {
        self.max_width
    }

    pub fn exact_width(&self) -> Option<u32> {
        self.exact_width
    }

    pub fn min_height(&self) -> Option<u32> {
        self.min_height
    }

    pub fn max_height(&self) -> Option<u32> {
        self.max_height
    }

    pub fn exact_height(&self) -> Option<u32> {
        self.exact_height
    }
}

/// Fluent builder for [`RuleSet`]. Each setter consumes and returns the
/// builder; [`RuleSetBuilder::build`] validates the assembled rules and
/// fails fast on ones that can never be satisfied.
#[derive(Debug, Clone, Default)]
pub struct RuleSetBuilder {
    rules: RuleSet,
    width_range: Option<String>,
    height_range: Option<String>,
}

impl RuleSetBuilder {
    pub fn max_size_mb(mut self, mb: f64) -> Self {
        self.rules.max_size_mb = Some(mb);
        self
    }

    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rules.allowed_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Exact width in pixels.
    pub fn width(mut self, width: u32) -> Self {
        self.rules.exact_width = Some(width);
        self
    }

    /// Exact height in pixels.
    pub fn height(mut self, height: u32) -> Self {
        self.rules.exact_height = Some(height);
        self
    }

    /// Width as a `"min:max"` range, parsed when the set is built. Expands
    /// into the min/max fields without overwriting explicitly set bounds.
    pub fn width_range(mut self, range: impl Into<String>) -> Self {
        self.width_range = Some(range.into());
        self
    }

    /// Height as a `"min:max"` range, see [`RuleSetBuilder::width_range`].
    pub fn height_range(mut self, range: impl Into<String>) -> Self {
        self.height_range = Some(range.into());
        self
    }

    pub fn min_width(mut self, pixels: u32) -> Self {
        self.rules.min_width = Some(pixels);
        self
    }

    pub fn max_width(mut self, pixels: u32) -> Self {
        self.rules.max_width = Some(pixels);
        self
    }

    pub fn min_height(mut self, pixels: u32) -> Self {
        self.rules.min_height = Some(pixels);
        self
    }

    pub fn max_height(mut self, pixels: u32) -> Self {
        self.rules.max_height = Some(pixels);
        self
    }

    pub fn build(self) -> Result<RuleSet, RuleError> {
        let mut rules = self.rules;

        // Range sugar expands first; an explicitly set bound wins.
        if let Some(raw) = self.width_range {
            let (min, max) = parse_range(&raw)?;
            rules.min_width.get_or_insert(min);
            rules.max_width.get_or_insert(max);
        }
        if let Some(raw) = self.height_range {
            let (min, max) = parse_range(&raw)?;
            rules.min_height.get_or_insert(min);
            rules.max_height.get_or_insert(max);
        }

        if let Some(mb) = rules.max_size_mb {
            if mb <= 0.0 {
                return Err(RuleError::NonPositiveSize(mb));
            }
        }

        check_bounds("width", rules.min_width, rules.max_width)?;
        check_bounds("height", rules.min_height, rules.max_height)?;

        Ok(rules)
    }
}

fn check_bounds(axis: &'static str, min: Option<u32>, max: Option<u32>) -> Result<(), RuleError> {
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(RuleError::InvertedBounds { axis, min, max });
        }
    }
    Ok(())
}

fn parse_range(raw: &str) -> Result<(u32, u32), RuleError> {
    let bounds = raw.split_once(':').and_then(|(min, max)| {
        let min = min.trim().parse().ok()?;
        let max = max.trim().parse().ok()?;
        Some((min, max))
    });
    bounds.ok_or_else(|| RuleError::MalformedRange(raw.to_string()))
}

/// A width or height rule as it appears in configuration input: either an
/// exact pixel value or a `"min:max"` range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    Exact(u32),
    Range(String),
}

/// Deserializable form of a rule set, the shape rules take in a config file.
/// [`RuleSpec::into_rules`] expands the range sugar and applies the same
/// validation as the builder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSpec {
    pub max_size_mb: Option<f64>,
    pub extensions: Vec<String>,
    pub width: Option<Dimension>,
    pub height: Option<Dimension>,
    pub min_width: Option<u32>,
    pub max_width: Option<u32>,
    pub min_height: Option<u32>,
    pub max_height: Option<u32>,
}

impl RuleSpec {
    pub fn into_rules(self) -> Result<RuleSet, RuleError> {
        let mut builder = RuleSet::builder();

        if let Some(mb) = self.max_size_mb {
            builder = builder.max_size_mb(mb);
        }
        if !self.extensions.is_empty() {
            builder = builder.extensions(self.extensions);
        }
        match self.width {
            Some(Dimension::Exact(width)) => builder = builder.width(width),
            Some(Dimension::Range(raw)) => builder = builder.width_range(raw),
            None => {}
        }
        match self.height {
            Some(Dimension::Exact(height)) => builder = builder.height(height),
            Some(Dimension::Range(raw)) => builder = builder.height_range(raw),
            None => {}
        }
        if let Some(pixels) = self.min_width {
            builder = builder.min_width(pixels);
        }
        if let Some(pixels) = self.max_width {
            builder = builder.max_width(pixels);
        }
        if let Some(pixels) = self.min_height {
            builder = builder.min_height(pixels);
        }
        if let Some(pixels) = self.max_height {
            builder = builder.max_height(pixels);
        }

        builder.build()
    }
}
