//! Constrained password generation.
//!
//! The generator resolves the password rules of the given policies, merges
//! them and composes a random password honouring the merged configuration:
//!
//! - exactly `digit` digits
//! - at least `uppercase` uppercase and `lowercase` lowercase letters
//! - at least `alphabetical` further letters
//! - at least `special` characters from `special_chars`
//! - letters as filler up to a random length in `[min_length, max_length]`
//!
//! Characters in `illegal_chars` are never drawn. A composed candidate is
//! re-rolled when it breaks `repeat_same` or contains a forbidden word.

use std::slice;
use std::sync::Arc;

use idm_core::GeneratorConfig;
use idm_crypto::{choose_many, length_between, pool, secure_rng, shuffle, CharClass};
use idm_model::{DefaultPasswordRuleConf, PasswordPolicy, MIN_LENGTH_IF_ZERO};
use idm_spi::RuleSource;
use rand::Rng;
use tracing::{debug, warn};

use crate::error::{PolicyError, PolicyResult};
use crate::merge::merge;

/// Generates passwords for password policies.
#[derive(Debug, Clone)]
pub struct PasswordGenerator {
    source: Arc<dyn RuleSource>,
    config: GeneratorConfig,
}

impl PasswordGenerator {
    /// Creates a generator resolving rules through `source`.
    #[must_use]
    pub fn new(source: Arc<dyn RuleSource>) -> Self {
        Self {
            source,
            config: GeneratorConfig::default(),
        }
    }

    /// Sets the generator configuration.
    #[must_use]
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the generator configuration.
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a password satisfying every password rule of `policies`.
    ///
    /// When no rule resolves, the [default password](default_password) is
    /// returned instead.
    ///
    /// ## Errors
    ///
    /// - [`PolicyError::NullInput`] if `policies` is `None`
    /// - [`PolicyError::CapacityExceeded`] if the rules cannot fit in the
    ///   maximum length or no acceptable candidate was found
    /// - [`PolicyError::InvalidArgument`] if a required character pool is empty
    pub fn generate(&self, policies: Option<&[PasswordPolicy]>) -> PolicyResult<String> {
        self.generate_with_rng(policies, &mut secure_rng())
    }

    /// Like [`generate`](Self::generate), drawing from `rng`.
    ///
    /// ## Errors
    ///
    /// See [`generate`](Self::generate).
    pub fn generate_with_rng<R>(
        &self,
        policies: Option<&[PasswordPolicy]>,
        rng: &mut R,
    ) -> PolicyResult<String>
    where
        R: Rng + ?Sized,
    {
        let policies = policies.ok_or(PolicyError::NullInput("password policies"))?;

        let confs: Vec<DefaultPasswordRuleConf> = policies
            .iter()
            .flat_map(|policy| self.source.resolve_password_rules(policy))
            .collect();
        debug!(
            policies = policies.len(),
            rules = confs.len(),
            "Resolved password rules"
        );

        if confs.is_empty() {
            return default_password(rng);
        }

        let merged = merge(Some(&confs))?;
        self.compose(&merged, rng)
    }

    /// Generates a password for a single configuration.
    ///
    /// The configuration goes through the same normalization as a merge of
    /// one element.
    ///
    /// ## Errors
    ///
    /// See [`generate`](Self::generate), except that `NullInput` cannot occur.
    pub fn generate_for_conf(&self, conf: &DefaultPasswordRuleConf) -> PolicyResult<String> {
        self.generate_for_conf_with_rng(conf, &mut secure_rng())
    }

    /// Like [`generate_for_conf`](Self::generate_for_conf), drawing from `rng`.
    ///
    /// ## Errors
    ///
    /// See [`generate_for_conf`](Self::generate_for_conf).
    pub fn generate_for_conf_with_rng<R>(
        &self,
        conf: &DefaultPasswordRuleConf,
        rng: &mut R,
    ) -> PolicyResult<String>
    where
        R: Rng + ?Sized,
    {
        let effective = merge(Some(slice::from_ref(conf)))?;
        self.compose(&effective, rng)
    }

    fn compose<R>(&self, conf: &DefaultPasswordRuleConf, rng: &mut R) -> PolicyResult<String>
    where
        R: Rng + ?Sized,
    {
        let plan = Plan::new(conf)?;
        let attempts = self.config.max_attempts.max(1);

        for attempt in 1..=attempts {
            let candidate = plan.draw(rng)?;
            match plan.rejection(&candidate) {
                None => {
                    debug!(attempt, length = candidate.chars().count(), "Generated password");
                    return Ok(candidate);
                }
                Some(reason) => debug!(attempt, reason, "Rejected candidate password"),
            }
        }

        warn!(attempts, "No acceptable password candidate");
        Err(PolicyError::CapacityExceeded(format!(
            "no acceptable password after {attempts} attempts"
        )))
    }
}

/// Generates the password used when no rule applies.
///
/// Half of [`MIN_LENGTH_IF_ZERO`] letters and half digits, in random order.
///
/// ## Errors
///
/// Never fails in practice; the signature matches the other generators.
pub fn default_password<R>(rng: &mut R) -> PolicyResult<String>
where
    R: Rng + ?Sized,
{
    let half = usize::try_from(MIN_LENGTH_IF_ZERO / 2).unwrap_or_default();
    let letters = pool(&[CharClass::Lowercase, CharClass::Uppercase], &Default::default());
    let digits = CharClass::Digit.chars();

    let mut chars = draw(rng, &letters, half, "letter")?;
    chars.extend(draw(rng, &digits, half, "digit")?);
    shuffle(rng, &mut chars);
    Ok(chars.into_iter().collect())
}

/// Character pools and counts derived from one effective configuration.
#[derive(Debug)]
struct Plan {
    requirements: Vec<(&'static str, Vec<char>, usize)>,
    filler: Vec<char>,
    required: usize,
    min_length: usize,
    max_length: usize,
    repeat_same: usize,
    words: Vec<String>,
}

impl Plan {
    fn new(conf: &DefaultPasswordRuleConf) -> PolicyResult<Self> {
        let required = count(conf.alphabetical)
            + count(conf.uppercase)
            + count(conf.lowercase)
            + count(conf.digit)
            + count(conf.special);
        let max_length = count(conf.max_length);
        if required > max_length {
            return Err(PolicyError::CapacityExceeded(format!(
                "{required} required characters exceed the maximum length of {max_length}"
            )));
        }
        if conf.special > 0 && conf.special_chars.is_empty() {
            return Err(PolicyError::InvalidArgument(
                "special characters are required but none are configured".to_string(),
            ));
        }

        let illegal = &conf.illegal_chars;
        let letters = pool(&[CharClass::Lowercase, CharClass::Uppercase], illegal);
        let specials: Vec<char> = conf
            .special_chars
            .iter()
            .copied()
            .filter(|c| !illegal.contains(c) && !CharClass::Digit.contains(*c))
            .collect();

        let requirements = vec![
            ("uppercase", pool(&[CharClass::Uppercase], illegal), count(conf.uppercase)),
            ("lowercase", pool(&[CharClass::Lowercase], illegal), count(conf.lowercase)),
            ("letter", letters.clone(), count(conf.alphabetical)),
            ("digit", pool(&[CharClass::Digit], illegal), count(conf.digit)),
            ("special", specials, count(conf.special)),
        ];
        if let Some((class, _, _)) = requirements
            .iter()
            .find(|(_, chars, n)| *n > 0 && chars.is_empty())
        {
            return Err(PolicyError::InvalidArgument(format!(
                "every {class} character is illegal"
            )));
        }

        let min_length = count(conf.min_length).max(required);
        if min_length > required && letters.is_empty() {
            return Err(PolicyError::InvalidArgument(
                "no filler characters are available".to_string(),
            ));
        }
        // Without filler the password is exactly the required characters.
        let max_length = if letters.is_empty() { min_length } else { max_length };

        Ok(Self {
            requirements,
            filler: letters,
            required,
            min_length,
            max_length,
            repeat_same: count(conf.repeat_same),
            words: conf
                .words_not_permitted
                .iter()
                .map(|w| w.to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        })
    }

    fn draw<R>(&self, rng: &mut R) -> PolicyResult<String>
    where
        R: Rng + ?Sized,
    {
        let length = length_between(rng, self.min_length, self.max_length);
        let mut chars = Vec::with_capacity(length);
        for (class, chars_of_class, n) in &self.requirements {
            chars.extend(draw(rng, chars_of_class, *n, class)?);
        }
        chars.extend(draw(rng, &self.filler, length - self.required, "filler")?);
        shuffle(rng, &mut chars);
        Ok(chars.into_iter().collect())
    }

    fn rejection(&self, candidate: &str) -> Option<&'static str> {
        if self.repeat_same > 0 && longest_run(candidate) > self.repeat_same {
            return Some("repeated characters");
        }
        let lowered = candidate.to_lowercase();
        if self.words.iter().any(|w| lowered.contains(w.as_str())) {
            return Some("forbidden word");
        }
        None
    }
}

fn draw<R>(rng: &mut R, pool: &[char], n: usize, class: &str) -> PolicyResult<Vec<char>>
where
    R: Rng + ?Sized,
{
    choose_many(rng, pool, n)
        .ok_or_else(|| PolicyError::InvalidArgument(format!("no {class} characters available")))
}

fn count(value: i32) -> usize {
    usize::try_from(value).unwrap_or_default()
}

fn longest_run(s: &str) -> usize {
    let mut longest = 0;
    let mut run = 0;
    let mut previous = None;
    for c in s.chars() {
        run = if previous == Some(c) { run + 1 } else { 1 };
        longest = longest.max(run);
        previous = Some(c);
    }
    longest
}
