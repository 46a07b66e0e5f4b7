//! The [`Rule`] trait, the built-in [`LifeRule`] variants, and the
//! shared [`RuleRef`] handle a [`Generation`] carries.
//!
//! A rule decides whether a cell is alive in the next generation from
//! three inputs only: the current generation, the cell, and the number of
//! its live Moore neighbours. Rules are pure and stateless.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

use crate::error::RuleParseError;
use crate::{Coordinates, Generation};

/// A survival/birth rule.
///
/// # Contract
///
/// - `evaluate()` MUST be deterministic and MUST NOT consult anything
///   other than its arguments.
/// - Only cells with at least one live neighbour are ever evaluated.
///   A rule that would bring a cell to life with zero neighbours is
///   never given the chance to do so.
///
/// Any `Fn(&Generation, Coordinates, u32) -> bool` closure is a rule;
/// use [`RuleRef::from_fn`] to get argument types inferred.
///
/// # Examples
///
/// ```
/// use lifegrid_core::{Coordinates, Generation, Rule, RuleRef};
///
/// // "Replicator": born or survive on an odd neighbour count.
/// struct Replicator;
///
/// impl Rule for Replicator {
///     fn name(&self) -> &str { "replicator" }
///
///     fn evaluate(&self, _: &Generation, _: Coordinates, n: u32) -> bool {
///         n % 2 == 1
///     }
/// }
///
/// let rule = RuleRef::custom(Replicator);
/// assert_eq!(rule.name(), "replicator");
/// ```
pub trait Rule: Send + Sync + 'static {
    /// Human-readable name for logging and debugging.
    fn name(&self) -> &str {
        "custom"
    }

    /// Whether `cell` is alive in the generation after `generation`,
    /// given its current number of live Moore neighbours.
    fn evaluate(&self, generation: &Generation, cell: Coordinates, live_neighbours: u32) -> bool;
}

impl<F> Rule for F
where
    F: Fn(&Generation, Coordinates, u32) -> bool + Send + Sync + 'static,
{
    fn evaluate(&self, generation: &Generation, cell: Coordinates, live_neighbours: u32) -> bool {
        self(generation, cell, live_neighbours)
    }
}

// ── LifeRule ────────────────────────────────────────────────────────

/// The five rules shipped with lifegrid.
///
/// | Rule | Survives with | Born with |
/// |---|---|---|
/// | `Conway` | 2, 3 | 3 |
/// | `HighLife` | 2, 3 | 3, 6 |
/// | `DayAndNight` | 3, 4, 6, 7, 8 | 3, 6, 7, 8 |
/// | `Life34` | 3, 4 | 3, 4 |
/// | `Seeds` | never | 2 |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum LifeRule {
    /// Conway's Game of Life (`B3/S23`).
    #[default]
    Conway,
    /// High-Life (`B36/S23`), home of the replicator.
    HighLife,
    /// Day & Night (`B3678/S34678`).
    DayAndNight,
    /// Life 3-4 (`B34/S34`).
    Life34,
    /// Seeds (`B2/S`): every live cell dies.
    Seeds,
}

impl LifeRule {
    /// Every built-in rule, in declaration order.
    pub const ALL: [LifeRule; 5] = [
        LifeRule::Conway,
        LifeRule::HighLife,
        LifeRule::DayAndNight,
        LifeRule::Life34,
        LifeRule::Seeds,
    ];

    /// Whether a live cell with `n` live neighbours stays alive.
    pub fn survives(self, n: u32) -> bool {
        match self {
            Self::Conway | Self::HighLife => n == 2 || n == 3,
            Self::DayAndNight => matches!(n, 3 | 4 | 6 | 7 | 8),
            Self::Life34 => n == 3 || n == 4,
            Self::Seeds => false,
        }
    }

    /// Whether a dead cell with `n` live neighbours comes to life.
    pub fn born(self, n: u32) -> bool {
        match self {
            Self::Conway => n == 3,
            Self::HighLife => n == 3 || n == 6,
            Self::DayAndNight => matches!(n, 3 | 6 | 7 | 8),
            Self::Life34 => n == 3 || n == 4,
            Self::Seeds => n == 2,
        }
    }

    /// Canonical name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Conway => "conway",
            Self::HighLife => "high-life",
            Self::DayAndNight => "day-and-night",
            Self::Life34 => "life-3-4",
            Self::Seeds => "seeds",
        }
    }

    /// The rule in `B/S` notation.
    pub fn rulestring(self) -> &'static str {
        match self {
            Self::Conway => "B3/S23",
            Self::HighLife => "B36/S23",
            Self::DayAndNight => "B3678/S34678",
            Self::Life34 => "B34/S34",
            Self::Seeds => "B2/S",
        }
    }
}

impl Rule for LifeRule {
    fn name(&self) -> &str {
        self.as_str()
    }

    fn evaluate(&self, generation: &Generation, cell: Coordinates, live_neighbours: u32) -> bool {
        if generation.is_alive_at(cell) {
            self.survives(live_neighbours)
        } else {
            self.born(live_neighbours)
        }
    }
}

impl fmt::Display for LifeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LifeRule {
    type Err = RuleParseError;

    /// Accepts a canonical name (`"high-life"`, also `"highlife"` and
    /// `"high_life"`) or the rule's exact rulestring (`"B36/S23"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        for rule in Self::ALL {
            let name: String = rule.as_str().chars().filter(|c| *c != '-').collect();
            if normalized == name || s.trim().eq_ignore_ascii_case(rule.rulestring()) {
                return Ok(rule);
            }
        }
        match normalized.as_str() {
            "gameoflife" | "life" => Ok(Self::Conway),
            _ => Err(RuleParseError::Malformed {
                input: s.to_string(),
            }),
        }
    }
}

// ── Totalistic ──────────────────────────────────────────────────────

/// An outer-totalistic rule built from a `B<digits>/S<digits>` string.
///
/// ```
/// use lifegrid_core::Totalistic;
///
/// let high_life: Totalistic = "B36/S23".parse().unwrap();
/// assert!(high_life.born(6));
/// assert!(!high_life.survives(6));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Totalistic {
    birth: [bool; 9],
    survival: [bool; 9],
    rulestring: String,
}

impl Totalistic {
    /// Build a rule from explicit birth and survival neighbour counts.
    ///
    /// Counts above 8 are rejected.
    pub fn new(birth: &[u32], survival: &[u32]) -> Result<Self, RuleParseError> {
        let mut b = [false; 9];
        let mut s = [false; 9];
        for (table, counts) in [(&mut b, birth), (&mut s, survival)] {
            for &n in counts {
                let slot = table
                    .get_mut(n as usize)
                    .ok_or(RuleParseError::CountOutOfRange { count: n })?;
                *slot = true;
            }
        }
        Ok(Self::from_tables(b, s))
    }

    fn from_tables(birth: [bool; 9], survival: [bool; 9]) -> Self {
        let digits = |table: &[bool; 9]| -> String {
            (0..9u32)
                .filter(|&n| table[n as usize])
                .filter_map(|n| char::from_digit(n, 10))
                .collect()
        };
        let rulestring = format!("B{}/S{}", digits(&birth), digits(&survival));
        Self {
            birth,
            survival,
            rulestring,
        }
    }

    /// Whether a dead cell with `n` live neighbours comes to life.
    pub fn born(&self, n: u32) -> bool {
        self.birth.get(n as usize).copied().unwrap_or(false)
    }

    /// Whether a live cell with `n` live neighbours stays alive.
    pub fn survives(&self, n: u32) -> bool {
        self.survival.get(n as usize).copied().unwrap_or(false)
    }

    /// Normalized rulestring (digits sorted, upper-case letters).
    pub fn rulestring(&self) -> &str {
        &self.rulestring
    }
}

impl From<LifeRule> for Totalistic {
    fn from(rule: LifeRule) -> Self {
        let mut birth = [false; 9];
        let mut survival = [false; 9];
        for n in 0..9u32 {
            birth[n as usize] = rule.born(n);
            survival[n as usize] = rule.survives(n);
        }
        Self::from_tables(birth, survival)
    }
}

impl FromStr for Totalistic {
    type Err = RuleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || RuleParseError::Malformed {
            input: s.to_string(),
        };
        let (b_part, s_part) = s.trim().split_once('/').ok_or_else(malformed)?;
        let b_digits = b_part
            .strip_prefix(['B', 'b'])
            .ok_or_else(malformed)?;
        let s_digits = s_part
            .strip_prefix(['S', 's'])
            .ok_or_else(malformed)?;

        let mut tables = [[false; 9]; 2];
        for (table, digits) in tables.iter_mut().zip([b_digits, s_digits]) {
            for c in digits.chars() {
                let n = c.to_digit(10).ok_or_else(malformed)?;
                if n > 8 {
                    return Err(RuleParseError::CountOutOfRange { count: n });
                }
                table[n as usize] = true;
            }
        }
        let [birth, survival] = tables;
        Ok(Self::from_tables(birth, survival))
    }
}

impl Rule for Totalistic {
    fn name(&self) -> &str {
        &self.rulestring
    }

    fn evaluate(&self, generation: &Generation, cell: Coordinates, live_neighbours: u32) -> bool {
        if generation.is_alive_at(cell) {
            self.survives(live_neighbours)
        } else {
            self.born(live_neighbours)
        }
    }
}

// ── RuleRef ─────────────────────────────────────────────────────────

/// The rule a [`Generation`] evolves under.
///
/// Built-ins compare by variant. Custom rules compare by identity: two
/// handles are equal only when they were cloned from the same
/// [`RuleRef::custom`] call, so generations that share a custom rule
/// compare structurally while distinct rule values never collide.
#[derive(Clone)]
pub enum RuleRef {
    /// One of the shipped rules.
    Builtin(LifeRule),
    /// A user-supplied rule, shared between every generation it produces.
    Custom(Arc<dyn Rule>),
}

impl RuleRef {
    /// Wrap a user-defined rule.
    pub fn custom(rule: impl Rule) -> Self {
        Self::Custom(Arc::new(rule))
    }

    /// Wrap a closure as a rule.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&Generation, Coordinates, u32) -> bool + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }

    /// Name of the underlying rule.
    pub fn name(&self) -> &str {
        match self {
            Self::Builtin(rule) => rule.as_str(),
            Self::Custom(rule) => rule.name(),
        }
    }

    /// Evaluate the underlying rule.
    pub fn evaluate(&self, generation: &Generation, cell: Coordinates, live_neighbours: u32) -> bool {
        match self {
            Self::Builtin(rule) => rule.evaluate(generation, cell, live_neighbours),
            Self::Custom(rule) => rule.evaluate(generation, cell, live_neighbours),
        }
    }

    /// The built-in variant, if this is one.
    pub fn as_builtin(&self) -> Option<LifeRule> {
        match self {
            Self::Builtin(rule) => Some(*rule),
            Self::Custom(_) => None,
        }
    }
}

impl Default for RuleRef {
    fn default() -> Self {
        Self::Builtin(LifeRule::Conway)
    }
}

impl From<LifeRule> for RuleRef {
    fn from(rule: LifeRule) -> Self {
        Self::Builtin(rule)
    }
}

impl From<Totalistic> for RuleRef {
    fn from(rule: Totalistic) -> Self {
        Self::custom(rule)
    }
}

impl PartialEq for RuleRef {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Builtin(a), Self::Builtin(b)) => a == b,
            (Self::Custom(a), Self::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for RuleRef {}

impl Hash for RuleRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Builtin(rule) => {
                0u8.hash(state);
                rule.hash(state);
            }
            Self::Custom(rule) => {
                1u8.hash(state);
                (Arc::as_ptr(rule) as *const () as usize).hash(state);
            }
        }
    }
}

impl fmt::Debug for RuleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin(rule) => f.debug_tuple("Builtin").field(rule).finish(),
            Self::Custom(rule) => f.debug_tuple("Custom").field(&rule.name()).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_cell(alive: bool) -> (Generation, Coordinates) {
        let cell = Coordinates::new(1, 1);
        let cells = if alive { vec![cell] } else { vec![] };
        (Generation::new(cells, 3, 3, LifeRule::Conway), cell)
    }

    /// Expected survival/birth tables, indexed by neighbour count 0..=8.
    fn table(rule: LifeRule) -> ([bool; 9], [bool; 9]) {
        let set = |ns: &[usize]| {
            let mut t = [false; 9];
            for &n in ns {
                t[n] = true;
            }
            t
        };
        match rule {
            LifeRule::Conway => (set(&[2, 3]), set(&[3])),
            LifeRule::HighLife => (set(&[2, 3]), set(&[3, 6])),
            LifeRule::DayAndNight => (set(&[3, 4, 6, 7, 8]), set(&[3, 6, 7, 8])),
            LifeRule::Life34 => (set(&[3, 4]), set(&[3, 4])),
            LifeRule::Seeds => (set(&[]), set(&[2])),
        }
    }

    #[test]
    fn builtin_rules_match_their_tables() {
        let (alive_gen, cell) = single_cell(true);
        let (dead_gen, _) = single_cell(false);
        for rule in LifeRule::ALL {
            let (survive, born) = table(rule);
            for n in 0..=8u32 {
                assert_eq!(
                    rule.evaluate(&alive_gen, cell, n),
                    survive[n as usize],
                    "{rule} survival with {n} neighbours"
                );
                assert_eq!(
                    rule.evaluate(&dead_gen, cell, n),
                    born[n as usize],
                    "{rule} birth with {n} neighbours"
                );
            }
        }
    }

    #[test]
    fn builtin_rules_agree_with_their_rulestrings() {
        for rule in LifeRule::ALL {
            let parsed: Totalistic = rule.rulestring().parse().unwrap();
            assert_eq!(parsed, Totalistic::from(rule), "{rule}");
            assert_eq!(parsed.rulestring(), rule.rulestring());
        }
    }

    #[test]
    fn life_rule_parses_names_and_rulestrings() {
        assert_eq!("conway".parse::<LifeRule>().unwrap(), LifeRule::Conway);
        assert_eq!("HighLife".parse::<LifeRule>().unwrap(), LifeRule::HighLife);
        assert_eq!("day_and_night".parse::<LifeRule>().unwrap(), LifeRule::DayAndNight);
        assert_eq!("life-3-4".parse::<LifeRule>().unwrap(), LifeRule::Life34);
        assert_eq!("b2/s".parse::<LifeRule>().unwrap(), LifeRule::Seeds);
        assert!("brian".parse::<LifeRule>().is_err());
    }

    #[test]
    fn totalistic_normalizes_rulestring() {
        let rule: Totalistic = "b63/s32".parse().unwrap();
        assert_eq!(rule.rulestring(), "B36/S23");
    }

    #[test]
    fn totalistic_rejects_bad_input() {
        assert!(matches!(
            "B3S23".parse::<Totalistic>(),
            Err(RuleParseError::Malformed { .. })
        ));
        assert!(matches!(
            "B39/S23".parse::<Totalistic>(),
            Err(RuleParseError::CountOutOfRange { count: 9 })
        ));
        assert!(matches!(
            "Bx/S23".parse::<Totalistic>(),
            Err(RuleParseError::Malformed { .. })
        ));
        assert!(Totalistic::new(&[9], &[]).is_err());
    }

    #[test]
    fn custom_rules_compare_by_identity() {
        let a = RuleRef::from_fn(|_, _, n| n == 3);
        let b = RuleRef::from_fn(|_, _, n| n == 3);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
        assert_eq!(RuleRef::from(LifeRule::Seeds), RuleRef::Builtin(LifeRule::Seeds));
        assert_ne!(RuleRef::from(LifeRule::Seeds), a);
    }

    #[test]
    fn rule_ref_reports_names() {
        assert_eq!(RuleRef::default().name(), "conway");
        assert_eq!(RuleRef::from_fn(|_, _, _| false).name(), "custom");
        let t: Totalistic = "B2/S".parse().unwrap();
        assert_eq!(RuleRef::from(t).name(), "B2/S");
    }
}
