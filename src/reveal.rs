//! Reveal flags, skill-bar fills, and the hero stagger schedule.
//!
//! Both flags here are monotonic: once a target is visible or a bar is
//! animated it never reverts, so repeated intersection reports and late
//! stagger timers degrade to no-ops.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::consts::{HERO_REVEAL_DELAY_MS, HERO_REVEAL_STAGGER_MS};

/// Key for one observed reveal target, dense from zero in registration order.
pub type RevealKey = usize;

/// Key for one skill bar, dense from zero in registration order.
pub type BarKey = usize;

#[derive(Debug, Clone, Copy)]
struct RevealTarget {
    visible: bool,
    in_skills_group: bool,
}

#[derive(Debug, Clone, Copy)]
struct SkillBar {
    percent: f64,
    animated: bool,
}

/// A fill the host must perform: set the bar's width to its percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarFill {
    pub bar: BarKey,
    pub percent: f64,
}

/// Monotonic reveal state for every observed element and skill bar.
#[derive(Debug, Clone, Default)]
pub struct RevealState {
    targets: Vec<RevealTarget>,
    bars: Vec<SkillBar>,
}

impl RevealState {
    /// Register an observed element. Keys are handed out densely in call
    /// order, so the host can mirror them with a plain element list.
    pub fn add_target(&mut self, in_skills_group: bool) -> RevealKey {
        self.targets.push(RevealTarget { visible: false, in_skills_group });
        self.targets.len() - 1
    }

    /// Register a skill bar with its declared fill percentage.
    pub fn add_bar(&mut self, percent: f64) -> BarKey {
        self.bars.push(SkillBar { percent, animated: false });
        self.bars.len() - 1
    }

    /// First-time reveal for a key. `false` when already visible or unknown.
    pub fn reveal(&mut self, key: RevealKey) -> bool {
        match self.targets.get_mut(key) {
            Some(target) if !target.visible => {
                target.visible = true;
                true
            }
            _ => false,
        }
    }

    /// Whether an intersection of this target runs the skill-bar fill pass.
    #[must_use]
    pub fn triggers_bar_fill(&self, key: RevealKey) -> bool {
        self.targets.get(key).is_some_and(|target| target.in_skills_group)
    }

    /// Fill every bar not yet animated, marking each on the way out.
    pub fn fill_pending_bars(&mut self) -> Vec<BarFill> {
        let mut fills = Vec::new();
        for (bar, state) in self.bars.iter_mut().enumerate() {
            if !state.animated {
                state.animated = true;
                fills.push(BarFill { bar, percent: state.percent });
            }
        }
        fills
    }

    /// Whether this target has been revealed.
    #[must_use]
    pub fn is_visible(&self, key: RevealKey) -> bool {
        self.targets.get(key).is_some_and(|target| target.visible)
    }
}

/// Delay before the hero element at `ordinal` reveals once the page is
/// ready: a fixed lead-in plus a per-element stagger.
#[must_use]
pub fn hero_reveal_delay_ms(ordinal: usize) -> u32 {
    let ordinal = u32::try_from(ordinal).unwrap_or(u32::MAX);
    HERO_REVEAL_DELAY_MS.saturating_add(HERO_REVEAL_STAGGER_MS.saturating_mul(ordinal))
}
