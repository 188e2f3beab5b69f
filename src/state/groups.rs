//! Repeating sub-form state for children and partners.
//!
//! DESIGN
//! ======
//! The counter is the single source of truth: section visibility and both
//! add/remove affordances are derived from it.
//! Sections are indexed from zero; with `count == n`, sections `0..n` are
//! visible.

#[cfg(test)]
#[path = "groups_test.rs"]
mod groups_test;

pub const DEFAULT_CHILD_LIMIT: usize = 10;
pub const DEFAULT_PARTNER_LIMIT: usize = 4;
pub const DEFAULT_INITIAL_COUNT: usize = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GroupKind {
    Child,
    Partner,
}

impl GroupKind {
    /// Prefix shared by section ids and posted input names.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Child => "child",
            Self::Partner => "partner",
        }
    }

    pub fn section_id(self, index: usize) -> String {
        format!("{}{index}", self.prefix())
    }

    pub fn add_button_id(self) -> &'static str {
        match self {
            Self::Child => "add-chd-btn",
            Self::Partner => "add-prt-btn",
        }
    }

    pub fn remove_button_id(self) -> &'static str {
        match self {
            Self::Child => "remove-chd-btn",
            Self::Partner => "remove-prt-btn",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Child => "الأبناء",
            Self::Partner => "الزوجات",
        }
    }
}

/// Bounded counter for one repeating group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RepeatingGroupState {
    pub kind: GroupKind,
    count: usize,
    max: usize,
}

impl RepeatingGroupState {
    /// New group; `initial` is clamped into `[0, max]`.
    pub fn new(kind: GroupKind, initial: usize, max: usize) -> Self {
        Self { kind, count: initial.min(max), max }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn max(&self) -> usize {
        self.max
    }

    /// Reveal the next section. Returns `false` when already at `max`.
    pub fn add(&mut self) -> bool {
        if self.count >= self.max {
            return false;
        }
        self.count += 1;
        log::debug!("{} group grew to {}", self.kind.prefix(), self.count);
        true
    }

    /// Hide the last visible section. Returns `false` when already empty.
    pub fn remove(&mut self) -> bool {
        if self.count == 0 {
            return false;
        }
        self.count -= 1;
        log::debug!("{} group shrank to {}", self.kind.prefix(), self.count);
        true
    }

    pub fn section_visible(&self, index: usize) -> bool {
        index < self.count
    }

    pub fn add_visible(&self) -> bool {
        self.count < self.max
    }

    pub fn remove_visible(&self) -> bool {
        self.count > 0
    }
}

/// Both repeating groups on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RepeatingGroups {
    pub children: RepeatingGroupState,
    pub partners: RepeatingGroupState,
}

impl Default for RepeatingGroups {
    fn default() -> Self {
        Self {
            children: RepeatingGroupState::new(GroupKind::Child, DEFAULT_INITIAL_COUNT, DEFAULT_CHILD_LIMIT),
            partners: RepeatingGroupState::new(GroupKind::Partner, DEFAULT_INITIAL_COUNT, DEFAULT_PARTNER_LIMIT),
        }
    }
}

impl RepeatingGroups {
    pub fn get(&self, kind: GroupKind) -> &RepeatingGroupState {
        match kind {
            GroupKind::Child => &self.children,
            GroupKind::Partner => &self.partners,
        }
    }

    pub fn get_mut(&mut self, kind: GroupKind) -> &mut RepeatingGroupState {
        match kind {
            GroupKind::Child => &mut self.children,
            GroupKind::Partner => &mut self.partners,
        }
    }

    pub fn add(&mut self, kind: GroupKind) -> bool {
        self.get_mut(kind).add()
    }

    pub fn remove(&mut self, kind: GroupKind) -> bool {
        self.get_mut(kind).remove()
    }
}
