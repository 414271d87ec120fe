//! Group checkboxes and the select-all box.

use groupcast_core::{GroupId, GroupOption};

#[derive(Debug, Clone)]
struct GroupCheckbox {
    option: GroupOption,
    checked: bool,
}

/// Checkbox list of recipient groups, in display order.
///
/// The select-all box only pushes its value down to every group; toggling a
/// single group does not change it.
#[derive(Debug, Clone, Default)]
pub struct GroupSelection {
    groups: Vec<GroupCheckbox>,
    select_all: bool,
}

impl GroupSelection {
    pub fn new(options: impl IntoIterator<Item = GroupOption>) -> Self {
        Self {
            groups: options
                .into_iter()
                .map(|option| GroupCheckbox {
                    option,
                    checked: false,
                })
                .collect(),
            select_all: false,
        }
    }

    pub fn options(&self) -> impl Iterator<Item = &GroupOption> {
        self.groups.iter().map(|g| &g.option)
    }

    /// Returns false if no checkbox carries `group_id`.
    pub fn toggle(&mut self, group_id: GroupId, checked: bool) -> bool {
        match self
            .groups
            .iter_mut()
            .find(|g| g.option.group_id == group_id)
        {
            Some(group) => {
                group.checked = checked;
                true
            }
            None => {
                tracing::debug!(group_id, "Ignoring toggle for unknown group");
                false
            }
        }
    }

    pub fn set_all(&mut self, checked: bool) {
        self.select_all = checked;
        for group in &mut self.groups {
            group.checked = checked;
        }
    }

    pub fn is_checked(&self, group_id: GroupId) -> bool {
        self.groups
            .iter()
            .any(|g| g.option.group_id == group_id && g.checked)
    }

    pub fn select_all_checked(&self) -> bool {
        self.select_all
    }

    /// Checked group ids in display order.
    pub fn checked_ids(&self) -> Vec<GroupId> {
        self.groups
            .iter()
            .filter(|g| g.checked)
            .map(|g| g.option.group_id)
            .collect()
    }

    /// Uncheck every group and the select-all box.
    pub fn clear(&mut self) {
        self.set_all(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection() -> GroupSelection {
        GroupSelection::new(vec![
            GroupOption::new(-1003, "Talabalar 1-kurs"),
            GroupOption::new(-1001, "Talabalar 2-kurs"),
            GroupOption::new(-1002, "O'qituvchilar"),
        ])
    }

    #[test]
    fn starts_unchecked() {
        let groups = selection();
        assert!(groups.checked_ids().is_empty());
        assert!(!groups.select_all_checked());
        assert_eq!(groups.options().count(), 3);
    }

    #[test]
    fn toggle_keeps_display_order() {
        let mut groups = selection();
        assert!(groups.toggle(-1002, true));
        assert!(groups.toggle(-1003, true));
        assert_eq!(groups.checked_ids(), vec![-1003, -1002]);

        groups.toggle(-1003, false);
        assert_eq!(groups.checked_ids(), vec![-1002]);
        assert!(!groups.is_checked(-1003));
    }

    #[test]
    fn toggle_unknown_group_is_ignored() {
        let mut groups = selection();
        assert!(!groups.toggle(42, true));
        assert!(groups.checked_ids().is_empty());
    }

    #[test]
    fn select_all_propagates() {
        let mut groups = selection();
        groups.set_all(true);
        assert_eq!(groups.checked_ids(), vec![-1003, -1001, -1002]);
        assert!(groups.select_all_checked());

        // Unchecking one group leaves the select-all box as is
        groups.toggle(-1001, false);
        assert!(groups.select_all_checked());
        assert_eq!(groups.checked_ids(), vec![-1003, -1002]);
    }

    #[test]
    fn clear_unchecks_everything() {
        let mut groups = selection();
        groups.set_all(true);
        groups.clear();
        assert!(groups.checked_ids().is_empty());
        assert!(!groups.select_all_checked());
    }
}
