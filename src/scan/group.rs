//! Grouping of classified components for display and upgrade planning

use std::collections::HashMap;

use super::classify::{ComponentInfo, ComponentType};

/// Components sharing one exact (type, tier) key.
///
/// Same-type components of different tiers are never merged; upgrade
/// decisions are tier-exact.
#[derive(Clone, Debug)]
pub struct ComponentGroup {
    pub component_type: ComponentType,
    pub tier: i32,
    /// Members in first-seen order; never empty
    pub members: Vec<ComponentInfo>,
}

impl ComponentGroup {
    /// First-encountered member, shown as the group's representative
    pub fn representative(&self) -> &ComponentInfo {
        &self.members[0]
    }

    /// Number of members
    pub fn count(&self) -> usize {
        self.members.len()
    }
}

/// Partition components into (type, tier) groups, preserving
/// first-seen order across the whole scan.
pub fn group_components(components: Vec<ComponentInfo>) -> Vec<ComponentGroup> {
    let mut groups: Vec<ComponentGroup> = Vec::new();
    let mut index: HashMap<(ComponentType, i32), usize> = HashMap::new();

    for component in components {
        let key = (component.component_type, component.tier);
        match index.get(&key) {
            Some(&i) => groups[i].members.push(component),
            None => {
                index.insert(key, groups.len());
                groups.push(ComponentGroup {
                    component_type: component.component_type,
                    tier: component.tier,
                    members: vec![component],
                });
            }
        }
    }

    groups
}
