//! Block state captured at query time

/// State of one cell, captured when queried. Empty cells are
/// represented with the air flag set, never as an absent value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockSnapshot {
    /// Full block identifier, e.g. `"gtceu:lv_input_hatch"`
    pub id: String,
    /// Whether the cell is empty space
    pub is_air: bool,
}

impl BlockSnapshot {
    /// Snapshot of a solid block with the given identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            is_air: false,
        }
    }

    /// Snapshot of an empty cell
    pub fn air() -> Self {
        Self {
            id: String::new(),
            is_air: true,
        }
    }

    /// Namespace part of the identifier (before `:`), or `""`
    pub fn namespace(&self) -> &str {
        match self.id.split_once(':') {
            Some((ns, _)) => ns,
            None => "",
        }
    }

    /// Path part of the identifier (after `:`), or the whole identifier
    pub fn path(&self) -> &str {
        match self.id.split_once(':') {
            Some((_, path)) => path,
            None => &self.id,
        }
    }
}
