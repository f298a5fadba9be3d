//! Operational status of a multiblock structure

/// Status reported by a controller, for presentation-layer display
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MultiblockStatus {
    Active,
    Idle,
    NeedsMaintenance,
    NoPower,
    Disabled,
    Unformed,
    OutputFull,
}

impl MultiblockStatus {
    /// RGB display color for this status
    pub fn color(&self) -> u32 {
        match self {
            Self::Active => 0x00ff00,
            Self::Idle => 0xffff00,
            Self::NeedsMaintenance => 0xff8800,
            Self::NoPower => 0xff0000,
            Self::Disabled => 0x808080,
            Self::Unformed => 0xff0000,
            Self::OutputFull => 0x0088ff,
        }
    }

    /// Human-readable status label
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Idle => "Idle",
            Self::NeedsMaintenance => "Needs Maintenance",
            Self::NoPower => "No Power",
            Self::Disabled => "Disabled",
            Self::Unformed => "Unformed",
            Self::OutputFull => "Output Full",
        }
    }
}
