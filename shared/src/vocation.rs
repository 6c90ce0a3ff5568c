/// Vocation family a member's vocation belongs to. Promoted and base
/// vocations share a family; anything unrecognised falls into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VocationFamily {
    Sorcerer,
    Druid,
    Paladin,
    Knight,
    Monk,
    Other,
}

/// (vocation name, family) pairs recognised by the roster.
pub const VOCATIONS: [(&str, VocationFamily); 10] = [
    ("Master Sorcerer", VocationFamily::Sorcerer),
    ("Sorcerer", VocationFamily::Sorcerer),
    ("Elder Druid", VocationFamily::Druid),
    ("Druid", VocationFamily::Druid),
    ("Royal Paladin", VocationFamily::Paladin),
    ("Paladin", VocationFamily::Paladin),
    ("Elite Knight", VocationFamily::Knight),
    ("Knight", VocationFamily::Knight),
    ("Exalted Monk", VocationFamily::Monk),
    ("Monk", VocationFamily::Monk),
];

pub const DEFAULT_BACKGROUND: &str = "assets/images/bg-default.jpg";

impl VocationFamily {
    pub fn from_vocation(vocation: &str) -> Self {
        VOCATIONS
            .iter()
            .find(|(name, _)| *name == vocation)
            .map(|(_, family)| *family)
            .unwrap_or(Self::Other)
    }

    /// Card background image for this family.
    pub fn background_image(self) -> &'static str {
        match self {
            Self::Sorcerer => "assets/images/bg-sorcerer.png",
            Self::Druid => "assets/images/bg-druid.png",
            Self::Paladin => "assets/images/bg-paladin.png",
            Self::Knight => "assets/images/bg-knight.png",
            Self::Monk => "assets/images/bg-monk.webp",
            Self::Other => DEFAULT_BACKGROUND,
        }
    }
}

pub fn background_for_vocation(vocation: &str) -> &'static str {
    VocationFamily::from_vocation(vocation).background_image()
}
