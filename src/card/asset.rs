/// The fixed images a card is composed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CardAsset {
    CtuLogo,
    AseanLogo,
    IdPhoto,
    Signature,
    Building,
    IsoBadge,
}

impl CardAsset {
    pub const ALL: [CardAsset; 6] = [
        CardAsset::CtuLogo,
        CardAsset::AseanLogo,
        CardAsset::IdPhoto,
        CardAsset::Signature,
        CardAsset::Building,
        CardAsset::IsoBadge,
    ];

    /// File name inside the asset directory.
    pub fn file_name(self) -> &'static str {
        match self {
            CardAsset::CtuLogo => "ctulogo.png",
            CardAsset::AseanLogo => "aseanlogo.png",
            CardAsset::IdPhoto => "pic1.jpeg",
            CardAsset::Signature => "signature.png",
            CardAsset::Building => "building.png",
            CardAsset::IsoBadge => "tuv.png",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CardAsset::CtuLogo => "University logo",
            CardAsset::AseanLogo => "ASEAN logo",
            CardAsset::IdPhoto => "ID photo",
            CardAsset::Signature => "Signature",
            CardAsset::Building => "Campus building",
            CardAsset::IsoBadge => "ISO badge",
        }
    }
}
