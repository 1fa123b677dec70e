//! Torah-reading occasions and their aliyot counts.

use std::fmt;

/// The kind of day on which the Torah is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OccasionKind {
    RoshHashana,
    YomKippur,
    Sukkot,
    CholHamoedSukkot,
    ShminiAtzeret,
    SimchatTorah,
    Chanukah,
    Purim,
    ShushanPurim,
    Pesach,
    CholHamoedPesach,
    Shavuot,
    RoshChodesh,
    Shabbat,
    TzomGedalia,
    TenthOfTevet,
    TaanitEsther,
    SeventeenthOfTamuz,
    NinthOfAv,
}

impl OccasionKind {
    /// English description of the occasion.
    pub fn description(self) -> &'static str {
        match self {
            Self::RoshHashana => "Rosh Hashana",
            Self::YomKippur => "Yom Kippur",
            Self::Sukkot => "Sukkot",
            Self::CholHamoedSukkot => "Chol Hamoed Sukkot",
            Self::ShminiAtzeret => "Shmini Atzeret",
            Self::SimchatTorah => "Simchat Torah",
            Self::Chanukah => "Chanukah",
            Self::Purim => "Purim",
            Self::ShushanPurim => "Shushan Purim",
            Self::Pesach => "Pesach",
            Self::CholHamoedPesach => "Chol Hamoed Pesach",
            Self::Shavuot => "Shavuot",
            Self::RoshChodesh => "Rosh Chodesh",
            Self::Shabbat => "Shabbat",
            Self::TzomGedalia => "Tzom Gedalia",
            Self::TenthOfTevet => "10 of Tevet",
            Self::TaanitEsther => "Taanit Esther",
            Self::SeventeenthOfTamuz => "17 of Tamuz",
            Self::NinthOfAv => "9 of Av",
        }
    }

    /// Shacharit and mincha aliyot for this kind of day.
    pub fn aliyot(self) -> (u8, u8) {
        match self {
            Self::Shabbat => (7, 3),
            Self::YomKippur => (6, 3),
            Self::RoshHashana
            | Self::Sukkot
            | Self::ShminiAtzeret
            | Self::SimchatTorah
            | Self::Pesach
            | Self::Shavuot => (5, 0),
            Self::CholHamoedSukkot | Self::CholHamoedPesach | Self::RoshChodesh => (4, 0),
            Self::Chanukah | Self::Purim | Self::ShushanPurim => (3, 0),
            Self::TzomGedalia
            | Self::TenthOfTevet
            | Self::TaanitEsther
            | Self::SeventeenthOfTamuz
            | Self::NinthOfAv => (3, 3),
        }
    }

    /// Returns true for the public fast days.
    pub fn is_fast(self) -> bool {
        matches!(
            self,
            Self::TzomGedalia
                | Self::TenthOfTevet
                | Self::TaanitEsther
                | Self::SeventeenthOfTamuz
                | Self::NinthOfAv
        )
    }
}

impl fmt::Display for OccasionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A day with a public Torah reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TorahReadingOccasion {
    kind: OccasionKind,
    shacharit_aliyot: u8,
    mincha_aliyot: u8,
}

impl TorahReadingOccasion {
    /// Creates the occasion with the standard aliyot counts for `kind`.
    pub fn new(kind: OccasionKind) -> Self {
        let (shacharit_aliyot, mincha_aliyot) = kind.aliyot();
        Self {
            kind,
            shacharit_aliyot,
            mincha_aliyot,
        }
    }

    pub fn kind(&self) -> OccasionKind {
        self.kind
    }

    pub fn description(&self) -> &'static str {
        self.kind.description()
    }

    /// Number of aliyot at the morning reading.
    pub fn shacharit_aliyot(&self) -> u8 {
        self.shacharit_aliyot
    }

    /// Number of aliyot at the afternoon reading (0 if there is none).
    pub fn mincha_aliyot(&self) -> u8 {
        self.mincha_aliyot
    }

    /// A maftir is read whenever there are at least five morning aliyot.
    pub fn has_maftir(&self) -> bool {
        self.shacharit_aliyot >= 5
    }
}

impl From<OccasionKind> for TorahReadingOccasion {
    fn from(kind: OccasionKind) -> Self {
        Self::new(kind)
    }
}
