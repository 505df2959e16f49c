//! Language identification and the single-hop fallback table.

use serde::{Deserialize, Serialize};

/// Languages known to the lang-pack library.
///
/// Each language carries a file-name abbreviation and, for regional
/// variants, a single designated fallback: the generic form of the same
/// language. The fallback is one hop only, never a chain.
///
/// # Example
///
/// ```
/// use langpack::Language;
///
/// assert_eq!(Language::EnglishUnitedStates.abbreviation(), "en_us");
/// assert_eq!(Language::EnglishUnitedStates.fallback(), Some(Language::English));
/// assert_eq!(Language::English.fallback(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Language {
    Arabic,
    ArabicSaudiArabia,
    Chinese,
    ChineseSimplified,
    ChineseTraditional,
    Czech,
    CzechCzechia,
    Danish,
    DanishDenmark,
    Dutch,
    DutchNetherlands,
    Flemish,
    English,
    EnglishAustralia,
    EnglishCanada,
    EnglishUnitedKingdom,
    EnglishUnitedStates,
    Finnish,
    FinnishFinland,
    French,
    FrenchCanada,
    FrenchFrance,
    German,
    GermanAustria,
    GermanGermany,
    GermanSwitzerland,
    Greek,
    GreekGreece,
    Italian,
    ItalianItaly,
    Japanese,
    JapaneseJapan,
    Korean,
    KoreanKorea,
    Norwegian,
    NorwegianNorway,
    Polish,
    PolishPoland,
    Portuguese,
    PortugueseBrazil,
    PortuguesePortugal,
    Russian,
    RussianRussia,
    Spanish,
    SpanishMexico,
    SpanishSpain,
    Swedish,
    SwedishSweden,
    Turkish,
    TurkishTurkey,
    Ukrainian,
    UkrainianUkraine,
}

impl Language {
    /// Every language known to the library, in a stable order.
    pub const ALL: &'static [Language] = &[
        Language::Arabic,
        Language::ArabicSaudiArabia,
        Language::Chinese,
        Language::ChineseSimplified,
        Language::ChineseTraditional,
        Language::Czech,
        Language::CzechCzechia,
        Language::Danish,
        Language::DanishDenmark,
        Language::Dutch,
        Language::DutchNetherlands,
        Language::Flemish,
        Language::English,
        Language::EnglishAustralia,
        Language::EnglishCanada,
        Language::EnglishUnitedKingdom,
        Language::EnglishUnitedStates,
        Language::Finnish,
        Language::FinnishFinland,
        Language::French,
        Language::FrenchCanada,
        Language::FrenchFrance,
        Language::German,
        Language::GermanAustria,
        Language::GermanGermany,
        Language::GermanSwitzerland,
        Language::Greek,
        Language::GreekGreece,
        Language::Italian,
        Language::ItalianItaly,
        Language::Japanese,
        Language::JapaneseJapan,
        Language::Korean,
        Language::KoreanKorea,
        Language::Norwegian,
        Language::NorwegianNorway,
        Language::Polish,
        Language::PolishPoland,
        Language::Portuguese,
        Language::PortugueseBrazil,
        Language::PortuguesePortugal,
        Language::Russian,
        Language::RussianRussia,
        Language::Spanish,
        Language::SpanishMexico,
        Language::SpanishSpain,
        Language::Swedish,
        Language::SwedishSweden,
        Language::Turkish,
        Language::TurkishTurkey,
        Language::Ukrainian,
        Language::UkrainianUkraine,
    ];

    /// The abbreviation used in pack file names (`{pack}_{abbreviation}.yml`).
    pub fn abbreviation(self) -> &'static str {
        match self {
            Language::Arabic => "ar",
            Language::ArabicSaudiArabia => "ar_sa",
            Language::Chinese => "zh",
            Language::ChineseSimplified => "zh_cn",
            Language::ChineseTraditional => "zh_tw",
            Language::Czech => "cz",
            Language::CzechCzechia => "cs_cz",
            Language::Danish => "da",
            Language::DanishDenmark => "da_dk",
            Language::Dutch => "nl",
            Language::DutchNetherlands => "nl_nl",
            Language::Flemish => "nl_be",
            Language::English => "en",
            Language::EnglishAustralia => "en_au",
            Language::EnglishCanada => "en_ca",
            Language::EnglishUnitedKingdom => "en_gb",
            Language::EnglishUnitedStates => "en_us",
            Language::Finnish => "fi",
            Language::FinnishFinland => "fi_fi",
            Language::French => "fr",
            Language::FrenchCanada => "fr_ca",
            Language::FrenchFrance => "fr_fr",
            Language::German => "de",
            Language::GermanAustria => "de_at",
            Language::GermanGermany => "de_de",
            Language::GermanSwitzerland => "de_ch",
            Language::Greek => "gr",
            Language::GreekGreece => "el_gr",
            Language::Italian => "it",
            Language::ItalianItaly => "it_it",
            Language::Japanese => "jp",
            Language::JapaneseJapan => "ja_jp",
            Language::Korean => "ko",
            Language::KoreanKorea => "ko_kr",
            Language::Norwegian => "no",
            Language::NorwegianNorway => "no_no",
            Language::Polish => "pl",
            Language::PolishPoland => "pl_pl",
            Language::Portuguese => "pt",
            Language::PortugueseBrazil => "pt_br",
            Language::PortuguesePortugal => "pt_pt",
            Language::Russian => "ru",
            Language::RussianRussia => "ru_ru",
            Language::Spanish => "es",
            Language::SpanishMexico => "es_mx",
            Language::SpanishSpain => "es_es",
            Language::Swedish => "sv",
            Language::SwedishSweden => "sv_se",
            Language::Turkish => "tr",
            Language::TurkishTurkey => "tr_tr",
            Language::Ukrainian => "uk",
            Language::UkrainianUkraine => "uk_ua",
        }
    }

    /// The single designated fallback language, if any.
    ///
    /// Regional variants fall back to their generic form. Generic languages
    /// have no fallback; resolution proceeds to the global pack instead.
    pub fn fallback(self) -> Option<Language> {
        match self {
            Language::ArabicSaudiArabia => Some(Language::Arabic),
            Language::ChineseSimplified | Language::ChineseTraditional => Some(Language::Chinese),
            Language::CzechCzechia => Some(Language::Czech),
            Language::DanishDenmark => Some(Language::Danish),
            Language::DutchNetherlands | Language::Flemish => Some(Language::Dutch),
            Language::EnglishAustralia
            | Language::EnglishCanada
            | Language::EnglishUnitedKingdom
            | Language::EnglishUnitedStates => Some(Language::English),
            Language::FinnishFinland => Some(Language::Finnish),
            Language::FrenchCanada | Language::FrenchFrance => Some(Language::French),
            Language::GermanAustria | Language::GermanGermany | Language::GermanSwitzerland => {
                Some(Language::German)
            }
            Language::GreekGreece => Some(Language::Greek),
            Language::ItalianItaly => Some(Language::Italian),
            Language::JapaneseJapan => Some(Language::Japanese),
            Language::KoreanKorea => Some(Language::Korean),
            Language::NorwegianNorway => Some(Language::Norwegian),
            Language::PolishPoland => Some(Language::Polish),
            Language::PortugueseBrazil | Language::PortuguesePortugal => {
                Some(Language::Portuguese)
            }
            Language::RussianRussia => Some(Language::Russian),
            Language::SpanishMexico | Language::SpanishSpain => Some(Language::Spanish),
            Language::SwedishSweden => Some(Language::Swedish),
            Language::TurkishTurkey => Some(Language::Turkish),
            Language::UkrainianUkraine => Some(Language::Ukrainian),
            _ => None,
        }
    }

    /// Looks up a language by abbreviation, case-insensitively.
    pub fn from_abbreviation(abbreviation: &str) -> Option<Language> {
        let lower = abbreviation.to_lowercase();
        Language::ALL
            .iter()
            .copied()
            .find(|language| language.abbreviation() == lower)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}
