//! Static card catalog: the eight card kinds with their display
//! names, per-level flavor text, and image paths.

use serde::{Deserialize, Serialize};

use crate::progress::{MAX_LEVEL, MIN_LEVEL};

/// The eight fixed card kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    UzunKilic,
    SavasBaltasi,
    BuyuAsasi,
    Kalkan,
    SavasCekici,
    EgriKilic,
    KisaKilic,
    BuyuKitabi,
}

/// All card kinds, in catalog order. Default card sets are
/// provisioned in this order.
pub const CARD_TYPES: [CardType; 8] = [
    CardType::UzunKilic,
    CardType::SavasBaltasi,
    CardType::BuyuAsasi,
    CardType::Kalkan,
    CardType::SavasCekici,
    CardType::EgriKilic,
    CardType::KisaKilic,
    CardType::BuyuKitabi,
];

impl CardType {
    /// Stable identifier, also the stored wire/database form.
    pub fn slug(self) -> &'static str {
        match self {
            Self::UzunKilic => "uzun_kilic",
            Self::SavasBaltasi => "savas_baltasi",
            Self::BuyuAsasi => "buyu_asasi",
            Self::Kalkan => "kalkan",
            Self::SavasCekici => "savas_cekici",
            Self::EgriKilic => "egri_kilic",
            Self::KisaKilic => "kisa_kilic",
            Self::BuyuKitabi => "buyu_kitabi",
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::UzunKilic => "Uzun Kılıç",
            Self::SavasBaltasi => "Savaş Baltası",
            Self::BuyuAsasi => "Büyü Asası",
            Self::Kalkan => "Kalkan",
            Self::SavasCekici => "Savaş Çekici",
            Self::EgriKilic => "Eğri Kılıç",
            Self::KisaKilic => "Kısa Kılıç",
            Self::BuyuKitabi => "Büyü Kitabı",
        }
    }

    /// Image path for the card at `level`. Out-of-range levels fall
    /// back to the level-1 artwork.
    pub fn image(self, level: i32) -> String {
        let level = if (MIN_LEVEL..=MAX_LEVEL).contains(&level) {
            level
        } else {
            MIN_LEVEL
        };
        format!("/images/{}_{}.png", self.slug(), level)
    }

    /// Flavor description for the card at `level`. Out-of-range
    /// levels fall back to the level-1 text.
    pub fn description(self, level: i32) -> &'static str {
        let texts = self.level_descriptions();
        match level {
            2 => texts[1],
            3 => texts[2],
            _ => texts[0],
        }
    }

    fn level_descriptions(self) -> [&'static str; 3] {
        match self {
            Self::UzunKilic => [
                "Gümüş Diş - Sade, keskin bir savaş kılıcı.",
                "Zümrüt Yürek - Can alıcı darbeler için güçlendirildi.",
                "Altın Pençe - Kralların kanını döken efsanevi keskinlik.",
            ],
            Self::SavasBaltasi => [
                "Ay Parçası - Hafif ve hızlı bir balta.",
                "Zümrüt Kesik - Derin yaralar açan büyülü çelik.",
                "Efsane Yarma - Tek vuruşta kale kapısı deler.",
            ],
            Self::BuyuAsasi => [
                "Gölge Dalı - Temel büyü asası.",
                "Zümrüt Kök - Doğanın gücüyle titreşir.",
                "Altın Kök - Yıldızları yere indirir, zamanı büker.",
            ],
            Self::Kalkan => [
                "Gümüş Siperi - Basit bir koruma aracı.",
                "Zümrüt Zırh - Gelen saldırıyı yansıtır.",
                "Altın Duvar - Tanrılar bile geçemez.",
            ],
            Self::SavasCekici => [
                "Taş Parçalayıcı - Ağır ve yıkıcı.",
                "Zümrüt Ezici - Zırhları paramparça eder.",
                "Altın Hüküm - Dünyayı çatlatır, düşmanları ezer.",
            ],
            Self::EgriKilic => [
                "Gümüş Pençe - Hafif ve çevik bir bıçak.",
                "Zümrüt Çengel - Derin kesikler için eğildi.",
                "Altın Yılan - Gölge gibi kayar, kaderi biçer.",
            ],
            Self::KisaKilic => [
                "Gölge Kesik - Hızlı saldırılar için ideal.",
                "Zümrüt Fısıltı - Sessiz ama ölümcül.",
                "Altın Dilim - Zamanda bile iz bırakır.",
            ],
            Self::BuyuKitabi => [
                "Gümüş Sayfalar - Temel büyüleri içerir.",
                "Zümrüt Kehanet - Geleceği okur, kaderi değiştirir.",
                "Altın Kitabe - Evrenin sırlarını fısıldar, gerçekliği ezer.",
            ],
        }
    }
}

impl std::str::FromStr for CardType {
    type Err = UnknownCardType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CARD_TYPES
            .into_iter()
            .find(|t| t.slug() == s)
            .ok_or_else(|| UnknownCardType(s.to_string()))
    }
}

/// A stored card type value that is not one of the eight kinds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown card type: {0}")]
pub struct UnknownCardType(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip_through_from_str() {
        for card_type in CARD_TYPES {
            assert_eq!(card_type.slug().parse::<CardType>(), Ok(card_type));
        }
    }

    #[test]
    fn unknown_slug_is_rejected() {
        assert!("excalibur".parse::<CardType>().is_err());
    }

    #[test]
    fn image_path_follows_type_and_level() {
        assert_eq!(CardType::UzunKilic.image(1), "/images/uzun_kilic_1.png");
        assert_eq!(CardType::BuyuKitabi.image(3), "/images/buyu_kitabi_3.png");
    }

    #[test]
    fn image_path_falls_back_to_level_one_when_out_of_range() {
        assert_eq!(CardType::Kalkan.image(0), "/images/kalkan_1.png");
        assert_eq!(CardType::Kalkan.image(9), "/images/kalkan_1.png");
    }

    #[test]
    fn descriptions_change_with_level() {
        assert_eq!(
            CardType::UzunKilic.description(1),
            "Gümüş Diş - Sade, keskin bir savaş kılıcı."
        );
        assert_eq!(
            CardType::UzunKilic.description(3),
            "Altın Pençe - Kralların kanını döken efsanevi keskinlik."
        );
    }

    #[test]
    fn out_of_range_level_falls_back_to_level_one_text() {
        assert_eq!(
            CardType::Kalkan.description(7),
            "Gümüş Siperi - Basit bir koruma aracı."
        );
    }
}
