// the archive's static catalogue
//
// records are authored here and never change at runtime.  the cid is shown
// verbatim; it is decorative and never resolved against a network
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Work {
    pub id: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub owner: &'static str,
    pub cid: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

impl Work {
    // "WORK-001" is shown as "WORK 001" in the home page preview
    pub fn preview_label(&self) -> String {
        self.id.replace('-', " ")
    }

    pub fn preview_caption(&self, owner_label: &str) -> String {
        format!("{} / {owner_label}: {}", self.date, self.owner)
    }
}

// decorative images, served alongside the wasm bundle
pub mod images {
    pub const HERO_KIMONO: &str = "/assets/hero-kimono.jpg";
    pub const CALLIGRAPHY: &str = "/assets/calligraphy-1.jpg";
    pub const ZEN_GARDEN: &str = "/assets/zen-garden.jpg";
    pub const FABRIC_TEXTURE: &str = "/assets/fabric-texture.jpg";
    pub const INCENSE_SMOKE: &str = "/assets/incense-smoke.jpg";
    pub const WASHI_PAPER: &str = "/assets/washi-paper.jpg";
    pub const INK_WATER: &str = "/assets/ink-water.jpg";
    pub const PRAYER_HANDS: &str = "/assets/prayer-hands.jpg";
}

pub static WORKS: [Work; 6] = [
    Work {
        id: "WORK-001",
        title: "Black Kimono Robe",
        date: "2024.03.15",
        owner: "KURO-001",
        cid: "bafybeigdyrzt5sfp7udm7hu76uh7y26nf3efuylqabf3oclgtqy55fbzdi",
        image: images::WASHI_PAPER,
        description: "Traditional silk kimono robe, hand-dyed in pure black. A meditation on absence.",
    },
    Work {
        id: "WORK-002",
        title: "Ink Flow Series",
        date: "2024.03.20",
        owner: "KURO-002",
        cid: "bafybeihdwdcefgh4dqkjv7pxqvz5rhhrwwyxgqxgrdcx3vctvs6mfxqfti",
        image: images::INK_WATER,
        description: "Limited edition print exploring the dissolution of form into void.",
    },
    Work {
        id: "WORK-003",
        title: "Woven Silence",
        date: "2024.03.25",
        owner: "KURO-003",
        cid: "bafybeiezzkfv3pqvmvlkwhlzxvq5raxqmhzxqbvxqavbvzxcvbqwertyui",
        image: images::FABRIC_TEXTURE,
        description: "Hand-woven textile piece embodying the texture of contemplation.",
    },
    Work {
        id: "WORK-004",
        title: "Calligraphy Zero",
        date: "2024.04.01",
        owner: "KURO-004",
        cid: "bafybeiczsscdsbs5ftdngrqw6aw3mbubrjfkdaaw4qixohhcagjfmxhvq4",
        image: images::CALLIGRAPHY,
        description: "Original calligraphy work: the character for emptiness, rendered in absence.",
    },
    Work {
        id: "WORK-005",
        title: "Garden of Stillness",
        date: "2024.04.10",
        owner: "KURO-005",
        cid: "bafybeidtb6gvxqvgvqvxqvxqvxqvxqvxqvxqvxqvxqvxqvxqvxqvxqvxq",
        image: images::ZEN_GARDEN,
        description: "Photographic meditation on the architecture of tranquility.",
    },
    Work {
        id: "WORK-006",
        title: "Breath Rising",
        date: "2024.04.15",
        owner: "KURO-006",
        cid: "bafybeibqvxqvxqvxqvxqvxqvxqvxqvxqvxqvxqvxqvxqvxqvxqvxqvxqv",
        image: images::INCENSE_SMOKE,
        description: "Captured moment of incense ascending—ephemeral made eternal.",
    },
];

// works shown on the home page
pub fn featured() -> &'static [Work] {
    &WORKS[..2]
}

// reveal delay for the n-th archive card, in seconds
pub fn card_delay(index: usize) -> f64 {
    index as f64 * 0.1
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn catalogue_has_six_unique_works() {
        let ids: HashSet<_> = WORKS.iter().map(|w| w.id).collect();
        assert_eq!(WORKS.len(), 6);
        assert_eq!(ids.len(), WORKS.len());
    }

    #[test]
    fn every_record_is_filled_in() {
        for work in WORKS.iter() {
            assert!(work.id.starts_with("WORK-"));
            assert!(work.cid.starts_with("bafy"), "{}", work.id);
            assert!(work.image.starts_with("/assets/"));
            assert!(!work.title.is_empty());
            assert!(!work.description.is_empty());
            assert_eq!(work.date.len(), "2024.03.15".len());
        }
    }

    #[test]
    fn featured_are_the_first_two() {
        let featured = featured();
        assert_eq!(featured.len(), 2);
        assert_eq!(featured[0].preview_label(), "WORK 001");
        assert_eq!(
            featured[1].preview_caption("Owner"),
            "2024.03.20 / Owner: KURO-002"
        );
    }

    #[test]
    fn card_delays_step_by_a_tenth() {
        assert_eq!(card_delay(0), 0.0);
        assert!((card_delay(5) - 0.5).abs() < 1e-9);
    }
}
