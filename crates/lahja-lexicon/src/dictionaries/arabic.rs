//! Arabic dialect markers. Matching is exact substring (no case in Arabic script).

use crate::types::DialectInfo;

pub const MARKERS: &[(&str, &[&str])] = &[
    (
        "egyptian",
        &[
            "إيه", "ازاي", "دلوقتي", "عايز", "كده", "بتاع", "أوي", "خالص", "عامل إيه", "ماشي",
            "مش",
        ],
    ),
    (
        "saudi_najdi",
        &[
            "وش", "علومك", "يبه", "ابي", "زين", "مير", "وش لونك", "هقوتي", "مره",
        ],
    ),
    (
        "saudi_hijazi",
        &[
            "دحين", "ابغى", "كدا", "إيش", "ايوه", "فين", "مرة حلو", "يا شيخ", "بالمرة",
        ],
    ),
    (
        "gulf",
        &[
            "شلونك", "وايد", "شنو", "جذي", "حيل", "شخبارك", "يالله", "ابا", "عساك بخير",
        ],
    ),
    (
        "levantine",
        &[
            "هلق", "كيفك", "منيح", "شو", "هيك", "بدي", "كتير", "شو عم تعمل", "يعني",
        ],
    ),
    (
        "iraqi",
        &[
            "شكو ماكو", "اكو", "ماكو", "هواية", "شلون", "عيوني", "كلش", "اغاتي", "زاغ",
        ],
    ),
    (
        "maghrebi",
        &[
            "بزاف", "واش", "دابا", "مزيان", "بصح", "شحال", "لاباس", "كيداير", "واخا",
        ],
    ),
    (
        "sudanese",
        &[
            "زول", "ياخي", "داير", "شديد", "كدي", "سمح", "مالك يا زول", "ساي", "هسي",
        ],
    ),
    (
        "yemeni",
        &[
            "ذلحين", "قده", "كيفوك", "ايش", "مابش", "شاهي", "مرتاح؟", "عاد", "ليش",
        ],
    ),
];

pub const INFO: &[(&str, DialectInfo)] = &[
    (
        "egyptian",
        DialectInfo {
            display_name: "Egyptian Arabic",
            description: "Spoken in Egypt; widely understood through film and media",
        },
    ),
    (
        "saudi_najdi",
        DialectInfo {
            display_name: "Najdi Arabic (Saudi)",
            description: "Central Saudi Arabia, including Riyadh",
        },
    ),
    (
        "saudi_hijazi",
        DialectInfo {
            display_name: "Hijazi Arabic (Saudi)",
            description: "Western Saudi Arabia, including Jeddah, Mecca and Medina",
        },
    ),
    (
        "gulf",
        DialectInfo {
            display_name: "Gulf Arabic",
            description: "Kuwait, Bahrain, Qatar, the UAE and eastern Saudi Arabia",
        },
    ),
    (
        "levantine",
        DialectInfo {
            display_name: "Levantine Arabic",
            description: "Syria, Lebanon, Jordan and Palestine",
        },
    ),
    (
        "iraqi",
        DialectInfo {
            display_name: "Iraqi Arabic",
            description: "Mesopotamian Arabic spoken across Iraq",
        },
    ),
    (
        "maghrebi",
        DialectInfo {
            display_name: "Maghrebi Arabic",
            description: "Morocco, Algeria and Tunisia (Darija)",
        },
    ),
    (
        "sudanese",
        DialectInfo {
            display_name: "Sudanese Arabic",
            description: "Spoken across Sudan",
        },
    ),
    (
        "yemeni",
        DialectInfo {
            display_name: "Yemeni Arabic",
            description: "Sanaani, Taizzi-Adeni and other Yemeni varieties",
        },
    ),
];

/// Synthetic result used when no Arabic marker matched.
pub const FALLBACK_DIALECT: &str = "Modern Standard Arabic";
pub const FALLBACK_DESCRIPTION: &str = "Default classification - formal Arabic";
pub const FALLBACK_CONFIDENCE: f64 = 0.5;
