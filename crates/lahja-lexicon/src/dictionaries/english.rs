//! English dialect markers. Matching folds case.

use crate::types::DialectInfo;

pub const MARKERS: &[(&str, &[&str])] = &[
    (
        "american",
        &[
            "color", "favorite", "apartment", "sidewalk", "elevator", "gasoline", "cookie",
            "vacation", "faucet", "y'all",
        ],
    ),
    (
        "british",
        &[
            "colour", "lorry", "petrol", "queue", "biscuit", "rubbish", "cheers", "brilliant",
            "fortnight", "bloody",
        ],
    ),
    (
        "australian",
        &[
            "arvo", "servo", "brekkie", "g'day", "fair dinkum", "barbie", "bottle-o", "thongs",
            "heaps good", "mozzie",
        ],
    ),
    (
        "canadian",
        &[
            "eh?", "toque", "loonie", "toonie", "double-double", "washroom", "chesterfield",
            "poutine", "keener", "hydro bill",
        ],
    ),
];

pub const INFO: &[(&str, DialectInfo)] = &[
    (
        "american",
        DialectInfo {
            display_name: "American English",
            description: "Standard American English vocabulary and spelling",
        },
    ),
    (
        "british",
        DialectInfo {
            display_name: "British English",
            description: "British vocabulary and spelling conventions",
        },
    ),
    (
        "australian",
        DialectInfo {
            display_name: "Australian English",
            description: "Australian slang and vocabulary",
        },
    ),
    (
        "canadian",
        DialectInfo {
            display_name: "Canadian English",
            description: "Canadian vocabulary mixing British and American forms",
        },
    ),
];

/// Confidence shown for a dialect whose score stayed at exactly zero.
pub const ZERO_SCORE_DEFAULTS: &[(&str, f64)] =
    &[("british", 0.2), ("australian", 0.1), ("canadian", 0.1)];

/// Kept through truncation whenever they survive the floor.
pub const ALWAYS_LISTED: &[&str] = &["american"];
