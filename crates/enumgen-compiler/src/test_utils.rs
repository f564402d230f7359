//! Test fixtures and snapshot helpers.

use enumgen_core::{EnumExtraction, IntKind};

use crate::{EnumLayout, GenerationConfig, Resolver};

/// `Monday..Sunday = 0..6`.
pub fn day() -> EnumExtraction {
    EnumExtraction::from_pairs(
        "Day",
        [
            ("Monday", 0),
            ("Tuesday", 1),
            ("Wednesday", 2),
            ("Thursday", 3),
            ("Friday", 4),
            ("Saturday", 5),
            ("Sunday", 6),
        ],
    )
}

/// `DayMonday..DaySunday = 0..6`.
pub fn prefixed_day() -> EnumExtraction {
    EnumExtraction::from_pairs(
        "Day",
        [
            ("DayMonday", 0),
            ("DayTuesday", 1),
            ("DayWednesday", 2),
            ("DayThursday", 3),
            ("DayFriday", 4),
            ("DaySaturday", 5),
            ("DaySunday", 6),
        ],
    )
}

/// `EnumFirst..EnumSeventh = 0..6`.
pub fn camel() -> EnumExtraction {
    EnumExtraction::from_pairs(
        "Camel",
        [
            ("EnumFirst", 0),
            ("EnumSecond", 1),
            ("EnumThird", 2),
            ("EnumFourth", 3),
            ("EnumFifth", 4),
            ("EnumSixth", 5),
            ("EnumSeventh", 6),
        ],
    )
}

/// Starts at 1 after a blank constant.
pub fn number() -> EnumExtraction {
    EnumExtraction::from_pairs("Number", [("_", 0), ("One", 1), ("Two", 2), ("Three", 3)])
}

/// Three runs: `{2,3}`, `{5..9}`, `{11}`.
pub fn gap() -> EnumExtraction {
    EnumExtraction::from_pairs(
        "Gap",
        [
            ("Two", 2),
            ("Three", 3),
            ("Five", 5),
            ("Six", 6),
            ("Seven", 7),
            ("Eight", 8),
            ("Nine", 9),
            ("Eleven", 11),
        ],
    )
}

/// Signed values spanning zero.
pub fn num() -> EnumExtraction {
    EnumExtraction::from_pairs(
        "Num",
        [("m_2", -2), ("m_1", -1), ("m0", 0), ("m1", 1), ("m2", 2)],
    )
}

/// Unsigned values in two runs, declared out of order.
pub fn unum() -> EnumExtraction {
    EnumExtraction::new("Unum", IntKind::Uint)
        .member("m_2", 253)
        .member("m_1", 254)
        .member("m0", 0)
        .member("m1", 1)
        .member("m2", 2)
}

/// Thirteen scattered values plus an alias of 7.
pub fn prime() -> EnumExtraction {
    EnumExtraction::from_pairs(
        "Prime",
        [
            ("p2", 2),
            ("p3", 3),
            ("p5", 5),
            ("p7", 7),
            ("p77", 7),
            ("p11", 11),
            ("p13", 13),
            ("p17", 17),
            ("p19", 19),
            ("p23", 23),
            ("p29", 29),
            ("p37", 31),
            ("p41", 41),
            ("p43", 43),
        ],
    )
}

/// Generate one enum block, panicking on failure.
pub fn go_block(extraction: &EnumExtraction, config: &GenerationConfig) -> String {
    crate::generate(extraction, config)
        .expect("fixture should generate")
        .code
}

/// Build the layout and resolver inputs, panicking on failure.
pub fn layout(extraction: &EnumExtraction, config: &GenerationConfig) -> EnumLayout {
    EnumLayout::build(extraction, config).expect("fixture should analyze")
}

/// Run `f` against a resolver for the fixture.
pub fn with_resolver<R>(
    extraction: &EnumExtraction,
    config: &GenerationConfig,
    f: impl FnOnce(&Resolver<'_>) -> R,
) -> R {
    let layout = layout(extraction, config);
    let resolver = Resolver::new(&layout, config);
    f(&resolver)
}
