//! Known GPU chips, most specific model first.
//!
//! Matching is by substring over a squashed name (lowercase, no spaces or
//! hyphens), so `"rtx 4060"` would also match an RTX 4060 Ti. Every variant
//! therefore sits above its base model, and the older-generation catch-alls
//! sit at the very end. Reordering rows changes scores.

use super::gpu::GpuGeneration;

pub(super) struct Chip {
    pub pattern: &'static str,
    pub points: u32,
    pub generation: GpuGeneration,
}

const fn current(pattern: &'static str, points: u32) -> Chip {
    Chip {
        pattern,
        points,
        generation: GpuGeneration::Current,
    }
}

const fn older(pattern: &'static str, points: u32) -> Chip {
    Chip {
        pattern,
        points,
        generation: GpuGeneration::Older,
    }
}

pub(super) const CHIPS: &[Chip] = &[
    current("rtx 5090", 35),
    current("rtx 4090", 35),
    current("rtx 5080", 33),
    current("rx 7900 xtx", 33),
    current("rtx 4080 super", 33),
    current("rtx 4080", 32),
    current("rx 7900 xt", 31),
    current("rtx 5070 ti", 31),
    current("rx 9070 xt", 30),
    current("rtx 4070 ti super", 30),
    current("rtx 4070 ti", 29),
    current("rtx 3090 ti", 29),
    current("rtx 3090", 28),
    current("rx 9070", 28),
    current("rtx 5070", 28),
    current("rtx 4070 super", 28),
    current("rx 7900 gre", 27),
    current("rx 7800 xt", 27),
    current("rtx 3080 ti", 27),
    current("rtx 4070", 26),
    current("rtx 3080", 26),
    current("rx 6950 xt", 26),
    current("rx 6900 xt", 25),
    current("rx 7700 xt", 24),
    current("rx 6800 xt", 24),
    current("rx 6800", 23),
    current("rtx 5060 ti", 23),
    current("rtx 3070 ti", 23),
    current("rtx 3070", 22),
    current("rtx 4060 ti", 22),
    current("rx 6750 xt", 21),
    current("rx 6700 xt", 20),
    current("rtx 3060 ti", 20),
    current("rtx 5060", 20),
    current("arc b580", 19),
    current("rtx 4060", 19),
    current("rx 7600 xt", 19),
    current("rx 7600", 18),
    current("rtx 2080 ti", 18),
    current("arc a770", 17),
    current("rtx 3060", 17),
    current("rx 6650 xt", 17),
    current("rx 6600 xt", 16),
    current("rtx 2080 super", 16),
    current("rx 6600", 15),
    current("arc a750", 15),
    current("rtx 2080", 15),
    current("rtx 2070 super", 15),
    current("rtx 2070", 14),
    current("rtx 2060 super", 14),
    current("rtx 3050", 13),
    current("rtx 2060", 12),
    current("arc a580", 12),
    current("gtx 1660 ti", 11),
    current("gtx 1660 super", 11),
    current("gtx 1660", 10),
    current("rx 6500 xt", 8),
    current("gtx 1650", 8),
    current("arc a380", 7),
    current("rx 6400", 6),
    // Older generations. Keep below every named model.
    older("gtx", 5),
    older("rx 5", 5),
    older("rx 4", 5),
    older("vega", 5),
    older("radeon r9", 4),
    older("radeon r7", 4),
];

/// Points for a GPU that matches no row; unknown is not the same as old.
pub(super) const UNRECOGNIZED_POINTS: u32 = 10;

fn squash(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// First chip row whose pattern appears in `name`.
pub(super) fn lookup(name: &str) -> Option<&'static Chip> {
    let haystack = squash(name);
    if haystack.is_empty() {
        return None;
    }
    CHIPS.iter().find(|c| haystack.contains(&squash(c.pattern)))
}

#[cfg(test)]
#[path = "gpu_chips_test.rs"]
mod tests;
