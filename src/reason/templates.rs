//! Local mic-drop reason generator

use rand::seq::SliceRandom;
use rand::Rng;

pub const ADJECTIVES: [&str; 20] = [
    "brilliant",
    "charismatic",
    "dynamic",
    "innovative",
    "inspiring",
    "legendary",
    "magnificent",
    "outstanding",
    "phenomenal",
    "remarkable",
    "spectacular",
    "unstoppable",
    "visionary",
    "witty",
    "zealous",
    "amazing",
    "creative",
    "energetic",
    "fantastic",
    "incredible",
];

/// `{name}` and `{adjective}` are substituted
pub const TEMPLATES: [&str; 8] = [
    "{name} is absolutely {adjective} and ready to blow everyone's minds! 🤯",
    "The {adjective} {name} has been chosen by the presentation gods! ⚡",
    "{name}'s {adjective} energy is exactly what we need right now! 🔥",
    "Time for {name} to unleash their {adjective} superpowers! 💫",
    "The incredibly {adjective} {name} is destined for mic greatness! 🎤",
    "{name} brings that {adjective} magic we've all been waiting for! ✨",
    "Our {adjective} champion {name} is ready to steal the show! 🌟",
    "{name}'s {adjective} brilliance cannot be contained any longer! 💎",
];

/// One random template filled with one random adjective
pub fn fallback_reason<R: Rng + ?Sized>(presenter: &str, rng: &mut R) -> String {
    let adjective = ADJECTIVES.choose(&mut *rng).copied().unwrap_or("brilliant");
    let template = TEMPLATES.choose(&mut *rng).copied().unwrap_or(TEMPLATES[0]);

    // Name last, so placeholder text inside a name is kept literally
    template
        .replace("{adjective}", adjective)
        .replace("{name}", presenter)
}
