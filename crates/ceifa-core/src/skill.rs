//! The skill catalog, grouped the way the sheet presents it.

/// Skill names by group: Físico, Mental, Social, Técnico.
pub const SKILL_GROUPS: [(&str, [&str; 5]); 4] = [
    (
        "Físico",
        [
            "Atletismo",
            "Acrobacia",
            "Vitalidade",
            "Furtividade",
            "Resistência",
        ],
    ),
    (
        "Mental",
        [
            "Intuição",
            "Sabedoria",
            "Tenacidade",
            "Observação",
            "Investigação",
        ],
    ),
    (
        "Social",
        [
            "Enganação",
            "Diplomacia",
            "Adestração",
            "Negociação",
            "Intimidação",
        ],
    ),
    (
        "Técnico",
        ["Runas", "Alquimia", "Medicina", "Geografia", "Engenharia"],
    ),
];

/// Iterate over every skill name in catalog order.
pub fn all_skills() -> impl Iterator<Item = &'static str> {
    SKILL_GROUPS.iter().flat_map(|(_, skills)| skills.iter().copied())
}

/// Returns true if the name is in the skill catalog.
pub fn is_known_skill(name: &str) -> bool {
    all_skills().any(|s| s == name)
}
