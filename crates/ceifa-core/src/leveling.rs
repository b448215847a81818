//! The leveling table (levels 1-10).
//!
//! Each level grants point pools for the sheet's point-buy and flat
//! resource bonuses that feed the derived max HP/AL/ST.

use crate::error::{CoreError, CoreResult};

/// Highest level in the table.
pub const MAX_LEVEL: u8 = 10;

/// Point pools and resource bonuses granted at one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelData {
    /// XP cost to reach this level.
    pub xp_cost: i32,
    /// Attribute points granted.
    pub attr_points: i32,
    /// Per-attribute cap at this level.
    pub attr_limit: i32,
    /// Skill points granted.
    pub skill_points: i32,
    /// Per-skill cap at this level.
    pub skill_limit: i32,
    /// Vantage points granted.
    pub vantage_points: i32,
    /// Flat max-HP bonus.
    pub hp_bonus: i32,
    /// Flat max-AL bonus.
    pub al_bonus: i32,
    /// Flat max-ST bonus.
    pub st_bonus: i32,
    /// Extra free attribute points.
    pub extra_attr: i32,
}

const fn row(
    xp_cost: i32,
    attr_points: i32,
    attr_limit: i32,
    skill_points: i32,
    skill_limit: i32,
    vantage_points: i32,
    hp_bonus: i32,
    al_bonus: i32,
    st_bonus: i32,
    extra_attr: i32,
) -> LevelData {
    LevelData {
        xp_cost,
        attr_points,
        attr_limit,
        skill_points,
        skill_limit,
        vantage_points,
        hp_bonus,
        al_bonus,
        st_bonus,
        extra_attr,
    }
}

static TABLE: [LevelData; 10] = [
    row(0, 8, 2, 12, 2, 12, 0, 0, 0, 0),
    row(200, 0, 2, 12, 3, 0, 30, 15, 15, 0),
    row(300, 6, 3, 5, 3, 3, 0, 0, 0, 0),
    row(400, 0, 3, 12, 4, 0, 30, 15, 15, 0),
    row(500, 8, 5, 8, 5, 3, 0, 0, 0, 0),
    row(600, 0, 5, 20, 6, 0, 30, 15, 15, 0),
    row(700, 10, 7, 8, 7, 3, 0, 0, 0, 0),
    row(800, 0, 7, 20, 8, 0, 30, 15, 15, 1),
    row(900, 8, 9, 8, 9, 3, 0, 0, 0, 0),
    row(1000, 10, 10, 15, 10, 6, 50, 30, 45, 1),
];

/// Data for a single level.
pub fn level_data(level: u8) -> CoreResult<&'static LevelData> {
    if level == 0 || level > MAX_LEVEL {
        return Err(CoreError::InvalidLevel(level));
    }
    Ok(&TABLE[usize::from(level) - 1])
}

/// Cumulative (hp, al, st) bonuses from level 1 through `level`.
///
/// Levels beyond the table contribute nothing extra; level 0 grants
/// nothing. Mirrors the forgiving sheet arithmetic rather than erroring.
pub fn cumulative_resource_bonuses(level: u8) -> (i32, i32, i32) {
    let top = usize::from(level.min(MAX_LEVEL));
    TABLE[..top].iter().fold((0, 0, 0), |(hp, al, st), data| {
        (hp + data.hp_bonus, al + data.al_bonus, st + data.st_bonus)
    })
}

/// Cumulative (attribute, skill, vantage) point pools through `level`.
pub fn cumulative_point_pools(level: u8) -> (i32, i32, i32) {
    let top = usize::from(level.min(MAX_LEVEL));
    TABLE[..top]
        .iter()
        .fold((0, 0, 0), |(attr, skill, vant), data| {
            (
                attr + data.attr_points,
                skill + data.skill_points,
                vant + data.vantage_points,
            )
        })
}
