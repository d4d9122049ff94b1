/// Fixed parameters of the warrior's policy.
///
/// These are part of the policy itself rather than tunables: changing one
/// changes which action a given turn produces, so they are compile-time
/// constants and never read from the environment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PolicyConfig;

impl PolicyConfig {
    /// Health of an unhurt warrior. Resting stops once this is reached.
    pub const MAX_HEALTH: u32 = 20;

    /// At or below this health an idle warrior starts resting.
    pub const REST_THRESHOLD: u32 = 10;

    /// At or below this health a warrior taking damage backs out of the fight.
    pub const RETREAT_THRESHOLD: u32 = 10;

    /// Number of cells behind that must be free of enemies before retreating.
    pub const RETREAT_WINDOW: usize = 2;

    /// Unit code of the archer, the only ranged enemy.
    pub const ARCHER: char = 'a';
}
