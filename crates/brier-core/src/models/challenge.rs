use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeCadence {
    Daily,
    Weekly,
}

/// Identity of a catalog challenge. Serialized in snake case, e.g. `first_pred`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ChallengeId {
    FirstPred,
    ResolveOne,
    BeHonest,
    FivePred,
    PerfectWeek,
    AllCats,
}

/// A gamification goal worth experience points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Challenge {
    pub id: ChallengeId,
    pub name: String,
    pub cadence: ChallengeCadence,
    pub xp: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChallengeStatus {
    pub challenge: Challenge,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChallengeProgress {
    pub challenges: Vec<ChallengeStatus>,
    /// XP summed over completed challenges.
    pub total_xp: u32,
    pub streak: u32,
}
