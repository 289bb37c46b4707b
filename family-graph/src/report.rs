//! Result types returned by [`FamilyService`](crate::FamilyService).

use std::collections::BTreeMap;

use family_shared::types::{FamilyGroup, TeamId};
use serde::Serialize;

use crate::{Cohort, DataQualityWarning};

/// Number of families on a team and its cohort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilyCount {
    pub team_id: TeamId,
    pub count: usize,
    pub cohort: Cohort,
}

impl FamilyCount {
    pub fn new(team_id: TeamId, count: usize) -> Self {
        Self {
            team_id,
            count,
            cohort: Cohort::from_count(count),
        }
    }

    pub fn cohort_label(&self) -> &'static str {
        self.cohort.label()
    }
}

/// Full outcome of resolving one team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilyReport {
    pub team_id: TeamId,
    /// Participating memberships on the roster.
    pub member_count: usize,
    pub groups: Vec<FamilyGroup>,
    pub warnings: Vec<DataQualityWarning>,
}

impl FamilyReport {
    pub fn empty(team_id: TeamId) -> Self {
        Self {
            team_id,
            member_count: 0,
            groups: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn count(&self) -> usize {
        self.groups.len()
    }

    pub fn cohort(&self) -> Cohort {
        Cohort::from_count(self.count())
    }

    pub fn to_count(&self) -> FamilyCount {
        FamilyCount::new(self.team_id, self.count())
    }
}

/// Teams tallied per cohort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CohortDistribution {
    pub teams: Vec<FamilyCount>,
    buckets: BTreeMap<Cohort, usize>,
}

impl Default for CohortDistribution {
    fn default() -> Self {
        Self {
            teams: Vec::new(),
            buckets: Cohort::ALL.iter().map(|c| (*c, 0)).collect(),
        }
    }
}

impl CohortDistribution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, count: FamilyCount) {
        *self.buckets.entry(count.cohort).or_insert(0) += 1;
        self.teams.push(count);
    }

    /// Every cohort in display order, including empty ones.
    pub fn buckets(&self) -> impl Iterator<Item = (Cohort, usize)> + '_ {
        Cohort::ALL
            .iter()
            .map(|c| (*c, self.buckets.get(c).copied().unwrap_or(0)))
    }

    pub fn teams_in(&self, cohort: Cohort) -> usize {
        self.buckets.get(&cohort).copied().unwrap_or(0)
    }

    pub fn total_teams(&self) -> usize {
        self.teams.len()
    }
}

impl FromIterator<FamilyCount> for CohortDistribution {
    fn from_iter<I: IntoIterator<Item = FamilyCount>>(iter: I) -> Self {
        let mut distribution = Self::new();
        for count in iter {
            distribution.record(count);
        }
        distribution
    }
}
