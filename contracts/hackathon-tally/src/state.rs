use cosmwasm_schema::cw_serde;
use cosmwasm_std::{StdResult, Storage};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Project {
    pub title: String,
    /// Sum and count of all ratings received; the average is never
    /// materialized so no precision is lost.
    pub rating_sum: u64,
    pub rating_count: u64,
}

impl Project {
    /// Average rating as a numerator/denominator pair. An unrated project
    /// averages 0 (denominator normalized to 1 so comparisons stay sane).
    pub fn average(&self) -> (u64, u64) {
        (self.rating_sum, self.rating_count.max(1))
    }

    /// Strictly higher average than `other`, compared by cross
    /// multiplication.
    pub fn beats(&self, other: &Project) -> bool {
        let (a_num, a_den) = self.average();
        let (b_num, b_den) = other.average();
        (a_num as u128) * (b_den as u128) > (b_num as u128) * (a_den as u128)
    }
}

pub const PROJECT_COUNT: Item<u64> = Item::new("project_count");
pub const PROJECTS: Map<u64, Project> = Map::new("projects");

/// Assigns ids 0, 1, 2, ... with no gaps.
pub fn next_id(store: &mut dyn Storage) -> StdResult<u64> {
    let id = PROJECT_COUNT.may_load(store)?.unwrap_or_default();
    PROJECT_COUNT.save(store, &(id + 1))?;
    Ok(id)
}
