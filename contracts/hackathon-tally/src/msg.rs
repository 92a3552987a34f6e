use cosmwasm_schema::{cw_serde, QueryResponses};

#[cw_serde]
pub struct InstantiateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    /// Register a new project under the next sequential id.
    NewProject { title: String },
    /// Add one rating to an existing project.
    Rate { project_id: u64, rating: u64 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// The project with the highest average rating (earliest id wins
    /// ties). Errors if no project was registered yet.
    #[returns(ProjectResponse)]
    Winner {},
    #[returns(ProjectResponse)]
    Project { id: u64 },
    #[returns(ProjectListResponse)]
    ListProjects {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct ProjectResponse {
    pub id: u64,
    pub title: String,
    pub rating_sum: u64,
    pub rating_count: u64,
}

#[cw_serde]
pub struct ProjectListResponse {
    pub projects: Vec<ProjectResponse>,
}
