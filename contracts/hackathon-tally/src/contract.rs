#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Order, Response, StdError, StdResult,
};
use cw2::set_contract_version;
use cw_storage_plus::Bound;

use crate::error::ContractError;
use crate::msg::{
    ExecuteMsg, InstantiateMsg, ProjectListResponse, ProjectResponse, QueryMsg,
};
use crate::state::{next_id, Project, PROJECTS};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:hackathon-tally";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: InstantiateMsg,
) -> StdResult<Response> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::default())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::NewProject { title } => execute_new_project(deps, info, title),
        ExecuteMsg::Rate { project_id, rating } => execute_rate(deps, info, project_id, rating),
    }
}

pub fn execute_new_project(
    deps: DepsMut,
    info: MessageInfo,
    title: String,
) -> Result<Response, ContractError> {
    if title.trim().is_empty() {
        return Err(ContractError::EmptyTitle {});
    }

    let project = Project {
        title,
        rating_sum: 0,
        rating_count: 0,
    };
    let id = next_id(deps.storage)?;
    PROJECTS.save(deps.storage, id, &project)?;

    Ok(Response::new()
        .add_attribute("action", "new_project")
        .add_attribute("sender", info.sender)
        .add_attribute("project_id", id.to_string()))
}

pub fn execute_rate(
    deps: DepsMut,
    info: MessageInfo,
    project_id: u64,
    rating: u64,
) -> Result<Response, ContractError> {
    let updated = PROJECTS.update(deps.storage, project_id, |project| match project {
        None => Err(ContractError::NotFound { id: project_id }),
        Some(mut project) => {
            project.rating_sum += rating;
            project.rating_count += 1;
            Ok(project)
        }
    })?;

    Ok(Response::new()
        .add_attribute("action", "rate")
        .add_attribute("sender", info.sender)
        .add_attribute("project_id", project_id.to_string())
        .add_attribute("ratings", updated.rating_count.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Winner {} => to_binary(&query_winner(deps)?),
        QueryMsg::Project { id } => to_binary(&query_project(deps, id)?),
        QueryMsg::ListProjects { start_after, limit } => {
            to_binary(&list_projects(deps, start_after, limit)?)
        }
    }
}

fn query_winner(deps: Deps) -> StdResult<ProjectResponse> {
    let mut winner: Option<(u64, Project)> = None;
    for item in PROJECTS.range(deps.storage, None, None, Order::Ascending) {
        let (id, project) = item?;
        let leading = match &winner {
            Some((_, best)) => project.beats(best),
            None => true,
        };
        if leading {
            winner = Some((id, project));
        }
    }
    let (id, project) = winner.ok_or_else(|| StdError::generic_err("no projects registered"))?;
    Ok(map_project(id, project))
}

fn query_project(deps: Deps, id: u64) -> StdResult<ProjectResponse> {
    let project = PROJECTS.load(deps.storage, id)?;
    Ok(map_project(id, project))
}

fn map_project(id: u64, project: Project) -> ProjectResponse {
    ProjectResponse {
        id,
        title: project.title,
        rating_sum: project.rating_sum,
        rating_count: project.rating_count,
    }
}

// settings for pagination
const MAX_LIMIT: u32 = 30;
const DEFAULT_LIMIT: u32 = 10;

fn list_projects(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<ProjectListResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);
    let projects: StdResult<Vec<_>> = PROJECTS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(id, project)| map_project(id, project)))
        .collect();

    Ok(ProjectListResponse {
        projects: projects?,
    })
}
