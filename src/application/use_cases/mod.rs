//! Use case implementations.

mod create_proposal_use_case;
mod submit_project_use_case;

pub use create_proposal_use_case::{CreateProposalUseCase, TITLE_MAX};
pub use submit_project_use_case::{
    GOAL_MIN_XRP, SHORT_DESCRIPTION_MAX, SubmitProjectUseCase, validate_classic_address,
};
