use super::entity::{CreateCustomerPayload, UpdateCustomerPayload};
use crate::core::common::pagination::PaginationParams;
use crate::core::common::result::{ApiResult, Failure};
use crate::utils::validation::{is_valid_email, require, require_if_present};

pub const ID_REQUIRED: &str = "Customer ID is required";
pub const PAGE_MESSAGE: &str = "Page must be at least 1";

pub fn validate_list(params: &PaginationParams) -> ApiResult<()> {
    params.validate(PAGE_MESSAGE)
}

pub fn validate_id(id: &str) -> ApiResult<()> {
    require(id, ID_REQUIRED)
}

pub fn validate_create(payload: &CreateCustomerPayload) -> ApiResult<()> {
    require(&payload.full_name, "Full name is required")?;
    require(&payload.email, "Email is required")?;
    if !is_valid_email(&payload.email) {
        return Err(Failure::validation("Invalid email format"));
    }
    require(&payload.phone, "Phone is required")?;
    require(&payload.address, "Address is required")?;
    Ok(())
}

pub fn validate_update(payload: &UpdateCustomerPayload) -> ApiResult<()> {
    validate_id(&payload.id)?;
    if let Some(email) = payload.email.as_deref() {
        require(email, "Email cannot be empty")?;
        if !is_valid_email(email) {
            return Err(Failure::validation("Invalid email format"));
        }
    }
    require_if_present(payload.full_name.as_deref(), "Full name cannot be empty")?;
    Ok(())
}
