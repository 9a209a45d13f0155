use super::entity::{CreateSupplierPayload, UpdateSupplierPayload};
use crate::core::common::pagination::PaginationParams;
use crate::core::common::result::{ApiResult, Failure};
use crate::utils::validation::require;

pub const ID_REQUIRED: &str = "Supplier ID is required";
pub const PAGE_MESSAGE: &str = "Page must be greater than 0";

pub fn validate_list(params: &PaginationParams) -> ApiResult<()> {
    params.validate(PAGE_MESSAGE)
}

pub fn validate_id(id: &str) -> ApiResult<()> {
    require(id, ID_REQUIRED)
}

pub fn validate_create(payload: &CreateSupplierPayload) -> ApiResult<()> {
    require(&payload.company_name, "Company name is required")?;
    require(&payload.email, "Email is required")?;
    require(&payload.phone, "Phone number is required")?;
    Ok(())
}

pub fn validate_update(payload: &UpdateSupplierPayload) -> ApiResult<()> {
    validate_id(&payload.id)?;
    if !payload.has_changes() {
        return Err(Failure::validation(
            "At least one field to update is required",
        ));
    }
    Ok(())
}
