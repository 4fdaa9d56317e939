use crate::core::error::Result;
use crate::features::regions::dtos::{AddRegionDto, UpdateRegionDto};
use crate::shared::validation::{field_errors, require_payload};

pub fn validate_add_region(payload: Option<AddRegionDto>) -> Result<AddRegionDto> {
    let dto = require_payload(payload, "Add Region Data is required.")?;
    field_errors(&dto).into_result()?;
    Ok(dto)
}

pub fn validate_update_region(payload: Option<UpdateRegionDto>) -> Result<UpdateRegionDto> {
    let dto = require_payload(payload, "Update Region Data is required.")?;
    field_errors(&dto).into_result()?;
    Ok(dto)
}
