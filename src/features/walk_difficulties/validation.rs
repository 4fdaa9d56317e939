use crate::core::error::Result;
use crate::features::walk_difficulties::dtos::{AddWalkDifficultyDto, UpdateWalkDifficultyDto};
use crate::shared::validation::{field_errors, require_payload};

pub fn validate_add_walk_difficulty(
    payload: Option<AddWalkDifficultyDto>,
) -> Result<AddWalkDifficultyDto> {
    let dto = require_payload(payload, "Add Walk Difficulty Data is required.")?;
    field_errors(&dto).into_result()?;
    Ok(dto)
}

pub fn validate_update_walk_difficulty(
    payload: Option<UpdateWalkDifficultyDto>,
) -> Result<UpdateWalkDifficultyDto> {
    let dto = require_payload(payload, "Update Walk Difficulty Data is required.")?;
    field_errors(&dto).into_result()?;
    Ok(dto)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::shared::validation::PAYLOAD_FIELD;

    #[test]
    fn test_missing_payload_does_not_inspect_fields() {
        match validate_add_walk_difficulty(None) {
            Err(AppError::Validation(errors)) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(
                    errors.get(PAYLOAD_FIELD),
                    Some(&["Add Walk Difficulty Data is required.".to_string()][..])
                );
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_code() {
        for code in ["", "  "] {
            let dto = UpdateWalkDifficultyDto {
                code: code.to_string(),
            };
            match validate_update_walk_difficulty(Some(dto)) {
                Err(AppError::Validation(errors)) => assert_eq!(
                    errors.get("code"),
                    Some(&["Code cannot be null or empty or white space.".to_string()][..])
                ),
                other => panic!("expected validation error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_valid_code() {
        let dto = AddWalkDifficultyDto {
            code: "Easy".to_string(),
        };
        assert_eq!(validate_add_walk_difficulty(Some(dto)).unwrap().code, "Easy");
    }
}
