//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 204 No Content (the update was a no-op)
            Self::NothingToModify => StatusCode::NO_CONTENT,

            // 404 Not Found
            Self::NotFound
            | Self::IngredientNotFound
            | Self::ProductNotFound
            | Self::OrderNotFound
            | Self::NoOrders => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::AlreadyExists
            | Self::IngredientAlreadyExists
            | Self::ProductAlreadyExists
            | Self::InventoryConflict
            | Self::IngredientInUse
            | Self::MenuConflict
            | Self::OrderConflict
            | Self::OrderAlreadyClosed
            | Self::OrderInvalidStatus
            | Self::OrderIdMalformed => StatusCode::CONFLICT,

            // 405 Method Not Allowed
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,

            // 415 Unsupported Media Type
            Self::UnsupportedContentType => StatusCode::UNSUPPORTED_MEDIA_TYPE,

            // 500 Internal Server Error
            Self::Unknown | Self::InternalError | Self::StoreUnavailable | Self::ConfigError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // 400 Bad Request (default for validation/business errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        assert_eq!(ErrorCode::NotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::IngredientNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ErrorCode::OrderNotFound.http_status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_status() {
        assert_eq!(
            ErrorCode::IngredientAlreadyExists.http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(ErrorCode::MenuConflict.http_status(), StatusCode::CONFLICT);
        assert_eq!(ErrorCode::IngredientInUse.http_status(), StatusCode::CONFLICT);
        assert_eq!(
            ErrorCode::OrderAlreadyClosed.http_status(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_nothing_to_modify_is_no_content() {
        assert_eq!(
            ErrorCode::NothingToModify.http_status(),
            StatusCode::NO_CONTENT
        );
    }

    #[test]
    fn test_bad_request_status() {
        assert_eq!(
            ErrorCode::ValidationFailed.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::InsufficientStock.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ErrorCode::OrderEmpty.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::RecipeInvalid.http_status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_system_status() {
        assert_eq!(
            ErrorCode::StoreUnavailable.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ErrorCode::UnsupportedContentType.http_status(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
        assert_eq!(
            ErrorCode::MethodNotAllowed.http_status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }
}
